//! Switch and lighting events of the playfield features

define_codes! {
    /// Spinner handler events
    pub enum SpinnerEvent in Spinner {
        Hit = 0 => "SPINNER_HIT",
        Light = 1 => "SPINNER_LIGHT",
        Reset = 2 => "SPINNER_RESET",
    }
}

define_codes! {
    /// Rescue drop-target events
    pub enum RescueTargetEvent in RescueTarget {
        LeftHit = 2 => "RESCUE_TARGET_LEFT_HIT",
        RightHit = 3 => "RESCUE_TARGET_RIGHT_HIT",
        LeftLight = 4 => "RESCUE_TARGET_LEFT_LIGHT",
        RightLight = 5 => "RESCUE_TARGET_RIGHT_LIGHT",
    }
}

define_codes! {
    /// Outlane rescue (ball save) events
    ///
    /// Shares values with [`RescueTargetEvent`]; the two are separate handlers.
    pub enum RescueEvent in Rescue {
        OutlaneSwitchHit = 1 => "RESCUE_OUTLANE_SWITCH_HIT",
        GracePeriodTimedOut = 2 => "RESCUE_GRACE_PERIOD_TIMEDOUT",
    }
}

define_codes! {
    /// Vertical up-kicker events
    pub enum VukEvent in Vuk {
        BallCaptured = 0 => "VUK_BALL_CAPTURED",
        PlayFlashers = 1 => "VUK_PLAY_FLASHERS",
        Eject = 2 => "VUK_EJECT",
        CallFromLaunchBonus = 3 => "VUK_CALL_FROM_LAUNCH_BONUS",
        /// Debounce timer for a chattering capture switch expired
        NoisySwitchTimeout = 4 => "VUK_NOISY_SWITCH_TIMEOUT",
    }
}

define_codes! {
    /// Orbit lane events
    ///
    /// 8 is unassigned.
    pub enum OrbitEvent in Orbit {
        RightSwitchHit = 0 => "ORBIT_RIGHT_SWITCH_HIT",
        LeftSwitchHit = 1 => "ORBIT_LEFT_SWITCH_HIT",
        LightRightSideBonus = 2 => "ORBIT_LIGHT_RIGHT_SIDE_BONUS",
        LightLeftSideBonus = 3 => "ORBIT_LIGHT_LEFT_SIDE_BONUS",
        LightBothSideBonus = 4 => "ORBIT_LIGHT_BOTH_SIDE_BONUS",
        BonusXTimedOut = 5 => "ORBIT_BONUSX_TIMED_OUT",
        Made = 6 => "ORBIT_MADE",
        Reset = 7 => "ORBIT_RESET",
        AntiClockTimeout = 9 => "ORBIT_ANTI_CLOCK_TIMEOUT",
        ClockTimeout = 10 => "ORBIT_CLOCK_TIMEOUT",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Code, CodeError, Group};

    #[test]
    fn test_rescue_groups_overlap() {
        assert_eq!(RescueTargetEvent::LeftHit.raw(), 2);
        assert_eq!(RescueEvent::GracePeriodTimedOut.raw(), 2);
        assert_ne!(RescueTargetEvent::GROUP, RescueEvent::GROUP);
    }

    #[test]
    fn test_orbit_gap() {
        assert_eq!(OrbitEvent::from_raw(7), Some(OrbitEvent::Reset));
        assert_eq!(OrbitEvent::from_raw(8), None);
        assert_eq!(OrbitEvent::from_raw(9), Some(OrbitEvent::AntiClockTimeout));
        assert_eq!(
            OrbitEvent::try_from(8),
            Err(CodeError::UnknownCode { group: Group::Orbit, value: 8 })
        );
    }

    #[test]
    fn test_vuk_sequence() {
        let raw: [u8; 5] = [0, 1, 2, 3, 4];
        for (code, value) in VukEvent::ALL.iter().zip(raw) {
            assert_eq!(code.raw(), value);
        }
    }
}
