//! Ball lock and multiball events

define_codes! {
    /// Ball lock handler events
    ///
    /// The ramp and arrival codes sit in their own ranges (21..=23 and
    /// 30..=32) so they cannot collide with the lock progression codes.
    pub enum LockEvent in Lock {
        EnableLock = 0 => "ENABLE_LOCK",
        LightLock1 = 1 => "LIGHT_LOCK_1",
        LightLock2 = 2 => "LIGHT_LOCK_2",
        LightLock3 = 3 => "LIGHT_LOCK_3",
        LockBallIn1 = 4 => "LOCK_BALL_IN_1",
        LockBallIn2 = 5 => "LOCK_BALL_IN_2",
        LockBallIn3 = 6 => "LOCK_BALL_IN_3",
        ResetBackToLit = 7 => "RESET_BACK_TO_LIT",
        MultiballIntro = 8 => "MULTIBALL_INTRO",
        StartMultiball = 9 => "START_MULTIBALL",
        BallArrivedLock3 = 21 => "BALL_ARRIVED_LOCK_3",
        BallArrivedLock1 = 22 => "BALL_ARRIVED_LOCK_1",
        BallArrivedLock2 = 23 => "BALL_ARRIVED_LOCK_2",
        LowerRampActive = 30 => "LOWER_RAMP_ACTIVE",
        MiddleRampActive = 31 => "MIDDLE_RAMP_ACTIVE",
        UpperRampActive = 32 => "UPPER_RAMP_ACTIVE",
    }
}

impl LockEvent {
    /// Lock slot (1 to 3) a code refers to, if any
    pub const fn slot(self) -> Option<u8> {
        match self {
            LockEvent::LightLock1 | LockEvent::LockBallIn1 | LockEvent::BallArrivedLock1 => Some(1),
            LockEvent::LightLock2 | LockEvent::LockBallIn2 | LockEvent::BallArrivedLock2 => Some(2),
            LockEvent::LightLock3 | LockEvent::LockBallIn3 | LockEvent::BallArrivedLock3 => Some(3),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrival_codes_out_of_order() {
        assert_eq!(LockEvent::BallArrivedLock1.raw(), 22);
        assert_eq!(LockEvent::BallArrivedLock2.raw(), 23);
        assert_eq!(LockEvent::BallArrivedLock3.raw(), 21);
    }

    #[test]
    fn test_lock_slots() {
        assert_eq!(LockEvent::LightLock2.slot(), Some(2));
        assert_eq!(LockEvent::BallArrivedLock3.slot(), Some(3));
        assert_eq!(LockEvent::StartMultiball.slot(), None);
        assert_eq!(LockEvent::UpperRampActive.slot(), None);
    }

    #[test]
    fn test_lock_ranges() {
        for value in 10..=20 {
            assert!(LockEvent::from_raw(value).is_none());
        }
        for value in 24..=29 {
            assert!(LockEvent::from_raw(value).is_none());
        }
    }
}
