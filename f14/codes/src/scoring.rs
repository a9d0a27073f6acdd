//! Bonus, award and kill-scoring events

define_codes! {
    pub enum AwardEvent in Award {
        Bonus = 0 => "AWARD_BONUS",
    }
}

define_codes! {
    /// End-of-ball bonus handler events
    pub enum BonusEvent in Bonus {
        Increment = 0 => "BONUS_INCREMENT",
        MultIncrement = 1 => "BONUS_MULT_INCREMENT",
        LampRefresh = 2 => "BONUS_LAMP_REFRESH",
    }
}

define_codes! {
    /// Launch bonus events
    ///
    /// 0 and 2 are unassigned.
    pub enum LaunchBonusEvent in LaunchBonus {
        Score = 1 => "LAUNCH_BONUS_SCORE",
        LampStrobe = 3 => "LAUNCH_BONUS_LAMP_STROBE",
        Reset = 4 => "LAUNCH_BONUS_RESET",
    }
}

define_codes! {
    /// Line-of-death kill targets
    pub enum LineOfDeathEvent in LineOfDeath {
        Hit = 0 => "LINE_OF_DEATH_HIT",
        AwardKill = 1 => "AWARD_KILL",
        ResetKillLamps = 2 => "RESET_KILL_LAMPS",
        Strobe = 3 => "LINE_OF_DEATH_STROBE",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_bonus_gaps() {
        assert_eq!(LaunchBonusEvent::from_raw(0), None);
        assert_eq!(LaunchBonusEvent::from_raw(1), Some(LaunchBonusEvent::Score));
        assert_eq!(LaunchBonusEvent::from_raw(2), None);
        assert_eq!(LaunchBonusEvent::from_raw(4), Some(LaunchBonusEvent::Reset));
    }

    #[test]
    fn test_kill_codes_keep_their_names() {
        assert_eq!(LineOfDeathEvent::AwardKill.symbol(), "AWARD_KILL");
        assert_eq!(LineOfDeathEvent::ResetKillLamps.symbol(), "RESET_KILL_LAMPS");
        assert_eq!(AwardEvent::Bonus.raw(), LineOfDeathEvent::Hit.raw());
    }
}
