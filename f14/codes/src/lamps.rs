//! Lamp-show and display animation identifiers

define_codes! {
    /// Lamp show selected when a show is started
    pub enum LampShow in LampShow {
        Rotate = 0 => "LAMP_SHOW_ROTATE",
        UpDown = 1 => "LAMP_SHOW_UPDOWN",
        Pulse = 2 => "LAMP_SHOW_PULSE",
        Twinkle = 3 => "LAMP_SHOW_TWINKLE",
    }
}

define_codes! {
    /// Display animation played by the sequencer
    pub enum Animation in Animation {
        Weapons = 0 => "ANIMATION_WEAPONS",
        BallLocked = 1 => "ANIMATION_BALL_LOCKED",
        LockIsLit = 2 => "ANIMATION_LOCK_IS_LIT",
        StartMultiball = 3 => "ANIMATION_START_MULTIBALL",
        LaunchBonus = 4 => "ANIMATION_LAUNCH_BONUS",
        SafeLanding = 5 => "ANIMATION_SAFE_LANDING",
    }
}
