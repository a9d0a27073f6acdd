//! Lifecycle commands for handlers, lamp shows and animations
//!
//! A handler or show is started with its `0` code and told to quiesce with
//! its `255` code. Each family keeps its own sentinels; the shared numbers
//! carry no meaning across families.

define_codes! {
    /// Commands sent to a rule handler
    pub enum HandlerCommand in Handler {
        /// Start the handler
        Start = 0 => "START_HANDLER",
        /// Shut down timers, switch off lamps and stop
        Quit = 255 => "QUIT_HANDLER",
    }
}

define_codes! {
    /// Commands sent to a running lamp show
    pub enum ShowCommand in Show {
        Start = 0 => "START_SHOW",
        Quit = 255 => "QUIT_SHOW",
    }
}

define_codes! {
    /// Phase of a display animation
    pub enum AnimationPhase in AnimationPhase {
        Start = 0 => "ANIMATION_START",
        End = 1 => "ANIMATION_END",
    }
}

impl HandlerCommand {
    /// Check if this command starts the handler
    pub const fn is_start(self) -> bool {
        matches!(self, HandlerCommand::Start)
    }

    /// Check if this command shuts the handler down
    pub const fn is_quit(self) -> bool {
        matches!(self, HandlerCommand::Quit)
    }
}

impl ShowCommand {
    /// Check if this command starts the show
    pub const fn is_start(self) -> bool {
        matches!(self, ShowCommand::Start)
    }

    /// Check if this command stops the show
    pub const fn is_quit(self) -> bool {
        matches!(self, ShowCommand::Quit)
    }
}

impl AnimationPhase {
    /// Check if this phase starts the animation
    pub const fn is_start(self) -> bool {
        matches!(self, AnimationPhase::Start)
    }

    /// Check if this phase ends the animation
    pub const fn is_end(self) -> bool {
        matches!(self, AnimationPhase::End)
    }
}
