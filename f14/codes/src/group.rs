//! Catalogue of code groups
//!
//! A group is one dispatch context: the handler or routine that interprets
//! the codes. Values are only meaningful inside their group.

use core::fmt;
use core::str::FromStr;

use crate::{
    AnimationPhase, Animation, AwardEvent, BonusEvent, CodeError, CodeResult, HandlerCommand,
    LampShow, LaunchBonusEvent, LineOfDeathEvent, LockEvent, OrbitEvent, RescueEvent,
    RescueTargetEvent, ShowCommand, SpinnerEvent, Symbol, VukEvent,
};

/// Naming family of a code
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Group {
    Handler,
    LampShow,
    Show,
    Animation,
    AnimationPhase,
    Spinner,
    RescueTarget,
    Rescue,
    Vuk,
    Award,
    Orbit,
    Bonus,
    LaunchBonus,
    LineOfDeath,
    Lock,
}

impl Group {
    /// Every group, in table order
    pub const ALL: [Group; 15] = [
        Group::Handler,
        Group::LampShow,
        Group::Show,
        Group::Animation,
        Group::AnimationPhase,
        Group::Spinner,
        Group::RescueTarget,
        Group::Rescue,
        Group::Vuk,
        Group::Award,
        Group::Orbit,
        Group::Bonus,
        Group::LaunchBonus,
        Group::LineOfDeath,
        Group::Lock,
    ];

    /// Kebab-case group name
    pub const fn name(self) -> &'static str {
        match self {
            Group::Handler => "handler",
            Group::LampShow => "lamp-show",
            Group::Show => "show",
            Group::Animation => "animation",
            Group::AnimationPhase => "animation-phase",
            Group::Spinner => "spinner",
            Group::RescueTarget => "rescue-target",
            Group::Rescue => "rescue",
            Group::Vuk => "vuk",
            Group::Award => "award",
            Group::Orbit => "orbit",
            Group::Bonus => "bonus",
            Group::LaunchBonus => "launch-bonus",
            Group::LineOfDeath => "line-of-death",
            Group::Lock => "lock",
        }
    }

    /// Symbol rows belonging to this group
    pub const fn symbols(self) -> &'static [Symbol] {
        match self {
            Group::Handler => HandlerCommand::SYMBOLS,
            Group::LampShow => LampShow::SYMBOLS,
            Group::Show => ShowCommand::SYMBOLS,
            Group::Animation => Animation::SYMBOLS,
            Group::AnimationPhase => AnimationPhase::SYMBOLS,
            Group::Spinner => SpinnerEvent::SYMBOLS,
            Group::RescueTarget => RescueTargetEvent::SYMBOLS,
            Group::Rescue => RescueEvent::SYMBOLS,
            Group::Vuk => VukEvent::SYMBOLS,
            Group::Award => AwardEvent::SYMBOLS,
            Group::Orbit => OrbitEvent::SYMBOLS,
            Group::Bonus => BonusEvent::SYMBOLS,
            Group::LaunchBonus => LaunchBonusEvent::SYMBOLS,
            Group::LineOfDeath => LineOfDeathEvent::SYMBOLS,
            Group::Lock => LockEvent::SYMBOLS,
        }
    }

    /// Find the symbol this group assigns to a raw value
    pub fn decode(self, value: u8) -> CodeResult<&'static Symbol> {
        self.symbols()
            .iter()
            .find(|symbol| symbol.value == value)
            .ok_or(CodeError::UnknownCode { group: self, value })
    }

    /// Check if the group defines a raw value
    pub fn contains(self, value: u8) -> bool {
        self.decode(value).is_ok()
    }
}

impl FromStr for Group {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Group::ALL
            .iter()
            .copied()
            .find(|group| group.name() == s)
            .ok_or(CodeError::UnknownGroup)
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Group {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=str}", self.name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_names_parse_back() {
        for group in Group::ALL {
            assert_eq!(group.name().parse::<Group>(), Ok(group));
        }
        assert_eq!("ORBIT".parse::<Group>(), Err(CodeError::UnknownGroup));
    }

    #[test]
    fn test_group_decode() {
        let symbol = Group::Orbit.decode(10).unwrap();
        assert_eq!(symbol.name, "ORBIT_CLOCK_TIMEOUT");
        assert_eq!(symbol.group, Group::Orbit);

        assert_eq!(
            Group::Orbit.decode(8),
            Err(CodeError::UnknownCode { group: Group::Orbit, value: 8 })
        );
    }

    #[test]
    fn test_group_contains_gaps() {
        assert!(!Group::LaunchBonus.contains(0));
        assert!(Group::LaunchBonus.contains(1));
        assert!(!Group::LaunchBonus.contains(2));
        assert!(Group::Handler.contains(255));
        assert!(!Group::Handler.contains(1));
    }

    #[test]
    fn test_every_group_has_symbols() {
        for group in Group::ALL {
            assert!(!group.symbols().is_empty());
            assert!(group.symbols().iter().all(|s| s.group == group));
        }
    }
}
