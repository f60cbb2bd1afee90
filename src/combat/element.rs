//! Elements and the directed advantage graph.
//!
//! Each combat element is strong against exactly one element. The graph is neither
//! symmetric nor a single cycle: Earth is hit hard by both Air and Nature, nothing is
//! strong against Air, and Physical is strong against itself.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Element {
    Physical,
    Fire,
    Water,
    Earth,
    Air,
    Lightning,
    Ice,
    Light,
    Dark,
    // Extended ruleset
    Nature,
    Metal,
    Blood,
    Time,
    Arcane,
    // Cosmetic only: enemy flavor, never in the advantage graph
    Gravity,
    Sound,
    Venom,
    Crystal,
    Steam,
    Spirit,
    Cyber,
    Quantum,
    Dream,
}

impl Element {
    /// Elements with abilities, classes and an advantage mapping.
    pub const COMBAT: [Element; 14] = [
        Element::Physical,
        Element::Fire,
        Element::Water,
        Element::Earth,
        Element::Air,
        Element::Lightning,
        Element::Ice,
        Element::Light,
        Element::Dark,
        Element::Nature,
        Element::Metal,
        Element::Blood,
        Element::Time,
        Element::Arcane,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Element::Physical => "Physical",
            Element::Fire => "Fire",
            Element::Water => "Water",
            Element::Earth => "Earth",
            Element::Air => "Air",
            Element::Lightning => "Lightning",
            Element::Ice => "Ice",
            Element::Light => "Light",
            Element::Dark => "Dark",
            Element::Nature => "Nature",
            Element::Metal => "Metal",
            Element::Blood => "Blood",
            Element::Time => "Time",
            Element::Arcane => "Arcane",
            Element::Gravity => "Gravity",
            Element::Sound => "Sound",
            Element::Venom => "Venom",
            Element::Crystal => "Crystal",
            Element::Steam => "Steam",
            Element::Spirit => "Spirit",
            Element::Cyber => "Cyber",
            Element::Quantum => "Quantum",
            Element::Dream => "Dream",
        }
    }

    /// The element this one deals bonus damage against.
    pub fn advantage(self) -> Option<Element> {
        let target = match self {
            Element::Fire => Element::Ice,
            Element::Ice => Element::Nature,
            Element::Nature => Element::Earth,
            Element::Earth => Element::Lightning,
            Element::Lightning => Element::Water,
            Element::Water => Element::Fire,
            Element::Air => Element::Earth,
            Element::Physical => Element::Physical,
            Element::Light => Element::Dark,
            Element::Dark => Element::Time,
            Element::Time => Element::Arcane,
            Element::Arcane => Element::Metal,
            Element::Metal => Element::Blood,
            Element::Blood => Element::Light,
            _ => return None,
        };
        Some(target)
    }

    pub fn is_strong_against(self, defender: Element) -> bool {
        self.advantage() == Some(defender)
    }

    pub fn is_weak_against(self, defender: Element) -> bool {
        defender.advantage() == Some(self)
    }

    pub fn is_cosmetic(self) -> bool {
        self.advantage().is_none()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Element {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Element::COMBAT
            .iter()
            .chain(&[
                Element::Gravity,
                Element::Sound,
                Element::Venom,
                Element::Crystal,
                Element::Steam,
                Element::Spirit,
                Element::Cyber,
                Element::Quantum,
                Element::Dream,
            ])
            .copied()
            .find(|e| e.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_combat_element_has_one_advantage() {
        for element in Element::COMBAT {
            assert!(element.advantage().is_some(), "{element} has no advantage");
        }
    }

    #[test]
    fn test_cosmetic_elements_have_no_advantage() {
        assert!(Element::Dream.is_cosmetic());
        assert!(Element::Gravity.is_cosmetic());
        assert!(!Element::Fire.is_cosmetic());
    }

    #[test]
    fn test_weakness_is_reverse_of_advantage() {
        assert!(Element::Water.is_strong_against(Element::Fire));
        assert!(Element::Fire.is_weak_against(Element::Water));
        // Air beats Earth but nothing beats Air
        assert!(Element::Air.is_strong_against(Element::Earth));
        assert!(Element::COMBAT.iter().all(|e| !e.is_strong_against(Element::Air)));
    }

    #[test]
    fn test_parse_element_names() {
        assert_eq!("fire".parse::<Element>(), Ok(Element::Fire));
        assert_eq!("Lightning".parse::<Element>(), Ok(Element::Lightning));
        assert_eq!("Quantum".parse::<Element>(), Ok(Element::Quantum));
        assert!("Plasma".parse::<Element>().is_err());
    }
}
