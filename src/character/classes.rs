//! Playable classes.

use crate::combat::element::Element;

/// A selectable class: starting stats, element and kit.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterClass {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub base_hp: u32,
    pub base_mp: u32,
    pub element: Element,
    pub icon: &'static str,
    pub starting_abilities: &'static [&'static str],
    pub starting_weapon: &'static str,
    /// Prestige rank needed to pick this class (0 for base classes).
    pub required_prestige: u32,
}

impl CharacterClass {
    pub fn is_prestige_class(&self) -> bool {
        self.required_prestige > 0
    }

    pub fn is_available_at(&self, prestige: u32) -> bool {
        prestige >= self.required_prestige
    }
}

/// Returns all classes: 13 base classes followed by 5 prestige classes.
pub fn all_classes() -> Vec<CharacterClass> {
    vec![
        CharacterClass {
            id: "knight",
            name: "Ember Knight",
            description: "A warrior who channels fire through their blade.",
            base_hp: 150,
            base_mp: 40,
            element: Element::Fire,
            icon: "Shield",
            starting_abilities: &["strike", "ember"],
            starting_weapon: "rusty_sword",
            required_prestige: 0,
        },
        CharacterClass {
            id: "mage",
            name: "Tide Caller",
            description: "A master of water magic.",
            base_hp: 90,
            base_mp: 100,
            element: Element::Water,
            icon: "Sparkles",
            starting_abilities: &["bubble", "heal"],
            starting_weapon: "training_wand",
            required_prestige: 0,
        },
        CharacterClass {
            id: "rogue",
            name: "Ronin",
            description: "A swift wanderer who strikes like the wind.",
            base_hp: 110,
            base_mp: 60,
            element: Element::Air,
            icon: "Feather",
            starting_abilities: &["quick_slash", "gust"],
            starting_weapon: "chipped_dagger",
            required_prestige: 0,
        },
        CharacterClass {
            id: "guardian",
            name: "Stone Guardian",
            description: "Unbreakable defense. High health pool.",
            base_hp: 180,
            base_mp: 30,
            element: Element::Earth,
            icon: "Mountain",
            starting_abilities: &["strike", "pebble"],
            starting_weapon: "heavy_club",
            required_prestige: 0,
        },
        CharacterClass {
            id: "storm",
            name: "Storm Bringer",
            description: "High burst damage, low HP glass cannon.",
            base_hp: 100,
            base_mp: 80,
            element: Element::Lightning,
            icon: "Zap",
            starting_abilities: &["quick_slash", "spark"],
            starting_weapon: "training_wand",
            required_prestige: 0,
        },
        CharacterClass {
            id: "frost",
            name: "Frost Warden",
            description: "Uses ice to control the battlefield.",
            base_hp: 130,
            base_mp: 70,
            element: Element::Ice,
            icon: "Snowflake",
            starting_abilities: &["strike", "ice_shard"],
            starting_weapon: "rusty_sword",
            required_prestige: 0,
        },
        CharacterClass {
            id: "paladin",
            name: "Paladin",
            description: "Holy warrior of the light. Balanced Offense/Defense.",
            base_hp: 160,
            base_mp: 60,
            element: Element::Light,
            icon: "Sun",
            starting_abilities: &["strike", "ray_of_light"],
            starting_weapon: "heavy_club",
            required_prestige: 0,
        },
        CharacterClass {
            id: "necro",
            name: "Necromancer",
            description: "Master of dark arts and life draining.",
            base_hp: 85,
            base_mp: 110,
            element: Element::Dark,
            icon: "Skull",
            starting_abilities: &["gloom", "dark_pulse"],
            starting_weapon: "training_wand",
            required_prestige: 0,
        },
        CharacterClass {
            id: "sylvan",
            name: "Sylvan Archer",
            description: "Guardian of the forest. High dexterity.",
            base_hp: 115,
            base_mp: 70,
            element: Element::Nature,
            icon: "Sprout",
            starting_abilities: &["quick_slash", "vine_whip"],
            starting_weapon: "chipped_dagger",
            required_prestige: 0,
        },
        CharacterClass {
            id: "ironclad",
            name: "Ironclad",
            description: "A walking tank made of steel.",
            base_hp: 200,
            base_mp: 20,
            element: Element::Metal,
            icon: "Hammer",
            starting_abilities: &["strike", "iron_fist"],
            starting_weapon: "heavy_club",
            required_prestige: 0,
        },
        CharacterClass {
            id: "bloodmage",
            name: "Blood Mage",
            description: "Sacrifices health for power. Dangerous.",
            base_hp: 140,
            base_mp: 90,
            element: Element::Blood,
            icon: "Droplets",
            starting_abilities: &["claw_rake", "transfusion"],
            starting_weapon: "chipped_dagger",
            required_prestige: 0,
        },
        CharacterClass {
            id: "chrono",
            name: "Time Walker",
            description: "Manipulates time to evade and strike.",
            base_hp: 105,
            base_mp: 100,
            element: Element::Time,
            icon: "Clock",
            starting_abilities: &["quick_slash", "tick_tock"],
            starting_weapon: "training_wand",
            required_prestige: 0,
        },
        CharacterClass {
            id: "arcanist",
            name: "Arcanist",
            description: "Scholar of pure magic energy.",
            base_hp: 95,
            base_mp: 120,
            element: Element::Arcane,
            icon: "Book",
            starting_abilities: &["magic_missile", "mystic_orb"],
            starting_weapon: "training_wand",
            required_prestige: 0,
        },
        // Prestige classes
        CharacterClass {
            id: "celestial",
            name: "Celestial Paragon",
            description: "An entity of pure light and physical perfection.",
            base_hp: 300,
            base_mp: 150,
            element: Element::Light,
            icon: "Sun",
            starting_abilities: &["radiance", "sunburst", "divine_intervention"],
            starting_weapon: "bringer_of_light",
            required_prestige: 1,
        },
        CharacterClass {
            id: "void_lord",
            name: "Void Lord",
            description: "Consumes existence. Darkness personified.",
            base_hp: 250,
            base_mp: 200,
            element: Element::Dark,
            icon: "Ghost",
            starting_abilities: &["void_ray", "cataclysm", "eclipse"],
            starting_weapon: "void_edge",
            required_prestige: 1,
        },
        CharacterClass {
            id: "tempest",
            name: "Tempest God",
            description: "Commands storms of air and lightning.",
            base_hp: 200,
            base_mp: 220,
            element: Element::Lightning,
            icon: "CloudLightning",
            starting_abilities: &["chain_lightning", "thor_wrath", "hurricane"],
            starting_weapon: "mjolnir",
            required_prestige: 1,
        },
        CharacterClass {
            id: "chronomancer",
            name: "Grand Chronomancer",
            description: "Weaves time to erase enemies from history.",
            base_hp: 220,
            base_mp: 250,
            element: Element::Time,
            icon: "Hourglass",
            starting_abilities: &["time_stop", "paradox", "future_strike"],
            starting_weapon: "chronos_scepter",
            required_prestige: 1,
        },
        CharacterClass {
            id: "arcane_monarch",
            name: "Arcane Monarch",
            description: "The ruler of all magic.",
            base_hp: 200,
            base_mp: 300,
            element: Element::Arcane,
            icon: "Crown",
            starting_abilities: &["supernova_arcane", "disintegrate", "aether_ray"],
            starting_weapon: "infinity_blade",
            required_prestige: 1,
        },    ]
}

pub fn find_class(id: &str) -> Option<CharacterClass> {
    all_classes().into_iter().find(|c| c.id == id)
}

/// Classes selectable at the given prestige rank.
pub fn available_classes(prestige: u32) -> Vec<CharacterClass> {
    all_classes()
        .into_iter()
        .filter(|c| c.is_available_at(prestige))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abilities::find_ability;
    use crate::items::find_weapon;

    #[test]
    fn test_class_counts() {
        let classes = all_classes();
        assert_eq!(classes.len(), 18);
        assert_eq!(classes.iter().filter(|c| c.is_prestige_class()).count(), 5);
    }

    #[test]
    fn test_starting_kits_resolve() {
        for class in all_classes() {
            assert!(
                find_weapon(class.starting_weapon).is_some(),
                "{} has unknown weapon",
                class.id
            );
            for id in class.starting_abilities {
                assert!(find_ability(id).is_some(), "{} has unknown ability {id}", class.id);
            }
        }
    }

    #[test]
    fn test_prestige_gate() {
        assert_eq!(available_classes(0).len(), 13);
        assert_eq!(available_classes(1).len(), 18);
        assert!(!find_class("void_lord").unwrap().is_available_at(0));
    }
}
