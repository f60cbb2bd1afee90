//! Weapon catalog.

use super::types::{Rarity, Weapon};
use crate::combat::element::Element;
use std::sync::OnceLock;

type WeaponRow = (
    &'static str,
    &'static str,
    u32,
    Element,
    &'static str,
    Rarity,
    u32,
);

const WEAPONS: [WeaponRow; 28] = [
    ("rusty_sword", "Rusty Sword", 5, Element::Physical, "Sword", Rarity::Common, 0),
    ("training_wand", "Old Wand", 4, Element::Physical, "Wand", Rarity::Common, 0),
    ("chipped_dagger", "Chipped Dagger", 5, Element::Physical, "Scissors", Rarity::Common, 0),
    ("heavy_club", "Heavy Club", 7, Element::Physical, "Hammer", Rarity::Common, 0),
    ("iron_broadsword", "Iron Broadsword", 12, Element::Physical, "Sword", Rarity::Common, 150),
    ("steel_saber", "Steel Saber", 18, Element::Physical, "Sword", Rarity::Rare, 300),
    ("battle_axe", "Battle Axe", 16, Element::Physical, "Axe", Rarity::Rare, 250),
    ("magic_staff", "Magic Staff", 15, Element::Physical, "Wand", Rarity::Rare, 280),
    ("flame_tongue", "Flame Tongue", 25, Element::Fire, "Flame", Rarity::Rare, 600),
    ("frost_bite", "Frost Bite", 25, Element::Ice, "Snowflake", Rarity::Rare, 600),
    ("gaia_hammer", "Gaia Hammer", 30, Element::Earth, "Hammer", Rarity::Rare, 650),
    ("zephyr_blade", "Zephyr Blade", 22, Element::Air, "Feather", Rarity::Rare, 580),
    ("thunder_spear", "Thunder Spear", 28, Element::Lightning, "Zap", Rarity::Rare, 620),
    ("tidal_staff", "Tidal Staff", 24, Element::Water, "Droplets", Rarity::Rare, 600),
    ("venom_daggers", "Venom Daggers", 26, Element::Physical, "Scissors", Rarity::Rare, 550),
    ("holy_mace", "Morning Star", 26, Element::Light, "Sun", Rarity::Rare, 620),
    ("soul_scythe", "Soul Scythe", 29, Element::Dark, "Moon", Rarity::Rare, 650),
    ("excalibur", "Excalibur", 50, Element::Physical, "Crown", Rarity::Legendary, 2000),
    ("infernal_claymore", "Infernal Claymore", 55, Element::Fire, "Flame", Rarity::Legendary, 2200),
    ("mjolnir", "Mjolnir", 60, Element::Lightning, "Hammer", Rarity::Legendary, 2500),
    ("absolute_zero", "Absolute Zero", 52, Element::Ice, "Snowflake", Rarity::Legendary, 2300),
    ("gaia_wrath", "Gaias Wrath", 58, Element::Earth, "Mountain", Rarity::Legendary, 2400),
    ("poseidon_trident", "Trident", 54, Element::Water, "Anchor", Rarity::Legendary, 2200),
    ("bringer_of_light", "Dawnbreaker", 56, Element::Light, "Sun", Rarity::Legendary, 2400),
    ("void_edge", "Void Edge", 59, Element::Dark, "Skull", Rarity::Legendary, 2500),
    ("infinity_blade", "Infinity Blade", 100, Element::Arcane, "Infinity", Rarity::Godly, 10000),
    ("world_ender", "World Ender", 120, Element::Dark, "Globe", Rarity::Godly, 15000),
    ("chronos_scepter", "Scepter of Aeons", 90, Element::Time, "Clock", Rarity::Godly, 12000),
];

/// Every weapon, ordered roughly by shop tier. The first entry is the fallback weapon.
pub fn all_weapons() -> &'static [Weapon] {
    static CATALOG: OnceLock<Vec<Weapon>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        WEAPONS
            .iter()
            .map(|&(id, name, damage, element, icon, rarity, price)| Weapon {
                id: id.to_string(),
                name: name.to_string(),
                damage,
                element,
                icon: icon.to_string(),
                rarity,
                price,
            })
            .collect()
    })
}

pub fn find_weapon(id: &str) -> Option<&'static Weapon> {
    all_weapons().iter().find(|w| w.id == id)
}

/// Resolves a weapon id, falling back to the first catalog weapon.
pub fn weapon_or_default(id: &str) -> Weapon {
    find_weapon(id).unwrap_or_else(default_weapon).clone()
}

pub fn default_weapon() -> &'static Weapon {
    &all_weapons()[0]
}

/// Weapons sold in town (price above zero).
pub fn shop_weapons() -> impl Iterator<Item = &'static Weapon> {
    all_weapons().iter().filter(|w| w.price > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_tiers() {
        let weapons = all_weapons();
        assert_eq!(weapons.len(), 28);
        let godly = weapons.iter().filter(|w| w.rarity == Rarity::Godly).count();
        assert_eq!(godly, 3);
    }

    #[test]
    fn test_unknown_weapon_falls_back() {
        assert_eq!(weapon_or_default("laser_sword").id, "rusty_sword");
        assert_eq!(weapon_or_default("mjolnir").damage, 60);
    }

    #[test]
    fn test_shop_excludes_starters() {
        assert!(shop_weapons().all(|w| w.price > 0));
        assert!(shop_weapons().any(|w| w.id == "iron_broadsword"));
        assert!(!shop_weapons().any(|w| w.id == "rusty_sword"));
    }
}
