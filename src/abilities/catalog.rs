//! The static ability table: seven abilities per combat element, unlocking at levels 1-7.

use super::types::{build_ability, Ability, AbilityRow};
use crate::combat::element::Element;
use std::sync::OnceLock;

const PHYSICAL: [AbilityRow; 7] = [
    ("strike", "Heavy Strike", "A basic physical blow.", 0, 10, 0, 0, "Hammer"),
    ("quick_slash", "Quick Slash", "A fast attack, costs no mana.", 0, 8, 0, 0, "Sword"),
    ("pommel_bash", "Pommel Bash", "Stun the enemy with a blunt hit.", 15, 25, 0, 2, "Circle"),
    ("shield_bash", "Shield Bash", "Slam with your shield.", 25, 35, 0, 2, "Shield"),
    ("execute", "Execute", "A deadly strike to finish foes.", 40, 70, 0, 4, "Skull"),
    ("bladestorm", "Bladestorm", "Spinning attack.", 50, 85, 0, 3, "RotateCcw"),
    ("berserk", "Berserk Barrage", "Unleash a flurry of wild attacks.", 60, 120, 0, 5, "Swords"),
];

const FIRE: [AbilityRow; 7] = [
    ("ember", "Ember Bolt", "Launch a small bolt of fire.", 10, 20, 0, 0, "Flame"),
    ("flame_burst", "Flame Burst", "An explosion of heat.", 20, 35, 0, 2, "Sun"),
    ("combustion", "Combustion", "Ignite the air itself.", 30, 50, 0, 2, "Zap"),
    ("phoenix_blade", "Phoenix Strike", "Wreathe your weapon in flame.", 35, 65, 0, 2, "Sword"),
    ("fireball", "Great Fireball", "A classic ball of destruction.", 50, 95, 0, 3, "Flame"),
    ("supernova", "Supernova", "A blinding explosion.", 70, 120, 0, 4, "Sun"),
    ("inferno", "Hellfire", "Engulf the enemy in a firestorm.", 90, 150, 0, 5, "Zap"),
];

const WATER: [AbilityRow; 7] = [
    ("bubble", "Water Bubble", "A concentrated burst of water.", 10, 25, 0, 0, "Droplets"),
    ("heal", "Mend", "Restore health with magic.", 30, 0, 50, 3, "Heart"),
    ("aqua_jet", "Aqua Jet", "High pressure water stream.", 25, 55, 0, 2, "Droplets"),
    ("whirlpool", "Whirlpool", "Trap the enemy in a spin.", 40, 70, 0, 3, "RotateCw"),
    ("tidal_strike", "Tidal Wave", "Crash into the foe like the ocean.", 50, 95, 0, 3, "Waves"),
    ("leviathan", "Leviathans Call", "Summon a beast from the deep.", 70, 130, 0, 4, "Anchor"),
    ("tsunami", "Tsunami", "Drown the enemy in power.", 85, 165, 0, 5, "CloudRain"),
];

const EARTH: [AbilityRow; 7] = [
    ("pebble", "Pebble Shot", "Flick a stone at speed.", 5, 12, 0, 0, "Circle"),
    ("rock_throw", "Boulder Toss", "Hurl a heavy rock.", 20, 30, 0, 1, "Mountain"),
    ("harden", "Stone Skin", "Repair your armor (Heal).", 40, 0, 80, 4, "Shield"),
    ("sand_blast", "Sand Blast", "Erode their defenses.", 35, 55, 0, 2, "Wind"),
    ("fissure", "Fissure", "Crack the earth open.", 55, 90, 0, 3, "Triangle"),
    ("terra_force", "Terra Force", "The weight of the world.", 70, 115, 0, 4, "Mountain"),
    ("earthquake", "Earthquake", "Shatter the ground completely.", 90, 150, 0, 5, "Mountain"),
];

const AIR: [AbilityRow; 7] = [
    ("gust", "Gust", "A sharp blast of wind.", 10, 18, 0, 0, "Wind"),
    ("aerial_ace", "Aerial Ace", "Strike from the sky.", 25, 40, 0, 1, "Feather"),
    ("vacuum", "Vacuum Blade", "Create a vacuum that slices.", 40, 65, 0, 2, "Sword"),
    ("cyclone", "Cyclone", "A focused vortex.", 50, 80, 0, 3, "Tornado"),
    ("tornado", "Tornado", "Lift the enemy in a spin.", 65, 100, 0, 3, "Tornado"),
    ("sky_fall", "Sky Fall", "Drop from the heavens.", 80, 130, 0, 4, "ArrowDown"),
    ("hurricane", "Hurricane", "The wrath of the skies.", 95, 160, 0, 5, "Wind"),
];

const LIGHTNING: [AbilityRow; 7] = [
    ("spark", "Spark", "A small jolt of electricity.", 12, 22, 0, 0, "Zap"),
    ("shock", "Static Shock", "Paralyzing energy.", 25, 45, 0, 1, "Activity"),
    ("overload", "Overload", "Surge of power.", 35, 60, 0, 2, "Zap"),
    ("thunderbolt", "Thunderbolt", "A loud crash of lightning.", 45, 75, 0, 2, "ZapOff"),
    ("chain_lightning", "Chain Lightning", "Arcs of raw energy.", 65, 105, 0, 3, "Share2"),
    ("plasma_cannon", "Plasma Cannon", "Focused beam of electricity.", 80, 135, 0, 4, "Target"),
    ("thor_wrath", "Gods Wrath", "Summon the ultimate storm.", 100, 170, 0, 5, "Hammer"),
];

const ICE: [AbilityRow; 7] = [
    ("ice_shard", "Ice Shard", "A sharp splinter of ice.", 12, 20, 0, 0, "Snowflake"),
    ("frost", "Frostbite", "Chilling cold touch.", 25, 40, 0, 1, "ThermometerSnowflake"),
    ("ice_wall", "Glacial Barrier", "Heal wounds with frozen magic.", 40, 0, 70, 4, "Shield"),
    ("ice_age", "Ice Age", "Flash freeze the area.", 50, 80, 0, 3, "Snowflake"),
    ("blizzard", "Blizzard", "A storm of razor hail.", 65, 100, 0, 3, "CloudSnow"),
    ("permafrost", "Permafrost", "Eternal cold.", 80, 130, 0, 4, "Thermometer"),
    ("absolute_zero", "Absolute Zero", "Freeze time itself.", 95, 160, 0, 5, "Snowflake"),
];

const LIGHT: [AbilityRow; 7] = [
    ("ray_of_light", "Ray of Light", "A focused beam of light.", 12, 20, 0, 0, "Sun"),
    ("blessing", "Blessing", "Divine healing.", 30, 0, 55, 3, "Heart"),
    ("holy_shock", "Holy Shock", "Shock the enemy with holy power.", 25, 45, 0, 1, "Zap"),
    ("radiance", "Radiance", "Burn with holy fire.", 40, 65, 0, 2, "Sun"),
    (
        "divine_intervention",
        "Divine Intervention",
        "A massive heal from the gods.",
        60,
        0,
        120,
        5,
        "PlusCircle",
    ),
    ("sunburst", "Sunburst", "Explosive light energy.", 70, 115, 0, 4, "Star"),
    ("judgment_day", "Judgment Day", "The final verdict.", 95, 165, 0, 5, "Scale"),
];

const DARK: [AbilityRow; 7] = [
    ("gloom", "Gloom Bolt", "A bolt of pure darkness.", 12, 22, 0, 0, "Moon"),
    ("dark_pulse", "Dark Pulse", "A wave of bad energy.", 25, 45, 0, 1, "Activity"),
    ("shadow_mend", "Shadow Mend", "Stitch wounds with shadow.", 40, 0, 75, 4, "Heart"),
    ("doom", "Doom", "Impending heavy damage.", 45, 75, 0, 2, "Skull"),
    ("void_ray", "Void Ray", "Channel the void.", 60, 100, 0, 3, "ZapOff"),
    ("eclipse", "Eclipse", "Block out the sun.", 75, 130, 0, 4, "Moon"),
    ("cataclysm", "Cataclysm", "Unleash total destruction.", 100, 170, 0, 5, "Skull"),
];

const NATURE: [AbilityRow; 7] = [
    ("vine_whip", "Vine Whip", "Strike with thorny vines.", 12, 18, 0, 0, "Flower"),
    ("leech_seed", "Leech Seed", "Drain life from the enemy.", 25, 20, 20, 2, "Sprout"),
    ("razor_leaf", "Razor Leaf", "Sharp leaves slice the air.", 35, 50, 0, 1, "Feather"),
    ("photosynthesis", "Regrowth", "Absorb nature energy to heal.", 50, 0, 90, 4, "Sun"),
    ("root_crush", "Root Crush", "Roots burst from the ground.", 60, 85, 0, 3, "Trees"),
    ("solar_beam", "Solar Beam", "Concentrated solar power.", 80, 125, 0, 4, "Zap"),
    ("wrath_of_gaia", "Wrath of Gaia", "The forest strikes back.", 100, 165, 0, 5, "Mountain"),
];

const METAL: [AbilityRow; 7] = [
    ("iron_fist", "Iron Fist", "A punch as hard as steel.", 10, 20, 0, 0, "HandMetal"),
    ("shrapnel", "Shrapnel", "Explosive metal fragments.", 20, 35, 0, 1, "Hexagon"),
    ("steel_barrier", "Steel Barrier", "Repair armor plating.", 40, 0, 60, 3, "Shield"),
    ("blade_dance", "Blade Dance", "A whirlwind of sharp edges.", 50, 70, 0, 2, "Swords"),
    ("spike_rain", "Spike Rain", "Heavy spikes fall from above.", 65, 95, 0, 3, "ArrowDown"),
    ("guillotine", "Guillotine", "A massive falling blade.", 80, 130, 0, 4, "Crop"),
    ("titan_smash", "Titan Smash", "Crush with titanic force.", 100, 170, 0, 5, "Hammer"),
];

const BLOOD: [AbilityRow; 7] = [
    ("claw_rake", "Claw Rake", "Tear flesh.", 5, 25, 0, 0, "Scissors"),
    ("transfusion", "Transfusion", "Steal life essence.", 30, 30, 30, 2, "Droplets"),
    ("blood_boil", "Blood Boil", "Boil the enemy from within.", 40, 60, 0, 2, "Flame"),
    ("hemorrhage", "Hemorrhage", "Cause massive bleeding.", 55, 80, 0, 3, "Activity"),
    ("sanguine_pact", "Sanguine Pact", "Forbidden healing.", 50, 0, 100, 4, "Heart"),
    ("crimson_nova", "Crimson Nova", "Explode in a mist of red.", 80, 135, 0, 4, "Sun"),
    ("exsanguinate", "Exsanguinate", "Drain every drop.", 110, 180, 0, 5, "Droplets"),
];

const TIME: [AbilityRow; 7] = [
    ("tick_tock", "Tick Tock", "Time ticks away HP.", 15, 20, 0, 0, "Clock"),
    ("rewind", "Rewind", "Reverse damage taken.", 40, 0, 70, 3, "Undo2"),
    ("accelerate", "Accelerate", "Speed up attacks.", 35, 50, 0, 1, "FastForward"),
    ("decay", "Rapid Decay", "Age the enemy instantly.", 50, 75, 0, 2, "Hourglass"),
    ("paradox", "Paradox", "Reality glitches violently.", 70, 110, 0, 3, "HelpCircle"),
    ("future_strike", "Future Strike", "An attack from tomorrow.", 85, 140, 0, 4, "ArrowRight"),
    ("time_stop", "Chrono Break", "Shatter the timeline.", 100, 175, 0, 5, "Watch"),
];

const ARCANE: [AbilityRow; 7] = [
    ("magic_missile", "Magic Missile", "A bolt of pure energy.", 10, 18, 0, 0, "Sparkles"),
    ("mystic_orb", "Mystic Orb", "Launch a volatile sphere.", 25, 40, 0, 1, "Circle"),
    ("barrier", "Mana Barrier", "Convert mana to health.", 40, 0, 60, 3, "Shield"),
    ("rune_blast", "Rune Blast", "Detonate ancient runes.", 45, 65, 0, 2, "Hexagon"),
    ("aether_ray", "Aether Ray", "Beam of raw magic.", 65, 100, 0, 3, "Zap"),
    ("disintegrate", "Disintegrate", "Dust to dust.", 85, 140, 0, 4, "Wind"),
    ("supernova_arcane", "Cosmic Burst", "The energy of stars.", 100, 170, 0, 5, "Star"),
];
fn rows_for(element: Element) -> &'static [AbilityRow] {
    match element {
        Element::Physical => &PHYSICAL,
        Element::Fire => &FIRE,
        Element::Water => &WATER,
        Element::Earth => &EARTH,
        Element::Air => &AIR,
        Element::Lightning => &LIGHTNING,
        Element::Ice => &ICE,
        Element::Light => &LIGHT,
        Element::Dark => &DARK,
        Element::Nature => &NATURE,
        Element::Metal => &METAL,
        Element::Blood => &BLOOD,
        Element::Time => &TIME,
        Element::Arcane => &ARCANE,
        _ => &[],
    }
}

/// Every catalog ability, grouped by element in unlock order.
pub fn catalog() -> &'static [Ability] {
    static CATALOG: OnceLock<Vec<Ability>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        Element::COMBAT
            .iter()
            .flat_map(|&element| {
                rows_for(element)
                    .iter()
                    .zip(1..)
                    .map(move |(row, unlock_level)| build_ability(row, element, unlock_level))
            })
            .collect()
    })
}

/// Looks up a catalog ability by id.
pub fn find_ability(id: &str) -> Option<&'static Ability> {
    catalog().iter().find(|a| a.id == id)
}

/// Catalog abilities of one element, in unlock order.
pub fn abilities_for(element: Element) -> impl Iterator<Item = &'static Ability> {
    catalog().iter().filter(move |a| a.element == element)
}

/// The level-1 ability of an element, granted on evolution.
pub fn starter_ability(element: Element) -> Option<&'static Ability> {
    abilities_for(element).find(|a| a.unlock_level == 1)
}

/// Catalog abilities a character of `element` has earned by `level`.
///
/// Physical abilities are available to every element.
pub fn unlocked_at(element: Element, level: u32) -> impl Iterator<Item = &'static Ability> {
    catalog().iter().filter(move |a| {
        (a.element == element || a.element == Element::Physical) && a.unlock_level <= level
    })
}
