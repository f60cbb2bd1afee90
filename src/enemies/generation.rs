//! Procedural enemy generation.

use crate::combat::element::Element;
use crate::combat::types::Enemy;
use crate::core::constants::*;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const ADJECTIVES_LOW: [&str; 9] = [
    "Weak", "Tiny", "Young", "Lost", "Tired", "Small", "Dusty", "Rusted", "Slow",
];
const ADJECTIVES_MID: [&str; 11] = [
    "Wild", "Feral", "Dark", "Angry", "Cursed", "Strong", "Rabid", "Swift", "Brutal",
    "Sharpened", "Bloody",
];
const ADJECTIVES_HIGH: [&str; 11] = [
    "Ancient", "Legendary", "Elder", "Giant", "Eternal", "Mythic", "Colossal", "Divine",
    "Infernal", "Timeless", "Cosmic",
];

/// Monster names and icons for an element.
fn monster_data(element: Element) -> (&'static [&'static str], &'static [&'static str]) {
    match element {
        Element::Fire => (
            &[
                "Imp",
                "Drake",
                "Phoenix",
                "Efreet",
                "Hellhound",
                "Salamander",
                "Pyro",
                "Demon",
                "Ember Spirit",
            ],
            &["Flame", "Zap", "Skull", "ThermometerSun"],
        ),
        Element::Water => (
            &[
                "Slime",
                "Siren",
                "Serpent",
                "Elemental",
                "Kraken",
                "Tidehunter",
                "Naga",
                "Turtle",
                "Shark",
            ],
            &["Droplets", "Waves", "Fish", "Anchor"],
        ),
        Element::Earth => (
            &[
                "Golem",
                "Troll",
                "Gnome",
                "Gargoyle",
                "Treant",
                "Behemoth",
                "Giant",
                "Boar",
                "Basilisk",
            ],
            &["Mountain", "Shield", "Trees", "Pickaxe"],
        ),
        Element::Air => (
            &["Harpy", "Griffin", "Sylph", "Djinn", "Eagle", "Cloud", "Spirit", "Bat", "Wyvern"],
            &["Wind", "Feather", "Cloud", "Bird"],
        ),
        Element::Lightning => (
            &["Spark", "Wisp", "Construct", "Storm", "Thunderbird", "Voltaic", "Dynamo", "Bolt"],
            &["Zap", "Activity", "Flashlight"],
        ),
        Element::Ice => (
            &["Yeti", "Wolf", "Wraith", "Penguin", "Bear", "Frostguard", "Cryomancer", "Ice Golem"],
            &["Snowflake", "ThermometerSnowflake", "Hexagon"],
        ),
        Element::Light => (
            &["Angel", "Paladin", "Wisp", "Spirit", "Valkyrie", "Lumin", "Guardian", "Seraph"],
            &["Sun", "Star", "Sparkles", "Shield"],
        ),
        Element::Dark => (
            &["Shadow", "Ghost", "Skeleton", "Vampire", "Reaper", "Shade", "Necromancer", "Lich"],
            &["Moon", "Skull", "Ghost", "Eye"],
        ),
        Element::Nature => (
            &["Ent", "Dryad", "Maneater", "Fungus", "Scorpion", "Spider", "Mantis", "Bear"],
            &["Flower", "Trees", "Sprout", "Bug"],
        ),
        Element::Metal => (
            &["Automaton", "Armor Suit", "Tank", "Mecha", "Gargantua", "Android", "Blade", "Golem"],
            &["Hammer", "Shield", "Settings", "Bot"],
        ),
        Element::Blood => (
            &[
                "Vampire",
                "Leech",
                "Mosquito",
                "Bat",
                "Hemogoblin",
                "Cultist",
                "Butcher",
                "Parasite",
            ],
            &["Droplets", "Heart", "Skull", "Scissors"],
        ),
        Element::Time => (
            &["Chronos", "Warp", "Glitch", "Paradox", "Watcher", "Shifter", "Phantom", "Echo"],
            &["Clock", "Watch", "Hourglass", "Undo2"],
        ),
        Element::Arcane => (
            &["Wizard", "Orb", "Eye", "Construct", "Sorcerer", "Illusion", "Mind Flayer", "Djinn"],
            &["Sparkles", "Eye", "Zap", "Wand"],
        ),
        _ => (
            &["Bandit", "Warrior", "Wolf", "Bear", "Knight", "Mercenary", "Rogue", "Orc", "Goblin"],
            &["Sword", "Shield", "User", "Axe"],
        ),
    }
}

/// Supplies an enemy for an encounter level.
pub trait EnemyGenerator {
    fn generate(&mut self, level: u32) -> Enemy;
}

/// Difficulty tier for a level: adjective pool and stat multiplier.
pub fn difficulty_tier(level: u32) -> (&'static [&'static str], f64) {
    let (high_level, high_mult) = ENEMY_HIGH_TIER;
    let (mid_level, mid_mult) = ENEMY_MID_TIER;
    if level > high_level {
        (&ADJECTIVES_HIGH, high_mult)
    } else if level > mid_level {
        (&ADJECTIVES_MID, mid_mult)
    } else {
        (&ADJECTIVES_LOW, 1.0)
    }
}

/// Encounter level: player level plus one per three consecutive wins.
pub fn encounter_level(player_level: u32, win_streak: u32) -> u32 {
    player_level + win_streak / WIN_STREAK_PER_LEVEL
}

fn pick<'a>(items: &[&'a str], rng: &mut impl Rng) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

/// Rolls a random enemy of the given level.
pub fn generate_enemy(level: u32, rng: &mut impl Rng) -> Enemy {
    let (adjectives, stat_mult) = difficulty_tier(level);
    let adjective = pick(adjectives, rng);

    let element = Element::COMBAT[rng.gen_range(0..Element::COMBAT.len())];
    let (names, icons) = monster_data(element);
    let base_name = pick(names, rng);
    let icon = pick(icons, rng);

    let base_hp = (ENEMY_BASE_HP + level * ENEMY_HP_PER_LEVEL) as f64;
    let hp_variance = rng.gen_range(ENEMY_HP_VARIANCE_MIN..ENEMY_HP_VARIANCE_MAX);
    let max_hp = ((base_hp * hp_variance * stat_mult).floor() as u32).max(1);
    let max_mp = ENEMY_BASE_MP + level * ENEMY_MP_PER_LEVEL;
    let gold_bonus = rng.gen_range(0..ENEMY_GOLD_BONUS_MAX);

    Enemy {
        name: format!("{adjective} {base_name}"),
        level,
        current_hp: max_hp,
        max_hp,
        current_mp: max_mp,
        max_mp,
        element,
        icon: icon.to_string(),
        description: format!(
            "A {} creature of {}.",
            adjective.to_lowercase(),
            element.name().to_lowercase()
        ),
        xp_reward: ENEMY_BASE_XP + level * ENEMY_XP_PER_LEVEL,
        gold_reward: ENEMY_BASE_GOLD + level * ENEMY_GOLD_PER_LEVEL + gold_bonus,
        is_boss: false,
        is_pvp: false,
        pvp_weapon: None,
    }
}

/// Promotes an enemy to a boss: tougher, and worth more.
pub fn make_boss(mut enemy: Enemy) -> Enemy {
    let (hp_mult, xp_mult, gold_mult) = BOSS_MULTIPLIERS;
    enemy.name = format!("BOSS: {}", enemy.name);
    enemy.max_hp = (enemy.max_hp as f64 * hp_mult).floor() as u32;
    enemy.current_hp = enemy.max_hp;
    enemy.xp_reward *= xp_mult;
    enemy.gold_reward *= gold_mult;
    enemy.is_boss = true;
    enemy
}

/// The default generator, owning its random source.
pub struct ProceduralGenerator {
    rng: ChaCha8Rng,
}

impl ProceduralGenerator {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl EnemyGenerator for ProceduralGenerator {
    fn generate(&mut self, level: u32) -> Enemy {
        generate_enemy(level, &mut self.rng)
    }
}
