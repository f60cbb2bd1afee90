// XP and leveling
pub const BASE_XP_REQ: u32 = 50;
pub const XP_SCALING: f64 = 1.3;
pub const HP_PER_LEVEL: u32 = 30;
pub const MP_PER_LEVEL: u32 = 15;

// Prestige
pub const PRESTIGE_REQUIRED_LEVEL: u32 = 20;
/// Stat growth bonus per prestige rank in the extended ruleset.
pub const PRESTIGE_STAT_BONUS_PER_RANK: f64 = 0.2;

// Element evolution
pub const EVOLUTION_LEVEL_INTERVAL: u32 = 5;

// Damage formula
pub const DAMAGE_PER_ATTACKER_LEVEL: f64 = 2.0;
pub const ADVANTAGE_MULTIPLIER: f64 = 1.5;
pub const DISADVANTAGE_MULTIPLIER: f64 = 0.75;
pub const DAMAGE_VARIANCE_MIN: f64 = 0.9;
pub const DAMAGE_VARIANCE_MAX: f64 = 1.1;

// Scripted enemy attack: 10 + level * 2.5
pub const ENEMY_BASE_POWER: f64 = 10.0;
pub const ENEMY_POWER_PER_LEVEL: f64 = 2.5;

// Turn economy
pub const HEAL_PER_PLAYER_LEVEL: u32 = 8;
pub const MP_REGEN_PER_TURN: u32 = 5;

// Fusion
pub const FUSION_COST: u32 = 500;
pub const FUSION_POWER_BONUS: f64 = 1.1;
pub const FUSION_MANA_DISCOUNT: f64 = 0.9;

// Enemy generation
pub const ENEMY_BASE_HP: u32 = 50;
pub const ENEMY_HP_PER_LEVEL: u32 = 25;
pub const ENEMY_HP_VARIANCE_MIN: f64 = 0.8;
pub const ENEMY_HP_VARIANCE_MAX: f64 = 1.2;
pub const ENEMY_BASE_MP: u32 = 40;
pub const ENEMY_MP_PER_LEVEL: u32 = 5;
pub const ENEMY_BASE_XP: u32 = 20;
pub const ENEMY_XP_PER_LEVEL: u32 = 10;
pub const ENEMY_BASE_GOLD: u32 = 15;
pub const ENEMY_GOLD_PER_LEVEL: u32 = 8;
pub const ENEMY_GOLD_BONUS_MAX: u32 = 20;
/// Tier thresholds: (level above which the tier applies, stat multiplier)
pub const ENEMY_MID_TIER: (u32, f64) = (3, 1.2);
pub const ENEMY_HIGH_TIER: (u32, f64) = (7, 1.5);
/// One extra encounter level per this many consecutive wins.
pub const WIN_STREAK_PER_LEVEL: u32 = 3;

// Boss multipliers: (hp_mult, xp_mult, gold_mult)
pub const BOSS_MULTIPLIERS: (f64, u32, u32) = (1.5, 2, 3);

// PvP reconstruction
pub const PVP_BASE_HP: u32 = 100;
pub const PVP_HP_PER_LEVEL: u32 = 30;
pub const PVP_PRESTIGE_HP_BONUS: f64 = 0.5;
pub const PVP_BASE_MP: u32 = 100;
pub const PVP_MP_PER_LEVEL: u32 = 10;
pub const PVP_XP_PER_LEVEL: f64 = 100.0;
pub const PVP_GOLD_PER_LEVEL: f64 = 50.0;

// Town
pub const RESPAWN_GOLD_KEEP: f64 = 0.75;

// Minigame loot multipliers
pub const BARRAGE_TARGET_HITS_LEGACY: u32 = 12;
pub const BARRAGE_TARGET_HITS: u32 = 15;
pub const TIMING_PERFECT_WINDOW: f64 = 5.0;
pub const TIMING_GOOD_WINDOW: f64 = 15.0;

// Animation beats (milliseconds), consumed by renderers
pub const WINDUP_MS: u64 = 300;
pub const IMPACT_MS: u64 = 400;
pub const RETURN_MS: u64 = 500;
pub const HEAL_MS: u64 = 800;
pub const ENEMY_TURN_DELAY_MS: u64 = 1000;

pub const COMBAT_LOG_CAPACITY: usize = 30;

// Save file
pub const SAVE_VERSION_MAGIC: u64 = 0x4F44_5953_5345_5931; // "ODYSSEY1"
