//! Error types raised by the engine.
//!
//! Rejections (`ActionRejected`) are expected runtime outcomes the caller surfaces to the
//! user; they never change session state. The remaining enums cover operations outside
//! combat.

use thiserror::Error;

/// Why a combat action was refused. The turn is not consumed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionRejected {
    #[error("Not enough Mana! ({available}/{required})")]
    InsufficientMana { required: u32, available: u32 },

    #[error("{ability} is on cooldown! ({turns} turns)")]
    OnCooldown { ability: String, turns: u32 },

    #[error("it is not your turn")]
    NotYourTurn,

    #[error("the battle is already over")]
    CombatOver,

    #[error("wait for the current action to finish")]
    Busy,

    #[error("unknown or locked ability: {0}")]
    UnknownAbility(String),
}

/// Errors from the progression ledger (prestige, evolution, class selection).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgressionError {
    #[error("prestige requires level {required} (currently {level})")]
    PrestigeLocked { level: u32, required: u32 },

    #[error("element evolution is only possible every {interval} levels (currently {level})")]
    EvolutionLocked { level: u32, interval: u32 },

    #[error("already attuned to {0}")]
    SameElement(String),

    #[error("{0} has no combat abilities to evolve into")]
    NotEvolvable(String),

    #[error("unknown character class: {0}")]
    UnknownClass(String),

    #[error("class {class} requires prestige {required} (currently {prestige})")]
    ClassLocked {
        class: String,
        required: u32,
        prestige: u32,
    },
}

/// Errors from ability fusion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FusionError {
    #[error("fusion costs {required} gold (you have {available})")]
    InsufficientGold { required: u32, available: u32 },

    #[error("cannot fuse an ability with itself")]
    SameAbility,
}

/// Errors from town actions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TownError {
    #[error("Not enough Gold! ({available}/{required})")]
    InsufficientGold { required: u32, available: u32 },

    #[error("unknown weapon: {0}")]
    UnknownWeapon(String),
}

/// Errors from the save file.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("invalid save version: expected 0x{expected:016X}, got 0x{found:016X}")]
    Version { expected: u64, found: u64 },

    #[error("checksum verification failed")]
    Checksum,

    #[error("could not determine config directory")]
    NoConfigDir,
}

/// Errors from a peer channel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChannelError {
    #[error("peer connection closed")]
    Closed,

    #[error("failed to encode message: {0}")]
    Encode(String),

    #[error("connection failed: {0}")]
    Connect(String),
}

/// A minigame score given as `barrage:N`, `mash:N` or `timing:X`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid minigame score {0:?}; expected barrage:N, mash:N or timing:X")]
pub struct MinigameParseError(pub String);
