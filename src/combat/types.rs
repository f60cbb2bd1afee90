use super::element::Element;
use crate::core::constants::COMBAT_LOG_CAPACITY;
use crate::items::Weapon;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};

/// An opponent for one encounter. Generated, decoded from a token, or built from a peer's
/// handshake; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub name: String,
    pub level: u32,
    pub current_hp: u32,
    pub max_hp: u32,
    pub current_mp: u32,
    pub max_mp: u32,
    pub element: Element,
    pub icon: String,
    pub description: String,
    pub xp_reward: u32,
    pub gold_reward: u32,
    #[serde(default)]
    pub is_boss: bool,
    #[serde(default)]
    pub is_pvp: bool,
    #[serde(default)]
    pub pvp_weapon: Option<Weapon>,
}

impl Enemy {
    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.current_hp = self.current_hp.saturating_sub(amount);
    }

    pub fn heal(&mut self, amount: u32) {
        self.current_hp = self.current_hp.saturating_add(amount).min(self.max_hp);
    }
}

/// One side of a fight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Player,
    Opponent,
}

/// Turn state machine phases.
///
/// `ResolvingPlayerAction` and `ResolvingEnemyAction` are held only while a transition
/// runs; between calls a live session is `Idle` and `turn` says who acts next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatPhase {
    Idle,
    ResolvingPlayerAction,
    ResolvingEnemyAction,
    Victory,
    Defeat,
    /// Left combat without a result (dropped connection, fled).
    Abandoned,
}

impl CombatPhase {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            CombatPhase::Victory | CombatPhase::Defeat | CombatPhase::Abandoned
        )
    }
}

/// Sprite animation state. Gates input only; resolution never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnimationPhase {
    #[default]
    Idle,
    Lunging,
    Returning,
}

/// Where the opponent came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatMode {
    /// Generated enemy with a scripted attack.
    Local,
    /// Offline duel against a decoded challenger token. Scripted, but rewards nothing.
    Challenge,
    /// Live duel against a peer.
    Online,
}

impl CombatMode {
    pub fn is_pvp(self) -> bool {
        !matches!(self, CombatMode::Local)
    }
}

/// Turns remaining per ability id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cooldowns {
    remaining: HashMap<String, u32>,
}

impl Cooldowns {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remaining(&self, ability_id: &str) -> u32 {
        self.remaining.get(ability_id).copied().unwrap_or(0)
    }

    pub fn is_ready(&self, ability_id: &str) -> bool {
        self.remaining(ability_id) == 0
    }

    /// Starts a cooldown after use. Set one higher than the ability's cooldown because the
    /// owner's next turn start ticks it immediately.
    pub fn start(&mut self, ability_id: &str, cooldown: u32) {
        if cooldown > 0 {
            self.remaining.insert(ability_id.to_string(), cooldown + 1);
        }
    }

    /// Decrements every running cooldown by one.
    pub fn tick(&mut self) {
        for turns in self.remaining.values_mut() {
            *turns = turns.saturating_sub(1);
        }
        self.remaining.retain(|_, turns| *turns > 0);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogKind {
    Info,
    PlayerAction,
    EnemyAction,
    System,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatLogEntry {
    pub message: String,
    pub kind: LogKind,
    pub is_crit: bool,
}

/// Most recent combat messages, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CombatLog {
    entries: VecDeque<CombatLogEntry>,
}

impl CombatLog {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(COMBAT_LOG_CAPACITY),
        }
    }

    pub fn push(&mut self, message: impl Into<String>, kind: LogKind, is_crit: bool) {
        if self.entries.len() >= COMBAT_LOG_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(CombatLogEntry {
            message: message.into(),
            kind,
            is_crit,
        });
    }

    pub fn entries(&self) -> impl Iterator<Item = &CombatLogEntry> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&CombatLogEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
