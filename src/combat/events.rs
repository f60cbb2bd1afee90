//! Events emitted by combat transitions for renderers and audio.

use super::effects::{particles_for, Effect, ParticleStyle};
use super::element::Element;
use super::types::Side;
use crate::core::constants::*;
use crate::rewards::VictoryOutcome;
use serde::{Deserialize, Serialize};

/// Timed visual beats of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CueKind {
    WindUp,
    Impact,
    Return,
    Heal,
    /// Pause before the scripted enemy acts.
    EnemyDelay,
}

impl CueKind {
    pub fn duration_ms(self) -> u64 {
        match self {
            CueKind::WindUp => WINDUP_MS,
            CueKind::Impact => IMPACT_MS,
            CueKind::Return => RETURN_MS,
            CueKind::Heal => HEAL_MS,
            CueKind::EnemyDelay => ENEMY_TURN_DELAY_MS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationCue {
    pub kind: CueKind,
    pub side: Side,
    pub element: Element,
    pub duration_ms: u64,
    pub effect: Option<Effect>,
    /// Particle burst for the acting element.
    pub particles: ParticleStyle,
}

impl AnimationCue {
    pub fn new(kind: CueKind, side: Side, element: Element, effect: Option<Effect>) -> Self {
        Self {
            kind,
            side,
            element,
            duration_ms: kind.duration_ms(),
            effect,
            particles: particles_for(element),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CombatEvent {
    Encountered {
        name: String,
    },
    Cue(AnimationCue),
    AttackResolved {
        attacker: Side,
        ability: String,
        element: Element,
        damage: u32,
        is_critical: bool,
        target_hp: u32,
    },
    Healed {
        side: Side,
        amount: u32,
    },
    /// Control returned to `side`. For the player this follows mana regen and the
    /// cooldown tick.
    TurnStarted {
        side: Side,
        mana_regenerated: u32,
    },
    Victory(VictoryOutcome),
    Defeat,
    Abandoned,
}
