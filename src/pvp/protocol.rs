//! Peer-to-peer duel messages.
//!
//! JSON objects with a `type` tag and a `payload`:
//! `{"type":"HANDSHAKE","payload":{"player":{..}}}`,
//! `{"type":"ATTACK","payload":{"abilityName":..,"damage":..,"heal":..,"isCritical":..,`
//! `"element":..}}`
//! and `{"type":"VICTORY"}`.

use crate::character::player::Player;
use crate::combat::element::Element;
use crate::combat::engine::ActionResult;
use crate::combat::types::Enemy;
use crate::items::Weapon;
use serde::{Deserialize, Serialize};

/// What a peer reveals about its character when the connection opens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSummary {
    pub name: String,
    pub class_id: String,
    pub level: u32,
    pub current_hp: u32,
    pub max_hp: u32,
    pub current_mp: u32,
    pub max_mp: u32,
    pub element: Element,
    pub weapon: Weapon,
    #[serde(default)]
    pub prestige: u32,
    #[serde(default)]
    pub icon: String,
}

impl PlayerSummary {
    pub fn from_player(player: &Player) -> Self {
        Self {
            name: player.name.clone(),
            class_id: player.class_id.clone(),
            level: player.level,
            current_hp: player.current_hp,
            max_hp: player.max_hp,
            current_mp: player.current_mp,
            max_mp: player.max_mp,
            element: player.element,
            weapon: player.weapon.clone(),
            prestige: player.prestige,
            icon: player.icon.clone(),
        }
    }

    /// The transient opponent mirroring this peer for one duel.
    pub fn to_enemy(&self) -> Enemy {
        let max_hp = self.max_hp.max(1);
        Enemy {
            name: self.name.clone(),
            level: self.level,
            current_hp: self.current_hp.clamp(1, max_hp),
            max_hp,
            current_mp: self.current_mp.min(self.max_mp),
            max_mp: self.max_mp,
            element: self.element,
            icon: self.icon.clone(),
            description: format!(
                "Lvl {} {} [Prestige {}]",
                self.level, self.element, self.prestige
            ),
            xp_reward: 0,
            gold_reward: 0,
            is_boss: false,
            is_pvp: true,
            pvp_weapon: Some(self.weapon.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttackPayload {
    pub ability_name: String,
    #[serde(default)]
    pub damage: u32,
    #[serde(default)]
    pub heal: u32,
    #[serde(default)]
    pub is_critical: bool,
    pub element: Element,
}

impl From<&ActionResult> for AttackPayload {
    fn from(result: &ActionResult) -> Self {
        Self {
            ability_name: result.ability_name.clone(),
            damage: result.damage,
            heal: result.heal,
            is_critical: result.is_critical,
            element: result.element,
        }
    }
}

impl From<&AttackPayload> for ActionResult {
    fn from(payload: &AttackPayload) -> Self {
        Self {
            ability_name: payload.ability_name.clone(),
            element: payload.element,
            damage: payload.damage,
            heal: payload.heal,
            is_critical: payload.is_critical,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PeerMessage {
    Handshake { player: PlayerSummary },
    Attack(AttackPayload),
    Victory,
}

impl PeerMessage {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
