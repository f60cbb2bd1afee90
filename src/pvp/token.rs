//! Offline challenge tokens.
//!
//! A token is base64 over a compact JSON record of a character. It carries no integrity
//! protection: stats are rebuilt from level and prestige on decode, so a forged token can
//! only pick a level.

use crate::character::player::Player;
use crate::combat::element::Element;
use crate::combat::types::Enemy;
use crate::core::constants::*;
use crate::items::weapon_or_default;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct TokenPayload {
    #[serde(default)]
    n: String,
    #[serde(default)]
    l: u32,
    #[serde(default)]
    e: String,
    #[serde(default)]
    c: String,
    #[serde(default)]
    w: String,
    #[serde(default)]
    p: u32,
}

/// Encodes a player as a shareable challenge token.
pub fn encode_token(player: &Player) -> String {
    let payload = TokenPayload {
        n: player.name.clone(),
        l: player.level,
        e: player.element.name().to_string(),
        c: player.class_id.clone(),
        w: player.weapon.id.clone(),
        p: player.prestige,
    };
    // A struct of strings and integers always serializes.
    let json = serde_json::to_string(&payload).unwrap_or_default();
    STANDARD.encode(json)
}

/// Rebuilds a challenger from a token. `None` for anything malformed or missing a name,
/// level or class.
pub fn decode_token(token: &str) -> Option<Enemy> {
    let bytes = match STANDARD.decode(token.trim()) {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!(error = %e, "token is not base64");
            return None;
        }
    };
    let payload: TokenPayload = match serde_json::from_slice(&bytes) {
        Ok(payload) => payload,
        Err(e) => {
            debug!(error = %e, "token payload is not valid JSON");
            return None;
        }
    };
    if payload.n.is_empty() || payload.l == 0 || payload.c.is_empty() {
        return None;
    }
    Some(challenger(&payload))
}

fn challenger(payload: &TokenPayload) -> Enemy {
    let level = payload.l;
    let prestige_mult = 1.0 + payload.p as f64 * PVP_PRESTIGE_HP_BONUS;
    // Float math with saturating casts: the level comes from outside.
    let max_hp = ((PVP_BASE_HP as f64 + level as f64 * PVP_HP_PER_LEVEL as f64) * prestige_mult)
        as u32;
    let max_mp = (PVP_BASE_MP as f64 + level as f64 * PVP_MP_PER_LEVEL as f64) as u32;

    Enemy {
        name: format!("Rival {}", payload.n),
        level,
        current_hp: max_hp,
        max_hp,
        current_mp: max_mp,
        max_mp,
        element: payload.e.parse().unwrap_or(Element::Physical),
        icon: "Swords".to_string(),
        description: format!("Lvl {} {} [Prestige {}]", level, payload.e, payload.p),
        xp_reward: (level as f64 * PVP_XP_PER_LEVEL * prestige_mult) as u32,
        gold_reward: (level as f64 * PVP_GOLD_PER_LEVEL * prestige_mult) as u32,
        is_boss: false,
        is_pvp: true,
        pvp_weapon: Some(weapon_or_default(&payload.w)),
    }
}
