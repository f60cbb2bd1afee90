//! Victory rewards: XP, gold, win streak and boss drops.

use crate::character::player::Player;
use crate::character::progression::{apply_victory_rewards_with, LevelUpReport};
use crate::combat::types::Enemy;
use crate::core::config::ProgressionRules;
use crate::items::{roll_boss_drop, Weapon};
use crate::minigame::scale_reward;
use rand::Rng;
use tracing::info;

/// What a won encounter granted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VictoryOutcome {
    pub xp_gained: u32,
    pub gold_gained: u32,
    pub boss_drop: Option<Weapon>,
    pub level_up: LevelUpReport,
    /// Duels grant nothing; only a message is shown.
    pub pvp: bool,
    pub messages: Vec<String>,
}

/// Outcome of a won duel: no progression at all.
pub fn pvp_victory(opponent: &str) -> VictoryOutcome {
    VictoryOutcome {
        pvp: true,
        messages: vec![format!("You have defeated {opponent}! Honor is yours.")],
        ..Default::default()
    }
}

/// Grants the rewards of a defeated non-PvP enemy.
pub fn resolve_victory(
    player: &mut Player,
    enemy: &Enemy,
    rules: &ProgressionRules,
    rng: &mut impl Rng,
) -> VictoryOutcome {
    resolve_victory_scaled(player, enemy, 1.0, rules, rng)
}

/// Grants rewards with a minigame loot multiplier applied to XP and gold.
///
/// Order matters: gold and streak first, then the boss drop (judged against the weapon
/// equipped during the fight), then XP and level-ups.
pub fn resolve_victory_scaled(
    player: &mut Player,
    enemy: &Enemy,
    loot_multiplier: f64,
    rules: &ProgressionRules,
    rng: &mut impl Rng,
) -> VictoryOutcome {
    if enemy.is_pvp {
        return pvp_victory(&enemy.name);
    }

    let (xp, gold) = scale_reward(enemy.xp_reward, enemy.gold_reward, loot_multiplier);
    let mut outcome = VictoryOutcome {
        xp_gained: xp,
        gold_gained: gold,
        ..Default::default()
    };
    outcome
        .messages
        .push(format!("Victory! Gained {xp} XP and {gold} Gold."));

    player.win_streak += 1;

    if enemy.is_boss {
        if let Some(weapon) = roll_boss_drop(&player.weapon, rng) {
            outcome
                .messages
                .push(format!("BOSS DROP: You obtained {}!", weapon.name));
            player.weapon = weapon.clone();
            outcome.boss_drop = Some(weapon);
        }
    }

    outcome.level_up = apply_victory_rewards_with(player, xp, gold, rules);
    if outcome.level_up.leveled_up() {
        outcome.messages.push(format!(
            "LEVEL UP! You are now level {}.",
            outcome.level_up.new_level
        ));
    }

    info!(
        enemy = %enemy.name,
        xp,
        gold,
        streak = player.win_streak,
        boss_drop = outcome.boss_drop.as_ref().map(|w| w.name.as_str()),
        "victory"
    );
    outcome
}
