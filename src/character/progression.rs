//! Experience, level-ups and ability unlocks.

use super::player::Player;
use crate::abilities::unlocked_at;
use crate::core::config::ProgressionRules;
use tracing::info;

/// What a reward grant changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelUpReport {
    pub levels_gained: u32,
    pub new_level: u32,
    pub hp_gained: u32,
    pub mp_gained: u32,
    /// Ability ids unlocked by this grant, in unlock order.
    pub new_abilities: Vec<String>,
}

impl LevelUpReport {
    pub fn leveled_up(&self) -> bool {
        self.levels_gained > 0
    }
}

/// XP needed to go from `max_xp` to the next threshold.
pub fn next_max_xp(max_xp: u32, rules: &ProgressionRules) -> u32 {
    (max_xp as f64 * rules.xp_scaling).floor() as u32
}

/// Grants XP and gold with the default rules.
pub fn apply_victory_rewards(player: &mut Player, xp_gain: u32, gold_gain: u32) -> LevelUpReport {
    apply_victory_rewards_with(player, xp_gain, gold_gain, &ProgressionRules::default())
}

/// Grants XP and gold, resolving every level-up the XP pays for.
///
/// Each level adds HP/MP growth (scaled by prestige under the extended rules). Any level
/// gained restores HP and MP fully and unlocks every catalog ability of the player's
/// element or Physical up to the new level.
pub fn apply_victory_rewards_with(
    player: &mut Player,
    xp_gain: u32,
    gold_gain: u32,
    rules: &ProgressionRules,
) -> LevelUpReport {
    player.gold = player.gold.saturating_add(gold_gain);
    player.xp = player.xp.saturating_add(xp_gain);

    let mut report = LevelUpReport {
        new_level: player.level,
        ..Default::default()
    };

    let hp_step = rules.scaled(rules.hp_per_level, player.prestige);
    let mp_step = rules.scaled(rules.mp_per_level, player.prestige);

    while player.max_xp > 0 && player.xp >= player.max_xp {
        player.xp -= player.max_xp;
        player.max_xp = next_max_xp(player.max_xp, rules);
        player.level += 1;
        player.max_hp += hp_step;
        player.max_mp += mp_step;

        report.levels_gained += 1;
        report.hp_gained += hp_step;
        report.mp_gained += mp_step;
    }

    if report.leveled_up() {
        report.new_level = player.level;
        player.restore();
        report.new_abilities = unlock_earned_abilities(player);
        info!(
            level = player.level,
            levels_gained = report.levels_gained,
            "level up"
        );
    }

    report
}

/// Unlocks every catalog ability the player's element and level entitle them to.
/// Returns the ids that were newly added.
pub fn unlock_earned_abilities(player: &mut Player) -> Vec<String> {
    let earned: Vec<&str> = unlocked_at(player.element, player.level)
        .map(|a| a.id.as_str())
        .collect();
    earned
        .into_iter()
        .filter(|id| player.unlock(id))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::player::create_player;
    use crate::core::config::Ruleset;

    #[test]
    fn test_zero_reward_changes_nothing() {
        let mut player = create_player("knight", 0).unwrap();
        player.current_hp = 10;
        let before = player.clone();
        let report = apply_victory_rewards(&mut player, 0, 0);
        assert_eq!(player, before);
        assert!(!report.leveled_up());
    }

    #[test]
    fn test_single_level_up() {
        let mut player = create_player("knight", 0).unwrap();
        player.current_hp = 1;
        let report = apply_victory_rewards(&mut player, 55, 10);
        assert_eq!(player.level, 2);
        assert_eq!(player.xp, 5);
        assert_eq!(player.max_xp, 65);
        assert_eq!(player.max_hp, 180);
        assert_eq!(player.current_hp, 180);
        assert_eq!(player.max_mp, 55);
        assert_eq!(player.gold, 10);
        assert_eq!(report.new_abilities, vec!["quick_slash", "flame_burst"]);
    }

    #[test]
    fn test_cascade_across_levels() {
        let mut player = create_player("knight", 0).unwrap();
        // 50 + 65 + 84 = 199
        let report = apply_victory_rewards(&mut player, 200, 0);
        assert_eq!(report.levels_gained, 3);
        assert_eq!(player.level, 4);
        assert_eq!(player.xp, 1);
        assert_eq!(player.max_xp, 109);
        assert!(player.xp < player.max_xp);
    }

    #[test]
    fn test_prestige_scales_growth() {
        let rules = ProgressionRules::for_ruleset(Ruleset::Extended);
        let mut player = create_player("knight", 0).unwrap();
        player.prestige = 2;
        let report = apply_victory_rewards_with(&mut player, 50, 0, &rules);
        // 30 * 1.4 and 15 * 1.4
        assert_eq!(report.hp_gained, 42);
        assert_eq!(report.mp_gained, 21);
    }

    #[test]
    fn test_unlocks_never_revoke() {
        let mut player = create_player("mage", 0).unwrap();
        player.unlock("ember");
        apply_victory_rewards(&mut player, 50, 0);
        assert!(player.has_ability("ember"));
        assert!(player.has_ability("heal"));
    }
}
