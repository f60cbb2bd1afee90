//! Integration test: progression ledger
//!
//! Victory rewards, level-up cascades, prestige and element evolution working together
//! on one character.

use odyssey::character::{
    apply_element_evolution, apply_prestige, apply_victory_rewards, apply_victory_rewards_with,
    can_evolve, can_prestige, create_player, create_player_with, Player,
};
use odyssey::combat::Element;
use odyssey::core::{EngineConfig, ProgressionError};

fn sorted_abilities(player: &Player) -> Vec<String> {
    let mut ids = player.unlocked_abilities.clone();
    ids.sort();
    ids
}

/// Feeds exactly enough XP for one level at a time.
fn level_stepwise(player: &mut Player, levels: u32) {
    for _ in 0..levels {
        let needed = player.max_xp - player.xp;
        apply_victory_rewards(player, needed, 0);
    }
}

#[test]
fn test_zero_xp_reward_is_a_no_op() {
    let mut player = create_player("sylvan", 0).unwrap();
    player.current_hp = 3;
    player.current_mp = 1;
    let before = player.clone();
    let report = apply_victory_rewards(&mut player, 0, 0);
    assert_eq!(player, before);
    assert_eq!(report.levels_gained, 0);
}

#[test]
fn test_multi_level_jump_matches_single_steps() {
    let mut jumped = create_player("knight", 0).unwrap();
    let mut stepped = jumped.clone();

    // 50 + 65 + 84 + 109 = 308
    let report = apply_victory_rewards(&mut jumped, 308, 0);
    level_stepwise(&mut stepped, 4);

    assert_eq!(report.levels_gained, 4);
    assert_eq!(jumped.level, stepped.level);
    assert_eq!(jumped.xp, stepped.xp);
    assert_eq!(jumped.max_xp, stepped.max_xp);
    assert_eq!(jumped.max_hp, stepped.max_hp);
    assert_eq!(jumped.max_mp, stepped.max_mp);
    assert_eq!(sorted_abilities(&jumped), sorted_abilities(&stepped));
}

#[test]
fn test_large_grant_cascades_with_remainder() {
    let mut player = create_player("knight", 0).unwrap();
    assert_eq!((player.xp, player.max_xp), (0, 50));

    // 50 + 65 + 84 + 109 + 141 = 449, leaving 51 toward 183
    let report = apply_victory_rewards(&mut player, 500, 0);
    assert_eq!(report.levels_gained, 5);
    assert_eq!(player.level, 6);
    assert_eq!(player.xp, 51);
    assert_eq!(player.max_xp, 183);
}

#[test]
fn test_prestige_cycle_keeps_loadout() {
    let mut player = create_player("knight", 0).unwrap();
    assert!(!can_prestige(&player));
    assert!(matches!(
        apply_prestige(&mut player),
        Err(ProgressionError::PrestigeLocked { level: 1, .. })
    ));

    level_stepwise(&mut player, 19);
    assert_eq!(player.level, 20);
    player.gold = 1234;
    let abilities = player.unlocked_abilities.clone();
    let weapon = player.weapon.clone();

    apply_prestige(&mut player).unwrap();
    assert_eq!(player.prestige, 1);
    assert_eq!(player.level, 1);
    assert_eq!(player.xp, 0);
    assert_eq!(player.max_xp, 50);
    assert_eq!(player.gold, 1234);
    assert_eq!(player.unlocked_abilities, abilities);
    assert_eq!(player.weapon, weapon);
    assert_eq!(player.current_hp, player.max_hp);
}

#[test]
fn test_prestige_class_unlocks_after_prestige() {
    assert!(create_player("void_lord", 0).is_err());
    assert!(create_player("void_lord", 1).is_ok());
}

#[test]
fn test_classic_ruleset_growth_is_flat() {
    let rules = EngineConfig::classic().progression_rules();
    let mut player = create_player_with("knight", 3, &rules).unwrap();
    assert_eq!(player.max_hp, 150);
    let report = apply_victory_rewards_with(&mut player, 50, 0, &rules);
    assert_eq!(report.hp_gained, 30);
    assert_eq!(report.mp_gained, 15);
}

#[test]
fn test_evolution_at_milestone() {
    let mut player = create_player("knight", 0).unwrap();
    level_stepwise(&mut player, 4);
    assert_eq!(player.level, 5);
    assert!(can_evolve(&player));
    let fire_abilities = player.unlocked_abilities.clone();
    player.current_hp = 1;

    let granted = apply_element_evolution(&mut player, Element::Ice).unwrap();
    assert_eq!(granted.as_deref(), Some("ice_shard"));
    assert_eq!(player.element, Element::Ice);
    assert_eq!(player.current_hp, player.max_hp);
    for id in &fire_abilities {
        assert!(player.has_ability(id));
    }

    // The next level-up unlocks Ice abilities, not Fire ones
    let needed = player.max_xp - player.xp;
    let report = apply_victory_rewards(&mut player, needed, 0);
    assert!(report.new_abilities.iter().any(|id| id == "frost"));
    assert!(!player.has_ability("supernova"));
}

#[test]
fn test_evolution_rejects_cosmetic_elements() {
    let mut player = create_player("knight", 0).unwrap();
    player.level = 10;
    assert_eq!(
        apply_element_evolution(&mut player, Element::Dream),
        Err(ProgressionError::NotEvolvable("Dream".to_string()))
    );
}
