//! Integration test: boss rewards
//!
//! Beating a boss equips a weapon that is stronger than the one used in the fight or is
//! above common rarity.

use odyssey::character::create_player;
use odyssey::combat::{CombatEvent, CombatSession};
use odyssey::enemies::{generate_enemy, make_boss};
use odyssey::items::{boss_drop_pool, find_weapon, Rarity};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn test_every_pool_entry_qualifies() {
    for id in ["rusty_sword", "training_wand", "chipped_dagger"] {
        let equipped = find_weapon(id).unwrap();
        let pool = boss_drop_pool(equipped);
        assert!(!pool.is_empty());
        for weapon in pool {
            assert!(weapon.damage > equipped.damage || weapon.rarity != Rarity::Common);
        }
    }
}

#[test]
fn test_boss_victory_equips_drop() {
    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut player = create_player("knight", 0).unwrap();
        let before = player.weapon.clone();

        let mut boss = make_boss(generate_enemy(1, &mut rng));
        assert!(boss.name.starts_with("BOSS: "));
        boss.current_hp = 1;

        let mut session = CombatSession::local(boss);
        let events = session.use_ability(&mut player, "strike", &mut rng).unwrap();
        let outcome = events
            .iter()
            .find_map(|e| match e {
                CombatEvent::Victory(outcome) => Some(outcome),
                _ => None,
            })
            .unwrap();

        let drop = outcome.boss_drop.clone().unwrap();
        assert_eq!(player.weapon, drop);
        assert!(drop.damage > before.damage || drop.rarity != Rarity::Common);
        assert!(outcome
            .messages
            .iter()
            .any(|m| m == &format!("BOSS DROP: You obtained {}!", drop.name)));
    }
}

#[test]
fn test_boss_rewards_are_multiplied() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let base = generate_enemy(4, &mut rng);
    let boss = make_boss(base.clone());
    assert_eq!(boss.max_hp, (base.max_hp as f64 * 1.5) as u32);
    assert_eq!(boss.current_hp, boss.max_hp);
    assert_eq!(boss.xp_reward, base.xp_reward * 2);
    assert_eq!(boss.gold_reward, base.gold_reward * 3);
    assert!(boss.is_boss);
}
