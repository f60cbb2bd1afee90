//! Ability fusion: crafting a custom ability from two known ones.

use super::types::Ability;
use crate::character::player::Player;
use crate::core::constants::{FUSION_COST, FUSION_MANA_DISCOUNT, FUSION_POWER_BONUS};
use crate::core::error::FusionError;
use tracing::info;
use uuid::Uuid;

/// Name of a fused ability: first word of `a`, last word of `b`.
pub fn fused_name(a: &str, b: &str) -> String {
    let first = a.split_whitespace().next().unwrap_or(a);
    let last = b.split_whitespace().last().unwrap_or(b);
    if first == last {
        format!("Double {first}")
    } else {
        format!("{first} {last}")
    }
}

/// Builds the fused ability with a caller-chosen id. Same inputs give the same ability.
pub fn fuse_with_id(a: &Ability, b: &Ability, id: String) -> Ability {
    // Summed as floats so repeated fusion saturates instead of wrapping.
    let power = |x: u32, y: u32| ((x as f64 + y as f64) * FUSION_POWER_BONUS).floor() as u32;
    Ability {
        id,
        name: fused_name(&a.name, &b.name),
        description: format!("A fusion of {} and {}.", a.name, b.name),
        element: a.element,
        mana_cost: ((a.mana_cost as f64 + b.mana_cost as f64) * FUSION_MANA_DISCOUNT).floor()
            as u32,
        damage: power(a.damage, b.damage),
        heal: power(a.heal, b.heal),
        cooldown: a.cooldown.max(b.cooldown),
        unlock_level: 1,
        icon: a.icon.clone(),
        is_custom: true,
    }
}

/// Builds a fused ability with a fresh `custom_` id.
pub fn fuse(a: &Ability, b: &Ability) -> Ability {
    fuse_with_id(a, b, format!("custom_{}", Uuid::new_v4().simple()))
}

/// Fuses two abilities for the player: debits the cost and teaches the result.
///
/// Nothing changes on error.
pub fn fuse_for_player(
    player: &mut Player,
    a: &Ability,
    b: &Ability,
) -> Result<Ability, FusionError> {
    if a.id == b.id {
        return Err(FusionError::SameAbility);
    }
    if player.gold < FUSION_COST {
        return Err(FusionError::InsufficientGold {
            required: FUSION_COST,
            available: player.gold,
        });
    }

    let fused = fuse(a, b);
    player.gold -= FUSION_COST;
    player.custom_abilities.push(fused.clone());
    player.unlock(&fused.id);

    info!(name = %fused.name, id = %fused.id, "fused ability");
    Ok(fused)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abilities::catalog::find_ability;

    #[test]
    fn test_fused_name() {
        assert_eq!(fused_name("Ember Bolt", "Ice Shard"), "Ember Shard");
        assert_eq!(fused_name("Gust", "Gust"), "Double Gust");
        assert_eq!(fused_name("Spark", "Static Shock"), "Spark Shock");
    }

    #[test]
    fn test_fusion_stats() {
        let ember = find_ability("ember").unwrap();
        let heal = find_ability("heal").unwrap();
        let fused = fuse_with_id(ember, heal, "x".to_string());
        // (20 + 0) * 1.1, (0 + 50) * 1.1, (10 + 30) * 0.9
        assert_eq!(fused.damage, 22);
        assert_eq!(fused.heal, 55);
        assert_eq!(fused.mana_cost, 36);
        assert_eq!(fused.cooldown, 3);
        assert_eq!(fused.element, ember.element);
        assert_eq!(fused.unlock_level, 1);
        assert!(fused.is_custom);
    }

    #[test]
    fn test_chained_fusion_saturates() {
        let mut a = find_ability("execute").unwrap().clone();
        let mut b = find_ability("berserk").unwrap().clone();
        for round in 0..40 {
            let fused = fuse_with_id(&a, &b, format!("custom_{round}"));
            assert!(fused.damage >= a.damage.max(b.damage));
            a = b;
            b = fused;
        }
        assert_eq!(b.damage, u32::MAX);
        assert_eq!(b.unlock_level, 1);
    }

    #[test]
    fn test_fresh_ids_are_unique() {
        let a = find_ability("spark").unwrap();
        let b = find_ability("shock").unwrap();
        let first = fuse(a, b);
        let second = fuse(a, b);
        assert_ne!(first.id, second.id);
        assert!(first.id.starts_with("custom_"));
    }
}
