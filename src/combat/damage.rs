//! Damage calculation shared by the turn engine, the simulator and UI previews.
//!
//! These functions never touch session state. Randomness is injected so callers can
//! preview or replay a roll with a seeded generator.

use super::element::Element;
use crate::core::constants::*;
use rand::Rng;

/// Result of a single damage roll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageRoll {
    /// Final damage after type multiplier and variance (never negative).
    pub damage: u32,
    /// True when the attacker's element is strong against the defender.
    pub is_critical: bool,
    /// Type multiplier: 1.5, 1.0 or 0.75.
    pub multiplier: f64,
}

/// Type multiplier for an attack, and whether it counts as critical.
///
/// Advantage is checked first, so a self-referential pair (Physical vs Physical)
/// gets the 1.5 bonus both ways.
pub fn type_multiplier(attacker: Element, defender: Element) -> (f64, bool) {
    if attacker.is_strong_against(defender) {
        (ADVANTAGE_MULTIPLIER, true)
    } else if attacker.is_weak_against(defender) {
        (DISADVANTAGE_MULTIPLIER, false)
    } else {
        (1.0, false)
    }
}

/// Damage before type multiplier and variance.
pub fn raw_damage(attacker_level: u32, base_power: f64, weapon_bonus: u32) -> f64 {
    base_power + weapon_bonus as f64 + attacker_level as f64 * DAMAGE_PER_ATTACKER_LEVEL
}

/// Rolls damage for one attack.
///
/// # Arguments
/// * `attacker_level` - Attacker's level (adds 2 damage per level)
/// * `base_power` - Ability damage, or the scripted enemy's base power
/// * `attacker_element` / `defender_element` - Used for the type multiplier
/// * `weapon_bonus` - Flat bonus from the equipped weapon
/// * `rng` - Variance source, uniform in [0.9, 1.1)
pub fn compute_damage(
    attacker_level: u32,
    base_power: f64,
    attacker_element: Element,
    defender_element: Element,
    weapon_bonus: u32,
    rng: &mut impl Rng,
) -> DamageRoll {
    let variance = rng.gen_range(DAMAGE_VARIANCE_MIN..DAMAGE_VARIANCE_MAX);
    roll_with_variance(
        attacker_level,
        base_power,
        attacker_element,
        defender_element,
        weapon_bonus,
        variance,
    )
}

/// Deterministic form of [`compute_damage`] for a known variance.
pub fn roll_with_variance(
    attacker_level: u32,
    base_power: f64,
    attacker_element: Element,
    defender_element: Element,
    weapon_bonus: u32,
    variance: f64,
) -> DamageRoll {
    let (multiplier, is_critical) = type_multiplier(attacker_element, defender_element);
    let raw = raw_damage(attacker_level, base_power, weapon_bonus);
    let damage = (raw * multiplier * variance).floor().max(0.0) as u32;

    DamageRoll {
        damage,
        is_critical,
        multiplier,
    }
}

/// Lowest and highest damage an attack can roll. For UI previews.
pub fn damage_range(
    attacker_level: u32,
    base_power: f64,
    attacker_element: Element,
    defender_element: Element,
    weapon_bonus: u32,
) -> (u32, u32) {
    let low = roll_with_variance(
        attacker_level,
        base_power,
        attacker_element,
        defender_element,
        weapon_bonus,
        DAMAGE_VARIANCE_MIN,
    );
    // Upper bound is exclusive; the largest reachable floor is just under 1.1x.
    let high = roll_with_variance(
        attacker_level,
        base_power,
        attacker_element,
        defender_element,
        weapon_bonus,
        DAMAGE_VARIANCE_MAX - f64::EPSILON,
    );
    (low.damage, high.damage)
}

/// Base power of the scripted enemy attack: 10 + level * 2.5.
pub fn enemy_base_power(enemy_level: u32) -> f64 {
    ENEMY_BASE_POWER + enemy_level as f64 * ENEMY_POWER_PER_LEVEL
}

/// Subtracts damage from HP, flooring at zero.
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}

/// Adds healing to HP, capping at max.
pub fn apply_heal(current_hp: u32, max_hp: u32, heal: u32) -> u32 {
    current_hp.saturating_add(heal).min(max_hp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_neutral_damage_formula() {
        // 10 base + 5 weapon + 3 * 2 level = 21
        let roll = roll_with_variance(3, 10.0, Element::Fire, Element::Earth, 5, 1.0);
        assert_eq!(roll.damage, 21);
        assert!(!roll.is_critical);
        assert_eq!(roll.multiplier, 1.0);
    }

    #[test]
    fn test_advantage_is_critical() {
        let roll = roll_with_variance(1, 20.0, Element::Water, Element::Fire, 0, 1.0);
        assert_eq!(roll.multiplier, 1.5);
        assert!(roll.is_critical);
        assert_eq!(roll.damage, 33); // (20 + 2) * 1.5
    }

    #[test]
    fn test_disadvantage_reduces_damage() {
        let roll = roll_with_variance(1, 20.0, Element::Fire, Element::Water, 0, 1.0);
        assert_eq!(roll.multiplier, 0.75);
        assert!(!roll.is_critical);
        assert_eq!(roll.damage, 16); // floor(22 * 0.75)
    }

    #[test]
    fn test_physical_mirror_is_advantage() {
        let (mult, crit) = type_multiplier(Element::Physical, Element::Physical);
        assert_eq!(mult, 1.5);
        assert!(crit);
    }

    #[test]
    fn test_variance_stays_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let (low, high) = damage_range(5, 30.0, Element::Air, Element::Light, 12);
        for _ in 0..500 {
            let roll = compute_damage(5, 30.0, Element::Air, Element::Light, 12, &mut rng);
            assert!(roll.damage >= low && roll.damage <= high);
        }
    }

    #[test]
    fn test_zero_power_never_negative() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let roll = compute_damage(0, 0.0, Element::Fire, Element::Water, 0, &mut rng);
        assert_eq!(roll.damage, 0);
    }

    #[test]
    fn test_enemy_base_power() {
        assert_eq!(enemy_base_power(1), 12.5);
        assert_eq!(enemy_base_power(4), 20.0);
    }

    #[test]
    fn test_apply_damage_and_heal_clamp() {
        assert_eq!(apply_damage(30, 100), 0);
        assert_eq!(apply_damage(100, 30), 70);
        assert_eq!(apply_heal(90, 100, 50), 100);
        assert_eq!(apply_heal(10, 100, 50), 60);
    }
}
