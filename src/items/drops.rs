use super::catalog::all_weapons;
use super::types::Weapon;
use rand::seq::SliceRandom;
use rand::Rng;

/// Weapons a boss can drop for a player wielding `equipped`.
pub fn boss_drop_pool(equipped: &Weapon) -> Vec<&'static Weapon> {
    all_weapons()
        .iter()
        .filter(|w| w.is_upgrade_over(equipped))
        .collect()
}

/// Rolls a boss drop: uniform over weapons that hit harder than the equipped one or are
/// above common rarity. `None` only if nothing qualifies.
pub fn roll_boss_drop(equipped: &Weapon, rng: &mut impl Rng) -> Option<Weapon> {
    boss_drop_pool(equipped).choose(rng).map(|w| (*w).clone())
}
