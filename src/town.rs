//! Town actions between encounters.

use crate::character::player::Player;
use crate::core::constants::RESPAWN_GOLD_KEEP;
use crate::core::error::TownError;
use crate::items::find_weapon;
use tracing::info;

/// Full HP and MP, free of charge.
pub fn rest(player: &mut Player) {
    player.restore();
}

/// Buys and equips a weapon from the catalog. The old weapon is discarded.
pub fn buy_weapon(player: &mut Player, weapon_id: &str) -> Result<(), TownError> {
    let weapon =
        find_weapon(weapon_id).ok_or_else(|| TownError::UnknownWeapon(weapon_id.to_string()))?;
    if player.gold < weapon.price {
        return Err(TownError::InsufficientGold {
            required: weapon.price,
            available: player.gold,
        });
    }
    player.gold -= weapon.price;
    player.weapon = weapon.clone();
    info!(weapon = %weapon.id, price = weapon.price, gold = player.gold, "weapon bought");
    Ok(())
}

/// Recovery after a defeat: a quarter of the gold is lost and the streak resets.
/// Returns the gold lost.
pub fn respawn(player: &mut Player) -> u32 {
    let kept = (player.gold as f64 * RESPAWN_GOLD_KEEP) as u32;
    let lost = player.gold - kept;
    player.gold = kept;
    player.win_streak = 0;
    player.restore();
    info!(lost, "respawned in town");
    lost
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::player::create_player;
    use crate::items::all_weapons;

    #[test]
    fn test_buy_requires_gold() {
        let mut player = create_player("knight", 0).unwrap();
        let weapon = all_weapons().iter().find(|w| w.price > 0).unwrap();
        player.gold = weapon.price - 1;
        assert_eq!(
            buy_weapon(&mut player, &weapon.id),
            Err(TownError::InsufficientGold {
                required: weapon.price,
                available: weapon.price - 1,
            })
        );
        assert_eq!(player.weapon.id, "rusty_sword");

        player.gold = weapon.price + 5;
        buy_weapon(&mut player, &weapon.id).unwrap();
        assert_eq!(player.gold, 5);
        assert_eq!(player.weapon.id, weapon.id);
    }

    #[test]
    fn test_unknown_weapon() {
        let mut player = create_player("knight", 0).unwrap();
        assert_eq!(
            buy_weapon(&mut player, "excalibur"),
            Err(TownError::UnknownWeapon("excalibur".to_string()))
        );
    }

    #[test]
    fn test_respawn_penalty() {
        let mut player = create_player("knight", 0).unwrap();
        player.gold = 101;
        player.win_streak = 4;
        player.current_hp = 0;
        assert_eq!(respawn(&mut player), 26);
        assert_eq!(player.gold, 75);
        assert_eq!(player.win_streak, 0);
        assert_eq!(player.current_hp, player.max_hp);
    }

    #[test]
    fn test_rest_restores() {
        let mut player = create_player("mage", 0).unwrap();
        player.current_hp = 1;
        player.current_mp = 0;
        rest(&mut player);
        assert_eq!(player.current_hp, 90);
        assert_eq!(player.current_mp, 100);
    }
}
