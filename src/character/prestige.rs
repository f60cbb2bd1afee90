use super::classes::find_class;
use super::player::Player;
use crate::core::config::ProgressionRules;
use crate::core::constants::PRESTIGE_REQUIRED_LEVEL;
use crate::core::error::ProgressionError;
use tracing::info;

pub fn can_prestige(player: &Player) -> bool {
    player.level >= PRESTIGE_REQUIRED_LEVEL
}

/// Prestiges with the default rules.
pub fn apply_prestige(player: &mut Player) -> Result<(), ProgressionError> {
    apply_prestige_with(player, &ProgressionRules::default())
}

/// Resets the character to level 1 at the next prestige rank.
///
/// Gold, weapon, custom abilities and unlocked abilities carry over. Max HP/MP are rebuilt
/// from the class base scaled for the new rank, then fully restored.
pub fn apply_prestige_with(
    player: &mut Player,
    rules: &ProgressionRules,
) -> Result<(), ProgressionError> {
    if !can_prestige(player) {
        return Err(ProgressionError::PrestigeLocked {
            level: player.level,
            required: PRESTIGE_REQUIRED_LEVEL,
        });
    }
    let class = find_class(&player.class_id)
        .ok_or_else(|| ProgressionError::UnknownClass(player.class_id.clone()))?;

    player.prestige += 1;
    player.level = 1;
    player.xp = 0;
    player.max_xp = rules.base_xp;
    player.max_hp = rules.scaled(class.base_hp, player.prestige);
    player.max_mp = rules.scaled(class.base_mp, player.prestige);
    player.restore();

    info!(prestige = player.prestige, class = %player.class_id, "prestige");
    Ok(())
}
