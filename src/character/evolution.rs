//! Element evolution: re-attuning a character at level milestones.

use super::player::Player;
use crate::abilities::starter_ability;
use crate::combat::element::Element;
use crate::core::constants::EVOLUTION_LEVEL_INTERVAL;
use crate::core::error::ProgressionError;
use tracing::info;

/// True on every 5th level.
pub fn can_evolve(player: &Player) -> bool {
    player.level >= EVOLUTION_LEVEL_INTERVAL && player.level % EVOLUTION_LEVEL_INTERVAL == 0
}

/// Swaps the player's element.
///
/// Grants the new element's level 1 ability if missing and restores HP/MP. Abilities of the
/// old element stay unlocked. Returns the id of the granted ability, if any.
pub fn apply_element_evolution(
    player: &mut Player,
    element: Element,
) -> Result<Option<String>, ProgressionError> {
    if !can_evolve(player) {
        return Err(ProgressionError::EvolutionLocked {
            level: player.level,
            interval: EVOLUTION_LEVEL_INTERVAL,
        });
    }
    if player.element == element {
        return Err(ProgressionError::SameElement(element.to_string()));
    }
    let starter = starter_ability(element)
        .ok_or_else(|| ProgressionError::NotEvolvable(element.to_string()))?;

    let previous = player.element;
    player.element = element;
    let granted = player.unlock(&starter.id).then(|| starter.id.clone());
    player.restore();

    info!(from = %previous, to = %element, level = player.level, "element evolution");
    Ok(granted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::player::create_player;

    fn player_at(level: u32) -> Player {
        let mut player = create_player("knight", 0).unwrap();
        player.level = level;
        player
    }

    #[test]
    fn test_only_on_milestones() {
        for level in [1, 4, 6, 9, 11] {
            let mut player = player_at(level);
            assert!(matches!(
                apply_element_evolution(&mut player, Element::Water),
                Err(ProgressionError::EvolutionLocked { .. })
            ));
        }
        assert!(can_evolve(&player_at(5)));
        assert!(can_evolve(&player_at(10)));
    }

    #[test]
    fn test_evolution_grants_starter_and_keeps_old() {
        let mut player = player_at(5);
        player.current_hp = 3;
        player.current_mp = 0;
        let granted = apply_element_evolution(&mut player, Element::Ice).unwrap();
        assert_eq!(granted.as_deref(), Some("ice_shard"));
        assert_eq!(player.element, Element::Ice);
        assert!(player.has_ability("ember"));
        assert_eq!(player.current_hp, player.max_hp);
        assert_eq!(player.current_mp, player.max_mp);
    }

    #[test]
    fn test_existing_starter_not_duplicated() {
        let mut player = player_at(10);
        player.unlock("bubble");
        let granted = apply_element_evolution(&mut player, Element::Water).unwrap();
        assert!(granted.is_none());
        assert_eq!(
            player.unlocked_abilities.iter().filter(|id| *id == "bubble").count(),
            1
        );
    }

    #[test]
    fn test_rejects_same_and_cosmetic() {
        let mut player = player_at(5);
        assert!(matches!(
            apply_element_evolution(&mut player, Element::Fire),
            Err(ProgressionError::SameElement(_))
        ));
        assert!(matches!(
            apply_element_evolution(&mut player, Element::Dream),
            Err(ProgressionError::NotEvolvable(_))
        ));
    }
}
