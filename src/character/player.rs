//! The persistent player character.

use super::classes::{find_class, CharacterClass};
use crate::abilities::{find_ability, Ability};
use crate::combat::element::Element;
use crate::core::config::ProgressionRules;
use crate::core::error::ProgressionError;
use crate::items::{weapon_or_default, Weapon};
use serde::{Deserialize, Serialize};

/// A player character.
///
/// `current_hp <= max_hp` and `current_mp <= max_mp` hold after every mutation made
/// through these methods. `xp < max_xp` holds outside a level-up cascade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub class_id: String,
    pub level: u32,
    pub xp: u32,
    pub max_xp: u32,
    pub current_hp: u32,
    pub max_hp: u32,
    pub current_mp: u32,
    pub max_mp: u32,
    pub gold: u32,
    pub element: Element,
    /// Ability ids in the order they were earned. Never shrinks.
    pub unlocked_abilities: Vec<String>,
    #[serde(default)]
    pub custom_abilities: Vec<Ability>,
    pub weapon: Weapon,
    #[serde(default)]
    pub win_streak: u32,
    #[serde(default)]
    pub prestige: u32,
    pub icon: String,
}

/// Creates a level 1 character of the given class using the default rules.
pub fn create_player(class_id: &str, prestige: u32) -> Result<Player, ProgressionError> {
    create_player_with(class_id, prestige, &ProgressionRules::default())
}

/// Creates a level 1 character. Prestige classes are refused below their required rank.
pub fn create_player_with(
    class_id: &str,
    prestige: u32,
    rules: &ProgressionRules,
) -> Result<Player, ProgressionError> {
    let class =
        find_class(class_id).ok_or_else(|| ProgressionError::UnknownClass(class_id.to_string()))?;
    if !class.is_available_at(prestige) {
        return Err(ProgressionError::ClassLocked {
            class: class.id.to_string(),
            required: class.required_prestige,
            prestige,
        });
    }
    Ok(Player::from_class(&class, prestige, rules))
}

impl Player {
    pub fn from_class(class: &CharacterClass, prestige: u32, rules: &ProgressionRules) -> Self {
        let max_hp = rules.scaled(class.base_hp, prestige);
        let max_mp = rules.scaled(class.base_mp, prestige);
        Self {
            name: class.name.to_string(),
            class_id: class.id.to_string(),
            level: 1,
            xp: 0,
            max_xp: rules.base_xp,
            current_hp: max_hp,
            max_hp,
            current_mp: max_mp,
            max_mp,
            gold: 0,
            element: class.element,
            unlocked_abilities: class
                .starting_abilities
                .iter()
                .map(|id| id.to_string())
                .collect(),
            custom_abilities: Vec::new(),
            weapon: weapon_or_default(class.starting_weapon),
            win_streak: 0,
            prestige,
            icon: class.icon.to_string(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.current_hp = self.current_hp.saturating_sub(amount);
    }

    /// Heals up to max HP. Returns the amount actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.current_hp;
        self.current_hp = self.current_hp.saturating_add(amount).min(self.max_hp);
        self.current_hp - before
    }

    /// Debits mana. Returns false (and changes nothing) if the pool is too small.
    pub fn spend_mana(&mut self, amount: u32) -> bool {
        if self.current_mp < amount {
            return false;
        }
        self.current_mp -= amount;
        true
    }

    pub fn regen_mana(&mut self, amount: u32) {
        self.current_mp = self.current_mp.saturating_add(amount).min(self.max_mp);
    }

    /// Full HP and MP.
    pub fn restore(&mut self) {
        self.current_hp = self.max_hp;
        self.current_mp = self.max_mp;
    }

    /// Re-establishes the HP/MP bounds after a direct field edit.
    pub fn clamp(&mut self) {
        self.current_hp = self.current_hp.min(self.max_hp);
        self.current_mp = self.current_mp.min(self.max_mp);
    }

    pub fn has_ability(&self, id: &str) -> bool {
        self.unlocked_abilities.iter().any(|a| a == id)
    }

    /// Adds an ability id if not already known. Returns true if it was new.
    pub fn unlock(&mut self, id: &str) -> bool {
        if self.has_ability(id) {
            return false;
        }
        self.unlocked_abilities.push(id.to_string());
        true
    }

    /// Resolves an ability id against custom abilities first, then the catalog.
    pub fn ability(&self, id: &str) -> Option<Ability> {
        self.custom_abilities
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .or_else(|| find_ability(id).cloned())
    }

    /// Every unlocked ability, resolved. Unknown ids are skipped.
    pub fn abilities(&self) -> Vec<Ability> {
        self.unlocked_abilities
            .iter()
            .filter_map(|id| self.ability(id))
            .collect()
    }
}
