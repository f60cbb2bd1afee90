use crate::combat::element::Element;
use serde::{Deserialize, Serialize};

/// A combat ability. Catalog entries and fused abilities share this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub id: String,
    pub name: String,
    pub description: String,
    pub element: Element,
    pub mana_cost: u32,
    /// Base power; 0 for pure heals.
    #[serde(default)]
    pub damage: u32,
    /// Base healing; 0 for attacks.
    #[serde(default)]
    pub heal: u32,
    /// Turns before the ability is usable again (0 = none).
    #[serde(default)]
    pub cooldown: u32,
    pub unlock_level: u32,
    pub icon: String,
    #[serde(default)]
    pub is_custom: bool,
}

impl Ability {
    /// Heal abilities resolve as heals even when they also carry damage.
    pub fn is_heal(&self) -> bool {
        self.heal > 0
    }

    pub fn is_attack(&self) -> bool {
        !self.is_heal()
    }
}

/// One row of the static ability table:
/// `(id, name, description, mana_cost, damage, heal, cooldown, icon)`.
pub(crate) type AbilityRow = (
    &'static str,
    &'static str,
    &'static str,
    u32,
    u32,
    u32,
    u32,
    &'static str,
);

pub(crate) fn build_ability(row: &AbilityRow, element: Element, unlock_level: u32) -> Ability {
    let (id, name, description, mana_cost, damage, heal, cooldown, icon) = *row;
    Ability {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        element,
        mana_cost,
        damage,
        heal,
        cooldown,
        unlock_level,
        icon: icon.to_string(),
        is_custom: false,
    }
}
