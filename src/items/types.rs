use crate::combat::element::Element;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common = 0,
    Rare = 1,
    Legendary = 2,
    Godly = 3,
}

impl Rarity {
    /// Returns the display name for this rarity tier.
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Legendary => "Legendary",
            Rarity::Godly => "Godly",
        }
    }
}

/// An equippable weapon. Its element is cosmetic; only `damage` feeds combat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub id: String,
    pub name: String,
    /// Flat bonus added to every ability the wielder casts.
    pub damage: u32,
    pub element: Element,
    pub icon: String,
    pub rarity: Rarity,
    pub price: u32,
}

impl Weapon {
    /// True if this weapon qualifies as a boss drop for someone wielding `equipped`.
    pub fn is_upgrade_over(&self, equipped: &Weapon) -> bool {
        self.damage > equipped.damage || self.rarity != Rarity::Common
    }
}
