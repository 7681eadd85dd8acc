//src/items/src/lib.rs
//! Consumable items the player can use during a battle.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Fixed effect magnitudes. Adjust here to rebalance every item at once.
pub mod constants {
    pub const HEAL_AMOUNT: i32 = 20; // Health restored by one Heal
    pub const DAMAGE_BOOST_AMOUNT: i32 = 5; // Attack power gained per DamageBoost
    pub const DEFENSE_BOOST_AMOUNT: i32 = 5; // Defense gained per DefenseBoost
    pub const DEFAULT_ITEM_COUNT: u32 = 3; // Starting stack of every kind
}

pub use constants::*;

/// Item kinds (closed set)
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    #[strum(to_string = "Heal", serialize = "heal", serialize = "potion")]
    Heal,
    #[strum(
        to_string = "Damage Boost",
        serialize = "damage_boost",
        serialize = "damage",
        serialize = "dmg",
        serialize = "atk"
    )]
    DamageBoost,
    #[strum(
        to_string = "Defense Boost",
        serialize = "defense_boost",
        serialize = "defense",
        serialize = "def"
    )]
    DefenseBoost,
}

/// What a single use of an item does to its user's stats.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ItemEffect {
    Heal(i32),
    AttackBoost(i32),
    DefenseBoost(i32),
}

impl ItemKind {
    /// All kinds in inventory order
    pub fn all() -> Vec<ItemKind> {
        ItemKind::iter().collect()
    }

    /// The fixed effect of using one item of this kind
    pub fn effect(self) -> ItemEffect {
        match self {
            ItemKind::Heal => ItemEffect::Heal(HEAL_AMOUNT),
            ItemKind::DamageBoost => ItemEffect::AttackBoost(DAMAGE_BOOST_AMOUNT),
            ItemKind::DefenseBoost => ItemEffect::DefenseBoost(DEFENSE_BOOST_AMOUNT),
        }
    }

    /// Short one-line description for menus
    pub fn description(self) -> String {
        match self.effect() {
            ItemEffect::Heal(n) => format!("restores {} health", n),
            ItemEffect::AttackBoost(n) => format!("+{} attack power", n),
            ItemEffect::DefenseBoost(n) => format!("+{} defense", n),
        }
    }
}
