//! Setup-time description of an encounter.

use std::collections::BTreeMap;
use std::path::Path;

use combat::Enemy;
use error::GameError;
use hero::{Inventory, Player};
use items::{DEFAULT_ITEM_COUNT, ItemKind};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::battle::Battle;

/// Starting stats of one combatant
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantConfig {
    pub name: String,
    pub health: i32,
    pub attack_power: i32,
    pub defense: i32,
}

impl CombatantConfig {
    pub fn new(name: &str, health: i32, attack_power: i32, defense: i32) -> Self {
        Self {
            name: name.to_string(),
            health,
            attack_power,
            defense,
        }
    }

    fn validate(&self, role: &str) -> Result<(), GameError> {
        if self.name.trim().is_empty() {
            return Err(GameError::InvalidConfig(format!("{} has an empty name", role)));
        }
        if self.health <= 0 {
            return Err(GameError::InvalidConfig(format!(
                "{} '{}' must start with positive health",
                role, self.name
            )));
        }
        Ok(())
    }
}

/// Player, enemy line-up and starting item counts.
///
/// Kinds missing from `item_counts` start empty. When the whole field is
/// omitted every kind gets [`DEFAULT_ITEM_COUNT`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleConfig {
    pub player: CombatantConfig,
    pub enemies: Vec<CombatantConfig>,
    #[serde(default = "default_item_counts")]
    pub item_counts: BTreeMap<ItemKind, u32>,
}

fn default_item_counts() -> BTreeMap<ItemKind, u32> {
    ItemKind::iter().map(|kind| (kind, DEFAULT_ITEM_COUNT)).collect()
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            player: CombatantConfig::new("Junior", 100, 15, 5),
            enemies: vec![
                CombatantConfig::new("Goblin", 30, 10, 2),
                CombatantConfig::new("Mr. Big Chungus", 50, 12, 3),
            ],
            item_counts: default_item_counts(),
        }
    }
}

impl BattleConfig {
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        self.player.validate("player")?;
        if self.enemies.is_empty() {
            return Err(GameError::InvalidConfig(
                "at least one enemy is required".to_string(),
            ));
        }
        for enemy in &self.enemies {
            enemy.validate("enemy")?;
        }
        Ok(())
    }

    /// Validate and set up a fresh battle
    pub fn build(&self) -> Result<Battle, GameError> {
        self.validate()?;

        let p = &self.player;
        let player = Player::new(p.name.as_str(), p.health, p.attack_power, p.defense)
            .with_inventory(Inventory::with_counts(self.item_counts.clone()));
        let enemies = self
            .enemies
            .iter()
            .map(|e| Enemy::new(e.name.as_str(), e.health, e.attack_power, e.defense))
            .collect();

        Ok(Battle::new(player, enemies))
    }
}
