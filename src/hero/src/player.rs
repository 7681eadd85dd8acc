// src/hero/src/player.rs
use combat::{Character, CombatResult, Combatant};
use items::{ItemEffect, ItemKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::inventory::Inventory;

/// Message logged when the requested item stack is empty
pub const NO_ITEMS_LEFT: &str = "No items of this type left.";

/// Player-controlled combatant. Its turn is driven by explicit actions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    character: Character,
    inventory: Inventory,
}

/// Outcome of a single item use
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemUse {
    /// One item was consumed and its effect applied
    Applied { kind: ItemKind, message: String },
    /// Nothing of this kind was left; no state changed
    Empty { kind: ItemKind },
}

impl ItemUse {
    pub fn kind(&self) -> ItemKind {
        match self {
            ItemUse::Applied { kind, .. } | ItemUse::Empty { kind } => *kind,
        }
    }

    pub fn applied(&self) -> bool {
        matches!(self, ItemUse::Applied { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            ItemUse::Applied { message, .. } => message,
            ItemUse::Empty { .. } => NO_ITEMS_LEFT,
        }
    }
}

impl Player {
    pub fn new(name: impl Into<String>, health: i32, attack_power: i32, defense: i32) -> Self {
        Self {
            character: Character::new(name, health, attack_power, defense),
            inventory: Inventory::default(),
        }
    }

    pub fn with_inventory(mut self, inventory: Inventory) -> Self {
        self.inventory = inventory;
        self
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn health(&self) -> i32 {
        self.character.health
    }

    /// Consume one item of `kind` and apply its fixed effect
    pub fn use_item(&mut self, kind: ItemKind) -> ItemUse {
        if !self.inventory.take(kind) {
            debug!(player = %self.character.name(), %kind, "item stack empty");
            return ItemUse::Empty { kind };
        }

        let name = self.character.name().to_string();
        let stats = &mut self.character;
        let message = match kind.effect() {
            ItemEffect::Heal(amount) => {
                stats.health = stats.health.saturating_add(amount);
                format!("{} heals for {} HP. Current health: {}", name, amount, stats.health)
            }
            ItemEffect::AttackBoost(amount) => {
                stats.attack_power = stats.attack_power.saturating_add(amount);
                format!(
                    "{} gains +{} Attack Power. Current attack: {}",
                    name, amount, stats.attack_power
                )
            }
            ItemEffect::DefenseBoost(amount) => {
                stats.defense = stats.defense.saturating_add(amount);
                format!(
                    "{} gains +{} Defense. Current defense: {}",
                    name, amount, stats.defense
                )
            }
        };
        info!(
            player = %name,
            %kind,
            remaining = self.inventory.count(kind),
            "item used"
        );

        ItemUse::Applied { kind, message }
    }
}

impl Combatant for Player {
    fn character(&self) -> &Character {
        &self.character
    }

    fn character_mut(&mut self) -> &mut Character {
        &mut self.character
    }

    // Player turns come from explicit battle actions
    fn take_turn(&mut self, _target: &mut Character) -> CombatResult {
        CombatResult::new()
    }
}
