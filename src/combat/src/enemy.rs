// src/combat/src/enemy.rs

use serde::{Deserialize, Serialize};

use crate::{Character, CombatResult, Combatant};

/// Autonomous opponent: always attacks on its turn
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    character: Character,
}

impl Enemy {
    pub fn new(name: impl Into<String>, health: i32, attack_power: i32, defense: i32) -> Self {
        Self {
            character: Character::new(name, health, attack_power, defense),
        }
    }

    pub fn health(&self) -> i32 {
        self.character.health
    }
}

impl From<Character> for Enemy {
    fn from(character: Character) -> Self {
        Self { character }
    }
}

impl Combatant for Enemy {
    fn character(&self) -> &Character {
        &self.character
    }

    fn character_mut(&mut self) -> &mut Character {
        &mut self.character
    }

    fn take_turn(&mut self, target: &mut Character) -> CombatResult {
        self.attack(target)
    }
}
