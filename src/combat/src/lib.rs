// src/combat/src/lib.rs
//! Combat entities and damage resolution.

pub mod combatant;
pub mod enemy;

pub use crate::combatant::Combatant;
pub use crate::enemy::Enemy;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Base stats shared by every combat entity
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    name: String,
    pub health: i32,
    pub attack_power: i32,
    pub defense: i32,
}

impl Character {
    pub fn new(name: impl Into<String>, health: i32, attack_power: i32, defense: i32) -> Self {
        Self {
            name: name.into(),
            health,
            attack_power,
            defense,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Damage left after defense, never negative
    pub fn effective_damage(&self, amount: i32) -> i32 {
        amount.saturating_sub(self.defense).max(0)
    }

    /// Apply incoming damage. Health is not floored; death is `health <= 0`.
    pub fn take_damage(&mut self, amount: i32) -> CombatResult {
        let damage = self.effective_damage(amount);
        self.health = self.health.saturating_sub(damage);
        debug!(defender = %self.name, amount, damage, health = self.health, "damage applied");

        let mut result = CombatResult::new();
        result.damage = damage;
        result.defeated = !self.is_alive();
        result.log(format!(
            "{} takes {} damage. Remaining health: {}",
            self.name, damage, self.health
        ));
        result
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Hit `target` with this character's current attack power.
    /// Does not check whether the target is still alive.
    pub fn attack(&self, target: &mut Character) -> CombatResult {
        let mut result = CombatResult::new();
        result.log(format!("{} attacks {}!", self.name, target.name));
        result.combine(target.take_damage(self.attack_power));
        result
    }
}

/// Combat result with detailed logs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombatResult {
    pub logs: Vec<String>, // Narrative lines, in the order they happened
    pub damage: i32,       // Effective damage dealt
    pub defeated: bool,    // Whether the target dropped to zero or below
}

impl CombatResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&mut self, message: String) {
        self.logs.push(message);
    }

    pub fn combine(&mut self, other: CombatResult) {
        self.logs.extend(other.logs);
        self.defeated = self.defeated || other.defeated;
        self.damage += other.damage;
    }

    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_defense_reduces_damage() {
        let mut goblin = Character::new("Goblin", 30, 10, 2);
        let result = goblin.take_damage(15);
        assert_eq!(result.damage, 13);
        assert_eq!(goblin.health, 17);
        assert!(!result.defeated);
        assert_eq!(result.logs, vec!["Goblin takes 13 damage. Remaining health: 17"]);
    }

    #[test]
    fn test_defense_above_damage_deals_nothing() {
        let mut tank = Character::new("Tank", 10, 1, 50);
        let result = tank.take_damage(12);
        assert_eq!(result.damage, 0);
        assert_eq!(tank.health, 10);

        let result = tank.take_damage(-7);
        assert_eq!(result.damage, 0);
        assert_eq!(tank.health, 10);
    }

    #[test]
    fn test_health_can_go_negative() {
        let mut rat = Character::new("Rat", 3, 1, 0);
        let result = rat.take_damage(10);
        assert_eq!(rat.health, -7);
        assert!(result.defeated);
        assert!(!rat.is_alive());
    }

    #[test]
    fn test_attack_logs_before_damage() {
        let hero = Character::new("Junior", 100, 15, 5);
        let mut goblin = Character::new("Goblin", 30, 10, 2);
        let result = hero.attack(&mut goblin);
        assert_eq!(
            result.logs,
            vec![
                "Junior attacks Goblin!".to_string(),
                "Goblin takes 13 damage. Remaining health: 17".to_string(),
            ]
        );
        assert_eq!(result.damage, 13);
    }

    #[test]
    fn test_combine_results() {
        let mut a = CombatResult::new();
        a.log("one".to_string());
        a.damage = 3;
        let mut b = CombatResult::new();
        b.log("two".to_string());
        b.damage = 4;
        b.defeated = true;
        a.combine(b);
        assert_eq!(a.logs, vec!["one", "two"]);
        assert_eq!(a.damage, 7);
        assert!(a.defeated);
    }

    proptest! {
        #[test]
        fn effective_damage_is_floored_difference(
            health in -50i32..500,
            amount in -100i32..200,
            defense in 0i32..100,
        ) {
            let mut target = Character::new("Dummy", health, 0, defense);
            let result = target.take_damage(amount);
            prop_assert_eq!(result.damage, (amount - defense).max(0));
            prop_assert!(target.health <= health);
            prop_assert_eq!(target.is_alive(), target.health > 0);
        }
    }
}
