// src/combat/src/combatant.rs

use crate::{Character, CombatResult};

/// Anything that can take part in a battle.
///
/// Implemented by the player and by enemies; the two differ only in what
/// they do when their turn comes up.
pub trait Combatant {
    /// Base stats
    fn character(&self) -> &Character;

    /// Mutable base stats
    fn character_mut(&mut self) -> &mut Character;

    /// Act on this combatant's turn against `target`
    fn take_turn(&mut self, target: &mut Character) -> CombatResult;

    fn name(&self) -> &str {
        self.character().name()
    }

    fn is_alive(&self) -> bool {
        self.character().is_alive()
    }

    fn attack(&self, target: &mut Character) -> CombatResult {
        self.character().attack(target)
    }

    fn take_damage(&mut self, amount: i32) -> CombatResult {
        self.character_mut().take_damage(amount)
    }
}
