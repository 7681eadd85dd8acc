//! Turn-based combat simulator: a player against an ordered line of enemies.

pub mod battle;
pub mod config;
pub mod input;

pub use battle::{Battle, BattleState};
pub use combat::{Character, CombatResult, Combatant, Enemy};
pub use config::{BattleConfig, CombatantConfig};
pub use error::{GameError, handle_error};
pub use hero::{Inventory, ItemUse, Player};
pub use items::{ItemEffect, ItemKind};
