// src/hero/src/lib.rs
//! The player-controlled combatant and its item stock.

mod player;
mod inventory;

pub use self::{
    player::{ItemUse, NO_ITEMS_LEFT, Player},
    inventory::Inventory,
};
