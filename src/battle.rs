//! Turn sequencing for a single player against an ordered line of enemies.
//!
//! Every public action resolves the player's move, then runs the enemy
//! phase, then checks for a winner. Everything that happens is appended to
//! an in-memory narrative log that front ends read back with [`Battle::log`].

use combat::{CombatResult, Combatant, Enemy};
use error::GameError;
use hero::{ItemUse, NO_ITEMS_LEFT, Player};
use items::ItemKind;
use strum_macros::Display;
use tracing::{debug, info, warn};

pub const BATTLE_BEGINS: &str = "Battle begins!";
pub const INVALID_ITEM_SELECTION: &str = "Invalid item selection.";
pub const PLAYER_LOST: &str = "Game Over! You died.";
pub const PLAYER_WON: &str = "You win! All enemies defeated!";

/// High-level phases of a battle. Both outcomes are terminal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display)]
pub enum BattleState {
    #[strum(to_string = "In progress")]
    InProgress,
    #[strum(to_string = "Player won")]
    PlayerWon,
    #[strum(to_string = "Player lost")]
    PlayerLost,
}

impl BattleState {
    pub fn is_terminal(self) -> bool {
        self != BattleState::InProgress
    }
}

/// Battle controller: owns the combatants and the narrative log
#[derive(Debug, Clone)]
pub struct Battle {
    player: Player,
    enemies: Vec<Enemy>,
    log: Vec<String>,
    state: BattleState,
    turn: u32,
}

impl Battle {
    pub fn new(player: Player, enemies: Vec<Enemy>) -> Self {
        info!(player = %player.name(), enemies = enemies.len(), "battle started");
        Self {
            player,
            enemies,
            log: vec![BATTLE_BEGINS.to_string()],
            state: BattleState::InProgress,
            turn: 0,
        }
    }

    /// Player attacks the first living enemy, then the enemies respond
    pub fn attack_action(&mut self) -> Result<(), GameError> {
        self.ensure_in_progress("attack")?;

        if let Some(enemy) = self.enemies.iter_mut().find(|enemy| enemy.is_alive()) {
            let result = self.player.attack(enemy.character_mut());
            let defeated = (!enemy.is_alive()).then(|| enemy.name().to_string());
            self.record(result);
            if let Some(name) = defeated {
                debug!(enemy = %name, "enemy defeated");
                self.push(format!("{} is defeated!", name));
            }
        }

        self.enemy_turn();
        Ok(())
    }

    /// Player uses one item, then the enemies respond.
    /// `None` stands for a selection the front end could not map to an item.
    pub fn use_item_action(&mut self, selection: Option<ItemKind>) -> Result<(), GameError> {
        self.ensure_in_progress("use item")?;

        match selection {
            Some(kind) => match self.player.use_item(kind) {
                ItemUse::Applied { kind, message } => {
                    self.push(format!("{} uses {}!", self.player.name(), kind));
                    self.push(message);
                }
                ItemUse::Empty { .. } => self.push(NO_ITEMS_LEFT.to_string()),
            },
            None => self.push(INVALID_ITEM_SELECTION.to_string()),
        }

        self.enemy_turn();
        Ok(())
    }

    /// Like [`Battle::use_item_action`], parsing the selection from text
    pub fn use_item_named(&mut self, selection: &str) -> Result<(), GameError> {
        self.use_item_action(selection.trim().parse::<ItemKind>().ok())
    }

    /// Narrative so far, oldest first
    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn state(&self) -> BattleState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    /// Number of completed turns (player action plus enemy phase)
    pub fn turn(&self) -> u32 {
        self.turn
    }

    // Living enemies attack in order, then the outcome is decided.
    fn enemy_turn(&mut self) {
        for enemy in self.enemies.iter_mut().filter(|enemy| enemy.is_alive()) {
            let result = enemy.take_turn(self.player.character_mut());
            self.log.extend(result.logs);
        }
        self.turn += 1;

        if !self.player.is_alive() {
            self.push(PLAYER_LOST.to_string());
            self.state = BattleState::PlayerLost;
        } else if self.enemies.iter().all(|enemy| !enemy.is_alive()) {
            self.push(PLAYER_WON.to_string());
            self.state = BattleState::PlayerWon;
        }

        if self.state.is_terminal() {
            info!(state = %self.state, turn = self.turn, "battle finished");
        }
    }

    fn ensure_in_progress(&self, action: &str) -> Result<(), GameError> {
        if self.state.is_terminal() {
            warn!(action, state = %self.state, "action rejected after battle ended");
            return Err(GameError::BattleOver(self.state.to_string()));
        }
        Ok(())
    }

    fn record(&mut self, result: CombatResult) {
        self.log.extend(result.logs);
    }

    fn push(&mut self, message: String) {
        self.log.push(message);
    }
}
