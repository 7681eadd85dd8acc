//! Error handling for the battle simulator.
//!
//! Covers rejected battle actions, setup configuration problems and the IO
//! performed by front ends.

use thiserror::Error;

/// Errors that can surface while setting up or driving a battle
#[derive(Debug, Error)]
pub enum GameError {
    /// An action arrived after the battle reached a terminal state
    #[error("Battle is already over: {0}")]
    BattleOver(String),

    /// Setup parameters are unusable
    #[error("Invalid battle configuration: {0}")]
    InvalidConfig(String),

    /// Configuration JSON could not be parsed
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// IO operation failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Front-end input could not be understood
    #[error("Input error: {0}")]
    InputError(String),
}

impl GameError {
    /// Whether the battle can continue after this error
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GameError::InputError(_))
    }
}

/// Convert a game error into a message suitable for players
pub fn handle_error(error: &GameError) -> String {
    match error {
        GameError::BattleOver(outcome) => format!("The battle has ended ({}).", outcome),
        GameError::InvalidConfig(reason) => format!("Cannot start battle: {}", reason),
        GameError::ConfigParse(e) => format!("Battle file is malformed: {}", e),
        GameError::IoError(e) => match e.kind() {
            std::io::ErrorKind::NotFound => "Battle file not found".to_string(),
            std::io::ErrorKind::PermissionDenied => {
                "No permission to read the battle file".to_string()
            }
            _ => format!("IO error: {}", e),
        },
        GameError::InputError(msg) => format!("Unrecognized command: {}", msg),
    }
}
