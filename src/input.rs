//! Command parsing for the line-oriented front end.

use std::str::FromStr;

use error::GameError;
use items::ItemKind;

/// One line of player input
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Attack,
    /// Raw selection text; the battle decides whether it names an item
    UseItem(String),
    Status,
    Log,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = GameError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "a" | "attack" => Ok(Command::Attack),
            "i" | "item" | "use" => Ok(Command::UseItem(rest.to_string())),
            "s" | "status" => Ok(Command::Status),
            "l" | "log" => Ok(Command::Log),
            "h" | "help" | "?" => Ok(Command::Help),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            _ => Err(GameError::InputError(line.to_string())),
        }
    }
}

/// Usage text listing every command and item
pub fn help_text() -> String {
    let mut text = String::from(
        "Commands:\n  attack (a)         attack the first enemy still standing\n  item <kind> (i)    use an item\n  status (s)         show combatants and items\n  log (l)            replay the battle log\n  quit (q)           leave the battle\nItems:\n",
    );
    for kind in ItemKind::all() {
        text.push_str(&format!("  {:<14} {}\n", kind.to_string(), kind.description()));
    }
    text
}
