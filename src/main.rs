use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use turn_battle::input::{Command, help_text};
use turn_battle::{Battle, BattleConfig, Combatant, handle_error};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => BattleConfig::load(&path)
            .with_context(|| format!("Failed to load battle from {}", path))?,
        None => BattleConfig::default(),
    };
    let mut battle = config.build().context("Failed to set up battle")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", help_text())?;
    let mut printed = print_new_lines(&mut out, &battle, 0)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    while !battle.is_over() {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let outcome = match line.parse::<Command>() {
            Ok(Command::Attack) => battle.attack_action(),
            Ok(Command::UseItem(selection)) => battle.use_item_named(&selection),
            Ok(Command::Status) => {
                print_status(&mut out, &battle)?;
                Ok(())
            }
            Ok(Command::Log) => {
                for entry in battle.log() {
                    writeln!(out, "{}", entry)?;
                }
                Ok(())
            }
            Ok(Command::Help) => {
                writeln!(out, "{}", help_text())?;
                Ok(())
            }
            Ok(Command::Quit) => break,
            Err(e) => Err(e),
        };

        if let Err(e) = outcome {
            writeln!(out, "{}", handle_error(&e))?;
            if !e.is_recoverable() {
                break;
            }
        }
        printed = print_new_lines(&mut out, &battle, printed)?;
    }

    writeln!(out, "Result: {}", battle.state())?;
    Ok(())
}

// Print log entries added since `from`; returns the new high-water mark.
fn print_new_lines(out: &mut impl Write, battle: &Battle, from: usize) -> io::Result<usize> {
    let log = battle.log();
    for entry in &log[from..] {
        writeln!(out, "{}", entry)?;
    }
    Ok(log.len())
}

fn print_status(out: &mut impl Write, battle: &Battle) -> io::Result<()> {
    let player = battle.player();
    let stats = player.character();
    writeln!(
        out,
        "{}: health {}, attack {}, defense {}",
        stats.name(),
        stats.health,
        stats.attack_power,
        stats.defense
    )?;
    for (kind, count) in player.inventory().iter() {
        writeln!(out, "  {} x{}", kind, count)?;
    }
    for enemy in battle.enemies() {
        let status = if enemy.is_alive() { "" } else { " (defeated)" };
        writeln!(out, "{}: health {}{}", enemy.name(), enemy.health(), status)?;
    }
    Ok(())
}
