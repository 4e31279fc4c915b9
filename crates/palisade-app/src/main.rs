//! Headless palisade shell.
//!
//! Reads line-delimited JSON `PlayerCommand`s from stdin and forwards them
//! to the game loop thread. A line reading `snapshot` prints the latest
//! game state as JSON on stdout. EOF shuts the loop down and prints the
//! final snapshot.

use std::io::BufRead;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use palisade_app::game_loop;
use palisade_app::state::{GameLoopCommand, SnapshotSlot};
use palisade_core::commands::PlayerCommand;
use palisade_sim::engine::SimConfig;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let latest_snapshot: SnapshotSlot = Arc::new(Mutex::new(None));
    let cmd_tx = game_loop::spawn_game_loop(SimConfig::default(), Arc::clone(&latest_snapshot));

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "snapshot" {
            print_snapshot(&latest_snapshot)?;
            continue;
        }
        match serde_json::from_str::<PlayerCommand>(line) {
            Ok(command) => {
                if cmd_tx.send(GameLoopCommand::Player(command)).is_err() {
                    break;
                }
            }
            Err(err) => warn!(%err, "ignoring malformed command"),
        }
    }

    let _ = cmd_tx.send(GameLoopCommand::Shutdown);
    print_snapshot(&latest_snapshot)?;
    Ok(())
}

fn print_snapshot(slot: &SnapshotSlot) -> Result<()> {
    let snapshot = slot.lock().ok().and_then(|s| s.clone());
    if let Some(snapshot) = snapshot {
        println!("{}", serde_json::to_string(&snapshot)?);
    }
    Ok(())
}
