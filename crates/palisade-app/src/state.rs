//! Shared state between the I/O shell and the game loop thread.

use std::sync::{Arc, Mutex};

use palisade_core::commands::PlayerCommand;
use palisade_core::state::GameStateSnapshot;

/// Commands sent from the shell to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest-snapshot slot, updated by the game loop thread after each tick and
/// read synchronously by the shell.
pub type SnapshotSlot = Arc<Mutex<Option<GameStateSnapshot>>>;
