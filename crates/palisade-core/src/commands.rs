//! Player commands sent from the input surface to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::TowerKind;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Building ---
    /// Place a tower of the given kind at a point. Silently rejected on the
    /// path buffer, with insufficient gold, or too close to another tower.
    PlaceTower { x: f64, y: f64, kind: TowerKind },
    /// Select the tower whose base contains the point; clears the selection
    /// if none does.
    SelectTower { x: f64, y: f64 },
    /// Clear the tower selection.
    Deselect,
    /// Upgrade the selected tower. No-op at max level or without the gold.
    UpgradeTower,
    /// Sell the selected tower for its refund value.
    SellTower,

    // --- Flow control ---
    /// Begin the next wave (Waiting → Playing).
    StartWave,
    Pause,
    Resume,
    /// Reset all state after a game over or victory.
    Restart,
}
