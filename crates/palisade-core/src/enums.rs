//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Tower variant. Selects the stat curve and the on-hit behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TowerKind {
    /// Fast single-target shots.
    #[default]
    Archer,
    /// Slow, heavy shells that damage everything near the impact point.
    Cannon,
    /// Weak shots that also slow the struck enemy.
    Slow,
}

/// Enemy variant. Scales the wave's baseline hp/speed/reward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    #[default]
    Normal,
    /// Fast and fragile.
    Swift,
    /// Slow and heavily armored.
    Tank,
}

/// Enemy lifecycle phase. `Marching` is the only live phase; the other two
/// are terminal — a terminal enemy performs no further movement, damage, or
/// reward logic and is eligible for despawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyPhase {
    #[default]
    Marching,
    /// Killed by tower fire. Bounty pending until `rewarded` is set.
    Slain,
    /// Reached the end of the path and cost a life.
    Escaped,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Between waves: towers may be placed, the next wave awaits the start
    /// command.
    #[default]
    Waiting,
    Playing,
    Paused,
    GameOver,
    Victory,
}
