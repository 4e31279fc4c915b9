//! Game state snapshot — the complete visible state produced each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::AudioEvent;
use crate::types::SimClock;

/// Complete game state handed to collaborators after each tick. Read-only:
/// renderers and UIs draw from it, never mutate the world.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub clock: SimClock,
    pub phase: GamePhase,
    pub wave: WaveView,
    pub gold: u32,
    pub lives: u32,
    /// Id of the selected tower, if any.
    pub selected_tower: Option<u32>,
    pub towers: Vec<TowerView>,
    pub enemies: Vec<EnemyView>,
    pub shots: Vec<ShotView>,
    pub audio_events: Vec<AudioEvent>,
}

/// Wave progress for the HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveView {
    /// Zero-based index of the current wave.
    pub index: u32,
    /// Total number of waves in the session.
    pub total: u32,
    /// Enemies still waiting in the spawn queue.
    pub remaining_to_spawn: u32,
    /// Live enemies on the field.
    pub alive: u32,
}

/// A placed tower with its derived combat stats.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TowerView {
    pub id: u32,
    pub kind: TowerKind,
    pub level: u8,
    pub x: f64,
    pub y: f64,
    pub damage: f64,
    pub range: f64,
    pub fire_rate: f64,
    pub invested: u32,
    /// Gold returned if sold now.
    pub sell_value: u32,
    /// Cost of the next level, if one exists.
    pub upgrade_cost: Option<u32>,
}

/// A live enemy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub kind: EnemyKind,
    pub x: f64,
    pub y: f64,
    pub hp: f64,
    pub max_hp: f64,
    /// Current speed with any slow applied.
    pub speed: f64,
    pub slowed: bool,
    pub size: f64,
}

/// A projectile in flight.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShotView {
    pub kind: TowerKind,
    pub x: f64,
    pub y: f64,
    pub size: f64,
}
