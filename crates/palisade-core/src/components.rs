//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Marks an entity as an enemy marching along the path.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Marks an entity as a player-built tower.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tower;

/// Marks an entity as a projectile in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile;

/// Enemy identity and lifecycle state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyState {
    /// Stable id, unique within a session. Used for snapshot ordering and
    /// projectile targeting.
    pub id: u32,
    pub kind: EnemyKind,
    /// Path speed before slow effects (units/sec).
    pub base_speed: f64,
    /// Gold granted exactly once when slain.
    pub reward: u32,
    pub phase: EnemyPhase,
    /// Whether the bounty has been paid.
    pub rewarded: bool,
}

/// Hit points. Dropping to zero slays the enemy the same frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub hp: f64,
    pub max_hp: f64,
}

/// Active slow debuff. A zero factor means no slow.
/// Reapplication keeps the strongest factor but always restarts the timer.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SlowEffect {
    /// Multiplicative speed reduction in [0, 1): speed = base × (1 − factor).
    pub factor: f64,
    /// Seconds until the slow wears off.
    pub remaining_secs: f64,
}

/// Progress along the path polyline. Position is derived from this cursor,
/// never mutated independently.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PathCursor {
    /// Index of the segment currently being walked. Non-decreasing.
    pub segment: usize,
    /// Distance traveled within the current segment.
    pub traveled: f64,
    /// Set when the final segment is exhausted; movement is a no-op after.
    pub reached_goal: bool,
}

/// Tower identity, level, and firing state. Combat stats are looked up from
/// the (kind, level) table on every use, never cached here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TowerState {
    pub id: u32,
    pub kind: TowerKind,
    /// Upgrade level, 1..=MAX_TOWER_LEVEL.
    pub level: u8,
    /// Total gold sunk into this tower (base cost plus paid upgrades).
    pub invested: u32,
    /// Seconds until the tower may fire again.
    pub cooldown_secs: f64,
}

/// Projectile flight and payload state, fixed at fire time from the
/// originating tower's stats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShotState {
    /// Originating tower kind; selects the on-hit behavior.
    pub kind: TowerKind,
    pub damage: f64,
    /// Flight speed (units/sec).
    pub speed: f64,
    /// Collision radius.
    pub size: f64,
    /// Id of the tracked enemy. The enemy may die or despawn mid-flight;
    /// the shot then flies on its cached heading until it leaves the map.
    pub target_id: u32,
    /// Splash radius for area detonations.
    pub aoe_radius: Option<f64>,
    /// Slow payload applied to the struck enemy.
    pub slow: Option<SlowParams>,
    /// A spent shot performs no further movement or collision checks.
    pub spent: bool,
}

/// Magnitude and duration of a slow payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlowParams {
    /// Multiplicative speed reduction in [0, 1).
    pub factor: f64,
    pub duration_secs: f64,
}
