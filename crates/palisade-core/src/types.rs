//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position in map space (pixels, origin at the top-left corner).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub DVec2);

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }

    /// Straight-line distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.0.distance(other.0)
    }

    /// Unit vector toward another position; zero when coincident.
    pub fn direction_to(&self, other: &Position) -> DVec2 {
        (other.0 - self.0).normalize_or_zero()
    }
}

/// Cached unit flight direction of a projectile. Refreshed every frame while
/// the target is alive, frozen once it vanishes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Heading(pub DVec2);

/// Simulation time tracking. Advanced by the measured frame delta, so
/// elapsed time follows the wall clock rather than a fixed step.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimClock {
    /// Number of completed update frames.
    pub frame: u64,
    /// Elapsed simulated time in seconds.
    pub elapsed_secs: f64,
}

impl SimClock {
    /// Advance by one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.frame += 1;
        self.elapsed_secs += dt;
    }
}
