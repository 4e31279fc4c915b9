//! Simulation engine for palisade.
//!
//! Owns the hecs ECS world, processes player commands at tick boundaries,
//! runs all systems in a fixed order, and produces GameStateSnapshots.
//! Completely headless: rendering, audio, and effects are reached only
//! through snapshots and the injected observer.

pub mod engine;
pub mod fx;
pub mod systems;
pub mod world_setup;

pub use engine::GameEngine;
pub use palisade_core as core;
