//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions over `&mut World` plus whatever engine state
//! they need. They do not own state — all state lives in components or on
//! the engine.

pub mod bounty;
pub mod cleanup;
pub mod fire_control;
pub mod movement;
pub mod shots;
pub mod snapshot;
pub mod spawning;
