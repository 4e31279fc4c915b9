//! Headless palisade runtime shell.
//!
//! Wires the simulation engine to a wall-clock game loop thread and a
//! line-delimited JSON command interface.

pub mod game_loop;
pub mod state;

pub use palisade_core as core;
