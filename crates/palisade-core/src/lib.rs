//! Core types and definitions for the palisade simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, state snapshots, events, configuration tables,
//! and path geometry. It has no dependency on the ECS or any runtime.

pub mod commands;
pub mod components;
pub mod config;
pub mod enums;
pub mod events;
pub mod path;
pub mod state;
pub mod types;
