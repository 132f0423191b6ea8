//! Core types and definitions for the invaders simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, input events, state snapshots, game events, and constants.
//! It has no dependency on the engine or any host runtime.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
