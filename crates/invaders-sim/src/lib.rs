//! Simulation engine for the invaders shooter.
//!
//! Owns the hecs-backed entity store, applies input at tick boundaries,
//! runs motion and collision systems, and produces `GameStateSnapshot`s
//! for the renderer. Completely headless.

pub mod clock;
pub mod config;
pub mod engine;
pub mod round;
pub mod store;
pub mod systems;
pub mod world_setup;

pub use engine::{tick, GameState, SimulationEngine};
pub use invaders_core as core;
