//! Host for the invaders simulation.
//!
//! Wires the headless engine to its two external collaborators: an input
//! source (JSON lines on stdin) and a render surface (JSON snapshot lines on
//! stdout), driven by a fixed-rate game loop thread.

pub mod cli;
pub mod config;
pub mod game_loop;
pub mod input;
pub mod surface;

pub use invaders_core as core;
