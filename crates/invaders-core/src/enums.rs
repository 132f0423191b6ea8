//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Round lifecycle.
///
/// `RoundOver` is reached only by destroying every target; nothing in the
/// game can defeat the player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    #[default]
    Playing,
    RoundOver,
}

/// What destroyed a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitCause {
    /// A pointer hit, either reported by the host or resolved from a ray.
    Pointer,
    /// A projectile box overlapped the target box.
    Projectile,
}
