//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::types::{Position, ProjectileId, TargetId};

/// Marks an entity as a projectile fired by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projectile {
    pub id: ProjectileId,
}

/// Marks an entity as a target in the enemy grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub id: TargetId,
}

/// Visual yaw of a spinning target (radians).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Spin {
    pub yaw: f32,
}

/// Mutable pose of a target, as seen by per-target transforms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetPose {
    pub position: Position,
    pub yaw: f32,
}

/// The player's ship. There is exactly one per session, so it lives
/// outside the ECS world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerShip {
    pub position: Position,
}

impl Default for PlayerShip {
    fn default() -> Self {
        Self {
            position: crate::constants::PLAYER_START,
        }
    }
}
