//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::HitCause;
use crate::types::{Position, ProjectileId, TargetId};

/// Something that happened during a tick. Drained into each snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A projectile was spawned.
    ProjectileFired { id: ProjectileId, position: Position },
    /// A projectile left the play area without hitting anything.
    ProjectileExpired { id: ProjectileId },
    /// A target was destroyed. `score` is the running total after the award.
    TargetDestroyed {
        id: TargetId,
        cause: HitCause,
        score: u32,
    },
    /// The last target fell.
    RoundOver { score: u32 },
    /// The grid was re-spawned and the score cleared.
    RoundReset,
}
