//! Input events sent from the host to the simulation.
//!
//! Events are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::types::{Position, TargetId};

/// All discrete input edges the simulation understands.
///
/// Movement keys are level state built from edges: `LeftDown` sets the flag,
/// `LeftUp` clears it. `Fire` is one press and yields one projectile; hosts
/// must not forward key auto-repeat as additional `Fire` events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputEvent {
    LeftDown,
    LeftUp,
    RightDown,
    RightUp,
    /// Fire one projectile from the player's current position.
    Fire,
    /// The host resolved a pointer click to this target.
    PointerHit { target: TargetId },
    /// A pointer click as a scene-space ray; the simulation hit-tests it.
    PointerRay {
        origin: Position,
        direction: Position,
    },
    /// Start a new round. Only honored once the round is over.
    Reset,
}
