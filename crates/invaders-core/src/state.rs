//! Game state snapshot: the complete visible state handed to the renderer each tick.

use serde::{Deserialize, Serialize};

use crate::enums::RoundPhase;
use crate::events::GameEvent;
use crate::types::{Position, ProjectileId, SimTime, TargetId};

/// Complete render-facing state after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: RoundPhase,
    pub player: PlayerView,
    /// Ordered by id.
    pub projectiles: Vec<ProjectileView>,
    /// Ordered by id (column, then row).
    pub targets: Vec<TargetView>,
    pub score: u32,
    /// True while the round is over and not yet reset.
    pub terminal: bool,
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: ProjectileId,
    pub position: Position,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetView {
    pub id: TargetId,
    pub position: Position,
    /// Visual spin (radians).
    pub yaw: f32,
}
