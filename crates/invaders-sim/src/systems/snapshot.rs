//! Snapshot system: reads the round state and builds a `GameStateSnapshot`.
//!
//! This system is read-only; it never modifies the store.

use invaders_core::enums::RoundPhase;
use invaders_core::state::{GameStateSnapshot, PlayerView, ProjectileView, TargetView};

use crate::engine::GameState;

/// Build a complete snapshot from the current state, including the events
/// raised during the most recent tick.
pub fn build_snapshot(state: &GameState) -> GameStateSnapshot {
    GameStateSnapshot {
        time: state.time,
        phase: state.phase,
        player: PlayerView {
            position: state.player.position,
        },
        projectiles: state
            .store
            .projectiles()
            .into_iter()
            .map(|(id, position)| ProjectileView { id, position })
            .collect(),
        targets: state
            .store
            .targets()
            .into_iter()
            .map(|(id, pose)| TargetView {
                id,
                position: pose.position,
                yaw: pose.yaw,
            })
            .collect(),
        score: state.score.score,
        terminal: state.phase == RoundPhase::RoundOver,
        events: state.events().to_vec(),
    }
}
