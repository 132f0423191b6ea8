//! Round bookkeeping: score and counters, kept by the engine rather than in ECS.

use invaders_core::components::PlayerShip;

use crate::config::SimConfig;
use crate::systems::motion::clamp_player_x;

/// Running score state tracked by the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreState {
    pub score: u32,
    pub targets_destroyed: u32,
    pub projectiles_fired: u32,
    pub projectiles_expired: u32,
}

impl ScoreState {
    /// Award one destroyed target. Returns the new running score.
    pub fn award_target(&mut self, config: &SimConfig) -> u32 {
        self.targets_destroyed += 1;
        self.score = self.score.saturating_add(config.score_per_target);
        self.score
    }
}

/// Movement keys currently held, built from down/up edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
}

impl HeldKeys {
    /// -1, 0 or +1. Both keys held cancel out.
    pub fn direction(&self) -> f32 {
        match (self.left, self.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

/// Fresh player ship for a session.
pub fn spawn_player(config: &SimConfig) -> PlayerShip {
    let mut position = config.player_start;
    position.x = clamp_player_x(position.x, config.player_x_bound);
    PlayerShip { position }
}
