//! Tunable simulation parameters.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use invaders_core::constants::*;

/// Everything the systems read that a host may want to tune.
/// Missing fields in a config file fall back to the defaults from `constants`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub player_start: Vec3,
    pub player_speed: f32,
    pub player_x_bound: f32,
    pub projectile_speed: f32,
    pub projectile_z_bound: f32,
    pub projectile_spawn_offset_y: f32,
    pub projectile_half_extents: Vec3,
    pub grid_columns: u8,
    pub grid_rows: u8,
    pub grid_spacing: f32,
    pub grid_origin: Vec3,
    pub wobble_amplitude: f32,
    pub spin_rate: f32,
    pub target_half_extent: f32,
    pub score_per_target: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            player_start: PLAYER_START,
            player_speed: PLAYER_SPEED,
            player_x_bound: PLAYER_X_BOUND,
            projectile_speed: PROJECTILE_SPEED,
            projectile_z_bound: PROJECTILE_Z_BOUND,
            projectile_spawn_offset_y: PROJECTILE_SPAWN_OFFSET_Y,
            projectile_half_extents: PROJECTILE_HALF_EXTENTS,
            grid_columns: TARGET_GRID_COLUMNS,
            grid_rows: TARGET_GRID_ROWS,
            grid_spacing: TARGET_GRID_SPACING,
            grid_origin: TARGET_GRID_ORIGIN,
            wobble_amplitude: TARGET_WOBBLE_AMPLITUDE,
            spin_rate: TARGET_SPIN_RATE,
            target_half_extent: TARGET_HALF_EXTENT,
            score_per_target: SCORE_PER_TARGET,
        }
    }
}
