//! Simulation constants and tuning parameters.

use glam::Vec3;

/// Host tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick at the default tick rate.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- Player ---

/// Spawn position of the player ship. Only x ever changes.
pub const PLAYER_START: Vec3 = Vec3::new(0.0, -3.0, 0.0);

/// Horizontal speed (units per second).
pub const PLAYER_SPEED: f32 = 5.0;

/// Player x is clamped to [-PLAYER_X_BOUND, PLAYER_X_BOUND].
pub const PLAYER_X_BOUND: f32 = 4.0;

// --- Projectiles ---

/// Projectile travel speed along -z (units per second).
pub const PROJECTILE_SPEED: f32 = 10.0;

/// Projectiles with z below this are spent.
pub const PROJECTILE_Z_BOUND: f32 = -10.0;

/// Vertical offset from the player position at which projectiles spawn.
pub const PROJECTILE_SPAWN_OFFSET_Y: f32 = 0.5;

/// Half-extents of the projectile box (0.1 x 0.1 x 0.3).
pub const PROJECTILE_HALF_EXTENTS: Vec3 = Vec3::new(0.05, 0.05, 0.15);

// --- Targets ---

/// Grid columns (i).
pub const TARGET_GRID_COLUMNS: u8 = 5;

/// Grid rows (j).
pub const TARGET_GRID_ROWS: u8 = 3;

/// Distance between neighbouring grid cells.
pub const TARGET_GRID_SPACING: f32 = 2.0;

/// Position of target "0-0". Target "i-j" sits at origin + (i, j, 0) * spacing.
pub const TARGET_GRID_ORIGIN: Vec3 = Vec3::new(-4.0, 3.0, -5.0);

/// Per-tick z wobble: z += sin(elapsed) * amplitude.
pub const TARGET_WOBBLE_AMPLITUDE: f32 = 0.01;

/// Yaw spin rate (radians per second). Visual only.
pub const TARGET_SPIN_RATE: f32 = 1.0;

/// Half-extent of the target cube (0.8 per side).
pub const TARGET_HALF_EXTENT: f32 = 0.4;

// --- Scoring ---

/// Score awarded per destroyed target.
pub const SCORE_PER_TARGET: u32 = 100;
