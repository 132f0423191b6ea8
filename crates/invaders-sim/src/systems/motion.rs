//! Motion rules: pure per-kind position updates, plus the systems that apply
//! them to every live entity.

use invaders_core::components::TargetPose;
use invaders_core::types::Position;

use crate::config::SimConfig;
use crate::store::EntityStore;

/// Deltas that are negative, NaN or infinite advance nothing.
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 {
        dt
    } else {
        0.0
    }
}

/// Clamp a horizontal coordinate into the player's lane.
pub fn clamp_player_x(x: f32, bound: f32) -> f32 {
    let bound = bound.abs();
    if x.is_nan() {
        return 0.0;
    }
    x.clamp(-bound, bound)
}

/// Player: x += direction * speed * dt, clamped. y and z never change.
pub fn move_player(position: Position, direction: f32, dt: f32, config: &SimConfig) -> Position {
    let direction = direction.clamp(-1.0, 1.0);
    let x = position.x + direction * config.player_speed * sanitize_dt(dt);
    Position::new(
        clamp_player_x(x, config.player_x_bound),
        position.y,
        position.z,
    )
}

/// Projectile: straight along -z at constant speed.
pub fn move_projectile(position: Position, dt: f32, config: &SimConfig) -> Position {
    Position::new(
        position.x,
        position.y,
        position.z - config.projectile_speed * sanitize_dt(dt),
    )
}

/// Target: z wobbles by sin(elapsed) * amplitude once per tick, independent of
/// dt; yaw spins at `spin_rate`.
pub fn move_target(pose: TargetPose, elapsed_secs: f64, dt: f32, config: &SimConfig) -> TargetPose {
    let wobble = elapsed_secs.sin() as f32 * config.wobble_amplitude;
    TargetPose {
        position: Position::new(pose.position.x, pose.position.y, pose.position.z + wobble),
        yaw: (pose.yaw + config.spin_rate * sanitize_dt(dt)).rem_euclid(std::f32::consts::TAU),
    }
}

/// Advance every projectile.
pub fn run_projectiles(store: &mut EntityStore, dt: f32, config: &SimConfig) {
    store.replace_projectiles(|_, pos| move_projectile(pos, dt, config));
}

/// Advance every target's wobble and spin.
pub fn run_targets(store: &mut EntityStore, elapsed_secs: f64, dt: f32, config: &SimConfig) {
    store.replace_targets(|_, pose| move_target(pose, elapsed_secs, dt, config));
}
