//! Collision rules: spent projectiles, projectile/target overlaps, and
//! pointer hits resolved by ray casting against target boxes.

use glam::Vec3;

use invaders_core::enums::HitCause;
use invaders_core::events::GameEvent;
use invaders_core::types::{Aabb, Position, ProjectileId, Ray, TargetId};

use crate::config::SimConfig;
use crate::round::ScoreState;
use crate::store::EntityStore;

/// A pointer click waiting to be resolved this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    /// The host already picked this target.
    Hit(TargetId),
    /// Hit-test this ray against the live targets.
    Ray(Ray),
}

/// Projectiles past the travel bound are spent.
pub fn is_out_of_bounds(position: Position, config: &SimConfig) -> bool {
    position.z < config.projectile_z_bound
}

pub fn target_box(position: Position, config: &SimConfig) -> Aabb {
    Aabb::cube(position, config.target_half_extent)
}

pub fn projectile_box(position: Position, config: &SimConfig) -> Aabb {
    Aabb::new(position, config.projectile_half_extents)
}

/// Touching boxes count as overlapping.
pub fn aabbs_overlap(a: &Aabb, b: &Aabb) -> bool {
    (a.center - b.center)
        .abs()
        .cmple(a.half_extents + b.half_extents)
        .all()
}

/// Slab test. Returns the entry distance along the ray (in units of
/// `direction`), or 0 when the origin is inside the box.
pub fn ray_aabb(ray: &Ray, aabb: &Aabb) -> Option<f32> {
    if !ray.origin.is_finite() || !ray.direction.is_finite() || ray.direction == Vec3::ZERO {
        return None;
    }
    let inv = ray.direction.recip();
    let t1 = (aabb.min() - ray.origin) * inv;
    let t2 = (aabb.max() - ray.origin) * inv;
    let t_near = t1.min(t2).max_element();
    let t_far = t1.max(t2).min_element();

    if t_far < 0.0 || t_near > t_far {
        return None;
    }
    Some(t_near.max(0.0))
}

/// Nearest target struck by `ray`. Ties go to the lower id.
pub fn pick_target(store: &EntityStore, ray: &Ray, config: &SimConfig) -> Option<TargetId> {
    let mut best: Option<(f32, TargetId)> = None;
    for (id, pose) in store.targets() {
        if let Some(t) = ray_aabb(ray, &target_box(pose.position, config)) {
            if best.map_or(true, |(best_t, _)| t < best_t) {
                best = Some((t, id));
            }
        }
    }
    best.map(|(_, id)| id)
}

/// Remove a target and award score. A target that is already gone scores
/// nothing.
pub fn destroy_target(
    store: &mut EntityStore,
    id: TargetId,
    cause: HitCause,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
    config: &SimConfig,
) -> bool {
    if !store.remove_target(id) {
        log::debug!("hit on missing target {id} ignored");
        return false;
    }
    let total = score.award_target(config);
    log::debug!("target {id} destroyed by {cause:?}, score {total}");
    events.push(GameEvent::TargetDestroyed {
        id,
        cause,
        score: total,
    });
    true
}

/// Run all collision checks for one tick.
pub fn run(
    store: &mut EntityStore,
    pointer: &[PointerInput],
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
    config: &SimConfig,
) {
    expire_projectiles(store, score, events, config);
    resolve_projectile_hits(store, score, events, config);

    for input in pointer {
        let target = match *input {
            PointerInput::Hit(id) => Some(id),
            PointerInput::Ray(ray) => pick_target(store, &ray, config),
        };
        match target {
            Some(id) => {
                destroy_target(store, id, HitCause::Pointer, score, events, config);
            }
            None => log::debug!("pointer ray hit nothing"),
        }
    }
}

/// Remove projectiles beyond the travel bound. Misses do not touch the score.
fn expire_projectiles(
    store: &mut EntityStore,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
    config: &SimConfig,
) {
    let spent: Vec<ProjectileId> = store
        .projectiles()
        .into_iter()
        .filter(|(_, pos)| is_out_of_bounds(*pos, config))
        .map(|(id, _)| id)
        .collect();

    for id in spent {
        if store.remove_projectile(id) {
            score.projectiles_expired += 1;
            events.push(GameEvent::ProjectileExpired { id });
        }
    }
}

/// Each projectile destroys at most one target, and each target falls to at
/// most one projectile. Lower ids resolve first.
fn resolve_projectile_hits(
    store: &mut EntityStore,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
    config: &SimConfig,
) {
    let projectiles = store.projectiles();
    if projectiles.is_empty() {
        return;
    }
    let mut targets = store.targets();

    for (projectile_id, projectile_pos) in projectiles {
        let bullet = projectile_box(projectile_pos, config);
        let struck = targets
            .iter()
            .position(|(_, pose)| aabbs_overlap(&bullet, &target_box(pose.position, config)));

        if let Some(index) = struck {
            let (target_id, _) = targets.remove(index);
            store.remove_projectile(projectile_id);
            destroy_target(store, target_id, HitCause::Projectile, score, events, config);
        }
    }
}
