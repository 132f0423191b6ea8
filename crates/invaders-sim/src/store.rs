//! Entity store: the live projectiles and targets, keyed by identity.
//!
//! Entities live in a hecs `World`; two ordered indices map identities to
//! entities so that ids stay unique, removals are by id, and listings come
//! out in ascending id order.

use std::collections::BTreeMap;

use hecs::{Entity, World};

use invaders_core::components::{Projectile, Spin, Target, TargetPose};
use invaders_core::types::{Position, ProjectileId, TargetId};

/// Owns all projectile and target entities for a session.
pub struct EntityStore {
    world: World,
    projectiles: BTreeMap<ProjectileId, Entity>,
    targets: BTreeMap<TargetId, Entity>,
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityStore {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            projectiles: BTreeMap::new(),
            targets: BTreeMap::new(),
        }
    }

    /// Add a projectile. Refuses (returns `false`) an id that is already live.
    pub fn add_projectile(&mut self, id: ProjectileId, position: Position) -> bool {
        if self.projectiles.contains_key(&id) {
            log::warn!("refusing duplicate projectile {id}");
            return false;
        }
        let entity = self.world.spawn((Projectile { id }, position));
        self.projectiles.insert(id, entity);
        true
    }

    /// Add a target. Refuses (returns `false`) an id that is already live.
    pub fn add_target(&mut self, id: TargetId, pose: TargetPose) -> bool {
        if self.targets.contains_key(&id) {
            log::warn!("refusing duplicate target {id}");
            return false;
        }
        let entity = self
            .world
            .spawn((Target { id }, pose.position, Spin { yaw: pose.yaw }));
        self.targets.insert(id, entity);
        true
    }

    /// Remove a projectile by id. Unknown ids are a no-op; returns whether
    /// anything was removed.
    pub fn remove_projectile(&mut self, id: ProjectileId) -> bool {
        match self.projectiles.remove(&id) {
            Some(entity) => {
                let _ = self.world.despawn(entity);
                true
            }
            None => false,
        }
    }

    /// Remove a target by id. Unknown ids are a no-op; returns whether
    /// anything was removed.
    pub fn remove_target(&mut self, id: TargetId) -> bool {
        match self.targets.remove(&id) {
            Some(entity) => {
                let _ = self.world.despawn(entity);
                true
            }
            None => false,
        }
    }

    /// Replace every projectile's position with `f(id, position)`.
    pub fn replace_projectiles(&mut self, mut f: impl FnMut(ProjectileId, Position) -> Position) {
        for (_entity, (projectile, position)) in
            self.world.query_mut::<(&Projectile, &mut Position)>()
        {
            *position = f(projectile.id, *position);
        }
    }

    /// Replace every target's pose with `f(id, pose)`.
    pub fn replace_targets(&mut self, mut f: impl FnMut(TargetId, TargetPose) -> TargetPose) {
        for (_entity, (target, position, spin)) in
            self.world
                .query_mut::<(&Target, &mut Position, &mut Spin)>()
        {
            let next = f(
                target.id,
                TargetPose {
                    position: *position,
                    yaw: spin.yaw,
                },
            );
            *position = next.position;
            spin.yaw = next.yaw;
        }
    }

    pub fn projectile_position(&self, id: ProjectileId) -> Option<Position> {
        let entity = *self.projectiles.get(&id)?;
        self.world.get::<&Position>(entity).ok().map(|p| *p)
    }

    pub fn target_pose(&self, id: TargetId) -> Option<TargetPose> {
        let entity = *self.targets.get(&id)?;
        let position = *self.world.get::<&Position>(entity).ok()?;
        let yaw = self.world.get::<&Spin>(entity).ok()?.yaw;
        Some(TargetPose { position, yaw })
    }

    /// All live projectiles in ascending id order.
    pub fn projectiles(&self) -> Vec<(ProjectileId, Position)> {
        self.projectiles
            .keys()
            .filter_map(|&id| self.projectile_position(id).map(|pos| (id, pos)))
            .collect()
    }

    /// All live targets in ascending id order.
    pub fn targets(&self) -> Vec<(TargetId, TargetPose)> {
        self.targets
            .keys()
            .filter_map(|&id| self.target_pose(id).map(|pose| (id, pose)))
            .collect()
    }

    pub fn contains_projectile(&self, id: ProjectileId) -> bool {
        self.projectiles.contains_key(&id)
    }

    pub fn contains_target(&self, id: TargetId) -> bool {
        self.targets.contains_key(&id)
    }

    pub fn projectile_count(&self) -> usize {
        self.projectiles.len()
    }

    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    pub fn clear_projectiles(&mut self) {
        for (_id, entity) in std::mem::take(&mut self.projectiles) {
            let _ = self.world.despawn(entity);
        }
    }

    pub fn clear_targets(&mut self) {
        for (_id, entity) in std::mem::take(&mut self.targets) {
            let _ = self.world.despawn(entity);
        }
    }

    /// Drop every entity.
    pub fn clear(&mut self) {
        self.projectiles.clear();
        self.targets.clear();
        self.world.clear();
    }

    /// Read-only access to the underlying ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }
}
