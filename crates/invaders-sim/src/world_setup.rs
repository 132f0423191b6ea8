//! Spawn factories for the fixed target grid.

use invaders_core::components::TargetPose;
use invaders_core::types::{Position, TargetId};

use crate::config::SimConfig;
use crate::store::EntityStore;

/// Every grid id in spawn order: column-major, "0-0", "0-1", ... "4-2".
pub fn grid_ids(config: &SimConfig) -> impl Iterator<Item = TargetId> {
    let rows = config.grid_rows;
    (0..config.grid_columns)
        .flat_map(move |column| (0..rows).map(move |row| TargetId::new(column, row)))
}

/// Home position of a grid cell: origin + (column, row, 0) * spacing.
pub fn grid_position(id: TargetId, config: &SimConfig) -> Position {
    config.grid_origin
        + Position::new(
            f32::from(id.column) * config.grid_spacing,
            f32::from(id.row) * config.grid_spacing,
            0.0,
        )
}

/// Spawn the full grid. Returns how many targets were added.
pub fn spawn_target_grid(store: &mut EntityStore, config: &SimConfig) -> usize {
    let mut spawned = 0;
    for id in grid_ids(config) {
        let pose = TargetPose {
            position: grid_position(id, config),
            yaw: 0.0,
        };
        if store.add_target(id, pose) {
            spawned += 1;
        }
    }
    spawned
}
