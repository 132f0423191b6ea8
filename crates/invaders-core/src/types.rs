//! Fundamental geometric, identity, and simulation types.

use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// 3D position in scene space. Serializes as `[x, y, z]`.
/// x = right, y = up, z = toward the camera.
pub type Position = Vec3;

/// Identity of a projectile. Allocated from a monotonic counter, never reused
/// within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectileId(pub u64);

/// Identity of a target: its grid column (i) and row (j).
/// Serializes as the string `"i-j"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct TargetId {
    pub column: u8,
    pub row: u8,
}

/// Error returned when a string is not a valid `"<column>-<row>"` target id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid target id {0:?}, expected \"<column>-<row>\"")]
pub struct ParseTargetIdError(pub String);

/// Axis-aligned box used for hit-testing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vec3,
    pub half_extents: Vec3,
}

/// Pointer ray in scene space. `direction` need not be normalized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed time in seconds, summed from accepted deltas.
    pub elapsed_secs: f64,
}

impl fmt::Display for ProjectileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TargetId {
    pub fn new(column: u8, row: u8) -> Self {
        Self { column, row }
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.column, self.row)
    }
}

impl FromStr for TargetId {
    type Err = ParseTargetIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseTargetIdError(s.to_string());
        let (column, row) = s.split_once('-').ok_or_else(err)?;
        Ok(Self {
            column: column.parse().map_err(|_| err())?,
            row: row.parse().map_err(|_| err())?,
        })
    }
}

impl From<TargetId> for String {
    fn from(id: TargetId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for TargetId {
    type Error = ParseTargetIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Aabb {
    pub fn new(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    /// Cube of the given half-extent.
    pub fn cube(center: Vec3, half_extent: f32) -> Self {
        Self::new(center, Vec3::splat(half_extent))
    }

    pub fn min(&self) -> Vec3 {
        self.center - self.half_extents
    }

    pub fn max(&self) -> Vec3 {
        self.center + self.half_extents
    }
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Point at parameter `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += f64::from(dt);
    }
}
