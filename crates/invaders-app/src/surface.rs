//! Render surfaces: where snapshots go after each tick.

use std::io::Write;

use invaders_core::state::GameStateSnapshot;

/// Errors while presenting a snapshot.
#[derive(thiserror::Error, Debug)]
pub enum SurfaceError {
    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write snapshot: {0}")]
    Io(#[from] std::io::Error),
}

/// Receives one snapshot per tick and draws it.
pub trait RenderSurface {
    fn present(&mut self, snapshot: &GameStateSnapshot) -> Result<(), SurfaceError>;
}

/// Writes each snapshot as one JSON line.
pub struct JsonLinesSurface<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderSurface for JsonLinesSurface<W> {
    fn present(&mut self, snapshot: &GameStateSnapshot) -> Result<(), SurfaceError> {
        serde_json::to_writer(&mut self.out, snapshot)?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }
}
