//! Block-space coordinates and relocation targets.
//!
//! `Position` uses `f64` components to match host engines that track entity
//! positions at sub-block precision.  Block coordinates are recovered by
//! flooring, never rounding, so negative coordinates land in the right block.

use std::fmt;

use crate::WorldId;

// ── Position ─────────────────────────────────────────────────────────────────

/// A 3-D coordinate in a world's block space.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The same position raised by `dy` blocks.
    ///
    /// Relocation drops actors slightly above the surface block so they never
    /// clip into terrain that is still settling after a fresh region load.
    #[inline]
    pub fn lifted(self, dy: f64) -> Self {
        Self { y: self.y + dy, ..self }
    }

    /// Block coordinates (floored components).
    #[inline]
    pub fn block(self) -> (i64, i64, i64) {
        (
            self.x.floor() as i64,
            self.y.floor() as i64,
            self.z.floor() as i64,
        )
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x, y, z) = self.block();
        write!(f, "{x}:{y}:{z}")
    }
}

// ── Destination ───────────────────────────────────────────────────────────────

/// A relocation target: a position within a specific world.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Destination {
    pub world: WorldId,
    pub pos:   Position,
}

impl Destination {
    #[inline]
    pub fn new(world: WorldId, pos: Position) -> Self {
        Self { world, pos }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in {}", self.pos, self.world)
    }
}
