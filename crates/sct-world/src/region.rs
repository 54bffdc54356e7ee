//! Planar terrain region coordinates.
//!
//! Terrain streams in fixed 16×16-block regions addressed by their planar
//! (x, z) index; the vertical axis never partitions.  Block coordinates are
//! floored before shifting so negative positions land in the right region.

use std::fmt;

use sct_core::Position;

/// Edge length of one terrain region, in blocks.
pub const REGION_EDGE_BLOCKS: i64 = 16;

/// A 2-D region coordinate in a world's terrain grid (Y ignored).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegionCoord {
    pub x: i32,
    pub z: i32,
}

impl RegionCoord {
    #[inline]
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// The region containing `pos`.
    #[inline]
    pub fn containing(pos: Position) -> Self {
        let (bx, _, bz) = pos.block();
        Self {
            x: bx.div_euclid(REGION_EDGE_BLOCKS) as i32,
            z: bz.div_euclid(REGION_EDGE_BLOCKS) as i32,
        }
    }

    /// All regions within `radius` of `self`, inclusive in both planar axes.
    ///
    /// Yields the full `(2·radius + 1)²` square, centre included.
    /// `radius = 0` yields only `self`.
    pub fn neighborhood(self, radius: i32) -> impl Iterator<Item = RegionCoord> {
        (self.x - radius..=self.x + radius).flat_map(move |x| {
            (self.z - radius..=self.z + radius).map(move |z| RegionCoord::new(x, z))
        })
    }
}

impl fmt::Display for RegionCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.z)
    }
}
