//! `RegionGuard` — eager region loading plus unload retention.
//!
//! The guard owns exactly one piece of state: the suppression flag.  Only the
//! relocation scheduler writes it (run start / run end); the host's eviction
//! path reads it once per unload attempt.  There is no finer-grained
//! per-region bookkeeping — while a run is live, *every* unload is vetoed.

use rustc_hash::FxHashSet;

use sct_core::{Destination, WorldId};

use crate::RegionCoord;

// ── RegionLoader port ─────────────────────────────────────────────────────────

/// Host-engine surface for forcing a terrain region into memory.
///
/// Loading an already-loaded region must be a no-op.  The load may complete
/// asynchronously at the host level; callers that need terrain present only
/// rely on the load having been *issued* before they act on the region.
pub trait RegionLoader {
    fn load_region(&mut self, world: WorldId, region: RegionCoord);
}

// ── RegionGuard ───────────────────────────────────────────────────────────────

/// Prevents the host engine from evicting terrain mid-relocation and
/// pre-loads the terrain each batch is about to teleport into.
pub struct RegionGuard {
    suppress_unload: bool,
    view_distance:   i32,
}

impl RegionGuard {
    /// `view_distance` is the region radius materialized around each
    /// destination; hosts usually pass their configured view distance.
    pub fn new(view_distance: i32) -> Self {
        Self { suppress_unload: false, view_distance }
    }

    pub fn view_distance(&self) -> i32 {
        self.view_distance
    }

    /// Idempotent toggle for the unload veto.  Total; no failure mode.
    pub fn set_suppress_unload(&mut self, active: bool) {
        self.suppress_unload = active;
    }

    /// The eviction hook: the host polls this on every region-unload attempt
    /// and must cancel the unload when it returns `true`.
    ///
    /// Applies to any region in any world — the guard does not track which
    /// regions a run touched.
    #[inline]
    pub fn should_cancel_unload(&self) -> bool {
        self.suppress_unload
    }

    /// Force-load the view-distance square of regions around every
    /// destination, in both planar axes inclusive.
    ///
    /// Destinations sharing a region neighborhood are deduplicated so each
    /// (world, region) pair is issued at most one load per call.  Idempotent
    /// from the host's perspective either way.
    pub fn materialize(&self, loader: &mut impl RegionLoader, destinations: &[Destination]) {
        let mut issued: FxHashSet<(WorldId, RegionCoord)> = FxHashSet::default();

        for dest in destinations {
            let centre = RegionCoord::containing(dest.pos);
            for region in centre.neighborhood(self.view_distance) {
                if issued.insert((dest.world, region)) {
                    loader.load_region(dest.world, region);
                }
            }
        }
    }
}
