//! `sct-world` — the boundary between the scatter toolkit and the host
//! world engine's terrain streaming.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                 |
//! |------------|----------------------------------------------------------|
//! | [`region`] | `RegionCoord` — planar terrain region + neighborhood math |
//! | [`guard`]  | `RegionLoader` port, `RegionGuard` retention toggle      |
//!
//! # Retention model (summary)
//!
//! Host engines reclaim terrain regions asynchronously whenever no player is
//! nearby.  A relocation run moves actors into terrain that has no one nearby
//! *yet*, so the engine would happily evict the exact regions the run just
//! loaded.  `RegionGuard` closes that race:
//!
//! 1. The scheduler sets the suppression flag for the whole run.
//! 2. The host's eviction path polls [`RegionGuard::should_cancel_unload`]
//!    on every unload attempt and vetoes while the flag is set.
//! 3. Before each batch's moves, [`RegionGuard::materialize`] force-loads the
//!    view-distance square around every destination in the batch.
//! 4. The scheduler clears the flag on every termination path, so eviction
//!    always resumes.

pub mod guard;
pub mod region;


pub use guard::{RegionGuard, RegionLoader};
pub use region::RegionCoord;
