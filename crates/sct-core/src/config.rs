//! Run configuration.
//!
//! Typically loaded from the host's config file by the command layer and
//! passed down per scatter run.  The relocation core itself consumes only
//! `batch_size`, `interval_ticks`, and `view_distance`; the placement fields
//! (`max_attempts`, `min_radius`, `style`) are carried opaquely for the
//! external location solver.

use std::fmt;
use std::str::FromStr;

use crate::{CoreError, CoreResult};

// ── PlacementStyle ────────────────────────────────────────────────────────────

/// Shape of the area the location solver scatters destinations into.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlacementStyle {
    /// Uniform over a disc around the centre.
    #[default]
    Circular,
    /// Uniform over an axis-aligned square around the centre.
    Square,
}

impl PlacementStyle {
    pub const ALL: [PlacementStyle; 2] = [PlacementStyle::Circular, PlacementStyle::Square];

    pub fn name(self) -> &'static str {
        match self {
            PlacementStyle::Circular => "circular",
            PlacementStyle::Square => "square",
        }
    }
}

impl FromStr for PlacementStyle {
    type Err = CoreError;

    /// Case-insensitive; rejects unknown names listing the valid ones.
    fn from_str(s: &str) -> CoreResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "circular" => Ok(PlacementStyle::Circular),
            "square" => Ok(PlacementStyle::Square),
            other => Err(CoreError::Parse(format!(
                "unknown placement style {other:?}, expected one of: circular|square"
            ))),
        }
    }
}

impl fmt::Display for PlacementStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── RunConfig ─────────────────────────────────────────────────────────────────

/// Default parameters for a scatter run.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunConfig {
    /// Actors/groups relocated per scheduling step ("teleports per set").
    pub batch_size: usize,

    /// Engine ticks between scheduling steps.  At 20 ticks/second the default
    /// of 20 spaces batches one second apart.
    pub interval_ticks: u64,

    /// Region radius to force-load around every destination before moving
    /// actors into it.  Hosts usually mirror their own view distance.
    pub view_distance: i32,

    /// Maximum solver attempts to find a valid location per actor.
    pub max_attempts: u32,

    /// Minimum separation between scattered actors, in blocks.
    pub min_radius: f64,

    /// Placement shape the solver should use.
    pub style: PlacementStyle,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            batch_size:     4,
            interval_ticks: 20,
            view_distance:  10,
            max_attempts:   100,
            min_radius:     0.0,
            style:          PlacementStyle::Circular,
        }
    }
}

impl RunConfig {
    /// Validate the fields the relocation core depends on.
    ///
    /// The command layer calls this once after loading host configuration so
    /// a bad config file fails at startup, not mid-run.
    pub fn validate(&self) -> CoreResult<()> {
        if self.batch_size == 0 {
            return Err(CoreError::Config("batch_size must be > 0".into()));
        }
        if self.interval_ticks == 0 {
            return Err(CoreError::Config("interval_ticks must be > 0".into()));
        }
        if self.view_distance < 0 {
            return Err(CoreError::Config("view_distance must be >= 0".into()));
        }
        if self.min_radius < 0.0 {
            return Err(CoreError::Config("min_radius must be >= 0".into()));
        }
        Ok(())
    }
}
