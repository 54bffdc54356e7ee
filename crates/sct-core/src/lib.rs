//! `sct-core` — foundational types for the `rust_sct` scatter toolkit.
//!
//! This crate is a dependency of every other `sct-*` crate.  It intentionally
//! has no `sct-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                            |
//! |-------------|-----------------------------------------------------|
//! | [`ids`]     | `ActorId`, `GroupId`, `WorldId`                     |
//! | [`pos`]     | `Position`, `Destination`                           |
//! | [`time`]    | `Tick`                                              |
//! | [`config`]  | `RunConfig`, `PlacementStyle`                       |
//! | [`error`]   | `CoreError`, `CoreResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod error;
pub mod ids;
pub mod pos;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{PlacementStyle, RunConfig};
pub use error::{CoreError, CoreResult};
pub use ids::{ActorId, GroupId, WorldId};
pub use pos::{Destination, Position};
pub use time::Tick;
