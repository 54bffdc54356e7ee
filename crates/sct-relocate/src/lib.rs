//! `sct-relocate` — batched, time-sliced actor relocation.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`movable`]   | `Movable` (single/group), `ActorPort`, `MovedAs`            |
//! | [`batch`]     | `Batch`, contiguous partitioning                            |
//! | [`observer`]  | `RelocateObserver` trait, `NoopObserver`                    |
//! | [`relocator`] | `Relocator` — the run state machine                         |
//! | [`error`]     | `RelocateError`, `RelocateResult<T>`                        |
//!
//! # Run model (summary)
//!
//! Moving hundreds of actors in one engine step blows the host's per-step
//! work budget: every arrival triggers terrain loading, visibility, and
//! physics work.  `Relocator` spreads the moves across engine ticks:
//!
//! ```text
//! start(dests, movables, batch_size, interval, now, observer)
//!   → partition into FIFO batches of ≤ batch_size (last may be shorter)
//!   → guard.set_suppress_unload(true)          (held for the whole run)
//!   → first batch fires at `now` (delay 0), then one per `interval` ticks
//!
//! tick(now, host):                             (host calls every step)
//!   pop head batch
//!   → guard.materialize(batch destinations)    (terrain present on arrival)
//!   → move + notify each pair, in input order
//!   → observer.on_progress(completed, total)
//!   → queue empty? finish as the final action of this same tick
//!
//! finish / cancel(): one merged termination —
//!   exactly one observer.on_done(), suppression released, run state cleared.
//! ```
//!
//! At most one run is live per `Relocator`; `start` while active is rejected.
//! The whole crate is single-threaded cooperative: nothing here blocks, and
//! no tick handler ever overlaps another.

pub mod batch;
pub mod error;
pub mod movable;
pub mod observer;
pub mod relocator;


pub use batch::{Batch, partition};
pub use error::{RelocateError, RelocateResult};
pub use movable::{ActorPort, MovedAs, Movable};
pub use observer::{NoopObserver, RelocateObserver};
pub use relocator::{ARRIVAL_LIFT_BLOCKS, Relocator};
