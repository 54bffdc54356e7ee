//! `Relocator` — the run state machine.
//!
//! Two states: **idle** (`run` is `None`) and **active** (one live [`Run`]).
//! The host engine drives the machine by calling [`Relocator::tick`] once per
//! engine step with its current tick counter; the relocator fires when the
//! counter reaches `next_fire` and is a no-op otherwise.  This replaces a
//! self-rescheduling repeating task with an explicit loop the host already
//! has, which keeps every run fully deterministic under test.
//!
//! # Invariants
//!
//! - At most one run per relocator; `start` while active is rejected.
//! - `on_done` fires exactly once per run, on every termination path.
//! - The guard's suppression flag is set for the whole `[start, on_done)`
//!   window and cleared on every exit.
//! - A live run always has at least one queued batch: the run is torn down
//!   in the same tick that drains the queue.

use std::collections::VecDeque;

use sct_core::{Destination, RunConfig, Tick};
use sct_world::{RegionGuard, RegionLoader};

use crate::batch::{self, Batch};
use crate::{ActorPort, Movable, RelocateError, RelocateObserver, RelocateResult};

/// How far above the computed destination actors arrive, in blocks.
///
/// Freshly loaded terrain can still be settling when the move lands; dropping
/// actors two blocks up keeps them out of the surface block.
pub const ARRIVAL_LIFT_BLOCKS: f64 = 2.0;

// ── Run ───────────────────────────────────────────────────────────────────────

/// Mutable state of one in-progress relocation.  Exists only while active;
/// dropped whole on termination, which clears every field at once.
struct Run {
    /// Pending work, strictly FIFO.
    batches: VecDeque<Batch>,

    /// Pairs moved so far.  Monotone; equals `total` at normal completion.
    completed: usize,

    /// Pair count at start.
    total: usize,

    /// Ticks between scheduling steps.
    interval_ticks: u64,

    /// Next tick at which a batch fires.  Initialized to the start tick, so
    /// the first batch goes out on the very next `tick` call (delay 0).
    next_fire: Tick,

    /// Progress sink, owned for the run's lifetime.
    observer: Box<dyn RelocateObserver>,
}

// ── Relocator ─────────────────────────────────────────────────────────────────

/// Batched, time-sliced relocation scheduler.
///
/// Owns the [`RegionGuard`] so that suppression engages and releases in
/// lockstep with run lifetime; the host's eviction path reads the flag
/// through [`Relocator::guard`].
pub struct Relocator {
    guard: RegionGuard,
    run:   Option<Run>,
}

impl Relocator {
    pub fn new(guard: RegionGuard) -> Self {
        Self { guard, run: None }
    }

    /// The retention guard.  Host eviction hooks poll
    /// `relocator.guard().should_cancel_unload()` per unload attempt.
    pub fn guard(&self) -> &RegionGuard {
        &self.guard
    }

    /// True iff a run is in progress.
    pub fn is_active(&self) -> bool {
        self.run.is_some()
    }

    /// `(completed, total)` of the active run, if any.
    pub fn progress(&self) -> Option<(usize, usize)> {
        self.run.as_ref().map(|run| (run.completed, run.total))
    }

    /// Begin a relocation run.
    ///
    /// `destinations` and `movables` are parallel sequences — pair `i` moves
    /// `movables[i]` to `destinations[i]`.  Pairs are partitioned into
    /// contiguous FIFO batches of at most `batch_size`; one batch fires every
    /// `interval_ticks`, the first at `now` itself.  Region-unload
    /// suppression engages here and holds until the run terminates.
    ///
    /// # Errors
    ///
    /// [`RelocateError`] for each violated precondition: mismatched lengths,
    /// empty input, zero batch size or interval, or a run already active.
    /// On error nothing changes — no partial state, suppression untouched.
    pub fn start(
        &mut self,
        destinations:   Vec<Destination>,
        movables:       Vec<Movable>,
        batch_size:     usize,
        interval_ticks: u64,
        now:            Tick,
        observer:       Box<dyn RelocateObserver>,
    ) -> RelocateResult<()> {
        if self.is_active() {
            return Err(RelocateError::AlreadyActive);
        }
        if destinations.len() != movables.len() {
            return Err(RelocateError::LengthMismatch {
                destinations: destinations.len(),
                movables:     movables.len(),
            });
        }
        if destinations.is_empty() {
            return Err(RelocateError::EmptyInput);
        }
        if batch_size == 0 {
            return Err(RelocateError::ZeroBatchSize);
        }
        if interval_ticks == 0 {
            return Err(RelocateError::ZeroInterval);
        }

        let total = destinations.len();
        let batches = batch::partition(destinations, movables, batch_size);

        // Stop region unloading for the whole run; released on every exit
        // path through `cancel`.
        self.guard.set_suppress_unload(true);

        self.run = Some(Run {
            batches,
            completed: 0,
            total,
            interval_ticks,
            next_fire: now,
            observer,
        });
        Ok(())
    }

    /// [`start`][Self::start] with batch size and interval taken from `config`.
    pub fn start_with(
        &mut self,
        config:       &RunConfig,
        destinations: Vec<Destination>,
        movables:     Vec<Movable>,
        now:          Tick,
        observer:     Box<dyn RelocateObserver>,
    ) -> RelocateResult<()> {
        self.start(
            destinations,
            movables,
            config.batch_size,
            config.interval_ticks,
            now,
            observer,
        )
    }

    /// Advance the machine.  The host calls this once per engine step.
    ///
    /// No-op when idle or before `next_fire`.  When it fires: pops the head
    /// batch, materializes its terrain, performs the moves in input order,
    /// reports progress, and — if that was the last batch — terminates the
    /// run as the final action of this same tick.
    pub fn tick<H>(&mut self, now: Tick, host: &mut H)
    where
        H: ActorPort + RegionLoader,
    {
        let batch = {
            let Some(run) = self.run.as_mut() else { return };
            if now < run.next_fire {
                return;
            }
            // Pop before rescheduling: a live run always has queued batches,
            // and a fire must never advance `next_fire` without doing work.
            let Some(batch) = run.batches.pop_front() else {
                debug_assert!(false, "live run with an empty batch queue");
                return;
            };
            run.next_fire = now + run.interval_ticks;
            batch
        };

        // Terrain first: every region the batch lands in is load-issued
        // before any actor arrives.
        let destinations: Vec<Destination> = batch.iter().map(|&(dest, _)| dest).collect();
        self.guard.materialize(host, &destinations);

        for (dest, movable) in &batch {
            let arrival = Destination::new(dest.world, dest.pos.lifted(ARRIVAL_LIFT_BLOCKS));
            movable.relocate(host, &arrival);
        }

        let exhausted = match self.run.as_mut() {
            Some(run) => {
                run.completed += batch.len();
                run.observer.on_progress(run.completed, run.total);
                run.batches.is_empty()
            }
            None => return,
        };

        // Natural exhaustion reuses the cancellation teardown, so observers
        // see a single termination signal either way.
        if exhausted {
            self.cancel();
        }
    }

    /// Terminate the active run: exactly one `on_done`, suppression released,
    /// all run state dropped.  No-op when idle — double cancellation and
    /// cancelling an idle relocator are harmless, never errors.
    pub fn cancel(&mut self) {
        let Some(mut run) = self.run.take() else { return };

        run.observer.on_done();

        // Always re-allow region unloading, whatever path got us here.
        self.guard.set_suppress_unload(false);
    }
}
