//! Run progress callbacks.

/// Callbacks invoked by [`Relocator`][crate::Relocator] as a run advances.
///
/// Both methods have default no-op bodies so implementors only override what
/// they care about.  The observer is owned by the run and dropped with it.
///
/// # Termination contract
///
/// `on_done` fires **exactly once per run**, on every termination path —
/// natural exhaustion and explicit cancellation share one signal, so an
/// observer cannot (and need not) distinguish "finished" from "cancelled".
pub trait RelocateObserver {
    /// Fired once per processed batch with the running totals.
    /// `completed` is monotone and reaches `total` exactly at normal
    /// completion.
    fn on_progress(&mut self, _completed: usize, _total: usize) {}

    /// Fired exactly once when the run terminates, for any reason.
    fn on_done(&mut self) {}
}

/// A [`RelocateObserver`] that does nothing.  Use when you need to start a
/// run but don't want progress callbacks.
pub struct NoopObserver;

impl RelocateObserver for NoopObserver {}
