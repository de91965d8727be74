//! Progress reporting and cancellation hooks
//!
//! The search itself never prints. Anything that wants to watch it (a progress bar,
//! a timeout, a Ctrl-C flag) implements `SearchObserver`.

use crate::core::Word;
use std::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, Ordering};

/// Receives progress callbacks from a running search
///
/// Observers must be `Sync` because parallel searches report from worker threads.
pub trait SearchObserver: Sync {
    /// Called once after filtering, before any combination is scored
    fn candidates_found(&self, _candidates: &[&Word], _combinations: u64) {}

    /// Called periodically while combinations are scored
    ///
    /// Returning `ControlFlow::Break` stops the search; the outcome is then marked
    /// as cancelled and holds only the results scored so far.
    fn progress(&self, _evaluated: u64, _total: u64) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Called once when scoring stops, whether complete or cancelled
    fn finished(&self, _evaluated: u64) {}
}

/// Observer that ignores every callback
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

impl<F> SearchObserver for F
where
    F: Fn(u64, u64) -> ControlFlow<()> + Sync,
{
    fn progress(&self, evaluated: u64, total: u64) -> ControlFlow<()> {
        self(evaluated, total)
    }
}

/// Cancellation flag that can be tripped from another thread
///
/// # Examples
/// ```
/// use std::ops::ControlFlow;
/// use word_triples::search::{CancelFlag, SearchObserver};
///
/// let flag = CancelFlag::new();
/// assert_eq!(flag.progress(1, 10), ControlFlow::Continue(()));
///
/// flag.cancel();
/// assert_eq!(flag.progress(2, 10), ControlFlow::Break(()));
/// ```
#[derive(Debug, Default)]
pub struct CancelFlag(AtomicBool);

impl CancelFlag {
    #[must_use]
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

impl SearchObserver for CancelFlag {
    fn progress(&self, _evaluated: u64, _total: u64) -> ControlFlow<()> {
        if self.is_cancelled() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}
