//! Progress-callback trait for multi-step conversions.
//!
//! Inject an [`Arc<dyn ConversionProgressCallback>`] via
//! [`crate::config::ConversionConfigBuilder::progress_callback`] to receive
//! events as a strategy walks through pages or slides. Single-step strategies
//! (image→PDF, office host exports) only fire the start/complete pair.
//!
//! # Example
//!
//! ```rust
//! use docshift::{ConversionProgressCallback, ConversionConfig};
//! use std::sync::{Arc, atomic::{AtomicUsize, Ordering}};
//!
//! struct CountingCallback {
//!     completed: Arc<AtomicUsize>,
//! }
//!
//! impl ConversionProgressCallback for CountingCallback {
//!     fn on_step_complete(&self, step: usize, total: usize) {
//!         self.completed.fetch_add(1, Ordering::SeqCst);
//!         eprintln!("step {step}/{total} done");
//!     }
//! }
//!
//! let counter = Arc::new(CountingCallback {
//!     completed: Arc::new(AtomicUsize::new(0)),
//! });
//!
//! let config = ConversionConfig::builder()
//!     .progress_callback(counter as Arc<dyn ConversionProgressCallback>)
//!     .build()
//!     .unwrap();
//! ```

use std::sync::Arc;

/// Called by strategies as they process each page or slide.
///
/// All methods default to no-ops so callers only override what they need.
/// Conversions are synchronous, so callbacks fire on the calling thread.
pub trait ConversionProgressCallback: Send + Sync {
    /// Called once before the first step.
    ///
    /// # Arguments
    /// * `total_steps`: pages/slides that will be processed (1 for
    ///   single-shot strategies)
    /// * `what`: short noun for a step, e.g. `"page"` or `"slide"`
    fn on_conversion_start(&self, total_steps: usize, what: &str) {
        let _ = (total_steps, what);
    }

    /// Called after each step has been written into the output.
    ///
    /// # Arguments
    /// * `step`: 1-indexed step number
    /// * `total`: total steps
    fn on_step_complete(&self, step: usize, total: usize) {
        let _ = (step, total);
    }

    /// Called once when the strategy returns, successful or not.
    fn on_conversion_complete(&self, success: bool) {
        let _ = success;
    }
}

/// A no-op implementation for callers that don't need progress events.
pub struct NoopProgressCallback;

impl ConversionProgressCallback for NoopProgressCallback {}

/// Convenience alias matching the type stored in [`crate::config::ConversionConfig`].
pub type ProgressCallback = Arc<dyn ConversionProgressCallback>;

/// Fan-out helper so strategies don't repeat `if let Some(cb)` at every step.
pub(crate) struct Progress<'a> {
    cb: Option<&'a ProgressCallback>,
    total: usize,
    done: usize,
}

impl<'a> Progress<'a> {
    pub(crate) fn start(cb: Option<&'a ProgressCallback>, total: usize, what: &str) -> Self {
        if let Some(cb) = cb {
            cb.on_conversion_start(total, what);
        }
        Self { cb, total, done: 0 }
    }

    pub(crate) fn step(&mut self) {
        self.done += 1;
        if let Some(cb) = self.cb {
            cb.on_step_complete(self.done, self.total);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct TrackingCallback {
        total: AtomicUsize,
        steps: AtomicUsize,
    }

    impl ConversionProgressCallback for TrackingCallback {
        fn on_conversion_start(&self, total_steps: usize, _what: &str) {
            self.total.store(total_steps, Ordering::SeqCst);
        }

        fn on_step_complete(&self, _step: usize, _total: usize) {
            self.steps.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn noop_callback_does_not_panic() {
        let cb = NoopProgressCallback;
        cb.on_conversion_start(5, "page");
        cb.on_step_complete(1, 5);
        cb.on_conversion_complete(true);
    }

    #[test]
    fn progress_helper_counts_steps() {
        let tracker = Arc::new(TrackingCallback {
            total: AtomicUsize::new(0),
            steps: AtomicUsize::new(0),
        });
        let cb: ProgressCallback = tracker.clone();

        let mut progress = Progress::start(Some(&cb), 3, "slide");
        progress.step();
        progress.step();

        assert_eq!(tracker.total.load(Ordering::SeqCst), 3);
        assert_eq!(tracker.steps.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn progress_helper_without_callback() {
        let mut progress = Progress::start(None, 2, "page");
        progress.step();
        assert_eq!(progress.done, 1);
    }
}
