//! Fetch progress notification port
//!
//! Defines the interface for reporting progress while questions are fetched.

use crate::ports::question_source::FetchError;

/// Callback for progress updates around the question fetch
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (plain text, spinner, nothing).
pub trait FetchProgressNotifier: Send + Sync {
    /// Called right before the request is sent
    fn on_fetch_start(&self, source: &str, count: u32);

    /// Called once the received records are normalized
    ///
    /// `playable` counts the questions left after unplayable ones were
    /// dropped, so it never exceeds `received`.
    fn on_fetch_complete(&self, received: usize, playable: usize);

    /// Called when the fetch failed
    fn on_fetch_failed(&self, _error: &FetchError) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl FetchProgressNotifier for NoProgress {
    fn on_fetch_start(&self, _source: &str, _count: u32) {}
    fn on_fetch_complete(&self, _received: usize, _playable: usize) {}
}
