//! Quiz parameters: request size and fetch timeout.
//!
//! [`QuizParams`] groups the values the binary resolves from config files
//! and command-line flags before wiring the use cases together.

use std::time::Duration;

/// Request size and timeout for one quiz run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizParams {
    /// Number of questions to request from the upstream service.
    pub amount: u32,
    /// Upper bound on the single fetch attempt.
    pub request_timeout: Duration,
}

impl QuizParams {
    pub const DEFAULT_AMOUNT: u32 = 10;
    /// The upstream service refuses batches larger than this.
    pub const MAX_AMOUNT: u32 = 50;
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

    // ==================== Builder Methods ====================

    /// Set the question count, clamped to `1..=MAX_AMOUNT`.
    pub fn with_amount(mut self, amount: u32) -> Self {
        self.amount = amount.clamp(1, Self::MAX_AMOUNT);
        self
    }

    /// Set the fetch timeout; zero is ignored.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        if secs > 0 {
            self.request_timeout = Duration::from_secs(secs);
        }
        self
    }
}

impl Default for QuizParams {
    fn default() -> Self {
        Self {
            amount: Self::DEFAULT_AMOUNT,
            request_timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
        }
    }
}
