//! Progress reporting for the question fetch

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;
use trivia_application::{FetchError, FetchProgressNotifier, NoProgress};
use trivia_domain::ProgressMode;

/// Pick the notifier matching the configured mode
pub fn progress_notifier(mode: ProgressMode) -> Box<dyn FetchProgressNotifier> {
    match mode {
        ProgressMode::Plain => Box::new(SimpleProgress),
        ProgressMode::Spinner => Box::new(SpinnerProgress::new()),
        ProgressMode::None => Box::new(NoProgress),
    }
}

/// "Received N questions." plus the playable count when some were dropped
fn received_message(received: usize, playable: usize) -> String {
    if playable == received {
        format!("Received {} questions.", received)
    } else {
        format!(
            "Received {} questions, {} playable ({} skipped for missing answers).",
            received,
            playable,
            received - playable
        )
    }
}

/// Reports the fetch with an animated spinner
pub struct SpinnerProgress {
    bar: Mutex<Option<ProgressBar>>,
}

impl SpinnerProgress {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn take_bar(&self) -> Option<ProgressBar> {
        self.bar.lock().ok().and_then(|mut bar| bar.take())
    }
}

impl Default for SpinnerProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchProgressNotifier for SpinnerProgress {
    fn on_fetch_start(&self, source: &str, count: u32) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(format!("Fetching {} questions from {}", count, source));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut bar) = self.bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_fetch_complete(&self, received: usize, playable: usize) {
        if let Some(pb) = self.take_bar() {
            pb.finish_with_message(format!(
                "{} {}",
                "v".green(),
                received_message(received, playable)
            ));
        }
    }

    fn on_fetch_failed(&self, _error: &FetchError) {
        if let Some(pb) = self.take_bar() {
            pb.finish_with_message(format!("{} Fetch failed.", "x".red()));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl FetchProgressNotifier for SimpleProgress {
    fn on_fetch_start(&self, source: &str, count: u32) {
        println!(
            "{} Contacting {} for {} questions...",
            "->".cyan(),
            source.bold(),
            count
        );
    }

    fn on_fetch_complete(&self, received: usize, playable: usize) {
        println!("  {} {}", "v".green(), received_message(received, playable));
        println!();
    }

    fn on_fetch_failed(&self, error: &FetchError) {
        println!("  {} Fetch failed ({})", "x".red(), error.kind());
    }
}
