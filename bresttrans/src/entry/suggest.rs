//! Debounced stop-name suggestions.
//!
//! Typing into a stop field should not recompute suggestions on every
//! keystroke. Each input change resets a single-shot timer; only when
//! the timer fires is the filter run against the already-loaded
//! directory names. A new keystroke cancels the pending computation
//! and restarts the delay.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Delay between the last keystroke and the suggestion recompute.
pub const SUGGESTION_DEBOUNCE: Duration = Duration::from_millis(500);

/// Case-insensitive substring filter over the candidate names.
///
/// Blank input yields no suggestions.
pub fn filter_suggestions(input: &str, options: &[String]) -> Vec<String> {
    if input.trim().is_empty() {
        return Vec::new();
    }
    let needle = input.to_lowercase();
    options
        .iter()
        .filter(|option| option.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Single-shot, cancel-and-restart suggestion timer.
///
/// Results arrive on the paired watch receiver. Dropping the debouncer
/// (leaving the screen) aborts whatever is in flight; an already-fired
/// send to a dropped receiver is simply lost.
pub struct Debouncer {
    delay: Duration,
    options: Arc<Vec<String>>,
    tx: watch::Sender<Vec<String>>,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Create a debouncer over the given candidate names with the
    /// standard delay.
    pub fn new(options: Vec<String>) -> (Self, watch::Receiver<Vec<String>>) {
        Self::with_delay(options, SUGGESTION_DEBOUNCE)
    }

    /// Create a debouncer with a custom delay.
    pub fn with_delay(
        options: Vec<String>,
        delay: Duration,
    ) -> (Self, watch::Receiver<Vec<String>>) {
        let (tx, rx) = watch::channel(Vec::new());
        (
            Self {
                delay,
                options: Arc::new(options),
                tx,
                pending: None,
            },
            rx,
        )
    }

    /// Register a keystroke: cancel the pending recompute, restart the
    /// delay with the new input.
    pub fn submit(&mut self, input: &str) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }

        let input = input.to_string();
        let options = Arc::clone(&self.options);
        let tx = self.tx.clone();
        let delay = self.delay;

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(filter_suggestions(&input, &options));
        }));
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}
