//! State and rendering of the backend-test debug view.
//!
//! The view owns two pieces of state: the latest result lines and a busy
//! flag. Its single action, [`DebugView::run_test`], may be invoked while a
//! previous call is still in flight; result writes are last-write-wins and
//! the busy flag stays raised until every in-flight call has finished.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use serde::Serialize;

use crate::fetch::TestSource;

pub const IDLE_LABEL: &str = "Run YFinance Test";
pub const BUSY_LABEL: &str = "Running Test...";
pub const FAILURE_PREFIX: &str = "Test failed: ";

/// How the last completed invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestOutcome {
    Completed { lines: usize },
    Failed,
}

impl TestOutcome {
    pub const fn is_failure(self) -> bool {
        matches!(self, Self::Failed)
    }
}

#[derive(Debug, Default)]
pub struct DebugView {
    results: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
}

impl DebugView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire) > 0
    }

    pub fn results(&self) -> Vec<String> {
        self.results
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Run the backend test once and replace the result lines with its output.
    ///
    /// Failures never escape: they become a single `Test failed: ...` line.
    /// The busy flag is released on every exit path, including the returned
    /// future being dropped before completion.
    pub async fn run_test<S>(&self, source: &S) -> TestOutcome
    where
        S: TestSource + ?Sized,
    {
        let _busy = BusyGuard::acquire(&self.in_flight);

        let (lines, outcome) = match source.run_test().await {
            Ok(lines) => {
                tracing::debug!(lines = lines.len(), "backend test completed");
                let outcome = TestOutcome::Completed { lines: lines.len() };
                (lines, outcome)
            }
            Err(error) => {
                tracing::debug!(%error, "backend test failed");
                (vec![format!("{FAILURE_PREFIX}{error}")], TestOutcome::Failed)
            }
        };

        *self.results.lock().unwrap_or_else(PoisonError::into_inner) = lines;
        outcome
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot::new(self.is_busy(), self.results())
    }
}

/// Raises the busy flag for as long as it is alive.
struct BusyGuard<'a> {
    in_flight: &'a AtomicUsize,
}

impl<'a> BusyGuard<'a> {
    fn acquire(in_flight: &'a AtomicUsize) -> Self {
        in_flight.fetch_add(1, Ordering::AcqRel);
        Self { in_flight }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.in_flight.fetch_sub(1, Ordering::AcqRel);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriggerControl {
    pub label: &'static str,
    pub disabled: bool,
}

/// Everything needed to draw the view at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewSnapshot {
    pub busy: bool,
    pub trigger: TriggerControl,
    pub results: Vec<String>,
    /// Newline-joined results; `None` hides the panel.
    pub panel: Option<String>,
}

impl ViewSnapshot {
    pub fn new(busy: bool, results: Vec<String>) -> Self {
        let trigger = TriggerControl {
            label: if busy { BUSY_LABEL } else { IDLE_LABEL },
            disabled: busy,
        };
        let panel = if results.is_empty() {
            None
        } else {
            Some(results.join("\n"))
        };

        Self {
            busy,
            trigger,
            results,
            panel,
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = format!("[ {} ]", self.trigger.label);
        if self.trigger.disabled {
            out.push_str(" (disabled)");
        }
        out.push('\n');

        if let Some(panel) = &self.panel {
            out.push_str("\nResults\n-------\n");
            out.push_str(panel);
            out.push('\n');
        }

        out
    }
}
