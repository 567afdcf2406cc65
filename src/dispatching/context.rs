//! Selection context for candidate evaluation.

use crate::models::{Performance, PerformerSet};

/// Read-only construction state passed to selection strategies.
#[derive(Debug, Clone, Copy)]
pub struct SelectionContext<'a> {
    /// Performances placed so far, in running order.
    pub scheduled: &'a [Performance],
    /// Known performers, for wildcard expansion.
    pub performers: &'a PerformerSet,
    /// Longest allowed run for a performer. Carried for callers; no
    /// strategy enforces it beyond the immediate-predecessor score.
    pub max_in_row: usize,
}

impl<'a> SelectionContext<'a> {
    pub fn new(scheduled: &'a [Performance], performers: &'a PerformerSet) -> Self {
        Self {
            scheduled,
            performers,
            max_in_row: 1,
        }
    }

    pub fn with_max_in_row(mut self, max_in_row: usize) -> Self {
        self.max_in_row = max_in_row;
        self
    }

    /// The most recently placed performance.
    pub fn previous(&self) -> Option<&'a Performance> {
        self.scheduled.last()
    }
}
