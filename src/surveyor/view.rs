// src/surveyor/view.rs

use std::fmt;

/// Read-only snapshot of a surveyor's state.
///
/// Handed to termination predicates and pause handlers, and used for the
/// one-line status summary.
#[derive(Debug)]
pub struct SurveyorView<'a, P> {
    pub active: &'a [P],
    pub trimmed: &'a [P],
    pub deadended: &'a [P],
    pub errored: &'a [P],
    /// Number of completed rounds.
    pub round: u64,
    pub max_concurrency: usize,
}

/// Renders `"<active> active, <trimmed> trimmed, <deadended> deadended, <errored> errored"`.
impl<P> fmt::Display for SurveyorView<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} active, {} trimmed, {} deadended, {} errored",
            self.active.len(),
            self.trimmed.len(),
            self.deadended.len(),
            self.errored.len()
        )
    }
}
