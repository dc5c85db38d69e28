// src/surveyor/round.rs

//! Result types for single rounds and for `run`.

/// Structured result of a single round (tick + trim + untrim).
///
/// Useful for tests and tools that step the surveyor manually and want to
/// make assertions about what changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoundReport {
    /// Round counter after this round.
    pub round: u64,
    /// Paths stepped in this round.
    pub stepped: usize,
    /// Successors produced by all stepped paths.
    pub successors: usize,
    /// Paths newly recorded as deadended.
    pub deadended: usize,
    /// Paths newly recorded as errored.
    pub errored: usize,
    /// Paths discarded by the admission filter.
    pub dropped: usize,
    /// Paths moved to `trimmed` (by the filter or the admission policy).
    pub parked: usize,
    /// Paths moved back from `trimmed` by `untrim`.
    pub reclaimed: usize,
}

/// Why the last call to `run` returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Halt {
    /// The termination predicate held.
    Done,
    /// The round budget passed to `run` ran out.
    RoundBudgetExhausted,
    /// A stop was requested through the control token.
    StopRequested,
}
