// src/model/trace.rs

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::model::system::{StateId, TransitionSystem};
use crate::path::Path;

/// Error record attached to a trace when it steps out of a faulty state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceError {
    pub state: String,
    pub message: String,
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.state, self.message)
    }
}

/// A run through a [`TransitionSystem`].
///
/// Stepping a trace forks it once per transition out of its current state.
/// A trace that has taken `max_depth` transitions, or sits in a state with
/// no transitions, has no successors.
#[derive(Clone)]
pub struct Trace {
    system: Arc<TransitionSystem>,
    /// Visited states, entry first. Never empty.
    history: Vec<StateId>,
    errors: Vec<TraceError>,
}

impl Trace {
    /// Current state.
    pub fn state(&self) -> StateId {
        self.history.last().copied().unwrap_or_else(|| self.system.initial())
    }

    pub fn state_name(&self) -> &str {
        self.system.name_of(self.state())
    }

    /// Transitions taken so far.
    pub fn depth(&self) -> usize {
        self.history.len().saturating_sub(1)
    }

    pub fn history(&self) -> &[StateId] {
        &self.history
    }

    fn extend_to(&self, next: StateId) -> Trace {
        let mut history = Vec::with_capacity(self.history.len() + 1);
        history.extend_from_slice(&self.history);
        history.push(next);

        Trace {
            system: Arc::clone(&self.system),
            history,
            errors: Vec::new(),
        }
    }
}

impl fmt::Debug for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trace")
            .field("at", &self.state_name())
            .field("depth", &self.depth())
            .field("errors", &self.errors)
            .finish()
    }
}

/// Renders the visited states as `a -> b -> c`.
impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, id) in self.history.iter().enumerate() {
            if idx > 0 {
                f.write_str(" -> ")?;
            }
            f.write_str(self.system.name_of(*id))?;
        }
        Ok(())
    }
}

impl Path for Trace {
    type Env = TransitionSystem;
    type Error = TraceError;

    fn from_entry(env: &Arc<TransitionSystem>, entry: StateId) -> Self {
        Trace {
            system: Arc::clone(env),
            history: vec![entry],
            errors: Vec::new(),
        }
    }

    fn step(&mut self) -> Vec<Self> {
        let state = self.state();

        for message in self.system.errors_of(state) {
            self.errors.push(TraceError {
                state: self.system.name_of(state).to_string(),
                message: message.clone(),
            });
        }

        if self.depth() >= self.system.max_depth() {
            trace!(state = self.state_name(), depth = self.depth(), "trace reached max_depth");
            return Vec::new();
        }

        self.system
            .successors_of(state)
            .iter()
            .map(|&next| self.extend_to(next))
            .collect()
    }

    fn errors(&self) -> &[TraceError] {
        &self.errors
    }
}
