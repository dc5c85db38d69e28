// src/model/system.rs

use std::collections::HashMap;

use crate::config::ModelFile;
use crate::path::Environment;

/// Index of a state inside a [`TransitionSystem`].
pub type StateId = usize;

#[derive(Debug, Clone)]
struct StateNode {
    name: String,
    /// Successors in the order listed in `next`.
    next: Vec<StateId>,
    /// Error records emitted when a trace steps out of this state.
    errors: Vec<String>,
}

/// Finite transition system built from a validated [`ModelFile`].
///
/// States are numbered in name order. Transition order follows the model
/// file, which fixes the order successors are explored in.
#[derive(Debug, Clone)]
pub struct TransitionSystem {
    states: Vec<StateNode>,
    index: HashMap<String, StateId>,
    initial: StateId,
    max_depth: usize,
}

impl TransitionSystem {
    /// Build the system from a validated model.
    ///
    /// Relies on validation: every `next` reference and `initial` resolve.
    pub fn from_model(cfg: &ModelFile) -> Self {
        let index: HashMap<String, StateId> = cfg
            .state
            .keys()
            .enumerate()
            .map(|(id, name)| (name.clone(), id))
            .collect();

        let states = cfg
            .state
            .iter()
            .map(|(name, state)| StateNode {
                name: name.clone(),
                next: state
                    .next
                    .iter()
                    .filter_map(|n| index.get(n).copied())
                    .collect(),
                errors: state.errors.clone(),
            })
            .collect();

        let initial = index.get(&cfg.model.initial).copied().unwrap_or_default();

        Self {
            states,
            index,
            initial,
            max_depth: cfg.model.max_depth,
        }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn initial(&self) -> StateId {
        self.initial
    }

    /// Maximum number of transitions a trace may take.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn state_id(&self, name: &str) -> Option<StateId> {
        self.index.get(name).copied()
    }

    pub fn name_of(&self, id: StateId) -> &str {
        self.states.get(id).map(|s| s.name.as_str()).unwrap_or("<unknown>")
    }

    pub fn successors_of(&self, id: StateId) -> &[StateId] {
        self.states.get(id).map(|s| s.next.as_slice()).unwrap_or(&[])
    }

    pub fn errors_of(&self, id: StateId) -> &[String] {
        self.states.get(id).map(|s| s.errors.as_slice()).unwrap_or(&[])
    }
}

impl Environment for TransitionSystem {
    type Entry = StateId;

    fn initial_entry(&self) -> StateId {
        self.initial
    }
}
