// src/config/model.rs

use std::collections::BTreeMap;

use regex::Regex;
use serde::Deserialize;

use crate::surveyor::{DEFAULT_MAX_CONCURRENCY, SurveyorOptions};

/// Model file as read from TOML, before semantic validation.
///
/// ```toml
/// [surveyor]
/// max_concurrency = 4
/// max_rounds = 100
///
/// [model]
/// initial = "init"
/// max_depth = 32
/// avoid = "^sink"
///
/// [state.init]
/// next = ["a", "b"]
///
/// [state.a]
/// errors = ["assertion failed"]
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct RawModelFile {
    /// Scheduler settings from `[surveyor]`.
    #[serde(default)]
    pub surveyor: SurveyorSection,

    /// Exploration settings from `[model]`.
    pub model: ModelSection,

    /// All states from `[state.<name>]`, keyed by state name.
    #[serde(default)]
    pub state: BTreeMap<String, StateConfig>,
}

/// `[surveyor]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct SurveyorSection {
    /// Maximum number of traces kept active per round.
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,

    /// Optional round budget for a run; `None` runs until done.
    #[serde(default)]
    pub max_rounds: Option<u64>,
}

fn default_max_concurrency() -> usize {
    DEFAULT_MAX_CONCURRENCY
}

impl Default for SurveyorSection {
    fn default() -> Self {
        Self {
            max_concurrency: default_max_concurrency(),
            max_rounds: None,
        }
    }
}

/// `[model]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelSection {
    /// Name of the state every default trace starts in.
    pub initial: String,

    /// Traces stop extending after this many transitions.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Regex over state names; traces that reach a match are dropped.
    #[serde(default)]
    pub avoid: Option<String>,
}

fn default_max_depth() -> usize {
    64
}

/// `[state.<name>]` section.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct StateConfig {
    /// Successor states, in exploration order.
    #[serde(default)]
    pub next: Vec<String>,

    /// Error records produced whenever a trace steps out of this state.
    #[serde(default)]
    pub errors: Vec<String>,
}

/// A validated model file.
///
/// Only obtainable through `TryFrom<RawModelFile>` (see `config::validate`),
/// so holders can rely on:
/// - at least one state, and `initial` names one of them
/// - every `next` entry names a state
/// - `max_concurrency >= 1`, `max_depth >= 1`
/// - `avoid` is a valid regex (kept compiled)
#[derive(Debug, Clone)]
pub struct ModelFile {
    pub surveyor: SurveyorSection,
    pub model: ModelSection,
    pub state: BTreeMap<String, StateConfig>,
    avoid: Option<Regex>,
}

impl ModelFile {
    pub(crate) fn new_unchecked(
        surveyor: SurveyorSection,
        model: ModelSection,
        state: BTreeMap<String, StateConfig>,
        avoid: Option<Regex>,
    ) -> Self {
        Self {
            surveyor,
            model,
            state,
            avoid,
        }
    }

    /// Compiled `[model].avoid` pattern.
    pub fn avoid(&self) -> Option<&Regex> {
        self.avoid.as_ref()
    }

    /// Scheduler options described by `[surveyor]`.
    pub fn surveyor_options(&self) -> SurveyorOptions {
        SurveyorOptions {
            max_concurrency: self.surveyor.max_concurrency,
        }
    }
}
