// src/model/hooks.rs

use anyhow::Result;
use regex::Regex;
use tracing::debug;

use crate::config::ModelFile;
use crate::model::trace::Trace;
use crate::surveyor::{Hooks, SurveyorView, Verdict};

/// Surveyor hooks for transition-system exploration.
///
/// - `avoid`: traces whose current state matches are dropped during
///   admission control.
/// - `target`: the run is done as soon as an active trace sits on a
///   matching state (or when nothing is left to explore).
#[derive(Debug, Clone, Default)]
pub struct ModelHooks {
    avoid: Option<Regex>,
    target: Option<Regex>,
}

impl ModelHooks {
    pub fn new(avoid: Option<Regex>, target: Option<Regex>) -> Self {
        Self { avoid, target }
    }

    /// Hooks using the model's `avoid` pattern and an optional target.
    pub fn from_model(cfg: &ModelFile, target: Option<Regex>) -> Self {
        Self::new(cfg.avoid().cloned(), target)
    }

    pub fn target(&self) -> Option<&Regex> {
        self.target.as_ref()
    }

    /// Traces in `paths` that sit on a target state.
    pub fn target_hits<'a>(&self, paths: &'a [Trace]) -> Vec<&'a Trace> {
        match &self.target {
            Some(re) => paths.iter().filter(|t| re.is_match(t.state_name())).collect(),
            None => Vec::new(),
        }
    }
}

impl Hooks<Trace> for ModelHooks {
    fn filter(&mut self, path: &Trace) -> Result<Verdict> {
        match &self.avoid {
            Some(re) if re.is_match(path.state_name()) => {
                debug!(state = path.state_name(), "trace entered an avoided state; dropping");
                Ok(Verdict::Drop)
            }
            _ => Ok(Verdict::Keep),
        }
    }

    fn done(&self, view: &SurveyorView<'_, Trace>) -> Result<bool> {
        if view.active.is_empty() {
            return Ok(true);
        }
        Ok(!self.target_hits(view.active).is_empty())
    }
}
