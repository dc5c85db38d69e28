// src/config/validate.rs

use petgraph::graphmap::DiGraphMap;
use petgraph::visit::Dfs;
use regex::Regex;
use tracing::warn;

use crate::config::model::{ModelFile, RawModelFile};
use crate::errors::{Result, SurveyorError};

impl TryFrom<RawModelFile> for ModelFile {
    type Error = SurveyorError;

    fn try_from(raw: RawModelFile) -> std::result::Result<Self, Self::Error> {
        validate_model(&raw)?;
        let avoid = compile_avoid(&raw)?;
        warn_unreachable_states(&raw);
        Ok(ModelFile::new_unchecked(raw.surveyor, raw.model, raw.state, avoid))
    }
}

/// Run every semantic check on a raw model file.
pub fn validate_model(cfg: &RawModelFile) -> Result<()> {
    ensure_has_states(cfg)?;
    validate_surveyor_section(cfg)?;
    validate_model_section(cfg)?;
    validate_transitions(cfg)?;
    compile_avoid(cfg)?;
    Ok(())
}

fn ensure_has_states(cfg: &RawModelFile) -> Result<()> {
    if cfg.state.is_empty() {
        return Err(SurveyorError::ConfigError(
            "model must contain at least one [state.<name>] section".to_string(),
        ));
    }
    Ok(())
}

fn validate_surveyor_section(cfg: &RawModelFile) -> Result<()> {
    if cfg.surveyor.max_concurrency == 0 {
        return Err(SurveyorError::ConfigError(
            "[surveyor].max_concurrency must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}

fn validate_model_section(cfg: &RawModelFile) -> Result<()> {
    if !cfg.state.contains_key(&cfg.model.initial) {
        return Err(SurveyorError::ConfigError(format!(
            "[model].initial names unknown state '{}'",
            cfg.model.initial
        )));
    }

    if cfg.model.max_depth == 0 {
        return Err(SurveyorError::ConfigError(
            "[model].max_depth must be >= 1 (got 0)".to_string(),
        ));
    }

    Ok(())
}

fn validate_transitions(cfg: &RawModelFile) -> Result<()> {
    for (name, state) in cfg.state.iter() {
        for next in state.next.iter() {
            if !cfg.state.contains_key(next) {
                return Err(SurveyorError::ConfigError(format!(
                    "state '{}' has unknown successor '{}' in `next`",
                    name, next
                )));
            }
        }
    }
    Ok(())
}

fn compile_avoid(cfg: &RawModelFile) -> Result<Option<Regex>> {
    cfg.model
        .avoid
        .as_deref()
        .map(|pattern| {
            Regex::new(pattern).map_err(|e| {
                SurveyorError::ConfigError(format!("[model].avoid is not a valid regex: {e}"))
            })
        })
        .transpose()
}

/// States no trace can ever reach are almost always a typo in `next`; report
/// them without rejecting the model.
fn warn_unreachable_states(cfg: &RawModelFile) {
    // Edge direction: state -> successor.
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for name in cfg.state.keys() {
        graph.add_node(name.as_str());
    }

    for (name, state) in cfg.state.iter() {
        for next in state.next.iter() {
            graph.add_edge(name.as_str(), next.as_str(), ());
        }
    }

    let mut reachable = Vec::new();
    let mut dfs = Dfs::new(&graph, cfg.model.initial.as_str());
    while let Some(node) = dfs.next(&graph) {
        reachable.push(node);
    }

    for name in cfg.state.keys() {
        if !reachable.contains(&name.as_str()) {
            warn!(
                state = %name,
                initial = %cfg.model.initial,
                "state is unreachable from the initial state"
            );
        }
    }
}
