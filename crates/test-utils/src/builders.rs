#![allow(dead_code)]

use std::collections::BTreeMap;

use surveyor::config::{ModelFile, ModelSection, RawModelFile, StateConfig, SurveyorSection};

/// Builder for `ModelFile` to simplify test setup.
pub struct ModelFileBuilder {
    model: RawModelFile,
}

impl ModelFileBuilder {
    pub fn new(initial: &str) -> Self {
        Self {
            model: RawModelFile {
                surveyor: SurveyorSection::default(),
                model: ModelSection {
                    initial: initial.to_string(),
                    max_depth: 64,
                    avoid: None,
                },
                state: BTreeMap::new(),
            },
        }
    }

    pub fn with_state(mut self, name: &str, state: StateConfig) -> Self {
        self.model.state.insert(name.to_string(), state);
        self
    }

    pub fn max_concurrency(mut self, n: usize) -> Self {
        self.model.surveyor.max_concurrency = n;
        self
    }

    pub fn max_rounds(mut self, n: u64) -> Self {
        self.model.surveyor.max_rounds = Some(n);
        self
    }

    pub fn max_depth(mut self, n: usize) -> Self {
        self.model.model.max_depth = n;
        self
    }

    pub fn avoid(mut self, pattern: &str) -> Self {
        self.model.model.avoid = Some(pattern.to_string());
        self
    }

    /// The raw (unvalidated) model, for exercising validation.
    pub fn build_raw(self) -> RawModelFile {
        self.model
    }

    pub fn build(self) -> ModelFile {
        ModelFile::try_from(self.model).expect("Failed to build valid model from builder")
    }
}

/// Builder for `StateConfig`.
pub struct StateBuilder {
    state: StateConfig,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            state: StateConfig::default(),
        }
    }

    pub fn next(mut self, state: &str) -> Self {
        self.state.next.push(state.to_string());
        self
    }

    pub fn error(mut self, message: &str) -> Self {
        self.state.errors.push(message.to_string());
        self
    }

    pub fn build(self) -> StateConfig {
        self.state
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
