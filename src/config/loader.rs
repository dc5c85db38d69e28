// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{ModelFile, RawModelFile};
use crate::errors::Result;

/// Read and deserialize a model file without semantic checks.
///
/// Missing `[surveyor]` keys get their defaults here; whether the states
/// actually hang together is left to [`load_and_validate`].
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawModelFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let raw: RawModelFile = toml::from_str(&contents)?;

    debug!(path = %path.display(), states = raw.state.len(), "model file parsed");
    Ok(raw)
}

/// Read, deserialize and validate a model file.
///
/// Rejects unknown `next` targets, an `initial` that names no state, zero
/// limits and an `avoid` pattern that does not compile.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ModelFile> {
    ModelFile::try_from(load_from_path(path)?)
}

/// Model file used when `--config` is not given: `Surveyor.toml` in the
/// working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Surveyor.toml")
}
