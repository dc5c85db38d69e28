// src/config/mod.rs

//! Model file loading and validation for the reference analysis.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a model file from disk (`loader.rs`).
//! - Validate state references and limits (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path};
pub use model::{ModelFile, ModelSection, RawModelFile, StateConfig, SurveyorSection};
pub use validate::validate_model;
