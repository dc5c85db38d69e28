// tests/model_config.rs

use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;
use surveyor::config::{default_config_path, load_and_validate, load_from_path, validate_model};
use surveyor::model::TransitionSystem;
use surveyor::errors::SurveyorError;
use surveyor_test_utils::builders::{ModelFileBuilder, StateBuilder};

fn write_model(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file
}

fn demo(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos").join(name)
}

#[test]
fn minimal_model_gets_defaults() {
    let file = write_model(
        r#"
[model]
initial = "a"

[state.a]
"#,
    );

    let cfg = load_and_validate(file.path()).unwrap();
    assert_eq!(cfg.surveyor.max_concurrency, 10);
    assert_eq!(cfg.surveyor.max_rounds, None);
    assert_eq!(cfg.model.max_depth, 64);
    assert!(cfg.avoid().is_none());
    assert!(cfg.state["a"].next.is_empty());
    assert_eq!(cfg.surveyor_options().max_concurrency, 10);
}

#[test]
fn unknown_successor_returns_config_error() {
    let file = write_model(
        r#"
[model]
initial = "a"

[state.a]
next = ["Nowhere"]
"#,
    );

    match load_and_validate(file.path()) {
        Err(SurveyorError::ConfigError(msg)) => {
            assert!(msg.contains("unknown successor"));
            assert!(msg.contains("Nowhere"));
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn missing_initial_state_returns_config_error() {
    let raw = ModelFileBuilder::new("ghost")
        .with_state("a", StateBuilder::new().build())
        .build_raw();

    match validate_model(&raw) {
        Err(SurveyorError::ConfigError(msg)) => assert!(msg.contains("'ghost'")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}

#[test]
fn model_without_states_is_rejected() {
    let file = write_model(
        r#"
[model]
initial = "a"
"#,
    );

    match load_and_validate(file.path()) {
        Err(SurveyorError::ConfigError(msg)) => assert!(msg.contains("at least one")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}

#[test]
fn zero_limits_are_rejected() {
    let raw = ModelFileBuilder::new("a")
        .with_state("a", StateBuilder::new().build())
        .max_concurrency(0)
        .build_raw();
    match validate_model(&raw) {
        Err(SurveyorError::ConfigError(msg)) => assert!(msg.contains("max_concurrency")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }

    let raw = ModelFileBuilder::new("a")
        .with_state("a", StateBuilder::new().build())
        .max_depth(0)
        .build_raw();
    match validate_model(&raw) {
        Err(SurveyorError::ConfigError(msg)) => assert!(msg.contains("max_depth")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}

#[test]
fn invalid_avoid_pattern_is_rejected() {
    let file = write_model(
        r#"
[model]
initial = "a"
avoid = "(unclosed"

[state.a]
"#,
    );

    match load_and_validate(file.path()) {
        Err(SurveyorError::ConfigError(msg)) => assert!(msg.contains("avoid")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}

#[test]
fn malformed_toml_returns_toml_error() {
    let file = write_model("[model\ninitial = ");

    match load_from_path(file.path()) {
        Err(SurveyorError::TomlError(_)) => {}
        other => panic!("Expected TomlError, got: {:?}", other),
    }
}

#[test]
fn missing_model_section_returns_toml_error() {
    let file = write_model("[state.a]\n");

    match load_and_validate(file.path()) {
        Err(SurveyorError::TomlError(_)) => {}
        other => panic!("Expected TomlError, got: {:?}", other),
    }
}

#[test]
fn missing_file_returns_io_error() {
    let dir = tempfile::tempdir().unwrap();

    match load_and_validate(dir.path().join("absent.toml")) {
        Err(SurveyorError::IoError(_)) => {}
        other => panic!("Expected IoError, got: {:?}", other),
    }
}

#[test]
fn unreachable_states_are_accepted() {
    let cfg = ModelFileBuilder::new("a")
        .with_state("a", StateBuilder::new().next("b").build())
        .with_state("b", StateBuilder::new().build())
        .with_state("island", StateBuilder::new().next("a").build())
        .build();

    assert_eq!(cfg.state.len(), 3);
}

#[test]
fn demo_models_load_and_validate() {
    let branching = load_and_validate(demo("branching.toml")).unwrap();
    assert_eq!(branching.model.initial, "idle");
    assert_eq!(branching.surveyor.max_concurrency, 4);
    assert!(branching.avoid().is_some());

    let cyclic = load_and_validate(demo("cyclic.toml")).unwrap();
    assert_eq!(cyclic.surveyor.max_rounds, Some(12));
    assert_eq!(cyclic.model.max_depth, 6);
}

#[test]
fn default_config_path_is_surveyor_toml() {
    assert_eq!(default_config_path(), PathBuf::from("Surveyor.toml"));
}

#[test]
fn transition_system_numbers_states_by_name() {
    let cfg = ModelFileBuilder::new("b")
        .with_state("b", StateBuilder::new().next("a").error("oops").build())
        .with_state("a", StateBuilder::new().build())
        .build();
    let system = TransitionSystem::from_model(&cfg);

    assert_eq!(system.len(), 2);
    assert_eq!(system.state_id("a"), Some(0));
    assert_eq!(system.initial(), 1);
    assert_eq!(system.successors_of(1), &[0]);
    assert_eq!(system.errors_of(1), &["oops".to_string()]);
    assert_eq!(system.name_of(7), "<unknown>");
}
