// src/lib.rs

//! Round-based exploration scheduler.
//!
//! The [`Surveyor`](surveyor::Surveyor) drives a population of
//! [`Path`](path::Path)s through rounds of stepping and admission control
//! until a termination predicate holds, a round budget runs out, or a stop
//! is requested through its [`ControlToken`](control::ControlToken).
//!
//! The [`model`] module is a small reference analysis (bounded exploration
//! of a transition system) used by the `surveyor` binary.

pub mod cli;
pub mod config;
pub mod control;
pub mod errors;
pub mod logging;
pub mod model;
pub mod path;
pub mod surveyor;

use std::io::{self, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use regex::Regex;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::loader::load_and_validate;
use crate::config::model::ModelFile;
use crate::control::signals::spawn_signal_listener;
use crate::control::{ConsolePause, ControlToken};
use crate::errors::SurveyorError;
use crate::model::{ModelHooks, Trace, TransitionSystem};
use crate::path::{Path, Seed};
use crate::surveyor::Surveyor;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - model loading
/// - surveyor construction (hooks, options, control token)
/// - OS signal handling (stop / single-step)
/// - the blocking run loop
/// - the final report
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = load_and_validate(&args.config)?;

    if args.dry_run {
        print_dry_run(&cfg);
        return Ok(());
    }

    let target = args
        .target
        .as_deref()
        .map(Regex::new)
        .transpose()
        .context("invalid --target regex")?;

    let mut options = cfg.surveyor_options();
    if let Some(max) = args.max_concurrency {
        if max == 0 {
            return Err(SurveyorError::ConfigError(
                "--max-concurrency must be >= 1 (got 0)".to_string(),
            )
            .into());
        }
        options.max_concurrency = max;
    }
    let rounds = args.rounds.or(cfg.surveyor.max_rounds);

    // SIGUSR1 / Ctrl-C → stop, SIGUSR2 → single-step.
    let control = ControlToken::new();
    let _signals = spawn_signal_listener(control.clone())?;

    let system = Arc::new(TransitionSystem::from_model(&cfg));
    let hooks = ModelHooks::from_model(&cfg, target);
    let mut surveyor: Surveyor<Trace, ModelHooks> =
        Surveyor::with_hooks(system, Seed::Default, hooks, options).with_control(control.clone());

    if args.interactive {
        control.enable_single_step();
        surveyor = surveyor.with_pause_handler(ConsolePause::stdio());
    }

    info!(
        states = cfg.state.len(),
        max_concurrency = options.max_concurrency,
        max_rounds = ?rounds,
        "exploring model"
    );

    // The surveyor is synchronous; keep it off the async worker threads so
    // the signal listener stays responsive.
    let surveyor = tokio::task::spawn_blocking(move || -> errors::Result<_> {
        surveyor.run(rounds)?;
        Ok(surveyor)
    })
    .await??;

    write_report(&mut io::stdout().lock(), &surveyor)?;
    Ok(())
}

/// Final report: summary line, halt reason, then the interesting traces.
pub fn write_report<W: Write>(
    out: &mut W,
    surveyor: &Surveyor<Trace, ModelHooks>,
) -> io::Result<()> {
    writeln!(out, "surveyor report")?;
    writeln!(out, "  rounds: {}", surveyor.round())?;
    writeln!(out, "  halted: {:?}", surveyor.last_halt())?;
    writeln!(out, "  {surveyor}")?;

    let hits = surveyor.hooks().target_hits(surveyor.active());
    if let Some(target) = surveyor.hooks().target() {
        writeln!(out)?;
        writeln!(out, "target /{}/ reached by {} trace(s):", target.as_str(), hits.len())?;
        for trace in hits {
            writeln!(out, "  - {trace}")?;
        }
    }

    if !surveyor.errored().is_empty() {
        writeln!(out)?;
        writeln!(out, "errored ({}):", surveyor.errored().len())?;
        for trace in surveyor.errored() {
            writeln!(out, "  - {trace}")?;
            for err in trace.errors() {
                writeln!(out, "      {err}")?;
            }
        }
    }

    if !surveyor.deadended().is_empty() {
        writeln!(out)?;
        writeln!(out, "deadended ({}):", surveyor.deadended().len())?;
        for trace in surveyor.deadended() {
            writeln!(out, "  - {trace}")?;
        }
    }

    Ok(())
}

/// Simple dry-run output: print settings, states and transitions.
fn print_dry_run(cfg: &ModelFile) {
    println!("surveyor dry-run");
    println!("  surveyor.max_concurrency = {}", cfg.surveyor.max_concurrency);
    if let Some(rounds) = cfg.surveyor.max_rounds {
        println!("  surveyor.max_rounds = {rounds}");
    }
    println!("  model.initial = {}", cfg.model.initial);
    println!("  model.max_depth = {}", cfg.model.max_depth);
    if let Some(ref avoid) = cfg.model.avoid {
        println!("  model.avoid = {avoid}");
    }
    println!();

    println!("states ({}):", cfg.state.len());
    for (name, state) in cfg.state.iter() {
        println!("  - {name}");
        if !state.next.is_empty() {
            println!("      next: {:?}", state.next);
        }
        if !state.errors.is_empty() {
            println!("      errors: {:?}", state.errors);
        }
    }

    debug!("dry-run complete (no exploration)");
}
