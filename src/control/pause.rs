// src/control/pause.rs

//! The single-step pause point.
//!
//! When single-step mode is on, `Surveyor::run` calls a [`PauseHandler`]
//! after every completed round. The handler receives a read-only view of the
//! scheduler plus the control token, and may block for as long as it likes.
//!
//! - [`LogPause`] logs the view and returns immediately (library default).
//! - [`ConsolePause`] reads commands from a line-oriented console (used by
//!   the CLI's `--interactive` mode).

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use anyhow::Result;
use tracing::{info, warn};

use crate::control::ControlToken;
use crate::control::command::{Command, HELP};
use crate::path::Path;
use crate::surveyor::SurveyorView;

/// Hook invoked at the single-step pause point.
pub trait PauseHandler<P: Path> {
    /// Called between rounds while single-step mode is enabled.
    ///
    /// Returning an error aborts `run` with that error.
    fn pause(&mut self, view: &SurveyorView<'_, P>, control: &ControlToken) -> Result<()>;
}

/// Pause handler that only logs the current state.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogPause;

impl<P: Path> PauseHandler<P> for LogPause {
    fn pause(&mut self, view: &SurveyorView<'_, P>, _control: &ControlToken) -> Result<()> {
        info!(round = view.round, "paused: {}", view);
        Ok(())
    }
}

/// Interactive pause handler reading [`Command`]s line by line.
///
/// End of input is treated as `continue`, so a closed stdin never wedges
/// the run loop.
#[derive(Debug)]
pub struct ConsolePause<R, W> {
    input: R,
    output: W,
}

impl ConsolePause<BufReader<Stdin>, Stdout> {
    /// Console bound to the process stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePause<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_command(&mut self) -> Result<Option<Command>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(Command::from(line.as_str())))
    }
}

impl<P, R, W> PauseHandler<P> for ConsolePause<R, W>
where
    P: Path,
    R: BufRead,
    W: Write,
{
    fn pause(&mut self, view: &SurveyorView<'_, P>, control: &ControlToken) -> Result<()> {
        let round = view.round;
        loop {
            write!(self.output, "[round {round}] {view} > ")?;
            self.output.flush()?;

            let cmd = match self.read_command()? {
                Some(cmd) => cmd,
                None => {
                    warn!("console input closed; leaving single-step mode");
                    control.disable_single_step();
                    return Ok(());
                }
            };

            match cmd {
                Command::Step => {}
                Command::Continue => control.disable_single_step(),
                Command::Quit => control.request_stop(),
                Command::Print => writeln!(self.output, "{view}")?,
                Command::Active => {
                    for (idx, path) in view.active.iter().enumerate() {
                        writeln!(self.output, "  #{idx}: {path:?}")?;
                    }
                }
                Command::Help => writeln!(self.output, "{HELP}")?,
                Command::Invalid => writeln!(self.output, "unknown command; `?` for help")?,
            }

            if cmd.resumes() {
                return Ok(());
            }
        }
    }
}
