// src/control/command.rs

//! Commands understood by the interactive pause console.

/// A single console command, parsed from one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Run one more round, then pause again.
    Step,
    /// Leave single-step mode and keep running.
    Continue,
    /// Request a stop; `run` returns at the next round boundary.
    Quit,
    /// Print the set sizes.
    Print,
    /// List the active paths.
    Active,
    Help,
    Invalid,
}

impl Command {
    pub fn is_invalid(&self) -> bool {
        *self == Command::Invalid
    }

    /// Whether this command hands control back to the surveyor.
    pub fn resumes(&self) -> bool {
        matches!(self, Command::Step | Command::Continue | Command::Quit)
    }
}

impl From<&str> for Command {
    fn from(line: &str) -> Command {
        match line.trim() {
            "" | "s" | "step" => Command::Step,
            "c" | "continue" => Command::Continue,
            "q" | "quit" | "stop" => Command::Quit,
            "p" | "print" => Command::Print,
            "a" | "active" => Command::Active,
            "?" | "h" | "help" => Command::Help,
            _ => Command::Invalid,
        }
    }
}

pub const HELP: &str = "\
commands:
  s, <enter>  step one more round
  c           continue without pausing
  q           stop the run (resume later with a new run)
  p           print set sizes
  a           list active paths
  ?           this help";
