// src/control/mod.rs

//! Out-of-band control of a running surveyor.
//!
//! - [`ControlToken`] carries the stop and single-step flags. It is cheap to
//!   clone and can be flipped from any thread (signal listener, console,
//!   another analysis) while the surveyor is inside `run`.
//! - [`pause`] defines what happens at the single-step pause point.
//! - [`command`] parses console input for the interactive pause handler.
//! - [`signals`] wires OS signals to a token.
//!
//! The surveyor reads the flags once per round boundary, never mid-round.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

pub mod command;
pub mod pause;
pub mod signals;

pub use command::Command;
pub use pause::{ConsolePause, LogPause, PauseHandler};

#[derive(Debug, Default)]
struct Flags {
    stop_requested: AtomicBool,
    single_step: AtomicBool,
}

/// Shared stop / single-step flags.
///
/// Both flags start cleared and stay set until explicitly cleared. Reads and
/// writes are relaxed atomics: a request racing with a round boundary is
/// simply observed one round later.
#[derive(Debug, Clone, Default)]
pub struct ControlToken {
    flags: Arc<Flags>,
}

impl ControlToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pause after every round and hand control to the pause handler.
    pub fn enable_single_step(&self) {
        self.flags.single_step.store(true, Ordering::Relaxed);
    }

    pub fn disable_single_step(&self) {
        self.flags.single_step.store(false, Ordering::Relaxed);
    }

    /// Ask `run` to return at the next round boundary.
    pub fn request_stop(&self) {
        self.flags.stop_requested.store(true, Ordering::Relaxed);
    }

    /// Clear a previous stop request so `run` can be resumed.
    pub fn clear_stop(&self) {
        self.flags.stop_requested.store(false, Ordering::Relaxed);
    }

    pub fn stop_requested(&self) -> bool {
        self.flags.stop_requested.load(Ordering::Relaxed)
    }

    pub fn single_step(&self) -> bool {
        self.flags.single_step.load(Ordering::Relaxed)
    }
}
