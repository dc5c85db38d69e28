// src/model/mod.rs

//! Reference analysis: bounded exploration of a finite transition system.
//!
//! - [`system`] is the environment: states, ordered transitions and the
//!   error records attached to states.
//! - [`trace`] is the path type: a run through the system from an entry
//!   state.
//! - [`hooks`] plugs model-level `avoid` / `target` patterns into the
//!   surveyor's admission filter and termination predicate.

pub mod hooks;
pub mod system;
pub mod trace;

pub use hooks::ModelHooks;
pub use system::{StateId, TransitionSystem};
pub use trace::{Trace, TraceError};
