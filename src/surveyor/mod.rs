// src/surveyor/mod.rs

//! The exploration scheduler.
//!
//! - [`scheduler`] holds [`Surveyor`]: the four path sets, the round counter
//!   and the tick / trim / untrim / run skeleton.
//! - [`hooks`] defines the customisable steps of that skeleton (step
//!   function, admission filter, admission policy, termination predicate).
//! - [`view`] is the read-only snapshot handed to hooks and pause handlers.
//! - [`round`] holds the per-round report and the halt reason of `run`.

pub mod hooks;
pub mod round;
pub mod scheduler;
pub mod view;

pub use hooks::{DefaultHooks, Hooks, Verdict, front_of_queue};
pub use round::{Halt, RoundReport};
pub use scheduler::{DEFAULT_MAX_CONCURRENCY, Surveyor, SurveyorOptions};
pub use view::SurveyorView;
