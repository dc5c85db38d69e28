// src/path.rs

//! Capabilities the surveyor requires from the units it schedules.
//!
//! The surveyor never looks inside a path. Per step it only observes:
//! - the successors the step produced (possibly none), and
//! - the error records the path has accumulated (possibly none).
//!
//! Errors are observational: a path with errors may still have successors.

use std::fmt::Debug;
use std::sync::Arc;

/// Context a path is built against (a program, a model, a search problem).
pub trait Environment {
    /// Whatever a path is started from (an address, a state id, ...).
    type Entry;

    /// Canonical starting point used when the surveyor is seeded with
    /// [`Seed::Default`].
    fn initial_entry(&self) -> Self::Entry;
}

/// A unit of exploration that can be stepped forward.
pub trait Path: Sized + Clone + Debug {
    type Env: Environment;
    type Error: Debug;

    /// Build a fresh path starting at `entry`.
    fn from_entry(env: &Arc<Self::Env>, entry: <Self::Env as Environment>::Entry) -> Self;

    /// Advance one step, returning the successor paths.
    ///
    /// An empty vector means the path has terminated. Problems found while
    /// stepping should be recorded on the path (see [`Path::errors`])
    /// rather than reported out of band.
    fn step(&mut self) -> Vec<Self>;

    /// Error records accumulated so far.
    fn errors(&self) -> &[Self::Error];
}

/// Entry type of the environment a path runs against.
pub type EntryOf<P> = <<P as Path>::Env as Environment>::Entry;

/// How the initial `active` set is populated.
///
/// Exactly one mode applies per surveyor.
#[derive(Debug, Clone)]
pub enum Seed<E> {
    /// One path at the environment's [`Environment::initial_entry`].
    Default,
    /// One path at the given entry.
    Single(E),
    /// One path per entry, in order. May be empty.
    Many(Vec<E>),
}

impl<E> Default for Seed<E> {
    fn default() -> Self {
        Seed::Default
    }
}

impl<E> Seed<E> {
    /// Resolve the seed into the concrete list of entries to start from.
    pub fn into_entries<Env>(self, env: &Env) -> Vec<E>
    where
        Env: Environment<Entry = E>,
    {
        match self {
            Seed::Default => vec![env.initial_entry()],
            Seed::Single(entry) => vec![entry],
            Seed::Many(entries) => entries,
        }
    }
}
