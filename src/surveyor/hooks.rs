// src/surveyor/hooks.rs

//! Customisable steps of the surveyor's round skeleton.
//!
//! An analysis implements [`Hooks`] and overrides only what it needs; every
//! method has the default behaviour described on it. Errors returned from a
//! hook are treated as faults: they abort the current operation and are
//! propagated to the caller unchanged.

use anyhow::Result;

use crate::path::Path;
use crate::surveyor::view::SurveyorView;

/// Outcome of the per-path admission filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verdict {
    /// Keep the path as a candidate for the bulk admission policy.
    #[default]
    Keep,
    /// Discard the path. It is not parked and will never run again.
    Drop,
    /// Park the path in `trimmed` so `untrim` can bring it back later.
    Park,
}

/// Strategy object injected into a [`Surveyor`](crate::surveyor::Surveyor).
pub trait Hooks<P: Path> {
    /// Advance a single path, returning its successors.
    ///
    /// Default: [`Path::step`].
    fn step(&mut self, path: &mut P) -> Result<Vec<P>> {
        Ok(path.step())
    }

    /// Decide whether a path stays a candidate for the next round.
    ///
    /// Default: keep everything.
    fn filter(&mut self, _path: &P) -> Result<Verdict> {
        Ok(Verdict::Keep)
    }

    /// Bulk admission: leave the admitted paths in `paths` and return the
    /// overflow, which the surveyor parks in `trimmed` (in the returned
    /// order).
    ///
    /// Default: [`front_of_queue`], i.e. the first `limit` paths run.
    fn admit(&mut self, paths: &mut Vec<P>, limit: usize) -> Result<Vec<P>> {
        Ok(front_of_queue(paths, limit))
    }

    /// Whether the exploration is finished.
    ///
    /// Default: no active paths left.
    fn done(&self, view: &SurveyorView<'_, P>) -> Result<bool> {
        Ok(view.active.is_empty())
    }
}

/// Hooks with every default in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHooks;

impl<P: Path> Hooks<P> for DefaultHooks {}

/// Keep the first `limit` paths, returning the rest in order.
///
/// Earliest-discovered paths run first, which gives breadth-first fairness.
pub fn front_of_queue<P>(paths: &mut Vec<P>, limit: usize) -> Vec<P> {
    if paths.len() > limit {
        paths.split_off(limit)
    } else {
        Vec::new()
    }
}
