// src/surveyor/scheduler.rs

use std::fmt;
use std::mem;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::control::{ControlToken, LogPause, PauseHandler};
use crate::errors::Result;
use crate::path::{EntryOf, Path, Seed};
use crate::surveyor::hooks::{DefaultHooks, Hooks, Verdict};
use crate::surveyor::round::{Halt, RoundReport};
use crate::surveyor::view::SurveyorView;

/// Concurrency limit used when none is configured.
pub const DEFAULT_MAX_CONCURRENCY: usize = 10;

/// Construction-time options. Fixed for the lifetime of a surveyor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurveyorOptions {
    /// Maximum number of paths kept in `active` after admission control.
    pub max_concurrency: usize,
}

impl Default for SurveyorOptions {
    fn default() -> Self {
        Self {
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
        }
    }
}

#[derive(Debug, Default)]
struct TickCounts {
    successors: usize,
    deadended: usize,
    errored: usize,
}

#[derive(Debug, Default)]
struct TrimCounts {
    dropped: usize,
    parked: usize,
}

/// Round-based exploration scheduler.
///
/// It owns four ordered path sets:
/// - `active`: stepped in the next round
/// - `deadended`: produced no successors; never stepped again
/// - `errored`: had error records after a step (append-only log; errors do
///   not end a path, its successors keep running)
/// - `trimmed`: parked by admission control, reclaimed by `untrim`
///
/// A path is in at most one of `active` / `trimmed`. A path that deadends
/// with errors is recorded in both `deadended` and `errored`.
pub struct Surveyor<P: Path, H = DefaultHooks> {
    env: Arc<P::Env>,
    hooks: H,
    pause: Box<dyn PauseHandler<P> + Send>,
    control: ControlToken,
    max_concurrency: usize,

    active: Vec<P>,
    deadended: Vec<P>,
    errored: Vec<P>,
    trimmed: Vec<P>,

    /// Completed rounds.
    round: u64,
    last_halt: Option<Halt>,
}

impl<P: Path, H> fmt::Debug for Surveyor<P, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Surveyor")
            .field("max_concurrency", &self.max_concurrency)
            .field("round", &self.round)
            .field("active", &self.active.len())
            .field("trimmed", &self.trimmed.len())
            .field("deadended", &self.deadended.len())
            .field("errored", &self.errored.len())
            .field("control", &self.control)
            .finish_non_exhaustive()
    }
}

impl<P: Path, H> fmt::Display for Surveyor<P, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.view().fmt(f)
    }
}

impl<P: Path> Surveyor<P, DefaultHooks> {
    /// Surveyor with the default hooks.
    pub fn new(env: Arc<P::Env>, seed: Seed<EntryOf<P>>, options: SurveyorOptions) -> Self {
        Self::with_hooks(env, seed, DefaultHooks, options)
    }
}

impl<P: Path, H> Surveyor<P, H> {
    /// Share an existing control token (e.g. one wired to OS signals).
    pub fn with_control(mut self, control: ControlToken) -> Self {
        self.control = control;
        self
    }

    /// Replace the handler invoked at the single-step pause point.
    pub fn with_pause_handler(mut self, handler: impl PauseHandler<P> + Send + 'static) -> Self {
        self.pause = Box::new(handler);
        self
    }

    /// Start an additional path at `entry`, appended to `active`.
    pub fn analyze_entry(&mut self, entry: EntryOf<P>) {
        self.active.push(P::from_entry(&self.env, entry));
    }

    pub fn active(&self) -> &[P] {
        &self.active
    }

    pub fn deadended(&self) -> &[P] {
        &self.deadended
    }

    pub fn errored(&self) -> &[P] {
        &self.errored
    }

    pub fn trimmed(&self) -> &[P] {
        &self.trimmed
    }

    /// Number of completed rounds.
    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn max_concurrency(&self) -> usize {
        self.max_concurrency
    }

    pub fn control(&self) -> &ControlToken {
        &self.control
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    /// Why the most recent `run` returned, if `run` has been called.
    pub fn last_halt(&self) -> Option<Halt> {
        self.last_halt
    }

    /// Read-only snapshot of all four sets and the round counter.
    pub fn view(&self) -> SurveyorView<'_, P> {
        SurveyorView {
            active: &self.active,
            trimmed: &self.trimmed,
            deadended: &self.deadended,
            errored: &self.errored,
            round: self.round,
            max_concurrency: self.max_concurrency,
        }
    }

    /// Flatten a per-path query over the active set, in `active` order.
    pub fn collect_active<T, I, F>(&self, f: F) -> Vec<T>
    where
        F: FnMut(&P) -> I,
        I: IntoIterator<Item = T>,
    {
        self.active.iter().flat_map(f).collect()
    }
}

impl<P: Path, H: Hooks<P>> Surveyor<P, H> {
    /// Surveyor driven by a custom set of hooks.
    ///
    /// `active` is seeded from `seed`; everything else starts empty and the
    /// round counter at zero.
    pub fn with_hooks(
        env: Arc<P::Env>,
        seed: Seed<EntryOf<P>>,
        hooks: H,
        options: SurveyorOptions,
    ) -> Self {
        let entries = seed.into_entries(env.as_ref());

        let mut surveyor = Self {
            env,
            hooks,
            pause: Box::new(LogPause),
            control: ControlToken::new(),
            max_concurrency: options.max_concurrency,
            active: Vec::with_capacity(entries.len()),
            deadended: Vec::new(),
            errored: Vec::new(),
            trimmed: Vec::new(),
            round: 0,
            last_halt: None,
        };

        for entry in entries {
            surveyor.analyze_entry(entry);
        }

        debug!(
            seeded = surveyor.active.len(),
            max_concurrency = surveyor.max_concurrency,
            "surveyor constructed"
        );
        surveyor
    }

    /// Whether the exploration is finished (see [`Hooks::done`]).
    pub fn done(&self) -> Result<bool> {
        Ok(self.hooks.done(&self.view())?)
    }

    /// Advance every active path by one step.
    ///
    /// Only paths present at the start of the call are stepped. Each one is
    /// replaced by its successors; paths with no successors go to
    /// `deadended`, paths carrying error records go to `errored`. The round
    /// counter is incremented.
    ///
    /// The only possible error is a fault from the step hook. In that case
    /// the round is abandoned without incrementing the counter and `active`
    /// holds the successors produced so far followed by the unstepped paths,
    /// the faulting one first.
    pub fn tick(&mut self) -> Result<&mut Self> {
        self.tick_internal()?;
        Ok(self)
    }

    /// Admission control: filter, then cap `active` at the concurrency limit.
    ///
    /// Paths the filter parks and the overflow of the admission policy are
    /// appended to `trimmed`; paths the filter drops are discarded.
    pub fn trim(&mut self) -> Result<&mut Self> {
        self.trim_internal()?;
        Ok(self)
    }

    /// Move parked paths back into `active` while there is spare capacity,
    /// oldest first.
    pub fn untrim(&mut self) -> &mut Self {
        self.untrim_internal();
        self
    }

    /// One full round (tick, trim, untrim) with a report of what changed.
    pub fn step_round(&mut self) -> Result<RoundReport> {
        let stepped = self.active.len();
        let tick = self.tick_internal()?;
        let trim = self.trim_internal()?;
        let reclaimed = self.untrim_internal();

        let report = RoundReport {
            round: self.round,
            stepped,
            successors: tick.successors,
            deadended: tick.deadended,
            errored: tick.errored,
            dropped: trim.dropped,
            parked: trim.parked,
            reclaimed,
        };
        debug!(?report, "after tick/trim/untrim: {}", self);
        Ok(report)
    }

    /// Run rounds until [`done`](Self::done) holds, `n` rounds have been
    /// performed (if given), or a stop is requested.
    ///
    /// The control token is consulted after every completed round:
    /// - stop requested: return immediately, leaving all state in place.
    ///   Clear the request and call `run` again to resume.
    /// - single-step: hand control to the pause handler before the next
    ///   round. A stop requested from the pause handler is honoured right
    ///   away.
    pub fn run(&mut self, n: Option<u64>) -> Result<&mut Self> {
        let mut remaining = n;
        info!(max_rounds = ?n, round = self.round, "run starting: {}", self);

        let halt = loop {
            if self.done()? {
                break Halt::Done;
            }
            if remaining == Some(0) {
                break Halt::RoundBudgetExhausted;
            }

            self.step_round()?;

            if self.control.stop_requested() {
                warn!(round = self.round, "{} stopping due to a stop request", self);
                warn!("... call clear_stop() and then run() again to resume");
                break Halt::StopRequested;
            }

            if self.control.single_step() {
                warn!(round = self.round, "{} pausing in single-step mode", self);
                warn!("... call disable_single_step() to keep running without pausing");

                let view = SurveyorView {
                    active: &self.active,
                    trimmed: &self.trimmed,
                    deadended: &self.deadended,
                    errored: &self.errored,
                    round: self.round,
                    max_concurrency: self.max_concurrency,
                };
                self.pause.pause(&view, &self.control)?;

                if self.control.stop_requested() {
                    warn!(round = self.round, "{} stopping due to a stop request", self);
                    break Halt::StopRequested;
                }
            }

            if let Some(r) = remaining.as_mut() {
                *r -= 1;
            }
        };

        self.last_halt = Some(halt);
        info!(?halt, round = self.round, "run finished: {}", self);
        Ok(self)
    }

    fn tick_internal(&mut self) -> Result<TickCounts> {
        let mut counts = TickCounts::default();
        let mut next_active: Vec<P> = Vec::new();
        let mut pending = mem::take(&mut self.active).into_iter();

        while let Some(mut path) = pending.next() {
            let successors = match self.hooks.step(&mut path) {
                Ok(successors) => successors,
                Err(e) => {
                    warn!(round = self.round, "step function failed; abandoning round");
                    next_active.push(path);
                    next_active.extend(pending);
                    self.active = next_active;
                    return Err(e.into());
                }
            };

            let has_errors = !path.errors().is_empty();

            if successors.is_empty() {
                debug!(round = self.round, "path has deadended");
                if has_errors {
                    debug!(
                        round = self.round,
                        errors = path.errors().len(),
                        "path has yielded errors"
                    );
                    self.errored.push(path.clone());
                    counts.errored += 1;
                }
                self.deadended.push(path);
                counts.deadended += 1;
            } else {
                debug!(
                    round = self.round,
                    successors = successors.len(),
                    "path has produced successors"
                );
                counts.successors += successors.len();
                next_active.extend(successors);
                if has_errors {
                    debug!(
                        round = self.round,
                        errors = path.errors().len(),
                        "path has yielded errors"
                    );
                    self.errored.push(path);
                    counts.errored += 1;
                }
            }
        }

        self.active = next_active;
        self.round += 1;
        Ok(counts)
    }

    fn trim_internal(&mut self) -> Result<TrimCounts> {
        let mut counts = TrimCounts::default();
        let before = self.active.len();
        let mut candidates: Vec<P> = Vec::with_capacity(before);
        let mut pending = mem::take(&mut self.active).into_iter();

        debug!("{} about to do individual trimming", self);
        while let Some(path) = pending.next() {
            let verdict = match self.hooks.filter(&path) {
                Ok(verdict) => verdict,
                Err(e) => {
                    candidates.push(path);
                    candidates.extend(pending);
                    self.active = candidates;
                    return Err(e.into());
                }
            };

            match verdict {
                Verdict::Keep => candidates.push(path),
                Verdict::Drop => counts.dropped += 1,
                Verdict::Park => {
                    self.trimmed.push(path);
                    counts.parked += 1;
                }
            }
        }
        debug!(
            kept = candidates.len(),
            dropped = counts.dropped,
            parked = counts.parked,
            "... individual trimming done"
        );

        let overflow = match self.hooks.admit(&mut candidates, self.max_concurrency) {
            Ok(overflow) => overflow,
            Err(e) => {
                self.active = candidates;
                return Err(e.into());
            }
        };
        counts.parked += overflow.len();
        self.trimmed.extend(overflow);

        if candidates.len() > self.max_concurrency {
            let excess = candidates.split_off(self.max_concurrency);
            warn!(
                admitted = candidates.len() + excess.len(),
                max_concurrency = self.max_concurrency,
                "admission policy exceeded the concurrency limit; parking the excess"
            );
            counts.parked += excess.len();
            self.trimmed.extend(excess);
        }

        debug!(active = candidates.len(), trimmed = self.trimmed.len(), "... final trimming done");
        self.active = candidates;
        Ok(counts)
    }

    fn untrim_internal(&mut self) -> usize {
        let available = self.max_concurrency.saturating_sub(self.active.len());
        if available == 0 || self.trimmed.is_empty() {
            return 0;
        }

        let take = available.min(self.trimmed.len());
        self.active.extend(self.trimmed.drain(..take));
        debug!(reclaimed = take, trimmed = self.trimmed.len(), "untrimmed parked paths");
        take
    }
}
