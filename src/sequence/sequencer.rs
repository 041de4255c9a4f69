use crate::foundation::core::Millis;
use crate::sequence::cadence::Cadence;

type StepFn<S> = Box<dyn FnMut(&S) -> S>;
type Predicate<S> = Box<dyn Fn(&S) -> bool>;
type Observer<S> = Box<dyn FnMut(&S)>;
type Completion<S> = Box<dyn FnOnce(&S)>;

/// Lifecycle of a [`Sequence`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Ticking on its cadence.
    Running,
    /// Terminated, waiting out `complete_after` before the completion callback.
    Finishing,
    /// Completion callback has run (or there was none).
    Completed,
    /// Stopped by its owner before completing.
    Cancelled,
}

impl Phase {
    pub fn is_live(self) -> bool {
        matches!(self, Self::Running | Self::Finishing)
    }
}

/// What the driver should do after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Schedule the next tick after this delay.
    Continue(Millis),
    /// The sequence terminated; tick once more after this delay to deliver completion.
    Finishing(Millis),
    /// The sequence is done. Do not schedule again.
    Completed,
    /// Nothing ran: the sequence was already completed or cancelled.
    Idle,
}

/// A timed sequence: a state, a step function, a cadence and an optional termination predicate.
///
/// A sequence without a predicate never terminates on its own (matrix rain, typewriter) and only
/// stops when cancelled. Sequences are single-use: once completed or cancelled they stay that
/// way.
pub struct Sequence<S> {
    label: &'static str,
    state: S,
    step: StepFn<S>,
    cadence: Cadence<S>,
    until: Option<Predicate<S>>,
    on_tick: Option<Observer<S>>,
    on_complete: Option<Completion<S>>,
    complete_after: Millis,
    phase: Phase,
    ticks: u64,
}

impl<S: 'static> Sequence<S> {
    pub fn new(
        initial: S,
        step: impl FnMut(&S) -> S + 'static,
        cadence: impl Into<Cadence<S>>,
    ) -> Self {
        Self {
            label: "sequence",
            state: initial,
            step: Box::new(step),
            cadence: cadence.into(),
            until: None,
            on_tick: None,
            on_complete: None,
            complete_after: Millis::ZERO,
            phase: Phase::Running,
            ticks: 0,
        }
    }

    /// Name used in log output.
    pub fn named(mut self, label: &'static str) -> Self {
        self.label = label;
        self
    }

    /// Stop once `pred` holds for the state produced by a tick.
    pub fn until(mut self, pred: impl Fn(&S) -> bool + 'static) -> Self {
        self.until = Some(Box::new(pred));
        self
    }

    /// Observe every state produced by a tick (the caller's renderer).
    pub fn on_tick(mut self, f: impl FnMut(&S) + 'static) -> Self {
        self.on_tick = Some(Box::new(f));
        self
    }

    pub fn on_complete(mut self, f: impl FnOnce(&S) + 'static) -> Self {
        self.on_complete = Some(Box::new(f));
        self
    }

    /// Delay the completion callback by `delay` after termination.
    pub fn complete_after(mut self, delay: Millis) -> Self {
        self.complete_after = delay;
        self
    }
}

impl<S> Sequence<S> {
    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of steps applied so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_infinite(&self) -> bool {
        self.until.is_none()
    }

    /// Delay before the first tick, derived from the initial state.
    pub fn first_delay(&mut self) -> Millis {
        self.cadence.next(&self.state)
    }

    /// Run one tick.
    pub fn tick(&mut self) -> TickOutcome {
        match self.phase {
            Phase::Running => {}
            Phase::Finishing => {
                self.finish();
                return TickOutcome::Completed;
            }
            Phase::Completed | Phase::Cancelled => return TickOutcome::Idle,
        }

        self.state = (self.step)(&self.state);
        self.ticks += 1;
        if let Some(observer) = self.on_tick.as_mut() {
            observer(&self.state);
        }

        let done = self.until.as_ref().is_some_and(|pred| pred(&self.state));
        if !done {
            return TickOutcome::Continue(self.cadence.next(&self.state));
        }
        if !self.complete_after.is_zero() {
            self.phase = Phase::Finishing;
            return TickOutcome::Finishing(self.complete_after);
        }
        self.finish();
        TickOutcome::Completed
    }

    /// Stop the sequence. Returns `false` when it had already completed or been cancelled.
    pub fn cancel(&mut self) -> bool {
        if !self.phase.is_live() {
            return false;
        }
        self.phase = Phase::Cancelled;
        self.on_complete = None;
        true
    }

    /// Drive the sequence synchronously, ignoring cadence, for at most `max_ticks` steps.
    ///
    /// Returns the number of steps applied. Handy for previews and tests; use a
    /// [`Timeline`](crate::Timeline) for timed playback.
    pub fn run_steps(&mut self, max_ticks: u64) -> u64 {
        let start = self.ticks;
        for _ in 0..max_ticks {
            match self.tick() {
                TickOutcome::Continue(_) => {}
                TickOutcome::Finishing(_) => {
                    self.tick();
                    break;
                }
                TickOutcome::Completed | TickOutcome::Idle => break,
            }
        }
        self.ticks - start
    }

    fn finish(&mut self) {
        self.phase = Phase::Completed;
        if let Some(done) = self.on_complete.take() {
            done(&self.state);
        }
    }
}

impl<S: std::fmt::Debug> std::fmt::Debug for Sequence<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sequence")
            .field("label", &self.label)
            .field("state", &self.state)
            .field("cadence", &self.cadence)
            .field("phase", &self.phase)
            .field("ticks", &self.ticks)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/sequencer.rs"]
mod tests;
