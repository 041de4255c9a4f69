use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

use crate::foundation::core::Millis;
use crate::foundation::error::{FolioError, FolioResult};
use crate::sequence::sequencer::{Sequence, TickOutcome};

/// Opaque handle to a sequence running on a [`Timeline`]. Never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SequenceHandle(u64);

impl SequenceHandle {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Object-safe view of a [`Sequence`] so sequences over different state types share one loop.
trait Tickable {
    fn tick(&mut self) -> TickOutcome;
    fn cancel(&mut self) -> bool;
    fn label(&self) -> &'static str;
}

impl<S> Tickable for Sequence<S> {
    fn tick(&mut self) -> TickOutcome {
        Sequence::tick(self)
    }

    fn cancel(&mut self) -> bool {
        Sequence::cancel(self)
    }

    fn label(&self) -> &'static str {
        Sequence::label(self)
    }
}

/// Single-threaded, cooperative event loop on a virtual millisecond clock.
///
/// Ticks only run inside [`Timeline::advance`] / [`Timeline::advance_to`], on the caller's
/// thread. Determinism rule: ticks due at the same instant run in the order they were scheduled.
pub struct Timeline {
    now: Millis,
    next_id: u64,
    next_order: u64,
    active: BTreeMap<u64, Box<dyn Tickable>>,
    // (due, scheduling order, sequence id)
    queue: BinaryHeap<Reverse<(Millis, u64, u64)>>,
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Timeline {
    pub fn new() -> Self {
        Self {
            now: Millis::ZERO,
            next_id: 0,
            next_order: 0,
            active: BTreeMap::new(),
            queue: BinaryHeap::new(),
        }
    }

    pub fn now(&self) -> Millis {
        self.now
    }

    /// Number of sequences that are still running or finishing.
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }

    pub fn is_active(&self, handle: SequenceHandle) -> bool {
        self.active.contains_key(&handle.0)
    }

    /// Schedule `seq`; its first tick fires one cadence interval from now.
    pub fn start<S: 'static>(&mut self, mut seq: Sequence<S>) -> SequenceHandle {
        let id = self.next_id;
        self.next_id += 1;

        let delay = seq.first_delay();
        tracing::debug!(id, label = seq.label(), %delay, at = %self.now, "sequence started");
        self.active.insert(id, Box::new(seq));
        self.schedule(id, delay);
        SequenceHandle(id)
    }

    /// Run `f` once, `delay` from now.
    pub fn after(&mut self, delay: Millis, f: impl FnOnce() + 'static) -> SequenceHandle {
        let once = Sequence::new((), |_| (), delay)
            .named("after")
            .until(|_| true)
            .on_complete(move |_| f());
        self.start(once)
    }

    /// Stop future ticks of `handle`. Returns `false` when it already completed or was
    /// cancelled, in which case nothing happens.
    pub fn cancel(&mut self, handle: SequenceHandle) -> bool {
        let Some(mut seq) = self.active.remove(&handle.0) else {
            return false;
        };
        let stopped = seq.cancel();
        tracing::debug!(id = handle.0, label = seq.label(), at = %self.now, "sequence cancelled");
        stopped
    }

    /// Cancel every live sequence (page teardown).
    pub fn cancel_all(&mut self) -> usize {
        let ids: Vec<u64> = self.active.keys().copied().collect();
        ids.into_iter()
            .filter(|id| self.cancel(SequenceHandle(*id)))
            .count()
    }

    /// Instant of the next pending tick, if any.
    pub fn next_due(&mut self) -> Option<Millis> {
        loop {
            let Reverse((due, _, id)) = *self.queue.peek()?;
            if self.active.contains_key(&id) {
                return Some(due);
            }
            self.queue.pop();
        }
    }

    /// Move the clock forward by `by`, running every tick that falls due. Returns ticks run.
    pub fn advance(&mut self, by: Millis) -> usize {
        self.advance_to(self.now.saturating_add(by))
    }

    /// Move the clock to `target` (never backwards), running every tick due at or before it.
    #[tracing::instrument(level = "trace", skip(self), fields(from = %self.now))]
    pub fn advance_to(&mut self, target: Millis) -> usize {
        let mut ran = 0;
        while let Some(due) = self.next_due() {
            if due > target {
                break;
            }
            let Some(Reverse((due, _, id))) = self.queue.pop() else {
                break;
            };
            self.now = self.now.max(due);
            ran += 1;
            self.run_tick(id);
        }
        self.now = self.now.max(target);
        ran
    }

    /// Run until no sequence is left, failing if that takes more than `max_ticks` ticks.
    ///
    /// Infinite sequences (no termination predicate) never let this finish; cancel them first.
    pub fn run_until_idle(&mut self, max_ticks: usize) -> FolioResult<usize> {
        let mut ran = 0;
        while let Some(due) = self.next_due() {
            if ran >= max_ticks {
                return Err(FolioError::sequence(format!(
                    "timeline still has {} live sequence(s) after {max_ticks} ticks",
                    self.active.len()
                )));
            }
            ran += self.advance_to(due);
        }
        Ok(ran)
    }

    fn run_tick(&mut self, id: u64) {
        let Some(seq) = self.active.get_mut(&id) else {
            return;
        };
        match seq.tick() {
            TickOutcome::Continue(delay) | TickOutcome::Finishing(delay) => self.schedule(id, delay),
            TickOutcome::Completed | TickOutcome::Idle => {
                if let Some(seq) = self.active.remove(&id) {
                    tracing::debug!(id, label = seq.label(), at = %self.now, "sequence completed");
                }
            }
        }
    }

    // Zero delays are bumped to 1ms so the clock always moves.
    fn schedule(&mut self, id: u64, delay: Millis) {
        let delay = delay.max(Millis(1));
        let order = self.next_order;
        self.next_order += 1;
        self.queue
            .push(Reverse((self.now.saturating_add(delay), order, id)));
    }
}

impl std::fmt::Debug for Timeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Timeline")
            .field("now", &self.now)
            .field("active", &self.active.len())
            .field("pending", &self.queue.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/timeline.rs"]
mod tests;
