use crate::animation::ease::Ease;
use crate::foundation::core::Millis;
use crate::foundation::error::{FolioError, FolioResult};
use crate::sequence::sequencer::Sequence;
use crate::sequence::timeline::{SequenceHandle, Timeline};
use crate::ui::viewport::{DEFAULT_THRESHOLD, VisibilityTrigger};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Total time from 0 to the target.
    pub duration: Millis,
    /// Tick interval (one display refresh).
    pub frame: Millis,
    pub ease: Ease,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration: Millis(2000),
            frame: Millis(16),
            ease: Ease::OutQuad,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CounterState {
    pub elapsed: Millis,
    pub value: u64,
}

/// Parse a counter target such as `"250"`, `" 1,200 "` or `"1_000"`.
///
/// Anything else is a configuration error.
pub fn parse_target(text: &str) -> FolioResult<u64> {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| !matches!(c, ',' | '_'))
        .collect();
    if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_ascii_digit()) {
        return Err(FolioError::config(format!(
            "counter target '{text}' is not a whole number"
        )));
    }
    cleaned
        .parse::<u64>()
        .map_err(|e| FolioError::config(format!("counter target '{text}': {e}")))
}

/// An eased count from 0 up to `target`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Counter {
    target: u64,
    config: CounterConfig,
}

impl Counter {
    pub fn new(target: u64, config: CounterConfig) -> FolioResult<Self> {
        if config.duration.is_zero() {
            return Err(FolioError::validation("counter duration must be > 0"));
        }
        if config.frame.is_zero() {
            return Err(FolioError::validation("counter frame must be > 0"));
        }
        Ok(Self { target, config })
    }

    /// Build from the element's text content.
    pub fn from_text(text: &str, config: CounterConfig) -> FolioResult<Self> {
        Self::new(parse_target(text)?, config)
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn config(&self) -> &CounterConfig {
        &self.config
    }

    /// `floor(ease(elapsed / duration) * target)`; progress is clamped, so anything at or past
    /// the duration is exactly `target`.
    pub fn value_at(&self, elapsed: Millis) -> u64 {
        let eased = self.config.ease.at(elapsed, self.config.duration);
        ((eased * self.target as f64).floor() as u64).min(self.target)
    }

    pub fn step(&self, state: &CounterState) -> CounterState {
        let elapsed = state
            .elapsed
            .saturating_add(self.config.frame)
            .min(self.config.duration);
        CounterState {
            elapsed,
            value: self.value_at(elapsed),
        }
    }

    pub fn into_sequence(
        self,
        render: impl FnMut(&CounterState) + 'static,
    ) -> Sequence<CounterState> {
        let duration = self.config.duration;
        Sequence::new(
            CounterState {
                elapsed: Millis::ZERO,
                value: 0,
            },
            move |s: &CounterState| self.step(s),
            self.config.frame,
        )
        .named("counter")
        .until(move |s| s.elapsed >= duration)
        .on_tick(render)
    }
}

/// Counters waiting for their host element to scroll into view.
///
/// A counter starts on the first qualifying visibility report and is never started again for
/// the same element.
#[derive(Debug)]
pub struct CounterBoard {
    pending: VisibilityTrigger<Counter>,
}

impl Default for CounterBoard {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl CounterBoard {
    pub fn new(threshold: f64) -> Self {
        Self {
            pending: VisibilityTrigger::new(threshold),
        }
    }

    /// Register the counter hosted by `element`, whose text holds the target.
    pub fn register(
        &mut self,
        element: impl Into<String>,
        text: &str,
        config: CounterConfig,
    ) -> FolioResult<()> {
        let counter = Counter::from_text(text, config)?;
        self.pending.observe(element, counter);
        Ok(())
    }

    pub fn is_waiting(&self, element: &str) -> bool {
        self.pending.is_observing(element)
    }

    /// Feed a visibility report. Starts the element's counter on `timeline` the first time it
    /// qualifies and returns the handle; returns `None` otherwise.
    pub fn on_visible(
        &mut self,
        element: &str,
        visible_ratio: f64,
        timeline: &mut Timeline,
        render: impl FnMut(&CounterState) + 'static,
    ) -> Option<SequenceHandle> {
        let counter = self.pending.report(element, visible_ratio)?;
        Some(timeline.start(counter.into_sequence(render)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/presets/counter.rs"]
mod tests;
