use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::foundation::core::Millis;
use crate::foundation::error::{FolioError, FolioResult};
use crate::sequence::sequencer::Sequence;

pub const FULL: f64 = 100.0;

/// Loading-screen progress bar settings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoadingConfig {
    pub tick: Millis,
    /// Smallest per-tick increment, in percent. Must be > 0.
    pub min_increment: f64,
    pub max_increment: f64,
    /// Delay between reaching 100% and hiding the overlay.
    pub finish_delay: Millis,
    /// Fixed seed for reproducible increments; random when absent.
    pub seed: Option<u64>,
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            tick: Millis(10),
            min_increment: 1.0,
            max_increment: 5.0,
            finish_delay: Millis(5),
            seed: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct LoadingState {
    /// Percent complete, in `[0, 100]`.
    pub progress: f64,
    /// Increments applied so far.
    pub steps: u64,
}

impl LoadingState {
    pub fn is_full(self) -> bool {
        self.progress >= FULL
    }

    /// Progress-bar width as a whole percentage, for display.
    pub fn percent(self) -> u8 {
        self.progress.clamp(0.0, FULL).floor() as u8
    }
}

#[derive(Clone, Debug)]
pub struct LoadingBar {
    config: LoadingConfig,
}

impl LoadingBar {
    pub fn new(config: LoadingConfig) -> FolioResult<Self> {
        let LoadingConfig {
            min_increment,
            max_increment,
            ..
        } = config;
        if !(min_increment.is_finite() && max_increment.is_finite()) {
            return Err(FolioError::validation("loading increments must be finite"));
        }
        if min_increment <= 0.0 {
            return Err(FolioError::validation("loading min_increment must be > 0"));
        }
        if min_increment > max_increment {
            return Err(FolioError::validation(format!(
                "loading min_increment ({min_increment}) must be <= max_increment ({max_increment})"
            )));
        }
        if config.tick.is_zero() {
            return Err(FolioError::validation("loading tick must be > 0"));
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &LoadingConfig {
        &self.config
    }

    /// Upper bound on ticks to reach 100%: every increment is at least `min_increment`.
    pub fn max_ticks(&self) -> u64 {
        (FULL / self.config.min_increment).ceil() as u64
    }

    /// Advance by `increment`, clamped at 100%.
    ///
    /// The [`max_ticks`](Self::max_ticks)-th step always lands on 100%: by then the exact sum of
    /// increments has reached it, even when float accumulation (`0.1` a thousand times) falls
    /// just short.
    pub fn step(&self, state: LoadingState, increment: f64) -> LoadingState {
        let steps = state.steps + 1;
        let progress = if steps >= self.max_ticks() {
            FULL
        } else {
            (state.progress + increment.max(0.0)).min(FULL)
        };
        LoadingState { progress, steps }
    }

    fn rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Progress sequence: `on_progress` per tick, `on_hidden` once the overlay goes away.
    pub fn into_sequence(
        self,
        on_progress: impl FnMut(&LoadingState) + 'static,
        on_hidden: impl FnOnce(&LoadingState) + 'static,
    ) -> Sequence<LoadingState> {
        let mut rng = self.rng();
        let LoadingConfig {
            tick,
            min_increment,
            max_increment,
            finish_delay,
            ..
        } = self.config;
        Sequence::new(
            LoadingState::default(),
            move |s: &LoadingState| self.step(*s, rng.gen_range(min_increment..=max_increment)),
            tick,
        )
        .named("loading")
        .until(|s| s.is_full())
        .on_tick(on_progress)
        .complete_after(finish_delay)
        .on_complete(on_hidden)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/presets/loading.rs"]
mod tests;
