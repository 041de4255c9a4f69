use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::foundation::core::Millis;
use crate::foundation::error::{FolioError, FolioResult};
use crate::sequence::sequencer::Sequence;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RainConfig {
    /// Field size in pixels.
    pub width: u32,
    pub height: u32,
    /// Glyph cell size in pixels; one column per cell.
    pub font_size: u32,
    pub frame: Millis,
    /// Chance per tick that a column past the bottom restarts at the top.
    pub reset_chance: f64,
    pub glyphs: String,
    pub seed: Option<u64>,
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            font_size: 16,
            frame: Millis(35),
            reset_chance: 0.025,
            glyphs: "アイウエオカキクケコサシスセソ0123456789ABCDEF".to_string(),
            seed: None,
        }
    }
}

/// One glyph drawn this tick at a column's head.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Glyph {
    pub column: usize,
    pub row: u32,
    pub ch: char,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct RainState {
    /// Head row of every column.
    pub drops: Vec<u32>,
    /// Glyphs drawn by the latest tick (one per column).
    pub heads: Vec<Glyph>,
    pub frame: u64,
}

/// Matrix-style rain: independent column cursors advancing one row per tick, forever.
#[derive(Clone, Debug)]
pub struct MatrixRain {
    config: RainConfig,
    glyphs: Vec<char>,
    columns: usize,
    rows: u32,
}

impl MatrixRain {
    pub fn new(config: RainConfig) -> FolioResult<Self> {
        if config.font_size == 0 {
            return Err(FolioError::validation("rain font_size must be > 0"));
        }
        let columns = (config.width / config.font_size) as usize;
        let rows = config.height / config.font_size;
        if columns == 0 || rows == 0 {
            return Err(FolioError::validation(format!(
                "rain field {}x{} is smaller than one {}px cell",
                config.width, config.height, config.font_size
            )));
        }
        if !(0.0..=1.0).contains(&config.reset_chance) {
            return Err(FolioError::validation(
                "rain reset_chance must be within [0, 1]",
            ));
        }
        if config.frame.is_zero() {
            return Err(FolioError::validation("rain frame must be > 0"));
        }
        let glyphs: Vec<char> = config.glyphs.chars().collect();
        if glyphs.is_empty() {
            return Err(FolioError::validation("rain needs at least one glyph"));
        }
        Ok(Self {
            config,
            glyphs,
            columns,
            rows,
        })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn initial_state(&self) -> RainState {
        RainState {
            drops: vec![1; self.columns],
            heads: Vec::with_capacity(self.columns),
            frame: 0,
        }
    }

    /// Draw each column's head, then move it down a row. A column below the field restarts at
    /// the top with probability `reset_chance`.
    pub fn step(&self, state: &RainState, rng: &mut impl Rng) -> RainState {
        let mut drops = state.drops.clone();
        let mut heads = Vec::with_capacity(drops.len());
        for (column, drop) in drops.iter_mut().enumerate() {
            let ch = self.glyphs.choose(rng).copied().unwrap_or(' ');
            heads.push(Glyph {
                column,
                row: *drop,
                ch,
            });
            if *drop > self.rows && rng.gen_bool(self.config.reset_chance) {
                *drop = 0;
            }
            *drop = drop.saturating_add(1);
        }
        RainState {
            drops,
            heads,
            frame: state.frame + 1,
        }
    }

    /// An infinite sequence; cancel its handle to tear the field down.
    pub fn into_sequence(self, render: impl FnMut(&RainState) + 'static) -> Sequence<RainState> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let initial = self.initial_state();
        let frame = self.config.frame;
        Sequence::new(initial, move |s: &RainState| self.step(s, &mut rng), frame)
            .named("rain")
            .on_tick(render)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/presets/rain.rs"]
mod tests;
