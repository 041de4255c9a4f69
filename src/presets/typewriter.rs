use std::rc::Rc;

use crate::foundation::core::Millis;
use crate::foundation::error::{FolioError, FolioResult};
use crate::sequence::cadence::Cadence;
use crate::sequence::sequencer::Sequence;

/// Timing for the rotating typewriter headline.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub texts: Vec<String>,
    /// Delay between typed characters.
    pub type_speed: Millis,
    /// Delay between deleted characters.
    pub delete_speed: Millis,
    /// Hold on a fully typed line before deleting starts.
    pub pause: Millis,
    /// Delay after a line is cleared before the next one starts typing.
    pub restart_delay: Millis,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            texts: vec![
                "Software Engineer".to_string(),
                "Rust Developer".to_string(),
                "Open Source Contributor".to_string(),
            ],
            type_speed: Millis(100),
            delete_speed: Millis(50),
            pause: Millis(1500),
            restart_delay: Millis(500),
        }
    }
}

/// The last thing the typewriter did, which decides the delay before the next stroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stroke {
    Start,
    Typed,
    /// The line is complete; next comes the pause.
    Finished,
    Deleted,
    /// The line is empty again and `index` already points at the next text.
    Cleared,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct TypewriterState {
    pub index: usize,
    /// Characters of `texts[index]` currently shown.
    pub cursor: usize,
    pub deleting: bool,
    pub display: String,
    pub last: Stroke,
}

/// Typing/deleting loop over a non-empty list of texts, forever, round-robin.
#[derive(Clone, Debug)]
pub struct Typewriter {
    texts: Rc<[Vec<char>]>,
    config: TypewriterConfig,
}

impl Typewriter {
    pub fn new(config: TypewriterConfig) -> FolioResult<Self> {
        if config.texts.is_empty() {
            return Err(FolioError::validation("typewriter needs at least one text"));
        }
        if config.type_speed.is_zero() || config.delete_speed.is_zero() {
            return Err(FolioError::validation(
                "typewriter type_speed and delete_speed must be > 0",
            ));
        }
        let texts: Rc<[Vec<char>]> = config.texts.iter().map(|t| t.chars().collect()).collect();
        Ok(Self { texts, config })
    }

    pub fn config(&self) -> &TypewriterConfig {
        &self.config
    }

    pub fn initial_state(&self) -> TypewriterState {
        TypewriterState {
            index: 0,
            cursor: 0,
            deleting: false,
            display: String::new(),
            last: Stroke::Start,
        }
    }

    /// One keystroke forward.
    pub fn step(&self, state: &TypewriterState) -> TypewriterState {
        let index = state.index % self.texts.len();
        let text = &self.texts[index];
        let mut next = state.clone();
        next.index = index;

        if state.deleting {
            next.cursor = state.cursor.min(text.len()).saturating_sub(1);
            if next.cursor == 0 {
                next.deleting = false;
                next.index = (index + 1) % self.texts.len();
                next.last = Stroke::Cleared;
            } else {
                next.last = Stroke::Deleted;
            }
        } else {
            next.cursor = (state.cursor + 1).min(text.len());
            if next.cursor == text.len() {
                next.deleting = true;
                next.last = Stroke::Finished;
            } else {
                next.last = Stroke::Typed;
            }
        }

        next.display = text[..next.cursor].iter().collect();
        next
    }

    /// Delay before the stroke that follows `state`.
    pub fn delay_after(&self, state: &TypewriterState) -> Millis {
        match state.last {
            Stroke::Start | Stroke::Typed => self.config.type_speed,
            Stroke::Finished => self.config.pause,
            Stroke::Deleted => self.config.delete_speed,
            Stroke::Cleared => self.config.restart_delay,
        }
    }

    /// An infinite sequence; `render` receives each displayed state.
    pub fn into_sequence(
        self,
        render: impl FnMut(&TypewriterState) + 'static,
    ) -> Sequence<TypewriterState> {
        let initial = self.initial_state();
        let stepper = self.clone();
        Sequence::new(
            initial,
            move |s: &TypewriterState| stepper.step(s),
            Cadence::dynamic(move |s: &TypewriterState| self.delay_after(s)),
        )
        .named("typewriter")
        .on_tick(render)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/presets/typewriter.rs"]
mod tests;
