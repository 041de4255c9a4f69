use std::rc::Rc;

use crate::foundation::core::Millis;
use crate::foundation::error::{FolioError, FolioResult};
use crate::sequence::cadence::Cadence;
use crate::sequence::sequencer::Sequence;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Delay between revealed characters.
    pub char_delay: Millis,
    /// Delay after a line break before the next line starts.
    pub line_pause: Millis,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            char_delay: Millis(30),
            line_pause: Millis(400),
        }
    }
}

/// What the most recent tick revealed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalEvent {
    Char(char),
    LineBreak,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct TerminalState {
    /// Index of the line being revealed; equals the line count once everything is shown.
    pub line: usize,
    /// Characters of the current line already revealed.
    pub col: usize,
    pub transcript: String,
    pub last: Option<TerminalEvent>,
}

/// Handed to the caller once the whole script has been revealed.
pub struct Dismiss {
    transcript: String,
    hook: Option<Box<dyn FnOnce()>>,
}

impl Dismiss {
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    /// Close the terminal. Runs the hook registered with [`TerminalScript::on_dismiss`].
    pub fn dismiss(mut self) -> String {
        if let Some(hook) = self.hook.take() {
            hook();
        }
        self.transcript
    }
}

impl std::fmt::Debug for Dismiss {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dismiss")
            .field("transcript", &self.transcript)
            .finish_non_exhaustive()
    }
}

/// Ordered lines revealed one character per tick, with a longer pause after each line.
pub struct TerminalScript {
    lines: Rc<[Vec<char>]>,
    config: TerminalConfig,
    on_dismiss: Option<Box<dyn FnOnce()>>,
}

impl TerminalScript {
    pub fn new<I, L>(lines: I, config: TerminalConfig) -> FolioResult<Self>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<str>,
    {
        let lines: Rc<[Vec<char>]> = lines
            .into_iter()
            .map(|l| l.as_ref().chars().collect())
            .collect();
        if lines.is_empty() {
            return Err(FolioError::validation("terminal script needs at least one line"));
        }
        if lines.iter().flatten().any(|c| *c == '\n') {
            return Err(FolioError::validation(
                "terminal lines must not contain line breaks",
            ));
        }
        if config.char_delay.is_zero() {
            return Err(FolioError::validation("terminal char_delay must be > 0"));
        }
        Ok(Self {
            lines,
            config,
            on_dismiss: None,
        })
    }

    /// Run `hook` when the caller triggers the [`Dismiss`] action.
    pub fn on_dismiss(mut self, hook: impl FnOnce() + 'static) -> Self {
        self.on_dismiss = Some(Box::new(hook));
        self
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Number of character reveals in a full run.
    pub fn char_count(&self) -> usize {
        self.lines.iter().map(Vec::len).sum()
    }

    pub fn step(lines: &[Vec<char>], state: &TerminalState) -> TerminalState {
        let mut next = state.clone();
        let Some(line) = lines.get(state.line) else {
            next.last = None;
            return next;
        };
        match line.get(state.col) {
            Some(&c) => {
                next.transcript.push(c);
                next.col += 1;
                next.last = Some(TerminalEvent::Char(c));
            }
            None => {
                next.transcript.push('\n');
                next.line += 1;
                next.col = 0;
                next.last = Some(TerminalEvent::LineBreak);
            }
        }
        next
    }

    /// Terminal sequence: `render` sees every tick, `on_ready` receives the [`Dismiss`] action
    /// after the final line break.
    pub fn into_sequence(
        self,
        render: impl FnMut(&TerminalState) + 'static,
        on_ready: impl FnOnce(Dismiss) + 'static,
    ) -> Sequence<TerminalState> {
        let TerminalScript {
            lines,
            config,
            on_dismiss,
        } = self;
        let total = lines.len();

        Sequence::new(
            TerminalState::default(),
            move |s: &TerminalState| Self::step(&lines, s),
            Cadence::dynamic(move |s: &TerminalState| match s.last {
                Some(TerminalEvent::LineBreak) => config.line_pause,
                _ => config.char_delay,
            }),
        )
        .named("terminal")
        .until(move |s| s.line >= total)
        .on_tick(render)
        .on_complete(move |s| {
            on_ready(Dismiss {
                transcript: s.transcript.clone(),
                hook: on_dismiss,
            })
        })
    }
}

impl std::fmt::Debug for TerminalScript {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalScript")
            .field("lines", &self.lines.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/presets/terminal.rs"]
mod tests;
