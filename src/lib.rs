//! folio drives the timed animations of a portfolio site: typewriter headlines, a loading bar,
//! eased counters, staged terminal output and a matrix-rain background.
//!
//! Every animation is a [`Sequence`]: a state, a step function, a cadence and an optional
//! termination predicate. Sequences run on a [`Timeline`], a single-threaded event loop with a
//! virtual millisecond clock; [`drive`] plays a timeline against the wall clock.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: timelines only move when advanced, and every randomized
//!   preset accepts a seed.
//! - **No rendering**: presets hand state to caller-supplied callbacks and never touch a screen.
//!
//! For a walkthrough of the concepts, see [`crate::guide`].
#![forbid(unsafe_code)]

mod animation;
mod config;
mod foundation;
mod presets;
mod sequence;
mod ui;

/// High-level, standalone documentation for folio's concepts.
pub mod guide;

pub use animation::ease::{Ease, ease_out_quad, normalized_progress};
pub use config::site::{CounterSpec, SiteConfig};
pub use foundation::core::Millis;
pub use foundation::error::{FolioError, FolioResult};
pub use presets::contact::ContactForm;
pub use presets::counter::{Counter, CounterBoard, CounterConfig, CounterState, parse_target};
pub use presets::loading::{LoadingBar, LoadingConfig, LoadingState};
pub use presets::rain::{Glyph, MatrixRain, RainConfig, RainState};
pub use presets::terminal::{
    Dismiss, TerminalConfig, TerminalEvent, TerminalScript, TerminalState,
};
pub use presets::typewriter::{Stroke, Typewriter, TypewriterConfig, TypewriterState};
pub use sequence::cadence::Cadence;
pub use sequence::realtime::drive;
pub use sequence::sequencer::{Phase, Sequence, TickOutcome};
pub use sequence::timeline::{SequenceHandle, Timeline};
pub use ui::events::{EventBus, Subscription, UiEvent};
pub use ui::page::PageAnimations;
pub use ui::theme::{
    DARK_THEME_CLASS, Theme, UiState, current_theme, init_ui_state, set_theme, toggle_theme,
    with_ui_state,
};
pub use ui::viewport::{DEFAULT_THRESHOLD, VisibilityTrigger};
