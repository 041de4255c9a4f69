//! # folio guide
//!
//! A standalone walkthrough of how the page animations are modelled. For copy/paste commands see
//! the `folio` binary (`folio --help`).
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`Sequence`](crate::Sequence): one animation. A state, a step function, a
//!   [`Cadence`](crate::Cadence) and an optional termination predicate.
//! - [`Timeline`](crate::Timeline): the event loop. It owns running sequences, keeps a virtual
//!   millisecond clock and runs ticks only when the caller advances it.
//! - [`SequenceHandle`](crate::SequenceHandle): what the caller keeps in order to cancel.
//! - [`drive`](crate::drive): plays a timeline against the wall clock with tokio timers.
//!
//! A tick is always the same three moves:
//!
//! 1. `next = step(&state)`
//! 2. the `on_tick` observer (the renderer) sees `next`
//! 3. if the predicate holds, completion runs (optionally after `complete_after`); otherwise the
//!    cadence picks the delay before the next tick
//!
//! Completion runs at most once. Cancelling a completed sequence does nothing.
//!
//! ---
//!
//! ## Presets
//!
//! | Preset | State | Ends when |
//! |---|---|---|
//! | [`Typewriter`](crate::Typewriter) | text index, cursor, deleting flag | never |
//! | [`LoadingBar`](crate::LoadingBar) | percent in `[0, 100]` | percent reaches 100 |
//! | [`Counter`](crate::Counter) | elapsed time, displayed value | elapsed reaches duration |
//! | [`TerminalScript`](crate::TerminalScript) | line, column, transcript | last line break |
//! | [`MatrixRain`](crate::MatrixRain) | one cursor per column | never |
//!
//! Infinite presets stop only through [`Timeline::cancel`](crate::Timeline::cancel).
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use folio::{Millis, Timeline, Typewriter, TypewriterConfig};
//!
//! let shown = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&shown);
//! let tw = Typewriter::new(TypewriterConfig {
//!     texts: vec!["hi".into()],
//!     ..TypewriterConfig::default()
//! })
//! .unwrap();
//!
//! let mut timeline = Timeline::new();
//! let handle = timeline.start(tw.into_sequence(move |s| sink.borrow_mut().push(s.display.clone())));
//! timeline.advance(Millis(200));
//! assert_eq!(*shown.borrow(), vec!["h", "hi"]);
//! assert!(timeline.cancel(handle));
//! ```
//!
//! ---
//!
//! ## Visibility-triggered counters
//!
//! Counters do not start on page load. Register them on a [`CounterBoard`](crate::CounterBoard)
//! and feed it visibility reports; the first report at or above the threshold starts the
//! counter and forgets the element, so scrolling back never restarts it.
//!
//! ## UI state and events
//!
//! The light/dark theme lives in one process-wide [`UiState`](crate::UiState), created by
//! [`init_ui_state`](crate::init_ui_state) and changed only through
//! [`toggle_theme`](crate::toggle_theme) / [`set_theme`](crate::set_theme). Components talk
//! through an [`EventBus`](crate::EventBus) with explicit
//! [`unsubscribe`](crate::EventBus::unsubscribe).
//!
//! Handlers cannot borrow the timeline, so the page loop feeds bus events to
//! [`PageAnimations::handle`](crate::PageAnimations::handle): a filter change cancels the
//! animations tracked under that filter group, and teardown cancels everything.
//!
//! ## Errors
//!
//! Presets validate at construction and return [`FolioError`](crate::FolioError). A counter
//! whose text is not a number is a `Config` error rather than a silent count to zero.
