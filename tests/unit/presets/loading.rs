use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::sequence::timeline::Timeline;

fn seeded(seed: u64) -> LoadingConfig {
    LoadingConfig {
        seed: Some(seed),
        ..LoadingConfig::default()
    }
}

#[test]
fn rejects_non_positive_or_inverted_ranges() {
    for (min, max) in [(0.0, 5.0), (-1.0, 5.0), (6.0, 5.0), (f64::NAN, 1.0)] {
        let cfg = LoadingConfig {
            min_increment: min,
            max_increment: max,
            ..LoadingConfig::default()
        };
        assert!(LoadingBar::new(cfg).is_err(), "{min}..{max} accepted");
    }
}

#[test]
fn step_clamps_at_full() {
    let bar = LoadingBar::new(LoadingConfig::default()).unwrap();
    let s = bar.step(
        LoadingState {
            progress: 98.5,
            steps: 3,
        },
        4.0,
    );
    assert_eq!(s.progress, FULL);
    assert_eq!(s.steps, 4);
    assert!(s.is_full());
    assert_eq!(s.percent(), 100);
}

#[test]
fn progress_is_monotonic_bounded_and_terminates_for_many_seeds() {
    for seed in 0..64 {
        let bar = LoadingBar::new(seeded(seed)).unwrap();
        let limit = bar.max_ticks();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut seq = bar.into_sequence(move |s| sink.borrow_mut().push(s.progress), |_| {});

        let ticks = seq.run_steps(limit + 1);
        let seen = seen.borrow();
        assert!(ticks <= limit, "seed {seed} took {ticks} ticks");
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
        assert!(seen.iter().all(|p| *p <= FULL));
        assert_eq!(seen.last().copied(), Some(FULL));
    }
}

#[test]
fn inexact_increments_still_finish_within_the_bound() {
    let cfg = LoadingConfig {
        min_increment: 0.1,
        max_increment: 0.1,
        seed: Some(1),
        ..LoadingConfig::default()
    };
    let bar = LoadingBar::new(cfg).unwrap();
    let limit = bar.max_ticks();
    assert_eq!(limit, 1000);

    let last = Rc::new(RefCell::new(LoadingState::default()));
    let sink = Rc::clone(&last);
    let mut seq = bar.into_sequence(move |s| *sink.borrow_mut() = *s, |_| {});

    assert_eq!(seq.run_steps(limit + 10), limit);
    assert_eq!(last.borrow().progress, FULL);
    assert_eq!(last.borrow().steps, limit);
}

#[test]
fn same_seed_gives_same_run() {
    let run = |seed| {
        let out = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&out);
        let mut seq = LoadingBar::new(seeded(seed))
            .unwrap()
            .into_sequence(move |s| sink.borrow_mut().push(s.progress), |_| {});
        seq.run_steps(1000);
        let v = out.borrow().clone();
        v
    };
    assert_eq!(run(7), run(7));
}

#[test]
fn overlay_hides_after_the_finish_delay() {
    let hidden_at = Rc::new(RefCell::new(None));
    let cfg = LoadingConfig {
        min_increment: 50.0,
        max_increment: 50.0,
        tick: Millis(10),
        finish_delay: Millis(5),
        seed: Some(1),
    };
    let mut tl = Timeline::new();
    let sink = Rc::clone(&hidden_at);
    let seq = LoadingBar::new(cfg)
        .unwrap()
        .into_sequence(|_| {}, move |s| *sink.borrow_mut() = Some(s.progress));
    tl.start(seq);

    tl.advance(Millis(20));
    assert_eq!(*hidden_at.borrow(), None);
    tl.advance(Millis(4));
    assert_eq!(*hidden_at.borrow(), None);
    tl.advance(Millis(1));
    assert_eq!(*hidden_at.borrow(), Some(FULL));
    assert!(tl.is_idle());
}
