use std::cell::RefCell;

use super::*;
use crate::sequence::timeline::Timeline;

fn config(texts: &[&str]) -> TypewriterConfig {
    TypewriterConfig {
        texts: texts.iter().map(|t| t.to_string()).collect(),
        type_speed: Millis(100),
        delete_speed: Millis(100),
        pause: Millis(1500),
        restart_delay: Millis(100),
    }
}

#[test]
fn empty_text_list_is_rejected_at_construction() {
    let err = Typewriter::new(config(&[])).unwrap_err();
    assert!(err.to_string().contains("at least one text"));
}

#[test]
fn types_pauses_deletes_and_wraps_round_robin() {
    let tw = Typewriter::new(config(&["A", "BC"])).unwrap();
    let mut state = tw.initial_state();
    assert_eq!(state.display, "");

    let mut shown = Vec::new();
    let mut delays = Vec::new();
    for _ in 0..8 {
        state = tw.step(&state);
        shown.push(state.display.clone());
        delays.push(tw.delay_after(&state));
    }

    assert_eq!(shown, vec!["A", "", "B", "BC", "B", "", "A", ""]);
    assert_eq!(
        delays,
        vec![
            Millis(1500),
            Millis(100),
            Millis(100),
            Millis(1500),
            Millis(100),
            Millis(100),
            Millis(1500),
            Millis(100),
        ]
    );
    assert!(state.index < 2);
}

#[test]
fn deleting_flag_flips_at_both_boundaries() {
    let tw = Typewriter::new(config(&["ab"])).unwrap();
    let s1 = tw.step(&tw.initial_state());
    assert!(!s1.deleting);
    let s2 = tw.step(&s1);
    assert!(s2.deleting);
    assert_eq!(s2.last, Stroke::Finished);
    let s3 = tw.step(&s2);
    assert_eq!((s3.display.as_str(), s3.last), ("a", Stroke::Deleted));
    let s4 = tw.step(&s3);
    assert!(!s4.deleting);
    assert_eq!(s4.index, 0);
    assert_eq!(s4.last, Stroke::Cleared);
}

#[test]
fn multibyte_text_is_typed_per_character() {
    let tw = Typewriter::new(config(&["héé"])).unwrap();
    let s1 = tw.step(&tw.initial_state());
    let s2 = tw.step(&s1);
    assert_eq!(s2.display, "hé");
}

#[test]
fn empty_entries_do_not_stall_the_rotation() {
    let tw = Typewriter::new(config(&["", "x"])).unwrap();
    let mut state = tw.initial_state();
    for _ in 0..3 {
        state = tw.step(&state);
    }
    assert_eq!(state.display, "x");
}

#[test]
fn sequence_honours_pause_on_the_timeline() {
    let shown = std::rc::Rc::new(RefCell::new(Vec::new()));
    let sink = std::rc::Rc::clone(&shown);
    let tw = Typewriter::new(config(&["A", "BC"])).unwrap();
    let mut tl = Timeline::new();
    let h = tl.start(tw.into_sequence(move |s| sink.borrow_mut().push(s.display.clone())));

    tl.advance(Millis(100));
    assert_eq!(*shown.borrow(), vec!["A"]);
    tl.advance(Millis(1499));
    assert_eq!(shown.borrow().len(), 1);
    tl.advance(Millis(1));
    assert_eq!(*shown.borrow(), vec!["A", ""]);

    tl.advance(Millis(300));
    assert_eq!(*shown.borrow(), vec!["A", "", "B", "BC"]);
    assert!(tl.cancel(h));
}
