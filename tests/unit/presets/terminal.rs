use std::cell::RefCell;

use super::*;
use crate::sequence::timeline::Timeline;

#[test]
fn rejects_empty_scripts() {
    let err = TerminalScript::new(Vec::<String>::new(), TerminalConfig::default()).unwrap_err();
    assert!(err.to_string().contains("at least one line"));
    assert!(TerminalScript::new(["a\nb"], TerminalConfig::default()).is_err());
}

#[test]
fn reveal_ticks_and_line_breaks_match_the_script() {
    let lines = ["> sending", "", "ok"];
    let script = TerminalScript::new(lines, TerminalConfig::default()).unwrap();
    let expected_chars = script.char_count();
    assert_eq!(expected_chars, 11);

    let events = Rc::new(RefCell::new(Vec::new()));
    let ready = Rc::new(RefCell::new(None));
    let (ev, rd) = (Rc::clone(&events), Rc::clone(&ready));
    let mut seq = script.into_sequence(
        move |s| ev.borrow_mut().extend(s.last),
        move |d| *rd.borrow_mut() = Some(d),
    );

    let ticks = seq.run_steps(1000);
    let events = events.borrow();
    let chars = events
        .iter()
        .filter(|e| matches!(e, TerminalEvent::Char(_)))
        .count();
    let breaks = events
        .iter()
        .filter(|e| **e == TerminalEvent::LineBreak)
        .count();

    assert_eq!(chars, expected_chars);
    assert_eq!(breaks, lines.len());
    assert_eq!(ticks as usize, chars + breaks);
    assert_eq!(events.last(), Some(&TerminalEvent::LineBreak));

    let dismiss = ready.borrow_mut().take().unwrap();
    assert_eq!(dismiss.transcript(), "> sending\n\nok\n");
}

#[test]
fn dismiss_runs_the_hook_once() {
    let closed = Rc::new(RefCell::new(0));
    let hook = Rc::clone(&closed);
    let ready = Rc::new(RefCell::new(None));
    let rd = Rc::clone(&ready);

    let mut seq = TerminalScript::new(["hi"], TerminalConfig::default())
        .unwrap()
        .on_dismiss(move || *hook.borrow_mut() += 1)
        .into_sequence(|_| {}, move |d| *rd.borrow_mut() = Some(d));
    seq.run_steps(100);
    assert_eq!(*closed.borrow(), 0);

    let dismiss = ready.borrow_mut().take().unwrap();
    assert_eq!(dismiss.dismiss(), "hi\n");
    assert_eq!(*closed.borrow(), 1);
}

#[test]
fn line_pause_follows_each_break() {
    let cfg = TerminalConfig {
        char_delay: Millis(10),
        line_pause: Millis(300),
    };
    let shown = Rc::new(RefCell::new(String::new()));
    let sink = Rc::clone(&shown);
    let mut tl = Timeline::new();
    tl.start(
        TerminalScript::new(["ab", "c"], cfg)
            .unwrap()
            .into_sequence(move |s| *sink.borrow_mut() = s.transcript.clone(), |_| {}),
    );

    // a@10 b@20 \n@30, then the pause: c@330 \n@340
    tl.advance(Millis(30));
    assert_eq!(*shown.borrow(), "ab\n");
    tl.advance(Millis(299));
    assert_eq!(*shown.borrow(), "ab\n");
    tl.advance(Millis(1));
    assert_eq!(*shown.borrow(), "ab\nc");
    tl.advance(Millis(10));
    assert_eq!(*shown.borrow(), "ab\nc\n");
    assert!(tl.is_idle());
}
