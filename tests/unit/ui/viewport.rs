use super::*;

#[test]
fn fires_once_per_element() {
    let mut vt = VisibilityTrigger::new(0.5);
    vt.observe("stats", 42);
    assert_eq!(vt.report("stats", 0.2), None);
    assert!(vt.is_observing("stats"));
    assert_eq!(vt.report("stats", 0.6), Some(42));
    assert_eq!(vt.report("stats", 1.0), None);
    assert!(!vt.is_observing("stats"));
}

#[test]
fn unknown_elements_are_ignored() {
    let mut vt: VisibilityTrigger<()> = VisibilityTrigger::default();
    assert_eq!(vt.report("nope", 1.0), None);
    assert_eq!(vt.pending(), 0);
}

#[test]
fn zero_threshold_still_needs_some_visibility() {
    let mut vt = VisibilityTrigger::new(0.0);
    vt.observe("a", "x");
    assert_eq!(vt.report("a", 0.0), None);
    assert_eq!(vt.report("a", 0.01), Some("x"));
}

#[test]
fn unobserve_drops_the_payload() {
    let mut vt = VisibilityTrigger::new(0.1);
    vt.observe("a", 1);
    assert_eq!(vt.unobserve("a"), Some(1));
    assert_eq!(vt.report("a", 1.0), None);
}
