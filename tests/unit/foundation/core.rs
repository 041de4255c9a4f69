use super::*;

#[test]
fn millis_arithmetic_saturates() {
    assert_eq!(Millis(5).saturating_sub(Millis(10)), Millis::ZERO);
    assert_eq!(Millis(u64::MAX).saturating_add(Millis(1)), Millis(u64::MAX));
    assert_eq!(Millis(40).saturating_add(Millis(2)), Millis(42));
}

#[test]
fn ratio_of_zero_total_is_finished() {
    assert_eq!(Millis(0).ratio_of(Millis(0)), 1.0);
    assert_eq!(Millis(500).ratio_of(Millis(2000)), 0.25);
}

#[test]
fn millis_serializes_as_plain_number() {
    let s = serde_json::to_string(&Millis(1500)).unwrap();
    assert_eq!(s, "1500");
    let back: Millis = serde_json::from_str("10").unwrap();
    assert_eq!(back, Millis(10));
    assert_eq!(Duration::from(Millis(7)), Duration::from_millis(7));
}
