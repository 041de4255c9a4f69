use super::*;

const ALL: [Ease; 5] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::OutCubic,
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
    assert_eq!(ease_out_quad(0.0), 0.0);
    assert_eq!(ease_out_quad(1.0), 1.0);
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn out_quad_matches_closed_form() {
    assert_eq!(ease_out_quad(0.5), 0.75);
    assert_eq!(Ease::OutQuad.apply(0.25), 0.25 * 1.75);
}

#[test]
fn progress_is_clamped_past_duration() {
    assert_eq!(normalized_progress(Millis(3000), Millis(2000)), 1.0);
    assert_eq!(Ease::OutQuad.at(Millis(5000), Millis(2000)), 1.0);
    assert_eq!(normalized_progress(Millis(1000), Millis(2000)), 0.5);
}
