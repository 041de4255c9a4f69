use super::*;
use crate::sequence::timeline::Timeline;

fn small(reset_chance: f64) -> RainConfig {
    RainConfig {
        width: 40,
        height: 30,
        font_size: 10,
        frame: Millis(33),
        reset_chance,
        glyphs: "01".to_string(),
        seed: Some(3),
    }
}

#[test]
fn field_dimensions_come_from_cell_size() {
    let rain = MatrixRain::new(small(0.5)).unwrap();
    assert_eq!(rain.columns(), 4);
    assert_eq!(rain.rows(), 3);
    assert_eq!(rain.initial_state().drops, vec![1; 4]);
}

#[test]
fn rejects_degenerate_fields() {
    assert!(MatrixRain::new(RainConfig { font_size: 0, ..small(0.1) }).is_err());
    assert!(MatrixRain::new(RainConfig { width: 5, ..small(0.1) }).is_err());
    assert!(MatrixRain::new(RainConfig { reset_chance: 1.5, ..small(0.1) }).is_err());
    assert!(MatrixRain::new(RainConfig { glyphs: String::new(), ..small(0.1) }).is_err());
}

#[test]
fn columns_advance_one_row_per_tick_and_never_reset_early() {
    let rain = MatrixRain::new(small(1.0)).unwrap();
    let mut rng = StdRng::seed_from_u64(9);
    let s1 = rain.step(&rain.initial_state(), &mut rng);
    assert_eq!(s1.drops, vec![2; 4]);
    assert_eq!(s1.heads.len(), 4);
    assert!(s1.heads.iter().all(|g| g.row == 1 && "01".contains(g.ch)));

    let s2 = rain.step(&s1, &mut rng);
    let s3 = rain.step(&s2, &mut rng);
    assert_eq!(s3.drops, vec![4; 4]);
    // row 4 is past the 3-row field; with reset_chance 1 every column restarts
    let s4 = rain.step(&s3, &mut rng);
    assert_eq!(s4.drops, vec![1; 4]);
    assert_eq!(s4.frame, 4);
}

#[test]
fn zero_reset_chance_lets_columns_fall_forever() {
    let rain = MatrixRain::new(small(0.0)).unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    let mut s = rain.initial_state();
    for _ in 0..20 {
        s = rain.step(&s, &mut rng);
    }
    assert_eq!(s.drops, vec![21; 4]);
}

#[test]
fn runs_until_torn_down() {
    let mut tl = Timeline::new();
    let h = tl.start(MatrixRain::new(small(0.5)).unwrap().into_sequence(|_| {}));
    assert_eq!(tl.advance(Millis(33 * 30)), 30);
    assert!(tl.is_active(h));
    assert!(tl.cancel(h));
    assert_eq!(tl.advance(Millis(1000)), 0);
}
