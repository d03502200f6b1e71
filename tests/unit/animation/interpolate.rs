use super::*;

#[test]
fn clamps_outside_range_by_default() {
    let i = Interp::new(&[70.0, 90.0], &[1.0, 0.0]).unwrap();
    assert_eq!(i.sample(0.0), 1.0);
    assert_eq!(i.sample(80.0), 0.5);
    assert_eq!(i.sample(200.0), 0.0);
}

#[test]
fn extend_continues_boundary_segments() {
    let i = Interp::new(&[0.0, 10.0], &[0.0, 1.0])
        .unwrap()
        .extrapolate(Extrapolate::Extend, Extrapolate::Extend);
    assert!((i.sample(-10.0) + 1.0).abs() < 1e-12);
    assert!((i.sample(20.0) - 2.0).abs() < 1e-12);
}

#[test]
fn identity_returns_input_outside_range() {
    let i = Interp::new(&[0.0, 1.0], &[5.0, 6.0])
        .unwrap()
        .extrapolate(Extrapolate::Identity, Extrapolate::Clamp);
    assert_eq!(i.sample(-4.0), -4.0);
    assert_eq!(i.sample(4.0), 6.0);
}

#[test]
fn multi_segment_rise_and_fall() {
    let i = Interp::new(&[0.0, 0.5, 1.0], &[0.0, 1.0, 0.0]).unwrap();
    assert_eq!(i.sample(0.0), 0.0);
    assert!((i.sample(0.25) - 0.5).abs() < 1e-12);
    assert_eq!(i.sample(0.5), 1.0);
    assert!((i.sample(0.75) - 0.5).abs() < 1e-12);
    assert_eq!(i.sample(1.0), 0.0);
}

#[test]
fn easing_is_applied_per_segment() {
    let i = Interp::new(&[0.0, 10.0], &[0.0, 100.0])
        .unwrap()
        .ease(Ease::InQuad)
        .unwrap();
    assert!((i.sample(5.0) - 25.0).abs() < 1e-9);

    let bad = Ease::CubicBezier {
        x1: 1.5,
        y1: 0.0,
        x2: 0.5,
        y2: 1.0,
    };
    assert!(
        Interp::new(&[0.0, 1.0], &[0.0, 1.0])
            .unwrap()
            .ease(bad)
            .is_err()
    );
}

#[test]
fn rejects_invalid_knots() {
    assert!(Interp::new(&[0.0], &[1.0]).is_err());
    assert!(Interp::new(&[0.0, 1.0], &[1.0]).is_err());
    assert!(Interp::new(&[1.0, 1.0], &[0.0, 1.0]).is_err());
    assert!(Interp::new(&[2.0, 1.0], &[0.0, 1.0]).is_err());
    assert!(Interp::new(&[0.0, f64::NAN], &[0.0, 1.0]).is_err());
    assert!(interpolate(0.5, &[0.0, 1.0], &[10.0, 20.0]).is_ok());
}

#[test]
fn ramp_matches_interp_and_steps_when_degenerate() {
    let i = Interp::new(&[85.0, 105.0], &[0.0, 1.0]).unwrap();
    for f in [0.0, 85.0, 90.0, 104.0, 105.0, 300.0] {
        assert!((ramp(f, 85.0, 105.0, 0.0, 1.0) - i.sample(f)).abs() < 1e-12);
    }
    assert_eq!(ramp(4.0, 5.0, 5.0, 0.0, 1.0), 0.0);
    assert_eq!(ramp(5.0, 5.0, 5.0, 0.0, 1.0), 1.0);
}
