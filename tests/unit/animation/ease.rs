use super::*;

const ALL: [Ease; 18] = [
    Ease::Linear,
    Ease::CssEase,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::InSine,
    Ease::OutSine,
    Ease::InOutSine,
    Ease::InExpo,
    Ease::OutExpo,
    Ease::InCirc,
    Ease::OutCirc,
    Ease::OutBack,
    Ease::OutElastic,
    Ease::OutBounce,
];

#[test]
fn endpoints_are_fixed() {
    for e in ALL {
        assert!(e.apply(0.0).abs() < 1e-9, "{e:?} at 0");
        assert!((e.apply(1.0) - 1.0).abs() < 1e-9, "{e:?} at 1");
    }
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::InQuad.apply(-3.0), 0.0);
    assert_eq!(Ease::InQuad.apply(7.0), 1.0);
}

#[test]
fn out_back_overshoots() {
    let peak = (1..100)
        .map(|i| Ease::OutBack.apply(f64::from(i) / 100.0))
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.0);
}

#[test]
fn cubic_bezier_matches_linear_diagonal() {
    let e = Ease::CubicBezier {
        x1: 0.25,
        y1: 0.25,
        x2: 0.75,
        y2: 0.75,
    };
    for i in 0..=10 {
        let t = f64::from(i) / 10.0;
        assert!((e.apply(t) - t).abs() < 1e-6);
    }
}

#[test]
fn cubic_bezier_validation() {
    assert!(
        Ease::CubicBezier {
            x1: 1.5,
            y1: 0.0,
            x2: 0.5,
            y2: 1.0
        }
        .validate()
        .is_err()
    );
    assert!(Ease::OutCubic.validate().is_ok());
}

#[test]
fn serde_uses_variant_names() {
    let v = serde_json::to_string(&Ease::OutCubic).unwrap();
    assert_eq!(v, "\"OutCubic\"");
    let e: Ease = serde_json::from_str("\"InOutSine\"").unwrap();
    assert_eq!(e, Ease::InOutSine);
}
