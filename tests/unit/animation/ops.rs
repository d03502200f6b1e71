use super::*;

#[test]
fn fade_is_min_of_entry_and_exit() {
    let fin = [0.0, 20.0];
    let fout = Some([70.0, 90.0]);
    assert_eq!(fade_in_out(0.0, fin, fout), 0.0);
    assert!((fade_in_out(10.0, fin, fout) - 0.5).abs() < 1e-12);
    assert_eq!(fade_in_out(20.0, fin, fout), 1.0);
    assert_eq!(fade_in_out(50.0, fin, fout), 1.0);
    assert!((fade_in_out(80.0, fin, fout) - 0.5).abs() < 1e-12);
    assert_eq!(fade_in_out(90.0, fin, fout), 0.0);
    assert_eq!(fade_in_out(250.0, fin, fout), 0.0);
}

#[test]
fn missing_exit_holds_full_opacity() {
    assert_eq!(fade_in_out(299.0, [150.0, 180.0], None), 1.0);
    assert_eq!(fade_in_out(149.0, [150.0, 180.0], None), 0.0);
}

#[test]
fn blink_toggles_every_period() {
    assert!(blink(0, 15));
    assert!(blink(14, 15));
    assert!(!blink(15, 15));
    assert!(!blink(29, 15));
    assert!(blink(30, 15));
    assert!(blink(7, 0));
}

#[test]
fn wrap_and_stagger() {
    assert_eq!(wrap_degrees(362.0), 2.0);
    assert_eq!(wrap_degrees(-90.0), 270.0);
    assert_eq!(stagger(95.0, 4, 1.5), 101.0);
}
