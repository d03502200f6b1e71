use super::*;
use crate::composition::dsl::burst;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

fn origin() -> Point {
    Point::new(960.0, 540.0)
}

#[test]
fn empty_outside_window() {
    let spec = burst("boom", 95);
    for f in [0, 94, 155, 400] {
        let ps = burst_particles(&spec, FrameIndex(f), fps30(), origin()).unwrap();
        assert!(ps.is_empty(), "frame {f}");
    }
    let ps = burst_particles(&spec, FrameIndex(154), fps30(), origin()).unwrap();
    assert_eq!(ps.len(), 24);
}

#[test]
fn angles_and_delays() {
    let spec = burst("boom", 95);
    let ps = burst_particles(&spec, FrameIndex(110), fps30(), origin()).unwrap();
    for (i, p) in ps.iter().enumerate() {
        let expected = 2.0 * std::f64::consts::PI * i as f64 / 24.0;
        assert!((p.angle_rad - expected).abs() < 1e-12);
        assert_eq!(p.delay_frames, 95.0 + 1.5 * i as f64);
        assert!((p.color.h - 15.0 * i as f64).abs() < 1e-9);
        assert_eq!(p.color.s, 0.8);
        assert_eq!(p.size_px, 20.0);
    }
    for w in ps.windows(2) {
        assert!(w[1].delay_frames > w[0].delay_frames);
    }
}

#[test]
fn earlier_particles_lead() {
    let spec = burst("boom", 95);
    let at_burst = burst_particles(&spec, FrameIndex(95), fps30(), origin()).unwrap();
    assert_eq!(at_burst[0].distance_px, 0.0);
    assert_eq!(at_burst[0].position, origin());
    assert_eq!(at_burst[0].opacity, 0.0);

    for f in 95..155 {
        let ps = burst_particles(&spec, FrameIndex(f), fps30(), origin()).unwrap();
        for w in ps.windows(2) {
            assert!(w[1].distance_px <= w[0].distance_px + 1e-9, "frame {f}");
        }
        for p in &ps {
            assert!((0.0..=1.0).contains(&p.opacity));
            assert!(p.distance_px <= 300.0 + 1e-9);
        }
    }
}

#[test]
fn position_follows_angle() {
    let spec = burst("boom", 95);
    let ps = burst_particles(&spec, FrameIndex(140), fps30(), origin()).unwrap();
    let p = ps[6];
    // 6/24 of a turn points straight down in screen space.
    assert!((p.position.x - origin().x).abs() < 1e-6);
    assert!((p.position.y - (origin().y + p.distance_px)).abs() < 1e-6);
    assert!(p.distance_px > 250.0);
}
