use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
}

#[test]
fn frame_range_clamps_to_last_frame() {
    let r = FrameRange::new(FrameIndex(0), FrameIndex(300)).unwrap();
    assert_eq!(r.clamp(FrameIndex(1000)), FrameIndex(299));
    assert_eq!(r.clamp(FrameIndex(12)), FrameIndex(12));
    assert!(FrameRange::new(FrameIndex(3), FrameIndex(2)).is_err());
}

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
    let fps = Fps::new(30, 1).unwrap();
    assert!((fps.frames_to_secs(15.0) - 0.5).abs() < 1e-12);
}

#[test]
fn canvas_fraction_maps_to_pixels() {
    let c = Canvas {
        width: 1920,
        height: 1080,
    };
    assert_eq!(c.center(), Point::new(960.0, 540.0));
    let p = c.at_fraction(Vec2::new(0.2, 0.3));
    assert!((p.x - 384.0).abs() < 1e-9);
    assert!((p.y - 324.0).abs() < 1e-9);
}

#[test]
fn transform_to_affine_identity_and_translation() {
    let t = Transform2D::default();
    assert_eq!(t.to_affine(), Affine::IDENTITY);

    let t = Transform2D {
        translate: Vec2::new(10.0, -2.5),
        ..Transform2D::default()
    };
    assert_eq!(t.to_affine(), Affine::translate(Vec2::new(10.0, -2.5)));
}

#[test]
fn scaled_transform_keeps_anchor_fixed() {
    let anchor = Vec2::new(960.0, 540.0);
    let t = Transform2D::scaled(0.5, anchor).with_rotation_deg(90.0);
    let p = t.to_affine() * Point::new(960.0, 540.0);
    assert!((p.x - 960.0).abs() < 1e-9);
    assert!((p.y - 540.0).abs() < 1e-9);
    assert!((t.rotation_deg() - 90.0).abs() < 1e-9);
}
