use super::*;

fn scene_ids(c: &Composition) -> Vec<&str> {
    c.scenes.iter().map(|s| s.id.as_str()).collect()
}

#[test]
fn prompt_to_video_shape() {
    let c = prompt_to_video().unwrap();
    assert_eq!(c.id, PROMPT_TO_VIDEO);
    assert_eq!(c.duration, FrameIndex(300));
    assert_eq!(c.fps, Fps::new(30, 1).unwrap());
    assert_eq!((c.canvas.width, c.canvas.height), (1920, 1080));
    assert_eq!(scene_ids(&c), ["prompt", "burst", "reveal"]);
    assert_eq!(c.orbs.len(), 3);

    let SceneContent::Burst(b) = &c.scenes[1].content else {
        panic!("expected burst");
    };
    assert_eq!(b.frame, 95);
    assert_eq!(b.headline, "\u{26a1} AUTOMATE \u{26a1}");
}

#[test]
fn workflow_variants_share_a_timeline() {
    let wide = prompt_to_workflow().unwrap();
    let square = prompt_to_workflow_square().unwrap();
    assert_eq!(wide.duration, FrameIndex(450));
    assert_eq!(square.duration, FrameIndex(450));
    assert_eq!((square.canvas.width, square.canvas.height), (1080, 1080));
    assert_eq!(scene_ids(&wide), ["prompt", "burst", "steps", "reveal"]);
    assert_eq!(wide.scenes, square.scenes);

    let SceneContent::Burst(b) = &wide.scenes[1].content else {
        panic!("expected burst");
    };
    assert_eq!(b.frame, 125);
    let SceneContent::Steps(s) = &wide.scenes[2].content else {
        panic!("expected steps");
    };
    assert_eq!(s.steps.len(), 4);
}

#[test]
fn orb_anchors_and_delays() {
    let c = prompt_to_video().unwrap();
    let delays: Vec<f64> = c.orbs.iter().map(|o| o.delay_frames).collect();
    assert_eq!(delays, [0.0, 15.0, 30.0]);
    assert_eq!(c.orbs[0].color.to_hex(), "#10b981");
    assert_eq!(c.orbs[2].size_px, 600.0);
}
