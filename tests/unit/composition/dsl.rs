use super::*;

fn canvas() -> Canvas {
    Canvas {
        width: 640,
        height: 360,
    }
}

fn two_scene_builder() -> ReelResult<CompositionBuilder> {
    CompositionBuilder::new("Demo", Fps::new(30, 1)?, canvas(), FrameIndex(120))
        .scene(
            SceneBuilder::new("a", 0, 10)
                .fade_out(50, 60)
                .content(SceneContent::Prompt(prompt("title", "ask"))),
        )?
        .scene(
            SceneBuilder::new("b", 55, 70)
                .content(SceneContent::Burst(burst("boom", 60))),
        )
}

#[test]
fn builder_produces_valid_composition() {
    let comp = two_scene_builder().unwrap().build().unwrap();
    assert_eq!(comp.id, "Demo");
    assert_eq!(comp.scenes.len(), 2);
    assert!(comp.orbs.is_empty());
    assert_eq!(comp.background, BackgroundSpec::default());
    assert_eq!(comp.scenes[1].fade_out, None);
}

#[test]
fn builder_rejects_duplicate_scene_ids() {
    let err = two_scene_builder()
        .unwrap()
        .scene(
            SceneBuilder::new("a", 100, 110)
                .content(SceneContent::Prompt(prompt("t", "p"))),
        )
        .err()
        .unwrap();
    assert!(err.to_string().contains("duplicate scene id 'a'"));
}

#[test]
fn build_runs_validation() {
    let err = CompositionBuilder::new("Demo", Fps::new(30, 1).unwrap(), canvas(), FrameIndex(120))
        .scene(
            SceneBuilder::new("late", 10, 20)
                .content(SceneContent::Prompt(prompt("t", "p"))),
        )
        .unwrap()
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("must start at frame 0"));
}

#[test]
fn helpers_fill_defaults() {
    let b = burst("boom", 95);
    assert_eq!(b.particle_count, 24);
    assert_eq!(b.duration_frames, 60);
    assert_eq!(b.stagger_frames, 1.5);
    assert_eq!(b.max_distance_px, 300.0);
    assert_eq!(b.spring, SpringConfig::new(100.0, 0.5));

    let s = steps("h", ["one", "two"], 12.0, 6.0);
    assert_eq!(s.steps, vec!["one".to_string(), "two".to_string()]);
    assert_eq!(s.first_delay_frames, 12.0);

    let r = reveal("H", "S", "T", 160.0, SpringConfig::new(80.0, 0.8));
    assert_eq!(r.scale_from, 0.3);
    assert_eq!(r.rotate_from_deg, 180.0);
    assert_eq!(r.shine_deg_per_frame, 2.0);
    assert_eq!(r.motion.delay_frames, 160.0);

    let o = glow_orb(Vec2::new(0.5, 0.5), 600.0, Color::rgba(0.0, 0.5, 0.3, 1.0), 30.0);
    assert_eq!(o.peak_opacity, 0.6);
    assert_eq!(o.spring.damping, 200.0);
}
