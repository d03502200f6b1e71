use crate::{
    animation::interpolate::ramp,
    animation::ops::{blink, stagger, wrap_degrees},
    composition::model::{
        BackgroundSpec, Composition, GlowOrbSpec, PromptSpec, RevealSpec, SceneContent, SceneSpec,
        StepsSpec,
    },
    eval::particles::burst_particles,
    eval::tree::{
        BackgroundNode, BurstNode, ContentNode, OrbNode, PromptNode, RenderTree, RevealNode,
        SceneNode, StepNode, StepsNode,
    },
    foundation::color::Hsl,
    foundation::core::{Canvas, Fps, FrameIndex, Transform2D},
    foundation::error::ReelResult,
};

/// Spring progress at which a checklist step shows its checkmark.
const STEP_DONE_PROGRESS: f64 = 0.99;

/// Frame evaluator.
///
/// Stateless: every frame is a pure function of the composition and the frame index.
pub struct Evaluator;

impl Evaluator {
    /// Evaluate `frame` of `comp` into a [`RenderTree`].
    ///
    /// The composition is validated first. Frames past the end clamp to the last frame.
    #[tracing::instrument(skip(comp), fields(comp = %comp.id))]
    pub fn eval_frame(comp: &Composition, frame: FrameIndex) -> ReelResult<RenderTree> {
        comp.validate()?;
        eval_frame_unchecked(comp, frame)
    }
}

/// Same as [`Evaluator::eval_frame`] for a composition already known to be valid.
pub(crate) fn eval_frame_unchecked(comp: &Composition, frame: FrameIndex) -> ReelResult<RenderTree> {
    let frame = comp.clamp_frame(frame);
    let f = frame.as_f64();

    let mut scenes = Vec::new();
    for scene in &comp.scenes {
        let window = scene.window(comp.duration);
        if !window.contains(frame) {
            continue;
        }
        tracing::trace!(scene = %scene.id, frame = frame.0, "scene active");
        scenes.push(SceneNode {
            id: scene.id.clone(),
            window,
            opacity: scene.opacity_at(f),
            content: eval_content(scene, comp, frame)?,
        });
    }

    Ok(RenderTree {
        composition: comp.id.clone(),
        frame,
        canvas: comp.canvas,
        background: eval_background(&comp.background, f, comp.duration),
        orbs: comp
            .orbs
            .iter()
            .map(|orb| eval_orb(orb, f, comp.fps, comp.canvas))
            .collect(),
        scenes,
    })
}

fn eval_background(bg: &BackgroundSpec, f: f64, duration: FrameIndex) -> BackgroundNode {
    let end = duration.as_f64();
    let drift = |from: f64, to: f64| ramp(f, 0.0, end, from, to);
    BackgroundNode {
        angle_deg: drift(bg.angle_deg.from, bg.angle_deg.to),
        stops: bg.stops.map(|s| {
            Hsl::new(drift(s.hue.from, s.hue.to), s.saturation, s.lightness)
        }),
    }
}

fn eval_orb(orb: &GlowOrbSpec, f: f64, fps: Fps, canvas: Canvas) -> OrbNode {
    let p = orb.spring.progress(f - orb.delay_frames, fps);
    OrbNode {
        center: canvas.at_fraction(orb.anchor),
        size_px: orb.size_px,
        color: orb.color,
        scale: ramp(p, 0.0, 1.0, 0.0, 1.0),
        opacity: ramp(p, 0.0, 1.0, 0.0, orb.peak_opacity),
        blur_px: orb.size_px / 3.0,
    }
}

fn eval_content(scene: &SceneSpec, comp: &Composition, frame: FrameIndex) -> ReelResult<ContentNode> {
    let f = frame.as_f64();
    Ok(match &scene.content {
        SceneContent::Prompt(p) => ContentNode::Prompt(eval_prompt(p, comp, frame)),
        SceneContent::Burst(b) => ContentNode::Burst(BurstNode {
            headline: b.headline.clone(),
            particles: burst_particles(b, frame, comp.fps, comp.canvas.center())?,
        }),
        SceneContent::Steps(s) => ContentNode::Steps(eval_steps(s, f, comp.fps)),
        SceneContent::Reveal(r) => ContentNode::Reveal(eval_reveal(r, comp, f)),
    })
}

fn eval_prompt(p: &PromptSpec, comp: &Composition, frame: FrameIndex) -> PromptNode {
    let progress = p
        .motion
        .spring
        .progress(frame.as_f64() - p.motion.delay_frames, comp.fps);
    let scale = ramp(progress, 0.0, 1.0, p.scale_from, 1.0);
    PromptNode {
        title: p.title.clone(),
        prompt: p.prompt.clone(),
        scale,
        transform: Transform2D::scaled(scale, comp.canvas.center().to_vec2()).to_affine(),
        cursor_visible: blink(frame.0, p.cursor.period_frames),
        cursor_glyph: p.cursor.glyph.clone(),
    }
}

fn eval_steps(s: &StepsSpec, f: f64, fps: Fps) -> StepsNode {
    let steps = s
        .steps
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let delay = stagger(s.first_delay_frames, i, s.stagger_frames);
            let progress = s.spring.progress(f - delay, fps);
            StepNode {
                label: label.clone(),
                progress,
                opacity: ramp(progress, 0.0, 1.0, 0.0, 1.0),
                offset_x: ramp(progress, 0.0, 1.0, s.slide_px, 0.0),
                done: progress >= STEP_DONE_PROGRESS,
            }
        })
        .collect();
    StepsNode {
        heading: s.heading.clone(),
        steps,
    }
}

fn eval_reveal(r: &RevealSpec, comp: &Composition, f: f64) -> RevealNode {
    let progress = r.motion.spring.progress(f - r.motion.delay_frames, comp.fps);
    let scale = ramp(progress, 0.0, 1.0, r.scale_from, 1.0);
    let rotation_deg = ramp(progress, 0.0, 1.0, r.rotate_from_deg, 0.0);
    let transform = Transform2D::scaled(scale, comp.canvas.center().to_vec2())
        .with_rotation_deg(rotation_deg)
        .to_affine();
    RevealNode {
        heading: r.heading.clone(),
        subtitle: r.subtitle.clone(),
        tagline: r.tagline.clone(),
        scale,
        rotation_deg,
        transform,
        shine_rotation_deg: wrap_degrees(f * r.shine_deg_per_frame),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
