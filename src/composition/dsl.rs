use crate::{
    animation::spring::SpringConfig,
    composition::model::{
        BackgroundSpec, BurstSpec, Composition, CursorSpec, FadeSpec, GlowOrbSpec, MotionSpec,
        PromptSpec, RevealSpec, SceneContent, SceneSpec, StepsSpec, default_burst_distance,
        default_burst_duration, default_burst_spring, default_burst_stagger,
        default_orb_peak_opacity, default_orb_spring, default_particle_count,
        default_particle_size, default_prompt_motion, default_prompt_scale_from,
        default_reveal_rotate_from, default_reveal_scale_from, default_shine_speed,
        default_steps_slide, default_steps_spring,
    },
    foundation::color::Color,
    foundation::core::{Canvas, Fps, FrameIndex, Vec2},
    foundation::error::{ReelError, ReelResult},
};

/// Builder for [`Composition`](crate::Composition).
pub struct CompositionBuilder {
    id: String,
    fps: Fps,
    canvas: Canvas,
    duration: FrameIndex,
    background: BackgroundSpec,
    orbs: Vec<GlowOrbSpec>,
    scenes: Vec<SceneSpec>,
}

impl CompositionBuilder {
    /// Create a builder for a new composition.
    pub fn new(id: impl Into<String>, fps: Fps, canvas: Canvas, duration: FrameIndex) -> Self {
        Self {
            id: id.into(),
            fps,
            canvas,
            duration,
            background: BackgroundSpec::default(),
            orbs: Vec::new(),
            scenes: Vec::new(),
        }
    }

    /// Replace the background gradient.
    pub fn background(mut self, background: BackgroundSpec) -> Self {
        self.background = background;
        self
    }

    /// Append a glow orb.
    pub fn orb(mut self, orb: GlowOrbSpec) -> Self {
        self.orbs.push(orb);
        self
    }

    /// Append a scene; ids must be unique.
    pub fn scene(mut self, scene: SceneSpec) -> ReelResult<Self> {
        if self.scenes.iter().any(|s| s.id == scene.id) {
            return Err(ReelError::validation(format!(
                "duplicate scene id '{}'",
                scene.id
            )));
        }
        self.scenes.push(scene);
        Ok(self)
    }

    /// Build and validate the final [`Composition`](crate::Composition).
    pub fn build(self) -> ReelResult<Composition> {
        let comp = Composition {
            id: self.id,
            fps: self.fps,
            canvas: self.canvas,
            duration: self.duration,
            background: self.background,
            orbs: self.orbs,
            scenes: self.scenes,
        };
        comp.validate()?;
        Ok(comp)
    }
}

/// Builder for one [`SceneSpec`](crate::SceneSpec).
pub struct SceneBuilder {
    id: String,
    fade_in: FadeSpec,
    fade_out: Option<FadeSpec>,
}

impl SceneBuilder {
    /// Scene entering over `[fade_in_start, fade_in_end]`.
    pub fn new(id: impl Into<String>, fade_in_start: u64, fade_in_end: u64) -> Self {
        Self {
            id: id.into(),
            fade_in: FadeSpec::new(fade_in_start, fade_in_end),
            fade_out: None,
        }
    }

    /// Exit over `[start, end]`; the scene window ends at `end`.
    pub fn fade_out(mut self, start: u64, end: u64) -> Self {
        self.fade_out = Some(FadeSpec::new(start, end));
        self
    }

    /// Finish with the given body.
    pub fn content(self, content: SceneContent) -> SceneSpec {
        SceneSpec {
            id: self.id,
            fade_in: self.fade_in,
            fade_out: self.fade_out,
            content,
        }
    }
}

/// Orb at a canvas fraction with the default growth spring.
pub fn glow_orb(anchor: Vec2, size_px: f64, color: Color, delay_frames: f64) -> GlowOrbSpec {
    GlowOrbSpec {
        anchor,
        size_px,
        color,
        delay_frames,
        spring: default_orb_spring(),
        peak_opacity: default_orb_peak_opacity(),
    }
}

/// Prompt body with default motion and cursor.
pub fn prompt(title: impl Into<String>, prompt: impl Into<String>) -> PromptSpec {
    PromptSpec {
        title: title.into(),
        prompt: prompt.into(),
        motion: default_prompt_motion(),
        scale_from: default_prompt_scale_from(),
        cursor: CursorSpec::default(),
    }
}

/// Burst body starting at `frame` with the default ring.
pub fn burst(headline: impl Into<String>, frame: u64) -> BurstSpec {
    BurstSpec {
        headline: headline.into(),
        frame,
        duration_frames: default_burst_duration(),
        particle_count: default_particle_count(),
        stagger_frames: default_burst_stagger(),
        max_distance_px: default_burst_distance(),
        particle_size_px: default_particle_size(),
        spring: default_burst_spring(),
    }
}

/// Steps body; step `i` starts at `first_delay + i * stagger`.
pub fn steps<S: Into<String>>(
    heading: impl Into<String>,
    labels: impl IntoIterator<Item = S>,
    first_delay_frames: f64,
    stagger_frames: f64,
) -> StepsSpec {
    StepsSpec {
        heading: heading.into(),
        steps: labels.into_iter().map(Into::into).collect(),
        first_delay_frames,
        stagger_frames,
        spring: default_steps_spring(),
        slide_px: default_steps_slide(),
    }
}

/// Reveal body spinning in from `delay_frames` with the given spring.
pub fn reveal(
    heading: impl Into<String>,
    subtitle: impl Into<String>,
    tagline: impl Into<String>,
    delay_frames: f64,
    spring: SpringConfig,
) -> RevealSpec {
    RevealSpec {
        heading: heading.into(),
        subtitle: subtitle.into(),
        tagline: tagline.into(),
        motion: MotionSpec::new(delay_frames, spring),
        scale_from: default_reveal_scale_from(),
        rotate_from_deg: default_reveal_rotate_from(),
        shine_deg_per_frame: default_shine_speed(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/dsl.rs"]
mod tests;
