use std::collections::BTreeSet;
use std::path::Path;

use crate::{
    animation::ops::fade_in_out,
    animation::spring::SpringConfig,
    foundation::color::Color,
    foundation::core::{Canvas, Fps, FrameIndex, FrameRange, Vec2},
    foundation::error::{ReelError, ReelResult},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A complete, renderable composition.
///
/// A composition is pure data that can be:
/// - built programmatically (see [`crate::CompositionBuilder`])
/// - serialized/deserialized via Serde (JSON)
/// - registered under its `id` (see [`crate::Registry`])
///
/// Frames are produced by [`crate::Evaluator::eval_frame`].
pub struct Composition {
    /// Registration identifier.
    pub id: String,
    /// Timeline frame rate.
    pub fps: Fps,
    /// Output canvas dimensions.
    pub canvas: Canvas,
    /// Total composition duration in frames.
    pub duration: FrameIndex, // total frames
    /// Drifting gradient behind every scene.
    #[serde(default)]
    pub background: BackgroundSpec,
    /// Ambient glow orbs, painted above the background.
    #[serde(default)]
    pub orbs: Vec<GlowOrbSpec>,
    /// Scenes in timeline order.
    pub scenes: Vec<SceneSpec>,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Linear drift of a value across the whole composition.
pub struct ValueRange {
    /// Value at frame 0.
    pub from: f64,
    /// Value at the last frame boundary (`duration`).
    pub to: f64,
}

impl ValueRange {
    /// Build a range.
    pub fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One gradient stop whose hue drifts over time.
pub struct GradientStop {
    /// Hue in degrees.
    pub hue: ValueRange,
    /// HSL saturation in `0..1`.
    pub saturation: f64,
    /// HSL lightness in `0..1`.
    pub lightness: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Two-stop linear gradient with rotating angle.
pub struct BackgroundSpec {
    /// Gradient angle in degrees.
    pub angle_deg: ValueRange,
    /// Start and end stop.
    pub stops: [GradientStop; 2],
}

impl Default for BackgroundSpec {
    fn default() -> Self {
        Self {
            angle_deg: ValueRange::new(0.0, 360.0),
            stops: [
                GradientStop {
                    hue: ValueRange::new(120.0, 160.0),
                    saturation: 0.6,
                    lightness: 0.15,
                },
                GradientStop {
                    hue: ValueRange::new(100.0, 140.0),
                    saturation: 0.7,
                    lightness: 0.25,
                },
            ],
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Soft blurred orb that springs in and stays.
pub struct GlowOrbSpec {
    /// Center as a fraction of the canvas.
    pub anchor: Vec2,
    /// Diameter in pixels.
    pub size_px: f64,
    /// Fill color.
    pub color: Color,
    /// Frames before the orb starts growing.
    #[serde(default)]
    pub delay_frames: f64,
    /// Growth spring.
    #[serde(default = "default_orb_spring")]
    pub spring: SpringConfig,
    /// Opacity once fully grown.
    #[serde(default = "default_orb_peak_opacity")]
    pub peak_opacity: f64,
}

pub(crate) fn default_orb_spring() -> SpringConfig {
    SpringConfig::new(200.0, 1.0)
}

pub(crate) fn default_orb_peak_opacity() -> f64 {
    0.6
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Linear fade over `[start, end]` (frames).
pub struct FadeSpec {
    /// Frame where the fade begins.
    pub start: u64,
    /// Frame where the fade completes; must be > `start`.
    pub end: u64,
}

impl FadeSpec {
    /// Build a fade window.
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    pub(crate) fn as_f64(self) -> [f64; 2] {
        [self.start as f64, self.end as f64]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Delayed spring driving an element's entrance.
pub struct MotionSpec {
    /// Frame at which the spring starts (may be fractional).
    pub delay_frames: f64,
    /// Spring parameters.
    pub spring: SpringConfig,
}

impl MotionSpec {
    /// Build a motion.
    pub fn new(delay_frames: f64, spring: SpringConfig) -> Self {
        Self {
            delay_frames,
            spring,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A scene window and what it shows.
pub struct SceneSpec {
    /// Scene identifier, unique within a composition.
    pub id: String,
    /// Entry fade; its start is the scene window start.
    pub fade_in: FadeSpec,
    /// Exit fade; its end is the scene window end. Absent on a final scene that holds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fade_out: Option<FadeSpec>,
    /// Scene body.
    pub content: SceneContent,
}

impl SceneSpec {
    /// Frames during which the scene is on the timeline.
    pub fn window(&self, duration: FrameIndex) -> FrameRange {
        FrameRange {
            start: FrameIndex(self.fade_in.start),
            end: FrameIndex(self.fade_out.map_or(duration.0, |f| f.end)),
        }
    }

    /// Scene opacity at `frame`: the minimum of the entry and exit curves.
    pub fn opacity_at(&self, frame: f64) -> f64 {
        fade_in_out(frame, self.fade_in.as_f64(), self.fade_out.map(FadeSpec::as_f64))
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind")]
/// Scene body variants.
pub enum SceneContent {
    /// Typed prompt with a blinking cursor.
    Prompt(PromptSpec),
    /// Headline with a radial particle burst.
    Burst(BurstSpec),
    /// Checklist of workflow steps sliding in one by one.
    Steps(StepsSpec),
    /// Final result card that spins and scales in.
    Reveal(RevealSpec),
}

impl SceneContent {
    /// Short kind label.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Prompt(_) => "prompt",
            Self::Burst(_) => "burst",
            Self::Steps(_) => "steps",
            Self::Reveal(_) => "reveal",
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Prompt scene configuration.
pub struct PromptSpec {
    /// Caption above the prompt box.
    pub title: String,
    /// Prompt text.
    pub prompt: String,
    /// Scale-in spring.
    #[serde(default = "default_prompt_motion")]
    pub motion: MotionSpec,
    /// Scale at spring start.
    #[serde(default = "default_prompt_scale_from")]
    pub scale_from: f64,
    /// Cursor after the prompt text.
    #[serde(default)]
    pub cursor: CursorSpec,
}

pub(crate) fn default_prompt_motion() -> MotionSpec {
    MotionSpec::new(10.0, SpringConfig::new(100.0, 0.5))
}

pub(crate) fn default_prompt_scale_from() -> f64 {
    0.5
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Blinking text cursor.
pub struct CursorSpec {
    /// Frames per blink state.
    pub period_frames: u64,
    /// Cursor glyph.
    pub glyph: String,
}

impl Default for CursorSpec {
    fn default() -> Self {
        Self {
            period_frames: 15,
            glyph: "|".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Burst scene configuration.
pub struct BurstSpec {
    /// Headline text.
    pub headline: String,
    /// Frame at which the burst starts.
    pub frame: u64,
    /// Frames the particles stay on screen.
    #[serde(default = "default_burst_duration")]
    pub duration_frames: u64,
    /// Number of particles in the ring.
    #[serde(default = "default_particle_count")]
    pub particle_count: u32,
    /// Extra delay per particle index.
    #[serde(default = "default_burst_stagger")]
    pub stagger_frames: f64,
    /// Travel distance at full progress.
    #[serde(default = "default_burst_distance")]
    pub max_distance_px: f64,
    /// Particle diameter.
    #[serde(default = "default_particle_size")]
    pub particle_size_px: f64,
    /// Per-particle spring.
    #[serde(default = "default_burst_spring")]
    pub spring: SpringConfig,
}

impl BurstSpec {
    /// Frames during which particles are emitted.
    pub fn window(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(self.frame),
            end: FrameIndex(self.frame.saturating_add(self.duration_frames)),
        }
    }
}

pub(crate) fn default_burst_duration() -> u64 {
    60
}

pub(crate) fn default_particle_count() -> u32 {
    24
}

pub(crate) fn default_burst_stagger() -> f64 {
    1.5
}

pub(crate) fn default_burst_distance() -> f64 {
    300.0
}

pub(crate) fn default_particle_size() -> f64 {
    20.0
}

pub(crate) fn default_burst_spring() -> SpringConfig {
    SpringConfig::new(100.0, 0.5)
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Workflow steps scene configuration.
pub struct StepsSpec {
    /// Heading above the list.
    pub heading: String,
    /// Step labels in display order.
    pub steps: Vec<String>,
    /// Frame at which the first step starts.
    pub first_delay_frames: f64,
    /// Extra delay per step.
    pub stagger_frames: f64,
    /// Per-step spring.
    #[serde(default = "default_steps_spring")]
    pub spring: SpringConfig,
    /// Horizontal slide distance before a step lands.
    #[serde(default = "default_steps_slide")]
    pub slide_px: f64,
}

pub(crate) fn default_steps_spring() -> SpringConfig {
    SpringConfig::new(200.0, 0.6)
}

pub(crate) fn default_steps_slide() -> f64 {
    80.0
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Reveal scene configuration.
pub struct RevealSpec {
    /// Gradient heading inside the card.
    pub heading: String,
    /// Subtitle under the heading.
    pub subtitle: String,
    /// Tagline under the card.
    pub tagline: String,
    /// Spin-in spring.
    pub motion: MotionSpec,
    /// Scale at spring start.
    #[serde(default = "default_reveal_scale_from")]
    pub scale_from: f64,
    /// Rotation at spring start, in degrees.
    #[serde(default = "default_reveal_rotate_from")]
    pub rotate_from_deg: f64,
    /// Shine border rotation speed.
    #[serde(default = "default_shine_speed")]
    pub shine_deg_per_frame: f64,
}

pub(crate) fn default_reveal_scale_from() -> f64 {
    0.3
}

pub(crate) fn default_reveal_rotate_from() -> f64 {
    180.0
}

pub(crate) fn default_shine_speed() -> f64 {
    2.0
}

impl Composition {
    /// Parse a composition from JSON text.
    pub fn from_json_str(s: &str) -> ReelResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Read and parse a composition JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|e| {
            ReelError::Other(anyhow::Error::new(e).context(format!(
                "read composition '{}'",
                path.display()
            )))
        })?;
        Self::from_json_str(&s)
    }

    /// Pretty JSON representation.
    pub fn to_json_pretty(&self) -> ReelResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// All frames of the composition.
    pub fn frame_range(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(0),
            end: self.duration,
        }
    }

    /// Clamp `frame` into `[0, duration)`.
    pub fn clamp_frame(&self, frame: FrameIndex) -> FrameIndex {
        self.frame_range().clamp(frame)
    }

    /// Look up a scene by id.
    pub fn scene(&self, id: &str) -> Option<&SceneSpec> {
        self.scenes.iter().find(|s| s.id == id)
    }

    /// Validate timeline invariants.
    pub fn validate(&self) -> ReelResult<()> {
        if self.id.trim().is_empty() {
            return Err(ReelError::validation("composition id must be non-empty"));
        }
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(ReelError::validation("fps must have num>0 and den>0"));
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ReelError::validation("canvas width/height must be > 0"));
        }
        if self.duration.0 == 0 {
            return Err(ReelError::validation("duration must be > 0 frames"));
        }

        validate_background(&self.background)?;
        for (i, orb) in self.orbs.iter().enumerate() {
            validate_orb(orb).map_err(|e| prefix_err(&format!("orb {i}"), e))?;
        }

        if self.scenes.is_empty() {
            return Err(ReelError::validation(
                "composition must have at least one scene",
            ));
        }

        let mut ids = BTreeSet::new();
        let mut prev: Option<(&SceneSpec, FrameRange)> = None;
        for (i, scene) in self.scenes.iter().enumerate() {
            let is_last = i + 1 == self.scenes.len();
            validate_scene(scene, self.duration, is_last)
                .map_err(|e| prefix_err(&format!("scene '{}'", scene.id), e))?;
            if !ids.insert(scene.id.as_str()) {
                return Err(ReelError::validation(format!(
                    "duplicate scene id '{}'",
                    scene.id
                )));
            }

            let window = scene.window(self.duration);
            match prev {
                None => {
                    if window.start.0 != 0 {
                        return Err(ReelError::validation(format!(
                            "first scene '{}' must start at frame 0",
                            scene.id
                        )));
                    }
                }
                Some((p, pw)) => {
                    if window.start.0 <= pw.start.0 {
                        return Err(ReelError::validation(format!(
                            "scene '{}' must start after scene '{}'",
                            scene.id, p.id
                        )));
                    }
                    if window.start.0 > pw.end.0 {
                        return Err(ReelError::validation(format!(
                            "gap between scene '{}' (ends {}) and scene '{}' (starts {})",
                            p.id, pw.end.0, scene.id, window.start.0
                        )));
                    }
                }
            }
            if is_last && window.end != self.duration {
                return Err(ReelError::validation(format!(
                    "last scene '{}' must end at the composition duration ({})",
                    scene.id, self.duration.0
                )));
            }
            prev = Some((scene, window));
        }

        Ok(())
    }
}

fn prefix_err(what: &str, e: ReelError) -> ReelError {
    match e {
        ReelError::Validation(m) => ReelError::Validation(format!("{what}: {m}")),
        ReelError::Animation(m) => ReelError::Animation(format!("{what}: {m}")),
        other => other,
    }
}

fn validate_finite(v: f64, field: &str) -> ReelResult<()> {
    if !v.is_finite() {
        return Err(ReelError::validation(format!("{field} must be finite")));
    }
    Ok(())
}

fn validate_non_negative(v: f64, field: &str) -> ReelResult<()> {
    if !v.is_finite() || v < 0.0 {
        return Err(ReelError::validation(format!(
            "{field} must be finite and >= 0"
        )));
    }
    Ok(())
}

fn validate_unit(v: f64, field: &str) -> ReelResult<()> {
    if !v.is_finite() || !(0.0..=1.0).contains(&v) {
        return Err(ReelError::validation(format!("{field} must be in [0, 1]")));
    }
    Ok(())
}

fn validate_text(s: &str, field: &str) -> ReelResult<()> {
    if s.trim().is_empty() {
        return Err(ReelError::validation(format!("{field} must be non-empty")));
    }
    Ok(())
}

fn validate_background(bg: &BackgroundSpec) -> ReelResult<()> {
    validate_finite(bg.angle_deg.from, "background angle_deg.from")?;
    validate_finite(bg.angle_deg.to, "background angle_deg.to")?;
    for (i, stop) in bg.stops.iter().enumerate() {
        validate_finite(stop.hue.from, &format!("background stop {i} hue.from"))?;
        validate_finite(stop.hue.to, &format!("background stop {i} hue.to"))?;
        validate_unit(stop.saturation, &format!("background stop {i} saturation"))?;
        validate_unit(stop.lightness, &format!("background stop {i} lightness"))?;
    }
    Ok(())
}

fn validate_orb(orb: &GlowOrbSpec) -> ReelResult<()> {
    validate_finite(orb.anchor.x, "anchor.x")?;
    validate_finite(orb.anchor.y, "anchor.y")?;
    if !orb.size_px.is_finite() || orb.size_px <= 0.0 {
        return Err(ReelError::validation("size_px must be finite and > 0"));
    }
    if !orb.color.is_finite() {
        return Err(ReelError::validation("color must be finite"));
    }
    validate_non_negative(orb.delay_frames, "delay_frames")?;
    validate_unit(orb.peak_opacity, "peak_opacity")?;
    orb.spring.validate()
}

fn validate_fade(fade: FadeSpec, duration: FrameIndex, field: &str) -> ReelResult<()> {
    if fade.start >= fade.end {
        return Err(ReelError::validation(format!(
            "{field} must have start < end (got {}..{})",
            fade.start, fade.end
        )));
    }
    if fade.end > duration.0 {
        return Err(ReelError::validation(format!(
            "{field} ends after the composition duration"
        )));
    }
    Ok(())
}

fn validate_motion(m: &MotionSpec) -> ReelResult<()> {
    validate_non_negative(m.delay_frames, "motion delay_frames")?;
    m.spring.validate()
}

fn validate_scene(scene: &SceneSpec, duration: FrameIndex, is_last: bool) -> ReelResult<()> {
    validate_text(&scene.id, "scene id")?;
    validate_fade(scene.fade_in, duration, "fade_in")?;
    match scene.fade_out {
        Some(out) => {
            validate_fade(out, duration, "fade_out")?;
            if out.start < scene.fade_in.start {
                return Err(ReelError::validation(
                    "fade_out must not start before fade_in",
                ));
            }
        }
        None if !is_last => {
            return Err(ReelError::validation(
                "only the last scene may omit fade_out",
            ));
        }
        None => {}
    }

    match &scene.content {
        SceneContent::Prompt(p) => {
            validate_text(&p.prompt, "prompt")?;
            validate_motion(&p.motion)?;
            validate_non_negative(p.scale_from, "scale_from")?;
            if p.cursor.period_frames == 0 {
                return Err(ReelError::validation("cursor period_frames must be > 0"));
            }
        }
        SceneContent::Burst(b) => {
            validate_text(&b.headline, "headline")?;
            if b.duration_frames == 0 {
                return Err(ReelError::validation("burst duration_frames must be > 0"));
            }
            if b.particle_count == 0 {
                return Err(ReelError::validation("burst particle_count must be > 0"));
            }
            validate_non_negative(b.stagger_frames, "burst stagger_frames")?;
            validate_non_negative(b.max_distance_px, "burst max_distance_px")?;
            validate_non_negative(b.particle_size_px, "burst particle_size_px")?;
            b.spring.validate()?;
        }
        SceneContent::Steps(s) => {
            validate_text(&s.heading, "heading")?;
            if s.steps.is_empty() {
                return Err(ReelError::validation("steps must be non-empty"));
            }
            for step in &s.steps {
                validate_text(step, "step label")?;
            }
            validate_non_negative(s.first_delay_frames, "first_delay_frames")?;
            validate_non_negative(s.stagger_frames, "stagger_frames")?;
            validate_finite(s.slide_px, "slide_px")?;
            s.spring.validate()?;
        }
        SceneContent::Reveal(r) => {
            validate_text(&r.heading, "heading")?;
            validate_motion(&r.motion)?;
            validate_non_negative(r.scale_from, "scale_from")?;
            validate_finite(r.rotate_from_deg, "rotate_from_deg")?;
            validate_finite(r.shine_deg_per_frame, "shine_deg_per_frame")?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
