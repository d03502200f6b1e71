use crate::foundation::{
    color::{Color, Hsl},
    core::{Affine, Canvas, FrameIndex, FrameRange, Point},
};

/// Everything visible at one frame, in paint order.
///
/// Plain data: hosts walk it to draw the frame, and [`crate::fingerprint_tree`] hashes it.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RenderTree {
    /// Composition the tree was evaluated from.
    pub composition: String,
    /// Frame actually evaluated (after clamping).
    pub frame: FrameIndex,
    /// Output canvas.
    pub canvas: Canvas,
    /// Full-canvas gradient.
    pub background: BackgroundNode,
    /// Glow orbs over the background.
    pub orbs: Vec<OrbNode>,
    /// Scenes active at `frame`, in timeline order.
    pub scenes: Vec<SceneNode>,
}

impl RenderTree {
    /// Active scene by id.
    pub fn scene(&self, id: &str) -> Option<&SceneNode> {
        self.scenes.iter().find(|s| s.id == id)
    }
}

/// Linear gradient at one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct BackgroundNode {
    /// Gradient angle in degrees.
    pub angle_deg: f64,
    /// Start and end stop.
    pub stops: [Hsl; 2],
}

/// One blurred orb.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct OrbNode {
    pub center: Point,
    pub size_px: f64,
    pub color: Color,
    pub scale: f64,
    pub opacity: f64,
    pub blur_px: f64,
}

/// A scene on the timeline at this frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SceneNode {
    /// Scene id.
    pub id: String,
    /// Frames the scene occupies.
    pub window: FrameRange,
    /// Scene opacity in `[0, 1]`.
    pub opacity: f64,
    /// Evaluated body.
    pub content: ContentNode,
}

/// Evaluated scene body.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind")]
pub enum ContentNode {
    Prompt(PromptNode),
    Burst(BurstNode),
    Steps(StepsNode),
    Reveal(RevealNode),
}

/// Prompt box with a scale-in and blinking cursor.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PromptNode {
    pub title: String,
    pub prompt: String,
    /// Uniform scale of the prompt box.
    pub scale: f64,
    /// `scale` applied around the canvas center.
    pub transform: Affine,
    pub cursor_visible: bool,
    pub cursor_glyph: String,
}

/// Headline with its particle ring.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BurstNode {
    pub headline: String,
    /// Empty outside the burst window.
    pub particles: Vec<ParticleNode>,
}

/// One particle of a burst.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ParticleNode {
    pub index: u32,
    /// Direction of travel, `2*pi*index/count`.
    pub angle_rad: f64,
    /// Frame at which this particle starts moving.
    pub delay_frames: f64,
    /// Spring progress.
    pub progress: f64,
    /// Distance from the canvas center.
    pub distance_px: f64,
    pub position: Point,
    pub opacity: f64,
    pub scale: f64,
    pub size_px: f64,
    pub color: Hsl,
}

/// Checklist of workflow steps.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct StepsNode {
    pub heading: String,
    pub steps: Vec<StepNode>,
}

/// One checklist row.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct StepNode {
    pub label: String,
    pub progress: f64,
    pub opacity: f64,
    /// Horizontal offset from the resting position.
    pub offset_x: f64,
    /// Checkmark shown.
    pub done: bool,
}

/// Final result card.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RevealNode {
    pub heading: String,
    pub subtitle: String,
    pub tagline: String,
    pub scale: f64,
    pub rotation_deg: f64,
    /// Scale and rotation around the canvas center.
    pub transform: Affine,
    /// Angle of the rotating shine border, in `[0, 360)`.
    pub shine_rotation_deg: f64,
}
