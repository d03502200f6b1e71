//! promptreel evaluates the prompt-to-workflow motion graphic one frame at a time.
//!
//! Every frame is a pure function of a [`Composition`] and a [`FrameIndex`]:
//!
//! - Build a composition from a preset ([`Registry::builtin`]), the builder DSL
//!   ([`CompositionBuilder`]) or JSON ([`Composition::from_json_str`])
//! - Evaluate a frame with [`Evaluator::eval_frame`] into a [`RenderTree`]
//! - Evaluate ranges, optionally in parallel, with [`eval_frames_with_stats`]
//!
//! Drawing the tree is left to the host. See [`guide`] for the full walkthrough.
#![forbid(unsafe_code)]

mod animation;
mod composition;
mod eval;
mod foundation;
mod pipeline;

pub mod guide;

pub use crate::foundation::color::{Color, Hsl};
pub use crate::foundation::core::{
    Affine, Canvas, Fps, FrameIndex, FrameRange, Point, Transform2D, Vec2,
};
pub use crate::foundation::error::{ReelError, ReelResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::interpolate::{Extrapolate, Interp, interpolate};
pub use crate::animation::ops::{blink, fade_in_out, stagger, wrap_degrees};
pub use crate::animation::spring::{SpringConfig, measure_spring, spring};

pub use crate::composition::dsl::{
    CompositionBuilder, SceneBuilder, burst, glow_orb, prompt, reveal, steps,
};
pub use crate::composition::model::{
    BackgroundSpec, BurstSpec, Composition, CursorSpec, FadeSpec, GlowOrbSpec, GradientStop,
    MotionSpec, PromptSpec, RevealSpec, SceneContent, SceneSpec, StepsSpec, ValueRange,
};
/// Built-in compositions and their ids.
pub use crate::composition::presets;
pub use crate::composition::registry::Registry;

pub use crate::eval::evaluator::Evaluator;
pub use crate::eval::tree::{
    BackgroundNode, BurstNode, ContentNode, OrbNode, ParticleNode, PromptNode, RenderTree,
    RevealNode, SceneNode, StepNode, StepsNode,
};

pub use crate::pipeline::fingerprint::{FrameFingerprint, fingerprint_sequence, fingerprint_tree};
pub use crate::pipeline::frames::{
    EvalStats, EvalThreading, digest_range, eval_frames, eval_frames_with_stats,
    fingerprint_range,
};
