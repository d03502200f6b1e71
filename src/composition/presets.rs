//! Built-in compositions for the prompt-to-workflow video.
//!
//! All three share one timeline shape; they differ in scene count, duration and canvas.

use crate::{
    animation::spring::SpringConfig,
    composition::dsl::{CompositionBuilder, SceneBuilder, burst, glow_orb, prompt, reveal, steps},
    composition::model::{Composition, SceneContent},
    foundation::color::Color,
    foundation::core::{Canvas, Fps, FrameIndex, Vec2},
    foundation::error::{ReelError, ReelResult},
};

/// 300 frames, 30 fps, 1920x1080; three scenes.
pub const PROMPT_TO_VIDEO: &str = "PromptToVideo";
/// 450 frames, 30 fps, 1920x1080; four scenes.
pub const PROMPT_TO_WORKFLOW: &str = "PromptToWorkflow";
/// 450 frames, 30 fps, 1080x1080; four scenes.
pub const PROMPT_TO_WORKFLOW_SQUARE: &str = "PromptToWorkflowSquare";

const TITLE: &str = "Scrum Master Daily Tasks";
const PROMPT: &str = "\"Sprint Review Prep\"";
const HEADLINE: &str = "\u{26a1} AUTOMATE \u{26a1}";
const HEADING: &str = "AUTOMATED";
const SUBTITLE: &str = "Sprint Review Workflow";
const TAGLINE: &str = "Clear Feedback. Visible Decisions.";

fn hex(s: &str) -> ReelResult<Color> {
    Color::from_hex(s).map_err(ReelError::validation)
}

fn with_orbs(b: CompositionBuilder) -> ReelResult<CompositionBuilder> {
    Ok(b.orb(glow_orb(Vec2::new(0.2, 0.3), 400.0, hex("#10b981")?, 0.0))
        .orb(glow_orb(Vec2::new(0.8, 0.7), 500.0, hex("#34d399")?, 15.0))
        .orb(glow_orb(Vec2::new(0.5, 0.5), 600.0, hex("#059669")?, 30.0)))
}

fn reveal_spring() -> SpringConfig {
    SpringConfig::new(80.0, 0.8)
}

/// Three-scene, 300-frame landscape cut.
pub fn prompt_to_video() -> ReelResult<Composition> {
    let b = CompositionBuilder::new(
        PROMPT_TO_VIDEO,
        Fps::new(30, 1)?,
        Canvas {
            width: 1920,
            height: 1080,
        },
        FrameIndex(300),
    );
    with_orbs(b)?
        .scene(
            SceneBuilder::new("prompt", 0, 20)
                .fade_out(70, 90)
                .content(SceneContent::Prompt(prompt(TITLE, PROMPT))),
        )?
        .scene(
            SceneBuilder::new("burst", 85, 105)
                .fade_out(140, 160)
                .content(SceneContent::Burst(burst(HEADLINE, 95))),
        )?
        .scene(
            SceneBuilder::new("reveal", 150, 180).content(SceneContent::Reveal(reveal(
                HEADING,
                SUBTITLE,
                TAGLINE,
                160.0,
                reveal_spring(),
            ))),
        )?
        .build()
}

fn workflow(id: &str, canvas: Canvas) -> ReelResult<Composition> {
    let b = CompositionBuilder::new(id, Fps::new(30, 1)?, canvas, FrameIndex(450));
    with_orbs(b)?
        .scene(
            SceneBuilder::new("prompt", 0, 20)
                .fade_out(100, 120)
                .content(SceneContent::Prompt(prompt(TITLE, PROMPT))),
        )?
        .scene(
            SceneBuilder::new("burst", 115, 135)
                .fade_out(180, 200)
                .content(SceneContent::Burst(burst(HEADLINE, 125))),
        )?
        .scene(
            SceneBuilder::new("steps", 190, 210)
                .fade_out(290, 310)
                .content(SceneContent::Steps(steps(
                    "Your Workflow",
                    [
                        "Collect sprint tickets",
                        "Summarize completed work",
                        "Draft review agenda",
                        "Share with stakeholders",
                    ],
                    200.0,
                    18.0,
                ))),
        )?
        .scene(
            SceneBuilder::new("reveal", 300, 330).content(SceneContent::Reveal(reveal(
                HEADING,
                SUBTITLE,
                TAGLINE,
                310.0,
                reveal_spring(),
            ))),
        )?
        .build()
}

/// Four-scene, 450-frame landscape cut.
pub fn prompt_to_workflow() -> ReelResult<Composition> {
    workflow(
        PROMPT_TO_WORKFLOW,
        Canvas {
            width: 1920,
            height: 1080,
        },
    )
}

/// Four-scene, 450-frame square cut.
pub fn prompt_to_workflow_square() -> ReelResult<Composition> {
    workflow(
        PROMPT_TO_WORKFLOW_SQUARE,
        Canvas {
            width: 1080,
            height: 1080,
        },
    )
}

#[cfg(test)]
#[path = "../../tests/unit/composition/presets.rs"]
mod tests;
