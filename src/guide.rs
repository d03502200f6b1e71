//! # promptreel guide
//!
//! A walkthrough of the timeline model and the public API. For commands, see the repository
//! `README.md`.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`Composition`](crate::Composition): output contract (id, fps, canvas, duration) plus the
//!   background, glow orbs and an ordered list of scenes
//! - [`SceneSpec`](crate::SceneSpec): a window on the timeline with entry/exit fades and a body
//!   ([`SceneContent`](crate::SceneContent))
//! - [`Evaluator`](crate::Evaluator): turns `(composition, frame)` into a
//!   [`RenderTree`](crate::RenderTree)
//! - [`Registry`](crate::Registry): compositions known by id, seeded with the built-in presets
//!
//! Nothing in the evaluator keeps state between frames. Frames may be evaluated in any order, on
//! any thread, any number of times, and always produce the same tree.
//!
//! ---
//!
//! ## Timeline rules
//!
//! A scene's window starts at `fade_in.start` and ends at `fade_out.end` (or the composition
//! duration for a final scene without an exit fade). A composition is valid when:
//!
//! - the first scene starts at frame 0 and the last one ends at `duration`
//! - scene starts strictly increase
//! - each scene starts no later than the previous one ends (overlaps are cross-fades)
//! - every fade has `start < end` and stays inside the composition
//!
//! [`Composition::validate`](crate::Composition::validate) checks all of this.
//! [`Evaluator::eval_frame`](crate::Evaluator::eval_frame) validates before evaluating. Frames at
//! or past `duration` are evaluated as the last frame.
//!
//! Scene opacity is `min(entry, exit)`, where entry ramps `0 -> 1` across `fade_in` and exit ramps
//! `1 -> 0` across `fade_out`.
//!
//! ---
//!
//! ## Animation primitives
//!
//! - [`Interp`](crate::Interp): multi-knot piecewise-linear mapping, clamped on both sides unless
//!   [`Extrapolate`](crate::Extrapolate) says otherwise, with an optional [`Ease`](crate::Ease)
//! - [`SpringConfig::progress`](crate::SpringConfig::progress): closed-form damped spring from `0`
//!   toward `1`; `0` at or before its start frame
//! - [`measure_spring`](crate::measure_spring): frames until a spring settles
//! - [`fade_in_out`](crate::fade_in_out), [`blink`](crate::blink),
//!   [`wrap_degrees`](crate::wrap_degrees)
//!
//! Element motion is always "spring progress, then interpolate": the prompt box scales
//! `0.5 -> 1`, the reveal card scales `0.3 -> 1` while rotating `180° -> 0°`.
//!
//! ---
//!
//! ## Scene bodies
//!
//! - `Prompt`: title, prompt text, scale-in, cursor visible on even `floor(frame / period)`
//! - `Burst`: headline plus a ring of particles alive in `[frame, frame + duration)`; particle `i`
//!   of `N` flies along `2*pi*i/N` from the canvas center, starting `i * stagger` frames late
//! - `Steps`: checklist rows sliding in one after another
//! - `Reveal`: result card with a shine border turning at a fixed speed
//!
//! ---
//!
//! ## Ranges and fingerprints
//!
//! [`eval_frames_with_stats`](crate::eval_frames_with_stats) evaluates a range in chunks, on the
//! calling thread or on a rayon pool ([`EvalThreading`](crate::EvalThreading)). Output order is
//! frame order either way.
//!
//! [`fingerprint_tree`](crate::fingerprint_tree) hashes a tree with xxh3-128. The frame index is
//! left out, so two frames that look the same share a fingerprint;
//! [`EvalStats::frames_unique`](crate::EvalStats) counts the distinct ones.
//!
//! ---
//!
//! ## Example
//!
//! ```
//! use promptreel::{Evaluator, FrameIndex, Registry, presets};
//!
//! let registry = Registry::builtin()?;
//! let comp = registry.require(presets::PROMPT_TO_VIDEO)?;
//! let tree = Evaluator::eval_frame(comp, FrameIndex(100))?;
//! assert_eq!(tree.scenes[0].id, "burst");
//! # Ok::<(), promptreel::ReelError>(())
//! ```
