//! Tubesleuth composes short-form videos from timed images and word-level transcripts.
//!
//! Given image segments, an optional looping animation per segment, and word timings from
//! transcription, this crate deterministically computes everything a rendering surface
//! needs to draw the video frame by frame: segment frame windows with transition overlap,
//! per-frame pan/zoom/drift transforms, transition states and caption reveals.
//!
//! # Pipeline overview
//!
//! 1. **Load**: `Timeline` from JSON (or [`TimelineBuilder`])
//! 2. **Assemble**: `Timeline -> RenderPlan` via [`assemble`] (segment and caption schedules)
//! 3. **Evaluate**: `RenderPlan + FrameIndex -> EvaluatedFrame` via [`Evaluator`]
//!
//! Every step after loading is pure: frames can be evaluated in any order and on any
//! thread. Malformed records degrade (clamped spans, skipped segments, one-frame captions)
//! instead of failing the whole composition.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod compile;
mod composition;
mod effects;
mod eval;
mod foundation;
mod schedule;

pub use animation::noise::noise1d;
pub use animation::spring::{CAPTION_REVEAL_SPRING, SpringConfig, spring};
pub use compile::plan::{
    AudioLayer, AudioRole, RenderPlan, TransitionEntry, VisualEntry, assemble,
};
pub use composition::dsl::TimelineBuilder;
pub use composition::model::{CaptionWord, ImageSegment, Timeline, VisualSource};
pub use composition::settings::TimelineSettings;
pub use effects::effect::Effect;
pub use effects::params::EffectParameters;
pub use effects::transform::{Transform, TranslateUnit, compute_transform, move_about};
pub use effects::transitions::{
    LayerPresentation, SlideDirection, TransitionKind, TransitionState, resolve_transition,
};
pub use eval::evaluator::{EvaluatedCaption, EvaluatedFrame, EvaluatedVisual, Evaluator};
pub use foundation::core::{Affine, Canvas, Fps, FrameIndex, FrameRange, FrameWindow, Size, Vec2};
pub use foundation::error::{TubesleuthError, TubesleuthResult};
pub use foundation::math::round_half_up;
pub use foundation::time::{ms_to_frames, ms_to_seconds, seconds_to_frames};
pub use schedule::captions::{
    CAPTION_PUNCTUATION, ScheduledCaption, caption_scale, caption_window, schedule_captions,
    strip_punctuation,
};
pub use schedule::segments::{
    DEFAULT_LAST_SEGMENT_PAD_MS, ScheduledSegment, SegmentScheduler, schedule_segments,
};
