//! Render plan assembly.
//!
//! Segment windows and caption windows are computed independently and only share the
//! frame axis; neither stream adjusts the other.

use crate::{
    composition::model::{Timeline, VisualSource},
    effects::{
        effect::Effect,
        params::EffectParameters,
        transform::{Transform, compute_transform},
        transitions::{TransitionKind, TransitionState, resolve_transition},
    },
    foundation::{
        core::{Canvas, Fps, FrameIndex, FrameWindow},
        math::{non_negative, round_to_i64},
        time::seconds_to_frames,
    },
    schedule::{
        captions::{ScheduledCaption, schedule_captions},
        segments::SegmentScheduler,
    },
};

/// Everything a rendering surface needs to draw a composition frame by frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenderPlan {
    /// Frame rate every window is expressed in.
    pub fps: Fps,
    /// Output dimensions.
    pub canvas: Canvas,
    /// Total length of the composition.
    pub duration_frames: u64,
    /// Visual elements in painter's order (later entries draw on top).
    pub visuals: Vec<VisualEntry>,
    /// Hand-overs between consecutive visuals.
    pub transitions: Vec<TransitionEntry>,
    /// Caption words, independent of the visuals.
    pub captions: Vec<ScheduledCaption>,
    /// Audio tracks to mix under the visuals.
    pub audio: Vec<AudioLayer>,
}

/// One image or animation with its frame window.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VisualEntry {
    /// Id of the source segment.
    pub segment_id: String,
    /// Image or animation to draw.
    pub source: VisualSource,
    /// Camera effect; ignored for animations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<Effect>,
    /// Frames during which the element is drawn.
    pub window: FrameWindow,
    /// Depth-animation parameters for premium camera effects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_params: Option<EffectParameters>,
}

impl VisualEntry {
    /// Transform of this element at `frame`. Animations always play untransformed.
    pub fn transform_at(&self, frame: FrameIndex) -> Transform {
        match self.source {
            VisualSource::Animation(_) => Transform::IDENTITY,
            VisualSource::Image(_) => compute_transform(
                self.effect,
                frame,
                self.window.start,
                self.window.duration_frames,
            ),
        }
    }
}

/// Transition from `visuals[from]` to `visuals[to]` over the frames they share.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransitionEntry {
    /// Blend to play.
    pub kind: TransitionKind,
    /// Overlap frames; starts where the entering visual starts.
    pub window: FrameWindow,
    /// Index of the exiting visual in [`RenderPlan::visuals`].
    pub from: usize,
    /// Index of the entering visual in [`RenderPlan::visuals`].
    pub to: usize,
}

impl TransitionEntry {
    /// Transition state at `frame`, or `None` outside the overlap.
    pub fn state_at(&self, frame: FrameIndex) -> Option<TransitionState> {
        resolve_transition(self.kind, self.window, frame)
    }
}

/// What an audio layer carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioRole {
    /// Narration from the TTS service.
    Voiceover,
    /// Background music.
    Music,
}

/// An audio track played from frame zero for the whole composition.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AudioLayer {
    /// What the layer carries.
    pub role: AudioRole,
    /// Audio URL.
    pub source: String,
    /// Linear gain.
    pub volume: f32,
}

/// Merge segment and caption schedules into a [`RenderPlan`].
///
/// Segments are stably sorted by start time first, so records sharing a start keep their
/// input order. When the audio-derived duration runs past the last visual, that visual's
/// window is extended to the end so no frame is left blank. Never fails: malformed records
/// degrade as described on the schedulers.
#[tracing::instrument(skip(timeline), fields(segments = timeline.segments.len(), captions = timeline.captions.len()))]
pub fn assemble(timeline: &Timeline) -> RenderPlan {
    let settings = &timeline.settings;
    let fps = settings.fps;

    let mut segments = timeline.segments.clone();
    segments.sort_by_key(|s| s.start_ms);

    let scheduler = SegmentScheduler::from_settings(settings);
    let scheduled = scheduler.schedule(&segments);

    let mut transitions = Vec::new();
    if scheduler.transition_frames > 0 {
        for (from, pair) in scheduled.windows(2).enumerate() {
            transitions.push(TransitionEntry {
                kind: pair[0].segment.transition,
                window: FrameWindow::new(pair[1].window.start, scheduler.transition_frames),
                from,
                to: from + 1,
            });
        }
    }

    let mut visuals: Vec<VisualEntry> = scheduled
        .into_iter()
        .map(|s| VisualEntry {
            segment_id: s.segment.id.clone(),
            source: s.source,
            effect: s.segment.effect,
            window: s.window,
            animation_params: s.segment.effect.and_then(EffectParameters::for_effect),
        })
        .collect();

    let captions = schedule_captions(&timeline.captions, fps);

    let mut audio = Vec::new();
    if let Some(src) = &timeline.voiceover {
        audio.push(AudioLayer {
            role: AudioRole::Voiceover,
            source: src.clone(),
            volume: settings.voiceover_volume,
        });
    }
    if let Some(src) = &timeline.music {
        audio.push(AudioLayer {
            role: AudioRole::Music,
            source: src.clone(),
            volume: settings.music_volume,
        });
    }

    let duration_frames = match timeline.audio_duration_secs {
        Some(audio_secs) => {
            let mut secs = audio_secs + settings.tail_secs;
            if let Some(max) = settings.max_duration_secs {
                secs = secs.min(max);
            }
            non_negative(round_to_i64(seconds_to_frames(secs, fps)))
        }
        None => visuals
            .iter()
            .map(|v| v.window.end().0)
            .chain(captions.iter().map(|c| c.window.end().0))
            .max()
            .unwrap_or(0),
    };

    // The voiceover tail can outlast the segments; the last visual holds until the end.
    if let Some(last) = visuals.last_mut()
        && last.window.end().0 < duration_frames
    {
        let held = duration_frames - last.window.start.0;
        tracing::debug!(
            segment = %last.segment_id,
            from = last.window.duration_frames,
            to = held,
            "extending last visual to composition end"
        );
        last.window = FrameWindow::new(last.window.start, held);
    }

    tracing::debug!(
        visuals = visuals.len(),
        transitions = transitions.len(),
        duration_frames,
        "assembled render plan"
    );

    RenderPlan {
        fps,
        canvas: settings.canvas,
        duration_frames,
        visuals,
        transitions,
        captions,
        audio,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/plan.rs"]
mod tests;
