//! Frame windows for image segments.
//!
//! Every segment is padded by one overlap's worth of frames and the next segment starts
//! one overlap before the padded end, so consecutive segments always share exactly
//! `transition_frames` frames for the transition to blend. Summing raw durations instead
//! would leave the transitions nothing to blend.

use crate::{
    composition::{
        model::{ImageSegment, VisualSource},
        settings::TimelineSettings,
    },
    foundation::{
        core::{Fps, FrameIndex, FrameWindow},
        math::round_to_i64,
        time::{ms_to_seconds, seconds_to_frames},
    },
};

/// Default end extension for the last visible segment, in milliseconds.
pub const DEFAULT_LAST_SEGMENT_PAD_MS: i64 = 2;

/// A segment with visual content and its place on the timeline.
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduledSegment<'a> {
    /// The input record.
    pub segment: &'a ImageSegment,
    /// What to draw.
    pub source: VisualSource,
    /// Frames during which it is drawn.
    pub window: FrameWindow,
}

/// Turns ordered segments into frame windows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentScheduler {
    /// Frame rate windows are computed in.
    pub fps: Fps,
    /// Overlap between consecutive segments; also the padding added to each segment.
    pub transition_frames: u64,
    /// End extension of the last visible segment.
    pub last_segment_pad_ms: i64,
}

impl SegmentScheduler {
    /// Scheduler with the default last-segment extension.
    pub fn new(fps: Fps, transition_frames: u64) -> Self {
        Self {
            fps,
            transition_frames,
            last_segment_pad_ms: DEFAULT_LAST_SEGMENT_PAD_MS,
        }
    }

    /// Scheduler configured from timeline settings.
    pub fn from_settings(settings: &TimelineSettings) -> Self {
        Self {
            fps: settings.fps,
            transition_frames: settings.transition_frames(),
            last_segment_pad_ms: settings.last_segment_pad_ms,
        }
    }

    /// Source-time span of `segment` in seconds, including the last-segment extension.
    pub fn span_secs(&self, segment: &ImageSegment, is_last: bool) -> f64 {
        let end_ms = if is_last {
            segment.end_ms.saturating_add(self.last_segment_pad_ms)
        } else {
            segment.end_ms
        };
        ms_to_seconds(end_ms) - ms_to_seconds(segment.start_ms)
    }

    /// On-screen duration: the rounded span plus one overlap of padding.
    pub fn duration_frames(&self, segment: &ImageSegment, is_last: bool) -> u64 {
        let span = round_to_i64(seconds_to_frames(
            self.span_secs(segment, is_last),
            self.fps,
        ));
        let span = if span < 0 {
            tracing::warn!(
                segment = %segment.id,
                start_ms = segment.start_ms,
                end_ms = segment.end_ms,
                "segment ends before it starts, clamping span to zero"
            );
            0
        } else {
            span as u64
        };
        span.saturating_add(self.transition_frames)
    }

    /// Schedule `segments` in the given order.
    ///
    /// Segments without an image or animation are skipped: they get no window and do not
    /// advance the offset of later segments. The last segment that does have a visual gets
    /// the end extension.
    pub fn schedule<'a>(&self, segments: &'a [ImageSegment]) -> Vec<ScheduledSegment<'a>> {
        let last_visible = segments
            .iter()
            .rposition(|s| s.visual_source().is_some());

        let mut out = Vec::with_capacity(segments.len());
        let mut accumulated_frames = 0u64;
        for (index, segment) in segments.iter().enumerate() {
            let Some(source) = segment.visual_source() else {
                tracing::debug!(segment = %segment.id, "segment has no visual source, skipping");
                continue;
            };

            let is_last = Some(index) == last_visible;
            let window = FrameWindow::new(
                FrameIndex(accumulated_frames),
                self.duration_frames(segment, is_last),
            );
            accumulated_frames = accumulated_frames
                .saturating_add(window.duration_frames.saturating_sub(self.transition_frames));

            out.push(ScheduledSegment {
                segment,
                source,
                window,
            });
        }
        out
    }
}

/// Schedule `segments` at `fps` with `transition_frames` of overlap and the default
/// last-segment extension.
pub fn schedule_segments(
    segments: &[ImageSegment],
    fps: Fps,
    transition_frames: u64,
) -> Vec<ScheduledSegment<'_>> {
    SegmentScheduler::new(fps, transition_frames).schedule(segments)
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/segments.rs"]
mod tests;
