use crate::{
    animation::spring::{CAPTION_REVEAL_SPRING, spring},
    composition::model::CaptionWord,
    foundation::{
        core::{Fps, FrameIndex, FrameWindow},
        math::non_negative,
        time::ms_to_frames,
    },
};

/// Characters removed from caption text before display.
pub const CAPTION_PUNCTUATION: &[char] = &[
    '.', ',', '-', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '_', '`',
    '~', '(', ')',
];

/// Remove [`CAPTION_PUNCTUATION`] from `text`. Idempotent.
pub fn strip_punctuation(text: &str) -> String {
    text.chars()
        .filter(|c| !CAPTION_PUNCTUATION.contains(c))
        .collect()
}

/// A caption word ready for display.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScheduledCaption {
    /// Word with punctuation stripped. May be empty; it still occupies its window.
    pub text: String,
    /// Frames during which the word is shown.
    pub window: FrameWindow,
}

impl ScheduledCaption {
    /// Reveal scale of this word at `frame`.
    pub fn scale_at(&self, frame: FrameIndex, fps: Fps) -> f64 {
        caption_scale(self.window, frame, fps)
    }
}

/// Frame window of one word. Never shorter than one frame.
pub fn caption_window(word: &CaptionWord, fps: Fps) -> FrameWindow {
    let start = ms_to_frames(word.start_ms, fps);
    let end = ms_to_frames(word.end_ms, fps);
    let span = end.saturating_sub(start);
    if span < 1 {
        tracing::debug!(
            word = %word.text,
            start_ms = word.start_ms,
            end_ms = word.end_ms,
            "caption word shorter than one frame, clamping"
        );
    }
    FrameWindow::new(FrameIndex(non_negative(start)), non_negative(span.max(1)))
}

/// Schedule every word independently of the others and of the image segments.
pub fn schedule_captions(words: &[CaptionWord], fps: Fps) -> Vec<ScheduledCaption> {
    words
        .iter()
        .map(|word| ScheduledCaption {
            text: strip_punctuation(&word.text),
            window: caption_window(word, fps),
        })
        .collect()
}

/// Spring-driven pop-in for a word: `0` at the first frame of its window, settling at `1`.
///
/// Frames outside the window sample the spring at its start.
pub fn caption_scale(window: FrameWindow, frame: FrameIndex, fps: Fps) -> f64 {
    let local = window.local_frame(frame);
    let local = if window.contains(frame) { local } else { 0 };
    spring(local as f64, fps, CAPTION_REVEAL_SPRING)
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/captions.rs"]
mod tests;
