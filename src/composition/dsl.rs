use std::collections::BTreeSet;

use crate::{
    composition::{
        model::{CaptionWord, ImageSegment, Timeline},
        settings::TimelineSettings,
    },
    foundation::{
        core::{Canvas, Fps},
        error::{TubesleuthError, TubesleuthResult},
    },
};

/// Programmatic construction of a [`Timeline`].
pub struct TimelineBuilder {
    settings: TimelineSettings,
    segments: Vec<ImageSegment>,
    segment_ids: BTreeSet<String>,
    captions: Vec<CaptionWord>,
    voiceover: Option<String>,
    music: Option<String>,
    audio_duration_secs: Option<f64>,
    script: Option<String>,
}

impl Default for TimelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TimelineBuilder {
    /// Empty timeline with default settings.
    pub fn new() -> Self {
        Self {
            settings: TimelineSettings::default(),
            segments: Vec::new(),
            segment_ids: BTreeSet::new(),
            captions: Vec::new(),
            voiceover: None,
            music: None,
            audio_duration_secs: None,
            script: None,
        }
    }

    /// Replace all settings.
    pub fn settings(mut self, settings: TimelineSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Set the frame rate.
    pub fn fps(mut self, fps: Fps) -> Self {
        self.settings.fps = fps;
        self
    }

    /// Set the output dimensions.
    pub fn canvas(mut self, canvas: Canvas) -> Self {
        self.settings.canvas = canvas;
        self
    }

    /// Set the overlap between consecutive segments.
    pub fn transition_frames(mut self, frames: u64) -> Self {
        self.settings.transition_frames = Some(frames);
        self
    }

    /// Append a segment; ids must be unique.
    pub fn segment(mut self, segment: ImageSegment) -> TubesleuthResult<Self> {
        if !self.segment_ids.insert(segment.id.clone()) {
            return Err(TubesleuthError::validation(format!(
                "duplicate segment id '{}'",
                segment.id
            )));
        }
        self.segments.push(segment);
        Ok(self)
    }

    /// Append one caption word.
    pub fn caption(mut self, word: CaptionWord) -> Self {
        self.captions.push(word);
        self
    }

    /// Append one caption per `(text, start_ms, end_ms)` triple.
    pub fn captions<'a>(mut self, words: impl IntoIterator<Item = (&'a str, i64, i64)>) -> Self {
        self.captions.extend(
            words
                .into_iter()
                .map(|(text, start, end)| CaptionWord::new(text, start, end)),
        );
        self
    }

    /// Set the voiceover URL.
    pub fn voiceover(mut self, url: impl Into<String>) -> Self {
        self.voiceover = Some(url.into());
        self
    }

    /// Set the background music URL.
    pub fn music(mut self, url: impl Into<String>) -> Self {
        self.music = Some(url.into());
        self
    }

    /// Set the voiceover length, which sizes the composition.
    pub fn audio_duration_secs(mut self, secs: f64) -> Self {
        self.audio_duration_secs = Some(secs);
        self
    }

    /// Set the narration text.
    pub fn script(mut self, script: impl Into<String>) -> Self {
        self.script = Some(script.into());
        self
    }

    /// Validate and return the timeline.
    pub fn build(self) -> TubesleuthResult<Timeline> {
        let timeline = Timeline {
            settings: self.settings,
            segments: self.segments,
            captions: self.captions,
            voiceover: self.voiceover,
            music: self.music,
            audio_duration_secs: self.audio_duration_secs,
            script: self.script,
        };
        timeline.validate()?;
        Ok(timeline)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/dsl.rs"]
mod tests;
