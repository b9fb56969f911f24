use crate::foundation::{
    core::{Canvas, Fps},
    error::{TubesleuthError, TubesleuthResult},
};

/// Fixed knobs of a composition pass.
///
/// Every field has a default, so an empty JSON object is a valid configuration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimelineSettings {
    /// Timeline frame rate.
    #[serde(default)]
    pub fps: Fps,
    /// Output dimensions, passed through to the rendering surface.
    #[serde(default)]
    pub canvas: Canvas,
    /// Overlap between consecutive segments, in frames. `None` means one second.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_frames: Option<u64>,
    /// Extension of the last visible segment's end so the final audio frame is covered.
    #[serde(default = "default_last_segment_pad_ms")]
    pub last_segment_pad_ms: i64,
    /// Silence kept after the voiceover when sizing the composition.
    #[serde(default = "default_tail_secs")]
    pub tail_secs: f64,
    /// Upper bound on the composition length; `None` disables the cap.
    #[serde(default = "default_max_duration_secs")]
    pub max_duration_secs: Option<f64>,
    /// Background music gain.
    #[serde(default = "default_music_volume")]
    pub music_volume: f32,
    /// Voiceover gain.
    #[serde(default = "default_voiceover_volume")]
    pub voiceover_volume: f32,
}

fn default_last_segment_pad_ms() -> i64 {
    2
}

fn default_tail_secs() -> f64 {
    2.0
}

fn default_max_duration_secs() -> Option<f64> {
    Some(60.0)
}

fn default_music_volume() -> f32 {
    0.2
}

fn default_voiceover_volume() -> f32 {
    1.0
}

impl Default for TimelineSettings {
    fn default() -> Self {
        Self {
            fps: Fps::default(),
            canvas: Canvas::default(),
            transition_frames: None,
            last_segment_pad_ms: default_last_segment_pad_ms(),
            tail_secs: default_tail_secs(),
            max_duration_secs: default_max_duration_secs(),
            music_volume: default_music_volume(),
            voiceover_volume: default_voiceover_volume(),
        }
    }
}

impl TimelineSettings {
    /// Overlap in frames, resolving the one-second default.
    pub fn transition_frames(&self) -> u64 {
        self.transition_frames
            .unwrap_or_else(|| self.fps.one_second_frames())
    }

    /// Reject settings no composition can be built from.
    pub fn validate(&self) -> TubesleuthResult<()> {
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(TubesleuthError::validation(
                "fps must have num>0 and den>0",
            ));
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(TubesleuthError::validation(
                "canvas width/height must be > 0",
            ));
        }
        if !self.tail_secs.is_finite() || self.tail_secs < 0.0 {
            return Err(TubesleuthError::validation(
                "tail_secs must be finite and >= 0",
            ));
        }
        if let Some(max) = self.max_duration_secs
            && !(max.is_finite() && max > 0.0)
        {
            return Err(TubesleuthError::validation(
                "max_duration_secs must be finite and > 0 when set",
            ));
        }
        for (name, v) in [
            ("music_volume", self.music_volume),
            ("voiceover_volume", self.voiceover_volume),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(TubesleuthError::validation(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/settings.rs"]
mod tests;
