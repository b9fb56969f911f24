use std::{fs::File, io::BufReader, path::Path};

use crate::{
    composition::settings::TimelineSettings,
    effects::{effect, effect::Effect, transitions, transitions::TransitionKind},
    foundation::error::{TubesleuthError, TubesleuthResult},
};

/// Everything needed to compose one video, as handed over by the data layer.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    /// Composition settings.
    #[serde(default)]
    pub settings: TimelineSettings,
    /// Image segments; sorted by start time during assembly.
    #[serde(default)]
    pub segments: Vec<ImageSegment>,
    /// Word-level transcript of the voiceover.
    #[serde(default)]
    pub captions: Vec<CaptionWord>,
    /// Voiceover audio URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voiceover: Option<String>,
    /// Background music URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub music: Option<String>,
    /// Length of the voiceover as reported by transcription.
    #[serde(
        default,
        alias = "audioDurationSecs",
        skip_serializing_if = "Option::is_none"
    )]
    pub audio_duration_secs: Option<f64>,
    /// Narration text; carried for the rendering surface, unused by scheduling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
}

impl Timeline {
    /// Parse a timeline from a JSON reader. Malformed JSON is a
    /// [`TubesleuthError::Serde`] error.
    pub fn from_reader<R: std::io::Read>(r: R) -> TubesleuthResult<Self> {
        Ok(serde_json::from_reader(r)?)
    }

    /// Parse a timeline from a JSON string.
    pub fn from_json_str(s: &str) -> TubesleuthResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Parse a timeline from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> TubesleuthResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            TubesleuthError::validation(format!("open timeline JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check the settings. Segment and caption records are best-effort data and are not
    /// rejected here; malformed ones degrade during scheduling.
    pub fn validate(&self) -> TubesleuthResult<()> {
        self.settings.validate()?;
        if let Some(d) = self.audio_duration_secs
            && !(d.is_finite() && d >= 0.0)
        {
            return Err(TubesleuthError::validation(
                "audio_duration_secs must be finite and >= 0 when set",
            ));
        }
        Ok(())
    }
}

/// One image or animation occupying a range of the narration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSegment {
    /// Record id; numeric ids are kept as their decimal text.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Still image URL.
    #[serde(default, alias = "src", skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    /// Looping video URL; wins over `source_url` when both are set.
    #[serde(default, alias = "animation", skip_serializing_if = "Option::is_none")]
    pub animation_url: Option<String>,
    /// Start in the narration, milliseconds.
    #[serde(alias = "start")]
    pub start_ms: i64,
    /// End in the narration, milliseconds.
    #[serde(alias = "end")]
    pub end_ms: i64,
    /// Camera effect; `None` when unset or unrecognized.
    #[serde(
        default,
        alias = "fx",
        deserialize_with = "effect::deserialize_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub effect: Option<Effect>,
    /// Transition into the next segment.
    #[serde(default, deserialize_with = "transitions::deserialize_lenient")]
    pub transition: TransitionKind,
}

/// What a segment shows.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualSource {
    /// Still image URL.
    Image(String),
    /// Looping video URL.
    Animation(String),
}

impl ImageSegment {
    /// Segment showing a still image.
    pub fn image(
        id: impl Into<String>,
        source_url: impl Into<String>,
        start_ms: i64,
        end_ms: i64,
    ) -> Self {
        Self {
            id: id.into(),
            source_url: Some(source_url.into()),
            animation_url: None,
            start_ms,
            end_ms,
            effect: None,
            transition: TransitionKind::default(),
        }
    }

    /// Set the camera effect.
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = Some(effect);
        self
    }

    /// Set the transition into the next segment.
    pub fn with_transition(mut self, transition: TransitionKind) -> Self {
        self.transition = transition;
        self
    }

    /// Attach a looping animation.
    pub fn with_animation(mut self, animation_url: impl Into<String>) -> Self {
        self.animation_url = Some(animation_url.into());
        self
    }

    /// The visual to render, preferring the animation. Blank URLs count as missing.
    pub fn visual_source(&self) -> Option<VisualSource> {
        fn present(url: &Option<String>) -> Option<&str> {
            url.as_deref().map(str::trim).filter(|u| !u.is_empty())
        }

        if let Some(url) = present(&self.animation_url) {
            return Some(VisualSource::Animation(url.to_string()));
        }
        present(&self.source_url).map(|url| VisualSource::Image(url.to_string()))
    }
}

/// One transcribed word.
///
/// Transcription services occasionally emit `end_ms < start_ms`; that is tolerated here
/// and handled by the caption scheduler.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionWord {
    /// Word as transcribed, punctuation included.
    pub text: String,
    /// Start, milliseconds.
    #[serde(alias = "start")]
    pub start_ms: i64,
    /// End, milliseconds.
    #[serde(alias = "end")]
    pub end_ms: i64,
}

impl CaptionWord {
    /// Word spoken from `start_ms` to `end_ms`.
    pub fn new(text: impl Into<String>, start_ms: i64, end_ms: i64) -> Self {
        Self {
            text: text.into(),
            start_ms,
            end_ms,
        }
    }
}

// Persisted ids are serial integers upstream; accept either form.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
    }

    Ok(match <RawId as serde::Deserialize>::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Int(n) => n.to_string(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
