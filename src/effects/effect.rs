use std::str::FromStr;

use crate::foundation::error::{TubesleuthError, TubesleuthResult};

/// Named camera motion applied to a still image.
///
/// This is a closed set: dispatch over it is an exhaustive `match`, and names that do not
/// parse become "no effect" (identity) at the input boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Effect {
    /// Ease into a 10% zoom.
    ZoomIn,
    /// Start 10% zoomed and ease back to identity.
    ZoomOut,
    /// Slide left by up to 10%.
    PanLeft,
    /// Slide right by up to 10%.
    PanRight,
    /// Slide up by up to 10%.
    PanUp,
    /// Slide down by up to 10%.
    PanDown,
    /// Noise-driven organic drift.
    MoveAbout,
    /// Persisted default name for [`Effect::MoveAbout`].
    MoveAround,
    /// Premium depth animation: horizontal sway.
    Horizontal,
    /// Premium depth animation: vertical sway.
    Vertical,
    /// Premium depth animation: circular orbit.
    Circle,
    /// Premium depth animation: perspective shift.
    Perspective,
    /// Premium depth animation: dolly zoom.
    Zoom,
}

impl Effect {
    /// Every effect, in declaration order.
    pub const ALL: [Effect; 13] = [
        Effect::ZoomIn,
        Effect::ZoomOut,
        Effect::PanLeft,
        Effect::PanRight,
        Effect::PanUp,
        Effect::PanDown,
        Effect::MoveAbout,
        Effect::MoveAround,
        Effect::Horizontal,
        Effect::Vertical,
        Effect::Circle,
        Effect::Perspective,
        Effect::Zoom,
    ];

    /// Canonical stored name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ZoomIn => "ZoomIn",
            Self::ZoomOut => "ZoomOut",
            Self::PanLeft => "PanLeft",
            Self::PanRight => "PanRight",
            Self::PanUp => "PanUp",
            Self::PanDown => "PanDown",
            Self::MoveAbout => "MoveAbout",
            Self::MoveAround => "MoveAround",
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
            Self::Circle => "circle",
            Self::Perspective => "perspective",
            Self::Zoom => "zoom",
        }
    }

    /// Parse an effect name.
    ///
    /// Matching ignores ASCII case as well as `-`, `_` and spaces, so `"move-about"`,
    /// `"moveAbout"` and `"MoveAbout"` are the same effect.
    pub fn parse(name: &str) -> Option<Self> {
        let key: String = name
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let effect = match key.as_str() {
            "zoomin" => Self::ZoomIn,
            "zoomout" => Self::ZoomOut,
            "panleft" => Self::PanLeft,
            "panright" => Self::PanRight,
            "panup" => Self::PanUp,
            "pandown" => Self::PanDown,
            "moveabout" => Self::MoveAbout,
            "movearound" => Self::MoveAround,
            "horizontal" => Self::Horizontal,
            "vertical" => Self::Vertical,
            "circle" => Self::Circle,
            "perspective" => Self::Perspective,
            "zoom" => Self::Zoom,
            _ => return None,
        };
        Some(effect)
    }

    /// `true` for the depth animations produced by the external animation service.
    pub fn is_premium(self) -> bool {
        matches!(
            self,
            Self::Horizontal | Self::Vertical | Self::Circle | Self::Perspective | Self::Zoom
        )
    }
}

impl std::fmt::Display for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Effect {
    type Err = TubesleuthError;

    fn from_str(s: &str) -> TubesleuthResult<Self> {
        Self::parse(s)
            .ok_or_else(|| TubesleuthError::validation(format!("unknown effect '{}'", s.trim())))
    }
}

impl serde::Serialize for Effect {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for Effect {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Field deserializer for input records: unknown names fall back to "no effect".
pub(crate) fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<Effect>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = <Option<String> as serde::Deserialize>::deserialize(deserializer)?;
    Ok(raw.and_then(|name| {
        if name.trim().is_empty() {
            return None;
        }
        let parsed = Effect::parse(&name);
        if parsed.is_none() {
            tracing::warn!(effect = %name, "unrecognized effect, using identity transform");
        }
        parsed
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/effects/effect.rs"]
mod tests;
