use std::str::FromStr;

use crate::foundation::{
    core::{FrameIndex, FrameWindow, Vec2},
    error::{TubesleuthError, TubesleuthResult},
};

/// Direction both layers move during a slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum SlideDirection {
    /// Towards negative x.
    Left,
    /// Towards positive x.
    Right,
    /// Towards negative y.
    Up,
    /// Towards positive y.
    Down,
}

/// Blend played while one segment hands over to the next.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    /// Cross-fade: the entering layer fades in over the exiting one.
    #[default]
    Fade,
    /// Both layers move together in `direction`; the entering one comes in from the
    /// opposite side.
    Slide(SlideDirection),
}

impl TransitionKind {
    /// Every transition, in declaration order.
    pub const ALL: [TransitionKind; 5] = [
        TransitionKind::Fade,
        TransitionKind::Slide(SlideDirection::Left),
        TransitionKind::Slide(SlideDirection::Right),
        TransitionKind::Slide(SlideDirection::Up),
        TransitionKind::Slide(SlideDirection::Down),
    ];

    /// Canonical stored name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fade => "fade",
            Self::Slide(SlideDirection::Left) => "slideLeft",
            Self::Slide(SlideDirection::Right) => "slideRight",
            Self::Slide(SlideDirection::Up) => "slideUp",
            Self::Slide(SlideDirection::Down) => "slideDown",
        }
    }

    /// Parse a transition name, ignoring ASCII case, `-`, `_` and spaces.
    pub fn parse(name: &str) -> Option<Self> {
        let key: String = name
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "fade" | "crossfade" => Some(Self::Fade),
            "slideleft" => Some(Self::Slide(SlideDirection::Left)),
            "slideright" => Some(Self::Slide(SlideDirection::Right)),
            "slideup" => Some(Self::Slide(SlideDirection::Up)),
            "slidedown" => Some(Self::Slide(SlideDirection::Down)),
            _ => None,
        }
    }
}

impl std::fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransitionKind {
    type Err = TubesleuthError;

    fn from_str(s: &str) -> TubesleuthResult<Self> {
        Self::parse(s).ok_or_else(|| {
            TubesleuthError::validation(format!("unknown transition kind '{}'", s.trim()))
        })
    }
}

impl serde::Serialize for TransitionKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for TransitionKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Field deserializer for input records: missing or unknown names become [`TransitionKind::Fade`].
pub(crate) fn deserialize_lenient<'de, D>(deserializer: D) -> Result<TransitionKind, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = <Option<String> as serde::Deserialize>::deserialize(deserializer)?;
    let Some(name) = raw.filter(|n| !n.trim().is_empty()) else {
        return Ok(TransitionKind::default());
    };
    Ok(TransitionKind::parse(&name).unwrap_or_else(|| {
        tracing::warn!(transition = %name, "unrecognized transition, using fade");
        TransitionKind::default()
    }))
}

/// How one layer is presented during a transition.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayerPresentation {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Offset in percent of the canvas, applied on top of the layer's own transform.
    pub offset_percent: Vec2,
}

impl LayerPresentation {
    /// Fully visible, not offset.
    pub const OPAQUE: LayerPresentation = LayerPresentation {
        opacity: 1.0,
        offset_percent: Vec2::ZERO,
    };

    /// Stack `other` on top of `self`: opacities multiply, offsets add.
    ///
    /// Used when a short layer is entering and exiting at the same frame.
    pub fn combine(self, other: LayerPresentation) -> Self {
        Self {
            opacity: self.opacity * other.opacity,
            offset_percent: self.offset_percent + other.offset_percent,
        }
    }
}

/// Transition state for one frame of an overlap window.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransitionState {
    /// Transition being played.
    pub kind: TransitionKind,
    /// Linear progress in `[0, 1]`; reaches `1` on the last frame of the window.
    pub progress: f64,
    /// The segment being handed over to.
    pub entering: LayerPresentation,
    /// The segment being left.
    pub exiting: LayerPresentation,
}

/// Resolve `kind` at `frame`, or `None` when `frame` is outside the overlap `window`.
pub fn resolve_transition(
    kind: TransitionKind,
    window: FrameWindow,
    frame: FrameIndex,
) -> Option<TransitionState> {
    if !window.contains(frame) {
        return None;
    }

    let denom = window.duration_frames.saturating_sub(1);
    let progress = if denom == 0 {
        1.0
    } else {
        (window.local_frame(frame) as f64 / denom as f64).clamp(0.0, 1.0)
    };

    let (entering, exiting) = match kind {
        TransitionKind::Fade => (
            LayerPresentation {
                opacity: progress,
                offset_percent: Vec2::ZERO,
            },
            LayerPresentation::OPAQUE,
        ),
        TransitionKind::Slide(dir) => {
            let axis = match dir {
                SlideDirection::Left => Vec2::new(-1.0, 0.0),
                SlideDirection::Right => Vec2::new(1.0, 0.0),
                SlideDirection::Up => Vec2::new(0.0, -1.0),
                SlideDirection::Down => Vec2::new(0.0, 1.0),
            };
            (
                LayerPresentation {
                    opacity: 1.0,
                    offset_percent: -axis * ((1.0 - progress) * 100.0),
                },
                LayerPresentation {
                    opacity: 1.0,
                    offset_percent: axis * (progress * 100.0),
                },
            )
        }
    };

    Some(TransitionState {
        kind,
        progress,
        entering,
        exiting,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/effects/transitions.rs"]
mod tests;
