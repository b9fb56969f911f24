//! Per-frame camera transforms for still images.
//!
//! Source images are pre-cropped to tolerate at most a 20% zoom and a 10% pan, so every
//! effect caps its scale and translation; exceeding those caps exposes canvas edges.

use crate::{
    animation::noise::noise1d,
    effects::effect::Effect,
    foundation::core::{Affine, FrameIndex, FrameWindow, Size, Vec2},
};

const ZOOM_STEP: f64 = 0.1;
const MAX_ZOOM: f64 = 1.0 + ZOOM_STEP;
const PAN_MAX_PERCENT: f64 = 10.0;
// Oversize during pans so the trailing edge never shows.
const PAN_SCALE: f64 = 1.2;

const MOVE_FREQUENCY: f64 = 1.6;
const MOVE_AMPLITUDE_PX: f64 = 400.0;
const MOVE_ZOOM_AMPLITUDE: f64 = 0.5;
const MOVE_SPEED: f64 = 1.1;
const MOVE_MIN_SCALE: f64 = 1.2;
const MOVE_MAX_SCALE: f64 = 1.5;
const MOVE_Y_DECORRELATION: f64 = 500.0;

/// Unit of [`Transform::translate`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TranslateUnit {
    /// Percent of the element's own size.
    #[default]
    Percent,
    /// Canvas pixels.
    Pixels,
}

/// 2D transform of one visual element for one frame: translate, then scale about the centre.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transform {
    /// Offset applied before scaling, in [`Transform::unit`].
    pub translate: Vec2,
    /// Unit of `translate`.
    #[serde(default)]
    pub unit: TranslateUnit,
    /// Uniform scale; `>= 1` for every effect.
    pub scale: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// No translation, unit scale.
    pub const IDENTITY: Transform = Transform {
        translate: Vec2::ZERO,
        unit: TranslateUnit::Percent,
        scale: 1.0,
    };

    fn scaled(scale: f64) -> Self {
        Self {
            scale,
            ..Self::IDENTITY
        }
    }

    fn panned(x_percent: f64, y_percent: f64) -> Self {
        Self {
            translate: Vec2::new(x_percent, y_percent),
            unit: TranslateUnit::Percent,
            scale: PAN_SCALE,
        }
    }

    /// CSS `transform` value for web rendering surfaces.
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        match self.unit {
            TranslateUnit::Percent => {
                if self.translate.x != 0.0 {
                    out.push_str(&format!("translateX({}%) ", self.translate.x));
                }
                if self.translate.y != 0.0 {
                    out.push_str(&format!("translateY({}%) ", self.translate.y));
                }
            }
            TranslateUnit::Pixels => {
                if self.translate != Vec2::ZERO {
                    out.push_str(&format!(
                        "translate({}px, {}px) ",
                        self.translate.x, self.translate.y
                    ));
                }
            }
        }
        out.push_str(&format!("scale({})", self.scale));
        out
    }

    /// Affine matrix for an element of `size` placed at the origin, scaled about its centre.
    pub fn to_affine(&self, size: Size) -> Affine {
        let offset = match self.unit {
            TranslateUnit::Percent => Vec2::new(
                self.translate.x / 100.0 * size.width,
                self.translate.y / 100.0 * size.height,
            ),
            TranslateUnit::Pixels => self.translate,
        };
        let centre = Vec2::new(size.width / 2.0, size.height / 2.0);

        // T(centre) * T(offset) * S(scale) * T(-centre)
        Affine::translate(centre + offset) * Affine::scale(self.scale) * Affine::translate(-centre)
    }
}

/// Transform of a segment using `effect` at `current_frame`.
///
/// Progress through the segment is clamped to `[0, 1]`, so frames outside the segment get
/// the transform of the nearest boundary instead of an extrapolated one. `None` gives the
/// identity transform.
pub fn compute_transform(
    effect: Option<Effect>,
    current_frame: FrameIndex,
    segment_start: FrameIndex,
    segment_duration_frames: u64,
) -> Transform {
    let window = FrameWindow::new(segment_start, segment_duration_frames);
    let progress = window.progress(current_frame);

    let Some(effect) = effect else {
        return Transform::IDENTITY;
    };

    match effect {
        Effect::ZoomIn
        | Effect::Zoom
        | Effect::Horizontal
        | Effect::Vertical
        | Effect::Circle
        | Effect::Perspective => Transform::scaled((1.0 + progress * ZOOM_STEP).min(MAX_ZOOM)),
        Effect::ZoomOut => Transform::scaled((MAX_ZOOM - progress * ZOOM_STEP).max(1.0)),
        Effect::PanLeft | Effect::PanRight => {
            let x = (progress * PAN_MAX_PERCENT).min(PAN_MAX_PERCENT);
            let x = if effect == Effect::PanLeft { -x } else { x };
            Transform::panned(x, 0.0)
        }
        Effect::PanUp | Effect::PanDown => {
            let y = (progress * PAN_MAX_PERCENT).min(PAN_MAX_PERCENT);
            let y = if effect == Effect::PanUp { -y } else { y };
            Transform::panned(0.0, y)
        }
        Effect::MoveAbout | Effect::MoveAround => {
            let last = window.end();
            let clamped = FrameIndex(current_frame.0.clamp(window.start.0, last.0));
            move_about(clamped, window.start, window.duration_frames)
        }
    }
}

/// Organic drift driven by [`noise1d`]: zoom within `[1.2, 1.5]` and a pixel offset whose
/// amplitude shrinks as the zoom grows.
///
/// The cycle restarts every `duration_frames`. Identical inputs give bit-identical output.
pub fn move_about(current_frame: FrameIndex, from: FrameIndex, duration_frames: u64) -> Transform {
    let window = FrameWindow::new(from, duration_frames);
    let duration = i64::try_from(window.duration_frames).unwrap_or(i64::MAX);
    let local = window.local_frame(current_frame);
    let progress = (local % duration) as f64 / duration as f64;
    let t = progress * MOVE_SPEED * MOVE_FREQUENCY;

    let base = noise1d(t);
    let scale = MOVE_MIN_SCALE + base * MOVE_ZOOM_AMPLITUDE * (MOVE_MAX_SCALE - MOVE_MIN_SCALE);
    let amplitude = MOVE_AMPLITUDE_PX / scale;

    let x = (base - 0.5) * amplitude;
    let y = (noise1d(t + MOVE_Y_DECORRELATION) - 0.5) * amplitude;

    Transform {
        translate: Vec2::new(x, y),
        unit: TranslateUnit::Pixels,
        scale,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/transform.rs"]
mod tests;
