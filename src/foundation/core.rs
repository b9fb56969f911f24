use crate::foundation::error::{TubesleuthError, TubesleuthResult};

pub use kurbo::{Affine, Size, Vec2};

/// A 0-based frame on the composition timeline.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Half-open frame range `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// First frame in the range.
    pub start: FrameIndex,
    /// One past the last frame.
    pub end: FrameIndex, // exclusive
}

impl FrameRange {
    /// Build a range, rejecting `start > end`.
    pub fn new(start: FrameIndex, end: FrameIndex) -> TubesleuthResult<Self> {
        if start.0 > end.0 {
            return Err(TubesleuthError::validation(
                "FrameRange start must be <= end",
            ));
        }
        Ok(Self { start, end })
    }

    /// `true` when `f` lies inside `[start, end)`.
    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }
}

/// When an element is visible: a start frame and a duration of at least one frame.
///
/// Windows are derived per composition and never mutated afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameWindow {
    /// First visible frame.
    pub start: FrameIndex,
    /// Visible length in frames (>= 1).
    pub duration_frames: u64,
}

impl FrameWindow {
    /// Build a window; a zero duration is raised to one frame.
    pub fn new(start: FrameIndex, duration_frames: u64) -> Self {
        Self {
            start,
            duration_frames: duration_frames.max(1),
        }
    }

    /// One past the last visible frame.
    pub fn end(self) -> FrameIndex {
        FrameIndex(self.start.0.saturating_add(self.duration_frames))
    }

    /// `true` when `f` is visible in this window.
    pub fn contains(self, f: FrameIndex) -> bool {
        self.as_range().contains(f)
    }

    /// Frame offset of `f` relative to the window start (negative before the window),
    /// saturating at the `i64` bounds.
    pub fn local_frame(self, f: FrameIndex) -> i64 {
        let offset = i128::from(f.0) - i128::from(self.start.0);
        offset.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
    }

    /// Playback progress through the window, clamped to `[0, 1]`.
    pub fn progress(self, f: FrameIndex) -> f64 {
        let denom = self.duration_frames.max(1) as f64;
        (self.local_frame(f) as f64 / denom).clamp(0.0, 1.0)
    }

    /// The window as a half-open frame range.
    pub fn as_range(self) -> FrameRange {
        FrameRange {
            start: self.start,
            end: self.end(),
        }
    }
}

/// Timeline frame rate as a rational number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator.
    pub num: u32,
    /// Denominator (must be > 0).
    pub den: u32,
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: 30, den: 1 }
    }
}

impl Fps {
    /// Build a frame rate, rejecting zero numerator or denominator.
    pub fn new(num: u32, den: u32) -> TubesleuthResult<Self> {
        if den == 0 {
            return Err(TubesleuthError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(TubesleuthError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Frames per second as a float.
    pub fn as_f64(self) -> f64 {
        if self.den == 0 {
            return 0.0;
        }
        f64::from(self.num) / f64::from(self.den)
    }

    /// Whole frames covering one second of playback.
    pub fn one_second_frames(self) -> u64 {
        crate::foundation::math::round_half_up(self.as_f64()).max(0.0) as u64
    }
}

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Default for Canvas {
    // Vertical short-form video.
    fn default() -> Self {
        Self {
            width: 1080,
            height: 1920,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
