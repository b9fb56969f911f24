//! Conversions between the three time axes of a timeline: milliseconds (transcripts and
//! segment bounds), seconds (audio durations) and frames (everything rendered).

use crate::foundation::{core::Fps, math::round_to_i64};

/// Milliseconds to the nearest frame (half-way cases round up).
///
/// Negative inputs give negative frames; callers validate.
pub fn ms_to_frames(ms: i64, fps: Fps) -> i64 {
    round_to_i64(ms as f64 / 1000.0 * fps.as_f64())
}

/// Seconds to frames, unrounded.
///
/// Unlike [`ms_to_frames`] this does not round: downstream callers round where they need
/// whole frames. The asymmetry is kept on purpose because existing timings depend on it.
pub fn seconds_to_frames(seconds: f64, fps: Fps) -> f64 {
    seconds * fps.as_f64()
}

/// Milliseconds to seconds.
pub fn ms_to_seconds(ms: i64) -> f64 {
    ms as f64 / 1000.0
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/time.rs"]
mod tests;
