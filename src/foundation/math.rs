/// Round half-way cases toward positive infinity.
///
/// Every frame count in the timeline is derived with this rule: `-0.5` rounds to `0` and
/// `2.5` rounds to `3`.
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// [`round_half_up`] narrowed to a signed frame count.
pub(crate) fn round_to_i64(x: f64) -> i64 {
    let r = round_half_up(x);
    if r.is_nan() { 0 } else { r as i64 }
}

/// Map a signed frame count onto the unsigned frame axis, saturating at zero.
pub(crate) fn non_negative(frames: i64) -> u64 {
    frames.max(0) as u64
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
