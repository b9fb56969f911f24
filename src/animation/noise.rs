//! Smooth deterministic 1D value noise.
//!
//! The noise is a pure function of its input: there is no generator state and no seed to
//! thread through callers, so any frame can be sampled in any order or in parallel.

const LATTICE_SEED: u64 = 0x7475_6265_736c_6575;

// SplitMix64 finalizer.
fn mix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Pseudo-random value in `[0, 1)` attached to integer lattice point `i`.
fn lattice01(i: i64) -> f64 {
    let h = mix64(LATTICE_SEED ^ (i as u64).wrapping_mul(0xD6E8_FEB8_6659_FD93));
    // 53 bits of precision.
    ((h >> 11) as f64) * (1.0 / ((1u64 << 53) as f64))
}

fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Sample the noise at `x`; the result lies in `[0, 1)`.
///
/// Values are interpolated between lattice points with a quintic fade, so the curve and
/// its first two derivatives are continuous. Non-finite inputs return the midpoint `0.5`.
pub fn noise1d(x: f64) -> f64 {
    if !x.is_finite() {
        return 0.5;
    }
    let cell = x.floor();
    let t = x - cell;
    let i0 = cell as i64;
    let a = lattice01(i0);
    let b = lattice01(i0.wrapping_add(1));
    a + (b - a) * fade(t)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/noise.rs"]
mod tests;
