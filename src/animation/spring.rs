use crate::foundation::core::Fps;

/// Physical parameters of a damped spring animating from `0` to `1`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringConfig {
    /// Damping coefficient.
    pub damping: f64,
    /// Spring stiffness.
    pub stiffness: f64,
    /// Moving mass.
    pub mass: f64,
    /// Cap the value at the target instead of overshooting.
    #[serde(default)]
    pub overshoot_clamping: bool,
}

/// Pop-in used for caption words: heavily damped, settles in a handful of frames.
pub const CAPTION_REVEAL_SPRING: SpringConfig = SpringConfig {
    damping: 200.0,
    stiffness: 500.0,
    mass: 0.25,
    overshoot_clamping: false,
};

#[derive(Clone, Copy, Debug)]
struct SpringState {
    last_timestamp_ms: f64,
    current: f64,
    velocity: f64,
}

// Longest simulated step; larger gaps are treated as a stall.
const MAX_STEP_MS: f64 = 64.0;

fn advance(state: SpringState, now_ms: f64, to: f64, config: SpringConfig) -> SpringState {
    let delta_ms = (now_ms - state.last_timestamp_ms).min(MAX_STEP_MS);
    let c = config.damping;
    let m = config.mass;
    let k = config.stiffness;

    let v0 = -state.velocity;
    let x0 = to - state.current;

    let zeta = c / (2.0 * (k * m).sqrt());
    let omega0 = (k / m).sqrt();
    let t = delta_ms / 1000.0;

    let (current, velocity) = if zeta < 1.0 {
        let omega1 = omega0 * (1.0 - zeta * zeta).sqrt();
        let (sin1, cos1) = (omega1 * t).sin_cos();
        let envelope = (-zeta * omega0 * t).exp();
        let frag = envelope * (sin1 * ((v0 + zeta * omega0 * x0) / omega1) + x0 * cos1);
        let position = to - frag;
        let velocity = zeta * omega0 * frag
            - envelope * (cos1 * (v0 + zeta * omega0 * x0) - omega1 * x0 * sin1);
        (position, velocity)
    } else {
        let envelope = (-omega0 * t).exp();
        let position = to - envelope * (x0 + (v0 + omega0 * x0) * t);
        let velocity = envelope * (v0 * (t * omega0 - 1.0) + t * x0 * omega0 * omega0);
        (position, velocity)
    };

    SpringState {
        last_timestamp_ms: now_ms,
        current,
        velocity,
    }
}

/// Value of a `0 -> 1` spring at `frame` frames after its start.
///
/// The simulation is stepped once per whole frame (plus the fractional remainder), so the
/// result depends only on `(frame, fps, config)`. Negative frames sample as frame `0`.
pub fn spring(frame: f64, fps: Fps, config: SpringConfig) -> f64 {
    const TO: f64 = 1.0;

    let fps = fps.as_f64();
    if fps <= 0.0 || config.mass <= 0.0 || config.stiffness <= 0.0 || !frame.is_finite() {
        return TO;
    }

    let frame = frame.max(0.0);
    let whole = frame.floor() as u64;
    let rest = frame - frame.floor();

    let mut state = SpringState {
        last_timestamp_ms: 0.0,
        current: 0.0,
        velocity: 0.0,
    };
    for f in 0..=whole {
        let f = if f == whole { f as f64 + rest } else { f as f64 };
        let now_ms = f / fps * 1000.0;
        state = advance(state, now_ms, TO, config);
    }

    if config.overshoot_clamping && state.current > TO {
        TO
    } else {
        state.current
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
