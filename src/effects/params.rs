use crate::effects::effect::Effect;

/// Motion parameters handed to the depth-animation service for premium effects.
///
/// Phases are in `[0, 7]`, amplitudes and gain in `[0, 10]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EffectParameters {
    /// Horizontal phase.
    pub phase_x: f64,
    /// Vertical phase.
    pub phase_y: f64,
    /// Depth phase.
    pub phase_z: f64,
    /// Horizontal amplitude.
    pub amplitude_x: f64,
    /// Vertical amplitude.
    pub amplitude_y: f64,
    /// Depth amplitude.
    pub amplitude_z: f64,
    /// Overall motion gain, when the effect sets one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gain: Option<f64>,
}

const AMPLITUDE_AMOUNT: f64 = 1.0;
const PHASE_AMOUNT: f64 = 2.5;

const HORIZONTAL: EffectParameters = EffectParameters {
    phase_x: PHASE_AMOUNT,
    phase_y: 0.0,
    phase_z: 0.0,
    amplitude_x: AMPLITUDE_AMOUNT,
    amplitude_y: 0.0,
    amplitude_z: 0.0,
    gain: None,
};

const VERTICAL: EffectParameters = EffectParameters {
    phase_x: 0.0,
    phase_y: 2.0,
    phase_z: 0.0,
    amplitude_x: 0.0,
    amplitude_y: 0.5,
    amplitude_z: 0.0,
    gain: Some(0.3),
};

const CIRCLE: EffectParameters = EffectParameters {
    phase_x: 0.0,
    phase_y: 0.25,
    phase_z: 0.25,
    amplitude_x: 0.25,
    amplitude_y: 0.25,
    amplitude_z: 0.0,
    gain: Some(0.6),
};

const PERSPECTIVE: EffectParameters = EffectParameters {
    phase_x: 0.0,
    phase_y: 0.25,
    phase_z: 0.25,
    amplitude_x: 0.1,
    amplitude_y: 0.05,
    amplitude_z: 0.4,
    gain: Some(0.6),
};

const ZOOM: EffectParameters = EffectParameters {
    phase_x: 0.0,
    phase_y: 0.0,
    phase_z: 4.0,
    amplitude_x: 0.0,
    amplitude_y: 0.0,
    amplitude_z: 1.5,
    gain: None,
};

impl EffectParameters {
    /// Look up the fixed parameters of `effect`; only premium effects have any.
    pub fn for_effect(effect: Effect) -> Option<Self> {
        match effect {
            Effect::Horizontal => Some(HORIZONTAL),
            Effect::Vertical => Some(VERTICAL),
            Effect::Circle => Some(CIRCLE),
            Effect::Perspective => Some(PERSPECTIVE),
            Effect::Zoom => Some(ZOOM),
            Effect::ZoomIn
            | Effect::ZoomOut
            | Effect::PanLeft
            | Effect::PanRight
            | Effect::PanUp
            | Effect::PanDown
            | Effect::MoveAbout
            | Effect::MoveAround => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/params.rs"]
mod tests;
