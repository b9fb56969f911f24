use super::*;

#[test]
fn only_premium_effects_have_parameters() {
    for effect in Effect::ALL {
        assert_eq!(
            EffectParameters::for_effect(effect).is_some(),
            effect.is_premium(),
            "{effect}"
        );
    }
}

#[test]
fn parameters_stay_in_documented_ranges() {
    for effect in Effect::ALL {
        let Some(p) = EffectParameters::for_effect(effect) else {
            continue;
        };
        for phase in [p.phase_x, p.phase_y, p.phase_z] {
            assert!((0.0..=7.0).contains(&phase));
        }
        for amp in [p.amplitude_x, p.amplitude_y, p.amplitude_z] {
            assert!((0.0..=10.0).contains(&amp));
        }
        if let Some(gain) = p.gain {
            assert!((0.0..=10.0).contains(&gain));
        }
    }
}

#[test]
fn table_values_spot_check() {
    let h = EffectParameters::for_effect(Effect::Horizontal).unwrap();
    assert_eq!((h.phase_x, h.amplitude_x, h.gain), (2.5, 1.0, None));

    let z = EffectParameters::for_effect(Effect::Zoom).unwrap();
    assert_eq!((z.phase_z, z.amplitude_z), (4.0, 1.5));

    let v = EffectParameters::for_effect(Effect::Vertical).unwrap();
    assert_eq!(v.gain, Some(0.3));
}

#[test]
fn gain_is_omitted_from_json_when_unset() {
    let json = serde_json::to_value(EffectParameters::for_effect(Effect::Zoom).unwrap()).unwrap();
    assert!(json.get("gain").is_none());
    let json =
        serde_json::to_value(EffectParameters::for_effect(Effect::Circle).unwrap()).unwrap();
    assert_eq!(json["gain"], 0.6);
}
