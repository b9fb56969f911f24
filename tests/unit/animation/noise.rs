use super::*;

#[test]
fn noise_is_bounded() {
    for i in -2000..2000 {
        let v = noise1d(i as f64 * 0.037);
        assert!((0.0..1.0).contains(&v), "noise({}) = {v}", i as f64 * 0.037);
    }
}

#[test]
fn noise_is_deterministic() {
    for x in [0.0, 0.25, 1.6, 500.0, 501.76, -3.3] {
        assert_eq!(noise1d(x).to_bits(), noise1d(x).to_bits());
    }
}

#[test]
fn noise_hits_lattice_values_at_integers() {
    assert_eq!(noise1d(3.0), lattice01(3));
    assert_eq!(noise1d(-7.0), lattice01(-7));
}

#[test]
fn noise_is_continuous() {
    let step = 1e-4;
    let mut prev = noise1d(0.0);
    for i in 1..40_000 {
        let v = noise1d(i as f64 * step);
        assert!((v - prev).abs() < 0.01);
        prev = v;
    }
}

#[test]
fn noise_varies() {
    let samples: Vec<f64> = (0..16).map(|i| noise1d(i as f64 + 0.5)).collect();
    let min = samples.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    assert!(max - min > 0.1);
}

#[test]
fn non_finite_input_maps_to_midpoint() {
    assert_eq!(noise1d(f64::NAN), 0.5);
    assert_eq!(noise1d(f64::INFINITY), 0.5);
}
