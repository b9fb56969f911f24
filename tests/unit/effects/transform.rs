use super::*;

const START: FrameIndex = FrameIndex(30);
const DURATION: u64 = 90;

fn at(effect: Effect, frame: u64) -> Transform {
    compute_transform(Some(effect), FrameIndex(frame), START, DURATION)
}

#[test]
fn unset_effect_is_identity() {
    for f in [0, 30, 75, 200] {
        assert_eq!(
            compute_transform(None, FrameIndex(f), START, DURATION),
            Transform::IDENTITY
        );
    }
}

#[test]
fn zoom_in_eases_to_ten_percent() {
    assert_eq!(at(Effect::ZoomIn, 30).scale, 1.0);
    assert!((at(Effect::ZoomIn, 75).scale - 1.05).abs() < 1e-12);
    assert_eq!(at(Effect::ZoomIn, 120).scale, 1.1);
}

#[test]
fn zoom_out_eases_to_identity() {
    assert_eq!(at(Effect::ZoomOut, 30).scale, 1.1);
    assert!((at(Effect::ZoomOut, 75).scale - 1.05).abs() < 1e-12);
    assert_eq!(at(Effect::ZoomOut, 120).scale, 1.0);
}

#[test]
fn camera_effects_share_the_zoom_curve() {
    for effect in [
        Effect::Zoom,
        Effect::Horizontal,
        Effect::Vertical,
        Effect::Circle,
        Effect::Perspective,
    ] {
        for f in 0..200 {
            assert_eq!(at(effect, f), at(Effect::ZoomIn, f), "{effect} @ {f}");
        }
    }
}

#[test]
fn zoom_scale_stays_in_bounds() {
    for effect in [Effect::ZoomIn, Effect::ZoomOut] {
        for f in 0..300 {
            let t = at(effect, f);
            assert!((1.0..=1.1).contains(&t.scale), "{effect} @ {f}: {}", t.scale);
            assert_eq!(t.translate, Vec2::ZERO);
        }
    }
}

#[test]
fn pan_stays_in_bounds_with_fixed_scale() {
    for effect in [
        Effect::PanLeft,
        Effect::PanRight,
        Effect::PanUp,
        Effect::PanDown,
    ] {
        for f in 0..300 {
            let t = at(effect, f);
            assert!(t.translate.x.abs() <= 10.0);
            assert!(t.translate.y.abs() <= 10.0);
            assert_eq!(t.scale, 1.2);
            assert_eq!(t.unit, TranslateUnit::Percent);
        }
    }
}

#[test]
fn pan_directions() {
    assert_eq!(at(Effect::PanLeft, 120).translate, Vec2::new(-10.0, 0.0));
    assert_eq!(at(Effect::PanRight, 120).translate, Vec2::new(10.0, 0.0));
    assert_eq!(at(Effect::PanUp, 120).translate, Vec2::new(0.0, -10.0));
    assert_eq!(at(Effect::PanDown, 120).translate, Vec2::new(0.0, 10.0));
    assert!((at(Effect::PanRight, 75).translate.x - 5.0).abs() < 1e-12);
}

#[test]
fn progress_clamp_pins_out_of_window_frames_to_boundaries() {
    let end = START.0 + DURATION;
    for effect in Effect::ALL {
        let first = at(effect, START.0);
        let last = at(effect, end);
        for f in 0..START.0 {
            assert_eq!(at(effect, f), first, "{effect} before window @ {f}");
        }
        for f in end..end + 120 {
            assert_eq!(at(effect, f), last, "{effect} after window @ {f}");
        }
    }
}

#[test]
fn zero_duration_does_not_divide_by_zero() {
    let t = compute_transform(Some(Effect::ZoomIn), FrameIndex(5), FrameIndex(5), 0);
    assert!(t.scale.is_finite());
    let t = compute_transform(Some(Effect::MoveAbout), FrameIndex(5), FrameIndex(5), 0);
    assert!(t.scale.is_finite());
}

#[test]
fn move_about_is_deterministic() {
    for f in [0u64, 1, 17, 89, 90, 400] {
        let a = move_about(FrameIndex(f), FrameIndex(0), 90);
        let b = move_about(FrameIndex(f), FrameIndex(0), 90);
        assert_eq!(a.translate.x.to_bits(), b.translate.x.to_bits());
        assert_eq!(a.translate.y.to_bits(), b.translate.y.to_bits());
        assert_eq!(a.scale.to_bits(), b.scale.to_bits());
    }
}

#[test]
fn move_about_stays_inside_safe_margins() {
    for f in 0..450 {
        let t = move_about(FrameIndex(f), FrameIndex(0), 90);
        assert!((1.2..=1.5).contains(&t.scale), "scale {}", t.scale);
        let limit = 0.5 * 400.0 / t.scale;
        assert!(t.translate.x.abs() <= limit);
        assert!(t.translate.y.abs() <= limit);
        assert_eq!(t.unit, TranslateUnit::Pixels);
    }
}

#[test]
fn move_about_cycles_with_the_segment() {
    let a = move_about(FrameIndex(10), FrameIndex(0), 90);
    let b = move_about(FrameIndex(100), FrameIndex(0), 90);
    assert_eq!(a, b);
}

#[test]
fn move_about_handles_frames_past_i64() {
    for frame in [1u64 << 63, u64::MAX] {
        let t = move_about(FrameIndex(frame), FrameIndex(0), 90);
        assert!(t.scale.is_finite() && (1.2..=1.5).contains(&t.scale));
        assert!(t.translate.x.is_finite() && t.translate.y.is_finite());
    }
}

#[test]
fn move_around_is_move_about() {
    for f in 0..200 {
        assert_eq!(at(Effect::MoveAround, f), at(Effect::MoveAbout, f));
    }
}

#[test]
fn css_matches_player_syntax() {
    assert_eq!(Transform::IDENTITY.to_css(), "scale(1)");
    assert_eq!(at(Effect::PanLeft, 120).to_css(), "translateX(-10%) scale(1.2)");
    assert_eq!(at(Effect::PanDown, 120).to_css(), "translateY(10%) scale(1.2)");
    let drift = Transform {
        translate: Vec2::new(12.5, -4.0),
        unit: TranslateUnit::Pixels,
        scale: 1.25,
    };
    assert_eq!(drift.to_css(), "translate(12.5px, -4px) scale(1.25)");
}

#[test]
fn affine_scales_about_centre() {
    let size = Size::new(100.0, 200.0);
    assert_eq!(Transform::IDENTITY.to_affine(size), Affine::IDENTITY);

    let zoomed = Transform {
        scale: 2.0,
        ..Transform::IDENTITY
    };
    let centre = kurbo::Point::new(50.0, 100.0);
    assert_eq!(zoomed.to_affine(size) * centre, centre);

    let panned = at(Effect::PanRight, 120);
    let moved = panned.to_affine(size) * centre;
    assert!((moved.x - 60.0).abs() < 1e-9);
    assert!((moved.y - 100.0).abs() < 1e-9);
}
