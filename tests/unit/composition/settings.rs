use super::*;

#[test]
fn empty_object_uses_defaults() {
    let s: TimelineSettings = serde_json::from_str("{}").unwrap();
    assert_eq!(s, TimelineSettings::default());
    assert_eq!(s.fps, Fps { num: 30, den: 1 });
    assert_eq!(s.transition_frames(), 30);
    assert_eq!(s.last_segment_pad_ms, 2);
    assert_eq!(s.max_duration_secs, Some(60.0));
    assert_eq!(s.music_volume, 0.2);
    s.validate().unwrap();
}

#[test]
fn transition_frames_default_follows_fps() {
    let s = TimelineSettings {
        fps: Fps::new(24, 1).unwrap(),
        ..TimelineSettings::default()
    };
    assert_eq!(s.transition_frames(), 24);

    let s = TimelineSettings {
        transition_frames: Some(12),
        ..TimelineSettings::default()
    };
    assert_eq!(s.transition_frames(), 12);
}

#[test]
fn validate_rejects_bad_fps_and_canvas() {
    let s = TimelineSettings {
        fps: Fps { num: 30, den: 0 },
        ..TimelineSettings::default()
    };
    assert!(s.validate().is_err());

    let s = TimelineSettings {
        canvas: Canvas {
            width: 0,
            height: 10,
        },
        ..TimelineSettings::default()
    };
    assert!(s.validate().is_err());
}

#[test]
fn validate_rejects_bad_durations_and_volumes() {
    let s = TimelineSettings {
        max_duration_secs: Some(0.0),
        ..TimelineSettings::default()
    };
    assert!(s.validate().is_err());

    let s = TimelineSettings {
        tail_secs: -1.0,
        ..TimelineSettings::default()
    };
    assert!(s.validate().is_err());

    let s = TimelineSettings {
        music_volume: f32::NAN,
        ..TimelineSettings::default()
    };
    let err = s.validate().unwrap_err();
    assert!(err.to_string().contains("music_volume"));

    let s = TimelineSettings {
        max_duration_secs: None,
        ..TimelineSettings::default()
    };
    s.validate().unwrap();
}
