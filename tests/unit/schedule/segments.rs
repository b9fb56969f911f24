use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

fn seg(id: &str, start_ms: i64, end_ms: i64) -> ImageSegment {
    ImageSegment::image(id, format!("{id}.png"), start_ms, end_ms)
}

fn windows(scheduled: &[ScheduledSegment<'_>]) -> Vec<(u64, u64)> {
    scheduled
        .iter()
        .map(|s| (s.window.start.0, s.window.duration_frames))
        .collect()
}

#[test]
fn three_segment_scenario() {
    let segments = vec![seg("a", 0, 1000), seg("b", 1000, 3000), seg("c", 3000, 3500)];
    let scheduled = schedule_segments(&segments, fps30(), 30);
    assert_eq!(windows(&scheduled), vec![(0, 60), (30, 90), (90, 45)]);
}

#[test]
fn starts_advance_by_duration_minus_overlap() {
    let segments = vec![
        seg("a", 0, 1234),
        seg("b", 1234, 2100),
        seg("c", 2100, 5000),
        seg("d", 5000, 5050),
    ];
    for overlap in [0u64, 10, 30] {
        let scheduled = schedule_segments(&segments, fps30(), overlap);
        for pair in scheduled.windows(2) {
            let (prev, next) = (pair[0].window, pair[1].window);
            assert!(next.start >= prev.start);
            assert_eq!(next.start.0, prev.start.0 + prev.duration_frames - overlap);
        }
    }
}

#[test]
fn single_segment_is_last() {
    let segments = vec![seg("only", 0, 1649)];
    let scheduled = schedule_segments(&segments, fps30(), 30);
    // 1.651s * 30 = 49.53 -> 50, plus padding.
    assert_eq!(windows(&scheduled), vec![(0, 80)]);
}

#[test]
fn last_segment_span_is_extended() {
    let sched = SegmentScheduler::new(fps30(), 30);
    let s = seg("x", 1000, 1649);
    let delta = sched.span_secs(&s, true) - sched.span_secs(&s, false);
    assert!((delta - 0.002).abs() < 1e-12);
    assert_eq!(sched.duration_frames(&s, false), 30 + 19);
    assert_eq!(sched.duration_frames(&s, true), 30 + 20);
}

#[test]
fn segments_without_visuals_are_skipped_without_gaps() {
    let mut hole = seg("hole", 1000, 2000);
    hole.source_url = None;
    let segments = vec![seg("a", 0, 1000), hole, seg("c", 2000, 3000)];
    let scheduled = schedule_segments(&segments, fps30(), 30);

    let ids: Vec<&str> = scheduled.iter().map(|s| s.segment.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c"]);
    // "c" starts right after "a"'s overlap point and is padded as the last visual.
    assert_eq!(windows(&scheduled), vec![(0, 60), (30, 60)]);
}

#[test]
fn trailing_segment_without_visual_moves_padding_to_last_visual() {
    let mut tail = seg("tail", 3000, 3500);
    tail.source_url = None;
    let segments = vec![seg("a", 0, 1649), tail];
    let scheduled = schedule_segments(&segments, fps30(), 30);
    assert_eq!(windows(&scheduled), vec![(0, 80)]);
}

#[test]
fn reversed_bounds_clamp_to_padding_only() {
    let segments = vec![seg("bad", 2000, 1000), seg("ok", 2000, 3000)];
    let scheduled = schedule_segments(&segments, fps30(), 30);
    assert_eq!(windows(&scheduled), vec![(0, 30), (0, 60)]);
}

#[test]
fn empty_input_schedules_nothing() {
    assert!(schedule_segments(&[], fps30(), 30).is_empty());
}

#[test]
fn from_settings_uses_configured_overlap_and_pad() {
    let settings = TimelineSettings {
        transition_frames: Some(15),
        last_segment_pad_ms: 0,
        ..TimelineSettings::default()
    };
    let sched = SegmentScheduler::from_settings(&settings);
    let segments = vec![seg("a", 0, 1000), seg("b", 1000, 2000)];
    assert_eq!(windows(&sched.schedule(&segments)), vec![(0, 45), (30, 45)]);
}
