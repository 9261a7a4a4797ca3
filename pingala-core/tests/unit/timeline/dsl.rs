use super::*;

fn builder() -> TimelineBuilder {
    TimelineBuilder::new("test", &SceneConfig::default())
}

fn dot(id: &str) -> Element {
    Element::dot(id, 0.1, Vec2::ZERO, Rgba8::WHITE)
}

#[test]
fn play_and_wait_advance_the_cursor() {
    let mut b = builder();
    b.declare(dot("a")).unwrap();
    b.play(1.0, [Play::fade_in("a", Vec2::ZERO)]).unwrap();
    b.wait(0.5).unwrap();
    assert!((b.cursor_secs() - 1.5).abs() < 1e-12);
    assert_eq!(b.cursor_frame(), FrameIndex(45));

    let tl = b.build().unwrap();
    assert_eq!(tl.cues.len(), 1);
    assert_eq!(
        tl.cues[0].range,
        FrameRange::new(FrameIndex(0), FrameIndex(30)).unwrap()
    );
    assert_eq!(tl.duration, FrameIndex(46));
}

#[test]
fn declared_elements_start_hidden() {
    let mut b = builder();
    b.declare(dot("a").with_opacity(0.4)).unwrap();
    let tl = b.build().unwrap();
    assert_eq!(tl.elements[0].initial.reveal, 0.0);
    assert_eq!(tl.elements[0].initial.opacity, 0.4);
}

#[test]
fn add_and_remove_are_instant_cuts() {
    let mut b = builder();
    b.wait(1.0).unwrap();
    b.add(dot("a")).unwrap();
    b.wait(1.0).unwrap();
    b.remove("a").unwrap();
    let tl = b.build().unwrap();
    assert_eq!(tl.cues.len(), 2);
    assert!(tl.cues.iter().all(|c| c.range.is_empty()));
    assert_eq!(tl.cues[0].range.start, FrameIndex(30));
    assert_eq!(tl.cues[1].range.start, FrameIndex(60));
}

#[test]
fn duplicate_and_unknown_targets_are_errors() {
    let mut b = builder();
    b.declare(dot("a")).unwrap();
    assert!(b.declare(dot("a")).is_err());
    assert!(b.play(1.0, [Play::write("b")]).is_err());
    assert!(b.remove("b").is_err());
}

#[test]
fn negative_run_time_is_rejected() {
    let mut b = builder();
    b.declare(dot("a")).unwrap();
    assert!(b.play(-1.0, [Play::write("a")]).is_err());
    assert!(b.wait(f64::NAN).is_err());
}

#[test]
fn play_ease_overrides_call_ease() {
    let mut b = builder();
    b.declare(dot("a")).unwrap();
    b.declare(dot("b")).unwrap();
    b.play_with(
        1.0,
        Ease::Linear,
        [
            Play::write("a"),
            Play::write("b").with_ease(Ease::OutBack),
        ],
    )
    .unwrap();
    let tl = b.build().unwrap();
    assert_eq!(tl.cues[0].ease, Ease::Linear);
    assert_eq!(tl.cues[1].ease, Ease::OutBack);
}

#[test]
fn lagged_staggers_starts_within_run_time() {
    let mut b = builder();
    for id in ["a", "b", "c"] {
        b.declare(dot(id)).unwrap();
    }
    // sub = 2 / (1 + 2 * 0.5) = 1s; starts at 0, 0.5, 1.0
    b.lagged(
        2.0,
        0.5,
        Ease::Linear,
        ["a", "b", "c"].map(|id| Play::fade_in(id, Vec2::ZERO)),
    )
    .unwrap();
    assert!((b.cursor_secs() - 2.0).abs() < 1e-12);

    let tl = b.build().unwrap();
    let starts: Vec<u64> = tl.cues.iter().map(|c| c.range.start.0).collect();
    let ends: Vec<u64> = tl.cues.iter().map(|c| c.range.end.0).collect();
    assert_eq!(starts, vec![0, 15, 30]);
    assert_eq!(ends, vec![30, 45, 60]);
}

#[test]
fn lagged_rejects_bad_ratio() {
    let mut b = builder();
    b.declare(dot("a")).unwrap();
    assert!(
        b.lagged(1.0, 1.5, Ease::Linear, [Play::write("a")])
            .is_err()
    );
}

#[test]
fn camera_moves_and_ambient_windows_are_recorded() {
    let mut b = builder();
    b.set_camera_orientation(Camera::oriented(45.0, -20.0));
    b.move_camera(1.0, Ease::Smooth, Camera::default()).unwrap();
    b.begin_ambient_rotation(6.0);
    b.wait(2.0).unwrap();
    b.stop_ambient_rotation();
    let tl = b.build().unwrap();

    assert_eq!(tl.camera.initial, Camera::oriented(45.0, -20.0));
    assert_eq!(tl.camera.cues.len(), 1);
    assert_eq!(tl.camera.cues[0].range.end, FrameIndex(30));
    assert_eq!(tl.camera.ambient.len(), 1);
    assert_eq!(tl.camera.ambient[0].start, FrameIndex(30));
    assert_eq!(tl.camera.ambient[0].end, Some(FrameIndex(90)));
}

#[test]
fn span_frames_matches_the_next_cue() {
    let mut b = builder();
    b.declare(dot("a")).unwrap();
    b.wait(0.51).unwrap();
    let frames = b.span_frames(1.0);
    b.play(1.0, [Play::write("a")]).unwrap();
    let tl = b.build().unwrap();
    assert_eq!(tl.cues[0].range.len_frames(), frames);
}

#[test]
fn empty_builder_still_has_one_frame() {
    let tl = builder().build().unwrap();
    assert_eq!(tl.duration, FrameIndex(1));
    assert!(tl.elements.is_empty());
}

#[test]
fn lagged_groups_share_a_slot() {
    let mut b = builder();
    for id in ["a", "a-label", "b", "b-label"] {
        b.declare(dot(id)).unwrap();
    }
    b.lagged_groups(
        2.0,
        1.0,
        Ease::Linear,
        [["a", "a-label"], ["b", "b-label"]]
            .map(|ids| ids.map(|id| Play::fade_in(id, Vec2::ZERO))),
    )
    .unwrap();

    let tl = b.build().unwrap();
    let ranges: Vec<(u64, u64)> = tl
        .cues
        .iter()
        .map(|c| (c.range.start.0, c.range.end.0))
        .collect();
    assert_eq!(ranges, vec![(0, 30), (0, 30), (30, 60), (30, 60)]);
}

#[test]
fn astronomically_long_wait_fails_to_build() {
    let mut b = builder();
    b.wait(1e300).unwrap();
    let err = b.build().unwrap_err();
    assert!(matches!(err, PingalaError::Validation(_)));
}
