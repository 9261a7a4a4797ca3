use super::*;
use crate::{
    animation::anim::{InterpMode, Keyframe, Keyframes},
    animation::ease::Ease,
    foundation::core::Transform2D,
    scenes::config::SceneConfig,
    timeline::dsl::{Play, TimelineBuilder},
    timeline::model::Element,
};

fn builder() -> TimelineBuilder {
    TimelineBuilder::new("eval", &SceneConfig::default())
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn hidden_elements_are_not_in_snapshots() {
    let mut b = builder();
    b.declare(Element::dot("a", 0.1, Vec2::ZERO, Rgba8::WHITE))
        .unwrap();
    b.wait(1.0).unwrap();
    b.play_with(1.0, Ease::Linear, [Play::fade_in("a", Vec2::ZERO)])
        .unwrap();
    let tl = b.build().unwrap();

    assert!(Evaluator::snapshot(&tl, FrameIndex(10)).unwrap().element("a").is_none());
    let mid = Evaluator::snapshot(&tl, FrameIndex(45)).unwrap();
    assert!(approx(mid.element("a").unwrap().alpha, 0.5));
    let end = Evaluator::snapshot(&tl, FrameIndex(60)).unwrap();
    assert!(approx(end.element("a").unwrap().alpha, 1.0));
}

#[test]
fn fade_in_arrives_along_shift() {
    let mut b = builder();
    b.declare(Element::dot("a", 0.1, Vec2::new(1.0, 1.0), Rgba8::WHITE))
        .unwrap();
    b.play_with(1.0, Ease::Linear, [Play::fade_in("a", Vec2::new(0.0, 2.0))])
        .unwrap();
    let tl = b.build().unwrap();

    let start = Evaluator::snapshot(&tl, FrameIndex(0)).unwrap();
    assert!(start.element("a").is_none());
    let mid = Evaluator::snapshot(&tl, FrameIndex(15)).unwrap();
    assert_eq!(
        mid.element("a").unwrap().state.transform.translate,
        Vec2::new(1.0, 0.0)
    );
    let end = Evaluator::snapshot(&tl, FrameIndex(30)).unwrap();
    assert_eq!(
        end.element("a").unwrap().state.transform.translate,
        Vec2::new(1.0, 1.0)
    );
}

#[test]
fn sequential_cues_compose_in_start_order() {
    let mut b = builder();
    b.add(Element::dot("a", 0.1, Vec2::ZERO, Rgba8::WHITE))
        .unwrap();
    b.play_with(1.0, Ease::Linear, [Play::move_to("a", Vec2::new(2.0, 0.0))])
        .unwrap();
    b.play_with(1.0, Ease::Linear, [Play::shift("a", Vec2::new(0.0, 1.0))])
        .unwrap();
    b.play_with(1.0, Ease::Linear, [Play::scale_by("a", 2.0)])
        .unwrap();
    b.play_with(1.0, Ease::Linear, [Play::scale_by("a", 0.5)])
        .unwrap();
    let tl = b.build().unwrap();

    let s = Evaluator::snapshot(&tl, FrameIndex(45)).unwrap();
    let a = s.element("a").unwrap();
    assert!(approx(a.state.transform.translate.x, 2.0));
    assert!(approx(a.state.transform.translate.y, 0.5));

    let last = Evaluator::snapshot(&tl, FrameIndex(tl.duration.0 - 1)).unwrap();
    let a = last.element("a").unwrap();
    assert_eq!(a.state.transform.translate, Vec2::new(2.0, 1.0));
    assert!(approx(a.state.transform.scale.x, 1.0));
}

#[test]
fn counter_values_interpolate() {
    let mut b = builder();
    b.add(Element::counter("n", 22.0, 60.0, Vec2::ZERO, Rgba8::WHITE))
        .unwrap();
    b.play_with(1.0, Ease::Linear, [Play::set_value("n", 11.0)])
        .unwrap();
    let tl = b.build().unwrap();

    let mid = Evaluator::snapshot(&tl, FrameIndex(15)).unwrap();
    assert_eq!(mid.element("n").unwrap().state.value, Some(16.5));
    let end = Evaluator::snapshot(&tl, FrameIndex(30)).unwrap();
    assert_eq!(end.element("n").unwrap().state.value, Some(11.0));
}

#[test]
fn set_text_switches_at_midpoint() {
    let mut b = builder();
    b.add(Element::text("t", "n = 1", 30.0, Vec2::ZERO, Rgba8::WHITE))
        .unwrap();
    b.play_with(1.0, Ease::Linear, [Play::set_text("t", "n = 2")])
        .unwrap();
    let tl = b.build().unwrap();

    let text_at = |f| {
        Evaluator::snapshot(&tl, FrameIndex(f))
            .unwrap()
            .element("t")
            .unwrap()
            .state
            .text
            .clone()
    };
    assert_eq!(text_at(14).as_deref(), Some("n = 1"));
    assert_eq!(text_at(15).as_deref(), Some("n = 2"));
}

#[test]
fn flash_is_transient() {
    let mut b = builder();
    b.add(Element::dot("a", 0.1, Vec2::ZERO, Rgba8::WHITE))
        .unwrap();
    b.play(1.0, [Play::flash("a", Rgba8::rgb(255, 215, 0))])
        .unwrap();
    let tl = b.build().unwrap();

    let mid = Evaluator::snapshot(&tl, FrameIndex(15)).unwrap();
    assert!(approx(mid.element("a").unwrap().state.highlight, 1.0));
    let end = Evaluator::snapshot(&tl, FrameIndex(30)).unwrap();
    assert_eq!(end.element("a").unwrap().state.highlight, 0.0);
}

#[test]
fn indicate_returns_to_rest() {
    let mut b = builder();
    b.add(Element::dot("a", 0.1, Vec2::ZERO, Rgba8::WHITE))
        .unwrap();
    b.play(1.0, [Play::indicate("a", Rgba8::BLACK, 1.2)])
        .unwrap();
    let tl = b.build().unwrap();

    let end = Evaluator::snapshot(&tl, FrameIndex(30)).unwrap();
    let a = end.element("a").unwrap();
    assert_eq!(a.state.color, Rgba8::WHITE);
    assert!(approx(a.state.transform.scale.x, 1.0));
}

#[test]
fn follow_samples_the_path_locally() {
    let path = Keyframes {
        keys: vec![
            Keyframe {
                frame: FrameIndex(0),
                value: Transform2D::at(0.0, 0.0),
                ease: Ease::Linear,
            },
            Keyframe {
                frame: FrameIndex(30),
                value: Transform2D::at(3.0, 0.0),
                ease: Ease::Linear,
            },
        ],
        mode: InterpMode::Linear,
    };
    let mut b = builder();
    b.add(Element::dot("a", 0.1, Vec2::ZERO, Rgba8::WHITE))
        .unwrap();
    b.wait(1.0).unwrap();
    b.play_with(1.0, Ease::Linear, [Play::follow("a", path)])
        .unwrap();
    let tl = b.build().unwrap();

    let s = Evaluator::snapshot(&tl, FrameIndex(40)).unwrap();
    assert!(approx(s.element("a").unwrap().state.transform.translate.x, 1.0));
    let s = Evaluator::snapshot(&tl, FrameIndex(60)).unwrap();
    assert!(approx(s.element("a").unwrap().state.transform.translate.x, 3.0));
}

#[test]
fn painter_order_follows_z_then_declaration() {
    let mut b = builder();
    b.add(Element::dot("top", 0.1, Vec2::ZERO, Rgba8::WHITE).with_z(1))
        .unwrap();
    b.add(Element::dot("first", 0.1, Vec2::ZERO, Rgba8::WHITE))
        .unwrap();
    b.add(Element::dot("second", 0.1, Vec2::ZERO, Rgba8::WHITE))
        .unwrap();
    let tl = b.build().unwrap();

    let s = Evaluator::snapshot(&tl, FrameIndex(0)).unwrap();
    let ids: Vec<&str> = s.elements.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["first", "second", "top"]);
}

#[test]
fn camera_interpolates_then_drifts() {
    let mut b = builder();
    b.set_camera_orientation(Camera::oriented(60.0, -45.0));
    b.move_camera(1.0, Ease::Linear, Camera::oriented(0.0, -90.0))
        .unwrap();
    b.begin_ambient_rotation(3.0);
    b.wait(2.0).unwrap();
    b.stop_ambient_rotation();
    b.wait(1.0).unwrap();
    let tl = b.build().unwrap();

    let mid = Evaluator::snapshot(&tl, FrameIndex(15)).unwrap();
    assert!(approx(mid.camera.phi_deg, 30.0));
    assert!(approx(mid.camera.theta_deg, -67.5));

    let drifting = Evaluator::snapshot(&tl, FrameIndex(60)).unwrap();
    assert!(approx(drifting.camera.theta_deg, -87.0));

    let stopped = Evaluator::snapshot(&tl, FrameIndex(110)).unwrap();
    assert!(approx(stopped.camera.theta_deg, -84.0));
}

#[test]
fn frame_past_duration_is_an_error() {
    let tl = builder().build().unwrap();
    let err = Evaluator::snapshot(&tl, tl.duration).unwrap_err();
    assert!(matches!(err, PingalaError::Evaluation(_)));
}

#[test]
fn snapshots_are_in_frame_order_and_match_single_frames() {
    let mut b = builder();
    b.declare(Element::dot("a", 0.1, Vec2::ZERO, Rgba8::WHITE))
        .unwrap();
    b.play(1.0, [Play::fade_in("a", Vec2::new(1.0, 0.0))])
        .unwrap();
    let tl = b.build().unwrap();

    let range = FrameRange::new(FrameIndex(0), tl.duration).unwrap();
    let all = Evaluator::snapshots(&tl, range).unwrap();
    assert_eq!(all.len() as u64, tl.duration.0);
    for (i, snap) in all.iter().enumerate() {
        assert_eq!(snap.frame, FrameIndex(i as u64));
        assert_eq!(snap, &Evaluator::snapshot(&tl, FrameIndex(i as u64)).unwrap());
    }

    let too_far = FrameRange::new(FrameIndex(0), FrameIndex(tl.duration.0 + 1)).unwrap();
    assert!(Evaluator::snapshots(&tl, too_far).is_err());
}
