use super::*;

fn basic() -> Timeline {
    Timeline {
        name: "t".to_string(),
        fps: Fps::new(30, 1).unwrap(),
        canvas: Canvas {
            width: 640,
            height: 360,
        },
        duration: FrameIndex(30),
        background: Rgba8::BLACK,
        font: FontChoice::default(),
        elements: vec![
            Element::text("label", "L", 40.0, Vec2::ZERO, Rgba8::WHITE),
            Element::counter("n", 22.0, 60.0, Vec2::new(0.0, -1.0), Rgba8::WHITE),
        ],
        cues: vec![Cue {
            target: "label".to_string(),
            range: FrameRange::new(FrameIndex(0), FrameIndex(10)).unwrap(),
            ease: Ease::Linear,
            action: Action::Write,
        }],
        camera: CameraTrack::default(),
    }
}

fn cue(target: &str, action: Action) -> Cue {
    Cue {
        target: target.to_string(),
        range: FrameRange::new(FrameIndex(0), FrameIndex(5)).unwrap(),
        ease: Ease::Linear,
        action,
    }
}

#[test]
fn basic_timeline_validates() {
    basic().validate().unwrap();
}

#[test]
fn json_roundtrip_preserves_timeline() {
    let tl = basic();
    let s = tl.to_json_pretty().unwrap();
    assert!(s.contains("\"type\": \"write\""));
    assert_eq!(Timeline::from_json(&s).unwrap(), tl);
}

#[test]
fn duplicate_ids_are_rejected() {
    let mut tl = basic();
    tl.elements.push(Element::dot("label", 0.1, Vec2::ZERO, Rgba8::WHITE));
    let err = tl.validate().unwrap_err();
    assert!(err.to_string().contains("duplicate element id 'label'"));
}

#[test]
fn cue_to_unknown_element_is_rejected() {
    let mut tl = basic();
    tl.cues.push(cue("ghost", Action::Write));
    assert!(tl.validate().unwrap_err().to_string().contains("ghost"));
}

#[test]
fn cue_past_duration_is_rejected() {
    let mut tl = basic();
    tl.cues[0].range.end = FrameIndex(31);
    assert!(tl.validate().is_err());
}

#[test]
fn typed_actions_check_their_target_kind() {
    let mut tl = basic();
    tl.cues.push(cue("label", Action::SetValue { value: 11.0 }));
    assert!(tl.validate().is_err());

    let mut tl = basic();
    tl.cues.push(cue("n", Action::SetText { text: "x".into() }));
    assert!(tl.validate().is_err());

    let mut tl = basic();
    tl.cues.push(cue("n", Action::SetValue { value: 11.0 }));
    tl.cues.push(cue("label", Action::SetText { text: "G".into() }));
    tl.validate().unwrap();
}

#[test]
fn out_of_range_parameters_are_rejected() {
    for action in [
        Action::ScaleBy { factor: 0.0 },
        Action::SetOpacity { opacity: 1.5 },
        Action::Indicate {
            color: Rgba8::WHITE,
            scale_factor: -1.0,
        },
        Action::Follow {
            path: Keyframes {
                keys: Vec::new(),
                mode: crate::animation::anim::InterpMode::Linear,
            },
        },
    ] {
        let mut tl = basic();
        tl.cues.push(cue("label", action));
        assert!(tl.validate().is_err());
    }
}

#[test]
fn camera_zoom_must_be_positive() {
    let mut tl = basic();
    tl.camera.initial = Camera::default().with_zoom(0.0);
    assert!(tl.validate().is_err());
}

#[test]
fn ambient_rotation_cannot_end_before_it_starts() {
    let mut tl = basic();
    tl.camera.ambient.push(AmbientRotation {
        start: FrameIndex(10),
        end: Some(FrameIndex(5)),
        rate_deg_per_sec: 6.0,
    });
    assert!(tl.validate().is_err());
}

#[test]
fn element_constructors_set_initial_state() {
    let el = Element::counter("n", 7.0, 60.0, Vec2::new(1.0, 2.0), Rgba8::WHITE)
        .fixed()
        .with_z(3)
        .with_scale(2.0);
    assert_eq!(el.initial.value, Some(7.0));
    assert_eq!(el.initial.transform.translate, Vec2::new(1.0, 2.0));
    assert_eq!(el.initial.transform.scale, Vec2::new(2.0, 2.0));
    assert!(el.fixed_in_frame);
    assert_eq!(el.z, 3);
}

#[test]
fn effective_opacity_combines_reveal_and_opacity() {
    let mut s = ElementState::default();
    assert_eq!(s.effective_opacity(), 0.0);
    s.reveal = 1.0;
    s.opacity = 0.5;
    assert_eq!(s.effective_opacity(), 0.5);
}

#[test]
fn font_choice_resolves_fallback() {
    let mut font = FontChoice::default();
    assert_eq!(font.resolved(), "Nirmala UI");
    font.use_fallback = true;
    assert_eq!(font.resolved(), "sans-serif");
}

#[test]
fn duration_secs_uses_fps() {
    assert!((basic().duration_secs() - 1.0).abs() < 1e-12);
}
