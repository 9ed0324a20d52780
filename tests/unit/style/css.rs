use super::*;
use crate::scene::config::TargetKind;
use crate::scene::frame::{LengthUnit, TargetFrames};
use crate::scene::motion::MotionPreference;

fn stage_like() -> Frame {
    Frame {
        translate_y: Some(38.0),
        scale: Some(0.96),
        opacity: Some(0.54),
        blur_px: Some(2.5),
        ..Frame::default()
    }
}

#[test]
fn element_transform_leaves_missing_axis_as_zero() {
    let f = stage_like();
    assert_eq!(
        transform_value(&f).unwrap(),
        "translate3d(0, 38.00px, 0) scale(0.960)"
    );
}

#[test]
fn morph_transform_uses_percent_and_rotation() {
    let f = Frame {
        translate_x: Some(-1.25),
        translate_y: Some(1.0),
        unit: LengthUnit::Percent,
        rotate_deg: Some(-1.5),
        radius: Some([44.5, 55.5, 57.5, 42.5, 50.0, 47.25, 52.75, 50.25]),
        ..Frame::default()
    };
    let decls = declarations(&f);
    assert_eq!(
        decls,
        vec![
            (
                "border-radius",
                "44.5% 55.5% 57.5% 42.5% / 50% 47.25% 52.75% 50.25%".to_string()
            ),
            (
                "transform",
                "translate3d(-1.25%, 1.00%, 0) rotate(-1.50deg)".to_string()
            ),
        ]
    );
}

#[test]
fn full_declaration_order() {
    let f = Frame {
        spotlight: Some(0.5),
        ..stage_like()
    };
    let props: Vec<&str> = declarations(&f).iter().map(|(p, _)| *p).collect();
    assert_eq!(
        props,
        ["transform", "opacity", "filter", SPOTLIGHT_PROPERTY]
    );
    let decls = declarations(&f);
    assert_eq!(decls[1].1, "0.540");
    assert_eq!(decls[2].1, "blur(2.50px)");
    assert_eq!(decls[3].1, "0.500");
}

#[test]
fn negative_zero_prints_as_zero() {
    let f = Frame {
        translate_x: Some(-0.0),
        translate_y: Some(20.0),
        ..Frame::default()
    };
    assert_eq!(
        transform_value(&f).unwrap(),
        "translate3d(0.00px, 20.00px, 0)"
    );
}

#[test]
fn neutral_frames_render_identity() {
    let f = stage_like().neutralized();
    let decls = declarations(&f);
    assert_eq!(
        decls,
        vec![
            ("transform", "none".to_string()),
            ("opacity", "1".to_string()),
            ("filter", "none".to_string()),
        ]
    );
}

#[test]
fn frame_without_channels_writes_nothing() {
    assert!(declarations(&Frame::default()).is_empty());
    assert_eq!(transform_value(&Frame::default()), None);
}

fn scene(progress: f64, pillars: usize) -> SceneFrame {
    SceneFrame {
        progress,
        motion: MotionPreference::Animated,
        targets: vec![
            TargetFrames {
                name: "stage".to_string(),
                kind: TargetKind::Element,
                frames: vec![stage_like()],
            },
            TargetFrames {
                name: "pillar".to_string(),
                kind: TargetKind::Element,
                frames: vec![
                    Frame {
                        opacity: Some(0.5),
                        ..Frame::default()
                    };
                    pillars
                ],
            },
        ],
    }
}

#[test]
fn sink_overwrites_previous_apply() {
    let mut sink = CssSink::new();
    sink.apply(&scene(0.2, 3)).unwrap();
    assert_eq!(sink.value("pillar", 2, "opacity"), Some("0.500"));

    sink.apply(&scene(0.3, 1)).unwrap();
    assert_eq!(sink.applied(), 2);
    assert_eq!(sink.value("pillar", 0, "opacity"), Some("0.500"));
    assert_eq!(sink.element("pillar", 2), None);
    assert_eq!(sink.value("stage", 0, "filter"), Some("blur(2.50px)"));
    assert_eq!(sink.value("stage", 0, "border-radius"), None);
}

#[test]
fn render_follows_frame_order() {
    let mut sink = CssSink::new();
    sink.apply(&scene(0.2, 2)).unwrap();
    let text = sink.render();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("stage[0] { transform: translate3d(0, 38.00px, 0)"));
    assert_eq!(lines[1], "pillar[0] { opacity: 0.500; }");
    assert_eq!(lines[2], "pillar[1] { opacity: 0.500; }");
}

#[test]
fn duplicate_targets_are_rejected() {
    let mut frame = scene(0.2, 1);
    frame.targets.push(frame.targets[0].clone());
    let err = CssSink::new().apply(&frame).unwrap_err();
    assert!(matches!(err, ScrollError::Style(_)));
}

#[test]
fn fixed_rounds_exact_ties_away_from_zero() {
    assert_eq!(fixed(1.125, 2), "1.13");
    assert_eq!(fixed(-1.125, 2), "-1.13");
    assert_eq!(fixed(0.375, 2), "0.38");
    assert_eq!(fixed(9.875, 2), "9.88");
    assert_eq!(fixed(9.5, 0), "10");
}

#[test]
fn fixed_rounds_stored_value_not_decimal_literal() {
    // 1.005 and 2.675 are stored just below the tie; 99.995 just above it.
    assert_eq!(fixed(1.005, 2), "1.00");
    assert_eq!(fixed(2.675, 2), "2.67");
    assert_eq!(fixed(99.995, 2), "100.00");
}

#[test]
fn fixed_matches_plain_rounding_elsewhere() {
    assert_eq!(fixed(0.72, 3), "0.720");
    assert_eq!(fixed(-9.2, 2), "-9.20");
    assert_eq!(fixed(-0.0, 2), "0.00");
    assert_eq!(fixed(76.0, 2), "76.00");
    assert_eq!(fixed(0.9999, 3), "1.000");
}
