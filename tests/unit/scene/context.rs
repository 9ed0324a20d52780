use super::*;
use crate::style::sink::InMemorySink;

fn ctx() -> SceneContext {
    SceneContext::new(SceneConfig::wellness_journey()).unwrap()
}

fn mid_scroll() -> ScrollGeometry {
    ScrollGeometry::new(-600.0, 2000.0, 800.0)
}

#[test]
fn new_rejects_invalid_config() {
    let mut cfg = SceneConfig::wellness_journey();
    cfg.targets.clear();
    assert!(SceneContext::new(cfg).is_err());
}

#[test]
fn attach_schedules_initial_render() {
    let mut c = ctx();
    assert!(!c.is_attached());
    c.attach(Bindings::one_each(c.config()));
    assert!(c.is_update_pending());

    let mut sink = InMemorySink::new();
    assert!(c.on_animation_frame(mid_scroll(), &mut sink).unwrap());
    assert_eq!(sink.frames().len(), 1);
    assert_eq!(sink.last().unwrap().progress, 0.5);

    assert!(!c.on_animation_frame(mid_scroll(), &mut sink).unwrap());
    assert_eq!(sink.frames().len(), 1);
}

#[test]
fn scroll_burst_applies_once_per_frame() {
    let mut c = ctx();
    c.attach(Bindings::one_each(c.config()));
    let mut sink = InMemorySink::new();
    c.on_animation_frame(mid_scroll(), &mut sink).unwrap();

    assert!(c.request_update(UpdateTrigger::Scroll));
    for _ in 0..20 {
        assert!(!c.request_update(UpdateTrigger::Scroll));
    }
    assert!(c.on_animation_frame(mid_scroll(), &mut sink).unwrap());
    assert!(!c.on_animation_frame(mid_scroll(), &mut sink).unwrap());
    assert_eq!(sink.frames().len(), 2);
}

#[test]
fn detached_context_ignores_requests() {
    let mut c = ctx();
    assert!(!c.request_update(UpdateTrigger::Scroll));
    let mut sink = InMemorySink::new();
    assert!(!c.on_animation_frame(mid_scroll(), &mut sink).unwrap());
    assert!(sink.frames().is_empty());
    assert!(!c.observe_reveal("card"));
}

#[test]
fn detach_drops_pending_work_and_bindings() {
    let mut c = ctx();
    c.attach(Bindings::one_each(c.config()));
    c.observe_reveal("card");
    c.detach();
    assert!(!c.is_update_pending());
    assert_eq!(c.bindings().count("stage"), 0);
    assert!(!c.reveal().is_observed("card"));
    let mut sink = InMemorySink::new();
    assert!(!c.on_animation_frame(mid_scroll(), &mut sink).unwrap());
}

#[test]
fn reduced_motion_change_schedules_neutral_frame() {
    let mut c = ctx();
    c.attach(Bindings::one_each(c.config()));
    let mut sink = InMemorySink::new();
    c.on_animation_frame(mid_scroll(), &mut sink).unwrap();

    assert!(c.set_reduced_motion(true));
    assert!(!c.set_reduced_motion(true));
    assert!(c.is_update_pending());
    c.on_animation_frame(mid_scroll(), &mut sink).unwrap();

    let last = sink.last().unwrap();
    assert_eq!(last.motion, MotionPreference::Static);
    let stage = last.frame("stage", 0).unwrap();
    assert!(stage.neutral);
    assert_eq!(stage.opacity, Some(1.0));

    assert!(c.set_reduced_motion(false));
    c.on_animation_frame(mid_scroll(), &mut sink).unwrap();
    assert!(!sink.last().unwrap().frame("stage", 0).unwrap().neutral);
}

#[test]
fn update_now_bypasses_throttle() {
    let mut c = ctx();
    c.attach(Bindings::new().with("orb", 2));
    let mut sink = InMemorySink::new();
    c.update_now(mid_scroll(), &mut sink).unwrap();
    assert!(!c.is_update_pending());
    let last = sink.last().unwrap();
    assert_eq!(last.len(), 2);
}

#[test]
fn reveal_latch_through_context() {
    let mut c = ctx();
    c.attach(Bindings::new());
    assert!(c.observe_reveal("pillar-1"));
    assert!(c.report_intersection("pillar-1", 0.1).is_none());
    assert!(c.report_intersection("pillar-1", 0.4).is_some());
    assert!(c.report_intersection("pillar-1", 0.9).is_none());
    assert!(c.reveal().is_revealed("pillar-1"));
}

#[test]
fn reveal_from_geometry_through_context() {
    let mut c = ctx();
    c.attach(Bindings::new());
    assert!(c.observe_reveal("panel"));
    // Default root bottom is 0.9 * 800 = 720; an element at 650 shows 70 of 100.
    assert!(
        c.reveal_mut()
            .update_geometry("panel", 650.0, 100.0, 800.0)
            .is_some()
    );
    assert!(c.reveal().is_revealed("panel"));
    assert_eq!(c.reveal().observed_len(), 0);
}
