use super::*;

#[test]
fn starts_animated() {
    assert_eq!(MotionPreference::default(), MotionPreference::Animated);
}

#[test]
fn toggles_on_signal() {
    let s = MotionPreference::Animated.transition(true);
    assert_eq!(s, MotionPreference::Static);
    assert!(s.is_static());
    let s = s.transition(false);
    assert_eq!(s, MotionPreference::Animated);
}

#[test]
fn repeated_signal_is_stable() {
    let s = MotionPreference::Static.transition(true).transition(true);
    assert_eq!(s, MotionPreference::Static);
}
