use super::*;

const ALL: [Ease; 7] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::OutCubic.apply(-1.0), 0.0);
    assert_eq!(Ease::InQuad.apply(4.0), 1.0);
}

#[test]
fn linear_is_default() {
    assert_eq!(Ease::default(), Ease::Linear);
    assert!(Ease::default().is_linear());
}
