use super::*;

#[test]
fn half_way_through_tall_region() {
    let g = ScrollGeometry::new(-600.0, 2000.0, 800.0);
    assert_eq!(g.total_scroll(), 1200.0);
    assert_eq!(g.progress(), 0.5);
}

#[test]
fn region_not_entered_yet_is_zero() {
    let g = ScrollGeometry::new(350.0, 2000.0, 800.0);
    assert_eq!(g.progress(), 0.0);
}

#[test]
fn region_scrolled_past_is_one() {
    let g = ScrollGeometry::new(-5000.0, 2000.0, 800.0);
    assert_eq!(g.progress(), 1.0);
}

#[test]
fn short_region_is_near_binary() {
    let g = ScrollGeometry::new(-1.0, 400.0, 800.0);
    assert_eq!(g.total_scroll(), 1.0);
    assert_eq!(g.progress(), 1.0);
    assert_eq!(ScrollGeometry::new(-250.0, 400.0, 800.0).progress(), 1.0);
    assert_eq!(ScrollGeometry::new(0.0, 400.0, 800.0).progress(), 0.0);
    assert_eq!(ScrollGeometry::new(-0.25, 400.0, 800.0).progress(), 0.25);
}

#[test]
fn progress_is_always_in_unit_range() {
    let values = [
        f64::NEG_INFINITY,
        -1e12,
        -1234.5,
        -1.0,
        -0.0,
        0.0,
        0.5,
        800.0,
        1e12,
        f64::INFINITY,
        f64::NAN,
    ];
    for &top in &values {
        for &height in &values {
            for &viewport in &values {
                let p = ScrollGeometry::new(top, height, viewport).progress();
                assert!(
                    (0.0..=1.0).contains(&p),
                    "top={top} height={height} viewport={viewport} -> {p}"
                );
            }
        }
    }
}

#[test]
fn from_rect_uses_top_and_height() {
    let rect = kurbo::Rect::new(0.0, -600.0, 1280.0, 1400.0);
    let g = ScrollGeometry::from_rect(rect, 800.0);
    assert_eq!(g.region_top, -600.0);
    assert_eq!(g.region_height, 2000.0);
    assert_eq!(g.progress(), 0.5);
}
