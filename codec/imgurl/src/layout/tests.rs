use super::*;
use pretty_assertions::assert_eq;

#[test]
fn contain_wide_image_in_tall_box() {
    assert_eq!(
        contain_layout(20, 10, 100, 200),
        Some(Layout { x: 0.0, y: 75.0, w: 100.0, h: 50.0 })
    );
}

#[test]
fn contain_tall_image_in_wide_box_rounds_offset_up() {
    assert_eq!(
        contain_layout(150, 300, 100, 50),
        Some(Layout { x: 38.0, y: 0.0, w: 25.0, h: 50.0 })
    );
}

#[test]
fn cover_wide_image_in_tall_box() {
    assert_eq!(
        cover_layout(20, 10, 100, 200),
        Some(Layout { x: -150.0, y: 0.0, w: 400.0, h: 200.0 })
    );
}

#[test]
fn cover_tall_image_in_wide_box() {
    assert_eq!(
        cover_layout(150, 300, 200, 80),
        Some(Layout { x: 0.0, y: -160.0, w: 200.0, h: 400.0 })
    );
}

#[test]
fn same_ratio_fills_the_box() {
    let expected = Some(Layout { x: 0.0, y: 0.0, w: 200.0, h: 100.0 });
    assert_eq!(contain_layout(40, 20, 200, 100), expected);
    assert_eq!(cover_layout(40, 20, 200, 100), expected);
}

#[test]
fn negative_half_rounds_toward_positive() {
    assert_eq!(round_half_up(-2.5), -2.0);
    assert_eq!(round_half_up(2.5), 3.0);
}

#[test]
fn zero_dimensions_have_no_layout() {
    assert_eq!(contain_layout(0, 10, 100, 100), None);
    assert_eq!(cover_layout(10, 10, 100, 0), None);
}
