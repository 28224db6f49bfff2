#![allow(clippy::float_cmp)]

use super::*;

fn viewport(width: f64, height: f64, scroll_y: f64) -> Viewport {
    Viewport { width, height, scroll_y }
}

#[test]
fn default_placement_is_offset_below_right() {
    let p = place_tooltip(Pointer::new(100.0, 200.0), Size::new(200.0, 150.0), viewport(1600.0, 900.0, 0.0));
    assert_eq!(p, Placement { left: 115.0, top: 215.0 });
}

#[test]
fn flips_left_when_right_edge_overflows() {
    let p = place_tooltip(Pointer::new(1500.0, 100.0), Size::new(200.0, 150.0), viewport(1600.0, 900.0, 0.0));
    assert_eq!(p.left, 1285.0);
    assert_eq!(p.top, 115.0);
}

#[test]
fn flips_up_when_bottom_edge_overflows() {
    let p = place_tooltip(Pointer::new(100.0, 800.0), Size::new(200.0, 150.0), viewport(1600.0, 900.0, 0.0));
    assert_eq!(p.left, 115.0);
    assert_eq!(p.top, 800.0 - 150.0 - 15.0);
}

#[test]
fn flips_both_axes_independently() {
    let p = place_tooltip(Pointer::new(1500.0, 800.0), Size::new(200.0, 150.0), viewport(1600.0, 900.0, 0.0));
    assert_eq!(p, Placement { left: 1285.0, top: 635.0 });
}

#[test]
fn scroll_offset_extends_vertical_bound() {
    // pageY 1200 on a page scrolled by 600: the visible bottom is at 1500.
    let p = place_tooltip(Pointer::new(100.0, 1200.0), Size::new(200.0, 150.0), viewport(1600.0, 900.0, 600.0));
    assert_eq!(p.top, 1215.0);
}

#[test]
fn scroll_offset_does_not_affect_horizontal_bound() {
    let p = place_tooltip(Pointer::new(1500.0, 100.0), Size::new(200.0, 150.0), viewport(1600.0, 900.0, 600.0));
    assert_eq!(p.left, 1285.0);
}

#[test]
fn exact_fit_does_not_flip() {
    // 1385 + 15 + 200 == 1600: touching the edge is not overflowing.
    let p = place_tooltip(Pointer::new(1385.0, 100.0), Size::new(200.0, 150.0), viewport(1600.0, 900.0, 0.0));
    assert_eq!(p.left, 1400.0);
}
