//! Integration tests for colors module

use dd_booster::colors::{self, BLACK, BLUE, GREEN, RED, WHITE};
use dd_booster::{Hsv, Srgb};

#[test]
fn hsv_scales_components() {
    assert_eq!(colors::hsv(0.0, 1.0, 1.0), Hsv::new(0, 255, 255));
    assert_eq!(colors::hsv(120.0, 0.5, 0.0), Hsv::new(120, 128, 0));
    assert_eq!(colors::hsv(240.4, 0.0, 1.0), Hsv::new(240, 0, 255));
}

#[test]
fn hsv_wraps_hue_into_degrees() {
    assert_eq!(colors::hsv(360.0, 1.0, 1.0).hue, 0);
    assert_eq!(colors::hsv(-90.0, 1.0, 1.0).hue, 270);
    assert_eq!(colors::hsv(719.0, 1.0, 1.0).hue, 359);
}

#[test]
fn hsv_clamps_out_of_range_components() {
    let hsv = colors::hsv(10.0, 2.0, -1.0);
    assert_eq!(hsv.saturation, 255);
    assert_eq!(hsv.value, 0);
}

#[test]
fn to_rgb8_converts_and_clamps() {
    assert_eq!(colors::to_rgb8(Srgb::new(1.0, 0.0, 0.0)), RED);
    assert_eq!(colors::to_rgb8(Srgb::new(2.0, -1.0, 1.0)), Srgb::new(255, 0, 255));
    assert_eq!(colors::to_rgb8(Srgb::new(0.0, 0.0, 0.0)), BLACK);
}

#[test]
fn hsv_to_rgb8_primary_colors() {
    assert_eq!(colors::hsv_to_rgb8(Hsv::new(0, 255, 255)), RED);
    assert_eq!(colors::hsv_to_rgb8(Hsv::new(120, 255, 255)), GREEN);
    assert_eq!(colors::hsv_to_rgb8(Hsv::new(240, 255, 255)), BLUE);
    assert_eq!(colors::hsv_to_rgb8(Hsv::new(77, 0, 255)), WHITE);
    assert_eq!(colors::hsv_to_rgb8(Hsv::new(77, 255, 0)), BLACK);
}

#[test]
fn hsv_to_rgb8_clamps_hue() {
    assert_eq!(
        colors::hsv_to_rgb8(Hsv::new(1000, 255, 255)),
        colors::hsv_to_rgb8(Hsv::new(359, 255, 255))
    );
}
