//! Color conversion helpers.
//!
//! The controller speaks 8-bit RGB and a 16-bit-hue HSV format. These helpers
//! bridge from `palette` floating point colors, which are easier to animate.

use crate::config::MAX_HUE;
use crate::types::Hsv;
use palette::{FromColor, Srgb};

pub const BLACK: Srgb<u8> = Srgb::new(0, 0, 0);
pub const WHITE: Srgb<u8> = Srgb::new(255, 255, 255);
pub const RED: Srgb<u8> = Srgb::new(255, 0, 0);
pub const GREEN: Srgb<u8> = Srgb::new(0, 255, 0);
pub const BLUE: Srgb<u8> = Srgb::new(0, 0, 255);

/// Converts a floating point sRGB color (0.0-1.0 channels) into 8-bit channels.
///
/// Out-of-range channels are clamped.
#[inline]
pub fn to_rgb8(color: Srgb) -> Srgb<u8> {
    let clamped = Srgb::new(
        color.red.clamp(0.0, 1.0),
        color.green.clamp(0.0, 1.0),
        color.blue.clamp(0.0, 1.0),
    );
    clamped.into_format()
}

/// Converts a `palette` HSV color into the controller's HSV format.
///
/// Hue is normalised into 0-359 degrees (negative hues wrap around),
/// saturation and value are scaled from 0.0-1.0 to 0-255.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn to_device_hsv(color: palette::Hsv) -> Hsv {
    let degrees = color.hue.into_positive_degrees();
    let hue = (degrees + 0.5) as u16 % (MAX_HUE + 1);
    Hsv::new(hue, unit_to_u8(color.saturation), unit_to_u8(color.value))
}

/// Creates a controller HSV color from floating point components.
///
/// `hue` is in degrees, `saturation` and `value` in 0.0-1.0.
#[inline]
pub fn hsv(hue: f32, saturation: f32, value: f32) -> Hsv {
    to_device_hsv(palette::Hsv::new(hue, saturation, value))
}

/// Converts a controller HSV color into 8-bit sRGB, for previews or for
/// strips where the caller prefers `set_rgb`.
pub fn hsv_to_rgb8(color: Hsv) -> Srgb<u8> {
    let hsv = palette::Hsv::new(
        f32::from(color.clamped_hue()),
        f32::from(color.saturation) / 255.0,
        f32::from(color.value) / 255.0,
    );
    to_rgb8(Srgb::from_color(hsv))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn unit_to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}
