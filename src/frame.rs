//! Wire frames.
//!
//! A [`Frame`] is the byte sequence of one SPI transaction. The constructors
//! here only encode; index validation happens in the driver, which knows the
//! configured strip length.
//!
//! Some frames carry two commands back to back (for example `clear_led` is
//! `SETRGB 0 0 0` followed by `SETLED i`). The controller parses them as two
//! commands, but they share one transaction.

use crate::command::Command;
use crate::config::{BoosterConfig, MAX_FRAME_LEN};
use crate::types::{Hsv, Rgbw};
use heapless::Vec;
use palette::Srgb;

/// One wire transaction, at most [`MAX_FRAME_LEN`] bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    bytes: Vec<u8, MAX_FRAME_LEN>,
}

impl Frame {
    fn from_array<const L: usize>(bytes: [u8; L]) -> Self {
        const { assert!(L <= MAX_FRAME_LEN) };
        Self {
            bytes: bytes.into_iter().collect(),
        }
    }

    /// The encoded bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Mutable bytes, for full-duplex transfers that overwrite the buffer.
    #[inline]
    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// `INIT count type`.
    pub fn init(config: &BoosterConfig) -> Self {
        Self::from_array([
            Command::Init.code(),
            config.wire_led_count(),
            config.get_led_type().code(),
        ])
    }

    /// `RGBORDER 3 2 1`: swaps the first and third channel slots, turning the
    /// native GRB output into RGB.
    pub fn rgb_order() -> Self {
        Self::from_array([Command::RgbOrder.code(), 3, 2, 1])
    }

    /// `SETRGB r g b`
    pub fn set_rgb(color: Srgb<u8>) -> Self {
        Self::from_array([Command::SetRgb.code(), color.red, color.green, color.blue])
    }

    /// `SETRGBW r g b w`
    pub fn set_rgbw(color: Rgbw) -> Self {
        Self::from_array([
            Command::SetRgbw.code(),
            color.red,
            color.green,
            color.blue,
            color.white,
        ])
    }

    /// `SETHSV hue_lo hue_hi sat val`, hue clamped to 359.
    pub fn set_hsv(color: Hsv) -> Self {
        let [hue_lo, hue_hi] = color.clamped_hue().to_le_bytes();
        Self::from_array([
            Command::SetHsv.code(),
            hue_lo,
            hue_hi,
            color.saturation,
            color.value,
        ])
    }

    /// `SETLED index`
    pub fn set_led(index: u8) -> Self {
        Self::from_array([Command::SetLed.code(), index])
    }

    /// `SETRGB r g b` + `SETLED index` in one transaction.
    pub fn paint_led(color: Srgb<u8>, index: u8) -> Self {
        Self::from_array([
            Command::SetRgb.code(),
            color.red,
            color.green,
            color.blue,
            Command::SetLed.code(),
            index,
        ])
    }

    /// Paints `index` black, see [`paint_led`](Self::paint_led).
    pub fn clear_led(index: u8) -> Self {
        Self::paint_led(Srgb::new(0, 0, 0), index)
    }

    /// `SETALL`
    pub fn set_all() -> Self {
        Self::from_array([Command::SetAll.code()])
    }

    /// `SETRGB 0 0 0` + `SETALL` in one transaction.
    pub fn clear_all() -> Self {
        Self::from_array([Command::SetRgb.code(), 0, 0, 0, Command::SetAll.code()])
    }

    /// `SETRANGE start end`
    pub fn set_range(start: u8, end: u8) -> Self {
        Self::from_array([Command::SetRange.code(), start, end])
    }

    /// `SETRAINBOW hue_lo hue_hi sat val start end step`, hue clamped to 359.
    pub fn set_rainbow(color: Hsv, start: u8, end: u8, step: u8) -> Self {
        let [hue_lo, hue_hi] = color.clamped_hue().to_le_bytes();
        Self::from_array([
            Command::SetRainbow.code(),
            hue_lo,
            hue_hi,
            color.saturation,
            color.value,
            start,
            end,
            step,
        ])
    }

    /// `SHIFTUP start end count`
    pub fn shift_up(start: u8, end: u8, count: u8) -> Self {
        Self::from_array([Command::ShiftUp.code(), start, end, count])
    }

    /// `SHIFTDOWN start end count`
    pub fn shift_down(start: u8, end: u8, count: u8) -> Self {
        Self::from_array([Command::ShiftDown.code(), start, end, count])
    }

    /// `COPYLED from to`
    pub fn copy_led(from: u8, to: u8) -> Self {
        Self::from_array([Command::CopyLed.code(), from, to])
    }

    /// `REPEAT start end count`
    pub fn repeat(start: u8, end: u8, count: u8) -> Self {
        Self::from_array([Command::Repeat.code(), start, end, count])
    }

    /// `SHOW`
    pub fn show() -> Self {
        Self::from_array([Command::Show.code()])
    }
}

impl AsRef<[u8]> for Frame {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}
