//! Core types shared by the frame encoders and the driver.

use crate::config::MAX_HUE;

/// LED type, stored as the number of color bits per LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum LedType {
    /// Three channel LEDs such as the WS2812.
    #[default]
    Rgb = 24,

    /// Four channel LEDs with a dedicated white die, such as the SK6812 RGBW.
    Rgbw = 32,
}

impl LedType {
    /// Returns the wire byte for this LED type.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// Channel order of RGB-class LEDs.
///
/// The controller natively drives GRB. Selecting [`ColorOrder::Rgb`] makes
/// initialisation send an extra channel reassignment frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ColorOrder {
    /// Red, green, blue.
    Rgb = 0,

    /// Green, red, blue (WS2812 and the controller's default).
    #[default]
    Grb = 1,
}

/// A color in the controller's HSV format.
///
/// Hue is in degrees. Values above 359 are clamped when encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hsv {
    /// Hue in degrees (0-359).
    pub hue: u16,

    /// Saturation (0-255).
    pub saturation: u8,

    /// Value (0-255).
    pub value: u8,
}

impl Hsv {
    /// Creates a new HSV color.
    #[inline]
    pub const fn new(hue: u16, saturation: u8, value: u8) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// Returns the hue clamped to the controller's legal range.
    #[inline]
    pub const fn clamped_hue(&self) -> u16 {
        if self.hue > MAX_HUE { MAX_HUE } else { self.hue }
    }
}

/// A color with a separate white channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgbw {
    /// Red channel (0-255)
    pub red: u8,
    /// Green channel (0-255)
    pub green: u8,
    /// Blue channel (0-255)
    pub blue: u8,
    /// White channel (0-255), used by SK6812 LEDs
    pub white: u8,
}

impl Rgbw {
    /// Creates an RGBW color.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8, white: u8) -> Self {
        Self {
            red,
            green,
            blue,
            white,
        }
    }
}

/// Why a command was not transmitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SkipReason {
    /// An index or range bound is past the highest configured LED.
    OutOfRange,

    /// The range start lies after its end.
    InvertedRange,

    /// The gradient has no step inside the strip.
    NotVisible,

    /// A hardware reset was requested without a reset pin.
    NoResetLine,
}

impl core::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SkipReason::OutOfRange => write!(f, "index past the highest configured LED"),
            SkipReason::InvertedRange => write!(f, "range start lies after its end"),
            SkipReason::NotVisible => write!(f, "gradient lies entirely outside the strip"),
            SkipReason::NoResetLine => write!(f, "no reset pin configured"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SkipReason {}

/// Result of a command that passed transport without error.
///
/// Invalid indices never reach the wire. Instead of failing, the command
/// reports [`CommandStatus::Skipped`] so animation loops keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandStatus {
    /// Every frame of the command was transmitted.
    Sent,

    /// Nothing was transmitted.
    Skipped(SkipReason),
}

impl CommandStatus {
    /// Returns `true` if the command reached the controller.
    #[inline]
    pub const fn is_sent(&self) -> bool {
        matches!(self, CommandStatus::Sent)
    }

    /// Returns `true` if the command was dropped by validation.
    #[inline]
    pub const fn is_skipped(&self) -> bool {
        matches!(self, CommandStatus::Skipped(_))
    }

    /// Turns a skipped command into an error, for callers that want strict validation.
    ///
    /// # Errors
    /// Returns the [`SkipReason`] if the command was skipped.
    pub const fn strict(self) -> Result<(), SkipReason> {
        match self {
            CommandStatus::Sent => Ok(()),
            CommandStatus::Skipped(reason) => Err(reason),
        }
    }
}
