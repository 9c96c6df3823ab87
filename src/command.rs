//! Controller command codes.

/// First byte of every frame, selecting the controller command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Command {
    /// Set the current color from an RGB triple.
    SetRgb = 0xA1,
    /// Set the current color from an RGBW quadruple.
    SetRgbw = 0xA2,
    /// Set the current color from hue, saturation and value.
    SetHsv = 0xA3,
    /// Assign the current color to one LED.
    SetLed = 0xA4,
    /// Assign the current color to every LED.
    SetAll = 0xA5,
    /// Assign the current color to a range of LEDs.
    SetRange = 0xA6,
    /// Fill a range with a hue-stepped rainbow.
    SetRainbow = 0xA7,
    /// Controller-side gradient. Reserved, gradients are interpolated by the driver.
    Gradient = 0xA8,
    /// Configure LED count and type.
    Init = 0xB1,
    /// Latch the frame buffer out to the strip.
    Show = 0xB2,
    /// Shift a range towards higher indices.
    ShiftUp = 0xB3,
    /// Shift a range towards lower indices.
    ShiftDown = 0xB4,
    /// Copy one LED's color to another.
    CopyLed = 0xB5,
    /// Repeat a range several times in a row.
    Repeat = 0xB6,
    /// Reassign the color channel positions.
    RgbOrder = 0xC1,
}

impl Command {
    /// Returns the wire byte for this command.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl From<Command> for u8 {
    fn from(command: Command) -> Self {
        command.code()
    }
}
