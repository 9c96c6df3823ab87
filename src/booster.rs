//! DIGI-DOT-BOOSTER driver.
//!
//! Provides [`DdBooster`], which validates lighting operations against the
//! configured strip length, encodes them into [`Frame`]s and sends each frame
//! as one SPI transaction.
//!
//! The controller keeps the current color and the LED buffer. The driver
//! mirrors none of it, so every call is a stateless encode-and-transmit step.

use crate::config::{
    BoosterConfig, INIT_SETTLE_MS, RESET_PULSE_MS, SHOW_DELAY_PER_LED_US,
};
use crate::frame::Frame;
use crate::gradient::{self, GradientPlan};
use crate::types::{CommandStatus, Hsv, Rgbw, SkipReason};
use core::convert::Infallible;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, OutputPin};
use embedded_hal::spi::SpiDevice;
use palette::Srgb;

/// Errors raised by the bus or the reset pin.
///
/// Validation problems are not errors; see [`CommandStatus::Skipped`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<SpiE, PinE> {
    /// The SPI transaction failed. Controller state is undefined afterwards.
    Spi(SpiE),

    /// Driving the reset pin failed.
    ResetPin(PinE),
}

impl<SpiE: core::fmt::Debug, PinE: core::fmt::Debug> core::fmt::Display for Error<SpiE, PinE> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Spi(e) => write!(f, "SPI transfer failed: {:?}", e),
            Error::ResetPin(e) => write!(f, "reset pin write failed: {:?}", e),
        }
    }
}

#[cfg(feature = "std")]
impl<SpiE: core::fmt::Debug, PinE: core::fmt::Debug> std::error::Error for Error<SpiE, PinE> {}

/// Placeholder reset pin for drivers without a reset line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoResetPin;

impl digital::ErrorType for NoResetPin {
    type Error = Infallible;
}

impl OutputPin for NoResetPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Result type of every driver command.
pub type BoosterResult<SPI, RST> = Result<
    CommandStatus,
    Error<<SPI as embedded_hal::spi::ErrorType>::Error, <RST as digital::ErrorType>::Error>,
>;

/// Drives a DIGI-DOT-BOOSTER over SPI.
///
/// The SPI device must be configured for [`SPI_FREQUENCY_HZ`](crate::SPI_FREQUENCY_HZ)
/// and [`SPI_MODE`](crate::SPI_MODE). Call [`init`](Self::init) before any
/// addressing command; until then only index 0 is accepted.
///
/// # Type Parameters
/// * `SPI` - SPI device wired to the controller
/// * `D` - Blocking delay used for settle times
/// * `RST` - Output pin wired to the controller's RESET input
pub struct DdBooster<SPI, D, RST = NoResetPin> {
    spi: SPI,
    delay: D,
    reset_pin: Option<RST>,
    highest_index: u8,
}

impl<SPI: SpiDevice, D: DelayNs> DdBooster<SPI, D, NoResetPin> {
    /// Creates a driver without a reset line.
    pub fn new(spi: SPI, delay: D) -> Self {
        Self {
            spi,
            delay,
            reset_pin: None,
            highest_index: 0,
        }
    }

    /// Attaches the output pin connected to the controller's RESET input,
    /// enabling [`hard_reset`](DdBooster::hard_reset).
    pub fn with_reset_pin<P: OutputPin>(self, pin: P) -> DdBooster<SPI, D, P> {
        DdBooster {
            spi: self.spi,
            delay: self.delay,
            reset_pin: Some(pin),
            highest_index: self.highest_index,
        }
    }
}

impl<SPI: SpiDevice, D: DelayNs, RST: OutputPin> DdBooster<SPI, D, RST> {
    /// Sets LED count, type and channel order, then waits for the controller to settle.
    ///
    /// Overwrites the highest addressable index. Sends the init frame and,
    /// for RGB-class LEDs in RGB order, a channel reassignment frame.
    pub fn init(&mut self, config: BoosterConfig) -> BoosterResult<SPI, RST> {
        self.highest_index = config.highest_index();

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "dd-booster: init {} LEDs (highest index {})",
            config.led_count(),
            self.highest_index
        );

        self.send(Frame::init(&config))?;
        if config.needs_reorder() {
            self.send(Frame::rgb_order())?;
        }

        self.delay.delay_ms(INIT_SETTLE_MS);
        Ok(CommandStatus::Sent)
    }

    /// Pulses the reset line low for 100 ms, then waits another 100 ms.
    ///
    /// Skipped when no reset pin is attached.
    pub fn hard_reset(&mut self) -> BoosterResult<SPI, RST> {
        let Some(pin) = self.reset_pin.as_mut() else {
            return Ok(skipped(SkipReason::NoResetLine));
        };

        pin.set_low().map_err(Error::ResetPin)?;
        self.delay.delay_ms(RESET_PULSE_MS);
        pin.set_high().map_err(Error::ResetPin)?;
        self.delay.delay_ms(RESET_PULSE_MS);
        Ok(CommandStatus::Sent)
    }

    /// Sets the current color from RGB.
    pub fn set_rgb(&mut self, color: Srgb<u8>) -> BoosterResult<SPI, RST> {
        self.send(Frame::set_rgb(color))
    }

    /// Alias of [`set_rgb`](Self::set_rgb).
    #[inline]
    pub fn set_color(&mut self, color: Srgb<u8>) -> BoosterResult<SPI, RST> {
        self.set_rgb(color)
    }

    /// Sets the current color from RGBW.
    pub fn set_rgbw(&mut self, color: Rgbw) -> BoosterResult<SPI, RST> {
        self.send(Frame::set_rgbw(color))
    }

    /// Sets the current color from HSV. Hues above 359 are clamped.
    pub fn set_hsv(&mut self, color: Hsv) -> BoosterResult<SPI, RST> {
        self.send(Frame::set_hsv(color))
    }

    /// Assigns the current color to one LED.
    pub fn set_led(&mut self, index: u8) -> BoosterResult<SPI, RST> {
        if let Err(reason) = self.check_index(index) {
            return Ok(skipped(reason));
        }
        self.send(Frame::set_led(index))
    }

    /// Turns one LED off. Overwrites the current color with black.
    pub fn clear_led(&mut self, index: u8) -> BoosterResult<SPI, RST> {
        if let Err(reason) = self.check_index(index) {
            return Ok(skipped(reason));
        }
        self.send(Frame::clear_led(index))
    }

    /// Assigns the current color to every LED.
    pub fn set_all(&mut self) -> BoosterResult<SPI, RST> {
        self.send(Frame::set_all())
    }

    /// Turns every LED off. Overwrites the current color with black.
    pub fn clear_all(&mut self) -> BoosterResult<SPI, RST> {
        self.send(Frame::clear_all())
    }

    /// Assigns the current color to LEDs `start..=end`.
    pub fn set_range(&mut self, start: u8, end: u8) -> BoosterResult<SPI, RST> {
        if let Err(reason) = self.check_range(start, end) {
            return Ok(skipped(reason));
        }
        self.send(Frame::set_range(start, end))
    }

    /// Fills `start..=end` with a rainbow, advancing the hue by `step`
    /// degrees per LED. The controller computes the colors.
    pub fn set_rainbow(
        &mut self,
        color: Hsv,
        start: u8,
        end: u8,
        step: u8,
    ) -> BoosterResult<SPI, RST> {
        if let Err(reason) = self.check_range(start, end) {
            return Ok(skipped(reason));
        }
        self.send(Frame::set_rainbow(color, start, end, step))
    }

    /// Draws a linear gradient from `from` at `start` to `to` at `end`.
    ///
    /// `start` may be negative and `end` may lie past the last LED; only the
    /// visible part is drawn, with colors taken from the full span. Each
    /// visible LED costs one transaction. A zero-length span only sets the
    /// current color to `from`.
    pub fn set_gradient(
        &mut self,
        start: i32,
        end: i32,
        from: Srgb<u8>,
        to: Srgb<u8>,
    ) -> BoosterResult<SPI, RST> {
        match gradient::plan(start, end, from, to, self.highest_index) {
            Err(reason) => Ok(skipped(reason)),
            Ok(GradientPlan::Solid(color)) => self.set_rgb(color),
            Ok(GradientPlan::Steps(steps)) => {
                for (index, color) in steps {
                    self.send(Frame::paint_led(color, index))?;
                }
                Ok(CommandStatus::Sent)
            }
        }
    }

    /// Shifts the colors of `start..=end` up by `count` positions.
    pub fn shift_up(&mut self, start: u8, end: u8, count: u8) -> BoosterResult<SPI, RST> {
        if let Err(reason) = self.check_range(start, end) {
            return Ok(skipped(reason));
        }
        self.send(Frame::shift_up(start, end, count))
    }

    /// Shifts the colors of `start..=end` down by `count` positions.
    pub fn shift_down(&mut self, start: u8, end: u8, count: u8) -> BoosterResult<SPI, RST> {
        if let Err(reason) = self.check_range(start, end) {
            return Ok(skipped(reason));
        }
        self.send(Frame::shift_down(start, end, count))
    }

    /// Copies the color of LED `from` to LED `to`. Either may be the larger index.
    pub fn copy_led(&mut self, from: u8, to: u8) -> BoosterResult<SPI, RST> {
        if let Err(reason) = self.check_index(from).and(self.check_index(to)) {
            return Ok(skipped(reason));
        }
        self.send(Frame::copy_led(from, to))
    }

    /// Copies `start..=end` `count` times directly after itself.
    pub fn repeat(&mut self, start: u8, end: u8, count: u8) -> BoosterResult<SPI, RST> {
        if let Err(reason) = self.check_range(start, end) {
            return Ok(skipped(reason));
        }
        self.send(Frame::repeat(start, end, count))
    }

    /// Pushes the controller buffer out to the strip and blocks until it is done,
    /// 30 µs per configured LED.
    pub fn show(&mut self) -> BoosterResult<SPI, RST> {
        self.send(Frame::show())?;
        self.delay
            .delay_us(SHOW_DELAY_PER_LED_US * (u32::from(self.highest_index) + 1));
        Ok(CommandStatus::Sent)
    }

    /// Returns the highest addressable LED index.
    #[inline]
    pub fn highest_index(&self) -> u8 {
        self.highest_index
    }

    /// Returns the number of configured LEDs (1-256).
    #[inline]
    pub fn led_count(&self) -> u16 {
        u16::from(self.highest_index) + 1
    }

    /// Returns `true` if a reset pin is attached.
    #[inline]
    pub fn has_reset_pin(&self) -> bool {
        self.reset_pin.is_some()
    }

    /// Consumes the driver, returning the SPI device, delay and reset pin.
    pub fn release(self) -> (SPI, D, Option<RST>) {
        (self.spi, self.delay, self.reset_pin)
    }

    fn check_index(&self, index: u8) -> Result<(), SkipReason> {
        if index > self.highest_index {
            return Err(SkipReason::OutOfRange);
        }
        Ok(())
    }

    fn check_range(&self, start: u8, end: u8) -> Result<(), SkipReason> {
        if start > end {
            return Err(SkipReason::InvertedRange);
        }
        self.check_index(end)
    }

    fn send(&mut self, mut frame: Frame) -> BoosterResult<SPI, RST> {
        #[cfg(feature = "defmt")]
        defmt::trace!("dd-booster: tx {}", frame.as_bytes());

        if let Err(e) = self.spi.transfer_in_place(frame.as_mut_bytes()) {
            #[cfg(feature = "defmt")]
            defmt::error!("dd-booster: SPI transfer failed");
            return Err(Error::Spi(e));
        }
        Ok(CommandStatus::Sent)
    }
}

fn skipped(reason: SkipReason) -> CommandStatus {
    #[cfg(feature = "defmt")]
    defmt::trace!("dd-booster: command skipped: {}", reason);

    CommandStatus::Skipped(reason)
}
