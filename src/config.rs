//! Bus parameters, controller limits and initialisation settings.

use crate::types::{ColorOrder, LedType};
use embedded_hal::spi::Mode;

/// SPI clock the controller expects.
pub const SPI_FREQUENCY_HZ: u32 = 12_000_000;

/// SPI mode the controller expects. Data is sent most significant bit first.
pub const SPI_MODE: Mode = embedded_hal::spi::MODE_0;

/// Largest number of LEDs the controller can drive.
pub const MAX_LEDS: u16 = 256;

/// Largest hue the controller accepts, in degrees.
pub const MAX_HUE: u16 = 359;

/// Largest frame the driver ever sends, in bytes.
pub const MAX_FRAME_LEN: usize = 8;

/// Settle time after initialisation. Not documented by the vendor, but the
/// controller drops commands sent earlier.
pub const INIT_SETTLE_MS: u32 = 20;

/// Duration of each phase of the hardware reset pulse.
pub const RESET_PULSE_MS: u32 = 100;

/// Time the controller needs per LED to push a `show` out to the strip.
pub const SHOW_DELAY_PER_LED_US: u32 = 30;

/// Strip settings sent to the controller on initialisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoosterConfig {
    led_count: u16,
    led_type: LedType,
    color_order: ColorOrder,
}

impl BoosterConfig {
    /// Creates a configuration for `led_count` LEDs with the controller defaults
    /// (RGB-class LEDs in GRB order).
    ///
    /// Counts above [`MAX_LEDS`] are clamped when the configuration is applied.
    pub const fn new(led_count: u16) -> Self {
        Self {
            led_count,
            led_type: LedType::Rgb,
            color_order: ColorOrder::Grb,
        }
    }

    /// WS2812 strip: RGB-class, GRB order.
    pub const fn ws2812(led_count: u16) -> Self {
        Self::new(led_count)
    }

    /// SK6812 RGBW strip.
    pub const fn sk6812(led_count: u16) -> Self {
        Self::new(led_count).led_type(LedType::Rgbw)
    }

    /// Sets the LED type.
    pub const fn led_type(mut self, led_type: LedType) -> Self {
        self.led_type = led_type;
        self
    }

    /// Sets the channel order. Only honoured for RGB-class LEDs.
    pub const fn color_order(mut self, color_order: ColorOrder) -> Self {
        self.color_order = color_order;
        self
    }

    /// Requested LED count, before clamping.
    pub const fn requested_led_count(&self) -> u16 {
        self.led_count
    }

    /// LED count after clamping to [`MAX_LEDS`].
    pub const fn led_count(&self) -> u16 {
        if self.led_count > MAX_LEDS { MAX_LEDS } else { self.led_count }
    }

    /// LED type stored by the [`led_type`](Self::led_type) setter.
    pub const fn get_led_type(&self) -> LedType {
        self.led_type
    }

    /// Channel order stored by the [`color_order`](Self::color_order) setter.
    pub const fn get_color_order(&self) -> ColorOrder {
        self.color_order
    }

    /// Highest addressable index for this configuration.
    ///
    /// 256 LEDs give 255. A count of 0 wraps to 255 as well, matching the
    /// controller which reads a count byte of 0 as 256 LEDs.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn highest_index(&self) -> u8 {
        (self.led_count() as u8).wrapping_sub(1)
    }

    /// Count byte of the init frame: the clamped count rounded up to an even
    /// number, modulo 256.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn wire_led_count(&self) -> u8 {
        let count = self.led_count();
        (count + (count & 1)) as u8
    }

    /// Whether initialisation must reassign the channel order.
    pub const fn needs_reorder(&self) -> bool {
        matches!(self.led_type, LedType::Rgb) && !matches!(self.color_order, ColorOrder::Grb)
    }
}
