#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`DdBooster`**: Driver owning the SPI device, a delay and an optional reset pin
//! - **`BoosterConfig`**: LED count, LED type and channel order sent on `init`
//! - **`Frame`**: One encoded SPI transaction (at most 8 bytes)
//! - **`Command`**: The controller's command codes
//! - **`CommandStatus`**: Whether a command was sent or skipped by validation
//! - **`Hsv`** / **`Rgbw`**: The controller's HSV and RGBW color formats
//!
//! RGB colors are `Srgb<u8>` from `palette`. The [`colors`] module converts
//! floating point `palette` colors into the controller formats.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod booster;
pub mod colors;
pub mod command;
pub mod config;
pub mod frame;
pub mod gradient;
pub mod types;

pub use booster::{BoosterResult, DdBooster, Error, NoResetPin};
pub use command::Command;
pub use config::{
    BoosterConfig, INIT_SETTLE_MS, MAX_FRAME_LEN, MAX_HUE, MAX_LEDS, RESET_PULSE_MS,
    SHOW_DELAY_PER_LED_US, SPI_FREQUENCY_HZ, SPI_MODE,
};
pub use frame::Frame;
pub use types::{ColorOrder, CommandStatus, Hsv, LedType, Rgbw, SkipReason};
