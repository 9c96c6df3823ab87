//! Shared test infrastructure for dd-booster integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use std::cell::RefCell;
use std::rc::Rc;

use dd_booster::DdBooster;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, OutputPin};
use embedded_hal::spi::{self, ErrorKind, Operation, SpiDevice};

// ============================================================================
// Event Log
// ============================================================================

/// Everything the driver did to the hardware, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Frame(Vec<u8>),
    DelayMs(u32),
    DelayUs(u32),
    DelayNs(u32),
    PinLow,
    PinHigh,
}

/// Log shared by all mocks of one test
#[derive(Debug, Clone, Default)]
pub struct EventLog(Rc<RefCell<Vec<Event>>>);

impl EventLog {
    fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    /// Transmitted frames only
    pub fn frames(&self) -> Vec<Vec<u8>> {
        self.0
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Frame(bytes) => Some(bytes.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

// ============================================================================
// Mock SPI
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockSpiError;

impl spi::Error for MockSpiError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// SPI device recording each transaction as one frame
pub struct MockSpi {
    log: EventLog,
    /// Transactions left before every further one fails; `None` never fails
    remaining: Option<usize>,
}

impl MockSpi {
    /// Make every following transaction fail
    pub fn fail(&mut self) {
        self.fail_after(0);
    }

    /// Let `count` transactions succeed, then fail the rest
    pub fn fail_after(&mut self, count: usize) {
        self.remaining = Some(count);
    }
}

impl spi::ErrorType for MockSpi {
    type Error = MockSpiError;
}

impl SpiDevice for MockSpi {
    fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Self::Error> {
        match self.remaining {
            Some(0) => return Err(MockSpiError),
            Some(ref mut left) => *left -= 1,
            None => {}
        }

        let mut frame = Vec::new();
        for op in operations.iter_mut() {
            match op {
                Operation::Write(bytes) => frame.extend_from_slice(bytes),
                Operation::Transfer(read, write) => {
                    frame.extend_from_slice(write);
                    read.fill(0xFF);
                }
                Operation::TransferInPlace(bytes) => {
                    frame.extend_from_slice(bytes);
                    // Controller answers with garbage the driver must ignore
                    bytes.fill(0xFF);
                }
                Operation::Read(read) => read.fill(0xFF),
                Operation::DelayNs(_) => {}
            }
        }
        self.log.push(Event::Frame(frame));
        Ok(())
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

pub struct MockDelay {
    log: EventLog,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.push(Event::DelayNs(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.log.push(Event::DelayUs(us));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.push(Event::DelayMs(ms));
    }
}

// ============================================================================
// Mock Reset Pin
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockPinError;

impl digital::Error for MockPinError {
    fn kind(&self) -> digital::ErrorKind {
        digital::ErrorKind::Other
    }
}

pub struct MockPin {
    log: EventLog,
    fail_low: bool,
    fail_high: bool,
}

impl MockPin {
    /// Make driving the pin low fail
    pub fn fail_low(&mut self) {
        self.fail_low = true;
    }

    /// Make driving the pin high fail
    pub fn fail_high(&mut self) {
        self.fail_high = true;
    }
}

impl digital::ErrorType for MockPin {
    type Error = MockPinError;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        if self.fail_low {
            return Err(MockPinError);
        }
        self.log.push(Event::PinLow);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        if self.fail_high {
            return Err(MockPinError);
        }
        self.log.push(Event::PinHigh);
        Ok(())
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Mocks sharing one event log
pub fn mocks() -> (MockSpi, MockDelay, MockPin, EventLog) {
    let log = EventLog::default();
    (
        MockSpi {
            log: log.clone(),
            remaining: None,
        },
        MockDelay { log: log.clone() },
        MockPin {
            log: log.clone(),
            fail_low: false,
            fail_high: false,
        },
        log,
    )
}

/// Driver without reset pin
pub fn booster() -> (DdBooster<MockSpi, MockDelay>, EventLog) {
    let (spi, delay, _pin, log) = mocks();
    (DdBooster::new(spi, delay), log)
}

/// Driver initialised for `led_count` WS2812 LEDs, with the init traffic cleared from the log
pub fn initialised_booster(led_count: u16) -> (DdBooster<MockSpi, MockDelay>, EventLog) {
    let (mut booster, log) = booster();
    booster
        .init(dd_booster::BoosterConfig::ws2812(led_count))
        .unwrap();
    log.clear();
    (booster, log)
}
