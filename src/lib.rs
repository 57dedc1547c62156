//! SSD1306 OLED Display Driver
//!
//! A driver for SSD1306-family monochrome OLED display controllers,
//! exposing a framebuffer abstraction over hardware SPI, bit-banged SPI,
//! or I2C.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - 128x64, 128x32, and 96x16 panel geometries
//! - Internal charge pump or external VCC supply
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::i2c::{I2c, Operation};
//! use ssd1306::{DEFAULT_I2C_ADDRESS, Display, I2cInterface, PanelSize, VccMode};
//!
//! # struct MockI2c;
//! # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: u8,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let i2c = MockI2c;
//! # let rst = MockPin;
//! # let mut delay = MockDelay;
//! let interface = match I2cInterface::new(i2c, rst, DEFAULT_I2C_ADDRESS) {
//!     Ok(interface) => interface,
//!     Err(_) => return,
//! };
//! let mut display = Display::new(interface, PanelSize::Size128x64);
//!
//! let _ = display.begin(VccMode::Internal, &mut delay);
//! display.clear();
//! display.set_pixel(64, 32, true);
//! let _ = display.flush();
//! ```
//!
//! For SPI wiring, construct an [`SpiInterface`] (hardware SPI plus the
//! mandatory DC pin) or a [`SoftSpiInterface`] (five GPIO pins) instead.

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// 1-bit raster input for [`Display::load_bitmap`]
pub mod bitmap;
/// SSD1306 command definitions
pub mod command;
/// Panel geometry profiles and supply modes
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Hardware interface abstraction
pub mod interface;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use bitmap::Bitmap;
pub use config::{MAX_BUFFER_LEN, PanelProfile, PanelSize, VccMode};
pub use display::Display;
pub use error::{BitmapError, ConfigError, Error};
pub use interface::{
    ALTERNATE_I2C_ADDRESS, DEFAULT_I2C_ADDRESS, DisplayInterface, I2C_CHUNK_LEN, I2cInterface,
    InterfaceError, SoftSpiInterface, SpiInterface,
};
