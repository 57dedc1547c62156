//! Error types for the driver
//!
//! Three layers of failure, all surfaced synchronously to the caller:
//!
//! - [`Error`] - runtime errors during display operations, wrapping the
//!   transport error of the bound interface
//! - [`ConfigError`] - invalid construction arguments
//! - [`BitmapError`] - malformed raster handed to [`Bitmap`](crate::Bitmap)
//!
//! Transport failures are propagated, never retried; retry policy is a
//! caller concern.

use crate::interface::DisplayInterface;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the underlying hardware
/// error for matching.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Transport error (SPI/I2C/GPIO)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`]
    /// implementation.
    Interface(I::Error),
    /// Bitmap dimensions do not match the configured panel
    BitmapSize {
        /// Bitmap width in pixels
        width: u16,
        /// Bitmap height in pixels
        height: u16,
        /// Panel width in pixels
        expected_width: u16,
        /// Panel height in pixels
        expected_height: u16,
    },
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "interface error: {e:?}"),
            Self::BitmapSize {
                width,
                height,
                expected_width,
                expected_height,
            } => write!(
                f,
                "bitmap is {width}x{height}, panel is {expected_width}x{expected_height}"
            ),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur while constructing a transport binding
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// I2C address does not fit in 7 bits
    InvalidI2cAddress(u8),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidI2cAddress(addr) => {
                write!(f, "invalid 7-bit I2C address: {addr:#04x}")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// Errors that can occur when constructing a [`Bitmap`](crate::Bitmap)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BitmapError {
    /// Data length does not match the declared dimensions
    ///
    /// A 1-bit-per-pixel raster with byte-padded rows must be exactly
    /// `ceil(width / 8) * height` bytes; anything else indicates a size
    /// or bit-depth mismatch.
    DataLength {
        /// Required length in bytes
        expected: usize,
        /// Provided length in bytes
        provided: usize,
    },
}

impl core::fmt::Display for BitmapError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::DataLength { expected, provided } => write!(
                f,
                "bitmap data length {provided} does not match dimensions (expected {expected})"
            ),
        }
    }
}

impl core::error::Error for BitmapError {}
