//! Core display operations
//!
//! [`Display`] owns the framebuffer and the transport binding, and turns
//! buffer contents into the controller's page-addressed byte stream.
//!
//! The framebuffer invariant: byte `page * width + x` holds, in bit `b`
//! (0 = least significant), the pixel at `(x, page * 8 + b)`; bit value
//! 1 = lit. Mutating operations ([`clear`](Display::clear),
//! [`load_bitmap`](Display::load_bitmap),
//! [`set_pixel`](Display::set_pixel)) touch only the buffer; nothing
//! reaches the panel until [`flush`](Display::flush).

use embedded_hal::delay::DelayNs;

use crate::bitmap::Bitmap;
use crate::command::{
    CHARGE_PUMP, COLUMN_ADDR, COM_SCAN_DEC, DISPLAY_ALL_ON_RESUME, DISPLAY_OFF, DISPLAY_ON,
    MEMORY_MODE, MEMORY_MODE_HORIZONTAL, NORMAL_DISPLAY, PAGE_ADDR, SEG_REMAP, SET_COM_PINS,
    SET_CONTRAST, SET_DISPLAY_CLOCK_DIV, SET_DISPLAY_OFFSET, SET_MULTIPLEX, SET_PRECHARGE,
    SET_START_LINE, SET_VCOM_DETECT,
};
use crate::config::{MAX_BUFFER_LEN, PanelProfile, PanelSize, VccMode};
use crate::error::Error;
use crate::interface::DisplayInterface;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// SSD1306 display driver
///
/// Generic over the transport binding; construct one of the
/// [`interface`](crate::interface) types and hand it in together with
/// the panel geometry. The driver exclusively owns the interface and the
/// framebuffer; it is not reentrant, and sharing across threads must be
/// serialized externally.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Transport binding
    interface: I,
    /// Panel tuning profile, fixed at construction
    profile: PanelProfile,
    /// Supply mode, fixed at [`begin`](Display::begin)
    vcc: VccMode,
    /// Page-packed pixel buffer; the first `profile.buffer_len()` bytes
    /// are live
    buffer: [u8; MAX_BUFFER_LEN],
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a driver for the given panel geometry
    ///
    /// The framebuffer starts out all-unlit. The panel stays untouched
    /// until [`begin`](Display::begin).
    pub fn new(interface: I, size: PanelSize) -> Self {
        Self {
            interface,
            profile: size.profile(),
            vcc: VccMode::default(),
            buffer: [0; MAX_BUFFER_LEN],
        }
    }

    /// Reset, initialize, and power on the display
    ///
    /// Runs the hardware reset, emits the geometry- and supply-specific
    /// initialization sequence, and turns the panel on. Must be called
    /// before the first [`flush`](Display::flush); call it again to
    /// change the supply mode.
    pub fn begin<D: DelayNs>(&mut self, vcc: VccMode, delay: &mut D) -> DisplayResult<I> {
        self.vcc = vcc;
        log::debug!(
            "initializing {}x{} panel",
            self.profile.width,
            self.profile.height
        );
        self.reset(delay)?;
        self.initialize()?;
        self.send_commands(&[DISPLAY_ON])
    }

    /// Perform a hardware reset
    ///
    /// Drives the reset pin high, low, high with the controller's
    /// required settle times. Leaves the controller unconfigured;
    /// normally called via [`begin`](Display::begin).
    pub fn reset<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.interface.reset(delay).map_err(Error::Interface)
    }

    /// Emit the initialization command sequence
    ///
    /// The exact bytes and their order are a protocol contract with the
    /// controller; a deviation produces a garbled or blank panel.
    fn initialize(&mut self) -> DisplayResult<I> {
        let profile = self.profile;
        let vcc = self.vcc;
        self.send_commands(&[
            DISPLAY_OFF,
            SET_DISPLAY_CLOCK_DIV,
            profile.clock_divider,
            SET_MULTIPLEX,
            profile.multiplex,
            SET_DISPLAY_OFFSET,
            0x00,
            SET_START_LINE,
            CHARGE_PUMP,
            vcc.charge_pump(),
            MEMORY_MODE,
            MEMORY_MODE_HORIZONTAL,
            SEG_REMAP | 0x01,
            COM_SCAN_DEC,
            SET_COM_PINS,
            profile.com_pins,
            SET_CONTRAST,
            profile.contrast(vcc),
            SET_PRECHARGE,
            vcc.precharge(),
            SET_VCOM_DETECT,
            0x40,
            DISPLAY_ALL_ON_RESUME,
            NORMAL_DISPLAY,
        ])
    }

    /// Write the framebuffer to the panel
    ///
    /// Sets the column and page address windows to the full panel, then
    /// streams every live buffer byte. Each call rewrites the whole
    /// addressable area; there is no dirty tracking, so the caller
    /// controls the flush rate.
    pub fn flush(&mut self) -> DisplayResult<I> {
        let last_column = (self.profile.width - 1) as u8;
        let last_page = (self.profile.page_count() - 1) as u8;
        self.send_commands(&[
            COLUMN_ADDR,
            0x00,
            last_column,
            PAGE_ADDR,
            0x00,
            last_page,
        ])?;
        self.interface
            .send_data(&self.buffer[..self.profile.buffer_len()])
            .map_err(Error::Interface)
    }

    /// Reset the framebuffer to all-unlit
    ///
    /// The panel is untouched until the next [`flush`](Display::flush).
    pub fn clear(&mut self) {
        self.buffer.fill(0);
    }

    /// Pack a monochrome raster into the framebuffer
    ///
    /// The bitmap must match the panel dimensions exactly. Each page
    /// byte is packed scanning the strip's rows bottom-up, so bit 7
    /// holds row `page * 8 + 7` and bit 0 holds row `page * 8`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BitmapSize`] on a dimension mismatch, leaving
    /// the framebuffer unmodified.
    pub fn load_bitmap(&mut self, bitmap: &Bitmap<'_>) -> DisplayResult<I> {
        if bitmap.width() != self.profile.width || bitmap.height() != self.profile.height {
            return Err(Error::BitmapSize {
                width: bitmap.width(),
                height: bitmap.height(),
                expected_width: self.profile.width,
                expected_height: self.profile.height,
            });
        }
        let mut index = 0;
        for page in 0..self.profile.page_count() {
            for x in 0..self.profile.width {
                let mut bits = 0u8;
                for row in (page * 8..page * 8 + 8).rev() {
                    bits = (bits << 1) | u8::from(bitmap.pixel(x, row));
                }
                self.buffer[index] = bits;
                index += 1;
            }
        }
        Ok(())
    }

    /// Set a single pixel in the framebuffer
    ///
    /// Out-of-bounds coordinates are ignored.
    pub fn set_pixel(&mut self, x: u16, y: u16, lit: bool) {
        if x >= self.profile.width || y >= self.profile.height {
            return;
        }
        let index = (y / 8) as usize * self.profile.width as usize + x as usize;
        let mask = 1u8 << (y % 8);
        if lit {
            self.buffer[index] |= mask;
        } else {
            self.buffer[index] &= !mask;
        }
    }

    /// Set the panel contrast
    ///
    /// Sends the contrast command followed by the raw level; the full
    /// `u8` range is valid.
    pub fn set_contrast(&mut self, contrast: u8) -> DisplayResult<I> {
        self.send_commands(&[SET_CONTRAST, contrast])
    }

    /// Contrast level for a dimmed or normal display
    ///
    /// Returns 0x00 when `dim` is set; otherwise the supply-appropriate
    /// normal level (0x9F external, 0xCF internal). The value is only
    /// computed, never transmitted; pass it to
    /// [`set_contrast`](Display::set_contrast) to apply it.
    pub fn dim_contrast(&self, dim: bool) -> u8 {
        if dim {
            return 0x00;
        }
        match self.vcc {
            VccMode::Internal => 0xCF,
            VccMode::External => 0x9F,
        }
    }

    /// The panel tuning profile this driver was constructed with
    pub fn profile(&self) -> PanelProfile {
        self.profile
    }

    /// The supply mode set by the last [`begin`](Display::begin)
    pub fn vcc_mode(&self) -> VccMode {
        self.vcc
    }

    /// Read-only view of the live framebuffer bytes
    pub fn buffer(&self) -> &[u8] {
        &self.buffer[..self.profile.buffer_len()]
    }

    /// Consume the driver and release the transport binding
    pub fn release(self) -> I {
        self.interface
    }

    fn send_commands(&mut self, commands: &[u8]) -> DisplayResult<I> {
        self.interface
            .send_commands(commands)
            .map_err(Error::Interface)
    }
}
