//! SSD1306 command definitions
//!
//! This module defines the command bytes used to control the SSD1306
//! OLED display controller. Over SPI, commands are distinguished from
//! data by the DC pin (low = command, high = data); over I2C, by the
//! control byte prefixing each transaction (`0x00` = command, `0x40` =
//! data).
//!
//! Commands that take arguments expect them as the following byte(s) of
//! the same command stream, e.g. contrast is set by sending
//! [`SET_CONTRAST`] followed by the contrast value.

// Fundamental commands

/// Set contrast control command (0x81)
///
/// Followed by 1 byte: the contrast level (0x00..=0xFF).
pub const SET_CONTRAST: u8 = 0x81;

/// Resume display from all-on command (0xA4)
///
/// Output follows RAM content again after [`DISPLAY_ALL_ON`].
pub const DISPLAY_ALL_ON_RESUME: u8 = 0xA4;

/// Entire display on command (0xA5)
///
/// Lights every pixel regardless of RAM content.
pub const DISPLAY_ALL_ON: u8 = 0xA5;

/// Normal (non-inverted) display command (0xA6)
///
/// RAM bit 1 = lit pixel.
pub const NORMAL_DISPLAY: u8 = 0xA6;

/// Inverted display command (0xA7)
///
/// RAM bit 0 = lit pixel.
pub const INVERT_DISPLAY: u8 = 0xA7;

/// Display off (sleep mode) command (0xAE)
pub const DISPLAY_OFF: u8 = 0xAE;

/// Display on command (0xAF)
pub const DISPLAY_ON: u8 = 0xAF;

// Addressing commands

/// Set lower column start address command, page addressing mode (0x00)
pub const SET_LOW_COLUMN: u8 = 0x00;

/// Set higher column start address command, page addressing mode (0x10)
pub const SET_HIGH_COLUMN: u8 = 0x10;

/// Set memory addressing mode command (0x20)
///
/// Followed by 1 byte: [`MEMORY_MODE_HORIZONTAL`] (0x00), vertical
/// (0x01), or page (0x02) mode.
pub const MEMORY_MODE: u8 = 0x20;

/// Horizontal addressing mode argument for [`MEMORY_MODE`]
///
/// The column pointer advances per byte and wraps to the next page, so a
/// full frame can be streamed as one linear write.
pub const MEMORY_MODE_HORIZONTAL: u8 = 0x00;

/// Set column address window command (0x21)
///
/// Followed by 2 bytes: start column, end column. Horizontal/vertical
/// addressing modes only.
pub const COLUMN_ADDR: u8 = 0x21;

/// Set page address window command (0x22)
///
/// Followed by 2 bytes: start page, end page. Horizontal/vertical
/// addressing modes only.
pub const PAGE_ADDR: u8 = 0x22;

// Hardware configuration commands

/// Set display start line command (0x40)
///
/// The low 6 bits select the RAM row mapped to COM0; OR the line number
/// into the command byte.
pub const SET_START_LINE: u8 = 0x40;

/// Segment remap command (0xA0)
///
/// OR 0x01 to map column address 127 to SEG0 (horizontal flip).
pub const SEG_REMAP: u8 = 0xA0;

/// Set multiplex ratio command (0xA8)
///
/// Followed by 1 byte: height - 1. Panel-specific.
pub const SET_MULTIPLEX: u8 = 0xA8;

/// COM scan direction, ascending (0xC0)
pub const COM_SCAN_INC: u8 = 0xC0;

/// COM scan direction, descending (0xC8)
///
/// Scans from COM[N-1] to COM0 (vertical flip).
pub const COM_SCAN_DEC: u8 = 0xC8;

/// Set display offset command (0xD3)
///
/// Followed by 1 byte: vertical COM shift (0 for no offset).
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;

/// Set COM pins hardware configuration command (0xDA)
///
/// Followed by 1 byte describing the panel's COM wiring
/// (sequential/alternative, left-right remap). Panel-specific.
pub const SET_COM_PINS: u8 = 0xDA;

// Timing and driving scheme commands

/// Set display clock divide ratio / oscillator frequency command (0xD5)
///
/// Followed by 1 byte: low nibble divide ratio, high nibble oscillator
/// frequency.
pub const SET_DISPLAY_CLOCK_DIV: u8 = 0xD5;

/// Set precharge period command (0xD9)
///
/// Followed by 1 byte: low nibble phase 1, high nibble phase 2, in DCLK
/// units. Supply-mode dependent.
pub const SET_PRECHARGE: u8 = 0xD9;

/// Set VCOMH deselect level command (0xDB)
///
/// Followed by 1 byte selecting the common deselect voltage.
pub const SET_VCOM_DETECT: u8 = 0xDB;

// Charge pump

/// Charge pump setting command (0x8D)
///
/// Followed by 1 byte: 0x14 enables the internal charge pump, 0x10
/// leaves it off for externally supplied VCC.
pub const CHARGE_PUMP: u8 = 0x8D;

// Scrolling commands (no scrolling API is built on these; they are part
// of the controller's command set)

/// Activate scroll command (0x2F)
pub const ACTIVATE_SCROLL: u8 = 0x2F;

/// Deactivate scroll command (0x2E)
pub const DEACTIVATE_SCROLL: u8 = 0x2E;

/// Set vertical scroll area command (0xA3)
pub const SET_VERTICAL_SCROLL_AREA: u8 = 0xA3;

/// Right horizontal scroll setup command (0x26)
pub const RIGHT_HORIZONTAL_SCROLL: u8 = 0x26;

/// Left horizontal scroll setup command (0x27)
pub const LEFT_HORIZONTAL_SCROLL: u8 = 0x27;

/// Vertical and right horizontal scroll setup command (0x29)
pub const VERTICAL_AND_RIGHT_HORIZONTAL_SCROLL: u8 = 0x29;

/// Vertical and left horizontal scroll setup command (0x2A)
pub const VERTICAL_AND_LEFT_HORIZONTAL_SCROLL: u8 = 0x2A;
