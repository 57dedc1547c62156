//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the three
//! transport bindings the SSD1306 can be wired over:
//!
//! - [`SpiInterface`] - hardware SPI via an [`SpiDevice`]
//! - [`SoftSpiInterface`] - bit-banged SPI over five GPIO pins
//! - [`I2cInterface`] - I2C at a 7-bit address
//!
//! ## Hardware Requirements
//!
//! Every binding needs the **RST** pin (output, reset). The SPI bindings
//! additionally need **DC** (output, data/command select, low = command);
//! it is a required constructor argument, so an SPI binding without a DC
//! pin cannot be expressed. I2C needs neither: command and data writes
//! are distinguished by a control byte on the wire instead.
//!
//! Exactly one binding is chosen at construction and owned by the driver
//! for its lifetime. There is no retry policy at this layer; a failed bus
//! write propagates to the caller.

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};
use embedded_hal::i2c::I2c;
use embedded_hal::spi::SpiDevice;

use crate::error::ConfigError;

/// Default SSD1306 I2C address (SA0 low)
pub const DEFAULT_I2C_ADDRESS: u8 = 0x3C;

/// Alternate SSD1306 I2C address (SA0 high)
pub const ALTERNATE_I2C_ADDRESS: u8 = 0x3D;

/// Largest payload per I2C transaction
///
/// The controller/bus buffer limit; larger writes are split into chunks
/// of this size, each prefixed with its own control byte.
pub const I2C_CHUNK_LEN: usize = 16;

/// Control byte announcing command bytes on the I2C wire
const CONTROL_COMMAND: u8 = 0x00;

/// Control byte announcing data bytes on the I2C wire
const CONTROL_DATA: u8 = 0x40;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for hardware transports to the SSD1306 controller
///
/// Abstracts over the three physical wirings so the
/// [`Display`](crate::display::Display) driver is transport-agnostic.
/// Implement it on your own type if your board needs different pin
/// polarities or an unusual bus arrangement.
pub trait DisplayInterface {
    /// Error type for interface operations
    type Error: Debug;

    /// Send command bytes to the controller
    ///
    /// SPI implementations must drive DC low before writing; I2C
    /// implementations prefix the payload with the command control byte.
    ///
    /// # Errors
    ///
    /// Returns an error if bus communication or GPIO fails.
    fn send_commands(&mut self, commands: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Send data bytes to the controller
    ///
    /// SPI implementations must drive DC high before writing; I2C
    /// implementations prefix the payload with the data control byte and
    /// split it into transactions of at most [`I2C_CHUNK_LEN`] bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if bus communication or GPIO fails.
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Perform a hardware reset
    ///
    /// Drives RST high, waits at least 1 ms, drives it low, waits at
    /// least 10 ms, then drives it high again. The delays are controller
    /// requirements and must not be shortened. No data transfer occurs
    /// during reset.
    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over bus and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<BusErr, PinErr> {
    /// Bus (SPI or I2C) communication error
    Bus(BusErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<BusErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<BusErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Bus(e) => write!(f, "bus error: {e:?}"),
            Self::Pin(e) => write!(f, "pin error: {e:?}"),
        }
    }
}

impl<BusErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<BusErr, PinErr> {}

/// Hardware SPI transport
///
/// ## Type Parameters
///
/// * `SPI` - SPI device implementing [`SpiDevice`] (chip select belongs
///   to the device)
/// * `DC` - Data/Command select pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`]
pub struct SpiInterface<SPI, DC, RST> {
    spi: SPI,
    /// Low = command, high = data
    dc: DC,
    rst: RST,
}

impl<SPI, DC, RST> SpiInterface<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Create a hardware SPI transport
    ///
    /// The SSD1306 is specified for an 8 MHz clock; configure the
    /// supplied `SpiDevice` accordingly (bus configuration is owned by
    /// the HAL, not this driver).
    pub fn new(spi: SPI, dc: DC, rst: RST) -> Self {
        log::debug!("using hardware SPI interface");
        Self { spi, dc, rst }
    }

    /// Consume the interface and release its hardware resources
    pub fn release(self) -> (SPI, DC, RST) {
        (self.spi, self.dc, self.rst)
    }
}

impl<SPI, DC, RST, PinErr> DisplayInterface for SpiInterface<SPI, DC, RST>
where
    SPI: SpiDevice,
    SPI::Error: Debug,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn send_commands(&mut self, commands: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.spi.write(commands).map_err(InterfaceError::Bus)
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        self.spi.write(data).map_err(InterfaceError::Bus)
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error> {
        reset_sequence(&mut self.rst, delay).map_err(InterfaceError::Pin)
    }
}

/// Bit-banged (software) SPI transport
///
/// Clocks bytes out MSB-first in SPI mode 0: data is presented on DIN,
/// then latched by a rising edge on SCLK. CS is asserted low around each
/// transfer. Useful when no hardware SPI peripheral is free; the clock
/// rate is whatever GPIO toggling achieves.
///
/// ## Type Parameters
///
/// Five [`OutputPin`]s sharing one error type: `SCLK` (clock), `DIN`
/// (data out), `CS` (chip select, active low), `DC` (data/command
/// select), `RST` (reset).
pub struct SoftSpiInterface<SCLK, DIN, CS, DC, RST> {
    sclk: SCLK,
    din: DIN,
    cs: CS,
    dc: DC,
    rst: RST,
}

impl<SCLK, DIN, CS, DC, RST, PinErr> SoftSpiInterface<SCLK, DIN, CS, DC, RST>
where
    SCLK: OutputPin<Error = PinErr>,
    DIN: OutputPin<Error = PinErr>,
    CS: OutputPin<Error = PinErr>,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
{
    /// Create a bit-banged SPI transport from its five pins
    pub fn new(sclk: SCLK, din: DIN, cs: CS, dc: DC, rst: RST) -> Self {
        log::debug!("using bit-banged SPI interface");
        Self {
            sclk,
            din,
            cs,
            dc,
            rst,
        }
    }

    /// Consume the interface and release its pins
    pub fn release(self) -> (SCLK, DIN, CS, DC, RST) {
        (self.sclk, self.din, self.cs, self.dc, self.rst)
    }

    fn write_byte(&mut self, byte: u8) -> InterfaceResult<(), PinErr> {
        for bit in (0..8).rev() {
            self.din.set_state(PinState::from(byte & (1 << bit) != 0))?;
            self.sclk.set_high()?;
            self.sclk.set_low()?;
        }
        Ok(())
    }

    fn write(&mut self, bytes: &[u8]) -> InterfaceResult<(), PinErr> {
        self.cs.set_low()?;
        for &byte in bytes {
            self.write_byte(byte)?;
        }
        self.cs.set_high()
    }
}

impl<SCLK, DIN, CS, DC, RST, PinErr> DisplayInterface for SoftSpiInterface<SCLK, DIN, CS, DC, RST>
where
    SCLK: OutputPin<Error = PinErr>,
    DIN: OutputPin<Error = PinErr>,
    CS: OutputPin<Error = PinErr>,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = PinErr;

    fn send_commands(&mut self, commands: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.dc.set_low()?;
        self.write(commands)
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.dc.set_high()?;
        self.write(data)
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error> {
        reset_sequence(&mut self.rst, delay)
    }
}

/// I2C transport
///
/// Command payloads go on the wire prefixed with control byte `0x00`,
/// data payloads with `0x40`. Every write is split into transactions of
/// at most [`I2C_CHUNK_LEN`] payload bytes. Which bus to use is the
/// caller's choice; open the bus and hand in the [`I2c`] instance.
///
/// ## Type Parameters
///
/// * `I2C` - bus implementing [`I2c`]
/// * `RST` - Reset pin implementing [`OutputPin`]
#[derive(Debug)]
pub struct I2cInterface<I2C, RST> {
    i2c: I2C,
    rst: RST,
    /// 7-bit device address
    address: u8,
}

impl<I2C, RST> I2cInterface<I2C, RST>
where
    I2C: I2c,
    RST: OutputPin,
{
    /// Create an I2C transport at the given 7-bit address
    ///
    /// Use [`DEFAULT_I2C_ADDRESS`] (0x3C) unless the SA0 strap selects
    /// [`ALTERNATE_I2C_ADDRESS`] (0x3D).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidI2cAddress`] if `address` does not
    /// fit in 7 bits.
    pub fn new(i2c: I2C, rst: RST, address: u8) -> Result<Self, ConfigError> {
        if address > 0x7F {
            return Err(ConfigError::InvalidI2cAddress(address));
        }
        log::debug!("using I2C interface at address {:#04x}", address);
        Ok(Self { i2c, rst, address })
    }

    /// Consume the interface and release its hardware resources
    pub fn release(self) -> (I2C, RST) {
        (self.i2c, self.rst)
    }

    /// The configured 7-bit device address
    pub fn address(&self) -> u8 {
        self.address
    }

    fn write_chunked(&mut self, control: u8, bytes: &[u8]) -> InterfaceResult<(), I2C::Error> {
        let mut frame = [0u8; I2C_CHUNK_LEN + 1];
        frame[0] = control;
        for chunk in bytes.chunks(I2C_CHUNK_LEN) {
            frame[1..=chunk.len()].copy_from_slice(chunk);
            self.i2c.write(self.address, &frame[..=chunk.len()])?;
        }
        Ok(())
    }
}

impl<I2C, RST> DisplayInterface for I2cInterface<I2C, RST>
where
    I2C: I2c,
    I2C::Error: Debug,
    RST: OutputPin,
    RST::Error: Debug,
{
    type Error = InterfaceError<I2C::Error, RST::Error>;

    fn send_commands(&mut self, commands: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.write_chunked(CONTROL_COMMAND, commands)
            .map_err(InterfaceError::Bus)
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.write_chunked(CONTROL_DATA, data)
            .map_err(InterfaceError::Bus)
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error> {
        reset_sequence(&mut self.rst, delay).map_err(InterfaceError::Pin)
    }
}

/// Shared reset timing: high, >=1 ms, low, >=10 ms, high
fn reset_sequence<RST: OutputPin, D: DelayNs>(
    rst: &mut RST,
    delay: &mut D,
) -> InterfaceResult<(), RST::Error> {
    rst.set_high()?;
    delay.delay_ms(1);
    rst.set_low()?;
    delay.delay_ms(10);
    rst.set_high()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use core::convert::Infallible;

    #[derive(Debug, Default)]
    struct MockPin {
        states: Vec<bool>,
    }

    impl embedded_hal::digital::ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.states.push(false);
            Ok(())
        }
        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.states.push(true);
            Ok(())
        }
    }

    #[derive(Debug, Default)]
    struct MockSpi {
        writes: Vec<Vec<u8>>,
    }

    impl embedded_hal::spi::ErrorType for MockSpi {
        type Error = Infallible;
    }

    impl SpiDevice for MockSpi {
        fn transaction(
            &mut self,
            operations: &mut [embedded_hal::spi::Operation<'_, u8>],
        ) -> Result<(), Self::Error> {
            for op in operations {
                if let embedded_hal::spi::Operation::Write(bytes) = op {
                    self.writes.push(bytes.to_vec());
                }
            }
            Ok(())
        }
    }

    #[derive(Debug, Default)]
    struct MockI2c {
        transactions: Vec<(u8, Vec<u8>)>,
    }

    impl embedded_hal::i2c::ErrorType for MockI2c {
        type Error = Infallible;
    }

    impl I2c for MockI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [embedded_hal::i2c::Operation<'_>],
        ) -> Result<(), Self::Error> {
            for op in operations {
                if let embedded_hal::i2c::Operation::Write(bytes) = op {
                    self.transactions.push((address, bytes.to_vec()));
                }
            }
            Ok(())
        }
    }

    #[derive(Debug, Default)]
    struct MockDelay {
        delays_ns: Vec<u32>,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.delays_ns.push(ns);
        }
    }

    /// Pin that records transitions into a log shared across pins, so
    /// relative ordering between clock and data edges can be checked.
    #[derive(Clone, Debug)]
    struct SharedPin {
        id: char,
        log: Rc<RefCell<Vec<(char, bool)>>>,
    }

    impl embedded_hal::digital::ErrorType for SharedPin {
        type Error = Infallible;
    }

    impl OutputPin for SharedPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.log.borrow_mut().push((self.id, false));
            Ok(())
        }
        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.log.borrow_mut().push((self.id, true));
            Ok(())
        }
    }

    #[test]
    fn test_spi_commands_drive_dc_low() {
        let mut interface = SpiInterface::new(MockSpi::default(), MockPin::default(), MockPin::default());
        interface.send_commands(&[0xAE, 0xAF]).unwrap();

        assert_eq!(interface.dc.states, [false]);
        assert_eq!(interface.spi.writes, [[0xAE, 0xAF]]);
    }

    #[test]
    fn test_spi_data_drives_dc_high() {
        let mut interface = SpiInterface::new(MockSpi::default(), MockPin::default(), MockPin::default());
        interface.send_data(&[0x12, 0x34, 0x56]).unwrap();

        assert_eq!(interface.dc.states, [true]);
        assert_eq!(interface.spi.writes, [[0x12, 0x34, 0x56]]);
    }

    #[test]
    fn test_spi_data_is_a_single_bus_write() {
        let mut interface = SpiInterface::new(MockSpi::default(), MockPin::default(), MockPin::default());
        let frame = [0xA5u8; 1024];
        interface.send_data(&frame).unwrap();

        assert_eq!(interface.spi.writes.len(), 1);
        assert_eq!(interface.spi.writes[0].len(), 1024);
    }

    #[test]
    fn test_reset_pin_sequence_and_timing() {
        let mut interface = SpiInterface::new(MockSpi::default(), MockPin::default(), MockPin::default());
        let mut delay = MockDelay::default();
        interface.reset(&mut delay).unwrap();

        assert_eq!(interface.rst.states, [true, false, true]);
        assert_eq!(delay.delays_ns, [1_000_000, 10_000_000]);
    }

    #[test]
    fn test_soft_spi_clocks_msb_first_with_cs_framing() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let pin = |id| SharedPin {
            id,
            log: Rc::clone(&log),
        };
        let mut interface =
            SoftSpiInterface::new(pin('k'), pin('d'), pin('s'), pin('c'), pin('r'));

        interface.send_data(&[0xA3]).unwrap();

        let events = log.borrow();
        // DC high first, then CS low, then the clocked bits, then CS high.
        assert_eq!(events[0], ('c', true));
        assert_eq!(events[1], ('s', false));
        assert_eq!(*events.last().unwrap(), ('s', true));

        // Sample DIN at each rising clock edge.
        let mut din = false;
        let mut bits = Vec::new();
        for &(id, state) in events.iter() {
            match id {
                'd' => din = state,
                'k' if state => bits.push(din),
                _ => {}
            }
        }
        let byte = bits
            .iter()
            .fold(0u8, |acc, &bit| (acc << 1) | u8::from(bit));
        assert_eq!(bits.len(), 8);
        assert_eq!(byte, 0xA3);
    }

    #[test]
    fn test_soft_spi_commands_drive_dc_low() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let pin = |id| SharedPin {
            id,
            log: Rc::clone(&log),
        };
        let mut interface =
            SoftSpiInterface::new(pin('k'), pin('d'), pin('s'), pin('c'), pin('r'));

        interface.send_commands(&[0xAE]).unwrap();
        assert_eq!(log.borrow()[0], ('c', false));
    }

    #[test]
    fn test_i2c_rejects_eight_bit_address() {
        let result = I2cInterface::new(MockI2c::default(), MockPin::default(), 0x80);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidI2cAddress(0x80))
        ));
    }

    #[test]
    fn test_i2c_commands_carry_command_control_byte() {
        let mut interface =
            I2cInterface::new(MockI2c::default(), MockPin::default(), DEFAULT_I2C_ADDRESS)
                .unwrap();
        interface.send_commands(&[0xAE, 0xA6]).unwrap();

        assert_eq!(
            interface.i2c.transactions,
            [(DEFAULT_I2C_ADDRESS, alloc::vec![0x00, 0xAE, 0xA6])]
        );
    }

    #[test]
    fn test_i2c_data_chunked_to_sixteen_payload_bytes() {
        let mut interface =
            I2cInterface::new(MockI2c::default(), MockPin::default(), ALTERNATE_I2C_ADDRESS)
                .unwrap();
        let data: Vec<u8> = (0u8..100).collect();
        interface.send_data(&data).unwrap();

        // 100 bytes -> 6 full chunks of 16 plus a final chunk of 4.
        assert_eq!(interface.i2c.transactions.len(), 7);
        for (address, frame) in &interface.i2c.transactions[..6] {
            assert_eq!(*address, ALTERNATE_I2C_ADDRESS);
            assert_eq!(frame.len(), I2C_CHUNK_LEN + 1);
            assert_eq!(frame[0], 0x40);
        }
        let (_, last) = interface.i2c.transactions.last().unwrap();
        assert_eq!(last.len(), 5);
        assert_eq!(last[0], 0x40);
        assert_eq!(&last[1..], &[96, 97, 98, 99]);
    }

    #[test]
    fn test_i2c_payload_bytes_survive_chunking_in_order() {
        let mut interface =
            I2cInterface::new(MockI2c::default(), MockPin::default(), DEFAULT_I2C_ADDRESS)
                .unwrap();
        let data: Vec<u8> = (0u8..40).collect();
        interface.send_data(&data).unwrap();

        let rejoined: Vec<u8> = interface
            .i2c
            .transactions
            .iter()
            .flat_map(|(_, frame)| frame[1..].iter().copied())
            .collect();
        assert_eq!(rejoined, data);
    }
}
