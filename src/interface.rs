//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`I2cInterface`]
//! struct for communicating with the SSD1306 controller over I2C.
//!
//! ## Hardware Requirements
//!
//! The SSD1306 in I2C mode requires only the two bus lines (SDA + SCL). The
//! module address is strapped to one of two values, see [`I2cAddress`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use ssd1306_i2c::{DisplayInterface, I2cAddress, I2cInterface};
//! # use core::convert::Infallible;
//! # use embedded_hal::i2c::{ErrorType, I2c, Operation, SevenBitAddress};
//! # struct MockI2c;
//! # impl ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: SevenBitAddress,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! let mut bus = MockI2c;
//!
//! // Borrow the bus so other peripherals can keep using it
//! let mut interface = I2cInterface::new(&mut bus, I2cAddress::Primary);
//!
//! // Send command
//! let _ = interface.send_command(0xAF); // Display on
//!
//! // Send data
//! let _ = interface.send_data(&[0xFF, 0x00, 0xFF]);
//! ```

use core::fmt::Debug;
use embedded_hal::i2c::{I2c, Operation};

use crate::command::{COMMAND_CONTROL_BYTE, DATA_CONTROL_BYTE};

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for hardware interface to SSD1306 controller
///
/// This trait abstracts over the transport, allowing the
/// [`Display`](crate::display::Display) to work with any bus that can deliver
/// command and data frames.
///
/// ## Implementing
///
/// For most cases, use the provided [`I2cInterface`] struct. Implement this
/// trait yourself for unusual wiring or for testing with a recording fake.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send a single command byte to the controller
    ///
    /// # Errors
    ///
    /// Returns an error if the transfer was not accepted in full.
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error>;

    /// Send data bytes to display RAM
    ///
    /// The whole slice must go out as one transfer.
    ///
    /// # Errors
    ///
    /// Returns an error if the transfer was not accepted in full.
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Send a sequence of command bytes, one frame each
    ///
    /// Every byte is attempted even if an earlier one fails; failed frames are
    /// logged and the first error is returned. There is no rollback of the
    /// frames that did go through.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by [`send_command`](Self::send_command).
    fn send_commands(&mut self, commands: &[u8]) -> InterfaceResult<(), Self::Error> {
        let mut first_error = None;
        for &command in commands {
            if let Err(e) = self.send_command(command) {
                log::warn!("command frame 0x{:02X} failed: {:?}", command, e);
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}

/// 7-bit I2C address of the controller
///
/// Selected by the D/C# strap on the module (often labelled SA0).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(u8)]
pub enum I2cAddress {
    /// SA0 low (0x3C), the common default
    #[default]
    Primary = 0x3C,
    /// SA0 high (0x3D)
    Secondary = 0x3D,
}

impl I2cAddress {
    /// Raw 7-bit address
    pub fn value(self) -> u8 {
        self as u8
    }
}

/// Hardware interface implementation for SSD1306 over I2C
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 I2C buses.
///
/// ## Type Parameters
///
/// * `I2C` - Bus implementing [`I2c`]. A `&mut` reference to a bus also
///   implements [`I2c`], so the interface can borrow a shared bus.
#[derive(Debug)]
pub struct I2cInterface<I2C> {
    /// I2C bus (owned or borrowed)
    i2c: I2C,
    /// Controller address on the bus
    address: I2cAddress,
}

impl<I2C> I2cInterface<I2C>
where
    I2C: I2c,
{
    /// Create a new I2cInterface
    ///
    /// # Arguments
    ///
    /// * `i2c` - I2C bus (must implement [`I2c`])
    /// * `address` - Controller address, see [`I2cAddress`]
    pub fn new(i2c: I2C, address: I2cAddress) -> Self {
        Self { i2c, address }
    }

    /// Get the controller address
    pub fn address(&self) -> I2cAddress {
        self.address
    }

    /// Release the underlying bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> DisplayInterface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.i2c
            .write(self.address.value(), &[COMMAND_CONTROL_BYTE, command])
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        // Adjacent writes in one transaction go out back to back without a
        // repeated start, so the controller sees a single [0x40, data...] frame.
        self.i2c.transaction(
            self.address.value(),
            &mut [Operation::Write(&[DATA_CONTROL_BYTE]), Operation::Write(data)],
        )
    }
}
