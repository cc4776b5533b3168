//! SSD1306 command definitions
//!
//! This module defines the command bytes used to control the SSD1306 OLED
//! controller over I2C. Every I2C transfer starts with a control byte telling
//! the controller how to interpret the rest of the transfer.
//!
//! ## Framing
//!
//! - Command: `[COMMAND_CONTROL_BYTE, command]`, one transfer per byte.
//!   Commands that take a parameter send it as a second command transfer.
//! - Data: `[DATA_CONTROL_BYTE, payload...]`, written to display RAM at the
//!   current address window.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ssd1306_i2c::{command, DisplayInterface, I2cAddress, I2cInterface};
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
//! let mut interface = I2cInterface::new(MockI2c, I2cAddress::Primary);
//!
//! // Set contrast: opcode then level, each in its own frame
//! let _ = interface.send_commands(&[command::SET_CONTRAST, 0x7F]);
//! ```

// Control bytes

/// Control byte prefixing a command transfer (0x00)
pub const COMMAND_CONTROL_BYTE: u8 = 0x00;

/// Control byte prefixing a display RAM data transfer (0x40)
pub const DATA_CONTROL_BYTE: u8 = 0x40;

// Fundamental commands

/// Set contrast control (0x81)
///
/// Followed by one parameter byte, 0x00..=0xFF.
pub const SET_CONTRAST: u8 = 0x81;

/// Resume display from RAM content (0xA4)
pub const DISPLAY_FROM_RAM: u8 = 0xA4;

/// Entire display on, ignoring RAM content (0xA5)
pub const DISPLAY_ALL_ON: u8 = 0xA5;

/// Normal display polarity, RAM bit 1 = pixel lit (0xA6)
pub const NORMAL_DISPLAY: u8 = 0xA6;

/// Inverse display polarity, RAM bit 0 = pixel lit (0xA7)
pub const INVERT_DISPLAY: u8 = 0xA7;

/// Display off, sleep mode (0xAE)
pub const DISPLAY_OFF: u8 = 0xAE;

/// Display on, normal mode (0xAF)
pub const DISPLAY_ON: u8 = 0xAF;

// Addressing commands

/// Set memory addressing mode (0x20)
///
/// Followed by one parameter: 0x00 horizontal, 0x01 vertical, 0x02 page.
pub const MEMORY_ADDRESSING_MODE: u8 = 0x20;

/// Horizontal addressing mode parameter for [`MEMORY_ADDRESSING_MODE`]
///
/// The column pointer advances after every data byte and wraps to the
/// next page at the end of the column window.
pub const ADDRESSING_HORIZONTAL: u8 = 0x00;

/// Set column address window (0x21)
///
/// Followed by two parameters: start column, end column.
pub const COLUMN_ADDRESS: u8 = 0x21;

/// Set page address window (0x22)
///
/// Followed by two parameters: start page, end page.
pub const PAGE_ADDRESS: u8 = 0x22;

// Hardware configuration commands

/// Set display start line (0x40 | line)
///
/// The low 6 bits select the RAM row mapped to COM0.
pub const SET_START_LINE: u8 = 0x40;

/// Segment remap: column 0 mapped to SEG0 (0xA0)
pub const SEGMENT_REMAP_NORMAL: u8 = 0xA0;

/// Segment remap: column 127 mapped to SEG0 (0xA1)
pub const SEGMENT_REMAP_FLIPPED: u8 = 0xA1;

/// Set multiplex ratio (0xA8)
///
/// Followed by one parameter: number of active rows minus one.
pub const SET_MULTIPLEX_RATIO: u8 = 0xA8;

/// COM output scan direction: COM0 to COM[N-1] (0xC0)
pub const COM_SCAN_ASCENDING: u8 = 0xC0;

/// COM output scan direction: COM[N-1] to COM0 (0xC8)
pub const COM_SCAN_DESCENDING: u8 = 0xC8;

/// Set vertical display offset (0xD3)
///
/// Followed by one parameter: vertical shift by COM, 0..=63.
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;

/// Set COM pins hardware configuration (0xDA)
///
/// Followed by one parameter. Panel wiring dependent: 0x12 for most 128x64
/// modules, 0x02 for 128x32.
pub const SET_COM_PINS: u8 = 0xDA;

// Timing and driving scheme commands

/// Set display clock divide ratio / oscillator frequency (0xD5)
///
/// Followed by one parameter: high nibble frequency, low nibble divide ratio.
pub const SET_CLOCK_DIVIDE: u8 = 0xD5;

/// Set pre-charge period (0xD9)
///
/// Followed by one parameter: high nibble phase 2, low nibble phase 1.
pub const SET_PRECHARGE: u8 = 0xD9;

/// Set VCOMH deselect level (0xDB)
///
/// Followed by one parameter.
pub const SET_VCOM_DETECT: u8 = 0xDB;

// Charge pump

/// Charge pump setting (0x8D)
///
/// Followed by [`CHARGE_PUMP_ENABLE`] or [`CHARGE_PUMP_DISABLE`]. Must be
/// enabled before [`DISPLAY_ON`] on modules without an external VCC supply.
pub const CHARGE_PUMP: u8 = 0x8D;

/// Charge pump enable parameter
pub const CHARGE_PUMP_ENABLE: u8 = 0x14;

/// Charge pump disable parameter
pub const CHARGE_PUMP_DISABLE: u8 = 0x10;
