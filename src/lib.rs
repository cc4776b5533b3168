//! SSD1306 OLED Display Driver
//!
//! A buffered driver for SSD1306 monochrome OLED controllers on an I2C bus,
//! supporting panels up to 128x64 pixels.
//!
//! ## Features
//!
//! - `no_std` compatible, no allocation
//! - `embedded-hal` v1.0 support, owned or borrowed I2C bus
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Built-in lines, rectangles, circles and a 6x8 font
//! - Contrast fade and wraparound scroll effects
//!
//! ## Usage
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::i2c::{ErrorType, I2c, Operation, SevenBitAddress};
//! use ssd1306_i2c::{
//!     Builder, Dimensions, Display, FadeDirection, I2cAddress, I2cInterface,
//! };
//!
//! # struct MockI2c;
//! # impl ErrorType for MockI2c { type Error = core::convert::Infallible; }
//! # impl I2c for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: SevenBitAddress,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let mut i2c = MockI2c;
//! # let mut delay = MockDelay;
//! let interface = I2cInterface::new(&mut i2c, I2cAddress::Primary);
//! let config = match Builder::new().dimensions(Dimensions::SIZE_128X64).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::new(interface, config, [0u8; 1024]);
//! let _ = display.init();
//!
//! display.draw_rect(0, 0, 128, 64, true);
//! display.render_highlighted_text(4, 4, "SSD1306");
//! display.draw_circle(64, 40, 12, true);
//! let _ = display.refresh();
//!
//! let _ = display.fade(FadeDirection::In, 500, &mut delay);
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// SSD1306 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Contrast fade and horizontal scroll
pub mod effects;
/// Error types for the driver
pub mod error;
/// Built-in 6x8 bitmap font
pub mod font;
/// Pixel access to the packed framebuffer
pub mod framebuffer;
/// Hardware interface abstraction
pub mod interface;
/// Line, rectangle and circle drawing
pub mod primitives;
/// Text rendering
pub mod text;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use config::{Builder, Config, Dimensions, MAX_COLUMNS, MAX_ROWS, Orientation};
pub use display::Display;
pub use effects::{FADE_STEPS, FadeDirection, ScrollDirection};
pub use error::{BuilderError, Error};
pub use interface::{DisplayInterface, I2cAddress, I2cInterface};
pub use text::{HIGHLIGHT_BOX_HEIGHT, text_width};
