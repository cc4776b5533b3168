//! Pixel access to the packed framebuffer
//!
//! The SSD1306 display RAM is organized in pages: each byte holds 8
//! vertically stacked pixels of one column, least significant bit on top.
//! Bytes run left to right across a page, then continue with the next page.
//!
//! | Pixel     | Byte index             | Bit       |
//! |-----------|------------------------|-----------|
//! | `(x, y)`  | `x + (y / 8) * width`  | `y % 8`   |
//!
//! Every drawing operation in this crate writes through
//! [`Display::set_pixel`], the only place that addresses the buffer per pixel.
//!
//! ## Example
//!
//! ```
//! use ssd1306_i2c::framebuffer::pixel_location;
//!
//! // Pixel (0, 0) is the top bit of the first byte
//! assert_eq!(pixel_location(0, 0, 128), (0, 0x01));
//!
//! // Pixel (5, 9) is on the second page, one row down
//! assert_eq!(pixel_location(5, 9, 128), (133, 0x02));
//! ```

use crate::display::Display;
use crate::interface::DisplayInterface;

/// Map an on-screen coordinate to its byte index and bit mask
///
/// The coordinate must already be known to lie on the screen.
pub fn pixel_location(x: u32, y: u32, width: u32) -> (usize, u8) {
    let index = (x + (y / 8) * width) as usize;
    let mask = 1 << (y % 8);
    (index, mask)
}

impl<I, B> Display<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Turn a pixel on or off
    ///
    /// Coordinates outside the screen are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        let dims = self.config.dimensions;
        if !dims.contains(x, y) {
            return;
        }
        let (index, mask) = pixel_location(x as u32, y as u32, dims.width as u32);
        let byte = &mut self.buffer.as_mut()[index];
        if on {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
    }

    /// [`set_pixel`](Self::set_pixel) for coordinates computed in `i64`
    ///
    /// Drawing code offsets caller coordinates by sizes and radii; doing that
    /// in `i64` cannot overflow, and anything beyond `i32` is off screen.
    pub(crate) fn plot(&mut self, x: i64, y: i64, on: bool) {
        if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
            self.set_pixel(x, y, on);
        }
    }

    /// Read a pixel back from the framebuffer
    ///
    /// Returns `false` for coordinates outside the screen.
    pub fn get_pixel(&self, x: i32, y: i32) -> bool {
        let dims = self.config.dimensions;
        if !dims.contains(x, y) {
            return false;
        }
        let (index, mask) = pixel_location(x as u32, y as u32, dims.width as u32);
        self.buffer.as_ref()[index] & mask != 0
    }

    /// Invert a single pixel
    pub fn toggle_pixel(&mut self, x: i32, y: i32) {
        let on = self.get_pixel(x, y);
        self.set_pixel(x, y, !on);
    }

    /// Turn every pixel off
    pub fn clear_screen(&mut self) {
        self.fill_screen(0x00);
    }

    /// Set every framebuffer byte to `pattern`
    ///
    /// `0xFF` lights the whole screen; other values produce horizontal stripes
    /// repeated on every page.
    pub fn fill_screen(&mut self, pattern: u8) {
        let size = self.config.dimensions.buffer_size();
        self.buffer.as_mut()[..size].fill(pattern);
    }
}
