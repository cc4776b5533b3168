//! Graphics support via embedded-graphics
//!
//! [`Display`] implements [`DrawTarget`] with [`BinaryColor`], so anything
//! from the embedded-graphics ecosystem can be drawn into the framebuffer
//! alongside the built-in primitives and font. `BinaryColor::On` lights a
//! pixel, `BinaryColor::Off` clears it.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     mono_font::{ascii::FONT_6X10, MonoTextStyle},
//!     pixelcolor::BinaryColor,
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle, Rectangle},
//!     text::Text,
//! };
//! use ssd1306_i2c::{Builder, Dimensions, Display, I2cAddress, I2cInterface};
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
//! # let interface = I2cInterface::new(MockI2c, I2cAddress::Primary);
//! # let config = match Builder::new().dimensions(Dimensions::SIZE_128X64).build() {
//! #     Ok(config) => config,
//! #     Err(_) => return,
//! # };
//! let mut display = Display::new(interface, config, [0u8; 1024]);
//!
//! let _ = Rectangle::new(Point::new(0, 0), Size::new(128, 16))
//!     .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
//!     .draw(&mut display);
//!
//! let _ = Circle::new(Point::new(50, 24), 30)
//!     .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 2))
//!     .draw(&mut display);
//!
//! let _ = Text::new(
//!     "Hello, OLED!",
//!     Point::new(4, 11),
//!     MonoTextStyle::new(&FONT_6X10, BinaryColor::Off),
//! )
//! .draw(&mut display);
//!
//! // Update physical display
//! let _ = display.refresh();
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::BinaryColor,
    prelude::Pixel,
};

use crate::display::Display;
use crate::interface::DisplayInterface;

impl<I, B> DrawTarget for Display<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            self.set_pixel(x, y, color.is_on());
        }

        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill_screen(if color.is_on() { 0xFF } else { 0x00 });
        Ok(())
    }
}

impl<I, B> OriginDimensions for Display<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    fn size(&self) -> Size {
        let dims = self.dimensions();
        Size::new(u32::from(dims.width), u32::from(dims.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::tests::test_display;
    use embedded_graphics::{
        prelude::*,
        primitives::{Line, PrimitiveStyle, Rectangle},
    };

    #[test]
    fn test_size_matches_dimensions() {
        let display = test_display();
        assert_eq!(display.size(), Size::new(128, 64));
    }

    #[test]
    fn test_draw_iter_sets_and_clears() {
        let mut display = test_display();
        display
            .draw_iter([
                Pixel(Point::new(1, 1), BinaryColor::On),
                Pixel(Point::new(2, 9), BinaryColor::On),
            ])
            .unwrap();
        assert!(display.get_pixel(1, 1));
        assert!(display.get_pixel(2, 9));

        display
            .draw_iter([Pixel(Point::new(1, 1), BinaryColor::Off)])
            .unwrap();
        assert!(!display.get_pixel(1, 1));
    }

    #[test]
    fn test_draw_iter_ignores_off_screen_pixels() {
        let mut display = test_display();
        display
            .draw_iter([
                Pixel(Point::new(-1, 0), BinaryColor::On),
                Pixel(Point::new(0, -1), BinaryColor::On),
                Pixel(Point::new(128, 0), BinaryColor::On),
                Pixel(Point::new(0, 64), BinaryColor::On),
            ])
            .unwrap();
        assert!(display.buffer().iter().all(|byte| *byte == 0));
    }

    #[test]
    fn test_clear() {
        let mut display = test_display();
        display.clear(BinaryColor::On).unwrap();
        assert!(display.buffer().iter().all(|byte| *byte == 0xFF));
        display.clear(BinaryColor::Off).unwrap();
        assert!(display.buffer().iter().all(|byte| *byte == 0x00));
    }

    #[test]
    fn test_line_matches_native_line() {
        let mut display = test_display();
        Line::new(Point::new(0, 0), Point::new(10, 0))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut display)
            .unwrap();

        let mut native = test_display();
        native.draw_line(0, 0, 10, 0, true);
        assert_eq!(display.buffer(), native.buffer());
    }

    #[test]
    fn test_filled_rectangle_matches_native_fill() {
        let mut display = test_display();
        Rectangle::new(Point::new(3, 5), Size::new(7, 12))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut display)
            .unwrap();

        let mut native = test_display();
        native.fill_rect(3, 5, 7, 12, true);
        assert_eq!(display.buffer(), native.buffer());
    }
}
