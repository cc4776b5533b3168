//! Text rendering with the built-in 6x8 font
//!
//! Text is drawn a glyph cell at a time through [`Display::set_pixel`], so it
//! clips at every screen edge. Strings never wrap: rendering stops once the
//! cursor reaches the right edge.

use crate::display::Display;
use crate::font::{CHAR_ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH, glyph};
use crate::interface::DisplayInterface;

/// Height of the filled box drawn behind highlighted text
pub const HIGHLIGHT_BOX_HEIGHT: u32 = 10;

/// Width in pixels that `text` occupies when rendered
///
/// Every character counts, renderable or not, at [`CHAR_ADVANCE`] pixels.
/// Saturates at `u32::MAX`.
///
/// ```
/// assert_eq!(ssd1306_i2c::text_width("AB"), 14);
/// ```
pub fn text_width(text: &str) -> u32 {
    let count = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
    count.saturating_mul(CHAR_ADVANCE)
}

impl<I, B> Display<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Draw one character with its top-left corner at `(x, y)`
    ///
    /// The whole 6x8 cell is written: glyph bits turn pixels on, the rest of
    /// the cell is cleared. Characters outside printable ASCII are ignored.
    pub fn render_character(&mut self, x: i32, y: i32, ch: char) {
        if let Some(columns) = glyph(ch) {
            self.blit_glyph(i64::from(x), i64::from(y), columns, false);
        }
    }

    /// Draw a string starting at `(x, y)`
    pub fn render_text(&mut self, x: i32, y: i32, text: &str) {
        self.blit_text(i64::from(x), i64::from(y), text, false);
    }

    /// Draw dark text on a lit box
    ///
    /// A box of `text_width(text) + 1` by [`HIGHLIGHT_BOX_HEIGHT`] pixels is
    /// filled at `(x - 1, y - 1)`, then only the glyph bits are cleared.
    pub fn render_highlighted_text(&mut self, x: i32, y: i32, text: &str) {
        let (x, y) = (i64::from(x), i64::from(y));
        self.fill_clipped(
            x - 1,
            y - 1,
            i64::from(text_width(text)) + 1,
            i64::from(HIGHLIGHT_BOX_HEIGHT),
            true,
        );
        self.blit_text(x, y, text, true);
    }

    /// Walk `text` a cell at a time until the cursor passes the right edge
    fn blit_text(&mut self, x: i64, y: i64, text: &str, cutout: bool) {
        let width = i64::from(self.config.dimensions.width);
        let mut cursor = x;
        for ch in text.chars() {
            if cursor >= width {
                break;
            }
            if let Some(columns) = glyph(ch) {
                self.blit_glyph(cursor, y, columns, cutout);
            }
            cursor += i64::from(CHAR_ADVANCE);
        }
    }

    /// Write one glyph cell at `(x, y)`
    ///
    /// With `cutout` set, glyph bits are cleared and the rest of the cell is
    /// left alone.
    fn blit_glyph(
        &mut self,
        x: i64,
        y: i64,
        columns: &[u8; GLYPH_WIDTH as usize],
        cutout: bool,
    ) {
        for (col, bits) in (0..).zip(columns) {
            for row in 0..i64::from(GLYPH_HEIGHT) {
                let lit = (bits >> row) & 1 != 0;
                if !cutout {
                    self.plot(x + col, y + row, lit);
                } else if lit {
                    self.plot(x + col, y + row, false);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::tests::{TestDisplay, test_display};

    fn lit_count(display: &TestDisplay) -> u32 {
        display.buffer().iter().map(|byte| byte.count_ones()).sum()
    }

    fn glyph_bits(ch: char) -> u32 {
        glyph(ch).map_or(0, |columns| {
            columns.iter().map(|column| column.count_ones()).sum()
        })
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width(""), 0);
        assert_eq!(text_width("AB"), 14);
        assert_eq!(text_width("a\tb"), 21);
    }

    #[test]
    fn test_render_character_blits_columns() {
        let mut display = test_display();
        display.render_character(0, 0, 'A');
        // Page-aligned glyphs land as raw column bytes
        assert_eq!(display.buffer()[..6], [0x7E, 0x11, 0x11, 0x11, 0x7E, 0x00]);
    }

    #[test]
    fn test_render_character_clears_cell_background() {
        let mut display = test_display();
        display.fill_screen(0xFF);
        display.render_character(0, 0, ' ');
        assert_eq!(display.buffer()[..6], [0x00; 6]);
        assert_eq!(display.buffer()[6], 0xFF);
    }

    #[test]
    fn test_render_character_unaligned_row() {
        let mut display = test_display();
        display.render_character(10, 4, '|');
        // '|' is column 2 = 0x7F, shifted down four rows across two pages
        assert_eq!(display.buffer()[12], 0xF0);
        assert_eq!(display.buffer()[128 + 12], 0x07);
    }

    #[test]
    fn test_render_unrenderable_character_is_noop() {
        let mut display = test_display();
        display.fill_screen(0xFF);
        display.render_character(0, 0, '\u{7F}');
        display.render_character(0, 0, '°');
        assert!(display.buffer().iter().all(|byte| *byte == 0xFF));
    }

    #[test]
    fn test_render_text_advances_seven() {
        let mut display = test_display();
        display.render_text(0, 0, "AB");
        assert_eq!(display.buffer()[..6], glyph('A').copied().unwrap());
        assert_eq!(display.buffer()[6], 0x00);
        assert_eq!(display.buffer()[7..13], glyph('B').copied().unwrap());
    }

    #[test]
    fn test_render_text_unrenderable_still_advances() {
        let mut display = test_display();
        display.render_text(0, 0, "\nA");
        assert_eq!(display.buffer()[..7], [0x00; 7]);
        assert_eq!(display.buffer()[7..13], glyph('A').copied().unwrap());
    }

    #[test]
    fn test_render_text_clips_at_right_edge() {
        let mut display = test_display();
        display.render_text(120, 0, "MMMM");
        // The second 'M' starts at 127 and keeps only its first column
        assert_eq!(display.buffer()[120..126], glyph('M').copied().unwrap());
        assert_eq!(display.buffer()[126], 0x00);
        assert_eq!(display.buffer()[127], glyph('M').map(|g| g[0]).unwrap());
        assert!(display.buffer()[128..].iter().all(|byte| *byte == 0));
    }

    #[test]
    fn test_render_text_starting_off_screen_draws_nothing() {
        let mut display = test_display();
        display.render_text(128, 0, "Hello");
        assert_eq!(lit_count(&display), 0);
    }

    #[test]
    fn test_highlight_box_geometry() {
        let mut display = test_display();
        display.render_highlighted_text(10, 10, "  ");
        // Spaces clear nothing, leaving the bare box
        let width = text_width("  ") + 1;
        assert_eq!(lit_count(&display), width * HIGHLIGHT_BOX_HEIGHT);
        assert!(display.get_pixel(9, 9));
        assert!(display.get_pixel(9 + width as i32 - 1, 9 + 9));
        assert!(!display.get_pixel(9 + width as i32, 9));
        assert!(!display.get_pixel(9, 9 + HIGHLIGHT_BOX_HEIGHT as i32));
    }

    #[test]
    fn test_highlight_only_clears_glyph_bits() {
        let mut display = test_display();
        display.render_highlighted_text(10, 10, "A");
        let box_pixels = (text_width("A") + 1) * HIGHLIGHT_BOX_HEIGHT;
        assert_eq!(lit_count(&display), box_pixels - glyph_bits('A'));

        // Column 0 of 'A' is 0x7E: row 0 stays lit, rows 1..=6 are cleared
        assert!(display.get_pixel(10, 10));
        assert!(!display.get_pixel(10, 11));
        // The blank sixth column stays lit
        for row in 0..8 {
            assert!(display.get_pixel(10 + GLYPH_WIDTH as i32 - 1, 10 + row));
        }
    }

    #[test]
    fn test_highlight_ignores_prior_box_content() {
        let mut display = test_display();
        display.render_highlighted_text(1, 1, "Hi");
        let mut plain = test_display();
        plain.fill_rect(0, 0, text_width("Hi") + 1, HIGHLIGHT_BOX_HEIGHT, true);
        plain.render_highlighted_text(1, 1, "Hi");
        assert_eq!(display.buffer(), plain.buffer());
    }

    #[test]
    fn test_render_character_at_extreme_origins() {
        let mut display = test_display();
        display.render_character(i32::MAX, 0, 'A');
        display.render_character(i32::MIN, 0, 'A');
        display.render_character(0, i32::MAX, 'A');
        display.render_character(0, i32::MIN, 'A');
        assert_eq!(lit_count(&display), 0);

        // The cell just left of the screen still shows its last column
        display.render_character(-4, 0, 'M');
        assert_eq!(display.buffer()[0], glyph('M').map(|g| g[4]).unwrap());
        assert_eq!(display.buffer()[1], 0x00);
    }

    #[test]
    fn test_render_text_at_extreme_origins() {
        let mut display = test_display();
        display.render_text(i32::MIN, 0, "AB");
        display.render_text(i32::MAX - 3, 0, "ABC");
        display.render_text(0, i32::MIN, "ABC");
        assert_eq!(lit_count(&display), 0);
    }

    #[test]
    fn test_highlight_at_extreme_origins() {
        let mut display = test_display();
        display.render_highlighted_text(i32::MIN, 0, "A");
        display.render_highlighted_text(i32::MAX, i32::MAX, "A");
        display.render_highlighted_text(0, i32::MIN, "A");
        assert_eq!(lit_count(&display), 0);
    }

    #[test]
    fn test_highlight_box_clips_at_origin() {
        let mut display = test_display();
        display.render_highlighted_text(0, 0, " ");
        // The box starts at (-1, -1), losing one column and one row
        let width = text_width(" ") + 1;
        assert_eq!(lit_count(&display), (width - 1) * (HIGHLIGHT_BOX_HEIGHT - 1));
        assert!(display.get_pixel(0, 0));
    }
}
