//! Line, rectangle and circle drawing
//!
//! All primitives are scan converted into per-pixel writes, so anything
//! falling off screen is clipped per pixel. `on` selects whether pixels are
//! lit or cleared; existing content is overwritten, never blended.
//!
//! Coordinates, sizes and radii may be anywhere in their type's range.
//! Intermediate maths runs in `i64` (wider where products are involved), and
//! only the on-screen part of each shape is visited.

use crate::display::Display;
use crate::interface::DisplayInterface;

/// Steps `first..=last` of a line walk whose major-axis coordinate is on screen
///
/// The walk starts at `start`, moves by `step` (±1) per step, and takes
/// `major` steps in total.
fn visible_steps(start: i64, step: i64, major: i64, limit: i64) -> (i64, i64) {
    if step > 0 {
        ((-start).max(0), major.min(limit - 1 - start))
    } else {
        ((start - limit + 1).max(0), major.min(start))
    }
}

impl<I, B> Display<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Draw a line between two points, both endpoints included
    ///
    /// Bresenham's algorithm with a single error term, valid in all octants.
    /// Steps before the line enters the screen are skipped in one jump, so
    /// far-away endpoints cost no more than on-screen ones.
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, on: bool) {
        let (x1, y1) = (i64::from(x1), i64::from(y1));
        let (x2, y2) = (i64::from(x2), i64::from(y2));
        let dx = (x2 - x1).abs();
        let dy = (y2 - y1).abs();
        let sx = if x1 < x2 { 1 } else { -1 };
        let sy = if y1 < y2 { 1 } else { -1 };

        // Every step moves one pixel along the major axis
        let dims = self.config.dimensions;
        let x_major = dx >= dy;
        let (major, minor) = if x_major { (dx, dy) } else { (dy, dx) };
        let (first, last) = if x_major {
            visible_steps(x1, sx, major, i64::from(dims.width))
        } else {
            visible_steps(y1, sy, major, i64::from(dims.height))
        };
        if first > last {
            return;
        }

        // Minor-axis moves made during the first `first` steps
        let skipped = if major == 0 {
            0
        } else {
            ((2 * i128::from(first) * i128::from(minor) + i128::from(major) - 1)
                / (2 * i128::from(major))) as i64
        };
        let (x_steps, y_steps) = if x_major {
            (first, skipped)
        } else {
            (skipped, first)
        };
        let mut x = x1 + sx * x_steps;
        let mut y = y1 + sy * y_steps;
        // The large terms cancel; the result stays within 2 * major
        let mut error = (i128::from(dx - dy) - i128::from(x_steps) * i128::from(dy)
            + i128::from(y_steps) * i128::from(dx)) as i64;

        for _ in first..=last {
            self.plot(x, y, on);
            let doubled = 2 * error;
            if doubled > -dy {
                error -= dy;
                x += sx;
            }
            if doubled < dx {
                error += dx;
                y += sy;
            }
        }
    }

    /// Fill a `width` x `height` rectangle with its top-left corner at `(x, y)`
    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, on: bool) {
        self.fill_clipped(
            i64::from(x),
            i64::from(y),
            i64::from(width),
            i64::from(height),
            on,
        );
    }

    /// Draw the one pixel wide outline of a rectangle
    ///
    /// A zero width or height draws nothing.
    pub fn draw_rect(&mut self, x: i32, y: i32, width: u32, height: u32, on: bool) {
        if width == 0 || height == 0 {
            return;
        }
        let (x, y) = (i64::from(x), i64::from(y));
        let (width, height) = (i64::from(width), i64::from(height));
        self.fill_clipped(x, y, width, 1, on);
        self.fill_clipped(x, y + height - 1, width, 1, on);
        self.fill_clipped(x, y, 1, height, on);
        self.fill_clipped(x + width - 1, y, 1, height, on);
    }

    /// Fill the on-screen part of a rectangle
    pub(crate) fn fill_clipped(&mut self, x: i64, y: i64, width: i64, height: i64, on: bool) {
        let dims = self.config.dimensions;
        let left = x.max(0);
        let right = (x + width).min(i64::from(dims.width));
        let top = y.max(0);
        let bottom = (y + height).min(i64::from(dims.height));
        for py in top..bottom {
            for px in left..right {
                self.plot(px, py, on);
            }
        }
    }

    /// Draw a circle outline using the midpoint algorithm
    ///
    /// One octant is computed and mirrored into the other seven. Nothing is
    /// walked when the outline cannot touch the screen.
    pub fn draw_circle(&mut self, cx: i32, cy: i32, radius: u32, on: bool) {
        let (cx, cy, r) = (i64::from(cx), i64::from(cy), i64::from(radius));
        let dims = self.config.dimensions;
        let (width, height) = (i64::from(dims.width), i64::from(dims.height));

        if cx + r < 0 || cy + r < 0 || cx - r >= width || cy - r >= height {
            return;
        }
        // Outline pixels lie at least r - 1 from the center
        let far_x = cx.unsigned_abs().max((cx - (width - 1)).unsigned_abs());
        let far_y = cy.unsigned_abs().max((cy - (height - 1)).unsigned_abs());
        let inner = u64::from(radius.saturating_sub(1));
        if far_x * far_x + far_y * far_y < inner * inner {
            return;
        }

        let mut x = 0;
        let mut y = r;
        let mut decision = 1 - y;

        while x <= y {
            self.plot(cx + x, cy + y, on);
            self.plot(cx + y, cy + x, on);
            self.plot(cx - x, cy + y, on);
            self.plot(cx - y, cy + x, on);
            self.plot(cx + x, cy - y, on);
            self.plot(cx + y, cy - x, on);
            self.plot(cx - x, cy - y, on);
            self.plot(cx - y, cy - x, on);

            x += 1;
            if decision < 0 {
                decision += 2 * x + 1;
            } else {
                y -= 1;
                decision += 2 * (x - y) + 1;
            }
        }
    }

    /// Fill a circle
    ///
    /// Tests every on-screen pixel of the bounding square against
    /// `dx² + dy² <= r²`.
    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: u32, on: bool) {
        let (cx, cy, r) = (i64::from(cx), i64::from(cy), i64::from(radius));
        let dims = self.config.dimensions;
        let left = (cx - r).max(0);
        let right = (cx + r).min(i64::from(dims.width) - 1);
        let top = (cy - r).max(0);
        let bottom = (cy + r).min(i64::from(dims.height) - 1);

        let r_squared = u64::from(radius).pow(2);
        for py in top..=bottom {
            let dy = (py - cy).unsigned_abs();
            for px in left..=right {
                let dx = (px - cx).unsigned_abs();
                if dx * dx + dy * dy <= r_squared {
                    self.plot(px, py, on);
                }
            }
        }
    }
}
