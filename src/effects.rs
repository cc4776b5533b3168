//! Blocking visual effects
//!
//! Both effects run to completion on the caller's context, sleeping through
//! the supplied [`DelayNs`] between steps. A transport error aborts the effect
//! and is returned; steps already sent stay on the panel.

use embedded_hal::delay::DelayNs;

use crate::display::{Display, DisplayResult};
use crate::interface::DisplayInterface;

/// Number of contrast writes in a fade
pub const FADE_STEPS: u32 = 20;

/// Direction of a contrast fade
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FadeDirection {
    /// Ramp from 0 up to the stored contrast
    In,
    /// Ramp from the stored contrast down to 0
    Out,
}

/// Direction of a horizontal scroll
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Content moves left, the first column wraps to the right edge
    Left,
    /// Content moves right, the last column wraps to the left edge
    Right,
}

impl<I, B> Display<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Ramp the contrast register linearly over `duration_ms`
    ///
    /// Writes [`FADE_STEPS`] levels, waiting `duration_ms / FADE_STEPS`
    /// after each. The ramp never changes the stored contrast: a fade in
    /// finishes by writing the stored level itself, and a fade out ends at 0
    /// with the stored level still available to
    /// [`contrast`](Self::contrast) for a later fade in.
    pub fn fade<D: DelayNs>(
        &mut self,
        direction: FadeDirection,
        duration_ms: u32,
        delay: &mut D,
    ) -> DisplayResult<I> {
        let target = u32::from(self.contrast());
        let step_delay = duration_ms / FADE_STEPS;
        log::debug!("fade {:?} to {} over {} ms", direction, target, duration_ms);

        for step in 0..FADE_STEPS {
            let level = match direction {
                FadeDirection::In => target * step / FADE_STEPS,
                FadeDirection::Out => target - target * (step + 1) / FADE_STEPS,
            };
            // level <= target <= 255
            self.write_contrast(level as u8)?;
            delay.delay_ms(step_delay);
        }

        if direction == FadeDirection::In {
            self.write_contrast(self.contrast())?;
        }
        Ok(())
    }

    /// Scroll the framebuffer horizontally by `distance` columns
    ///
    /// Each step rotates every page row by one column with wraparound,
    /// refreshes the whole panel and waits `step_delay_ms`. Scrolling by the
    /// display width brings the content back to where it started.
    pub fn scroll<D: DelayNs>(
        &mut self,
        direction: ScrollDirection,
        step_delay_ms: u32,
        distance: u16,
        delay: &mut D,
    ) -> DisplayResult<I> {
        let dims = self.config.dimensions;
        let width = usize::from(dims.width);
        let size = dims.buffer_size();
        log::debug!("scroll {:?} by {} columns", direction, distance);

        for _ in 0..distance {
            for page in self.buffer.as_mut()[..size].chunks_exact_mut(width) {
                match direction {
                    ScrollDirection::Left => page.rotate_left(1),
                    ScrollDirection::Right => page.rotate_right(1),
                }
            }
            self.refresh()?;
            delay.delay_ms(step_delay_ms);
        }
        Ok(())
    }
}
