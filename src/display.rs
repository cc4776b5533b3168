//! Core display operations

use crate::command::{
    ADDRESSING_HORIZONTAL, CHARGE_PUMP, CHARGE_PUMP_DISABLE, CHARGE_PUMP_ENABLE, COLUMN_ADDRESS,
    DISPLAY_ALL_ON, DISPLAY_FROM_RAM, DISPLAY_OFF, DISPLAY_ON, INVERT_DISPLAY,
    MEMORY_ADDRESSING_MODE, NORMAL_DISPLAY, PAGE_ADDRESS, SET_CLOCK_DIVIDE, SET_COM_PINS,
    SET_CONTRAST, SET_DISPLAY_OFFSET, SET_MULTIPLEX_RATIO, SET_PRECHARGE, SET_START_LINE,
    SET_VCOM_DETECT,
};
use crate::config::{Config, Dimensions, Orientation};
use crate::error::Error;
use crate::interface::DisplayInterface;

pub(crate) type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Length of the register programming sequence sent by [`Display::init`]
const INIT_SEQUENCE_LEN: usize = 25;

/// Buffered SSD1306 driver
///
/// Owns the hardware interface, the configuration and a framebuffer that
/// mirrors the controller's display RAM byte for byte. Drawing calls only
/// touch the framebuffer; [`refresh`](Self::refresh) pushes all of it to the
/// controller.
///
/// ## Type Parameters
///
/// * `I` - Interface type implementing [`DisplayInterface`]
/// * `B` - Framebuffer storage, e.g. `[u8; 1024]` or `&mut [u8]`
///
/// A `Display` is not internally synchronized. Wrap it in a mutex if more
/// than one context drives it.
pub struct Display<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Hardware interface
    pub(crate) interface: I,
    /// Display configuration
    pub(crate) config: Config,
    /// Framebuffer, at least `dimensions.buffer_size()` bytes
    pub(crate) buffer: B,
    /// Last commanded power state
    power_on: bool,
    /// Last contrast level set through [`set_contrast`](Self::set_contrast)
    contrast: u8,
    /// Last commanded polarity
    inverted: bool,
}

impl<I, B> Display<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Create a new Display instance
    ///
    /// The framebuffer is cleared; nothing is sent to the controller until
    /// [`init`](Self::init).
    ///
    /// # Panics
    ///
    /// Panics if `buffer` is smaller than `dimensions.buffer_size()` bytes.
    /// Use [`try_new`](Self::try_new) for the fallible version.
    ///
    /// ## Example
    ///
    /// ```rust,no_run
    /// use ssd1306_i2c::{Builder, Dimensions, Display, I2cAddress, I2cInterface};
    /// # use core::convert::Infallible;
    /// # use embedded_hal::i2c::{ErrorType, I2c, Operation, SevenBitAddress};
    /// # struct MockI2c;
    /// # impl ErrorType for MockI2c { type Error = Infallible; }
    /// # impl I2c for MockI2c {
    /// #     fn transaction(
    /// #         &mut self,
    /// #         _address: SevenBitAddress,
    /// #         _operations: &mut [Operation<'_>],
    /// #     ) -> Result<(), Self::Error> {
    /// #         Ok(())
    /// #     }
    /// # }
    /// let interface = I2cInterface::new(MockI2c, I2cAddress::Primary);
    /// let config = match Builder::new().dimensions(Dimensions::SIZE_128X64).build() {
    ///     Ok(config) => config,
    ///     Err(_) => return,
    /// };
    /// let mut display = Display::new(interface, config, [0u8; 1024]);
    /// let _ = display.init();
    /// ```
    pub fn new(interface: I, config: Config, mut buffer: B) -> Self {
        let required = config.dimensions.buffer_size();
        assert!(
            buffer.as_mut().len() >= required,
            "buffer too small: required {} bytes, got {}",
            required,
            buffer.as_mut().len()
        );
        Self::with_buffer(interface, config, buffer)
    }

    /// Try to create a new Display, returning an error if the buffer is too small
    ///
    /// This is the fallible version of [`new`](Self::new).
    ///
    /// # Errors
    ///
    /// Returns `Error::BufferTooSmall` if `buffer` is smaller than
    /// `dimensions.buffer_size()` bytes.
    pub fn try_new(interface: I, config: Config, buffer: B) -> Result<Self, Error<I>> {
        let required = config.dimensions.buffer_size();
        let provided = buffer.as_ref().len();
        if provided < required {
            return Err(Error::BufferTooSmall { required, provided });
        }
        Ok(Self::with_buffer(interface, config, buffer))
    }

    fn with_buffer(interface: I, config: Config, buffer: B) -> Self {
        let contrast = config.contrast;
        let mut display = Self {
            interface,
            config,
            buffer,
            power_on: false,
            contrast,
            inverted: false,
        };
        display.clear_screen();
        display
    }

    /// Bring the controller from power-on to a known, addressable state
    ///
    /// Clears the framebuffer, then programs clock, multiplex, offset, start
    /// line, charge pump, horizontal addressing, orientation, COM pins,
    /// contrast, pre-charge, VCOMH, RAM display source and polarity, and
    /// finally turns the panel on.
    ///
    /// Every frame of the sequence is attempted even if one fails.
    ///
    /// # Errors
    ///
    /// Returns the first interface error of the sequence. The controller is
    /// then in an unknown state; the caller decides whether to retry.
    pub fn init(&mut self) -> DisplayResult<I> {
        log::debug!(
            "initializing {}x{} display",
            self.config.dimensions.width,
            self.config.dimensions.height
        );
        self.clear_screen();
        self.power_on = true;
        self.contrast = self.config.contrast;
        self.inverted = false;

        let sequence = self.init_sequence();
        self.interface
            .send_commands(&sequence)
            .map_err(Error::Interface)?;

        log::debug!("display initialized");
        Ok(())
    }

    /// Register programming sequence for the current configuration
    ///
    /// The charge pump is enabled before the final display-on and the
    /// addressing mode is set before any refresh.
    fn init_sequence(&self) -> [u8; INIT_SEQUENCE_LEN] {
        let config = &self.config;
        let charge_pump = if config.charge_pump {
            CHARGE_PUMP_ENABLE
        } else {
            CHARGE_PUMP_DISABLE
        };
        [
            DISPLAY_OFF,
            SET_CLOCK_DIVIDE,
            config.clock_divide,
            SET_MULTIPLEX_RATIO,
            config.dimensions.height.saturating_sub(1) as u8,
            SET_DISPLAY_OFFSET,
            0x00,
            SET_START_LINE,
            CHARGE_PUMP,
            charge_pump,
            MEMORY_ADDRESSING_MODE,
            ADDRESSING_HORIZONTAL,
            config.orientation.segment_remap_command(),
            config.orientation.com_scan_command(),
            SET_COM_PINS,
            config.com_pins,
            SET_CONTRAST,
            self.contrast,
            SET_PRECHARGE,
            config.precharge,
            SET_VCOM_DETECT,
            config.vcom_detect,
            DISPLAY_FROM_RAM,
            NORMAL_DISPLAY,
            DISPLAY_ON,
        ]
    }

    /// Send the whole framebuffer to the controller
    ///
    /// Sets the column and page window to the full screen, then writes
    /// `buffer_size()` bytes in a single data frame.
    pub fn refresh(&mut self) -> DisplayResult<I> {
        let dims = self.config.dimensions;
        let window = [
            COLUMN_ADDRESS,
            0,
            dims.width.saturating_sub(1) as u8,
            PAGE_ADDRESS,
            0,
            dims.pages().saturating_sub(1) as u8,
        ];
        self.interface
            .send_commands(&window)
            .map_err(Error::Interface)?;

        let size = dims.buffer_size();
        log::debug!("refreshing display, {} bytes", size);
        self.interface
            .send_data(&self.buffer.as_ref()[..size])
            .map_err(Error::Interface)
    }

    /// Turn the panel on or off
    ///
    /// Display RAM, and therefore the framebuffer, is preserved while off.
    pub fn set_power(&mut self, on: bool) -> DisplayResult<I> {
        self.power_on = on;
        self.send_command(if on { DISPLAY_ON } else { DISPLAY_OFF })
    }

    /// Set the contrast level and remember it
    pub fn set_contrast(&mut self, level: u8) -> DisplayResult<I> {
        self.contrast = level;
        self.write_contrast(level)
    }

    /// Program the contrast register without touching the stored level
    pub(crate) fn write_contrast(&mut self, level: u8) -> DisplayResult<I> {
        self.interface
            .send_commands(&[SET_CONTRAST, level])
            .map_err(Error::Interface)
    }

    /// Flip display polarity on the controller
    ///
    /// The framebuffer is left untouched; only how the controller shows it
    /// changes.
    pub fn set_inverted(&mut self, inverted: bool) -> DisplayResult<I> {
        self.inverted = inverted;
        self.send_command(if inverted {
            INVERT_DISPLAY
        } else {
            NORMAL_DISPLAY
        })
    }

    /// Mirror the panel horizontally and/or vertically
    ///
    /// The framebuffer is not relaid out; the controller applies the
    /// remapping as it scans RAM out.
    pub fn set_orientation(
        &mut self,
        flip_horizontal: bool,
        flip_vertical: bool,
    ) -> DisplayResult<I> {
        let orientation = Orientation {
            flip_horizontal,
            flip_vertical,
        };
        self.config.orientation = orientation;
        self.interface
            .send_commands(&[
                orientation.segment_remap_command(),
                orientation.com_scan_command(),
            ])
            .map_err(Error::Interface)
    }

    /// Light every pixel regardless of RAM content, or resume showing RAM
    ///
    /// Handy as a panel test; the framebuffer is not modified.
    pub fn set_all_pixels_on(&mut self, on: bool) -> DisplayResult<I> {
        self.send_command(if on { DISPLAY_ALL_ON } else { DISPLAY_FROM_RAM })
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Interface)
    }

    /// Get display dimensions
    pub fn dimensions(&self) -> &Dimensions {
        &self.config.dimensions
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Last commanded power state
    pub fn is_power_on(&self) -> bool {
        self.power_on
    }

    /// Stored contrast level
    pub fn contrast(&self) -> u8 {
        self.contrast
    }

    /// Last commanded polarity
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// The framebuffer, exactly `buffer_size()` bytes
    pub fn buffer(&self) -> &[u8] {
        &self.buffer.as_ref()[..self.config.dimensions.buffer_size()]
    }

    /// Access the underlying interface
    pub fn interface(&self) -> &I {
        &self.interface
    }

    /// Release the interface and framebuffer
    pub fn release(self) -> (I, B) {
        (self.interface, self.buffer)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::config::Builder;
    use alloc::vec::Vec;

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub(crate) struct MockError;

    #[derive(Debug, Default)]
    pub(crate) struct MockInterface {
        pub(crate) commands: Vec<u8>,
        pub(crate) data: Vec<Vec<u8>>,
        /// Zero-based index into `commands` of a command frame to reject
        pub(crate) fail_command: Option<usize>,
        pub(crate) fail_data: bool,
    }

    impl DisplayInterface for MockInterface {
        type Error = MockError;

        fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
            let index = self.commands.len();
            self.commands.push(command);
            if self.fail_command == Some(index) {
                return Err(MockError);
            }
            Ok(())
        }

        fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
            self.data.push(data.to_vec());
            if self.fail_data {
                return Err(MockError);
            }
            Ok(())
        }
    }

    pub(crate) type TestDisplay = Display<MockInterface, [u8; 1024]>;

    pub(crate) fn test_display() -> TestDisplay {
        let config = Builder::new()
            .dimensions(Dimensions::SIZE_128X64)
            .build()
            .unwrap();
        Display::new(MockInterface::default(), config, [0u8; 1024])
    }

    #[test]
    fn test_new_clears_buffer() {
        let config = Builder::new()
            .dimensions(Dimensions::SIZE_128X64)
            .build()
            .unwrap();
        let display = Display::new(MockInterface::default(), config, [0xAAu8; 1024]);
        assert!(display.buffer().iter().all(|byte| *byte == 0));
        assert!(display.interface().commands.is_empty());
        assert!(!display.is_power_on());
    }

    #[test]
    fn test_try_new_small_buffer_returns_error() {
        let config = Builder::new()
            .dimensions(Dimensions::SIZE_128X64)
            .build()
            .unwrap();
        let result = Display::try_new(MockInterface::default(), config, [0u8; 512]);
        assert!(matches!(
            result,
            Err(Error::BufferTooSmall {
                required: 1024,
                provided: 512
            })
        ));
    }

    #[test]
    #[should_panic(expected = "buffer too small")]
    fn test_new_panics_on_small_buffer() {
        let config = Builder::new()
            .dimensions(Dimensions::SIZE_128X64)
            .build()
            .unwrap();
        let _ = Display::new(MockInterface::default(), config, [0u8; 100]);
    }

    #[test]
    fn test_init_sequence_order() {
        let mut display = test_display();
        display.init().unwrap();

        assert_eq!(
            display.interface.commands,
            alloc::vec![
                0xAE, 0xD5, 0x80, 0xA8, 0x3F, 0xD3, 0x00, 0x40, 0x8D, 0x14, 0x20, 0x00, 0xA1,
                0xC8, 0xDA, 0x12, 0x81, 0xCF, 0xD9, 0xF1, 0xDB, 0x40, 0xA4, 0xA6, 0xAF,
            ]
        );
        assert!(display.is_power_on());
        assert_eq!(display.contrast(), 0xCF);
        assert!(!display.is_inverted());
    }

    #[test]
    fn test_init_charge_pump_precedes_display_on() {
        let mut display = test_display();
        display.init().unwrap();

        let commands = &display.interface.commands;
        let pump = commands.iter().position(|c| *c == CHARGE_PUMP).unwrap();
        let on = commands.iter().rposition(|c| *c == DISPLAY_ON).unwrap();
        assert!(pump < on);
    }

    #[test]
    fn test_init_uses_height_for_multiplex() {
        let config = Builder::new()
            .dimensions(Dimensions::SIZE_128X32)
            .build()
            .unwrap();
        let mut display = Display::new(MockInterface::default(), config, [0u8; 512]);
        display.init().unwrap();
        assert_eq!(display.interface.commands[3..5], [SET_MULTIPLEX_RATIO, 31]);
        assert_eq!(display.interface.commands[14..16], [SET_COM_PINS, 0x02]);
    }

    #[test]
    fn test_init_failure_still_attempts_remainder() {
        let mut display = test_display();
        display.interface.fail_command = Some(2);

        let result = display.init();
        assert!(matches!(result, Err(Error::Interface(MockError))));
        assert_eq!(display.interface.commands.len(), INIT_SEQUENCE_LEN);
        assert_eq!(display.interface.commands.last(), Some(&DISPLAY_ON));
    }

    #[test]
    fn test_refresh_sends_window_then_full_buffer() {
        let mut display = test_display();
        display.set_pixel(0, 0, true);
        display.refresh().unwrap();

        assert_eq!(
            display.interface.commands,
            alloc::vec![COLUMN_ADDRESS, 0, 127, PAGE_ADDRESS, 0, 7]
        );
        assert_eq!(display.interface.data.len(), 1);
        assert_eq!(display.interface.data[0].len(), 1024);
        assert_eq!(display.interface.data[0][0], 0x01);
    }

    #[test]
    fn test_refresh_reports_data_failure() {
        let mut display = test_display();
        display.interface.fail_data = true;
        assert!(matches!(
            display.refresh(),
            Err(Error::Interface(MockError))
        ));
    }

    #[test]
    fn test_refresh_only_sends_display_sized_slice() {
        let config = Builder::new()
            .dimensions(Dimensions::SIZE_128X32)
            .build()
            .unwrap();
        let mut display = Display::new(MockInterface::default(), config, [0u8; 1024]);
        display.refresh().unwrap();
        assert_eq!(display.interface.data[0].len(), 512);
        assert_eq!(display.interface.commands[5], 3);
    }

    #[test]
    fn test_hand_built_empty_config_does_not_panic() {
        let mut config = Builder::new()
            .dimensions(Dimensions::SIZE_128X64)
            .build()
            .unwrap();
        config.dimensions = Dimensions {
            width: 0,
            height: 0,
        };
        let mut display = Display::new(MockInterface::default(), config, [0u8; 0]);
        display.init().unwrap();
        display.draw_line(0, 0, 10, 10, true);
        display.fill_circle(0, 0, 5, true);
        display.refresh().unwrap();

        assert_eq!(display.interface.commands[4], 0);
        assert_eq!(
            display.interface.commands[INIT_SEQUENCE_LEN..],
            [COLUMN_ADDRESS, 0, 0, PAGE_ADDRESS, 0, 0]
        );
        assert!(display.interface.data[0].is_empty());
    }

    #[test]
    fn test_set_power_preserves_buffer() {
        let mut display = test_display();
        display.fill_screen(0x5A);

        display.set_power(false).unwrap();
        assert!(!display.is_power_on());
        assert_eq!(display.interface.commands, alloc::vec![DISPLAY_OFF]);

        display.set_power(true).unwrap();
        assert!(display.is_power_on());
        assert!(display.buffer().iter().all(|byte| *byte == 0x5A));
    }

    #[test]
    fn test_set_contrast() {
        let mut display = test_display();
        display.set_contrast(0x10).unwrap();
        assert_eq!(display.contrast(), 0x10);
        assert_eq!(display.interface.commands, alloc::vec![SET_CONTRAST, 0x10]);
    }

    #[test]
    fn test_set_contrast_failure_keeps_commanded_level() {
        let mut display = test_display();
        display.interface.fail_command = Some(1);
        assert!(display.set_contrast(0x22).is_err());
        assert_eq!(display.contrast(), 0x22);
    }

    #[test]
    fn test_set_inverted_leaves_buffer() {
        let mut display = test_display();
        display.set_pixel(3, 3, true);
        let before = display.buffer().to_vec();

        display.set_inverted(true).unwrap();
        assert!(display.is_inverted());
        assert_eq!(display.buffer(), before.as_slice());

        display.set_inverted(false).unwrap();
        assert_eq!(
            display.interface.commands,
            alloc::vec![INVERT_DISPLAY, NORMAL_DISPLAY]
        );
    }

    #[test]
    fn test_set_orientation_emits_both_commands() {
        let mut display = test_display();
        display.set_orientation(false, true).unwrap();
        assert_eq!(display.interface.commands, alloc::vec![0xA0, 0xC8]);
        assert!(!display.config().orientation.flip_horizontal);

        display.set_orientation(true, false).unwrap();
        assert_eq!(display.interface.commands[2..], [0xA1, 0xC0]);
    }

    #[test]
    fn test_set_all_pixels_on() {
        let mut display = test_display();
        display.set_all_pixels_on(true).unwrap();
        display.set_all_pixels_on(false).unwrap();
        assert_eq!(
            display.interface.commands,
            alloc::vec![DISPLAY_ALL_ON, DISPLAY_FROM_RAM]
        );
    }
}
