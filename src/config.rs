//! Display configuration types and builder

use crate::command::{
    COM_SCAN_ASCENDING, COM_SCAN_DESCENDING, SEGMENT_REMAP_FLIPPED, SEGMENT_REMAP_NORMAL,
};
pub use crate::error::{BuilderError, MAX_COLUMNS, MAX_ROWS};

/// Display dimensions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    /// Number of columns (width in pixels, corresponds to segment outputs)
    pub width: u16,
    /// Number of rows (height in pixels, corresponds to COM outputs)
    pub height: u16,
}

impl Dimensions {
    /// The common 128x64 module
    pub const SIZE_128X64: Self = Self {
        width: 128,
        height: 64,
    };

    /// The common 128x32 module
    pub const SIZE_128X32: Self = Self {
        width: 128,
        height: 32,
    };

    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - width == 0 or width > MAX_COLUMNS
    /// - height == 0 or height > MAX_ROWS
    /// - height % 8 != 0 (memory is organized in 8-row pages)
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || width > MAX_COLUMNS {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        if height == 0 || height > MAX_ROWS || height % 8 != 0 {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of 8-row pages
    pub fn pages(&self) -> u16 {
        self.height / 8
    }

    /// Calculate required buffer size in bytes
    pub fn buffer_size(&self) -> usize {
        (self.width as usize * self.height as usize) / 8
    }

    /// Whether a coordinate lies on the screen
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32
    }
}

/// Controller-side mirroring of the panel
///
/// The flips are applied by the controller while scanning RAM out to the
/// glass; the framebuffer layout never changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orientation {
    /// Mirror columns (segment remap)
    pub flip_horizontal: bool,
    /// Mirror rows (COM scan direction)
    pub flip_vertical: bool,
}

impl Default for Orientation {
    /// Both flips on: the usual mounting of 128x64 modules
    fn default() -> Self {
        Self {
            flip_horizontal: true,
            flip_vertical: true,
        }
    }
}

impl Orientation {
    /// Segment remap command for the horizontal flip
    pub fn segment_remap_command(&self) -> u8 {
        if self.flip_horizontal {
            SEGMENT_REMAP_FLIPPED
        } else {
            SEGMENT_REMAP_NORMAL
        }
    }

    /// COM scan direction command for the vertical flip
    pub fn com_scan_command(&self) -> u8 {
        if self.flip_vertical {
            COM_SCAN_DESCENDING
        } else {
            COM_SCAN_ASCENDING
        }
    }
}

/// Display configuration
///
/// This struct holds the register values programmed during initialization.
/// Use `Builder` to create a Config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Display dimensions
    pub dimensions: Dimensions,
    /// Controller-side mirroring
    pub orientation: Orientation,
    /// Contrast programmed at init
    pub contrast: u8,
    /// Clock divide ratio / oscillator frequency byte
    pub clock_divide: u8,
    /// Pre-charge period byte
    pub precharge: u8,
    /// VCOMH deselect level byte
    pub vcom_detect: u8,
    /// COM pins hardware configuration byte
    pub com_pins: u8,
    /// Whether the internal charge pump is enabled
    pub charge_pump: bool,
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```rust
/// use ssd1306_i2c::{Builder, Dimensions};
///
/// let dims = match Dimensions::new(128, 64) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new().dimensions(dims).contrast(0x7F).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.com_pins, 0x12);
/// ```
#[must_use]
pub struct Builder {
    /// Display dimensions (required)
    dimensions: Option<Dimensions>,
    /// Controller-side mirroring
    orientation: Orientation,
    /// Contrast programmed at init
    contrast: u8,
    /// Clock divide ratio / oscillator frequency byte
    clock_divide: u8,
    /// Pre-charge period byte
    precharge: u8,
    /// VCOMH deselect level byte
    vcom_detect: u8,
    /// COM pins configuration, derived from height when unset
    com_pins: Option<u8>,
    /// Whether the internal charge pump is enabled
    charge_pump: bool,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: None,
            orientation: Orientation::default(),
            contrast: 0xCF,
            // Divide ratio 1, oscillator frequency 8 (reset value)
            clock_divide: 0x80,
            // Phase 1: 1 DCLK, phase 2: 15 DCLK (internal charge pump)
            precharge: 0xF1,
            vcom_detect: 0x40,
            com_pins: None,
            charge_pump: true,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set controller-side mirroring
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set the contrast programmed at init
    pub fn contrast(mut self, value: u8) -> Self {
        self.contrast = value;
        self
    }

    /// Set the clock divide ratio / oscillator frequency byte
    pub fn clock_divide(mut self, value: u8) -> Self {
        self.clock_divide = value;
        self
    }

    /// Set the pre-charge period byte
    pub fn precharge(mut self, value: u8) -> Self {
        self.precharge = value;
        self
    }

    /// Set the VCOMH deselect level byte
    pub fn vcom_detect(mut self, value: u8) -> Self {
        self.vcom_detect = value;
        self
    }

    /// Override the COM pins hardware configuration
    ///
    /// By default this is 0x12 for panels taller than 32 rows and 0x02 otherwise.
    pub fn com_pins(mut self, value: u8) -> Self {
        self.com_pins = Some(value);
        self
    }

    /// Enable or disable the internal charge pump
    ///
    /// Only disable it for modules with an external VCC supply.
    pub fn charge_pump(mut self, enabled: bool) -> Self {
        self.charge_pump = enabled;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set,
    /// or `BuilderError::InvalidDimensions` if they were built by hand and
    /// fail the checks of [`Dimensions::new`]
    pub fn build(self) -> Result<Config, BuilderError> {
        let dimensions = self.dimensions.ok_or(BuilderError::MissingDimensions)?;
        let dimensions = Dimensions::new(dimensions.width, dimensions.height)?;
        let com_pins = self
            .com_pins
            .unwrap_or(if dimensions.height > 32 { 0x12 } else { 0x02 });
        Ok(Config {
            dimensions,
            orientation: self.orientation,
            contrast: self.contrast,
            clock_divide: self.clock_divide,
            precharge: self.precharge,
            vcom_detect: self.vcom_detect,
            com_pins,
            charge_pump: self.charge_pump,
        })
    }
}
