//! Display configuration types
//!
//! Sizing and brightness bootstrap are configuration-time concerns: they
//! are applied once when a peripheral comes up and never travel on the
//! per-command wire path.

/// Configuration for a character display module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// Characters per line
    pub columns: u8,
    /// Number of lines
    pub rows: u8,
    /// Initial brightness level applied at bring-up
    pub brightness: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::W20X2
    }
}

impl DisplayConfig {
    /// Full brightness bootstrap value
    pub const FULL_BRIGHTNESS: u8 = 100;

    /// 20x2 module
    pub const W20X2: Self = Self {
        columns: 20,
        rows: 2,
        brightness: Self::FULL_BRIGHTNESS,
    };

    /// 20x4 module
    pub const W20X4: Self = Self {
        columns: 20,
        rows: 4,
        brightness: Self::FULL_BRIGHTNESS,
    };

    /// 16x2 module
    pub const W16X2: Self = Self {
        columns: 16,
        rows: 2,
        brightness: Self::FULL_BRIGHTNESS,
    };

    /// Total number of character cells
    pub fn cells(&self) -> usize {
        self.columns as usize * self.rows as usize
    }
}
