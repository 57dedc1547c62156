//! Panel geometry profiles and power supply configuration
//!
//! The SSD1306 drives several physical panel sizes that differ only in a
//! handful of controller-tuning bytes. Each supported size is a
//! [`PanelSize`] variant resolving to a [`PanelProfile`] value; the
//! driver is parameterized by the profile instead of a type per panel.
//! The tuning bytes come from the controller datasheet and the panel
//! manufacturer reference designs.

/// Largest framebuffer across supported panels (128x64 / 8)
pub const MAX_BUFFER_LEN: usize = 1024;

/// Supported panel geometries
///
/// Selects the [`PanelProfile`] the driver is constructed with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelSize {
    /// 128x64 pixel panel
    Size128x64,
    /// 128x32 pixel panel
    Size128x32,
    /// 96x16 pixel panel
    Size96x16,
}

impl PanelSize {
    /// Resolve the controller tuning profile for this panel size
    pub const fn profile(self) -> PanelProfile {
        match self {
            Self::Size128x64 => PanelProfile {
                width: 128,
                height: 64,
                multiplex: 0x3F,
                com_pins: 0x12,
                clock_divider: 0x80,
                contrast_internal: 0xCF,
                contrast_external: 0x9F,
            },
            Self::Size128x32 => PanelProfile {
                width: 128,
                height: 32,
                multiplex: 0x1F,
                com_pins: 0x02,
                clock_divider: 0x80,
                contrast_internal: 0x8F,
                contrast_external: 0x8F,
            },
            Self::Size96x16 => PanelProfile {
                width: 96,
                height: 16,
                multiplex: 0x0F,
                com_pins: 0x02,
                clock_divider: 0x60,
                contrast_internal: 0x8F,
                contrast_external: 0x8F,
            },
        }
    }
}

/// Per-panel controller tuning values
///
/// Immutable for the lifetime of a driver instance. The `multiplex`,
/// `com_pins`, and `clock_divider` bytes are opaque datasheet constants;
/// only `width` and `height` (always a multiple of 8) have derivable
/// meaning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelProfile {
    /// Panel width in pixels
    pub width: u16,
    /// Panel height in pixels (multiple of 8)
    pub height: u16,
    /// Multiplex ratio byte (height - 1)
    pub multiplex: u8,
    /// COM pins hardware configuration byte
    pub com_pins: u8,
    /// Display clock divide ratio / oscillator frequency byte
    pub clock_divider: u8,
    /// Contrast level when running from the internal charge pump
    pub contrast_internal: u8,
    /// Contrast level when running from an external VCC supply
    pub contrast_external: u8,
}

impl PanelProfile {
    /// Number of 8-pixel-tall pages
    pub const fn page_count(&self) -> u16 {
        self.height / 8
    }

    /// Framebuffer length in bytes (`width * page_count`)
    pub const fn buffer_len(&self) -> usize {
        self.width as usize * self.page_count() as usize
    }

    /// Contrast byte for the given supply mode
    ///
    /// Externally powered boards drive lower contrast than boards running
    /// from the internal charge pump.
    pub const fn contrast(&self, vcc: VccMode) -> u8 {
        match vcc {
            VccMode::Internal => self.contrast_internal,
            VccMode::External => self.contrast_external,
        }
    }
}

/// OLED drive voltage source
///
/// Chosen once at [`begin`](crate::Display::begin); changing it requires
/// re-running initialization.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VccMode {
    /// On-chip switch-cap charge pump generates the drive voltage
    #[default]
    Internal,
    /// Drive voltage supplied externally
    External,
}

impl VccMode {
    /// Argument byte for the charge pump command
    pub const fn charge_pump(self) -> u8 {
        match self {
            Self::Internal => 0x14,
            Self::External => 0x10,
        }
    }

    /// Argument byte for the precharge period command
    pub const fn precharge(self) -> u8 {
        match self {
            Self::Internal => 0xF1,
            Self::External => 0x22,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_128x64() {
        let profile = PanelSize::Size128x64.profile();
        assert_eq!(profile.width, 128);
        assert_eq!(profile.height, 64);
        assert_eq!(profile.multiplex, 0x3F);
        assert_eq!(profile.com_pins, 0x12);
        assert_eq!(profile.clock_divider, 0x80);
        assert_eq!(profile.page_count(), 8);
        assert_eq!(profile.buffer_len(), 1024);
    }

    #[test]
    fn test_profile_128x32() {
        let profile = PanelSize::Size128x32.profile();
        assert_eq!(profile.width, 128);
        assert_eq!(profile.height, 32);
        assert_eq!(profile.multiplex, 0x1F);
        assert_eq!(profile.com_pins, 0x02);
        assert_eq!(profile.clock_divider, 0x80);
        assert_eq!(profile.page_count(), 4);
        assert_eq!(profile.buffer_len(), 512);
    }

    #[test]
    fn test_profile_96x16() {
        let profile = PanelSize::Size96x16.profile();
        assert_eq!(profile.width, 96);
        assert_eq!(profile.height, 16);
        assert_eq!(profile.multiplex, 0x0F);
        assert_eq!(profile.com_pins, 0x02);
        assert_eq!(profile.clock_divider, 0x60);
        assert_eq!(profile.page_count(), 2);
        assert_eq!(profile.buffer_len(), 192);
    }

    #[test]
    fn test_no_profile_exceeds_max_buffer() {
        for size in [
            PanelSize::Size128x64,
            PanelSize::Size128x32,
            PanelSize::Size96x16,
        ] {
            assert!(size.profile().buffer_len() <= MAX_BUFFER_LEN);
        }
    }

    #[test]
    fn test_contrast_depends_on_vcc_for_128x64_only() {
        let large = PanelSize::Size128x64.profile();
        assert_eq!(large.contrast(VccMode::Internal), 0xCF);
        assert_eq!(large.contrast(VccMode::External), 0x9F);

        for size in [PanelSize::Size128x32, PanelSize::Size96x16] {
            let profile = size.profile();
            assert_eq!(profile.contrast(VccMode::Internal), 0x8F);
            assert_eq!(profile.contrast(VccMode::External), 0x8F);
        }
    }

    #[test]
    fn test_vcc_mode_command_arguments() {
        assert_eq!(VccMode::Internal.charge_pump(), 0x14);
        assert_eq!(VccMode::External.charge_pump(), 0x10);
        assert_eq!(VccMode::Internal.precharge(), 0xF1);
        assert_eq!(VccMode::External.precharge(), 0x22);
    }

    #[test]
    fn test_vcc_mode_default_is_internal() {
        assert_eq!(VccMode::default(), VccMode::Internal);
    }
}
