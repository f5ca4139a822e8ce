use crate::error::ConfigError;
use crate::fit::ImageDimensions;
use gray_dither::BitDepth;
use std::fmt;
use std::str::FromStr;

/// Physical screen geometry of a device model.
///
/// `width` and `height` cover the whole panel. The padding fields describe
/// borders that are stored in the pixel data but hidden behind the bezel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSpecs {
    pub width: u16,
    pub height: u16,
    pub padding_top: u16,
    pub padding_bottom: u16,
    pub padding_left: u16,
    pub padding_right: u16,
    pub depth: BitDepth,
}

impl ScreenSpecs {
    /// Stax: 400x672, 4bpp, 2px hidden at the bottom
    pub const STAX: Self = Self {
        width: 400,
        height: 672,
        padding_top: 0,
        padding_bottom: 2,
        padding_left: 0,
        padding_right: 0,
        depth: BitDepth::Four,
    };

    /// Flex: 480x600, 4bpp
    pub const FLEX: Self = Self {
        width: 480,
        height: 600,
        padding_top: 0,
        padding_bottom: 0,
        padding_left: 0,
        padding_right: 0,
        depth: BitDepth::Four,
    };

    /// Apex: 300x400, 1bpp
    pub const APEX: Self = Self {
        width: 300,
        height: 400,
        padding_top: 0,
        padding_bottom: 0,
        padding_left: 0,
        padding_right: 0,
        depth: BitDepth::One,
    };

    /// Build a screen description, checking that the paddings fit inside it.
    pub fn new(
        width: u16,
        height: u16,
        padding: [u16; 4],
        depth: BitDepth,
    ) -> Result<Self, ConfigError> {
        let [padding_top, padding_bottom, padding_left, padding_right] = padding;
        let horizontal = padding_left as u32 + padding_right as u32;
        let vertical = padding_top as u32 + padding_bottom as u32;
        if horizontal > width as u32 || vertical > height as u32 {
            return Err(ConfigError::PaddingExceedsDimensions {
                width,
                height,
                horizontal,
                vertical,
            });
        }

        Ok(Self {
            width,
            height,
            padding_top,
            padding_bottom,
            padding_left,
            padding_right,
            depth,
        })
    }

    pub fn dimensions(&self) -> ImageDimensions {
        ImageDimensions::new(self.width as u32, self.height as u32)
    }

    /// Size of the area the user actually sees.
    pub fn visible_dimensions(&self) -> ImageDimensions {
        let horizontal = self.padding_left as u32 + self.padding_right as u32;
        let vertical = self.padding_top as u32 + self.padding_bottom as u32;
        ImageDimensions::new(
            (self.width as u32).saturating_sub(horizontal),
            (self.height as u32).saturating_sub(vertical),
        )
    }

    pub fn has_padding(&self) -> bool {
        self.padding_top != 0
            || self.padding_bottom != 0
            || self.padding_left != 0
            || self.padding_right != 0
    }
}

/// Device models with a built-in screen description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceModel {
    Stax,
    Flex,
    Apex,
}

impl DeviceModel {
    pub const ALL: [DeviceModel; 3] = [DeviceModel::Stax, DeviceModel::Flex, DeviceModel::Apex];

    pub fn screen_specs(self) -> ScreenSpecs {
        match self {
            DeviceModel::Stax => ScreenSpecs::STAX,
            DeviceModel::Flex => ScreenSpecs::FLEX,
            DeviceModel::Apex => ScreenSpecs::APEX,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DeviceModel::Stax => "stax",
            DeviceModel::Flex => "flex",
            DeviceModel::Apex => "apex",
        }
    }
}

impl FromStr for DeviceModel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        DeviceModel::ALL
            .into_iter()
            .find(|model| model.name() == lowered)
            .ok_or_else(|| ConfigError::UnknownModel(s.to_string()))
    }
}

impl fmt::Display for DeviceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
