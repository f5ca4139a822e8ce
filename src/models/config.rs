use crate::error::ConfigError;
use crate::models::{DeviceModel, ScreenSpecs};
use gray_dither::{BitDepth, DitheringAlgorithm};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Environment variable naming the config file when `--config` is absent.
pub const CONFIG_ENV_VAR: &str = "LOCKSCREEN_CONFIG";

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Encoding defaults applied when the command line does not override them
    #[serde(default)]
    pub defaults: EncodeDefaults,

    /// Extra screens, looked up by name before the built-in models
    #[serde(default)]
    pub screens: HashMap<String, ScreenConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EncodeDefaults {
    #[serde(default = "default_contrast")]
    pub contrast: f64,

    #[serde(default, deserialize_with = "deserialize_algorithm")]
    pub dither: DitheringAlgorithm,

    #[serde(default = "default_compress")]
    pub compress: bool,
}

fn default_contrast() -> f64 {
    1.0
}

fn default_compress() -> bool {
    true
}

impl Default for EncodeDefaults {
    fn default() -> Self {
        Self {
            contrast: default_contrast(),
            dither: DitheringAlgorithm::default(),
            compress: default_compress(),
        }
    }
}

fn deserialize_algorithm<'de, D>(deserializer: D) -> Result<DitheringAlgorithm, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    name.parse().map_err(serde::de::Error::custom)
}

/// A custom screen definition
#[derive(Debug, Deserialize, Clone)]
pub struct ScreenConfig {
    pub width: u16,
    pub height: u16,
    #[serde(default)]
    pub padding_top: u16,
    #[serde(default)]
    pub padding_bottom: u16,
    #[serde(default)]
    pub padding_left: u16,
    #[serde(default)]
    pub padding_right: u16,
    pub bits_per_pixel: u8,
}

impl ScreenConfig {
    pub fn to_specs(&self) -> Result<ScreenSpecs, ConfigError> {
        let depth = BitDepth::try_from(self.bits_per_pixel)
            .map_err(|_| ConfigError::InvalidBitsPerPixel(self.bits_per_pixel))?;
        ScreenSpecs::new(
            self.width,
            self.height,
            [
                self.padding_top,
                self.padding_bottom,
                self.padding_left,
                self.padding_right,
            ],
            depth,
        )
    }
}

impl AppConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        // Empty documents deserialize to unit, not a map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content)?;
        for screen in config.screens.values() {
            screen.to_specs()?;
        }
        Ok(config)
    }

    /// Read and validate a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from `path`, falling back to defaults with a
    /// warning when the file is missing or invalid.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::from_file(path) {
            Ok(config) => {
                tracing::info!(
                    path = %path.display(),
                    screens = config.screens.len(),
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// The explicit path if given, otherwise the one in `LOCKSCREEN_CONFIG`.
    pub fn resolve_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
        explicit.or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
    }

    /// Look up a screen by name: custom screens first, then device models.
    pub fn screen_specs(&self, name: &str) -> Result<ScreenSpecs, ConfigError> {
        if let Some(screen) = self.screens.get(name) {
            return screen.to_specs();
        }
        name.parse::<DeviceModel>()
            .map(DeviceModel::screen_specs)
            .map_err(|_| ConfigError::UnknownScreen(name.to_string()))
    }
}
