pub mod config;
pub mod screen_spec;

pub use config::{AppConfig, EncodeDefaults, ScreenConfig, CONFIG_ENV_VAR};
pub use screen_spec::{DeviceModel, ScreenSpecs};
