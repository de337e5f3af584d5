use serde::Deserialize;

mod clock;
mod presets;
mod serde_helpers;
mod validation;

pub use clock::{BackgroundTheme, ClockConfig, ClockSize, ConfigUpdate, GmtOffset, GmtOffsetError};
pub use presets::{COLOR_PRESETS, ColorPreset, FONT_PRESETS, FontPreset, font_preset};
pub use validation::ConfigValidationError;

use serde_helpers::{positive_dimension_deserializer, scale_factor_deserializer};

pub const DEFAULT_CONFIG_FILE_PATH: &str = "~/.config/glowclock/config.toml";

/// Initial window geometry.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct WindowConfig {
    #[serde(
        deserialize_with = "positive_dimension_deserializer",
        default = "default_window_width"
    )]
    pub width:        f32,
    #[serde(
        deserialize_with = "positive_dimension_deserializer",
        default = "default_window_height"
    )]
    pub height:       f32,
    #[serde(
        deserialize_with = "scale_factor_deserializer",
        default = "default_scale_factor"
    )]
    pub scale_factor: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width:        default_window_width(),
            height:       default_window_height(),
            scale_factor: default_scale_factor(),
        }
    }
}

fn default_window_width() -> f32 {
    1280.0
}

fn default_window_height() -> f32 {
    800.0
}

fn default_scale_factor() -> f64 {
    1.0
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub clock:     ClockConfig,
    #[serde(default)]
    pub window:    WindowConfig,
}

fn default_log_level() -> String {
    "warn".to_owned()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            clock:     ClockConfig::default(),
            window:    WindowConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use hex_color::HexColor;

    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config: Config = toml::from_str("").expect("empty config parses");

        assert_eq!(config.log_level, "warn");
        assert_eq!(config.window, WindowConfig::default());
        assert_eq!(config.clock.size, ClockSize::Medium);
        assert_eq!(config.clock.background, BackgroundTheme::Black);
    }

    #[test]
    fn full_document_is_parsed() {
        let config: Config = toml::from_str(
            r##"
            log_level = "debug"

            [clock]
            color = "#3b82f6"
            size = "fullscreen"
            gmt_offset = -3
            background = "nebula"
            font_family = "Audiowide"

            [window]
            width = 640.0
            height = 360.0
            scale_factor = 1.5
            "##,
        )
        .expect("config parses");

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.clock.color, HexColor::rgb(0x3b, 0x82, 0xf6));
        assert_eq!(config.clock.size, ClockSize::Fullscreen);
        assert_eq!(config.clock.gmt_offset.hours(), -3);
        assert_eq!(config.clock.background, BackgroundTheme::Nebula);
        assert_eq!(config.clock.font_family, "Audiowide");
        assert_eq!(config.window.width, 640.0);
        assert_eq!(config.window.scale_factor, 1.5);
    }

    #[test]
    fn out_of_range_offset_is_rejected() {
        let result = toml::from_str::<Config>(
            r#"
            [clock]
            gmt_offset = 15
            "#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn unknown_size_is_rejected() {
        let result = toml::from_str::<Config>(
            r#"
            [clock]
            size = "huge"
            "#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn non_positive_window_width_is_rejected() {
        let result = toml::from_str::<Config>(
            r#"
            [window]
            width = 0.0
            "#,
        );

        assert!(result.is_err());
    }
}
