use std::fmt;

use chrono::{Local, Offset};
use hex_color::HexColor;
use iced::Color;
use serde::Deserialize;
use thiserror::Error;

use super::presets::{DEFAULT_COLOR, DEFAULT_FONT};

/// Errors produced when constructing a [`GmtOffset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GmtOffsetError {
    /// The requested hour offset lies outside `-12..=14`.
    #[error("GMT offset {hours} is outside the supported range -12..=14")]
    OutOfRange { hours: i32 },
}

/// Whole-hour offset from UTC used to compute the displayed time.
///
/// Only the 27 values from -12 to +14 are representable.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "i32")]
pub struct GmtOffset(i8);

impl GmtOffset {
    pub const MIN_HOURS: i32 = -12;
    pub const MAX_HOURS: i32 = 14;
    pub const UTC: Self = Self(0);

    /// Returns the offset in hours.
    pub const fn hours(self) -> i32 {
        self.0 as i32
    }

    /// Returns the offset in milliseconds.
    pub const fn millis(self) -> i64 {
        self.hours() as i64 * 3_600_000
    }

    /// Enumerates every supported offset in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIN_HOURS..=Self::MAX_HOURS).map(|hours| Self(hours as i8))
    }

    /// Builds an offset, saturating at the ends of the supported range.
    pub fn clamped(hours: i32) -> Self {
        Self(hours.clamp(Self::MIN_HOURS, Self::MAX_HOURS) as i8)
    }

    /// The offset of the local system time zone, in whole hours.
    ///
    /// Zones with a fractional offset (for example UTC+5:30) are truncated
    /// toward zero.
    pub fn local() -> Self {
        let seconds = Local::now().offset().fix().local_minus_utc();
        Self::clamped(seconds / 3_600)
    }
}

impl Default for GmtOffset {
    fn default() -> Self {
        Self::local()
    }
}

impl TryFrom<i32> for GmtOffset {
    type Error = GmtOffsetError;

    fn try_from(hours: i32) -> Result<Self, Self::Error> {
        if (Self::MIN_HOURS..=Self::MAX_HOURS).contains(&hours) {
            Ok(Self(hours as i8))
        } else {
            Err(GmtOffsetError::OutOfRange { hours })
        }
    }
}

impl fmt::Display for GmtOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 >= 0 { "+" } else { "" };
        write!(f, "GMT {sign}{}:00", self.0)
    }
}

/// Display size of the clock face in view mode.
#[derive(Deserialize, Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ClockSize {
    Small,
    #[default]
    Medium,
    Fullscreen,
}

impl ClockSize {
    pub const ALL: [ClockSize; 3] = [ClockSize::Small, ClockSize::Medium, ClockSize::Fullscreen];

    pub fn label(self) -> &'static str {
        match self {
            ClockSize::Small => "Small",
            ClockSize::Medium => "Medium",
            ClockSize::Fullscreen => "Fullscreen",
        }
    }
}

/// Backdrop the clock is rendered on.
#[derive(Deserialize, Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundTheme {
    #[default]
    Black,
    White,
    Nebula,
}

impl BackgroundTheme {
    pub const ALL: [BackgroundTheme; 3] =
        [BackgroundTheme::Black, BackgroundTheme::White, BackgroundTheme::Nebula];

    pub fn label(self) -> &'static str {
        match self {
            BackgroundTheme::Black => "Black",
            BackgroundTheme::White => "White",
            BackgroundTheme::Nebula => "Nebula",
        }
    }
}

/// User-selected clock appearance.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ClockConfig {
    #[serde(default = "default_color")]
    pub color:       HexColor,
    #[serde(default)]
    pub size:        ClockSize,
    #[serde(default)]
    pub gmt_offset:  GmtOffset,
    #[serde(default)]
    pub background:  BackgroundTheme,
    #[serde(default = "default_font_family")]
    pub font_family: String,
}

fn default_color() -> HexColor {
    DEFAULT_COLOR
}

fn default_font_family() -> String {
    DEFAULT_FONT.family.to_owned()
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            color:       default_color(),
            size:        ClockSize::default(),
            gmt_offset:  GmtOffset::local(),
            background:  BackgroundTheme::default(),
            font_family: default_font_family(),
        }
    }
}

/// A single field edit applied to a [`ClockConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigUpdate {
    Color(HexColor),
    Size(ClockSize),
    Offset(GmtOffset),
    Background(BackgroundTheme),
    FontFamily(String),
}

impl ClockConfig {
    /// Returns a new configuration with `update` applied, leaving `self`
    /// untouched.
    #[must_use]
    pub fn with(&self, update: ConfigUpdate) -> Self {
        let mut next = self.clone();

        match update {
            ConfigUpdate::Color(color) => next.color = color,
            ConfigUpdate::Size(size) => next.size = size,
            ConfigUpdate::Offset(offset) => next.gmt_offset = offset,
            ConfigUpdate::Background(background) => next.background = background,
            ConfigUpdate::FontFamily(family) => next.font_family = family,
        }

        next
    }

    /// Character color as an iced [`Color`].
    #[must_use]
    pub fn character_color(&self) -> Color {
        Color::from_rgb8(self.color.r, self.color.g, self.color.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_range_has_27_values() {
        let offsets: Vec<_> = GmtOffset::all().map(GmtOffset::hours).collect();

        assert_eq!(offsets.len(), 27);
        assert_eq!(offsets.first(), Some(&-12));
        assert_eq!(offsets.last(), Some(&14));
        assert!(offsets.windows(2).all(|pair| pair[1] == pair[0] + 1));
    }

    #[test]
    fn offset_try_from_checks_bounds() {
        assert_eq!(GmtOffset::try_from(-12).map(GmtOffset::hours), Ok(-12));
        assert_eq!(GmtOffset::try_from(14).map(GmtOffset::hours), Ok(14));
        assert_eq!(
            GmtOffset::try_from(-13),
            Err(GmtOffsetError::OutOfRange { hours: -13 })
        );
        assert_eq!(
            GmtOffset::try_from(15),
            Err(GmtOffsetError::OutOfRange { hours: 15 })
        );
    }

    #[test]
    fn offset_clamps_to_range() {
        assert_eq!(GmtOffset::clamped(-40).hours(), -12);
        assert_eq!(GmtOffset::clamped(40).hours(), 14);
        assert_eq!(GmtOffset::clamped(3).hours(), 3);
    }

    #[test]
    fn local_offset_is_in_range() {
        let local = GmtOffset::local().hours();
        assert!((GmtOffset::MIN_HOURS..=GmtOffset::MAX_HOURS).contains(&local));
    }

    #[test]
    fn offset_units() {
        let offset = GmtOffset::try_from(-3).expect("valid offset");
        assert_eq!(offset.millis(), -10_800_000);
    }

    #[test]
    fn offset_label_carries_sign() {
        assert_eq!(GmtOffset::UTC.to_string(), "GMT +0:00");
        assert_eq!(GmtOffset::clamped(5).to_string(), "GMT +5:00");
        assert_eq!(GmtOffset::clamped(-11).to_string(), "GMT -11:00");
    }

    #[test]
    fn update_replaces_only_the_edited_field() {
        let base = ClockConfig {
            gmt_offset: GmtOffset::UTC,
            ..ClockConfig::default()
        };

        let next = base.with(ConfigUpdate::Background(BackgroundTheme::Nebula));

        assert_eq!(next.background, BackgroundTheme::Nebula);
        assert_eq!(next.color, base.color);
        assert_eq!(next.size, base.size);
        assert_eq!(next.gmt_offset, base.gmt_offset);
        assert_eq!(next.font_family, base.font_family);
        assert_eq!(base.background, BackgroundTheme::Black);
    }

    #[test]
    fn update_each_field() {
        let base = ClockConfig::default();
        let offset = GmtOffset::clamped(9);

        assert_eq!(base.with(ConfigUpdate::Size(ClockSize::Small)).size, ClockSize::Small);
        assert_eq!(base.with(ConfigUpdate::Offset(offset)).gmt_offset, offset);
        assert_eq!(
            base.with(ConfigUpdate::Color(HexColor::rgb(1, 2, 3))).color,
            HexColor::rgb(1, 2, 3)
        );
        assert_eq!(
            base.with(ConfigUpdate::FontFamily("Wallpoet".into())).font_family,
            "Wallpoet"
        );
    }

    #[test]
    fn character_color_converts_hex() {
        let config = ClockConfig {
            color: HexColor::rgb(255, 0, 0),
            ..ClockConfig::default()
        };

        assert_eq!(config.character_color(), Color::from_rgb8(255, 0, 0));
    }
}
