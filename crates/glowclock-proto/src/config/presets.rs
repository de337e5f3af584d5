use std::fmt;

use hex_color::HexColor;

/// Named character color offered in the settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPreset {
    pub name:  &'static str,
    pub value: HexColor,
}

/// Named font family offered in the settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontPreset {
    pub name:   &'static str,
    pub family: &'static str,
}

impl fmt::Display for FontPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

pub const COLOR_PRESETS: [ColorPreset; 8] = [
    ColorPreset { name: "Red", value: HexColor::rgb(0xef, 0x44, 0x44) },
    ColorPreset { name: "Green", value: HexColor::rgb(0x22, 0xc5, 0x5e) },
    ColorPreset { name: "Blue", value: HexColor::rgb(0x3b, 0x82, 0xf6) },
    ColorPreset { name: "Cyan", value: HexColor::rgb(0x06, 0xb6, 0xd4) },
    ColorPreset { name: "Purple", value: HexColor::rgb(0xa8, 0x55, 0xf7) },
    ColorPreset { name: "Amber", value: HexColor::rgb(0xf5, 0x9e, 0x0b) },
    ColorPreset { name: "White", value: HexColor::rgb(0xff, 0xff, 0xff) },
    // Readable on the white background.
    ColorPreset { name: "Black", value: HexColor::rgb(0x00, 0x00, 0x00) },
];

pub const FONT_PRESETS: [FontPreset; 8] = [
    FontPreset { name: "Orbitron (default)", family: "Orbitron" },
    FontPreset { name: "Quantico", family: "Quantico" },
    FontPreset { name: "Roboto Mono", family: "Roboto Mono" },
    FontPreset { name: "Share Tech Mono", family: "Share Tech Mono" },
    FontPreset { name: "Wallpoet", family: "Wallpoet" },
    FontPreset { name: "Black Ops One", family: "Black Ops One" },
    FontPreset { name: "Audiowide", family: "Audiowide" },
    FontPreset { name: "Chakra Petch", family: "Chakra Petch" },
];

pub(super) const DEFAULT_COLOR: HexColor = COLOR_PRESETS[1].value;
pub(super) const DEFAULT_FONT: FontPreset = FONT_PRESETS[0];

/// Looks up the preset for a font family, ignoring ASCII case.
pub fn font_preset(family: &str) -> Option<&'static FontPreset> {
    FONT_PRESETS
        .iter()
        .find(|preset| preset.family.eq_ignore_ascii_case(family.trim()))
}
