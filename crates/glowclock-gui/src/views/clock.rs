/// Clock face view layer - Pure rendering, no business logic
use glowclock_core::{
    layout::{FaceMetrics, WidthBehavior},
    modules::clock::DisplayedTime,
    style::glow,
};
use glowclock_proto::config::{ClockConfig, font_preset};
use iced::{
    Alignment, Color, Element, Font, Length, Padding, Shadow, Theme,
    alignment::Horizontal,
    widget::{container, responsive, row, text},
};

use crate::app::Message;

/// Colors and font the digits are drawn with.
#[derive(Debug, Clone, Copy)]
pub struct FaceStyle {
    pub color:  Color,
    pub font:   Font,
    pub shadow: Option<Shadow>,
}

impl FaceStyle {
    pub fn new(config: &ClockConfig) -> Self {
        let color = config.character_color();

        Self {
            color,
            font: face_font(&config.font_family),
            shadow: glow(color, config.background),
        }
    }
}

/// Font for a configured family; families outside the preset list fall back
/// to the monospace face.
pub fn face_font(family: &str) -> Font {
    font_preset(family).map_or(Font::MONOSPACE, |preset| Font::with_name(preset.family))
}

/// Render the `HH:MM` face sized by `width` within whatever space the parent
/// gives it.
pub fn render_clock_face(
    time: &DisplayedTime,
    style: FaceStyle,
    width: WidthBehavior,
) -> Element<'static, Message> {
    let time = time.clone();

    responsive(move |available| {
        let metrics = FaceMetrics::fit(width.resolve(available.width), available.height);

        container(digits(&time, style, metrics))
            .center(Length::Fill)
            .into()
    })
    .into()
}

fn digits(time: &DisplayedTime, style: FaceStyle, metrics: FaceMetrics) -> Element<'static, Message> {
    let glyph = |value: String, color: Color| {
        text(value)
            .size(metrics.glyph_size)
            .font(style.font)
            .color(color)
    };

    let colon_color = if time.colon_visible {
        style.color
    } else {
        Color::TRANSPARENT
    };

    let colon = container(glyph(":".to_owned(), colon_color)).padding(Padding {
        top:    0.0,
        right:  metrics.colon_gap,
        bottom: metrics.colon_lift,
        left:   metrics.colon_gap,
    });

    let content = row![
        glyph(time.hours.clone(), style.color),
        colon,
        glyph(time.minutes.clone(), style.color),
    ]
    .align_y(Alignment::Center);

    let shadow = style.shadow.unwrap_or_default();

    container(content)
        .width(Length::Fixed(metrics.width))
        .align_x(Horizontal::Center)
        .style(move |_theme: &Theme| container::Style {
            shadow,
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use glowclock_proto::config::BackgroundTheme;

    use super::*;

    #[test]
    fn preset_families_map_to_named_fonts() {
        assert_eq!(face_font("Orbitron"), Font::with_name("Orbitron"));
        assert_eq!(face_font("share tech mono"), Font::with_name("Share Tech Mono"));
    }

    #[test]
    fn unknown_families_fall_back_to_monospace() {
        assert_eq!(face_font("Comic Sans"), Font::MONOSPACE);
    }

    #[test]
    fn white_background_drops_the_glow() {
        let mut config = ClockConfig::default();
        assert!(FaceStyle::new(&config).shadow.is_some());

        config.background = BackgroundTheme::White;
        assert!(FaceStyle::new(&config).shadow.is_none());
    }
}
