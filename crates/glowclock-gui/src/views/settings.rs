/// Settings panel view layer
use glowclock_core::style::{option_button_style, panel_style, swatch_button_style};
use glowclock_proto::config::{
    BackgroundTheme, COLOR_PRESETS, ClockConfig, ClockSize, ColorPreset, ConfigUpdate,
    FONT_PRESETS, GmtOffset, font_preset,
};
use iced::{
    Color, Element, Length,
    widget::{Column, Row, Space, button, column, container, pick_list, text, tooltip},
};

use crate::app::Message;

const SWATCH_SIZE: f32 = 28.0;
const MUTED: Color = Color {
    r: 0.639,
    g: 0.639,
    b: 0.639,
    a: 1.0,
};

fn section<'a>(title: &'a str, content: impl Into<Element<'a, Message>>) -> Column<'a, Message> {
    column![text(title).size(12).color(MUTED), content.into()].spacing(8)
}

fn swatch<'a>(preset: &ColorPreset, selected: bool) -> Element<'a, Message> {
    let color = Color::from_rgb8(preset.value.r, preset.value.g, preset.value.b);

    let swatch = button(Space::new(
        Length::Fixed(SWATCH_SIZE),
        Length::Fixed(SWATCH_SIZE),
    ))
    .padding(0)
    .style(swatch_button_style(color, selected))
    .on_press(Message::ConfigEdited(ConfigUpdate::Color(preset.value)));

    tooltip(swatch, text(preset.name).size(12), tooltip::Position::Bottom).into()
}

fn option_button<'a>(label: &'a str, selected: bool, message: Message) -> Element<'a, Message> {
    button(text(label).size(14).center().width(Length::Fill))
        .width(Length::Fill)
        .padding([8, 12])
        .style(option_button_style(selected))
        .on_press(message)
        .into()
}

/// Render the panel used to customize the clock.
pub fn render_settings_panel(config: &ClockConfig) -> Element<'_, Message> {
    let header = column![
        text("glowclock").size(28),
        text("Customize your clock, then pick a size to show it.")
            .size(14)
            .color(MUTED),
    ]
    .spacing(4);

    let colors = Row::with_children(
        COLOR_PRESETS
            .iter()
            .map(|preset| swatch(preset, preset.value == config.color)),
    )
    .spacing(8);

    let backgrounds = Row::with_children(BackgroundTheme::ALL.into_iter().map(|background| {
        option_button(
            background.label(),
            background == config.background,
            Message::ConfigEdited(ConfigUpdate::Background(background)),
        )
    }))
    .spacing(8);

    let sizes = column![
        Row::with_children(ClockSize::ALL.into_iter().map(|size| {
            option_button(size.label(), size == config.size, Message::SizeSelected(size))
        }))
        .spacing(8),
        text("Press Esc to leave the clock view").size(12).color(MUTED),
    ]
    .spacing(6);

    let offsets: Vec<GmtOffset> = GmtOffset::all().collect();
    let time_zone = pick_list(offsets, Some(config.gmt_offset), |offset| {
        Message::ConfigEdited(ConfigUpdate::Offset(offset))
    })
    .width(Length::Fill);

    let font = pick_list(FONT_PRESETS, font_preset(&config.font_family).copied(), |preset| {
        Message::ConfigEdited(ConfigUpdate::FontFamily(preset.family.to_owned()))
    })
    .placeholder(config.font_family.as_str())
    .width(Length::Fill);

    container(
        column![
            header,
            section("Color", colors),
            section("Background", backgrounds),
            section("Size", sizes),
            section("Time zone", time_zone),
            section("Font", font),
        ]
        .spacing(24),
    )
    .padding(24)
    .width(Length::Fixed(360.0))
    .style(panel_style)
    .into()
}
