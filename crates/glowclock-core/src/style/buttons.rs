use iced::{
    Background, Border, Color, Shadow, Theme, Vector,
    widget::{
        button::{self, Status},
        container,
    },
};

const NEUTRAL_800: Color = Color {
    r: 0.149,
    g: 0.149,
    b: 0.149,
    a: 1.0,
};
const NEUTRAL_700: Color = Color {
    r: 0.251,
    g: 0.251,
    b: 0.251,
    a: 1.0,
};
const NEUTRAL_300: Color = Color {
    r: 0.831,
    g: 0.831,
    b: 0.831,
    a: 1.0,
};

fn selected_shadow() -> Shadow {
    Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.5),
        offset: Vector::new(0.0, 4.0),
        blur_radius: 12.0,
    }
}

/// Round color swatch; the selected swatch gets a white ring.
#[must_use]
pub fn swatch_button_style(color: Color, selected: bool) -> impl Fn(&Theme, Status) -> button::Style {
    move |_theme, status| {
        let ring = if selected {
            Color::WHITE
        } else if status == Status::Hovered {
            Color::from_rgba(1.0, 1.0, 1.0, 0.4)
        } else {
            Color::TRANSPARENT
        };

        button::Style {
            background: Some(color.into()),
            border: Border {
                width: 2.0,
                radius: 20.0.into(),
                color: ring,
            },
            shadow: if selected {
                selected_shadow()
            } else {
                Shadow::default()
            },
            ..button::Style::default()
        }
    }
}

/// Toggle-style option button used for backgrounds and sizes.
#[must_use]
pub fn option_button_style(selected: bool) -> impl Fn(&Theme, Status) -> button::Style {
    move |_theme, status| {
        let mut base = button::Style {
            background: Some(NEUTRAL_800.into()),
            text_color: NEUTRAL_300,
            border: Border {
                width: 1.0,
                radius: 8.0.into(),
                color: Color::from_rgba(1.0, 1.0, 1.0, 0.1),
            },
            ..button::Style::default()
        };

        if selected {
            base.background = Some(Color::WHITE.into());
            base.text_color = Color::BLACK;
            base.shadow = selected_shadow();
            return base;
        }

        match status {
            Status::Hovered | Status::Pressed => {
                base.background = Some(NEUTRAL_700.into());
                base
            }
            _ => base,
        }
    }
}

/// Translucent card holding the settings.
#[must_use]
pub fn panel_style(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(Color::WHITE),
        background: Some(Background::Color(Color::from_rgba(0.09, 0.09, 0.09, 0.8))),
        border: Border {
            width: 1.0,
            radius: 16.0.into(),
            color: Color::from_rgba(1.0, 1.0, 1.0, 0.1),
        },
        shadow: selected_shadow(),
    }
}

/// Rounded frame around the live preview, filled with `backdrop`.
#[must_use]
pub fn preview_style(backdrop: Background) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(backdrop),
        border: Border {
            width: 2.0,
            radius: 24.0.into(),
            color: Color::from_rgba(1.0, 1.0, 1.0, 0.1),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.6),
            offset: Vector::new(0.0, 12.0),
            blur_radius: 40.0,
        },
        ..container::Style::default()
    }
}

/// Full-window immersive backdrop.
#[must_use]
pub fn immersive_style(backdrop: Background) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(backdrop),
        ..container::Style::default()
    }
}
