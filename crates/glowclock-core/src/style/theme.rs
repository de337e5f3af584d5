use std::f32::consts::TAU;

use chrono::{DateTime, Utc};
use iced::{
    Background, Color, Gradient, Radians, Shadow, Theme, Vector, gradient::Linear,
    theme::Palette,
};

use crate::config::BackgroundTheme;

/// Seconds the nebula gradient takes for a full turn.
pub const NEBULA_CYCLE_SECS: i64 = 15;

const WHITE_BACKDROP: Color = Color {
    r: 0.953,
    g: 0.957,
    b: 0.965,
    a: 1.0,
};
const NEBULA_INDIGO: Color = Color {
    r: 0.192,
    g: 0.180,
    b: 0.506,
    a: 1.0,
};
const NEBULA_PURPLE: Color = Color {
    r: 0.345,
    g: 0.110,
    b: 0.529,
    a: 1.0,
};
/// Alpha of the glow drawn around the digits (0x60).
const GLOW_ALPHA: f32 = 96.0 / 255.0;
const GLOW_RADIUS: f32 = 30.0;

/// Builds the dark [`Theme`] used by the settings screen.
#[must_use]
pub fn glowclock_theme() -> Theme {
    Theme::custom(
        "glowclock".to_string(),
        Palette {
            background: Color::from_rgb8(0, 0, 0),
            text: Color::from_rgb8(255, 255, 255),
            primary: Color::from_rgb8(245, 245, 245),
            success: Color::from_rgb8(34, 197, 94),
            danger: Color::from_rgb8(239, 68, 68),
        },
    )
}

/// Position of the nebula gradient in its cycle, in `[0, 1)`.
#[must_use]
pub fn nebula_phase(instant: Option<DateTime<Utc>>) -> f32 {
    let Some(instant) = instant else {
        return 0.0;
    };

    let cycle_ms = NEBULA_CYCLE_SECS * 1_000;
    instant.timestamp_millis().rem_euclid(cycle_ms) as f32 / cycle_ms as f32
}

/// Fill for the clock backdrop.
#[must_use]
pub fn backdrop(theme: BackgroundTheme, phase: f32) -> Background {
    match theme {
        BackgroundTheme::Black => Background::Color(Color::BLACK),
        BackgroundTheme::White => Background::Color(WHITE_BACKDROP),
        BackgroundTheme::Nebula => Gradient::Linear(
            Linear::new(Radians(phase.rem_euclid(1.0) * TAU))
                .add_stop(0.0, NEBULA_INDIGO)
                .add_stop(0.5, NEBULA_PURPLE)
                .add_stop(1.0, Color::BLACK),
        )
        .into(),
    }
}

/// Glow around the digits; none on the white backdrop.
#[must_use]
pub fn glow(color: Color, theme: BackgroundTheme) -> Option<Shadow> {
    match theme {
        BackgroundTheme::White => None,
        BackgroundTheme::Black | BackgroundTheme::Nebula => Some(Shadow {
            color: Color {
                a: GLOW_ALPHA,
                ..color
            },
            offset: Vector::ZERO,
            blur_radius: GLOW_RADIUS,
        }),
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn white_backdrop_has_no_glow()
    {
        assert!(glow(Color::WHITE, BackgroundTheme::White).is_none());
    }

    #[test]
    fn dark_backdrops_glow_in_character_color()
    {
        for theme in [BackgroundTheme::Black, BackgroundTheme::Nebula] {
            let shadow = glow(Color::from_rgb8(34, 197, 94), theme).expect("glow");

            assert_eq!(shadow.color.r, Color::from_rgb8(34, 197, 94).r);
            assert!((shadow.color.a - 0.376).abs() < 0.01);
        }
    }

    #[test]
    fn solid_backdrops()
    {
        assert_eq!(backdrop(BackgroundTheme::Black, 0.0), Background::Color(Color::BLACK));
        assert!(matches!(backdrop(BackgroundTheme::White, 0.0), Background::Color(_)));
    }

    #[test]
    fn nebula_backdrop_is_a_gradient()
    {
        assert!(matches!(backdrop(BackgroundTheme::Nebula, 0.25), Background::Gradient(_)));
    }

    #[test]
    fn nebula_phase_cycles()
    {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().expect("instant");

        assert_eq!(nebula_phase(None), 0.0);
        assert_eq!(nebula_phase(Some(start)), 0.0);

        let later = start + chrono::Duration::milliseconds(7_500);
        assert!((nebula_phase(Some(later)) - 0.5).abs() < f32::EPSILON);

        let wrapped = start + chrono::Duration::seconds(NEBULA_CYCLE_SECS);
        assert_eq!(nebula_phase(Some(wrapped)), 0.0);
    }

    #[test]
    fn theme_is_dark()
    {
        let theme = glowclock_theme();
        assert!(theme.extended_palette().is_dark);
    }
}
