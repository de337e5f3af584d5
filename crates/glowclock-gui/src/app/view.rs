use glowclock_core::{
    layout::width_behavior,
    style::{backdrop, glowclock_theme, immersive_style, nebula_phase, preview_style},
};
use iced::{
    Alignment, Element, Length, Theme,
    widget::{container, responsive, row},
};

use super::state::{App, Message};
use crate::views::{
    clock::{FaceStyle, render_clock_face},
    settings::render_settings_panel,
};

/// Width over height of the preview frame.
const PREVIEW_ASPECT: f32 = 16.0 / 9.0;

impl App {
    pub fn title(&self) -> String {
        format!("glowclock {}", self.clock.data().displayed.label())
    }

    pub fn theme(&self) -> Theme {
        glowclock_theme()
    }

    pub fn scale_factor(&self) -> f64 {
        self.config.window.scale_factor
    }

    pub fn view(&self) -> Element<'_, Message> {
        let clock = &self.config.clock;
        let data = self.clock.data();
        let style = FaceStyle::new(clock);
        let fill = backdrop(clock.background, nebula_phase(data.last_tick));

        if self.presentation.is_view_mode() {
            let face = render_clock_face(&data.displayed, style, width_behavior(clock.size, false));

            return container(face)
                .width(Length::Fill)
                .height(Length::Fill)
                .style(immersive_style(fill))
                .into();
        }

        let displayed = data.displayed.clone();
        let preview = responsive(move |available| {
            let width = available.width.min(available.height * PREVIEW_ASPECT);
            let face = render_clock_face(&displayed, style, width_behavior(clock.size, true));

            container(
                container(face)
                    .width(Length::Fixed(width))
                    .height(Length::Fixed(width / PREVIEW_ASPECT))
                    .padding(32)
                    .style(preview_style(fill)),
            )
            .center(Length::Fill)
            .into()
        });

        row![render_settings_panel(clock), preview]
            .spacing(32)
            .padding(32)
            .align_y(Alignment::Center)
            .height(Length::Fill)
            .into()
    }
}
