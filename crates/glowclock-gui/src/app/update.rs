use std::sync::Arc;

use glowclock_core::{
    config::{ConfigApplied, ConfigUpdate},
    event_bus::ModuleEvent,
    fullscreen::{self, FullscreenRequest},
    modules::clock::TICK_INTERVAL,
};
use iced::{
    Subscription, Task,
    event::{self, listen_with},
    keyboard, time,
    window::{self, Mode},
};
use log::{debug, error, info};

use super::state::{App, Message};

/// Bus drains per clock tick; bounds how late a tick is shown.
const DRAINS_PER_TICK: u32 = 10;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::DrainBus => {
                match self.bus_receiver.drain() {
                    Ok(events) => events
                        .into_iter()
                        .for_each(|event| self.module_event(event)),
                    Err(err) => error!("failed to drain event bus: {err}"),
                }
                Task::none()
            }
            Message::ConfigEdited(update) => {
                self.edit_clock(update);
                Task::none()
            }
            Message::SizeSelected(size) => {
                self.edit_clock(ConfigUpdate::Size(size));

                match self.presentation.request_view(size) {
                    Some(request) => fullscreen_task(request),
                    None => Task::none(),
                }
            }
            Message::EscapePressed => match self.presentation.escape() {
                Some(request) => {
                    debug!("ESC key pressed, leaving view mode");
                    fullscreen_task(request)
                }
                None => Task::none(),
            },
            Message::WindowResized => window::get_latest().then(|id| match id {
                Some(id) => window::get_mode(id).map(Message::ModeObserved),
                None => Task::none(),
            }),
            Message::FullscreenSettled(request, reported) => {
                if let Some(is_fullscreen) = fullscreen::settle(request, reported) {
                    self.fullscreen_observed(is_fullscreen);
                }
                Task::none()
            }
            Message::ModeObserved(mode) => {
                self.fullscreen_observed(mode == Mode::Fullscreen);
                Task::none()
            }
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let timer = time::every(TICK_INTERVAL / DRAINS_PER_TICK).map(|_| Message::DrainBus);

        Subscription::batch(vec![
            timer,
            listen_with(|evt, status, _id| match evt {
                iced::Event::Keyboard(keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(keyboard::key::Named::Escape),
                    ..
                }) if status == event::Status::Ignored => Some(Message::EscapePressed),
                iced::Event::Window(window::Event::Resized(_)) => Some(Message::WindowResized),
                _ => None,
            }),
        ])
    }

    pub(super) fn register_modules(&mut self) {
        self.clock
            .register(&self.module_context, self.config.clock.gmt_offset);
    }

    fn edit_clock(&mut self, update: ConfigUpdate) {
        match self.config_manager.update_clock(update) {
            Ok(applied) => self.config_applied(applied),
            Err(err) => error!("failed to apply clock setting: {err}"),
        }
    }

    fn config_applied(&mut self, applied: ConfigApplied) {
        let ConfigApplied { config, impact } = applied;

        debug!("Config impact: {impact:?}");

        self.config = Arc::unwrap_or_clone(config);

        if impact.offset_changed {
            info!("Time zone changed to {}", self.config.clock.gmt_offset);
            self.register_modules();
        }
    }

    fn fullscreen_observed(&mut self, is_fullscreen: bool) {
        if is_fullscreen == self.presentation.is_native_fullscreen() {
            return;
        }

        self.presentation
            .fullscreen_changed(is_fullscreen, self.config.clock.size);
    }

    fn module_event(&mut self, event: ModuleEvent) {
        match event {
            ModuleEvent::Clock(message) => {
                self.clock.update(message);
            }
        }
    }
}

/// Asks the latest window to switch to the mode `request` targets, then
/// reports the mode it ended up in.
fn fullscreen_task(request: FullscreenRequest) -> Task<Message> {
    window::get_latest().then(move |id| match id {
        Some(id) => window::change_mode(id, request.target_mode())
            .chain(window::get_mode(id))
            .map(move |mode| Message::FullscreenSettled(request, Some(mode))),
        None => Task::done(Message::FullscreenSettled(request, None)),
    })
}
