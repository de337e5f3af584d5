use std::{path::PathBuf, sync::Arc};

use glowclock_core::{
    ModuleContext,
    config::{ConfigManager, ConfigUpdate},
    event_bus::{EventReceiver, EventSender},
    fullscreen::FullscreenRequest,
    modules::{clock::Clock, presentation::Presentation},
};
use glowclock_proto::{
    config::{ClockSize, Config},
    ports::time::TimeSource,
};
use iced::{Task, window::Mode};
use log::info;
use tokio::runtime::Handle;

pub struct App {
    pub(super) config_path:    PathBuf,
    pub(super) config_manager: Arc<ConfigManager>,
    pub(super) bus_receiver:   EventReceiver,
    pub(super) module_context: ModuleContext,
    pub config:                Config,
    pub clock:                 Clock,
    pub presentation:          Presentation,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Take the ticks the clock timer queued since the last drain.
    DrainBus,
    /// A setting was changed in the settings panel.
    ConfigEdited(ConfigUpdate),
    /// A size button was pressed: store the size and show the clock.
    SizeSelected(ClockSize),
    EscapePressed,
    /// The window was resized, its mode may have changed behind our back.
    WindowResized,
    /// Mode reported after a fullscreen request; `None` when no window
    /// could be found.
    FullscreenSettled(FullscreenRequest, Option<Mode>),
    /// Mode reported after a resize.
    ModeObserved(Mode),
}

impl App {
    pub fn new(
        (
            config,
            config_manager,
            config_path,
            time_source,
            event_sender,
            runtime_handle,
            bus_receiver,
        ): (
            Config,
            Arc<ConfigManager>,
            PathBuf,
            Arc<dyn TimeSource>,
            EventSender,
            Handle,
            EventReceiver,
        ),
    ) -> impl FnOnce() -> (Self, Task<Message>) {
        move || {
            let module_context = ModuleContext::new(event_sender, runtime_handle);
            let mut app = App {
                config_path,
                config_manager,
                bus_receiver,
                module_context,
                clock: Clock::new(time_source),
                presentation: Presentation::default(),
                config,
            };

            info!("Starting with config from {:?}", app.config_path);
            app.register_modules();

            (app, Task::none())
        }
    }
}
