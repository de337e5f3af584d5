use clap::Parser;
use flexi_logger::{Age, Cleanup, Criterion, FileSpec, LogSpecBuilder, Logger, Naming};
use glowclock_core::{
    adapters::SystemTimeSource,
    config::{ConfigManager, get_config},
    event_bus::EventBus,
};
use glowclock_gui::{App, get_log_spec};
use glowclock_proto::ports::time::TimeSource;
use iced::Size;
use log::{debug, error, info};
use masterror::{AppError, AppResult};
use std::backtrace::Backtrace;
use std::num::NonZeroUsize;
use std::panic;
use std::path::PathBuf;
use std::sync::Arc;

const EVENT_BUS_CAPACITY: usize = 64;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(short, long, value_parser = clap::value_parser!(PathBuf))]
    config_path: Option<PathBuf>,
}

fn main() -> AppResult<()> {
    let args = Args::parse();

    let logger = Logger::with(
        LogSpecBuilder::new()
            .default(log::LevelFilter::Info)
            .build(),
    )
    .log_to_file(FileSpec::default().directory("/tmp/glowclock"))
    .rotate(
        Criterion::Age(Age::Day),
        Naming::Timestamps,
        Cleanup::KeepLogFiles(7),
    );
    let logger = if cfg!(debug_assertions) {
        logger.duplicate_to_stdout(flexi_logger::Duplicate::All)
    } else {
        logger
    };
    let logger = logger
        .start()
        .map_err(|err| AppError::internal(format!("Failed to start logger: {err}")))?;
    panic::set_hook(Box::new(|info| {
        let b = Backtrace::capture();
        error!("Panic: {info} \n {b}");
    }));

    debug!("args: {args:?}");

    let (config, config_path) = get_config(args.config_path).map_err(|err| {
        error!("Failed to read config: {err}");
        AppError::internal(format!("Failed to read config: {err}"))
    })?;

    logger.set_new_spec(get_log_spec(&config.log_level));
    info!("Using config {config_path:?}");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("glowclock-worker")
        .build()
        .map_err(|err| AppError::internal(format!("Failed to start async runtime: {err}")))?;

    let capacity = NonZeroUsize::new(EVENT_BUS_CAPACITY)
        .ok_or_else(|| AppError::internal("Event bus capacity must be non-zero"))?;
    let bus = EventBus::new(capacity);
    let config_manager = Arc::new(ConfigManager::new(config.clone()));
    let time_source: Arc<dyn TimeSource> = Arc::new(SystemTimeSource);
    let window_size = Size::new(config.window.width, config.window.height);

    iced::application(App::title, App::update, App::view)
        .subscription(App::subscription)
        .theme(App::theme)
        .scale_factor(App::scale_factor)
        .window_size(window_size)
        .antialiasing(true)
        .run_with(App::new((
            config,
            config_manager,
            config_path,
            time_source,
            bus.sender(),
            runtime.handle().clone(),
            bus.receiver(),
        )))
        .map_err(|err| AppError::internal(format!("Window terminated with an error: {err}")))
}
