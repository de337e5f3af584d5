use flexi_logger::LogSpecification;
use log::warn;

mod views;

pub mod app;

pub use app::{App, Message};

/// Parses a log level such as `"debug"` or `"glowclock=trace,warn"`.
///
/// `RUST_LOG` takes precedence when set. An unparsable level falls back to
/// `warn`.
pub fn get_log_spec(log_level: &str) -> LogSpecification {
    LogSpecification::env_or_parse(log_level).unwrap_or_else(|err| {
        warn!("Failed to parse log level {log_level:?}: {err}");
        LogSpecification::warn()
    })
}
