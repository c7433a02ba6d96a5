//=========================================================================
// Logging
//=========================================================================
//
// Process-wide logger setup and global level control.
//
// Engine code logs through the `log` facade with a `target:` per
// subsystem ("engine", "platform", "graphics", "signal"). This module
// installs `env_logger` as the backend and exposes the global level as
// an engine-level setting.
//
//=========================================================================

//=== External Crates =====================================================

use env_logger::{Builder, Env};
use log::{debug, LevelFilter};

//=== LogLevel ============================================================

/// Global verbosity of the engine logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    /// Disables all logging.
    Off,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Off => LevelFilter::Off,
        }
    }
}

impl From<LevelFilter> for LogLevel {
    fn from(filter: LevelFilter) -> Self {
        match filter {
            LevelFilter::Trace => LogLevel::Trace,
            LevelFilter::Debug => LogLevel::Debug,
            LevelFilter::Info => LogLevel::Info,
            LevelFilter::Warn => LogLevel::Warn,
            LevelFilter::Error => LogLevel::Error,
            LevelFilter::Off => LogLevel::Off,
        }
    }
}

//=== Public API ==========================================================

/// Installs the engine logger and sets the global level to `level`.
///
/// The backend filter itself lets every record through (apart from
/// `winit` chatter) and `RUST_LOG` directives narrow it per module, so
/// verbosity is gated by the global level alone and [`set_level`] can
/// raise it as well as lower it. Calling this again after a logger is
/// installed only changes the global level.
pub fn init(level: LogLevel) {
    let installed = Builder::new()
        .filter_level(LevelFilter::Trace)
        .filter_module("winit", LevelFilter::Warn)
        .parse_env(Env::default())
        .format_timestamp_millis()
        .try_init();

    // `try_init` sets the global level from the backend filter.
    set_level(level);

    if installed.is_ok() {
        debug!(target: "engine", "Logger initialized (level: {})", LevelFilter::from(level));
    }
}

/// Sets the global maximum log level.
pub fn set_level(level: LogLevel) {
    log::set_max_level(level.into());
}

/// Returns the current global maximum log level.
pub fn level() -> LogLevel {
    log::max_level().into()
}

//=========================================================================
// Unit Tests
//=========================================================================
