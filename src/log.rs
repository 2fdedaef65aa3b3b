//! The `log` module defines an interface to epigrid's internal logging
//! facilities. This is not to be confused with _reporting_, which records
//! per-day simulation data.
//!
//! This module (re)exports the five logging macros: `error!`, `warn!`,
//! `info!`, `debug!` and `trace!` where `error!` represents the
//! highest-priority log messages and `trace!` the lowest. To emit a log
//! message, simply use one of these macros in your code:
//!
//! ```rust
//! use epigrid::info;
//!
//! pub fn do_a_thing() {
//!     info!("A thing is being done.");
//! }
//! ```
//!
//! Logging is _disabled_ by default. Logging messages can be enabled by
//! passing the command line option `--log-level <level>`. Logging can also
//! be controlled programmatically using the functions:
//!
//!  - `enable_logging()`: turns on all log messages
//!  - `disable_logging()`: turns off all log messages
//!  - `set_log_level(level: LevelFilter)`: enables only log messages with
//!    priority at least `level`
//!
//! In addition, per-module filtering of messages can be configured using
//! `set_module_filter()` / `remove_module_filter()`.

pub use log::{debug, error, info, trace, warn, LevelFilter};

use std::collections::HashMap;
use std::sync::{LazyLock, Mutex, MutexGuard};

use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Logger, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::{Config, Handle};

// Logging disabled
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Off;
// Use an ISO 8601 timestamp format and color coded level tag
const DEFAULT_LOG_PATTERN: &str = "{d(%Y-%m-%dT%H:%M:%SZ)} {h({l})} {t} - {m}{n}";

/// A global instance of the logging configuration.
static LOG_CONFIGURATION: LazyLock<Mutex<LogConfiguration>> = LazyLock::new(Mutex::default);

/// Holds logging configuration so the configuration can persist across
/// reinitialization of the global logger. The global logger can only be
/// installed once, so subsequent changes go through the `log4rs::Handle`.
struct LogConfiguration {
    /// The "default" level filter for modules without an explicitly set
    /// filter. A global filter level of `LevelFilter::Off` disables logging.
    global_log_level: LevelFilter,
    /// Module ("target") specific level filters
    module_level: HashMap<String, LevelFilter>,
    /// A handle to the installed logger, used to swap its configuration.
    root_handle: Option<Handle>,
}

impl Default for LogConfiguration {
    fn default() -> Self {
        LogConfiguration {
            global_log_level: DEFAULT_LOG_LEVEL,
            module_level: HashMap::new(),
            root_handle: None,
        }
    }
}

impl LogConfiguration {
    fn build(&self) -> Config {
        let encoder = Box::new(PatternEncoder::new(DEFAULT_LOG_PATTERN));
        let stdout = ConsoleAppender::builder().encoder(encoder).build();
        let mut config =
            Config::builder().appender(Appender::builder().build("stdout", Box::new(stdout)));

        // Add module specific configuration
        for (module, level) in &self.module_level {
            config = config.logger(Logger::builder().build(module.clone(), *level));
        }

        // The `Root` determines the global log level
        let root = Root::builder()
            .appender("stdout")
            .build(self.global_log_level);
        match config.build(root) {
            Err(e) => {
                panic!("failed to build log config: {e}");
            }
            Ok(config) => config,
        }
    }

    fn set_config(&mut self) {
        let new_config = self.build();
        match self.root_handle {
            Some(ref mut handle) => {
                // The global logger has already been initialized
                handle.set_config(new_config);
            }
            None => {
                // The global logger has not yet been initialized
                self.root_handle = Some(log4rs::init_config(new_config).unwrap());
            }
        }
    }
}

/// Enables the logger with no global level filter / full logging. Equivalent
/// to `set_log_level(LevelFilter::Trace)`.
pub fn enable_logging() {
    set_log_level(LevelFilter::Trace);
}

/// Disables logging completely. Equivalent to
/// `set_log_level(LevelFilter::Off)`.
pub fn disable_logging() {
    set_log_level(LevelFilter::Off);
}

/// Sets the global log level. A global filter level of `LevelFilter::Off`
/// disables logging.
pub fn set_log_level(level: LevelFilter) {
    let mut log_configuration = get_log_configuration();
    log_configuration.global_log_level = level;
    log_configuration.set_config();
}

/// Sets a level filter for the given module path.
pub fn set_module_filter(module_path: &str, level_filter: LevelFilter) {
    let mut log_configuration = get_log_configuration();
    log_configuration
        .module_level
        .insert(module_path.to_string(), level_filter);
    log_configuration.set_config();
}

/// Removes a module-specific level filter for the given module path. The
/// global level filter will apply to the module.
pub fn remove_module_filter(module_path: &str) {
    let mut log_configuration = get_log_configuration();
    log_configuration.module_level.remove(module_path);
    log_configuration.set_config();
}

/// Fetches a locked guard for the global `LogConfiguration`.
fn get_log_configuration() -> MutexGuard<'static, LogConfiguration> {
    LOG_CONFIGURATION.lock().unwrap()
}

#[cfg(test)]
mod test {
    use super::*;

    // Tests share the one global logger, so they run in a single test to
    // avoid ordering dependence between `cargo test` threads.
    #[test]
    fn log_configuration_round_trip() {
        set_log_level(LevelFilter::Info);
        {
            let config = get_log_configuration();
            assert_eq!(config.global_log_level, LevelFilter::Info);
            assert!(config.root_handle.is_some());
        }

        set_module_filter("epigrid::sim", LevelFilter::Trace);
        {
            let config = get_log_configuration();
            assert_eq!(
                config.module_level.get("epigrid::sim"),
                Some(&LevelFilter::Trace)
            );
        }

        remove_module_filter("epigrid::sim");
        {
            let config = get_log_configuration();
            assert!(config.module_level.get("epigrid::sim").is_none());
        }

        disable_logging();
        let config = get_log_configuration();
        assert_eq!(config.global_log_level, LevelFilter::Off);
    }
}
