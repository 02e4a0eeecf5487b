//! Logger setup.
//!
//! Records go to stdout through `fern`. The level defaults to `Debug` in debug builds and `Info`
//! otherwise, and can be overridden with the `LEARNOPENGL_LOG` environment variable.

use log::LevelFilter;

pub const LOG_ENV_VAR: &str = "LEARNOPENGL_LOG";

/// Resolves the log level from an optional override, falling back to the build default when the
/// override is missing or not a valid level name.
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse::<LevelFilter>().ok())
        .unwrap_or_else(default_level)
}

fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Whether error records currently reach a logger. False when no logger is installed or the
/// level is `off`, in which case fatal messages have to go to stderr directly.
pub fn errors_enabled() -> bool {
    errors_pass(log::max_level())
}

fn errors_pass(max_level: LevelFilter) -> bool {
    max_level >= LevelFilter::Error
}

/// Installs the global logger.
pub fn init() -> Result<(), log::SetLoggerError> {
    let level = parse_level(std::env::var(LOG_ENV_VAR).ok().as_deref());

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
}
