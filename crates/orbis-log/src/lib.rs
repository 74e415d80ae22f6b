//! Structured logging for Orbis.
//!
//! Console output stamped with time since startup, plus a JSON log file in
//! debug builds. The level comes from `RUST_LOG` when set, otherwise from the
//! `debug.log_level` config setting.

use std::path::Path;

use orbis_config::Config;
use tracing_subscriber::fmt::format::{Format, Json, JsonFields};
use tracing_subscriber::fmt::time::Uptime;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor the config names a level.
pub const DEFAULT_FILTER: &str = "info";

/// Name of the JSON log file written in debug builds.
pub const LOG_FILE_NAME: &str = "orbis.log";

/// Install the global tracing subscriber.
///
/// * `log_dir` - directory for the JSON log file (only used when `debug_build`)
/// * `debug_build` - enables the file layer
/// * `config` - optional configuration supplying the log level
///
/// # Examples
///
/// ```no_run
/// use orbis_config::Config;
/// use orbis_log::init_logging;
///
/// let config = Config::default();
/// init_logging(Some(std::path::Path::new("./logs")), true, Some(&config));
/// ```
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(config)));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_names(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if debug_build
        && let Some(log_dir) = log_dir
        && let Some(file_layer) = json_file_layer(log_dir)
    {
        subscriber.with(file_layer).init();
        return;
    }

    subscriber.init();
}

/// Uptime-stamped JSON layer writing to a log file.
pub type JsonFileLayer<S> = fmt::Layer<S, JsonFields, Format<Json, Uptime>, std::fs::File>;

/// JSON layer writing to `log_dir/orbis.log`, creating the directory if
/// needed. `None` when the file cannot be created.
pub fn json_file_layer<S>(log_dir: &Path) -> Option<JsonFileLayer<S>> {
    std::fs::create_dir_all(log_dir).ok()?;
    let log_file = std::fs::File::create(log_dir.join(LOG_FILE_NAME)).ok()?;

    Some(
        fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json(),
    )
}

/// Filter directives taken from the config, falling back to [`DEFAULT_FILTER`].
pub fn filter_directives(config: Option<&Config>) -> String {
    config
        .map(|c| c.debug.log_level.trim())
        .filter(|level| !level.is_empty())
        .unwrap_or(DEFAULT_FILTER)
        .to_string()
}

/// `EnvFilter` built from [`DEFAULT_FILTER`].
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}
