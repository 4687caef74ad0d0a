//! Global subscriber setup for processes hosting the engine.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Output format for host processes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
}

impl LogFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            LogFormat::Json
        } else {
            LogFormat::Plain
        }
    }
}

/// Install a global subscriber writing to stderr. `RUST_LOG` wins over
/// `default_filter`.
///
/// Safe to call more than once; returns `false` when a subscriber was
/// already installed and this call changed nothing.
pub fn init_tracing(format: LogFormat, default_filter: &str) -> bool {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let base = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = match format {
        LogFormat::Json => registry.with(base.with_ansi(false).json()).try_init(),
        LogFormat::Plain => registry.with(base).try_init(),
    };
    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
    result.is_ok()
}
