//! Tracing subscriber setup

use std::str::FromStr;

use tracing_subscriber::{EnvFilter, FmtSubscriber};

use warclock_core::{WarclockError, WarclockResult};

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "warclock=info,warclock_runtime=info";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = WarclockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(WarclockError::InvalidConfig(format!(
                "unknown log format {other:?}"
            ))),
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global tracing subscriber.
///
/// Logs go to stderr so they never interleave with the counter on stdout.
pub fn init_logging(format: LogFormat) -> WarclockResult<()> {
    let result = match format {
        LogFormat::Text => {
            let subscriber = FmtSubscriber::builder()
                .with_env_filter(env_filter())
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)
        }
        LogFormat::Json => {
            let subscriber = FmtSubscriber::builder()
                .json()
                .with_env_filter(env_filter())
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)
        }
    };

    result.map_err(|e| WarclockError::Logging(e.to_string()))
}
