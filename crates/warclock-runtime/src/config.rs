//! Runtime configuration

use std::str::FromStr;
use std::time::Duration;

use warclock_core::{Timestamp, WarclockError, WarclockResult};

use crate::LogFormat;

/// 2022-02-24T00:00:00Z
pub const DEFAULT_START: Timestamp = Timestamp(1_645_660_800_000);

pub const ENV_START: &str = "WARCLOCK_START";
pub const ENV_TICK: &str = "WARCLOCK_TICK";
pub const ENV_TICKS: &str = "WARCLOCK_TICKS";
pub const ENV_OUTPUT: &str = "WARCLOCK_OUTPUT";
pub const ENV_LOG_FORMAT: &str = "WARCLOCK_LOG_FORMAT";

/// Which display surface the binary renders to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// One counter line per tick
    #[default]
    Line,
    /// One JSON object per tick, keyed by element id
    Json,
}

impl FromStr for OutputMode {
    type Err = WarclockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "line" | "text" => Ok(OutputMode::Line),
            "json" => Ok(OutputMode::Json),
            other => Err(WarclockError::InvalidConfig(format!(
                "{ENV_OUTPUT}: unknown output mode {other:?}"
            ))),
        }
    }
}

/// Counter configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterConfig {
    /// Fixed start instant the counter measures from
    pub start: Timestamp,
    /// Interval between renders
    pub tick_interval: Duration,
    /// Stop after this many renders; `None` runs until shutdown
    pub max_ticks: Option<u64>,
    pub output: OutputMode,
    pub log_format: LogFormat,
}

impl Default for CounterConfig {
    fn default() -> Self {
        CounterConfig {
            start: DEFAULT_START,
            tick_interval: Duration::from_secs(1),
            max_ticks: None,
            output: OutputMode::Line,
            log_format: LogFormat::Text,
        }
    }
}

impl CounterConfig {
    /// Single render, for one-shot invocations
    pub fn once(start: Timestamp) -> Self {
        CounterConfig {
            start,
            max_ticks: Some(1),
            ..Default::default()
        }
    }

    /// Defaults overridden by `WARCLOCK_*` environment variables
    pub fn from_env() -> WarclockResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> WarclockResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = CounterConfig::default();

        if let Some(start) = get(ENV_START) {
            config.start = Timestamp::parse(&start)?;
        }

        if let Some(tick) = get(ENV_TICK) {
            config.tick_interval = humantime::parse_duration(tick.trim())
                .map_err(|e| WarclockError::InvalidConfig(format!("{ENV_TICK}: {e}")))?;
        }

        if let Some(ticks) = get(ENV_TICKS) {
            let ticks = ticks
                .trim()
                .parse::<u64>()
                .map_err(|e| WarclockError::InvalidConfig(format!("{ENV_TICKS}: {e}")))?;
            config.max_ticks = Some(ticks);
        }

        if let Some(output) = get(ENV_OUTPUT) {
            config.output = output.parse()?;
        }

        if let Some(format) = get(ENV_LOG_FORMAT) {
            config.log_format = format.parse()?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject settings the ticker cannot run with
    pub fn validate(&self) -> WarclockResult<()> {
        if self.tick_interval.is_zero() {
            return Err(WarclockError::InvalidConfig(format!(
                "{ENV_TICK}: tick interval must be non-zero"
            )));
        }
        if self.max_ticks == Some(0) {
            return Err(WarclockError::InvalidConfig(format!(
                "{ENV_TICKS}: tick limit must be at least 1"
            )));
        }
        Ok(())
    }

    /// Fail when the start instant is later than `now`
    pub fn check_start(&self, now: Timestamp) -> WarclockResult<()> {
        if self.start > now {
            return Err(WarclockError::StartInFuture {
                start: self.start,
                now,
            });
        }
        Ok(())
    }
}
