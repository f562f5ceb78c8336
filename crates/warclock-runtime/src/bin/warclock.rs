//! warclock - prints the elapsed-time counter once per tick
//!
//! Configured through `WARCLOCK_*` environment variables; see
//! `CounterConfig::from_env`.

use std::io;
use std::process::ExitCode;

use tracing::{error, info, warn};

use warclock_core::{Timestamp, WarclockResult};
use warclock_runtime::{
    init_logging, CounterConfig, DisplaySurface, JsonSurface, LineSurface, OutputMode,
    ShutdownHandle, Ticker,
};

#[tokio::main]
async fn main() -> ExitCode {
    let config = match CounterConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("warclock: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(config.log_format) {
        eprintln!("warclock: {e}");
        return ExitCode::FAILURE;
    }

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "counter failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: CounterConfig) -> WarclockResult<()> {
    config.check_start(Timestamp::now())?;

    let mut surface: Box<dyn DisplaySurface + Send> = match config.output {
        OutputMode::Line => Box::new(LineSurface::new(io::stdout())),
        OutputMode::Json => Box::new(JsonSurface::new(io::stdout())),
    };

    let (handle, shutdown) = ShutdownHandle::channel();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("interrupt received, stopping"),
            Err(e) => warn!(error = %e, "cannot listen for interrupt, stopping"),
        }
        handle.shutdown();
    });

    let mut ticker = Ticker::new(&config);
    ticker.run(surface.as_mut(), shutdown).await?;
    Ok(())
}
