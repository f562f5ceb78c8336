//! Ticker - periodic sampling and rendering loop

use std::time::{Duration, Instant};

use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, trace};

use warclock_core::{Timestamp, WarclockResult};
use warclock_time::ElapsedTimeFormatter;

use crate::{CounterConfig, DisplaySurface, Frame};

/// Source of "now" for each tick
pub type Clock = fn() -> Timestamp;

#[derive(Clone, Debug, Default)]
pub struct TickerStats {
    pub ticks: u64,
    pub last_sampled_at: Option<Timestamp>,
    pub last_tick_duration: Duration,
}

/// Why a run ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    TickLimit,
    Shutdown,
}

/// Sender half used to cancel a running ticker
pub struct ShutdownHandle {
    tx: watch::Sender<bool>,
}

impl ShutdownHandle {
    /// Create a handle and the receiver to pass to [`Ticker::run`]
    pub fn channel() -> (Self, watch::Receiver<bool>) {
        let (tx, rx) = watch::channel(false);
        (ShutdownHandle { tx }, rx)
    }

    pub fn shutdown(&self) {
        // No receivers left means the ticker is already gone
        let _ = self.tx.send(true);
    }
}

/// Drives the formatter at a fixed interval
pub struct Ticker {
    formatter: ElapsedTimeFormatter,
    tick_interval: Duration,
    max_ticks: Option<u64>,
    clock: Clock,
    stats: TickerStats,
}

impl Ticker {
    pub fn new(config: &CounterConfig) -> Self {
        Ticker {
            formatter: ElapsedTimeFormatter::new(config.start),
            tick_interval: config.tick_interval,
            max_ticks: config.max_ticks,
            clock: Timestamp::now,
            stats: TickerStats::default(),
        }
    }

    /// Replace the wall clock, e.g. with a fixed instant
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn stats(&self) -> &TickerStats {
        &self.stats
    }

    /// Sample the clock once and render a frame to `surface`
    pub fn tick<S>(&mut self, surface: &mut S) -> WarclockResult<Frame>
    where
        S: DisplaySurface + ?Sized,
    {
        let started = Instant::now();
        let now = (self.clock)();

        let breakdown = self.formatter.try_decompose_at(now)?;
        let frame = Frame::new(breakdown, now);
        surface.render(&frame)?;

        self.stats.ticks += 1;
        self.stats.last_sampled_at = Some(now);
        self.stats.last_tick_duration = started.elapsed();
        trace!(tick = self.stats.ticks, counter = %breakdown, "rendered");

        Ok(frame)
    }

    fn limit_reached(&self) -> bool {
        self.max_ticks.is_some_and(|max| self.stats.ticks >= max)
    }

    /// Render every tick interval until the tick limit is reached or
    /// `shutdown` flips to true (or its sender is dropped).
    ///
    /// The first frame is rendered immediately. Missed ticks are skipped
    /// rather than replayed.
    pub async fn run<S>(
        &mut self,
        surface: &mut S,
        mut shutdown: watch::Receiver<bool>,
    ) -> WarclockResult<StopReason>
    where
        S: DisplaySurface + ?Sized,
    {
        info!(
            start = %self.formatter.start(),
            interval = %humantime::format_duration(self.tick_interval),
            max_ticks = ?self.max_ticks,
            "counter started"
        );

        let mut interval = tokio::time::interval(self.tick_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let reason = 'ticks: loop {
            if *shutdown.borrow() {
                break 'ticks StopReason::Shutdown;
            }

            tokio::select! {
                _ = interval.tick() => {
                    self.tick(surface)?;
                    if self.limit_reached() {
                        break 'ticks StopReason::TickLimit;
                    }
                }
                changed = shutdown.changed() => {
                    if changed.is_err() {
                        debug!("shutdown sender dropped");
                        break 'ticks StopReason::Shutdown;
                    }
                }
            }
        };

        info!(ticks = self.stats.ticks, reason = ?reason, "counter stopped");
        Ok(reason)
    }
}
