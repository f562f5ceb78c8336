//! Display surfaces - where rendered counter frames are written

use std::fmt;
use std::io::Write;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;

use warclock_core::{Timestamp, WarclockError, WarclockResult};
use warclock_time::TimeBreakdown;

/// Stable identifiers of the three counter elements
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementId {
    Months,
    Days,
    Time,
}

impl ElementId {
    pub const ALL: [ElementId; 3] = [ElementId::Months, ElementId::Days, ElementId::Time];

    pub fn as_str(self) -> &'static str {
        match self {
            ElementId::Months => "months",
            ElementId::Days => "days",
            ElementId::Time => "time",
        }
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rendered tick
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub months: String,
    pub days: String,
    pub time: String,
    pub breakdown: TimeBreakdown,
    /// Instant the clock was sampled at
    pub sampled_at: Timestamp,
}

impl Frame {
    pub fn new(breakdown: TimeBreakdown, sampled_at: Timestamp) -> Self {
        Frame {
            months: breakdown.months_field(),
            days: breakdown.days_field(),
            time: breakdown.time_field(),
            breakdown,
            sampled_at,
        }
    }

    pub fn field(&self, id: ElementId) -> &str {
        match id {
            ElementId::Months => &self.months,
            ElementId::Days => &self.days,
            ElementId::Time => &self.time,
        }
    }

    /// Full counter line, e.g. `35 MONTHS / 15 DAYS / 14:30:45`
    pub fn line(&self) -> String {
        self.breakdown.to_string()
    }
}

/// A display target for counter frames
pub trait DisplaySurface {
    fn render(&mut self, frame: &Frame) -> WarclockResult<()>;
}

impl<S: DisplaySurface + ?Sized> DisplaySurface for Box<S> {
    fn render(&mut self, frame: &Frame) -> WarclockResult<()> {
        (**self).render(frame)
    }
}

fn io_error(e: std::io::Error) -> WarclockError {
    WarclockError::Surface(e.to_string())
}

/// Writes the counter line, one per frame
pub struct LineSurface<W: Write> {
    out: W,
}

impl<W: Write> LineSurface<W> {
    pub fn new(out: W) -> Self {
        LineSurface { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySurface for LineSurface<W> {
    fn render(&mut self, frame: &Frame) -> WarclockResult<()> {
        writeln!(self.out, "{}", frame.breakdown).map_err(io_error)?;
        self.out.flush().map_err(io_error)
    }
}

/// Writes each frame as a single JSON object per line
pub struct JsonSurface<W: Write> {
    out: W,
}

impl<W: Write> JsonSurface<W> {
    pub fn new(out: W) -> Self {
        JsonSurface { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySurface for JsonSurface<W> {
    fn render(&mut self, frame: &Frame) -> WarclockResult<()> {
        serde_json::to_writer(&mut self.out, frame)
            .map_err(|e| WarclockError::Surface(e.to_string()))?;
        self.out.write_all(b"\n").map_err(io_error)?;
        self.out.flush().map_err(io_error)
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    latest: Option<Frame>,
    rendered: u64,
}

/// Keeps the latest frame in memory; clones share the same state
#[derive(Clone, Debug, Default)]
pub struct MemorySurface {
    state: Arc<RwLock<MemoryState>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latest(&self) -> Option<Frame> {
        self.state.read().latest.clone()
    }

    pub fn field(&self, id: ElementId) -> Option<String> {
        self.state.read().latest.as_ref().map(|f| f.field(id).to_string())
    }

    /// Number of frames rendered so far
    pub fn rendered(&self) -> u64 {
        self.state.read().rendered
    }
}

impl DisplaySurface for MemorySurface {
    fn render(&mut self, frame: &Frame) -> WarclockResult<()> {
        let mut state = self.state.write();
        state.latest = Some(frame.clone());
        state.rendered += 1;
        Ok(())
    }
}
