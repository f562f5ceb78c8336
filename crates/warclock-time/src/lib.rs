//! Warclock Time - Elapsed time decomposition and formatting
//!
//! This crate turns a pair of instants into the counter shown to users:
//! - TimeBreakdown: months, days, hours, minutes, seconds and total days
//! - decompose / format: stateless, pure functions of (start, now)
//! - ElapsedTimeFormatter: the same functions bound to a fixed start
//!
//! A month here is always a 30-day synthetic month.

pub mod breakdown;
pub mod formatter;

pub use breakdown::*;
pub use formatter::*;
