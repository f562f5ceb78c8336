//! Warclock Runtime - Tick driver for the elapsed-time counter
//!
//! Each tick the runtime:
//! 1. Samples the wall clock
//! 2. Decomposes the time elapsed since the configured start
//! 3. Writes the months, days and time fields to a display surface
//!
//! The formatter itself stays a pure function; scheduling, cancellation,
//! configuration and logging all live here.

pub mod config;
pub mod logging;
pub mod surface;
pub mod ticker;

pub use config::*;
pub use logging::*;
pub use surface::*;
pub use ticker::*;
