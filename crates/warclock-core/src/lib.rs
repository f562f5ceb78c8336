//! Warclock Core - Fundamental types and primitives
//!
//! This crate defines the core types shared by the warclock crates:
//! - Instants (Timestamp) at millisecond resolution
//! - Unit constants, including the fixed 30-day synthetic month
//! - Error types

pub mod units;
pub mod time;
pub mod error;

pub use units::*;
pub use time::*;
pub use error::*;
