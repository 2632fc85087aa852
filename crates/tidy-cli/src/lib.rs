//! CLI library components for datatidy.

pub mod logging;
pub mod resolve;
pub mod workspace;
