#![allow(mixed_script_confusables)]

#[cfg_attr(not(test), allow(unused_imports))]
#[macro_use]
extern crate approx;

pub mod error;
pub mod math;

pub use math::complex;
pub use math::linear;
pub use math::quadratic;

// Re-export key types for external use
pub use complex::{Complex, ComplexPair};
pub use error::{Degree, LogLevelError, RootsError};
pub use linear::{linear_roots, Linear};
pub use quadratic::{quad_roots, Quadratic};

/// Parse a log level string into LevelFilter.
pub fn parse_log_level(level: Option<&str>) -> Result<log::LevelFilter, LogLevelError> {
    match level {
        Some("error") => Ok(log::LevelFilter::Error),
        Some("warn") => Ok(log::LevelFilter::Warn),
        Some("info") | Some("") | None => Ok(log::LevelFilter::Info),
        Some("debug") => Ok(log::LevelFilter::Debug),
        Some("trace") => Ok(log::LevelFilter::Trace),
        Some(level) => Err(LogLevelError::Unrecognized(level.to_string())),
    }
}
