//! Error type for the validating constructors and parsers.
//!
//! The routing and distance operations themselves are total and never
//! return a [`GeoError`].

use thiserror::Error;

/// Errors raised when input fails validation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeoError {
    /// Latitude outside of [-90, 90] or not a finite number.
    #[error("invalid latitude: {0}")]
    InvalidLatitude(f64),

    /// Longitude outside of [-180, 180] or not a finite number.
    #[error("invalid longitude: {0}")]
    InvalidLongitude(f64),

    /// A risk level string that is not one of the known classifications.
    #[error("unknown risk level: {0}")]
    UnknownRiskLevel(String),

    /// A [`DetourConfig`](crate::config::DetourConfig) value that the
    /// detour heuristic cannot work with.
    #[error("invalid detour config: {0}")]
    InvalidConfig(String),
}
