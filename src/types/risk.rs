//! Definition for the [`RiskLevel`] type and its map colors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GeoError;

/// Marker color for high risk events.
pub const HIGH_RISK_COLOR: &str = "#DC2626";

/// Marker color for every other risk level.
pub const DEFAULT_RISK_COLOR: &str = "#F59E0B";

/// Classification of a hazard event.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskLevel {
    /// Safe for volunteers.
    Low,
    /// Dangerous, emergency crews only.
    High,
    /// Restricted to specialist technicians.
    TechnicianOnly,
}

impl RiskLevel {
    /// The string form used in event records.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::High => "high",
            RiskLevel::TechnicianOnly => "technician-only",
        }
    }

    /// See [`get_risk_color`].
    pub fn color(&self) -> &'static str {
        get_risk_color(self.as_str())
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(RiskLevel::Low),
            "high" => Ok(RiskLevel::High),
            "technician-only" => Ok(RiskLevel::TechnicianOnly),
            other => Err(GeoError::UnknownRiskLevel(other.to_string())),
        }
    }
}

/// Maps a risk level string to a hex color code.
///
/// Only `"high"` gets the red marker. Everything else, including
/// `"technician-only"`, is amber.
pub fn get_risk_color(risk_level: &str) -> &'static str {
    if risk_level == "high" {
        HIGH_RISK_COLOR
    } else {
        DEFAULT_RISK_COLOR
    }
}
