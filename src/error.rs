//! Error types for the air-quality core

use thiserror::Error;

/// Result type alias for fallible dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Errors raised while parsing provider payloads, metric maps or configuration
///
/// Scoring and synthesis never fail; out-of-range inputs are clamped instead.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Provider payload parsed but carries nothing usable
    #[error("Invalid provider payload: {0}")]
    InvalidPayload(String),

    /// Provider payload is not valid JSON for the expected shape
    #[error("Malformed provider JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A metrics map is missing one of the sixteen required keys
    #[error("Missing metric: {0}")]
    MissingMetric(String),

    /// A metrics map carries a key outside the known sixteen
    #[error("Unknown metric: {0}")]
    UnknownMetric(String),

    /// Configuration values are out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration text is not valid TOML
    #[error("Configuration parse failed: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl DashboardError {
    /// Create a new `MissingMetric` error
    #[must_use]
    pub fn missing_metric(key: &str) -> Self {
        Self::MissingMetric(key.to_string())
    }

    /// Create a new `InvalidConfig` error for a specific field
    #[must_use]
    pub fn invalid_config(field: &str, value: impl std::fmt::Display) -> Self {
        Self::InvalidConfig(format!("{field} must be a non-negative number, got {value}"))
    }
}

/// Failure classes reported by the geolocation collaborator
///
/// Position lookups report these as numeric codes 1 to 3; anything else is `Unknown`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationError {
    #[error("Location permission denied. Please enable location access.")]
    PermissionDenied,

    #[error("Location information is unavailable.")]
    PositionUnavailable,

    #[error("Location request timed out.")]
    Timeout,

    #[error("An unknown error occurred while getting your location.")]
    Unknown,
}

impl LocationError {
    /// Classify a geolocation error code
    #[must_use]
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => Self::PermissionDenied,
            2 => Self::PositionUnavailable,
            3 => Self::Timeout,
            _ => Self::Unknown,
        }
    }
}
