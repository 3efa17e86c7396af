//! Dashboard configuration
//!
//! ```toml
//! default_source = "region"
//! city_spread = 0.2
//! region_spread = 2.0
//!
//! [city_anchor]
//! latitude = 17.5
//! longitude = 78.3
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};
use crate::snapshot::Coordinates;

/// Where location queries are answered from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    #[default]
    Local,
    Google,
    Region,
    OpenWeather,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Centre for coordinates synthesized from city and region names
    pub city_anchor: Coordinates,
    /// Width in degrees of the box around `city_anchor` for city searches
    pub city_spread: f64,
    /// Width in degrees of the box around `city_anchor` for region drill-down
    pub region_spread: f64,
    pub default_source: DataSource,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            city_anchor: Coordinates::new(17.5, 78.3),
            city_spread: 0.2,
            region_spread: 2.0,
            default_source: DataSource::Local,
        }
    }
}

impl DashboardConfig {
    /// Parse a TOML document; absent fields keep their defaults
    ///
    /// # Errors
    ///
    /// * `DashboardError::ConfigParse` - Text is not valid TOML for this shape
    /// * `DashboardError::InvalidConfig` - A spread is negative or not finite
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    ///
    /// # Errors
    ///
    /// * `DashboardError::InvalidConfig` - A spread is negative or not finite
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("city_spread", self.city_spread),
            ("region_spread", self.region_spread),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(DashboardError::invalid_config(field, value));
            }
        }
        Ok(())
    }
}
