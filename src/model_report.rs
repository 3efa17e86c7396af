//! Model comparison reports for the admin analysis view
//!
//! An analysis service answers with each model's predicted efficiency
//! category, per-model classification scores and a closing recommendation.
//! The wire keys are the service's own column headings (`Model`,
//! `Predicted Efficiency Category`, `F1-Score`, ...) and are kept verbatim.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// Shown in place of the prediction table when a report carries no rows
pub const NO_PREDICTIONS: &str = "No predictions available";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelPrediction {
    #[serde(rename = "Model")]
    pub model: String,
    #[serde(rename = "Predicted Efficiency Category")]
    pub category: String,
}

/// Coarse reading of a free-text efficiency category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EfficiencyLevel {
    High,
    Medium,
    Low,
    /// Category text names none of the three levels
    Unrated,
}

impl ModelPrediction {
    /// Level named in the category text, checked as high, medium, then low
    #[must_use]
    pub fn efficiency_level(&self) -> EfficiencyLevel {
        let category = self.category.to_lowercase();
        if category.contains("high") {
            EfficiencyLevel::High
        } else if category.contains("medium") {
            EfficiencyLevel::Medium
        } else if category.contains("low") {
            EfficiencyLevel::Low
        } else {
            EfficiencyLevel::Unrated
        }
    }
}

/// Classification scores for one model, each in `0..=1`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelScores {
    #[serde(rename = "Accuracy")]
    pub accuracy: f64,
    #[serde(rename = "Precision")]
    pub precision: f64,
    #[serde(rename = "Recall")]
    pub recall: f64,
    #[serde(rename = "F1-Score")]
    pub f1_score: f64,
}

impl ModelScores {
    /// Table cells: accuracy as a percentage, the rest to three decimals
    #[must_use]
    pub fn display_row(&self) -> [String; 4] {
        [
            format!("{:.2}%", self.accuracy * 100.0),
            format!("{:.3}", self.precision),
            format!("{:.3}", self.recall),
            format!("{:.3}", self.f1_score),
        ]
    }
}

/// Full comparison report
///
/// `metrics` is keyed by model name and iterates in name order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelComparison {
    #[serde(default)]
    pub predictions: Vec<ModelPrediction>,
    #[serde(default)]
    pub metrics: BTreeMap<String, ModelScores>,
    pub final_recommendation: String,
}

impl ModelComparison {
    #[must_use]
    pub fn has_predictions(&self) -> bool {
        !self.predictions.is_empty()
    }

    /// Scores reported for `model`, if any
    #[must_use]
    pub fn scores(&self, model: &str) -> Option<&ModelScores> {
        self.metrics.get(model)
    }
}

/// Parse a model comparison body
///
/// An empty `predictions` list is accepted; callers show [`NO_PREDICTIONS`].
///
/// # Errors
///
/// * `DashboardError::Json` - Body does not match the report shape
pub fn parse_model_comparison(body: &str) -> Result<ModelComparison> {
    let report: ModelComparison = serde_json::from_str(body)?;
    debug!(
        predictions = report.predictions.len(),
        scored = report.metrics.len(),
        "parsed model comparison"
    );
    Ok(report)
}
