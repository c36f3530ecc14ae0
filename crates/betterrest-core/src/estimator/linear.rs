//! Linear regression model over the three form features.
//!
//! The artifact is a JSON object of coefficients:
//!
//! ```json
//! { "intercept": 0.0, "wake": 0.0, "sleep": 3600.0, "coffee": 900.0 }
//! ```
//!
//! Prediction in seconds is
//! `intercept + wake * wake_seconds + sleep * sleep_hours + coffee * coffee_count`.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::SleepEstimator;
use crate::error::EstimationFailure;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    #[serde(default)]
    pub intercept: f64,
    pub wake: f64,
    pub sleep: f64,
    pub coffee: f64,
}

/// Bundled coefficients: the desired hours plus a quarter hour per cup.
impl Default for LinearModel {
    fn default() -> Self {
        Self {
            intercept: 0.0,
            wake: 0.0,
            sleep: 3600.0,
            coffee: 900.0,
        }
    }
}

impl LinearModel {
    /// Parse a JSON artifact.
    ///
    /// # Errors
    ///
    /// Returns [`EstimationFailure::ModelUnavailable`] if the JSON is malformed
    /// or any coefficient is not finite.
    pub fn from_json_str(json: &str) -> Result<Self, EstimationFailure> {
        let model: LinearModel = serde_json::from_str(json)
            .map_err(|e| EstimationFailure::ModelUnavailable(format!("malformed model: {e}")))?;
        model.validate()?;
        Ok(model)
    }

    /// Load a JSON artifact from disk.
    ///
    /// # Errors
    ///
    /// Returns [`EstimationFailure::ModelUnavailable`] if the file cannot be
    /// read or parsed.
    pub fn load(path: &Path) -> Result<Self, EstimationFailure> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            EstimationFailure::ModelUnavailable(format!("{}: {e}", path.display()))
        })?;
        let model = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), ?model, "loaded sleep model");
        Ok(model)
    }

    fn validate(&self) -> Result<(), EstimationFailure> {
        let coefficients = [
            ("intercept", self.intercept),
            ("wake", self.wake),
            ("sleep", self.sleep),
            ("coffee", self.coffee),
        ];
        for (name, value) in coefficients {
            if !value.is_finite() {
                return Err(EstimationFailure::ModelUnavailable(format!(
                    "coefficient '{name}' is not finite"
                )));
            }
        }
        Ok(())
    }
}

impl SleepEstimator for LinearModel {
    fn predict(
        &self,
        wake_seconds: i64,
        sleep_hours: f64,
        coffee_count: u32,
    ) -> Result<f64, EstimationFailure> {
        if !sleep_hours.is_finite() {
            return Err(EstimationFailure::InvalidInput(format!(
                "sleep hours must be finite, got {sleep_hours}"
            )));
        }
        Ok(self.intercept
            + self.wake * wake_seconds as f64
            + self.sleep * sleep_hours
            + self.coffee * f64::from(coffee_count))
    }
}
