//! Serialized model artifacts
//!
//! The on-disk artifact is an internally tagged JSON document written by
//! the training pipeline; `model_type` selects the estimator family. Both
//! sides share this one definition, so a round trip through serde is the
//! whole artifact format.

use modelhost_core::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::predictor::Predictor;

/// A fitted model as persisted by the training pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "model_type", rename_all = "snake_case")]
pub enum ModelArtifact {
    /// Least-squares regressor: `x · w + b` per input row
    LinearRegressor {
        coefficients: Vec<f64>,
        intercept: f64,
    },

    /// Binary classifier over the same linear score, 0.5 probability cut
    LogisticClassifier {
        coefficients: Vec<f64>,
        intercept: f64,
    },
}

impl ModelArtifact {
    /// Linear score per row of a 2-D numeric input
    fn scores(coefficients: &[f64], intercept: f64, input: &Value) -> Result<Vec<f64>> {
        let rows = input
            .as_array()
            .ok_or_else(|| Error::prediction("input must be an array of feature rows"))?;

        let mut scores = Vec::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            let features = row
                .as_array()
                .ok_or_else(|| Error::prediction(format!("row {i} is not a feature array")))?;

            if features.len() != coefficients.len() {
                return Err(Error::prediction(format!(
                    "row {i} has {} features, model expects {}",
                    features.len(),
                    coefficients.len()
                )));
            }

            let mut score = intercept;
            for (feature, coefficient) in features.iter().zip(coefficients) {
                let x = feature.as_f64().ok_or_else(|| {
                    Error::prediction(format!("row {i} contains a non-numeric feature"))
                })?;
                score += x * coefficient;
            }
            scores.push(score);
        }

        Ok(scores)
    }
}

impl Predictor for ModelArtifact {
    fn name(&self) -> &str {
        match self {
            Self::LinearRegressor { .. } => "linear_regressor",
            Self::LogisticClassifier { .. } => "logistic_classifier",
        }
    }

    fn predict(&self, input: &Value) -> Result<Value> {
        match self {
            Self::LinearRegressor {
                coefficients,
                intercept,
            } => {
                let scores = Self::scores(coefficients, *intercept, input)?;
                Ok(json!(scores))
            }
            Self::LogisticClassifier {
                coefficients,
                intercept,
            } => {
                let scores = Self::scores(coefficients, *intercept, input)?;
                let classes: Vec<u8> = scores
                    .iter()
                    .map(|s| if sigmoid(*s) >= 0.5 { 1 } else { 0 })
                    .collect();
                Ok(json!(classes))
            }
        }
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
