//! Heart-disease tabular classifier
//!
//! A binary logistic regression over a fixed, ordered feature record.
//! The artifact records the feature names in the exact order they were
//! fed to the model at training time; that order is the only source of
//! truth for assembling a feature vector at request time.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use healthgauge_core::{Error, Result};

/// Loaded tabular-classifier artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabularModel {
    /// Feature names in trained order.
    pub feature_names: Vec<String>,

    /// One coefficient per feature, same order as `feature_names`.
    pub coefficients: Vec<f64>,

    /// Model intercept.
    pub intercept: f64,
}

impl TabularModel {
    /// Deserialize and validate an artifact from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let model: TabularModel = serde_json::from_str(&content)?;
        model.validate()?;
        debug!(features = model.feature_names.len(), "tabular model loaded");
        Ok(model)
    }

    /// Validate artifact dimensions.
    ///
    /// An artifact without feature names is unusable: there is no
    /// fallback enumeration, so it is rejected at load time rather than
    /// failing on the first request.
    pub fn validate(&self) -> Result<()> {
        if self.feature_names.is_empty() {
            return Err(Error::config(
                "tabular model artifact has no recorded feature names",
            ));
        }
        if self.coefficients.len() != self.feature_names.len() {
            return Err(Error::config(format!(
                "coefficients ({}) do not match feature names ({})",
                self.coefficients.len(),
                self.feature_names.len()
            )));
        }
        Ok(())
    }

    /// Binary prediction and positive-class probability for one ordered
    /// feature vector.
    pub fn predict(&self, features: &[f64]) -> Result<(u8, f64)> {
        if features.len() != self.feature_names.len() {
            return Err(Error::prediction(format!(
                "feature vector has {} values, model expects {}",
                features.len(),
                self.feature_names.len()
            )));
        }

        let logit: f64 = self
            .coefficients
            .iter()
            .zip(features)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept;

        let probability = 1.0 / (1.0 + (-logit).exp());
        let class = u8::from(probability >= 0.5);
        Ok((class, probability))
    }
}
