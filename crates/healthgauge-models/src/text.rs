//! Mental-health text classifier
//!
//! A multinomial logistic-regression head over TF-IDF features. The
//! artifact carries the fitted vectorizer, one coefficient row per
//! category, intercepts, and the class labels in training order.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use healthgauge_core::{Category, Error, Result};

use crate::vectorizer::TfidfVectorizer;

/// Loaded text-classifier artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextModel {
    /// Fitted TF-IDF state.
    pub vectorizer: TfidfVectorizer,

    /// Coefficient matrix, one row per class in label order.
    pub coefficients: Vec<Vec<f64>>,

    /// Per-class intercepts.
    pub intercepts: Vec<f64>,

    /// Class labels in training order.
    pub labels: Vec<String>,
}

impl TextModel {
    /// Deserialize and validate an artifact from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let model: TextModel = serde_json::from_str(&content)?;
        model.validate()?;
        debug!(
            classes = model.labels.len(),
            features = model.vectorizer.dim(),
            "text model loaded"
        );
        Ok(model)
    }

    /// Validate artifact dimensions against the fixed category set.
    pub fn validate(&self) -> Result<()> {
        self.vectorizer.validate()?;

        let expected: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        if self.labels != expected {
            return Err(Error::config(format!(
                "text model labels {:?} do not match the expected category order",
                self.labels
            )));
        }
        if self.coefficients.len() != self.labels.len() {
            return Err(Error::config(format!(
                "coefficient rows ({}) do not match class count ({})",
                self.coefficients.len(),
                self.labels.len()
            )));
        }
        if self.intercepts.len() != self.labels.len() {
            return Err(Error::config(format!(
                "intercepts ({}) do not match class count ({})",
                self.intercepts.len(),
                self.labels.len()
            )));
        }
        for (class, row) in self.coefficients.iter().enumerate() {
            if row.len() != self.vectorizer.dim() {
                return Err(Error::config(format!(
                    "coefficient row {} has {} columns, vectorizer has {}",
                    class,
                    row.len(),
                    self.vectorizer.dim()
                )));
            }
        }
        Ok(())
    }

    /// Probability vector over all categories for one text segment.
    ///
    /// The result sums to 1.0 up to floating-point error.
    pub fn predict_proba(&self, segment: &str) -> Vec<f64> {
        let features = self.vectorizer.transform(segment);

        let logits: Vec<f64> = self
            .coefficients
            .iter()
            .zip(&self.intercepts)
            .map(|(row, intercept)| {
                row.iter()
                    .zip(&features)
                    .map(|(w, x)| w * x)
                    .sum::<f64>()
                    + intercept
            })
            .collect();

        softmax(&logits)
    }

    /// Mean probability vector across segments.
    ///
    /// Each segment is scored independently; the aggregate is a simple
    /// arithmetic mean, not weighted by segment length.
    pub fn score_segments(&self, segments: &[&str]) -> Result<Vec<f64>> {
        if segments.is_empty() {
            return Err(Error::prediction("no segments to score"));
        }

        let mut mean = vec![0.0; self.labels.len()];
        for segment in segments {
            let probabilities = self.predict_proba(segment);
            for (acc, p) in mean.iter_mut().zip(&probabilities) {
                *acc += p;
            }
        }
        for value in &mut mean {
            *value /= segments.len() as f64;
        }

        Ok(mean)
    }
}

/// Split input on the literal period character, trimming each piece and
/// discarding empties. The classifier was trained on sentence-sized
/// inputs, so paragraphs are scored sentence by sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split('.')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

fn softmax(logits: &[f64]) -> Vec<f64> {
    let max = logits.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = logits.iter().map(|l| (l - max).exp()).collect();
    let total: f64 = exps.iter().sum();
    exps.iter().map(|e| e / total).collect()
}
