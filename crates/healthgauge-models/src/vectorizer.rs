//! TF-IDF vectorizer
//!
//! Mirrors the transform the text classifier was trained against:
//! lowercase, tokens of two or more word characters, term counts scaled
//! by per-term idf, then L2 normalization.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use healthgauge_core::{Error, Result};

/// Fitted TF-IDF vectorizer state, deserialized from the model artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    /// Token to feature-column mapping.
    pub vocabulary: HashMap<String, usize>,

    /// Inverse document frequency per feature column.
    pub idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Number of feature columns.
    pub fn dim(&self) -> usize {
        self.idf.len()
    }

    /// Check internal consistency after deserialization.
    pub fn validate(&self) -> Result<()> {
        for (token, &column) in &self.vocabulary {
            if column >= self.idf.len() {
                return Err(Error::config(format!(
                    "vocabulary entry '{}' points past idf vector (column {}, dim {})",
                    token,
                    column,
                    self.idf.len()
                )));
            }
        }
        Ok(())
    }

    /// Transform one text segment into a dense L2-normalized feature vector.
    pub fn transform(&self, text: &str) -> Vec<f64> {
        let mut features = vec![0.0; self.idf.len()];

        for token in tokenize(text) {
            if let Some(&column) = self.vocabulary.get(token.as_str()) {
                features[column] += self.idf[column];
            }
        }

        let norm = features.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in &mut features {
                *value /= norm;
            }
        }

        features
    }
}

/// Lowercased tokens of two or more word characters.
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|token| token.chars().count() >= 2)
        .map(|token| token.to_lowercase())
        .collect()
}
