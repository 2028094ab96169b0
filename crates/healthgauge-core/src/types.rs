//! Prediction result types shared between the inference crates and the
//! HTTP layer.

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Deserialize, Serialize, Serializer};

use crate::Category;

/// A curated article reference attached to a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRef {
    pub title: String,
    pub url: String,
}

/// Result of scoring free text against the mental-health classifier.
///
/// Serializes to the wire contract of `POST /predict/mind`: category-keyed
/// maps are emitted in class-index order.
#[derive(Debug, Clone)]
pub struct MindPrediction {
    /// Probability percentage per category (0-100, two decimals), in
    /// class-index order.
    pub probabilities: Vec<(Category, f64)>,

    /// Category with the highest percentage; ties go to the lowest index.
    pub top_category: Category,

    /// Sampled article references per category, in class-index order.
    pub articles: Vec<(Category, Vec<ArticleRef>)>,

    /// Playlist URL for the top category.
    pub playlist: String,
}

impl MindPrediction {
    /// Percentage for a single category, if present.
    pub fn percent_for(&self, category: Category) -> Option<f64> {
        self.probabilities
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, p)| *p)
    }
}

/// Category-keyed map serialized in the order the entries were collected.
struct LabelMap<'a, V>(&'a [(Category, V)]);

impl<V: Serialize> Serialize for LabelMap<'_, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (category, value) in self.0 {
            map.serialize_entry(category.as_str(), value)?;
        }
        map.end()
    }
}

impl Serialize for MindPrediction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("MindPrediction", 4)?;
        state.serialize_field("probabilities", &LabelMap(&self.probabilities))?;
        state.serialize_field("top_category", self.top_category.as_str())?;
        state.serialize_field("articles", &LabelMap(&self.articles))?;
        state.serialize_field("playlist", &self.playlist)?;
        state.end()
    }
}

/// Result of scoring a feature record against the heart-disease classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyPrediction {
    /// Predicted class: 1 = positive (at risk), 0 = negative.
    pub prediction: u8,

    /// Probability of the positive class.
    pub probability: f64,

    /// Fixed human-readable message selected by the predicted class.
    pub message: String,
}
