//! The fixed mental-health category set
//!
//! The text classifier is trained over exactly these seven labels; the
//! index order matches the class order recorded in the model artifact
//! and is used for tie-breaking (lowest index wins).

use serde::{Deserialize, Serialize};

/// One of the seven mental-health categories the text classifier scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Normal,
    Depression,
    Suicidal,
    Anxiety,
    Bipolar,
    Stress,
    #[serde(rename = "Personality Disorder")]
    PersonalityDisorder,
}

impl Category {
    /// All categories in class-index order.
    pub const ALL: [Category; 7] = [
        Category::Normal,
        Category::Depression,
        Category::Suicidal,
        Category::Anxiety,
        Category::Bipolar,
        Category::Stress,
        Category::PersonalityDisorder,
    ];

    /// Human-readable label, as emitted in API responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Normal => "Normal",
            Category::Depression => "Depression",
            Category::Suicidal => "Suicidal",
            Category::Anxiety => "Anxiety",
            Category::Bipolar => "Bipolar",
            Category::Stress => "Stress",
            Category::PersonalityDisorder => "Personality Disorder",
        }
    }

    /// Class index of this category.
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).unwrap_or(0)
    }

    /// Look up a category by class index.
    pub fn from_index(index: usize) -> Option<Category> {
        Self::ALL.get(index).copied()
    }

    /// Look up a category by its label.
    pub fn from_label(label: &str) -> Option<Category> {
        Self::ALL.iter().find(|c| c.as_str() == label).copied()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
