//! HealthGauge Content
//!
//! Read-only lookup of curated articles and playlist URLs per category.
//! The dataset is configuration data loaded from YAML at startup; a
//! compiled-in default mirrors the curated set the service ships with.

use std::collections::HashMap;
use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use healthgauge_core::{ArticleRef, Category, Error, Result};

/// Compiled-in default dataset.
const DEFAULT_CONTENT: &str = include_str!("../content/default.yaml");

/// Curated content for one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryEntry {
    /// Article references to sample from.
    #[serde(default)]
    pub articles: Vec<ArticleRef>,

    /// Playlist URL, if one is curated for this category.
    #[serde(default)]
    pub playlist: Option<String>,
}

/// The full content dataset, immutable after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentLibrary {
    pub categories: HashMap<Category, CategoryEntry>,
}

impl ContentLibrary {
    /// Load from an operator-supplied file, or fall back to the
    /// compiled-in default dataset.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let library = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)?;
                let library: ContentLibrary = serde_yaml::from_str(&content)
                    .map_err(|e| Error::config(format!("invalid content file: {e}")))?;
                info!(path = %path.display(), "content library loaded");
                library
            }
            None => Self::builtin()?,
        };
        library.validate()?;
        Ok(library)
    }

    /// The compiled-in default dataset.
    pub fn builtin() -> Result<Self> {
        serde_yaml::from_str(DEFAULT_CONTENT)
            .map_err(|e| Error::config(format!("built-in content is invalid: {e}")))
    }

    /// Every category must have an entry; sampling and playlist lookup
    /// assume the full label set is covered.
    pub fn validate(&self) -> Result<()> {
        for category in Category::ALL {
            if !self.categories.contains_key(&category) {
                return Err(Error::config(format!(
                    "content library has no entry for category '{category}'"
                )));
            }
        }
        Ok(())
    }

    /// Sample up to `count` articles for a category, without
    /// replacement. The count is clamped to the number of curated
    /// articles, so asking for more than exist returns the whole list
    /// in random order rather than failing.
    pub fn sample_articles<R: Rng>(
        &self,
        category: Category,
        count: usize,
        rng: &mut R,
    ) -> Vec<ArticleRef> {
        let Some(entry) = self.categories.get(&category) else {
            return Vec::new();
        };
        let count = count.min(entry.articles.len());
        entry
            .articles
            .choose_multiple(rng, count)
            .cloned()
            .collect()
    }

    /// Number of articles owed to a category at a given probability
    /// percentage: `round(percent / 100 * factor)`.
    pub fn article_quota(percent: f64, factor: u32) -> usize {
        (percent / 100.0 * f64::from(factor)).round() as usize
    }

    /// Playlist URL for a category, falling back to the Normal
    /// category's playlist when none is curated.
    pub fn playlist(&self, category: Category) -> String {
        self.categories
            .get(&category)
            .and_then(|entry| entry.playlist.clone())
            .or_else(|| {
                self.categories
                    .get(&Category::Normal)
                    .and_then(|entry| entry.playlist.clone())
            })
            .unwrap_or_default()
    }

    /// All curated articles for a category.
    pub fn articles(&self, category: Category) -> &[ArticleRef] {
        self.categories
            .get(&category)
            .map(|entry| entry.articles.as_slice())
            .unwrap_or_default()
    }
}
