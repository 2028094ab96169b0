//! Startup model loading
//!
//! Both artifacts are loaded exactly once when the service starts. A
//! failed load is logged and leaves the slot empty; the service keeps
//! running and the dependent endpoint reports the model as unavailable
//! on every request until a restart with working artifacts.

use std::path::Path;
use std::sync::Arc;

use tracing::{error, info};

use healthgauge_core::{Error, Result};

use crate::{TabularModel, TextModel};

/// The set of models the service serves predictions from. Immutable
/// after construction and safe to share across concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct ModelSet {
    text: Option<Arc<TextModel>>,
    tabular: Option<Arc<TabularModel>>,
}

impl ModelSet {
    /// Load both artifacts, tolerating individual failures.
    pub fn load(text_path: impl AsRef<Path>, tabular_path: impl AsRef<Path>) -> Self {
        let text = match TextModel::load(text_path.as_ref()) {
            Ok(model) => {
                info!(path = %text_path.as_ref().display(), "text model loaded");
                Some(Arc::new(model))
            }
            Err(e) => {
                error!(
                    path = %text_path.as_ref().display(),
                    error = %e,
                    "failed to load text model; /predict/mind will be unavailable"
                );
                None
            }
        };

        let tabular = match TabularModel::load(tabular_path.as_ref()) {
            Ok(model) => {
                info!(path = %tabular_path.as_ref().display(), "tabular model loaded");
                Some(Arc::new(model))
            }
            Err(e) => {
                error!(
                    path = %tabular_path.as_ref().display(),
                    error = %e,
                    "failed to load tabular model; /predict/body will be unavailable"
                );
                None
            }
        };

        Self { text, tabular }
    }

    /// Build a set from already-constructed models.
    pub fn from_models(text: Option<TextModel>, tabular: Option<TabularModel>) -> Self {
        Self {
            text: text.map(Arc::new),
            tabular: tabular.map(Arc::new),
        }
    }

    /// The text classifier, or ModelUnavailable if it failed to load.
    pub fn text(&self) -> Result<&TextModel> {
        self.text
            .as_deref()
            .ok_or_else(|| Error::model_unavailable("text model not loaded"))
    }

    /// The tabular classifier, or ModelUnavailable if it failed to load.
    pub fn tabular(&self) -> Result<&TabularModel> {
        self.tabular
            .as_deref()
            .ok_or_else(|| Error::model_unavailable("tabular model not loaded"))
    }

    /// Whether the text classifier is available.
    pub fn has_text(&self) -> bool {
        self.text.is_some()
    }

    /// Whether the tabular classifier is available.
    pub fn has_tabular(&self) -> bool {
        self.tabular.is_some()
    }
}
