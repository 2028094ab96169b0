//! Shared application state

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use tracing::info;

use healthgauge_content::ContentLibrary;
use healthgauge_models::ModelSet;

use crate::config::ServerConfig;

/// Application state shared across all requests.
///
/// Everything here is read-only after startup, so concurrent request
/// handlers can share it without locking.
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration
    pub config: Arc<ServerConfig>,

    /// Loaded model artifacts (either slot may be empty after a failed load)
    pub models: Arc<ModelSet>,

    /// Curated articles and playlists
    pub content: Arc<ContentLibrary>,

    /// Prometheus metrics handle for rendering
    pub metrics_handle: PrometheusHandle,
}

impl AppState {
    /// Initialize application state from configuration.
    ///
    /// Model load failures are tolerated (the dependent endpoint answers
    /// 500 until restart); a broken content dataset is a hard error.
    pub fn new(config: ServerConfig, metrics_handle: PrometheusHandle) -> anyhow::Result<Self> {
        info!(
            text_model = %config.text_model_path.display(),
            tabular_model = %config.tabular_model_path.display(),
            "loading model artifacts"
        );
        let models = ModelSet::load(&config.text_model_path, &config.tabular_model_path);

        let content = ContentLibrary::load(config.content_path.as_deref())?;

        Ok(Self {
            config: Arc::new(config),
            models: Arc::new(models),
            content: Arc::new(content),
            metrics_handle,
        })
    }

    /// Build state from pre-constructed parts (used by tests).
    pub fn from_parts(
        config: ServerConfig,
        models: ModelSet,
        content: ContentLibrary,
        metrics_handle: PrometheusHandle,
    ) -> Self {
        Self {
            config: Arc::new(config),
            models: Arc::new(models),
            content: Arc::new(content),
            metrics_handle,
        }
    }
}
