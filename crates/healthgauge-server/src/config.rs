//! Server configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path to the text-classifier artifact
    #[serde(default = "default_text_model")]
    pub text_model_path: PathBuf,

    /// Path to the tabular-classifier artifact
    #[serde(default = "default_tabular_model")]
    pub tabular_model_path: PathBuf,

    /// Path to the content dataset; None uses the compiled-in default
    #[serde(default)]
    pub content_path: Option<PathBuf>,

    /// Articles owed to a category at 100% probability
    #[serde(default = "default_sample_factor")]
    pub article_sample_factor: u32,
}

impl ServerConfig {
    /// Load configuration from file and CLI overrides
    pub fn load(config_path: &str, cli: &crate::cli::Cli) -> anyhow::Result<Self> {
        // Try to load from file, or use defaults
        let mut config = if Path::new(config_path).exists() {
            let content = std::fs::read_to_string(config_path)?;
            serde_yaml::from_str(&content)?
        } else {
            Self::default()
        };

        // Apply CLI overrides
        if let Some(listen) = &cli.listen {
            config.listen = listen.clone();
        }
        if let Some(port) = cli.port {
            config.port = port;
        }
        if let Some(path) = &cli.text_model {
            config.text_model_path = path.clone();
        }
        if let Some(path) = &cli.tabular_model {
            config.tabular_model_path = path.clone();
        }
        if let Some(path) = &cli.content {
            config.content_path = Some(path.clone());
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            port: default_port(),
            text_model_path: default_text_model(),
            tabular_model_path: default_tabular_model(),
            content_path: None,
            article_sample_factor: default_sample_factor(),
        }
    }
}

fn default_listen() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_text_model() -> PathBuf {
    PathBuf::from("./models/mental_health_model.json")
}

fn default_tabular_model() -> PathBuf {
    PathBuf::from("./models/heart_disease_model.json")
}

fn default_sample_factor() -> u32 {
    3
}
