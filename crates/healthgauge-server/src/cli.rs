//! Command-line interface

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "healthgauge-server")]
#[command(about = "HealthGauge prediction service", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    pub config: String,

    /// Listen address
    #[arg(short = 'l', long)]
    pub listen: Option<String>,

    /// Listen port
    #[arg(short = 'P', long)]
    pub port: Option<u16>,

    /// Text-classifier artifact path
    #[arg(long)]
    pub text_model: Option<PathBuf>,

    /// Tabular-classifier artifact path
    #[arg(long)]
    pub tabular_model: Option<PathBuf>,

    /// Content dataset path (omit to use the compiled-in default)
    #[arg(long)]
    pub content: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
