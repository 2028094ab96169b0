//! HealthGauge Core
//!
//! Shared types for the HealthGauge prediction service: the fixed
//! mental-health category set, prediction result types, and the error
//! type used across all crates.

pub mod category;
pub mod error;
pub mod types;

pub use category::Category;
pub use error::{Error, Result};
pub use types::{ArticleRef, BodyPrediction, MindPrediction};
