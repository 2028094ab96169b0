//! HealthGauge Models
//!
//! Inference over the two pre-trained artifacts the service ships with:
//! a TF-IDF + multinomial logistic-regression text classifier over the
//! seven mental-health categories, and a logistic-regression tabular
//! classifier for heart-disease risk.
//!
//! Artifacts are plain JSON exported at training time. They are loaded
//! once at startup and shared read-only across requests; a load failure
//! disables the dependent endpoint instead of crashing the process.

pub mod loader;
pub mod tabular;
pub mod text;
pub mod vectorizer;

pub use loader::ModelSet;
pub use tabular::TabularModel;
pub use text::{split_sentences, TextModel};
pub use vectorizer::TfidfVectorizer;
