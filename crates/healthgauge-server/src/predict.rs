//! Response shaping and request validation for the two prediction paths.
//!
//! This is the pure logic between the deserialized request body and the
//! wire response; the handlers in `routes` wrap it with status codes,
//! logging, and metrics.

use rand::Rng;
use serde_json::Value;

use healthgauge_content::ContentLibrary;
use healthgauge_core::{Category, Error, MindPrediction, Result};
use healthgauge_models::TabularModel;

/// Messages attached to the tabular prediction by class.
pub const HIGH_RISK_MESSAGE: &str =
    "High risk of heart disease detected. Please consult a cardiologist.";
pub const LOW_RISK_MESSAGE: &str =
    "Low risk of heart disease detected. Keep up the healthy habits.";

/// Shape the mean probability vector into the /predict/mind response.
///
/// Percentages are rounded to two decimals; the top category is the
/// argmax over the rounded percentages in class-index order, so an
/// exact tie goes to the lowest index. Each category gets
/// `round(percent / 100 * factor)` articles, clamped to its curated
/// list, sampled without replacement.
pub fn shape_mind_prediction<R: Rng>(
    mean_probabilities: &[f64],
    content: &ContentLibrary,
    sample_factor: u32,
    rng: &mut R,
) -> Result<MindPrediction> {
    if mean_probabilities.len() != Category::ALL.len() {
        return Err(Error::prediction(format!(
            "expected {} class probabilities, got {}",
            Category::ALL.len(),
            mean_probabilities.len()
        )));
    }

    let probabilities: Vec<(Category, f64)> = Category::ALL
        .iter()
        .zip(mean_probabilities)
        .map(|(category, p)| (*category, round2(p * 100.0)))
        .collect();

    // Strict comparison keeps the lowest index on exact ties.
    let mut top_category = Category::Normal;
    let mut top_percent = f64::NEG_INFINITY;
    for (category, percent) in &probabilities {
        if *percent > top_percent {
            top_category = *category;
            top_percent = *percent;
        }
    }

    let articles = probabilities
        .iter()
        .map(|(category, percent)| {
            let quota = ContentLibrary::article_quota(*percent, sample_factor);
            (*category, content.sample_articles(*category, quota, rng))
        })
        .collect();

    Ok(MindPrediction {
        probabilities,
        top_category,
        articles,
        playlist: content.playlist(top_category),
    })
}

/// Pull the ordered feature vector out of a flat JSON body.
///
/// Walks the model's recorded feature names in order; a missing key or
/// empty-string value counts as missing, a present value that is not a
/// number and not a numeric string counts as a type error. All
/// offenders are collected before failing so the caller sees the full
/// list in one response.
pub fn extract_features(model: &TabularModel, body: &Value) -> Result<Vec<f64>> {
    let Some(object) = body.as_object() else {
        return Err(Error::validation("request body must be a JSON object"));
    };

    let mut values = Vec::with_capacity(model.feature_names.len());
    let mut missing = Vec::new();
    let mut type_errors = Vec::new();

    for name in &model.feature_names {
        match object.get(name) {
            None | Some(Value::Null) => missing.push(name.as_str()),
            Some(Value::String(s)) if s.trim().is_empty() => missing.push(name.as_str()),
            Some(Value::String(s)) => match s.trim().parse::<f64>() {
                Ok(value) => values.push(value),
                Err(_) => type_errors.push(name.as_str()),
            },
            Some(Value::Number(n)) => match n.as_f64() {
                Some(value) => values.push(value),
                None => type_errors.push(name.as_str()),
            },
            Some(_) => type_errors.push(name.as_str()),
        }
    }

    if !missing.is_empty() || !type_errors.is_empty() {
        let mut message = String::new();
        if !missing.is_empty() {
            message.push_str(&format!(
                "Missing or empty value for features: {}.",
                missing.join(", ")
            ));
        }
        if !type_errors.is_empty() {
            if !message.is_empty() {
                message.push(' ');
            }
            message.push_str(&format!(
                "Invalid numeric value for features: {}.",
                type_errors.join(", ")
            ));
        }
        return Err(Error::validation(message));
    }

    // Everything parsed, so the counts must line up.
    if values.len() != model.feature_names.len() {
        return Err(Error::validation(format!(
            "parsed {} feature values, expected {}",
            values.len(),
            model.feature_names.len()
        )));
    }

    Ok(values)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
