//! Integration tests for the HealthGauge HTTP surface.
//!
//! Each test builds a router around small synthetic model artifacts and
//! drives it with `tower::ServiceExt::oneshot`.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use metrics_exporter_prometheus::PrometheusBuilder;
use serde_json::{json, Value};
use std::collections::HashMap;
use tower::ServiceExt;

use healthgauge_content::ContentLibrary;
use healthgauge_core::Category;
use healthgauge_models::{ModelSet, TabularModel, TextModel, TfidfVectorizer};
use healthgauge_server::{create_router, AppState, ServerConfig};

/// Text fixture: "hopeless", "bed" and "interests" pull toward
/// Depression; "calm" and "fine" pull toward Normal.
fn text_fixture() -> TextModel {
    let mut vocabulary = HashMap::new();
    for (column, token) in ["hopeless", "bed", "interests", "calm", "fine"]
        .iter()
        .enumerate()
    {
        vocabulary.insert(token.to_string(), column);
    }

    let dim = vocabulary.len();
    let mut coefficients = vec![vec![0.0; dim]; 7];
    coefficients[Category::Normal.index()][3] = 4.0;
    coefficients[Category::Normal.index()][4] = 4.0;
    coefficients[Category::Depression.index()][0] = 4.0;
    coefficients[Category::Depression.index()][1] = 2.0;
    coefficients[Category::Depression.index()][2] = 2.0;

    TextModel {
        vectorizer: TfidfVectorizer {
            vocabulary,
            idf: vec![1.0; dim],
        },
        coefficients,
        intercepts: vec![0.0; 7],
        labels: Category::ALL.iter().map(|c| c.as_str().to_string()).collect(),
    }
}

fn tabular_fixture() -> TabularModel {
    TabularModel {
        feature_names: vec![
            "age".to_string(),
            "restingBP".to_string(),
            "maxheartrate".to_string(),
        ],
        coefficients: vec![0.05, 0.01, -0.02],
        intercept: -2.0,
    }
}

fn test_router(models: ModelSet) -> axum::Router {
    let handle = PrometheusBuilder::new().build_recorder().handle();
    let state = AppState::from_parts(
        ServerConfig::default(),
        models,
        ContentLibrary::builtin().unwrap(),
        handle,
    );
    create_router(state)
}

fn full_router() -> axum::Router {
    test_router(ModelSet::from_models(
        Some(text_fixture()),
        Some(tabular_fixture()),
    ))
}

async fn post_json(router: axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

async fn send(router: axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&bytes).into_owned(),
        ))
    };
    (status, value)
}

#[tokio::test]
async fn health_endpoint_responds() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, body) = send(full_router(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("OK".to_string()));
}

#[tokio::test]
async fn index_describes_the_service() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let (status, body) = send(full_router(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("/predict/mind"));
}

#[tokio::test]
async fn unknown_route_is_404() {
    let request = Request::builder().uri("/nope").body(Body::empty()).unwrap();
    let (status, body) = send(full_router(), request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not found");
}

#[tokio::test]
async fn mind_prediction_happy_path() {
    let text = "I feel hopeless and I cannot get out of bed. Nothing interests me anymore.";
    let (status, body) = post_json(full_router(), "/predict/mind", json!({"text": text})).await;
    assert_eq!(status, StatusCode::OK);

    // Percentages over the seven categories sum to roughly 100.
    let probabilities = body["probabilities"].as_object().unwrap();
    assert_eq!(probabilities.len(), 7);
    let total: f64 = probabilities.values().map(|v| v.as_f64().unwrap()).sum();
    assert!((total - 100.0).abs() < 0.5, "total was {total}");

    // Both sentences lean depressive, so Depression wins.
    assert_eq!(body["top_category"], "Depression");

    // top_category matches the maximum percentage.
    let top_percent = probabilities["Depression"].as_f64().unwrap();
    for value in probabilities.values() {
        assert!(value.as_f64().unwrap() <= top_percent);
    }

    // Playlist comes from the curated set.
    assert!(body["playlist"].as_str().unwrap().starts_with("https://"));

    // Every category has an article list sized within its curated set.
    let articles = body["articles"].as_object().unwrap();
    assert_eq!(articles.len(), 7);
    for list in articles.values() {
        assert!(list.is_array());
    }
}

#[tokio::test]
async fn mind_single_sentence_without_period_is_accepted() {
    let (status, body) =
        post_json(full_router(), "/predict/mind", json!({"text": "I feel calm and fine"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["top_category"], "Normal");
}

#[tokio::test]
async fn mind_empty_text_is_rejected() {
    for text in ["", "   ", "\n\t"] {
        let (status, body) =
            post_json(full_router(), "/predict/mind", json!({"text": text})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "text {text:?}");
        assert_eq!(body["error"], "empty input text");
    }
}

#[tokio::test]
async fn mind_missing_text_field_is_rejected() {
    let (status, body) = post_json(full_router(), "/predict/mind", json!({"txt": "hello"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "empty input text");
}

#[tokio::test]
async fn mind_all_periods_has_no_valid_sentences() {
    let (status, body) = post_json(full_router(), "/predict/mind", json!({"text": ". .. ."})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "no valid sentences detected");
}

#[tokio::test]
async fn mind_malformed_json_is_rejected() {
    let request = Request::builder()
        .method("POST")
        .uri("/predict/mind")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(full_router(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("invalid JSON body"));
}

#[tokio::test]
async fn mind_without_model_is_a_500() {
    let router = test_router(ModelSet::from_models(None, Some(tabular_fixture())));
    let (status, body) = post_json(router, "/predict/mind", json!({"text": "hello there"})).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "model not loaded properly");
}

#[tokio::test]
async fn body_prediction_happy_path() {
    let record = json!({"age": 60, "restingBP": 140, "maxheartrate": 120});
    let (status, body) = post_json(full_router(), "/predict/body", record).await;
    assert_eq!(status, StatusCode::OK);

    // logit = 3.0 + 1.4 - 2.4 - 2.0 = 0 -> probability 0.5, class 1
    assert_eq!(body["prediction"], 1);
    assert!((body["probability"].as_f64().unwrap() - 0.5).abs() < 1e-9);
    assert!(body["message"].as_str().unwrap().contains("High risk"));
}

#[tokio::test]
async fn body_low_risk_message() {
    let record = json!({"age": 20, "restingBP": 100, "maxheartrate": 180});
    let (status, body) = post_json(full_router(), "/predict/body", record).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["prediction"], 0);
    assert!(body["message"].as_str().unwrap().contains("Low risk"));
}

#[tokio::test]
async fn body_numeric_strings_match_json_numbers() {
    let as_numbers = json!({"age": 60, "restingBP": 140, "maxheartrate": 120});
    let as_strings = json!({"age": "60", "restingBP": "140", "maxheartrate": "120"});

    let (status_a, body_a) = post_json(full_router(), "/predict/body", as_numbers).await;
    let (status_b, body_b) = post_json(full_router(), "/predict/body", as_strings).await;

    assert_eq!(status_a, StatusCode::OK);
    assert_eq!(status_b, StatusCode::OK);
    assert_eq!(body_a["prediction"], body_b["prediction"]);
    assert_eq!(body_a["probability"], body_b["probability"]);
}

#[tokio::test]
async fn body_missing_feature_is_named() {
    let record = json!({"age": 60, "maxheartrate": 120});
    let (status, body) = post_json(full_router(), "/predict/body", record).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("restingBP"));
    assert!(!message.contains("maxheartrate"));
}

#[tokio::test]
async fn body_unparseable_feature_is_named() {
    let record = json!({"age": "sixty", "restingBP": 140, "maxheartrate": 120});
    let (status, body) = post_json(full_router(), "/predict/body", record).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Invalid numeric value for features: age"));
}

#[tokio::test]
async fn body_without_model_is_a_500() {
    let router = test_router(ModelSet::from_models(Some(text_fixture()), None));
    let record = json!({"age": 60, "restingBP": 140, "maxheartrate": 120});
    let (status, body) = post_json(router, "/predict/body", record).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "model not loaded properly");
}

#[tokio::test]
async fn metrics_endpoint_renders() {
    let request = Request::builder().uri("/metrics").body(Body::empty()).unwrap();
    let response = full_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
