//! Integration tests for the conversion engine's HTTP interface, driven
//! end to end against the embedded euro-reference dataset.

use currency_service::api::rest::{AppState, create_router};
use currency_service::application::conversion::ConversionService;
use currency_service::domain::money::Money;
use currency_service::infrastructure::rates::{StaticRateProvider, SupportedCurrencies};
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

fn embedded_state() -> Arc<AppState> {
    let provider = Arc::new(StaticRateProvider::from_embedded().expect("embedded dataset parses"));
    let currencies =
        Arc::new(SupportedCurrencies::from_embedded().expect("embedded currency list parses"));

    Arc::new(AppState {
        converter: Arc::new(ConversionService::new(provider)),
        currencies,
    })
}

#[tokio::test]
async fn healthz_answers_serving() {
    let router = create_router(embedded_state());

    let response = router
        .oneshot(
            Request::builder()
                .uri("/_healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"SERVING");
}

#[tokio::test]
async fn supported_lists_embedded_currencies() {
    let router = create_router(embedded_state());

    let response = router
        .oneshot(
            Request::builder()
                .uri("/supported")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let codes: Vec<String> = serde_json::from_slice(&body).unwrap();

    assert!(codes.iter().any(|c| c == "EUR"));
    assert!(codes.iter().any(|c| c == "USD"));
    assert!(codes.iter().any(|c| c == "JPY"));
}

#[tokio::test]
async fn convert_to_same_currency_preserves_amount() {
    let router = create_router(embedded_state());

    let body = serde_json::json!({
        "from": {"currency_code": "EUR", "units": 10, "nanos": 500_000_000},
        "to": "EUR"
    });

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/convert")
                .header("Content-Type", "application/json")
                .body(Body::from(serde_json::to_string(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let money: Money = serde_json::from_slice(&body).unwrap();
    assert_eq!(money.currency_code().as_str(), "EUR");
    assert_eq!(money.units(), 10);
    assert_eq!(money.nanos(), 500_000_000);
}

#[tokio::test]
async fn convert_produces_normalized_target_amount() {
    let router = create_router(embedded_state());

    let body = serde_json::json!({
        "from": {"currency_code": "USD", "units": 100, "nanos": 0},
        "to": "EUR"
    });

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/convert")
                .header("Content-Type", "application/json")
                .body(Body::from(serde_json::to_string(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let money: Money = serde_json::from_slice(&body).unwrap();

    assert_eq!(money.currency_code().as_str(), "EUR");
    // 100 USD is somewhere in the tens of euros; the exact figure depends on
    // the reference table, but the result must be normalized.
    assert!(money.units() > 0);
    assert!((0..1_000_000_000).contains(&money.nanos()));
}

#[tokio::test]
async fn convert_unknown_currency_is_bad_gateway() {
    let router = create_router(embedded_state());

    let body = serde_json::json!({
        "from": {"currency_code": "XXX", "units": 1, "nanos": 0},
        "to": "EUR"
    });

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/convert")
                .header("Content-Type", "application/json")
                .body(Body::from(serde_json::to_string(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn convert_negative_amount_is_rejected() {
    let router = create_router(embedded_state());

    let body = serde_json::json!({
        "from": {"currency_code": "USD", "units": -5, "nanos": 0},
        "to": "EUR"
    });

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/convert")
                .header("Content-Type", "application/json")
                .body(Body::from(serde_json::to_string(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}
