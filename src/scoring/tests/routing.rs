use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tower::ServiceExt;

use super::common::*;
use crate::scoring::domain::{Reason, TrustState, Verdict};
use crate::scoring::router::{evaluation_router, refresh_handler};

#[tokio::test]
async fn refresh_handler_returns_the_engine_output() {
    let authority = StaticAuthority::new(Verdict::company_opened());
    let engine = Arc::new(siren_engine(authority.clone()));
    let evaluations = vec![
        siren_evaluation(TrustState::Favorable, Reason::CompanyOpened, 28),
        siren_evaluation(TrustState::Unconfirmed, Reason::UnableToReachApi, 79),
    ];

    let response = refresh_handler(State(engine), Json(evaluations)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload[0]["score"], 27);
    assert_eq!(payload[1]["score"], 74);
    assert!(authority.calls().is_empty());
}

#[tokio::test]
async fn refresh_route_resets_exhausted_scores_via_lookup() {
    let authority = StaticAuthority::new(Verdict::company_closed());
    let router = evaluation_router(Arc::new(siren_engine(authority.clone())));

    let body = serde_json::to_vec(&vec![siren_evaluation(
        TrustState::Favorable,
        Reason::CompanyOpened,
        0,
    )])
    .expect("payload serializes");

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/evaluations/refresh")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(body))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload[0]["state"], "unfavorable");
    assert_eq!(payload[0]["reason"], "company_closed");
    assert_eq!(payload[0]["score"], 100);
    assert_eq!(authority.calls(), vec!["832940670".to_string()]);
}

#[tokio::test]
async fn refresh_route_passes_unrecognized_kinds_through() {
    let authority = StaticAuthority::new(Verdict::company_opened());
    let router = evaluation_router(Arc::new(siren_engine(authority.clone())));

    let body = serde_json::to_vec(&vec![vat_evaluation(
        TrustState::Unconfirmed,
        Reason::OngoingDatabaseUpdate,
        42,
    )])
    .expect("payload serializes");

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/evaluations/refresh")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(body))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload[0]["type"], "VAT");
    assert_eq!(payload[0]["score"], 42);
    assert_eq!(payload[0]["reason"], "ongoing_database_update");
    assert!(authority.calls().is_empty());
}
