//! Health endpoint and the authentication boundary around /api.

mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use common::{get, test_app, test_state, token_for};
use serde_json::Value;

#[actix_web::test]
async fn health_is_open() {
    let app = test_app(test_state().await).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
}

#[actix_web::test]
async fn api_requires_bearer_token() {
    let app = test_app(test_state().await).await;

    let req = test::TestRequest::get().uri("/api/clubs/not-a-uuid").to_request();
    let resp = common::call_service_or_error(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "UNAUTHORIZED_MISSING_BEARER",
        StatusCode::UNAUTHORIZED,
        None,
    )
    .await;
}

#[actix_web::test]
async fn garbage_token_is_rejected() {
    let app = test_app(test_state().await).await;

    let req = test::TestRequest::get()
        .uri("/api/clubs/00000000-0000-0000-0000-000000000000")
        .insert_header(("Authorization", "Bearer not.a.jwt"))
        .to_request();
    let resp = common::call_service_or_error(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "UNAUTHORIZED_INVALID_JWT",
        StatusCode::UNAUTHORIZED,
        None,
    )
    .await;
}

#[actix_web::test]
async fn invalid_fixture_id_is_a_bad_request() {
    let app = test_app(test_state().await).await;
    let token = token_for(&app, "auth0|someone", "Someone").await;

    let resp = get(&app, &token, "/api/fixtures/not-a-uuid/state").await;
    assert_problem_details_from_service_response(
        resp,
        "INVALID_FIXTURE_ID",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;
}

#[actix_web::test]
async fn minted_token_round_trips() {
    let app = test_app(test_state().await).await;
    let token = token_for(&app, "auth0|captain", "Club Captain").await;

    // Any authenticated request clears the auth boundary; membership is
    // checked next, so an unknown club reads as "not a member"
    let resp = get(
        &app,
        &token,
        "/api/clubs/00000000-0000-0000-0000-000000000000",
    )
    .await;
    assert_problem_details_from_service_response(
        resp,
        "NOT_A_MEMBER",
        StatusCode::FORBIDDEN,
        None,
    )
    .await;
}
