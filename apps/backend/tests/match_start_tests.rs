//! Match start flow: squad preconditions, squad locking, and the
//! one-start-per-fixture guarantee.

mod common;

use actix_web::http::StatusCode;
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use common::{
    full_lineup, post_json, put_both_squads, put_json, read_json, seed_matchday, test_app,
    test_state,
};
use serde_json::json;

#[actix_web::test]
async fn start_without_squads_is_rejected() {
    let app = test_app(test_state().await).await;
    let setup = seed_matchday(&app, 0).await;

    let resp = post_json(
        &app,
        &setup.token,
        &format!("/api/fixtures/{}/start", setup.fixture_id),
        json!({}),
    )
    .await;

    assert_problem_details_from_service_response(
        resp,
        "SQUAD_MISSING",
        StatusCode::BAD_REQUEST,
        Some("HOME, AWAY"),
    )
    .await;
}

#[actix_web::test]
async fn start_with_one_squad_names_the_missing_side() {
    let app = test_app(test_state().await).await;
    let setup = seed_matchday(&app, 15).await;

    let resp = put_json(
        &app,
        &setup.token,
        &format!("/api/fixtures/{}/squads/HOME", setup.fixture_id),
        full_lineup(&setup.players),
    )
    .await;
    read_json(resp, 200).await;

    let resp = post_json(
        &app,
        &setup.token,
        &format!("/api/fixtures/{}/start", setup.fixture_id),
        json!({}),
    )
    .await;

    assert_problem_details_from_service_response(
        resp,
        "SQUAD_MISSING",
        StatusCode::BAD_REQUEST,
        Some("AWAY"),
    )
    .await;
}

#[actix_web::test]
async fn start_creates_in_progress_state_and_locks_squads() {
    let app = test_app(test_state().await).await;
    let setup = seed_matchday(&app, 30).await;
    put_both_squads(&app, &setup).await;

    let resp = post_json(
        &app,
        &setup.token,
        &format!("/api/fixtures/{}/start", setup.fixture_id),
        json!({}),
    )
    .await;
    let body = read_json(resp, 201).await;

    assert_eq!(body["state"]["status"], "IN_PROGRESS");
    assert_eq!(body["state"]["half"], "H1");
    assert_eq!(body["state"]["matchClockSeconds"], 0);
    assert_eq!(body["state"]["homeScore"], 0);
    assert_eq!(body["state"]["awayScore"], 0);
    assert!(body["state"]["startedAt"].is_string());
    assert_eq!(body["warnings"].as_array().map(Vec::len), Some(0));

    // Both squads are now locked against lineup edits
    for side in ["HOME", "AWAY"] {
        let resp = common::get(
            &app,
            &setup.token,
            &format!("/api/fixtures/{}/squads/{side}", setup.fixture_id),
        )
        .await;
        let squad = read_json(resp, 200).await;
        assert_eq!(squad["locked"], true, "{side} squad should be locked");
    }

    let resp = put_json(
        &app,
        &setup.token,
        &format!("/api/fixtures/{}/squads/HOME", setup.fixture_id),
        full_lineup(&setup.players),
    )
    .await;
    assert_problem_details_from_service_response(
        resp,
        "SQUAD_LOCKED",
        StatusCode::CONFLICT,
        None,
    )
    .await;
}

#[actix_web::test]
async fn second_start_conflicts() {
    let app = test_app(test_state().await).await;
    let setup = seed_matchday(&app, 30).await;
    put_both_squads(&app, &setup).await;

    let uri = format!("/api/fixtures/{}/start", setup.fixture_id);
    let resp = post_json(&app, &setup.token, &uri, json!({})).await;
    read_json(resp, 201).await;

    let resp = post_json(&app, &setup.token, &uri, json!({})).await;
    assert_problem_details_from_service_response(
        resp,
        "MATCH_ALREADY_STARTED",
        StatusCode::CONFLICT,
        None,
    )
    .await;
}

#[actix_web::test]
async fn under_populated_lineup_warns_but_starts() {
    let app = test_app(test_state().await).await;
    let setup = seed_matchday(&app, 30).await;

    // HOME squad only fills 14 positions
    let mut home = full_lineup(&setup.players[..15]);
    home["starting"].as_array_mut().unwrap().pop();
    let resp = put_json(
        &app,
        &setup.token,
        &format!("/api/fixtures/{}/squads/HOME", setup.fixture_id),
        home,
    )
    .await;
    read_json(resp, 200).await;

    let resp = put_json(
        &app,
        &setup.token,
        &format!("/api/fixtures/{}/squads/AWAY", setup.fixture_id),
        full_lineup(&setup.players[15..30]),
    )
    .await;
    read_json(resp, 200).await;

    let resp = post_json(
        &app,
        &setup.token,
        &format!("/api/fixtures/{}/start", setup.fixture_id),
        json!({}),
    )
    .await;
    let body = read_json(resp, 201).await;

    assert_eq!(body["state"]["status"], "IN_PROGRESS");
    let warnings = body["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    let warning = warnings[0].as_str().unwrap();
    assert!(warning.contains("HOME"), "warning names the side: {warning}");
    assert!(warning.contains("14"), "warning names the count: {warning}");
}

#[actix_web::test]
async fn start_on_unknown_fixture_is_not_found() {
    let app = test_app(test_state().await).await;
    let setup = seed_matchday(&app, 0).await;

    let resp = post_json(
        &app,
        &setup.token,
        &format!("/api/fixtures/{}/start", uuid::Uuid::new_v4()),
        json!({}),
    )
    .await;
    assert_problem_details_from_service_response(
        resp,
        "FIXTURE_NOT_FOUND",
        StatusCode::NOT_FOUND,
        None,
    )
    .await;
}
