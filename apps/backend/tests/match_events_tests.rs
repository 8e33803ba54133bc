//! Live match tracking: transitions, the clock, and score recomputation
//! from the event list.

mod common;

use actix_web::http::StatusCode;
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use common::{
    delete, get, post_json, put_both_squads, put_json, read_json, seed_matchday, test_app,
    test_state, MatchdaySetup, TestApp,
};
use serde_json::{json, Value};

async fn started_match(app: &impl TestApp) -> MatchdaySetup {
    let setup = seed_matchday(app, 30).await;
    put_both_squads(app, &setup).await;
    let resp = post_json(
        app,
        &setup.token,
        &format!("/api/fixtures/{}/start", setup.fixture_id),
        json!({}),
    )
    .await;
    read_json(resp, 201).await;
    setup
}

async fn record(
    app: &impl TestApp,
    setup: &MatchdaySetup,
    side: &str,
    kind: &str,
    clock: i64,
) -> Value {
    let resp = post_json(
        app,
        &setup.token,
        &format!("/api/fixtures/{}/events", setup.fixture_id),
        json!({
            "side": side,
            "kind": kind,
            "playerId": setup.players[0],
            "matchClockSeconds": clock,
        }),
    )
    .await;
    read_json(resp, 201).await
}

#[actix_web::test]
async fn scores_follow_the_event_list() {
    let app = test_app(test_state().await).await;
    let setup = started_match(&app).await;

    let body = record(&app, &setup, "HOME", "TRY", 300).await;
    assert_eq!(body["state"]["homeScore"], 5);
    assert_eq!(body["state"]["awayScore"], 0);

    let body = record(&app, &setup, "HOME", "CONVERSION", 360).await;
    assert_eq!(body["state"]["homeScore"], 7);

    let body = record(&app, &setup, "AWAY", "PENALTY_GOAL", 900).await;
    assert_eq!(body["state"]["homeScore"], 7);
    assert_eq!(body["state"]["awayScore"], 3);

    let penalty_id = body["event"]["id"].clone();
    let body = record(&app, &setup, "HOME", "YELLOW_CARD", 1000).await;
    assert_eq!(body["state"]["homeScore"], 7, "cards score nothing");

    // Deleting the penalty goal recomputes the away score
    let state = read_json(
        delete(
            &app,
            &setup.token,
            &format!(
                "/api/fixtures/{}/events/{}",
                setup.fixture_id,
                penalty_id.as_str().unwrap()
            ),
        )
        .await,
        200,
    )
    .await;
    assert_eq!(state["homeScore"], 7);
    assert_eq!(state["awayScore"], 0);

    let events = read_json(
        get(
            &app,
            &setup.token,
            &format!("/api/fixtures/{}/events", setup.fixture_id),
        )
        .await,
        200,
    )
    .await;
    assert_eq!(events.as_array().unwrap().len(), 3);
}

#[actix_web::test]
async fn events_require_a_running_match() {
    let app = test_app(test_state().await).await;
    let setup = seed_matchday(&app, 30).await;
    put_both_squads(&app, &setup).await;

    // Before the match starts there is no state row at all
    let resp = post_json(
        &app,
        &setup.token,
        &format!("/api/fixtures/{}/events", setup.fixture_id),
        json!({ "side": "HOME", "kind": "TRY", "matchClockSeconds": 10 }),
    )
    .await;
    assert_problem_details_from_service_response(
        resp,
        "MATCH_STATE_NOT_FOUND",
        StatusCode::NOT_FOUND,
        None,
    )
    .await;

    // During half time events are rejected
    let resp = post_json(
        &app,
        &setup.token,
        &format!("/api/fixtures/{}/start", setup.fixture_id),
        json!({}),
    )
    .await;
    read_json(resp, 201).await;
    let resp = post_json(
        &app,
        &setup.token,
        &format!("/api/fixtures/{}/half-time", setup.fixture_id),
        json!({}),
    )
    .await;
    read_json(resp, 200).await;

    let resp = post_json(
        &app,
        &setup.token,
        &format!("/api/fixtures/{}/events", setup.fixture_id),
        json!({ "side": "HOME", "kind": "TRY", "matchClockSeconds": 2400 }),
    )
    .await;
    assert_problem_details_from_service_response(
        resp,
        "MATCH_NOT_IN_PROGRESS",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;
}

#[actix_web::test]
async fn full_match_lifecycle() {
    let app = test_app(test_state().await).await;
    let setup = started_match(&app).await;
    let base = format!("/api/fixtures/{}", setup.fixture_id);

    let state = read_json(
        post_json(&app, &setup.token, &format!("{base}/half-time"), json!({})).await,
        200,
    )
    .await;
    assert_eq!(state["status"], "HALF_TIME");
    assert_eq!(state["half"], "H1");

    let state = read_json(
        post_json(&app, &setup.token, &format!("{base}/second-half"), json!({})).await,
        200,
    )
    .await;
    assert_eq!(state["status"], "IN_PROGRESS");
    assert_eq!(state["half"], "H2");

    let state = read_json(
        post_json(&app, &setup.token, &format!("{base}/complete"), json!({})).await,
        200,
    )
    .await;
    assert_eq!(state["status"], "COMPLETED");
    assert!(state["completedAt"].is_string());

    // No transitions out of COMPLETED
    let resp = post_json(&app, &setup.token, &format!("{base}/half-time"), json!({})).await;
    assert_problem_details_from_service_response(
        resp,
        "INVALID_STATUS_TRANSITION",
        StatusCode::CONFLICT,
        None,
    )
    .await;
}

#[actix_web::test]
async fn clock_only_moves_in_progress() {
    let app = test_app(test_state().await).await;
    let setup = started_match(&app).await;
    let base = format!("/api/fixtures/{}", setup.fixture_id);

    let resp = put_json(
        &app,
        &setup.token,
        &format!("{base}/clock"),
        json!({ "seconds": -5 }),
    )
    .await;
    assert_problem_details_from_service_response(
        resp,
        "INVALID_CLOCK",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;

    let state = read_json(
        put_json(
            &app,
            &setup.token,
            &format!("{base}/clock"),
            json!({ "seconds": 600 }),
        )
        .await,
        200,
    )
    .await;
    assert_eq!(state["matchClockSeconds"], 600);

    read_json(
        post_json(&app, &setup.token, &format!("{base}/half-time"), json!({})).await,
        200,
    )
    .await;
    let resp = put_json(
        &app,
        &setup.token,
        &format!("{base}/clock"),
        json!({ "seconds": 2400 }),
    )
    .await;
    assert_problem_details_from_service_response(
        resp,
        "MATCH_NOT_IN_PROGRESS",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;
}

#[actix_web::test]
async fn state_survives_across_reads() {
    let app = test_app(test_state().await).await;
    let setup = started_match(&app).await;

    record(&app, &setup, "AWAY", "DROP_GOAL", 1500).await;

    let state = read_json(
        get(
            &app,
            &setup.token,
            &format!("/api/fixtures/{}/state", setup.fixture_id),
        )
        .await,
        200,
    )
    .await;
    assert_eq!(state["status"], "IN_PROGRESS");
    assert_eq!(state["awayScore"], 3);
}
