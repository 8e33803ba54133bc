//! Lineup submission: jersey assignment, validation, and optimistic locking.

mod common;

use actix_web::http::StatusCode;
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use common::{full_lineup, get, put_json, read_json, seed_matchday, test_app, test_state};
use serde_json::{json, Value};

#[actix_web::test]
async fn put_creates_squad_with_position_jerseys() {
    let app = test_app(test_state().await).await;
    let setup = seed_matchday(&app, 18).await;

    let mut body = full_lineup(&setup.players[..15]);
    body["bench"] = json!([
        { "playerId": setup.players[15] },
        { "playerId": setup.players[16] },
        { "playerId": setup.players[17] },
    ]);

    let uri = format!("/api/fixtures/{}/squads/HOME", setup.fixture_id);
    let resp = put_json(&app, &setup.token, &uri, body).await;
    let squad = read_json(resp, 200).await;

    assert_eq!(squad["side"], "HOME");
    assert_eq!(squad["locked"], false);
    assert_eq!(squad["lockVersion"], 1);

    let starting = squad["starting"].as_array().unwrap();
    assert_eq!(starting.len(), 15);
    for (i, slot) in starting.iter().enumerate() {
        let position = (i + 1) as i64;
        assert_eq!(slot["position"], position);
        // Starting jerseys mirror the position number
        assert_eq!(slot["jerseyNumber"], position);
        assert!(slot["playerId"].is_string());
    }

    let bench = squad["bench"].as_array().unwrap();
    assert_eq!(bench.len(), 3);
    let jerseys: Vec<i64> = bench
        .iter()
        .map(|s| s["jerseyNumber"].as_i64().unwrap())
        .collect();
    assert_eq!(jerseys, vec![16, 17, 18]);

    // Readback matches what was stored
    let resp = get(&app, &setup.token, &uri).await;
    let fetched = read_json(resp, 200).await;
    assert_eq!(fetched["starting"], squad["starting"]);
    assert_eq!(fetched["bench"], squad["bench"]);
}

#[actix_web::test]
async fn unfilled_positions_come_back_empty() {
    let app = test_app(test_state().await).await;
    let setup = seed_matchday(&app, 2).await;

    // Only fly-half and scrum-half named
    let body = json!({
        "starting": [
            { "position": 10, "playerId": setup.players[0] },
            { "position": 9, "playerId": setup.players[1] },
        ],
        "bench": [],
    });

    let resp = put_json(
        &app,
        &setup.token,
        &format!("/api/fixtures/{}/squads/AWAY", setup.fixture_id),
        body,
    )
    .await;
    let squad = read_json(resp, 200).await;

    let starting = squad["starting"].as_array().unwrap();
    assert_eq!(starting.len(), 15, "all 15 slots are always present");
    for slot in starting {
        let position = slot["position"].as_i64().unwrap();
        if position == 9 || position == 10 {
            assert!(slot["playerId"].is_string());
            assert_eq!(slot["jerseyNumber"], position);
        } else {
            assert!(slot["playerId"].is_null());
            assert!(slot["jerseyNumber"].is_null());
        }
    }
}

#[actix_web::test]
async fn duplicate_player_is_rejected() {
    let app = test_app(test_state().await).await;
    let setup = seed_matchday(&app, 15).await;

    let mut body = full_lineup(&setup.players);
    // Same player at positions 1 and 2
    body["starting"][1]["playerId"] = body["starting"][0]["playerId"].clone();

    let resp = put_json(
        &app,
        &setup.token,
        &format!("/api/fixtures/{}/squads/HOME", setup.fixture_id),
        body,
    )
    .await;
    assert_problem_details_from_service_response(
        resp,
        "DUPLICATE_PLAYER",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;
}

#[actix_web::test]
async fn repeated_position_is_rejected() {
    let app = test_app(test_state().await).await;
    let setup = seed_matchday(&app, 15).await;

    let mut body = full_lineup(&setup.players);
    body["starting"][1]["position"] = json!(1);

    let resp = put_json(
        &app,
        &setup.token,
        &format!("/api/fixtures/{}/squads/HOME", setup.fixture_id),
        body,
    )
    .await;
    assert_problem_details_from_service_response(
        resp,
        "INVALID_STARTING_COUNT",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;
}

#[actix_web::test]
async fn bench_overflow_is_rejected() {
    let app = test_app(test_state().await).await;
    let setup = seed_matchday(&app, 31).await;

    let mut body = full_lineup(&setup.players[..15]);
    let bench: Vec<Value> = setup.players[15..31]
        .iter()
        .map(|p| json!({ "playerId": p }))
        .collect();
    assert_eq!(bench.len(), 16);
    body["bench"] = json!(bench);

    let resp = put_json(
        &app,
        &setup.token,
        &format!("/api/fixtures/{}/squads/HOME", setup.fixture_id),
        body,
    )
    .await;
    assert_problem_details_from_service_response(
        resp,
        "BENCH_OVERFLOW",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;
}

#[actix_web::test]
async fn player_from_another_club_is_rejected() {
    let app = test_app(test_state().await).await;
    let setup = seed_matchday(&app, 1).await;

    let body = json!({
        "starting": [
            { "position": 1, "playerId": setup.players[0] },
            { "position": 2, "playerId": uuid::Uuid::new_v4() },
        ],
        "bench": [],
    });

    let resp = put_json(
        &app,
        &setup.token,
        &format!("/api/fixtures/{}/squads/HOME", setup.fixture_id),
        body,
    )
    .await;
    assert_problem_details_from_service_response(
        resp,
        "PLAYER_NOT_IN_CLUB",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;
}

#[actix_web::test]
async fn invalid_side_is_rejected() {
    let app = test_app(test_state().await).await;
    let setup = seed_matchday(&app, 0).await;

    let resp = get(
        &app,
        &setup.token,
        &format!("/api/fixtures/{}/squads/SIDELINE", setup.fixture_id),
    )
    .await;
    assert_problem_details_from_service_response(
        resp,
        "INVALID_SIDE",
        StatusCode::BAD_REQUEST,
        Some("SIDELINE"),
    )
    .await;
}

#[actix_web::test]
async fn update_requires_lock_version() {
    let app = test_app(test_state().await).await;
    let setup = seed_matchday(&app, 15).await;

    let uri = format!("/api/fixtures/{}/squads/HOME", setup.fixture_id);
    let resp = put_json(&app, &setup.token, &uri, full_lineup(&setup.players)).await;
    read_json(resp, 200).await;

    // Second PUT without lockVersion
    let resp = put_json(&app, &setup.token, &uri, full_lineup(&setup.players)).await;
    assert_problem_details_from_service_response(
        resp,
        "VALIDATION_ERROR",
        StatusCode::BAD_REQUEST,
        Some("lockVersion"),
    )
    .await;
}

#[actix_web::test]
async fn stale_lock_version_conflicts() {
    let app = test_app(test_state().await).await;
    let setup = seed_matchday(&app, 16).await;

    let uri = format!("/api/fixtures/{}/squads/HOME", setup.fixture_id);
    let resp = put_json(&app, &setup.token, &uri, full_lineup(&setup.players)).await;
    let squad = read_json(resp, 200).await;
    assert_eq!(squad["lockVersion"], 1);

    // Swap position 1 for the reserve, quoting the current version
    let mut players = setup.players.clone();
    players.swap(0, 15);
    let mut body = full_lineup(&players);
    body["lockVersion"] = json!(1);
    let resp = put_json(&app, &setup.token, &uri, body).await;
    let squad = read_json(resp, 200).await;
    assert_eq!(squad["lockVersion"], 2);

    // Replaying the old version loses
    let mut stale = full_lineup(&setup.players);
    stale["lockVersion"] = json!(1);
    let resp = put_json(&app, &setup.token, &uri, stale).await;
    assert_problem_details_from_service_response(
        resp,
        "OPTIMISTIC_LOCK",
        StatusCode::CONFLICT,
        None,
    )
    .await;
}
