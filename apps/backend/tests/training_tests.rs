//! Training session scheduling.

mod common;

use actix_web::http::StatusCode;
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use common::{delete, get, patch_json, post_json, read_json, test_app, test_state, token_for};
use serde_json::json;

#[actix_web::test]
async fn sessions_can_be_scheduled_amended_and_cancelled() {
    let app = test_app(test_state().await).await;
    let token = token_for(&app, "auth0|head-coach", "Head Coach").await;

    let club = read_json(
        post_json(&app, &token, "/api/clubs", json!({ "name": "Westport RFC" })).await,
        201,
    )
    .await;
    let team = read_json(
        post_json(
            &app,
            &token,
            "/api/teams",
            json!({ "clubId": club["id"], "name": "U16" }),
        )
        .await,
        201,
    )
    .await;
    let team_id = team["id"].as_str().unwrap().to_string();

    let session = read_json(
        post_json(
            &app,
            &token,
            "/api/training-sessions",
            json!({
                "teamId": team_id,
                "startsAt": "2026-09-01T18:00:00Z",
                "durationMinutes": 90,
                "location": "Main pitch",
                "focus": "Lineout throws",
            }),
        )
        .await,
        201,
    )
    .await;
    let session_id = session["id"].as_str().unwrap().to_string();
    assert_eq!(session["duration_minutes"], 90);

    // Move it and clear the focus
    let updated = read_json(
        patch_json(
            &app,
            &token,
            &format!("/api/training-sessions/{session_id}"),
            json!({ "startsAt": "2026-09-02T18:00:00Z", "focus": null }),
        )
        .await,
        200,
    )
    .await;
    assert!(updated["focus"].is_null());
    assert_eq!(updated["location"], "Main pitch");

    let sessions = read_json(
        get(
            &app,
            &token,
            &format!("/api/teams/{team_id}/training-sessions"),
        )
        .await,
        200,
    )
    .await;
    assert_eq!(sessions.as_array().unwrap().len(), 1);

    let resp = delete(
        &app,
        &token,
        &format!("/api/training-sessions/{session_id}"),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 204);

    let sessions = read_json(
        get(
            &app,
            &token,
            &format!("/api/teams/{team_id}/training-sessions"),
        )
        .await,
        200,
    )
    .await;
    assert_eq!(sessions.as_array().unwrap().len(), 0);
}

#[actix_web::test]
async fn non_positive_duration_is_rejected() {
    let app = test_app(test_state().await).await;
    let token = token_for(&app, "auth0|head-coach", "Head Coach").await;

    let club = read_json(
        post_json(&app, &token, "/api/clubs", json!({ "name": "Southbank RFC" })).await,
        201,
    )
    .await;
    let team = read_json(
        post_json(
            &app,
            &token,
            "/api/teams",
            json!({ "clubId": club["id"], "name": "U14" }),
        )
        .await,
        201,
    )
    .await;

    let resp = post_json(
        &app,
        &token,
        "/api/training-sessions",
        json!({
            "teamId": team["id"],
            "startsAt": "2026-09-01T18:00:00Z",
            "durationMinutes": 0,
        }),
    )
    .await;
    assert_problem_details_from_service_response(
        resp,
        "VALIDATION_ERROR",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;
}
