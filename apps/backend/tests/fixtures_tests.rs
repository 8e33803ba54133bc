//! Fixture scheduling and amendment.

mod common;

use common::{get, patch_json, read_json, seed_matchday, test_app, test_state};
use serde_json::json;

#[actix_web::test]
async fn fixtures_can_be_amended() {
    let app = test_app(test_state().await).await;
    let setup = seed_matchday(&app, 0).await;

    let fixture = read_json(
        patch_json(
            &app,
            &setup.token,
            &format!("/api/fixtures/{}", setup.fixture_id),
            json!({
                "kickoffAt": "2026-09-06T15:00:00Z",
                "venue": "AWAY",
                "location": "Riverside Memorial Ground",
            }),
        )
        .await,
        200,
    )
    .await;
    assert_eq!(fixture["venue"], "AWAY");
    assert_eq!(fixture["location"], "Riverside Memorial Ground");
    // Untouched fields survive a partial update
    assert_eq!(fixture["opponent"], "Riverside Barbarians");

    // Clearing the location with an explicit null
    let fixture = read_json(
        patch_json(
            &app,
            &setup.token,
            &format!("/api/fixtures/{}", setup.fixture_id),
            json!({ "location": null }),
        )
        .await,
        200,
    )
    .await;
    assert!(fixture["location"].is_null());

    let listed = read_json(
        get(
            &app,
            &setup.token,
            &format!("/api/teams/{}/fixtures", setup.team_id),
        )
        .await,
        200,
    )
    .await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["venue"], "AWAY");
}
