//! Team archiving: default listings hide archived teams, includeArchived
//! shows them, and only owners may archive.

mod common;

use actix_web::http::StatusCode;
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use common::{get, post_json, read_json, test_app, test_state, token_for};
use serde_json::json;

#[actix_web::test]
async fn archived_teams_are_hidden_unless_requested() {
    let app = test_app(test_state().await).await;
    let token = token_for(&app, "auth0|club-owner", "Sam Whitlock").await;

    let club = read_json(
        post_json(&app, &token, "/api/clubs", json!({ "name": "Valley RFC" })).await,
        201,
    )
    .await;
    let club_id = club["id"].as_str().unwrap().to_string();

    let first = read_json(
        post_json(
            &app,
            &token,
            "/api/teams",
            json!({ "clubId": club_id, "name": "1st XV" }),
        )
        .await,
        201,
    )
    .await;
    let second = read_json(
        post_json(
            &app,
            &token,
            "/api/teams",
            json!({ "clubId": club_id, "name": "2nd XV" }),
        )
        .await,
        201,
    )
    .await;
    let second_id = second["id"].as_str().unwrap().to_string();

    let archived = read_json(
        post_json(
            &app,
            &token,
            &format!("/api/teams/{second_id}/archive"),
            json!({}),
        )
        .await,
        200,
    )
    .await;
    assert_eq!(archived["archived"], true);

    // Default listing hides the archived team
    let teams = read_json(
        get(&app, &token, &format!("/api/clubs/{club_id}/teams")).await,
        200,
    )
    .await;
    let teams = teams.as_array().unwrap();
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0]["id"], first["id"]);

    // includeArchived=true shows both
    let teams = read_json(
        get(
            &app,
            &token,
            &format!("/api/clubs/{club_id}/teams?includeArchived=true"),
        )
        .await,
        200,
    )
    .await;
    assert_eq!(teams.as_array().unwrap().len(), 2);

    // Archived teams stay directly addressable
    let team = read_json(
        get(&app, &token, &format!("/api/teams/{second_id}")).await,
        200,
    )
    .await;
    assert_eq!(team["archived"], true);

    // Unarchive restores the default listing
    let restored = read_json(
        post_json(
            &app,
            &token,
            &format!("/api/teams/{second_id}/unarchive"),
            json!({}),
        )
        .await,
        200,
    )
    .await;
    assert_eq!(restored["archived"], false);

    let teams = read_json(
        get(&app, &token, &format!("/api/clubs/{club_id}/teams")).await,
        200,
    )
    .await;
    assert_eq!(teams.as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn archive_requires_owner_role() {
    let app = test_app(test_state().await).await;
    let owner_token = token_for(&app, "auth0|club-owner", "Sam Whitlock").await;

    let club = read_json(
        post_json(
            &app,
            &owner_token,
            "/api/clubs",
            json!({ "name": "Northgate RFC" }),
        )
        .await,
        201,
    )
    .await;
    let club_id = club["id"].as_str().unwrap().to_string();

    let team = read_json(
        post_json(
            &app,
            &owner_token,
            "/api/teams",
            json!({ "clubId": club_id, "name": "Colts" }),
        )
        .await,
        201,
    )
    .await;
    let team_id = team["id"].as_str().unwrap().to_string();

    read_json(
        post_json(
            &app,
            &owner_token,
            &format!("/api/clubs/{club_id}/members"),
            json!({
                "userSub": "auth0|assistant",
                "displayName": "Alex Reid",
                "role": "COACH",
            }),
        )
        .await,
        201,
    )
    .await;

    let coach_token = token_for(&app, "auth0|assistant", "Alex Reid").await;
    let resp = post_json(
        &app,
        &coach_token,
        &format!("/api/teams/{team_id}/archive"),
        json!({}),
    )
    .await;
    assert_problem_details_from_service_response(
        resp,
        "INSUFFICIENT_ROLE",
        StatusCode::FORBIDDEN,
        None,
    )
    .await;
}

#[actix_web::test]
async fn non_members_cannot_see_the_club() {
    let app = test_app(test_state().await).await;
    let owner_token = token_for(&app, "auth0|club-owner", "Sam Whitlock").await;

    let club = read_json(
        post_json(
            &app,
            &owner_token,
            "/api/clubs",
            json!({ "name": "Eastbrook RFC" }),
        )
        .await,
        201,
    )
    .await;
    let club_id = club["id"].as_str().unwrap().to_string();

    let outsider_token = token_for(&app, "auth0|stranger", "No Affiliation").await;
    let resp = get(&app, &outsider_token, &format!("/api/clubs/{club_id}")).await;
    assert_problem_details_from_service_response(
        resp,
        "NOT_A_MEMBER",
        StatusCode::FORBIDDEN,
        None,
    )
    .await;

    // Club listing is scoped to the caller's memberships
    let clubs = read_json(get(&app, &owner_token, "/api/clubs").await, 200).await;
    assert_eq!(clubs.as_array().unwrap().len(), 1);
    assert_eq!(clubs[0]["name"], "Eastbrook RFC");

    let clubs = read_json(get(&app, &outsider_token, "/api/clubs").await, 200).await;
    assert_eq!(clubs.as_array().unwrap().len(), 0);
}
