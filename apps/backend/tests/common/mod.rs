#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::{BoxBody, EitherBody};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::header;
use actix_web::{test, web, App, Error as ActixError};
use serde_json::{json, Value};
use uuid::Uuid;

use backend::config::db::{DbOwner, DbProfile};
use backend::infra::db::bootstrap_db;
use backend::middleware::cors::cors_middleware;
use backend::middleware::request_trace::RequestTrace;
use backend::middleware::structured_logger::StructuredLogger;
use backend::middleware::trace_span::TraceSpan;
use backend::routes;
use backend::state::app_state::AppState;
use backend::state::security_config::SecurityConfig;

// Logging is auto-installed for most test binaries
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Shorthand for the opaque Actix test service type.
pub trait TestApp:
    Service<actix_http::Request, Response = ServiceResponse<EitherBody<BoxBody>>, Error = ActixError>
{
}

impl<T> TestApp for T where
    T: Service<actix_http::Request, Response = ServiceResponse<EitherBody<BoxBody>>, Error = ActixError>
{
}

/// Build an AppState backed by a fresh in-memory SQLite database with the
/// full schema applied. Each call gets its own database, so tests are
/// isolated without transaction tricks.
pub async fn test_state() -> AppState {
    let conn = bootstrap_db(DbProfile::SqliteMemory, DbOwner::App)
        .await
        .expect("in-memory database should bootstrap");
    AppState::new(conn, SecurityConfig::new(b"integration-test-secret"))
}

/// Build an initialized test service with the production middleware chain
/// and routes.
pub async fn test_app(state: AppState) -> impl TestApp {
    test::init_service(
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await
}

/// Call the service, converting service-level errors into the same
/// problem+json responses the real HTTP server would produce. Needed for
/// requests rejected by middleware (e.g. the JWT boundary), which surface
/// as `Err` rather than an error response when calling the service directly.
pub async fn call_service_or_error(
    app: &impl TestApp,
    req: actix_http::Request,
) -> ServiceResponse<EitherBody<BoxBody>> {
    match app.call(req).await {
        Ok(resp) => resp,
        Err(err) => {
            let response = err.error_response().map_into_right_body();
            let dummy_request = test::TestRequest::default().to_http_request();
            ServiceResponse::new(dummy_request, response)
        }
    }
}

/// Mint a token through the dev token endpoint.
pub async fn token_for(app: &impl TestApp, sub: &str, name: &str) -> String {
    let req = test::TestRequest::post()
        .uri("/auth/token")
        .set_json(json!({ "sub": sub, "name": name }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert!(resp.status().is_success(), "token mint should succeed");
    let body: Value = test::read_body_json(resp).await;
    body["token"]
        .as_str()
        .expect("token field should be a string")
        .to_string()
}

pub async fn get(app: &impl TestApp, token: &str, uri: &str) -> ServiceResponse<EitherBody<BoxBody>> {
    let req = test::TestRequest::get()
        .uri(uri)
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .to_request();
    test::call_service(app, req).await
}

pub async fn post_json(
    app: &impl TestApp,
    token: &str,
    uri: &str,
    body: Value,
) -> ServiceResponse<EitherBody<BoxBody>> {
    let req = test::TestRequest::post()
        .uri(uri)
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .set_json(body)
        .to_request();
    test::call_service(app, req).await
}

pub async fn put_json(
    app: &impl TestApp,
    token: &str,
    uri: &str,
    body: Value,
) -> ServiceResponse<EitherBody<BoxBody>> {
    let req = test::TestRequest::put()
        .uri(uri)
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .set_json(body)
        .to_request();
    test::call_service(app, req).await
}

pub async fn patch_json(
    app: &impl TestApp,
    token: &str,
    uri: &str,
    body: Value,
) -> ServiceResponse<EitherBody<BoxBody>> {
    let req = test::TestRequest::patch()
        .uri(uri)
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .set_json(body)
        .to_request();
    test::call_service(app, req).await
}

pub async fn delete(app: &impl TestApp, token: &str, uri: &str) -> ServiceResponse<EitherBody<BoxBody>> {
    let req = test::TestRequest::delete()
        .uri(uri)
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .to_request();
    test::call_service(app, req).await
}

/// Read a JSON body, asserting the expected status first.
pub async fn read_json(resp: ServiceResponse<EitherBody<BoxBody>>, expected_status: u16) -> Value {
    let status = resp.status().as_u16();
    let body = test::read_body(resp).await;
    let body_str = std::str::from_utf8(&body).expect("body should be UTF-8");
    assert_eq!(
        status, expected_status,
        "unexpected status (body: {body_str})"
    );
    serde_json::from_str(body_str).unwrap_or_else(|_| panic!("body should be JSON: {body_str}"))
}

fn id_of(body: &Value) -> Uuid {
    body["id"]
        .as_str()
        .expect("id field should be a string")
        .parse()
        .expect("id field should be a UUID")
}

/// A club with one team, a roster of players, and one upcoming fixture.
/// The token belongs to the club's owner.
pub struct MatchdaySetup {
    pub token: String,
    pub club_id: Uuid,
    pub team_id: Uuid,
    pub fixture_id: Uuid,
    pub players: Vec<Uuid>,
}

/// Seed a club/team/roster/fixture through the public API.
pub async fn seed_matchday(app: &impl TestApp, roster_size: usize) -> MatchdaySetup {
    let token = token_for(app, "auth0|coach-taylor", "Coach Taylor").await;

    let resp = post_json(
        app,
        &token,
        "/api/clubs",
        json!({ "name": format!("Harbourside RFC {}", Uuid::new_v4()) }),
    )
    .await;
    let club = read_json(resp, 201).await;
    let club_id = id_of(&club);

    let resp = post_json(
        app,
        &token,
        "/api/teams",
        json!({ "clubId": club_id, "name": "1st XV", "ageGroup": "Senior" }),
    )
    .await;
    let team = read_json(resp, 201).await;
    let team_id = id_of(&team);

    let mut players = Vec::with_capacity(roster_size);
    for n in 0..roster_size {
        let resp = post_json(
            app,
            &token,
            "/api/players",
            json!({
                "clubId": club_id,
                "firstName": "Player",
                "lastName": format!("Number{n}"),
            }),
        )
        .await;
        let player = read_json(resp, 201).await;
        players.push(id_of(&player));
    }

    let resp = post_json(
        app,
        &token,
        "/api/fixtures",
        json!({
            "teamId": team_id,
            "opponent": "Riverside Barbarians",
            "kickoffAt": "2026-09-05T14:30:00Z",
            "venue": "HOME",
            "location": "Harbourside Memorial Ground",
        }),
    )
    .await;
    let fixture = read_json(resp, 201).await;
    let fixture_id = id_of(&fixture);

    MatchdaySetup {
        token,
        club_id,
        team_id,
        fixture_id,
        players,
    }
}

/// Build a full 15-slot starting lineup body from the first 15 players.
pub fn full_lineup(players: &[Uuid]) -> Value {
    let starting: Vec<Value> = players
        .iter()
        .take(15)
        .enumerate()
        .map(|(i, p)| json!({ "position": i + 1, "playerId": p }))
        .collect();
    json!({ "starting": starting, "bench": [] })
}

/// Submit complete HOME and AWAY squads for the fixture.
pub async fn put_both_squads(app: &impl TestApp, setup: &MatchdaySetup) {
    assert!(
        setup.players.len() >= 30,
        "need at least 30 players for two full squads"
    );
    for (side, range) in [("HOME", 0..15), ("AWAY", 15..30)] {
        let resp = put_json(
            app,
            &setup.token,
            &format!("/api/fixtures/{}/squads/{side}", setup.fixture_id),
            full_lineup(&setup.players[range]),
        )
        .await;
        read_json(resp, 200).await;
    }
}
