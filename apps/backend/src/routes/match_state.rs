//! Live match routes: lifecycle transitions, clock, and events.

use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::db::txn::with_txn;
use crate::entities::match_events::{self, EventKind};
use crate::entities::match_squads::SquadSide;
use crate::entities::match_states::{self, MatchHalf, MatchStatus};
use crate::error::AppError;
use crate::extractors::{AuthedUser, FixtureId, ValidatedJson};
use crate::services::match_flow::{self, RecordEvent};
use crate::state::app_state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MatchStateResponse {
    fixture_id: Uuid,
    status: MatchStatus,
    half: MatchHalf,
    home_score: i32,
    away_score: i32,
    match_clock_seconds: i32,
    #[serde(with = "time::serde::rfc3339::option")]
    started_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    completed_at: Option<OffsetDateTime>,
    lock_version: i32,
}

impl From<match_states::Model> for MatchStateResponse {
    fn from(m: match_states::Model) -> Self {
        MatchStateResponse {
            fixture_id: m.fixture_id,
            status: m.status,
            half: m.half,
            home_score: m.home_score,
            away_score: m.away_score,
            match_clock_seconds: m.match_clock_seconds,
            started_at: m.started_at,
            completed_at: m.completed_at,
            lock_version: m.lock_version,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EventResponse {
    id: Uuid,
    fixture_id: Uuid,
    side: SquadSide,
    kind: EventKind,
    player_id: Option<Uuid>,
    match_clock_seconds: i32,
}

impl From<match_events::Model> for EventResponse {
    fn from(e: match_events::Model) -> Self {
        EventResponse {
            id: e.id,
            fixture_id: e.fixture_id,
            side: e.side,
            kind: e.kind,
            player_id: e.player_id,
            match_clock_seconds: e.match_clock_seconds,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StartMatchResponse {
    state: MatchStateResponse,
    warnings: Vec<String>,
}

async fn start_match(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
    user: AuthedUser,
    fixture_id: FixtureId,
) -> Result<HttpResponse, AppError> {
    let outcome = with_txn(Some(&http_req), &app_state, |txn| {
        let sub = user.sub.clone();
        Box::pin(async move { match_flow::start_match(txn, fixture_id.0, &sub).await })
    })
    .await?;
    Ok(HttpResponse::Created().json(StartMatchResponse {
        state: outcome.state.into(),
        warnings: outcome.warnings,
    }))
}

async fn get_state(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
    user: AuthedUser,
    fixture_id: FixtureId,
) -> Result<HttpResponse, AppError> {
    let state = with_txn(Some(&http_req), &app_state, |txn| {
        let sub = user.sub.clone();
        Box::pin(async move { match_flow::get_state(txn, fixture_id.0, &sub).await })
    })
    .await?;
    Ok(HttpResponse::Ok().json(MatchStateResponse::from(state)))
}

async fn half_time(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
    user: AuthedUser,
    fixture_id: FixtureId,
) -> Result<HttpResponse, AppError> {
    let state = with_txn(Some(&http_req), &app_state, |txn| {
        let sub = user.sub.clone();
        Box::pin(async move { match_flow::half_time(txn, fixture_id.0, &sub).await })
    })
    .await?;
    Ok(HttpResponse::Ok().json(MatchStateResponse::from(state)))
}

async fn second_half(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
    user: AuthedUser,
    fixture_id: FixtureId,
) -> Result<HttpResponse, AppError> {
    let state = with_txn(Some(&http_req), &app_state, |txn| {
        let sub = user.sub.clone();
        Box::pin(async move { match_flow::second_half(txn, fixture_id.0, &sub).await })
    })
    .await?;
    Ok(HttpResponse::Ok().json(MatchStateResponse::from(state)))
}

async fn complete_match(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
    user: AuthedUser,
    fixture_id: FixtureId,
) -> Result<HttpResponse, AppError> {
    let state = with_txn(Some(&http_req), &app_state, |txn| {
        let sub = user.sub.clone();
        Box::pin(async move { match_flow::complete_match(txn, fixture_id.0, &sub).await })
    })
    .await?;
    Ok(HttpResponse::Ok().json(MatchStateResponse::from(state)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClockRequest {
    seconds: i32,
}

async fn set_clock(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
    user: AuthedUser,
    fixture_id: FixtureId,
    body: ValidatedJson<ClockRequest>,
) -> Result<HttpResponse, AppError> {
    let seconds = body.into_inner().seconds;
    let state = with_txn(Some(&http_req), &app_state, |txn| {
        let sub = user.sub.clone();
        Box::pin(async move { match_flow::set_clock(txn, fixture_id.0, seconds, &sub).await })
    })
    .await?;
    Ok(HttpResponse::Ok().json(MatchStateResponse::from(state)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecordEventRequest {
    side: SquadSide,
    kind: EventKind,
    player_id: Option<Uuid>,
    match_clock_seconds: i32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecordEventResponse {
    event: EventResponse,
    state: MatchStateResponse,
}

async fn record_event(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
    user: AuthedUser,
    fixture_id: FixtureId,
    body: ValidatedJson<RecordEventRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let (event, state) = with_txn(Some(&http_req), &app_state, |txn| {
        let sub = user.sub.clone();
        Box::pin(async move {
            match_flow::record_event(
                txn,
                fixture_id.0,
                RecordEvent {
                    side: body.side,
                    kind: body.kind,
                    player_id: body.player_id,
                    match_clock_seconds: body.match_clock_seconds,
                },
                &sub,
            )
            .await
        })
    })
    .await?;
    Ok(HttpResponse::Created().json(RecordEventResponse {
        event: event.into(),
        state: state.into(),
    }))
}

async fn list_events(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
    user: AuthedUser,
    fixture_id: FixtureId,
) -> Result<HttpResponse, AppError> {
    let events = with_txn(Some(&http_req), &app_state, |txn| {
        let sub = user.sub.clone();
        Box::pin(async move { match_flow::list_events(txn, fixture_id.0, &sub).await })
    })
    .await?;
    let events: Vec<EventResponse> = events.into_iter().map(EventResponse::from).collect();
    Ok(HttpResponse::Ok().json(events))
}

async fn delete_event(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
    user: AuthedUser,
    fixture_id: FixtureId,
    path: web::Path<(String, Uuid)>,
) -> Result<HttpResponse, AppError> {
    let (_, event_id) = path.into_inner();
    let state = with_txn(Some(&http_req), &app_state, |txn| {
        let sub = user.sub.clone();
        Box::pin(async move { match_flow::delete_event(txn, fixture_id.0, event_id, &sub).await })
    })
    .await?;
    Ok(HttpResponse::Ok().json(MatchStateResponse::from(state)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/fixtures/{fixture_id}/start").route(web::post().to(start_match)));
    cfg.service(web::resource("/fixtures/{fixture_id}/state").route(web::get().to(get_state)));
    cfg.service(web::resource("/fixtures/{fixture_id}/half-time").route(web::post().to(half_time)));
    cfg.service(
        web::resource("/fixtures/{fixture_id}/second-half").route(web::post().to(second_half)),
    );
    cfg.service(
        web::resource("/fixtures/{fixture_id}/complete").route(web::post().to(complete_match)),
    );
    cfg.service(web::resource("/fixtures/{fixture_id}/clock").route(web::put().to(set_clock)));
    cfg.service(
        web::resource("/fixtures/{fixture_id}/events")
            .route(web::post().to(record_event))
            .route(web::get().to(list_events)),
    );
    cfg.service(
        web::resource("/fixtures/{fixture_id}/events/{event_id}")
            .route(web::delete().to(delete_event)),
    );
}
