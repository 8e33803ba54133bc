//! Fixture routes.

use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::adapters::fixtures_sea::{FixtureCreate, FixtureUpdate};
use crate::db::txn::with_txn;
use crate::entities::fixtures::Venue;
use crate::error::AppError;
use crate::extractors::{AuthedUser, FixtureId, ValidatedJson};
use crate::services;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateFixtureRequest {
    team_id: Uuid,
    season_id: Option<Uuid>,
    opponent: String,
    #[serde(with = "time::serde::rfc3339")]
    kickoff_at: OffsetDateTime,
    venue: Venue,
    location: Option<String>,
}

async fn create_fixture(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
    user: AuthedUser,
    body: ValidatedJson<CreateFixtureRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let fixture = with_txn(Some(&http_req), &app_state, |txn| {
        let sub = user.sub.clone();
        Box::pin(async move {
            services::fixtures::create_fixture(
                txn,
                FixtureCreate {
                    team_id: body.team_id,
                    season_id: body.season_id,
                    opponent: body.opponent,
                    kickoff_at: body.kickoff_at,
                    venue: body.venue,
                    location: body.location,
                },
                &sub,
            )
            .await
        })
    })
    .await?;
    Ok(HttpResponse::Created().json(fixture))
}

async fn get_fixture(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
    user: AuthedUser,
    fixture_id: FixtureId,
) -> Result<HttpResponse, AppError> {
    let fixture = with_txn(Some(&http_req), &app_state, |txn| {
        let sub = user.sub.clone();
        Box::pin(async move { services::fixtures::get_fixture(txn, fixture_id.0, &sub).await })
    })
    .await?;
    Ok(HttpResponse::Ok().json(fixture))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateFixtureRequest {
    opponent: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    kickoff_at: Option<OffsetDateTime>,
    venue: Option<Venue>,
    #[serde(default, deserialize_with = "super::double_option")]
    location: Option<Option<String>>,
}

async fn update_fixture(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
    user: AuthedUser,
    fixture_id: FixtureId,
    body: ValidatedJson<UpdateFixtureRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let fixture = with_txn(Some(&http_req), &app_state, |txn| {
        let sub = user.sub.clone();
        Box::pin(async move {
            services::fixtures::update_fixture(
                txn,
                FixtureUpdate {
                    id: fixture_id.0,
                    opponent: body.opponent,
                    kickoff_at: body.kickoff_at,
                    venue: body.venue,
                    location: body.location,
                },
                &sub,
            )
            .await
        })
    })
    .await?;
    Ok(HttpResponse::Ok().json(fixture))
}

async fn list_fixtures(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
    user: AuthedUser,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let team_id = path.into_inner();
    let fixtures = with_txn(Some(&http_req), &app_state, |txn| {
        let sub = user.sub.clone();
        Box::pin(async move { services::fixtures::list_fixtures(txn, team_id, &sub).await })
    })
    .await?;
    Ok(HttpResponse::Ok().json(fixtures))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/fixtures").route(web::post().to(create_fixture)));
    cfg.service(
        web::resource("/fixtures/{fixture_id}")
            .route(web::get().to(get_fixture))
            .route(web::patch().to(update_fixture)),
    );
    cfg.service(web::resource("/teams/{team_id}/fixtures").route(web::get().to(list_fixtures)));
}
