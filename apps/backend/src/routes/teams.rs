//! Team routes, including archive/restore.

use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::adapters::teams_sea::{TeamCreate, TeamUpdate};
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::{AuthedUser, ValidatedJson};
use crate::services;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateTeamRequest {
    club_id: Uuid,
    name: String,
    age_group: Option<String>,
}

async fn create_team(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
    user: AuthedUser,
    body: ValidatedJson<CreateTeamRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let team = with_txn(Some(&http_req), &app_state, |txn| {
        let sub = user.sub.clone();
        Box::pin(async move {
            services::teams::create_team(
                txn,
                TeamCreate {
                    club_id: body.club_id,
                    name: body.name,
                    age_group: body.age_group,
                },
                &sub,
            )
            .await
        })
    })
    .await?;
    Ok(HttpResponse::Created().json(team))
}

async fn get_team(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
    user: AuthedUser,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let team_id = path.into_inner();
    let team = with_txn(Some(&http_req), &app_state, |txn| {
        let sub = user.sub.clone();
        Box::pin(async move { services::teams::get_team(txn, team_id, &sub).await })
    })
    .await?;
    Ok(HttpResponse::Ok().json(team))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListTeamsQuery {
    #[serde(default)]
    include_archived: bool,
}

async fn list_teams(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
    user: AuthedUser,
    path: web::Path<Uuid>,
    query: web::Query<ListTeamsQuery>,
) -> Result<HttpResponse, AppError> {
    let club_id = path.into_inner();
    let include_archived = query.include_archived;
    let teams = with_txn(Some(&http_req), &app_state, |txn| {
        let sub = user.sub.clone();
        Box::pin(async move {
            services::teams::list_teams(txn, club_id, include_archived, &sub).await
        })
    })
    .await?;
    Ok(HttpResponse::Ok().json(teams))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateTeamRequest {
    name: Option<String>,
    /// Explicit null clears the age group.
    #[serde(default, deserialize_with = "super::double_option")]
    age_group: Option<Option<String>>,
}

async fn update_team(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
    user: AuthedUser,
    path: web::Path<Uuid>,
    body: ValidatedJson<UpdateTeamRequest>,
) -> Result<HttpResponse, AppError> {
    let team_id = path.into_inner();
    let body = body.into_inner();
    let team = with_txn(Some(&http_req), &app_state, |txn| {
        let sub = user.sub.clone();
        Box::pin(async move {
            services::teams::update_team(
                txn,
                TeamUpdate {
                    id: team_id,
                    name: body.name,
                    age_group: body.age_group,
                },
                &sub,
            )
            .await
        })
    })
    .await?;
    Ok(HttpResponse::Ok().json(team))
}

async fn archive_team(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
    user: AuthedUser,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    set_archived(http_req, app_state, user, path.into_inner(), true).await
}

async fn unarchive_team(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
    user: AuthedUser,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    set_archived(http_req, app_state, user, path.into_inner(), false).await
}

async fn set_archived(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
    user: AuthedUser,
    team_id: Uuid,
    archived: bool,
) -> Result<HttpResponse, AppError> {
    let team = with_txn(Some(&http_req), &app_state, |txn| {
        let sub = user.sub.clone();
        Box::pin(async move { services::teams::set_archived(txn, team_id, archived, &sub).await })
    })
    .await?;
    Ok(HttpResponse::Ok().json(team))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/teams").route(web::post().to(create_team)));
    cfg.service(
        web::resource("/teams/{team_id}")
            .route(web::get().to(get_team))
            .route(web::patch().to(update_team)),
    );
    cfg.service(web::resource("/clubs/{club_id}/teams").route(web::get().to(list_teams)));
    cfg.service(web::resource("/teams/{team_id}/archive").route(web::post().to(archive_team)));
    cfg.service(web::resource("/teams/{team_id}/unarchive").route(web::post().to(unarchive_team)));
}
