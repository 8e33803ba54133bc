//! Training session routes.

use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::adapters::training_sea::{TrainingCreate, TrainingUpdate};
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::{AuthedUser, ValidatedJson};
use crate::services;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateSessionRequest {
    team_id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    starts_at: OffsetDateTime,
    duration_minutes: i32,
    location: Option<String>,
    focus: Option<String>,
}

async fn create_session(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
    user: AuthedUser,
    body: ValidatedJson<CreateSessionRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let session = with_txn(Some(&http_req), &app_state, |txn| {
        let sub = user.sub.clone();
        Box::pin(async move {
            services::training::create_session(
                txn,
                TrainingCreate {
                    team_id: body.team_id,
                    starts_at: body.starts_at,
                    duration_minutes: body.duration_minutes,
                    location: body.location,
                    focus: body.focus,
                },
                &sub,
            )
            .await
        })
    })
    .await?;
    Ok(HttpResponse::Created().json(session))
}

async fn list_sessions(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
    user: AuthedUser,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let team_id = path.into_inner();
    let sessions = with_txn(Some(&http_req), &app_state, |txn| {
        let sub = user.sub.clone();
        Box::pin(async move { services::training::list_sessions(txn, team_id, &sub).await })
    })
    .await?;
    Ok(HttpResponse::Ok().json(sessions))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateSessionRequest {
    #[serde(default, with = "time::serde::rfc3339::option")]
    starts_at: Option<OffsetDateTime>,
    duration_minutes: Option<i32>,
    #[serde(default, deserialize_with = "super::double_option")]
    location: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::double_option")]
    focus: Option<Option<String>>,
}

async fn update_session(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
    user: AuthedUser,
    path: web::Path<Uuid>,
    body: ValidatedJson<UpdateSessionRequest>,
) -> Result<HttpResponse, AppError> {
    let session_id = path.into_inner();
    let body = body.into_inner();
    let session = with_txn(Some(&http_req), &app_state, |txn| {
        let sub = user.sub.clone();
        Box::pin(async move {
            services::training::update_session(
                txn,
                session_id,
                TrainingUpdate {
                    starts_at: body.starts_at,
                    duration_minutes: body.duration_minutes,
                    location: body.location,
                    focus: body.focus,
                },
                &sub,
            )
            .await
        })
    })
    .await?;
    Ok(HttpResponse::Ok().json(session))
}

async fn delete_session(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
    user: AuthedUser,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let session_id = path.into_inner();
    with_txn(Some(&http_req), &app_state, |txn| {
        let sub = user.sub.clone();
        Box::pin(async move { services::training::delete_session(txn, session_id, &sub).await })
    })
    .await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/training-sessions").route(web::post().to(create_session)));
    cfg.service(
        web::resource("/training-sessions/{session_id}")
            .route(web::patch().to(update_session))
            .route(web::delete().to(delete_session)),
    );
    cfg.service(
        web::resource("/teams/{team_id}/training-sessions").route(web::get().to(list_sessions)),
    );
}
