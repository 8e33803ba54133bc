//! Player and development note routes.

use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::adapters::players_sea::{PlayerCreate, PlayerUpdate};
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::{AuthedUser, ValidatedJson};
use crate::routes::clubs::parse_date;
use crate::services;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatePlayerRequest {
    club_id: Uuid,
    first_name: String,
    last_name: String,
    date_of_birth: Option<String>,
    preferred_position: Option<String>,
}

async fn create_player(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
    user: AuthedUser,
    body: ValidatedJson<CreatePlayerRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let date_of_birth = body
        .date_of_birth
        .as_deref()
        .map(|raw| parse_date(raw, "dateOfBirth"))
        .transpose()?;

    let player = with_txn(Some(&http_req), &app_state, |txn| {
        let sub = user.sub.clone();
        Box::pin(async move {
            services::players::create_player(
                txn,
                PlayerCreate {
                    club_id: body.club_id,
                    first_name: body.first_name,
                    last_name: body.last_name,
                    date_of_birth,
                    preferred_position: body.preferred_position,
                },
                &sub,
            )
            .await
        })
    })
    .await?;
    Ok(HttpResponse::Created().json(player))
}

async fn get_player(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
    user: AuthedUser,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let player_id = path.into_inner();
    let player = with_txn(Some(&http_req), &app_state, |txn| {
        let sub = user.sub.clone();
        Box::pin(async move { services::players::get_player(txn, player_id, &sub).await })
    })
    .await?;
    Ok(HttpResponse::Ok().json(player))
}

async fn list_players(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
    user: AuthedUser,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let club_id = path.into_inner();
    let players = with_txn(Some(&http_req), &app_state, |txn| {
        let sub = user.sub.clone();
        Box::pin(async move { services::players::list_players(txn, club_id, &sub).await })
    })
    .await?;
    Ok(HttpResponse::Ok().json(players))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdatePlayerRequest {
    first_name: Option<String>,
    last_name: Option<String>,
    #[serde(default, deserialize_with = "super::double_option")]
    date_of_birth: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::double_option")]
    preferred_position: Option<Option<String>>,
}

async fn update_player(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
    user: AuthedUser,
    path: web::Path<Uuid>,
    body: ValidatedJson<UpdatePlayerRequest>,
) -> Result<HttpResponse, AppError> {
    let player_id = path.into_inner();
    let body = body.into_inner();
    let date_of_birth = match body.date_of_birth {
        None => None,
        Some(None) => Some(None),
        Some(Some(raw)) => Some(Some(parse_date(&raw, "dateOfBirth")?)),
    };

    let player = with_txn(Some(&http_req), &app_state, |txn| {
        let sub = user.sub.clone();
        Box::pin(async move {
            services::players::update_player(
                txn,
                player_id,
                PlayerUpdate {
                    first_name: body.first_name,
                    last_name: body.last_name,
                    date_of_birth,
                    preferred_position: body.preferred_position,
                },
                &sub,
            )
            .await
        })
    })
    .await?;
    Ok(HttpResponse::Ok().json(player))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddNoteRequest {
    note: String,
}

async fn add_note(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
    user: AuthedUser,
    path: web::Path<Uuid>,
    body: ValidatedJson<AddNoteRequest>,
) -> Result<HttpResponse, AppError> {
    let player_id = path.into_inner();
    let body = body.into_inner();
    let note = with_txn(Some(&http_req), &app_state, |txn| {
        let sub = user.sub.clone();
        Box::pin(async move { services::players::add_note(txn, player_id, body.note, &sub).await })
    })
    .await?;
    Ok(HttpResponse::Created().json(note))
}

async fn list_notes(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
    user: AuthedUser,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let player_id = path.into_inner();
    let notes = with_txn(Some(&http_req), &app_state, |txn| {
        let sub = user.sub.clone();
        Box::pin(async move { services::players::list_notes(txn, player_id, &sub).await })
    })
    .await?;
    Ok(HttpResponse::Ok().json(notes))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/players").route(web::post().to(create_player)));
    cfg.service(
        web::resource("/players/{player_id}")
            .route(web::get().to(get_player))
            .route(web::patch().to(update_player)),
    );
    cfg.service(web::resource("/clubs/{club_id}/players").route(web::get().to(list_players)));
    cfg.service(
        web::resource("/players/{player_id}/notes")
            .route(web::post().to(add_note))
            .route(web::get().to(list_notes)),
    );
}
