//! Club, membership and season routes.

use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use time::macros::format_description;
use time::Date;
use uuid::Uuid;

use crate::adapters::memberships_sea::MembershipCreate;
use crate::adapters::seasons_sea::SeasonCreate;
use crate::db::txn::with_txn;
use crate::entities::memberships::MemberRole;
use crate::error::AppError;
use crate::extractors::{AuthedUser, ValidatedJson};
use crate::services;
use crate::state::app_state::AppState;

pub(crate) fn parse_date(raw: &str, field: &str) -> Result<Date, AppError> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(raw, &format).map_err(|_| {
        AppError::bad_request(
            crate::errors::ErrorCode::BadRequest,
            format!("{field} must be a YYYY-MM-DD date, got {raw}"),
        )
    })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateClubRequest {
    name: String,
}

async fn create_club(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
    user: AuthedUser,
    body: ValidatedJson<CreateClubRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let club = with_txn(Some(&http_req), &app_state, |txn| {
        let user = user.clone();
        Box::pin(async move {
            services::clubs::create_club(txn, body.name, &user.sub, user.name).await
        })
    })
    .await?;
    Ok(HttpResponse::Created().json(club))
}

async fn list_clubs(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
    user: AuthedUser,
) -> Result<HttpResponse, AppError> {
    let clubs = with_txn(Some(&http_req), &app_state, |txn| {
        let sub = user.sub.clone();
        Box::pin(async move { services::clubs::list_clubs(txn, &sub).await })
    })
    .await?;
    Ok(HttpResponse::Ok().json(clubs))
}

async fn get_club(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
    user: AuthedUser,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let club_id = path.into_inner();
    let club = with_txn(Some(&http_req), &app_state, |txn| {
        let sub = user.sub.clone();
        Box::pin(async move { services::clubs::get_club(txn, club_id, &sub).await })
    })
    .await?;
    Ok(HttpResponse::Ok().json(club))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddMemberRequest {
    user_sub: String,
    display_name: String,
    role: MemberRole,
}

async fn add_member(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
    user: AuthedUser,
    path: web::Path<Uuid>,
    body: ValidatedJson<AddMemberRequest>,
) -> Result<HttpResponse, AppError> {
    let club_id = path.into_inner();
    let body = body.into_inner();
    let membership = with_txn(Some(&http_req), &app_state, |txn| {
        let sub = user.sub.clone();
        Box::pin(async move {
            services::clubs::add_member(
                txn,
                MembershipCreate {
                    club_id,
                    user_sub: body.user_sub,
                    display_name: body.display_name,
                    role: body.role,
                },
                &sub,
            )
            .await
        })
    })
    .await?;
    Ok(HttpResponse::Created().json(membership))
}

async fn list_members(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
    user: AuthedUser,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let club_id = path.into_inner();
    let members = with_txn(Some(&http_req), &app_state, |txn| {
        let sub = user.sub.clone();
        Box::pin(async move { services::clubs::list_members(txn, club_id, &sub).await })
    })
    .await?;
    Ok(HttpResponse::Ok().json(members))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateSeasonRequest {
    name: String,
    starts_on: String,
    ends_on: String,
}

async fn create_season(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
    user: AuthedUser,
    path: web::Path<Uuid>,
    body: ValidatedJson<CreateSeasonRequest>,
) -> Result<HttpResponse, AppError> {
    let club_id = path.into_inner();
    let body = body.into_inner();
    let starts_on = parse_date(&body.starts_on, "startsOn")?;
    let ends_on = parse_date(&body.ends_on, "endsOn")?;

    let season = with_txn(Some(&http_req), &app_state, |txn| {
        let sub = user.sub.clone();
        Box::pin(async move {
            services::clubs::create_season(
                txn,
                SeasonCreate {
                    club_id,
                    name: body.name,
                    starts_on,
                    ends_on,
                },
                &sub,
            )
            .await
        })
    })
    .await?;
    Ok(HttpResponse::Created().json(season))
}

async fn list_seasons(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
    user: AuthedUser,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let club_id = path.into_inner();
    let seasons = with_txn(Some(&http_req), &app_state, |txn| {
        let sub = user.sub.clone();
        Box::pin(async move { services::clubs::list_seasons(txn, club_id, &sub).await })
    })
    .await?;
    Ok(HttpResponse::Ok().json(seasons))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/clubs")
            .route(web::post().to(create_club))
            .route(web::get().to(list_clubs)),
    );
    cfg.service(web::resource("/clubs/{club_id}").route(web::get().to(get_club)));
    cfg.service(
        web::resource("/clubs/{club_id}/members")
            .route(web::post().to(add_member))
            .route(web::get().to(list_members)),
    );
    cfg.service(
        web::resource("/clubs/{club_id}/seasons")
            .route(web::post().to(create_season))
            .route(web::get().to(list_seasons)),
    );
}
