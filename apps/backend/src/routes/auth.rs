//! Token minting for development and tests.
//!
//! Production deployments sit behind an identity provider; this endpoint
//! exists so the mobile app and integration tests can obtain a backend
//! token without one.

use std::time::SystemTime;

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::mint_access_token;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenRequest {
    sub: String,
    name: String,
}

#[derive(Serialize)]
struct TokenResponse {
    token: String,
}

async fn mint_token(
    app_state: web::Data<AppState>,
    body: ValidatedJson<TokenRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let token = mint_access_token(&body.sub, &body.name, SystemTime::now(), &app_state.security)?;
    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/auth/token").route(web::post().to(mint_token)));
}
