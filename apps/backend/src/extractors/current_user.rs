use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::Claims;
use crate::error::AppError;

/// The authenticated caller, extracted from JWT claims stored in request
/// extensions by the JwtExtract middleware.
///
/// Club-level authorization happens in the service layer against the
/// memberships table; this type only carries identity.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AuthedUser {
    pub sub: String,
    pub name: String,
}

impl FromRequest for AuthedUser {
    type Error = AppError;
    type Future = std::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<Claims>()
            .map(|claims| AuthedUser {
                sub: claims.sub.clone(),
                name: claims.name.clone(),
            })
            .ok_or_else(AppError::unauthorized_missing_bearer);
        std::future::ready(result)
    }
}
