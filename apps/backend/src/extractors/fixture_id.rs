use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Fixture ID extracted from the route path parameter.
///
/// A syntactically invalid id is a 400 INVALID_FIXTURE_ID; existence is
/// checked by the service layer, which answers 404 FIXTURE_NOT_FOUND.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct FixtureId(pub Uuid);

impl FromRequest for FixtureId {
    type Error = AppError;
    type Future = std::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = match req.match_info().get("fixture_id") {
            None => Err(AppError::bad_request(
                ErrorCode::InvalidFixtureId,
                "Missing fixture_id parameter",
            )),
            Some(raw) => Uuid::parse_str(raw).map(FixtureId).map_err(|_| {
                AppError::bad_request(
                    ErrorCode::InvalidFixtureId,
                    format!("Invalid fixture id: {raw}"),
                )
            }),
        };
        std::future::ready(result)
    }
}
