pub mod auth;
pub mod clubs;
pub mod fixtures;
pub mod health;
pub mod match_state;
pub mod players;
pub mod squads;
pub mod teams;
pub mod training;

use actix_web::web;
use serde::{Deserialize, Deserializer};

use crate::middleware::JwtExtract;

/// Distinguish "field absent" from "field: null" in PATCH bodies.
///
/// Use with `#[serde(default, deserialize_with = "double_option")]` on an
/// `Option<Option<T>>` field: absent stays `None`, null becomes `Some(None)`.
pub(crate) fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}

/// Wire up all routes. Everything under /api requires a Bearer token.
pub fn configure(cfg: &mut web::ServiceConfig) {
    health::configure_routes(cfg);
    auth::configure_routes(cfg);

    cfg.service(
        web::scope("/api")
            .wrap(JwtExtract)
            .configure(clubs::configure_routes)
            .configure(teams::configure_routes)
            .configure(players::configure_routes)
            .configure(fixtures::configure_routes)
            .configure(squads::configure_routes)
            .configure(match_state::configure_routes)
            .configure(training::configure_routes),
    );
}
