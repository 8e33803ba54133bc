//! Match state repository: lookups over the SeaORM adapter with domain errors.

use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::adapters::match_states_sea;
use crate::entities::match_states;
use crate::errors::domain::{DomainError, NotFoundKind};

pub async fn find_state<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    fixture_id: Uuid,
) -> Result<Option<match_states::Model>, DomainError> {
    Ok(match_states_sea::find_by_fixture(conn, fixture_id).await?)
}

pub async fn require_state<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    fixture_id: Uuid,
) -> Result<match_states::Model, DomainError> {
    find_state(conn, fixture_id).await?.ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::MatchState,
            format!("No match state for fixture {fixture_id}"),
        )
    })
}
