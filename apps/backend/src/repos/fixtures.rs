//! Fixture repository: domain-level lookups over the SeaORM adapter.

use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::adapters::{fixtures_sea, teams_sea};
use crate::entities::fixtures;
use crate::errors::domain::{DomainError, NotFoundKind};

pub async fn find_fixture<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    fixture_id: Uuid,
) -> Result<Option<fixtures::Model>, DomainError> {
    Ok(fixtures_sea::find_by_id(conn, fixture_id).await?)
}

pub async fn require_fixture<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    fixture_id: Uuid,
) -> Result<fixtures::Model, DomainError> {
    find_fixture(conn, fixture_id).await?.ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::Fixture,
            format!("Fixture {fixture_id} not found"),
        )
    })
}

/// Resolve the club a fixture belongs to, via its team.
pub async fn fixture_club_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    fixture: &fixtures::Model,
) -> Result<Uuid, DomainError> {
    let team = teams_sea::find_by_id(conn, fixture.team_id)
        .await?
        .ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Team,
                format!("Team {} not found", fixture.team_id),
            )
        })?;
    Ok(team.club_id)
}
