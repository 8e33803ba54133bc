//! Fixture scheduling.

use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::adapters::{fixtures_sea, seasons_sea, teams_sea};
use crate::adapters::fixtures_sea::{FixtureCreate, FixtureUpdate};
use crate::entities::fixtures;
use crate::entities::memberships::MemberRole;
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos;

pub async fn create_fixture<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: FixtureCreate,
    user_sub: &str,
) -> Result<fixtures::Model, AppError> {
    let team = teams_sea::find_by_id(conn, dto.team_id).await?.ok_or_else(|| {
        AppError::from(DomainError::not_found(
            NotFoundKind::Team,
            format!("Team {} not found", dto.team_id),
        ))
    })?;
    repos::memberships::require_role(conn, team.club_id, user_sub, MemberRole::Coach).await?;

    if let Some(season_id) = dto.season_id {
        let season = seasons_sea::find_by_id(conn, season_id).await?.ok_or_else(|| {
            AppError::from(DomainError::not_found(
                NotFoundKind::Season,
                format!("Season {season_id} not found"),
            ))
        })?;
        if season.club_id != team.club_id {
            return Err(
                DomainError::validation_other("Season belongs to a different club").into(),
            );
        }
    }

    let fixture = fixtures_sea::create_fixture(conn, dto).await?;
    tracing::info!(fixture_id = %fixture.id, team_id = %fixture.team_id, "fixture created");
    Ok(fixture)
}

pub async fn get_fixture<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    fixture_id: Uuid,
    user_sub: &str,
) -> Result<fixtures::Model, AppError> {
    let fixture = repos::fixtures::require_fixture(conn, fixture_id).await?;
    let club_id = repos::fixtures::fixture_club_id(conn, &fixture).await?;
    repos::memberships::require_role(conn, club_id, user_sub, MemberRole::Member).await?;
    Ok(fixture)
}

pub async fn update_fixture<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: FixtureUpdate,
    user_sub: &str,
) -> Result<fixtures::Model, AppError> {
    let fixture = repos::fixtures::require_fixture(conn, dto.id).await?;
    let club_id = repos::fixtures::fixture_club_id(conn, &fixture).await?;
    repos::memberships::require_role(conn, club_id, user_sub, MemberRole::Coach).await?;
    let fixture = fixtures_sea::update_fixture(conn, dto).await?;
    tracing::info!(fixture_id = %fixture.id, "fixture updated");
    Ok(fixture)
}

pub async fn list_fixtures<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: Uuid,
    user_sub: &str,
) -> Result<Vec<fixtures::Model>, AppError> {
    let team = teams_sea::find_by_id(conn, team_id).await?.ok_or_else(|| {
        AppError::from(DomainError::not_found(
            NotFoundKind::Team,
            format!("Team {team_id} not found"),
        ))
    })?;
    repos::memberships::require_role(conn, team.club_id, user_sub, MemberRole::Member).await?;
    Ok(fixtures_sea::list_by_team(conn, team_id).await?)
}
