//! Team management: creation, metadata updates, archiving.

use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::adapters::teams_sea::{self, TeamCreate, TeamUpdate};
use crate::entities::memberships::MemberRole;
use crate::entities::teams;
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos;

async fn require_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: Uuid,
) -> Result<teams::Model, AppError> {
    teams_sea::find_by_id(conn, team_id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Team, format!("Team {team_id} not found")).into()
    })
}

pub async fn create_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: TeamCreate,
    user_sub: &str,
) -> Result<teams::Model, AppError> {
    repos::memberships::require_role(conn, dto.club_id, user_sub, MemberRole::Coach).await?;
    let team = teams_sea::create_team(conn, dto).await?;
    tracing::info!(team_id = %team.id, club_id = %team.club_id, "team created");
    Ok(team)
}

pub async fn get_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: Uuid,
    user_sub: &str,
) -> Result<teams::Model, AppError> {
    let team = require_team(conn, team_id).await?;
    repos::memberships::require_role(conn, team.club_id, user_sub, MemberRole::Member).await?;
    Ok(team)
}

pub async fn list_teams<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    club_id: Uuid,
    include_archived: bool,
    user_sub: &str,
) -> Result<Vec<teams::Model>, AppError> {
    repos::memberships::require_role(conn, club_id, user_sub, MemberRole::Member).await?;
    Ok(teams_sea::list_by_club(conn, club_id, include_archived).await?)
}

pub async fn update_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: TeamUpdate,
    user_sub: &str,
) -> Result<teams::Model, AppError> {
    let team = require_team(conn, dto.id).await?;
    repos::memberships::require_role(conn, team.club_id, user_sub, MemberRole::Coach).await?;
    Ok(teams_sea::update_team(conn, dto).await?)
}

/// Archive or restore a team. Archived teams drop out of default listings
/// but keep their history; only owners may flip this.
pub async fn set_archived<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: Uuid,
    archived: bool,
    user_sub: &str,
) -> Result<teams::Model, AppError> {
    let team = require_team(conn, team_id).await?;
    repos::memberships::require_role(conn, team.club_id, user_sub, MemberRole::Owner).await?;
    let team = teams_sea::set_archived(conn, team_id, archived).await?;
    tracing::info!(team_id = %team.id, archived, "team archive flag changed");
    Ok(team)
}
