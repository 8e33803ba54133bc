//! Club administration: clubs, memberships and seasons.

use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::adapters::clubs_sea::{self, ClubCreate};
use crate::adapters::memberships_sea::{self, MembershipCreate};
use crate::adapters::seasons_sea::{self, SeasonCreate};
use crate::entities::memberships::{self, MemberRole};
use crate::entities::{clubs, seasons};
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos;

/// Create a club; the creator becomes its OWNER.
pub async fn create_club<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: String,
    user_sub: &str,
    display_name: String,
) -> Result<clubs::Model, AppError> {
    let club = clubs_sea::create_club(conn, ClubCreate { name }).await?;
    memberships_sea::create_membership(
        conn,
        MembershipCreate {
            club_id: club.id,
            user_sub: user_sub.to_string(),
            display_name,
            role: MemberRole::Owner,
        },
    )
    .await?;
    tracing::info!(club_id = %club.id, "club created");
    Ok(club)
}

/// Clubs the caller is a member of. No role check: membership itself is the filter.
pub async fn list_clubs<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_sub: &str,
) -> Result<Vec<clubs::Model>, AppError> {
    Ok(clubs_sea::list_for_user(conn, user_sub).await?)
}

pub async fn get_club<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    club_id: Uuid,
    user_sub: &str,
) -> Result<clubs::Model, AppError> {
    repos::memberships::require_role(conn, club_id, user_sub, MemberRole::Member).await?;
    clubs_sea::find_by_id(conn, club_id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Club, format!("Club {club_id} not found")).into()
    })
}

/// Add a member to a club. Owner only.
pub async fn add_member<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: MembershipCreate,
    user_sub: &str,
) -> Result<memberships::Model, AppError> {
    repos::memberships::require_role(conn, dto.club_id, user_sub, MemberRole::Owner).await?;
    let membership = memberships_sea::create_membership(conn, dto).await?;
    tracing::info!(
        club_id = %membership.club_id,
        role = ?membership.role,
        "member added"
    );
    Ok(membership)
}

pub async fn list_members<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    club_id: Uuid,
    user_sub: &str,
) -> Result<Vec<memberships::Model>, AppError> {
    repos::memberships::require_role(conn, club_id, user_sub, MemberRole::Member).await?;
    Ok(memberships_sea::list_by_club(conn, club_id).await?)
}

pub async fn create_season<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: SeasonCreate,
    user_sub: &str,
) -> Result<seasons::Model, AppError> {
    repos::memberships::require_role(conn, dto.club_id, user_sub, MemberRole::Coach).await?;
    if dto.ends_on < dto.starts_on {
        return Err(DomainError::validation_other("Season ends before it starts").into());
    }
    Ok(seasons_sea::create_season(conn, dto).await?)
}

pub async fn list_seasons<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    club_id: Uuid,
    user_sub: &str,
) -> Result<Vec<seasons::Model>, AppError> {
    repos::memberships::require_role(conn, club_id, user_sub, MemberRole::Member).await?;
    Ok(seasons_sea::list_by_club(conn, club_id).await?)
}
