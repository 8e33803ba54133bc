//! SeaORM adapter for teams - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::teams;

/// DTO for creating a new team.
#[derive(Debug, Clone)]
pub struct TeamCreate {
    pub club_id: Uuid,
    pub name: String,
    pub age_group: Option<String>,
}

/// DTO for updating team metadata.
#[derive(Debug, Clone)]
pub struct TeamUpdate {
    pub id: Uuid,
    pub name: Option<String>,
    pub age_group: Option<Option<String>>,
}

pub async fn create_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: TeamCreate,
) -> Result<teams::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let team = teams::ActiveModel {
        id: Set(Uuid::new_v4()),
        club_id: Set(dto.club_id),
        name: Set(dto.name),
        age_group: Set(dto.age_group),
        archived: Set(false),
        created_at: Set(now),
        updated_at: Set(now),
    };
    team.insert(conn).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: Uuid,
) -> Result<Option<teams::Model>, sea_orm::DbErr> {
    teams::Entity::find()
        .filter(teams::Column::Id.eq(team_id))
        .one(conn)
        .await
}

pub async fn require_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: Uuid,
) -> Result<teams::Model, sea_orm::DbErr> {
    find_by_id(conn, team_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Team not found".to_string()))
}

/// List teams for a club. Archived teams are excluded unless requested.
pub async fn list_by_club<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    club_id: Uuid,
    include_archived: bool,
) -> Result<Vec<teams::Model>, sea_orm::DbErr> {
    let mut query = teams::Entity::find().filter(teams::Column::ClubId.eq(club_id));
    if !include_archived {
        query = query.filter(teams::Column::Archived.eq(false));
    }
    query.order_by_asc(teams::Column::Name).all(conn).await
}

pub async fn update_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: TeamUpdate,
) -> Result<teams::Model, sea_orm::DbErr> {
    let team = require_team(conn, dto.id).await?;
    let mut active: teams::ActiveModel = team.into();
    if let Some(name) = dto.name {
        active.name = Set(name);
    }
    if let Some(age_group) = dto.age_group {
        active.age_group = Set(age_group);
    }
    active.updated_at = Set(time::OffsetDateTime::now_utc());
    active.update(conn).await
}

pub async fn set_archived<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: Uuid,
    archived: bool,
) -> Result<teams::Model, sea_orm::DbErr> {
    let team = require_team(conn, team_id).await?;
    let mut active: teams::ActiveModel = team.into();
    active.archived = Set(archived);
    active.updated_at = Set(time::OffsetDateTime::now_utc());
    active.update(conn).await
}
