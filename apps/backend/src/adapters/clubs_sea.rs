//! SeaORM adapter for clubs - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::{clubs, memberships};

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

/// DTO for creating a new club.
#[derive(Debug, Clone)]
pub struct ClubCreate {
    pub name: String,
}

pub async fn create_club<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ClubCreate,
) -> Result<clubs::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let club = clubs::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(dto.name),
        created_at: Set(now),
        updated_at: Set(now),
    };
    club.insert(conn).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    club_id: Uuid,
) -> Result<Option<clubs::Model>, sea_orm::DbErr> {
    clubs::Entity::find()
        .filter(clubs::Column::Id.eq(club_id))
        .one(conn)
        .await
}

/// Clubs the given user belongs to, ordered by name.
pub async fn list_for_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_sub: &str,
) -> Result<Vec<clubs::Model>, sea_orm::DbErr> {
    let club_ids: Vec<Uuid> = memberships::Entity::find()
        .filter(memberships::Column::UserSub.eq(user_sub))
        .all(conn)
        .await?
        .into_iter()
        .map(|m| m.club_id)
        .collect();
    clubs::Entity::find()
        .filter(clubs::Column::Id.is_in(club_ids))
        .order_by_asc(clubs::Column::Name)
        .all(conn)
        .await
}

/// Find club by ID or return RecordNotFound error.
pub async fn require_club<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    club_id: Uuid,
) -> Result<clubs::Model, sea_orm::DbErr> {
    find_by_id(conn, club_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Club not found".to_string()))
}
