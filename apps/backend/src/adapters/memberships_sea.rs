//! SeaORM adapter for club memberships - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::memberships::{self, MemberRole};

/// DTO for creating a new membership.
#[derive(Debug, Clone)]
pub struct MembershipCreate {
    pub club_id: Uuid,
    pub user_sub: String,
    pub display_name: String,
    pub role: MemberRole,
}

pub async fn create_membership<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: MembershipCreate,
) -> Result<memberships::Model, sea_orm::DbErr> {
    let membership = memberships::ActiveModel {
        id: Set(Uuid::new_v4()),
        club_id: Set(dto.club_id),
        user_sub: Set(dto.user_sub),
        display_name: Set(dto.display_name),
        role: Set(dto.role),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };
    membership.insert(conn).await
}

pub async fn find_by_club_and_sub<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    club_id: Uuid,
    user_sub: &str,
) -> Result<Option<memberships::Model>, sea_orm::DbErr> {
    memberships::Entity::find()
        .filter(memberships::Column::ClubId.eq(club_id))
        .filter(memberships::Column::UserSub.eq(user_sub))
        .one(conn)
        .await
}

pub async fn list_by_club<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    club_id: Uuid,
) -> Result<Vec<memberships::Model>, sea_orm::DbErr> {
    memberships::Entity::find()
        .filter(memberships::Column::ClubId.eq(club_id))
        .order_by_asc(memberships::Column::DisplayName)
        .all(conn)
        .await
}
