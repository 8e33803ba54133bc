//! SeaORM adapter for seasons - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use time::Date;
use uuid::Uuid;

use crate::entities::seasons;

/// DTO for creating a new season.
#[derive(Debug, Clone)]
pub struct SeasonCreate {
    pub club_id: Uuid,
    pub name: String,
    pub starts_on: Date,
    pub ends_on: Date,
}

pub async fn create_season<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: SeasonCreate,
) -> Result<seasons::Model, sea_orm::DbErr> {
    let season = seasons::ActiveModel {
        id: Set(Uuid::new_v4()),
        club_id: Set(dto.club_id),
        name: Set(dto.name),
        starts_on: Set(dto.starts_on),
        ends_on: Set(dto.ends_on),
    };
    season.insert(conn).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    season_id: Uuid,
) -> Result<Option<seasons::Model>, sea_orm::DbErr> {
    seasons::Entity::find()
        .filter(seasons::Column::Id.eq(season_id))
        .one(conn)
        .await
}

pub async fn list_by_club<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    club_id: Uuid,
) -> Result<Vec<seasons::Model>, sea_orm::DbErr> {
    seasons::Entity::find()
        .filter(seasons::Column::ClubId.eq(club_id))
        .order_by_desc(seasons::Column::StartsOn)
        .all(conn)
        .await
}
