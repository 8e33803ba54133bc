//! SeaORM adapter for players - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    Set,
};
use time::Date;
use uuid::Uuid;

use crate::entities::players;

/// DTO for creating a new player.
#[derive(Debug, Clone)]
pub struct PlayerCreate {
    pub club_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<Date>,
    pub preferred_position: Option<String>,
}

/// DTO for updating player details.
#[derive(Debug, Clone, Default)]
pub struct PlayerUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<Option<Date>>,
    pub preferred_position: Option<Option<String>>,
}

pub async fn create_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PlayerCreate,
) -> Result<players::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let player = players::ActiveModel {
        id: Set(Uuid::new_v4()),
        club_id: Set(dto.club_id),
        first_name: Set(dto.first_name),
        last_name: Set(dto.last_name),
        date_of_birth: Set(dto.date_of_birth),
        preferred_position: Set(dto.preferred_position),
        created_at: Set(now),
        updated_at: Set(now),
    };
    player.insert(conn).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: Uuid,
) -> Result<Option<players::Model>, sea_orm::DbErr> {
    players::Entity::find()
        .filter(players::Column::Id.eq(player_id))
        .one(conn)
        .await
}

pub async fn require_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: Uuid,
) -> Result<players::Model, sea_orm::DbErr> {
    find_by_id(conn, player_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Player not found".to_string()))
}

pub async fn list_by_club<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    club_id: Uuid,
) -> Result<Vec<players::Model>, sea_orm::DbErr> {
    players::Entity::find()
        .filter(players::Column::ClubId.eq(club_id))
        .order_by_asc(players::Column::LastName)
        .order_by_asc(players::Column::FirstName)
        .all(conn)
        .await
}

/// Return the subset of `player_ids` that belong to `club_id`.
///
/// Used to validate lineup submissions without fetching full player rows.
pub async fn ids_in_club<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    club_id: Uuid,
    player_ids: &[Uuid],
) -> Result<Vec<Uuid>, sea_orm::DbErr> {
    if player_ids.is_empty() {
        return Ok(Vec::new());
    }
    players::Entity::find()
        .select_only()
        .column(players::Column::Id)
        .filter(players::Column::ClubId.eq(club_id))
        .filter(players::Column::Id.is_in(player_ids.iter().copied()))
        .into_tuple::<Uuid>()
        .all(conn)
        .await
}

pub async fn update_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: Uuid,
    dto: PlayerUpdate,
) -> Result<players::Model, sea_orm::DbErr> {
    let player = require_player(conn, player_id).await?;
    let mut active: players::ActiveModel = player.into();
    if let Some(first_name) = dto.first_name {
        active.first_name = Set(first_name);
    }
    if let Some(last_name) = dto.last_name {
        active.last_name = Set(last_name);
    }
    if let Some(date_of_birth) = dto.date_of_birth {
        active.date_of_birth = Set(date_of_birth);
    }
    if let Some(preferred_position) = dto.preferred_position {
        active.preferred_position = Set(preferred_position);
    }
    active.updated_at = Set(time::OffsetDateTime::now_utc());
    active.update(conn).await
}
