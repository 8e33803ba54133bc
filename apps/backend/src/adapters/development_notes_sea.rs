//! SeaORM adapter for player development notes - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::development_notes;

/// DTO for adding a development note to a player.
#[derive(Debug, Clone)]
pub struct NoteCreate {
    pub player_id: Uuid,
    pub author_sub: String,
    pub note: String,
}

pub async fn insert_note<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: NoteCreate,
) -> Result<development_notes::Model, sea_orm::DbErr> {
    let note = development_notes::ActiveModel {
        id: Set(Uuid::new_v4()),
        player_id: Set(dto.player_id),
        author_sub: Set(dto.author_sub),
        note: Set(dto.note),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };
    note.insert(conn).await
}

pub async fn list_by_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: Uuid,
) -> Result<Vec<development_notes::Model>, sea_orm::DbErr> {
    development_notes::Entity::find()
        .filter(development_notes::Column::PlayerId.eq(player_id))
        .order_by_desc(development_notes::Column::CreatedAt)
        .all(conn)
        .await
}
