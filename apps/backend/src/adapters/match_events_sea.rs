//! SeaORM adapter for match events - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::match_events::{self, EventKind};
use crate::entities::match_squads::SquadSide;

/// DTO for recording a match event.
#[derive(Debug, Clone)]
pub struct EventCreate {
    pub fixture_id: Uuid,
    pub side: SquadSide,
    pub kind: EventKind,
    pub player_id: Option<Uuid>,
    pub match_clock_seconds: i32,
}

pub async fn insert_event<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: EventCreate,
) -> Result<match_events::Model, sea_orm::DbErr> {
    let event = match_events::ActiveModel {
        id: Set(Uuid::new_v4()),
        fixture_id: Set(dto.fixture_id),
        side: Set(dto.side),
        kind: Set(dto.kind),
        player_id: Set(dto.player_id),
        match_clock_seconds: Set(dto.match_clock_seconds),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };
    event.insert(conn).await
}

/// Events in match order (clock, then insertion order for ties).
pub async fn list_by_fixture<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    fixture_id: Uuid,
) -> Result<Vec<match_events::Model>, sea_orm::DbErr> {
    match_events::Entity::find()
        .filter(match_events::Column::FixtureId.eq(fixture_id))
        .order_by_asc(match_events::Column::MatchClockSeconds)
        .order_by_asc(match_events::Column::CreatedAt)
        .all(conn)
        .await
}

pub async fn delete_event<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    event_id: Uuid,
) -> Result<u64, sea_orm::DbErr> {
    let result = match_events::Entity::delete_many()
        .filter(match_events::Column::Id.eq(event_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}
