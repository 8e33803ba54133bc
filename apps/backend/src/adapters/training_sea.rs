//! SeaORM adapter for training sessions - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::entities::training_sessions;

/// DTO for scheduling a training session.
#[derive(Debug, Clone)]
pub struct TrainingCreate {
    pub team_id: Uuid,
    pub starts_at: OffsetDateTime,
    pub duration_minutes: i32,
    pub location: Option<String>,
    pub focus: Option<String>,
}

/// DTO for updating a training session.
#[derive(Debug, Clone, Default)]
pub struct TrainingUpdate {
    pub starts_at: Option<OffsetDateTime>,
    pub duration_minutes: Option<i32>,
    pub location: Option<Option<String>>,
    pub focus: Option<Option<String>>,
}

pub async fn create_session<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: TrainingCreate,
) -> Result<training_sessions::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let session = training_sessions::ActiveModel {
        id: Set(Uuid::new_v4()),
        team_id: Set(dto.team_id),
        starts_at: Set(dto.starts_at),
        duration_minutes: Set(dto.duration_minutes),
        location: Set(dto.location),
        focus: Set(dto.focus),
        created_at: Set(now),
        updated_at: Set(now),
    };
    session.insert(conn).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session_id: Uuid,
) -> Result<Option<training_sessions::Model>, sea_orm::DbErr> {
    training_sessions::Entity::find()
        .filter(training_sessions::Column::Id.eq(session_id))
        .one(conn)
        .await
}

pub async fn require_session<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session_id: Uuid,
) -> Result<training_sessions::Model, sea_orm::DbErr> {
    find_by_id(conn, session_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Training session not found".to_string()))
}

pub async fn list_by_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: Uuid,
) -> Result<Vec<training_sessions::Model>, sea_orm::DbErr> {
    training_sessions::Entity::find()
        .filter(training_sessions::Column::TeamId.eq(team_id))
        .order_by_asc(training_sessions::Column::StartsAt)
        .all(conn)
        .await
}

pub async fn update_session<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session_id: Uuid,
    dto: TrainingUpdate,
) -> Result<training_sessions::Model, sea_orm::DbErr> {
    let session = require_session(conn, session_id).await?;
    let mut active: training_sessions::ActiveModel = session.into();
    if let Some(starts_at) = dto.starts_at {
        active.starts_at = Set(starts_at);
    }
    if let Some(duration_minutes) = dto.duration_minutes {
        active.duration_minutes = Set(duration_minutes);
    }
    if let Some(location) = dto.location {
        active.location = Set(location);
    }
    if let Some(focus) = dto.focus {
        active.focus = Set(focus);
    }
    active.updated_at = Set(time::OffsetDateTime::now_utc());
    active.update(conn).await
}

pub async fn delete_session<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session_id: Uuid,
) -> Result<u64, sea_orm::DbErr> {
    let result = training_sessions::Entity::delete_many()
        .filter(training_sessions::Column::Id.eq(session_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}
