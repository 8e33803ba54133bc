//! SeaORM adapter for live match state - generic over ConnectionTrait.

use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::entities::match_states;

pub mod dto;

pub use dto::{StateCreate, StateUpdate};

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

/// Helper: Apply optimistic update with lock version check, then refetch.
async fn optimistic_update_then_fetch<C, F>(
    conn: &C,
    id: Uuid,
    expected_version: i32,
    configure_update: F,
) -> Result<match_states::Model, sea_orm::DbErr>
where
    C: ConnectionTrait + Send + Sync,
    F: FnOnce(
        sea_orm::UpdateMany<match_states::Entity>,
    ) -> sea_orm::UpdateMany<match_states::Entity>,
{
    use sea_orm::sea_query::Expr;

    let now = time::OffsetDateTime::now_utc();

    let result = configure_update(match_states::Entity::update_many())
        .col_expr(match_states::Column::UpdatedAt, Expr::val(now).into())
        .col_expr(
            match_states::Column::LockVersion,
            Expr::col(match_states::Column::LockVersion).add(1),
        )
        .filter(match_states::Column::Id.eq(id))
        .filter(match_states::Column::LockVersion.eq(expected_version))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        let state = match_states::Entity::find_by_id(id).one(conn).await?;
        if let Some(state) = state {
            let payload = format!(
                "OPTIMISTIC_LOCK:{{\"expected\":{},\"actual\":{}}}",
                expected_version, state.lock_version
            );
            return Err(sea_orm::DbErr::Custom(payload));
        } else {
            return Err(sea_orm::DbErr::RecordNotFound(
                "Match state not found".to_string(),
            ));
        }
    }

    match_states::Entity::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Match state not found".to_string()))
}

/// Insert the state row for a fixture.
///
/// The unique index on fixture_id makes a second insert fail with a unique
/// violation, which the error mapper surfaces as MATCH_ALREADY_STARTED.
pub async fn insert_state<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: StateCreate,
) -> Result<match_states::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let state = match_states::ActiveModel {
        id: Set(Uuid::new_v4()),
        fixture_id: Set(dto.fixture_id),
        status: Set(dto.status),
        half: Set(dto.half),
        home_score: Set(0),
        away_score: Set(0),
        match_clock_seconds: Set(0),
        started_at: Set(dto.started_at),
        completed_at: Set(None),
        lock_version: Set(1),
        created_at: Set(now),
        updated_at: Set(now),
    };
    state.insert(conn).await
}

pub async fn find_by_fixture<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    fixture_id: Uuid,
) -> Result<Option<match_states::Model>, sea_orm::DbErr> {
    match_states::Entity::find()
        .filter(match_states::Column::FixtureId.eq(fixture_id))
        .one(conn)
        .await
}

pub async fn require_by_fixture<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    fixture_id: Uuid,
) -> Result<match_states::Model, sea_orm::DbErr> {
    find_by_fixture(conn, fixture_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Match state not found".to_string()))
}

pub async fn update_state<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: StateUpdate,
) -> Result<match_states::Model, sea_orm::DbErr> {
    use sea_orm::sea_query::Expr;

    optimistic_update_then_fetch(conn, dto.id, dto.expected_version, |mut update| {
        if let Some(status) = dto.status {
            update = update.col_expr(match_states::Column::Status, Expr::val(status).into());
        }
        if let Some(half) = dto.half {
            update = update.col_expr(match_states::Column::Half, Expr::val(half).into());
        }
        if let Some(home) = dto.home_score {
            update = update.col_expr(match_states::Column::HomeScore, Expr::val(home).into());
        }
        if let Some(away) = dto.away_score {
            update = update.col_expr(match_states::Column::AwayScore, Expr::val(away).into());
        }
        if let Some(seconds) = dto.match_clock_seconds {
            update = update.col_expr(
                match_states::Column::MatchClockSeconds,
                Expr::val(seconds).into(),
            );
        }
        if let Some(completed_at) = dto.completed_at {
            update = update.col_expr(
                match_states::Column::CompletedAt,
                Expr::val(completed_at).into(),
            );
        }
        update
    })
    .await
}
