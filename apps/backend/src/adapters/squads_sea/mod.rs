//! SeaORM adapter for match squads and their slots - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::match_squads::{self, SquadSide};
use crate::entities::squad_slots;

pub mod dto;

pub use dto::{SlotInsert, SquadCreate, SquadUpdate};

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

/// Helper: Apply optimistic update with lock version check, then refetch.
///
/// - Adds lock_version increment and updated_at to the update
/// - Filters by id and expected lock_version
/// - Checks rows_affected to distinguish NotFound vs OptimisticLock
/// - Refetches and returns the updated model
async fn optimistic_update_then_fetch<C, F>(
    conn: &C,
    id: Uuid,
    expected_version: i32,
    configure_update: F,
) -> Result<match_squads::Model, sea_orm::DbErr>
where
    C: ConnectionTrait + Send + Sync,
    F: FnOnce(
        sea_orm::UpdateMany<match_squads::Entity>,
    ) -> sea_orm::UpdateMany<match_squads::Entity>,
{
    use sea_orm::sea_query::Expr;

    let now = time::OffsetDateTime::now_utc();

    let result = configure_update(match_squads::Entity::update_many())
        .col_expr(match_squads::Column::UpdatedAt, Expr::val(now).into())
        .col_expr(
            match_squads::Column::LockVersion,
            Expr::col(match_squads::Column::LockVersion).add(1),
        )
        .filter(match_squads::Column::Id.eq(id))
        .filter(match_squads::Column::LockVersion.eq(expected_version))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        // Either the squad doesn't exist or the lock version doesn't match
        let squad = match_squads::Entity::find_by_id(id).one(conn).await?;
        if let Some(squad) = squad {
            let payload = format!(
                "OPTIMISTIC_LOCK:{{\"expected\":{},\"actual\":{}}}",
                expected_version, squad.lock_version
            );
            return Err(sea_orm::DbErr::Custom(payload));
        } else {
            return Err(sea_orm::DbErr::RecordNotFound(
                "Squad not found".to_string(),
            ));
        }
    }

    match_squads::Entity::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Squad not found".to_string()))
}

pub async fn create_squad<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: SquadCreate,
) -> Result<match_squads::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let squad = match_squads::ActiveModel {
        id: Set(Uuid::new_v4()),
        fixture_id: Set(dto.fixture_id),
        side: Set(dto.side),
        locked: Set(false),
        lock_version: Set(1),
        created_at: Set(now),
        updated_at: Set(now),
    };
    squad.insert(conn).await
}

pub async fn find_by_fixture_and_side<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    fixture_id: Uuid,
    side: SquadSide,
) -> Result<Option<match_squads::Model>, sea_orm::DbErr> {
    match_squads::Entity::find()
        .filter(match_squads::Column::FixtureId.eq(fixture_id))
        .filter(match_squads::Column::Side.eq(side))
        .one(conn)
        .await
}

pub async fn list_by_fixture<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    fixture_id: Uuid,
) -> Result<Vec<match_squads::Model>, sea_orm::DbErr> {
    match_squads::Entity::find()
        .filter(match_squads::Column::FixtureId.eq(fixture_id))
        .all(conn)
        .await
}

pub async fn update_squad<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: SquadUpdate,
) -> Result<match_squads::Model, sea_orm::DbErr> {
    use sea_orm::sea_query::Expr;

    optimistic_update_then_fetch(conn, dto.id, dto.expected_version, |mut update| {
        if let Some(locked) = dto.locked {
            update = update.col_expr(match_squads::Column::Locked, Expr::val(locked).into());
        }
        update
    })
    .await
}

/// Slots ordered by position; callers partition by slot kind.
pub async fn list_slots<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    squad_id: Uuid,
) -> Result<Vec<squad_slots::Model>, sea_orm::DbErr> {
    squad_slots::Entity::find()
        .filter(squad_slots::Column::SquadId.eq(squad_id))
        .order_by_asc(squad_slots::Column::Position)
        .all(conn)
        .await
}

/// Replace the full slot set of a squad (delete-then-insert).
///
/// Lineup submission is a full overwrite, so partial updates are never needed.
pub async fn replace_slots<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    squad_id: Uuid,
    slots: Vec<SlotInsert>,
) -> Result<(), sea_orm::DbErr> {
    squad_slots::Entity::delete_many()
        .filter(squad_slots::Column::SquadId.eq(squad_id))
        .exec(conn)
        .await?;

    if slots.is_empty() {
        return Ok(());
    }

    let rows: Vec<squad_slots::ActiveModel> = slots
        .into_iter()
        .map(|slot| squad_slots::ActiveModel {
            id: Set(Uuid::new_v4()),
            squad_id: Set(squad_id),
            slot_kind: Set(slot.slot_kind),
            position: Set(slot.position),
            player_id: Set(slot.player_id),
            jersey_number: Set(slot.jersey_number),
        })
        .collect();

    squad_slots::Entity::insert_many(rows).exec(conn).await?;
    Ok(())
}
