//! SeaORM adapter for fixtures - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::entities::fixtures::{self, Venue};

/// DTO for creating a new fixture.
#[derive(Debug, Clone)]
pub struct FixtureCreate {
    pub team_id: Uuid,
    pub season_id: Option<Uuid>,
    pub opponent: String,
    pub kickoff_at: OffsetDateTime,
    pub venue: Venue,
    pub location: Option<String>,
}

/// DTO for amending fixture details. `location` distinguishes
/// absent (keep) from null (clear).
#[derive(Debug, Clone)]
pub struct FixtureUpdate {
    pub id: Uuid,
    pub opponent: Option<String>,
    pub kickoff_at: Option<OffsetDateTime>,
    pub venue: Option<Venue>,
    pub location: Option<Option<String>>,
}

pub async fn create_fixture<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: FixtureCreate,
) -> Result<fixtures::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let fixture = fixtures::ActiveModel {
        id: Set(Uuid::new_v4()),
        team_id: Set(dto.team_id),
        season_id: Set(dto.season_id),
        opponent: Set(dto.opponent),
        kickoff_at: Set(dto.kickoff_at),
        venue: Set(dto.venue),
        location: Set(dto.location),
        created_at: Set(now),
        updated_at: Set(now),
    };
    fixture.insert(conn).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    fixture_id: Uuid,
) -> Result<Option<fixtures::Model>, sea_orm::DbErr> {
    fixtures::Entity::find()
        .filter(fixtures::Column::Id.eq(fixture_id))
        .one(conn)
        .await
}

/// Find fixture by ID or return RecordNotFound error.
pub async fn require_fixture<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    fixture_id: Uuid,
) -> Result<fixtures::Model, sea_orm::DbErr> {
    find_by_id(conn, fixture_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Fixture not found".to_string()))
}

pub async fn update_fixture<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: FixtureUpdate,
) -> Result<fixtures::Model, sea_orm::DbErr> {
    let fixture = require_fixture(conn, dto.id).await?;
    let mut active: fixtures::ActiveModel = fixture.into();
    if let Some(opponent) = dto.opponent {
        active.opponent = Set(opponent);
    }
    if let Some(kickoff_at) = dto.kickoff_at {
        active.kickoff_at = Set(kickoff_at);
    }
    if let Some(venue) = dto.venue {
        active.venue = Set(venue);
    }
    if let Some(location) = dto.location {
        active.location = Set(location);
    }
    active.updated_at = Set(time::OffsetDateTime::now_utc());
    active.update(conn).await
}

pub async fn list_by_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: Uuid,
) -> Result<Vec<fixtures::Model>, sea_orm::DbErr> {
    fixtures::Entity::find()
        .filter(fixtures::Column::TeamId.eq(team_id))
        .order_by_asc(fixtures::Column::KickoffAt)
        .all(conn)
        .await
}
