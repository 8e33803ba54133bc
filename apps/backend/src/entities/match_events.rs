use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::match_squads::SquadSide;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum EventKind {
    #[sea_orm(string_value = "TRY")]
    Try,
    #[sea_orm(string_value = "CONVERSION")]
    Conversion,
    #[sea_orm(string_value = "PENALTY_GOAL")]
    PenaltyGoal,
    #[sea_orm(string_value = "DROP_GOAL")]
    DropGoal,
    #[sea_orm(string_value = "YELLOW_CARD")]
    YellowCard,
    #[sea_orm(string_value = "RED_CARD")]
    RedCard,
    #[sea_orm(string_value = "SUBSTITUTION")]
    Substitution,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "match_events")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_name = "fixture_id")]
    pub fixture_id: Uuid,
    pub side: SquadSide,
    pub kind: EventKind,
    #[sea_orm(column_name = "player_id")]
    pub player_id: Option<Uuid>,
    #[sea_orm(column_name = "match_clock_seconds")]
    pub match_clock_seconds: i32,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::fixtures::Entity",
        from = "Column::FixtureId",
        to = "super::fixtures::Column::Id"
    )]
    Fixture,
    #[sea_orm(
        belongs_to = "super::players::Entity",
        from = "Column::PlayerId",
        to = "super::players::Column::Id"
    )]
    Player,
}

impl Related<super::fixtures::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fixture.def()
    }
}

impl Related<super::players::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
