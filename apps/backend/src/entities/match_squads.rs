use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum SquadSide {
    #[sea_orm(string_value = "HOME")]
    Home,
    #[sea_orm(string_value = "AWAY")]
    Away,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "match_squads")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_name = "fixture_id")]
    pub fixture_id: Uuid,
    pub side: SquadSide,
    pub locked: bool,
    #[sea_orm(column_name = "lock_version")]
    pub lock_version: i32,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::fixtures::Entity",
        from = "Column::FixtureId",
        to = "super::fixtures::Column::Id"
    )]
    Fixture,
    #[sea_orm(has_many = "super::squad_slots::Entity")]
    SquadSlots,
}

impl Related<super::fixtures::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fixture.def()
    }
}

impl Related<super::squad_slots::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SquadSlots.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
