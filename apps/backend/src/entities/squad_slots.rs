use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum SlotKind {
    #[sea_orm(string_value = "STARTING")]
    Starting,
    #[sea_orm(string_value = "BENCH")]
    Bench,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "squad_slots")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_name = "squad_id")]
    pub squad_id: Uuid,
    #[sea_orm(column_name = "slot_kind")]
    pub slot_kind: SlotKind,
    #[sea_orm(column_type = "SmallInteger")]
    pub position: i16,
    #[sea_orm(column_name = "player_id")]
    pub player_id: Option<Uuid>,
    #[sea_orm(column_name = "jersey_number", column_type = "SmallInteger")]
    pub jersey_number: Option<i16>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::match_squads::Entity",
        from = "Column::SquadId",
        to = "super::match_squads::Column::Id"
    )]
    MatchSquad,
    #[sea_orm(
        belongs_to = "super::players::Entity",
        from = "Column::PlayerId",
        to = "super::players::Column::Id"
    )]
    Player,
}

impl Related<super::match_squads::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MatchSquad.def()
    }
}

impl Related<super::players::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
