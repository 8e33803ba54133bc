use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Which ground the fixture is played at, from the team's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Venue {
    #[sea_orm(string_value = "HOME")]
    Home,
    #[sea_orm(string_value = "AWAY")]
    Away,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "fixtures")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_name = "team_id")]
    pub team_id: Uuid,
    #[sea_orm(column_name = "season_id")]
    pub season_id: Option<Uuid>,
    pub opponent: String,
    #[sea_orm(column_name = "kickoff_at")]
    pub kickoff_at: OffsetDateTime,
    pub venue: Venue,
    pub location: Option<String>,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::teams::Entity",
        from = "Column::TeamId",
        to = "super::teams::Column::Id"
    )]
    Team,
    #[sea_orm(
        belongs_to = "super::seasons::Entity",
        from = "Column::SeasonId",
        to = "super::seasons::Column::Id"
    )]
    Season,
    #[sea_orm(has_many = "super::match_squads::Entity")]
    MatchSquads,
    #[sea_orm(has_many = "super::match_events::Entity")]
    MatchEvents,
}

impl Related<super::teams::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl Related<super::seasons::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Season.def()
    }
}

impl Related<super::match_squads::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MatchSquads.def()
    }
}

impl Related<super::match_events::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MatchEvents.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
