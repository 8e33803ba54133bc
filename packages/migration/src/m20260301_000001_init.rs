use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
//
// Enumerated columns (side, status, role, ...) are stored as plain strings so
// the same migration runs against Postgres in production and SQLite in tests.

#[derive(Iden)]
enum Clubs {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Teams {
    Table,
    Id,
    ClubId,
    Name,
    AgeGroup,
    Archived,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Seasons {
    Table,
    Id,
    ClubId,
    Name,
    StartsOn,
    EndsOn,
}

#[derive(Iden)]
enum Memberships {
    Table,
    Id,
    ClubId,
    UserSub,
    DisplayName,
    Role,
    CreatedAt,
}

#[derive(Iden)]
enum Players {
    Table,
    Id,
    ClubId,
    FirstName,
    LastName,
    DateOfBirth,
    PreferredPosition,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Fixtures {
    Table,
    Id,
    TeamId,
    SeasonId,
    Opponent,
    KickoffAt,
    Venue,
    Location,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum MatchSquads {
    Table,
    Id,
    FixtureId,
    Side,
    Locked,
    LockVersion,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum SquadSlots {
    Table,
    Id,
    SquadId,
    SlotKind,
    Position,
    PlayerId,
    JerseyNumber,
}

#[derive(Iden)]
enum MatchStates {
    Table,
    Id,
    FixtureId,
    Status,
    Half,
    HomeScore,
    AwayScore,
    MatchClockSeconds,
    StartedAt,
    CompletedAt,
    LockVersion,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum MatchEvents {
    Table,
    Id,
    FixtureId,
    Side,
    Kind,
    PlayerId,
    MatchClockSeconds,
    CreatedAt,
}

#[derive(Iden)]
enum TrainingSessions {
    Table,
    Id,
    TeamId,
    StartsAt,
    DurationMinutes,
    Location,
    Focus,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum DevelopmentNotes {
    Table,
    Id,
    PlayerId,
    AuthorSub,
    Note,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Clubs::Table)
                    .col(ColumnDef::new(Clubs::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Clubs::Name).string().not_null())
                    .col(
                        ColumnDef::new(Clubs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Clubs::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("clubs_name_key")
                    .table(Clubs::Table)
                    .col(Clubs::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Teams::Table)
                    .col(ColumnDef::new(Teams::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Teams::ClubId).uuid().not_null())
                    .col(ColumnDef::new(Teams::Name).string().not_null())
                    .col(ColumnDef::new(Teams::AgeGroup).string())
                    .col(
                        ColumnDef::new(Teams::Archived)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Teams::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Teams::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("teams_club_id_fkey")
                            .from(Teams::Table, Teams::ClubId)
                            .to(Clubs::Table, Clubs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("teams_club_id_idx")
                    .table(Teams::Table)
                    .col(Teams::ClubId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Seasons::Table)
                    .col(ColumnDef::new(Seasons::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Seasons::ClubId).uuid().not_null())
                    .col(ColumnDef::new(Seasons::Name).string().not_null())
                    .col(ColumnDef::new(Seasons::StartsOn).date().not_null())
                    .col(ColumnDef::new(Seasons::EndsOn).date().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("seasons_club_id_fkey")
                            .from(Seasons::Table, Seasons::ClubId)
                            .to(Clubs::Table, Clubs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Memberships::Table)
                    .col(
                        ColumnDef::new(Memberships::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Memberships::ClubId).uuid().not_null())
                    .col(ColumnDef::new(Memberships::UserSub).string().not_null())
                    .col(ColumnDef::new(Memberships::DisplayName).string().not_null())
                    .col(ColumnDef::new(Memberships::Role).string().not_null())
                    .col(
                        ColumnDef::new(Memberships::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("memberships_club_id_fkey")
                            .from(Memberships::Table, Memberships::ClubId)
                            .to(Clubs::Table, Clubs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("memberships_club_id_user_sub_key")
                    .table(Memberships::Table)
                    .col(Memberships::ClubId)
                    .col(Memberships::UserSub)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Players::Table)
                    .col(ColumnDef::new(Players::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Players::ClubId).uuid().not_null())
                    .col(ColumnDef::new(Players::FirstName).string().not_null())
                    .col(ColumnDef::new(Players::LastName).string().not_null())
                    .col(ColumnDef::new(Players::DateOfBirth).date())
                    .col(ColumnDef::new(Players::PreferredPosition).string())
                    .col(
                        ColumnDef::new(Players::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Players::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("players_club_id_fkey")
                            .from(Players::Table, Players::ClubId)
                            .to(Clubs::Table, Clubs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("players_club_id_idx")
                    .table(Players::Table)
                    .col(Players::ClubId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Fixtures::Table)
                    .col(ColumnDef::new(Fixtures::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Fixtures::TeamId).uuid().not_null())
                    .col(ColumnDef::new(Fixtures::SeasonId).uuid())
                    .col(ColumnDef::new(Fixtures::Opponent).string().not_null())
                    .col(
                        ColumnDef::new(Fixtures::KickoffAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Fixtures::Venue).string().not_null())
                    .col(ColumnDef::new(Fixtures::Location).string())
                    .col(
                        ColumnDef::new(Fixtures::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Fixtures::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fixtures_team_id_fkey")
                            .from(Fixtures::Table, Fixtures::TeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fixtures_season_id_fkey")
                            .from(Fixtures::Table, Fixtures::SeasonId)
                            .to(Seasons::Table, Seasons::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("fixtures_team_id_idx")
                    .table(Fixtures::Table)
                    .col(Fixtures::TeamId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MatchSquads::Table)
                    .col(
                        ColumnDef::new(MatchSquads::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MatchSquads::FixtureId).uuid().not_null())
                    .col(ColumnDef::new(MatchSquads::Side).string().not_null())
                    .col(
                        ColumnDef::new(MatchSquads::Locked)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(MatchSquads::LockVersion)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(MatchSquads::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MatchSquads::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("match_squads_fixture_id_fkey")
                            .from(MatchSquads::Table, MatchSquads::FixtureId)
                            .to(Fixtures::Table, Fixtures::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("match_squads_fixture_id_side_key")
                    .table(MatchSquads::Table)
                    .col(MatchSquads::FixtureId)
                    .col(MatchSquads::Side)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SquadSlots::Table)
                    .col(
                        ColumnDef::new(SquadSlots::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SquadSlots::SquadId).uuid().not_null())
                    .col(ColumnDef::new(SquadSlots::SlotKind).string().not_null())
                    .col(
                        ColumnDef::new(SquadSlots::Position)
                            .small_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SquadSlots::PlayerId).uuid())
                    .col(ColumnDef::new(SquadSlots::JerseyNumber).small_integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("squad_slots_squad_id_fkey")
                            .from(SquadSlots::Table, SquadSlots::SquadId)
                            .to(MatchSquads::Table, MatchSquads::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("squad_slots_player_id_fkey")
                            .from(SquadSlots::Table, SquadSlots::PlayerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("squad_slots_squad_id_kind_position_key")
                    .table(SquadSlots::Table)
                    .col(SquadSlots::SquadId)
                    .col(SquadSlots::SlotKind)
                    .col(SquadSlots::Position)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MatchStates::Table)
                    .col(
                        ColumnDef::new(MatchStates::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MatchStates::FixtureId).uuid().not_null())
                    .col(ColumnDef::new(MatchStates::Status).string().not_null())
                    .col(ColumnDef::new(MatchStates::Half).string().not_null())
                    .col(
                        ColumnDef::new(MatchStates::HomeScore)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(MatchStates::AwayScore)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(MatchStates::MatchClockSeconds)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(MatchStates::StartedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(MatchStates::CompletedAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(MatchStates::LockVersion)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(MatchStates::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MatchStates::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("match_states_fixture_id_fkey")
                            .from(MatchStates::Table, MatchStates::FixtureId)
                            .to(Fixtures::Table, Fixtures::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("match_states_fixture_id_key")
                    .table(MatchStates::Table)
                    .col(MatchStates::FixtureId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MatchEvents::Table)
                    .col(
                        ColumnDef::new(MatchEvents::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MatchEvents::FixtureId).uuid().not_null())
                    .col(ColumnDef::new(MatchEvents::Side).string().not_null())
                    .col(ColumnDef::new(MatchEvents::Kind).string().not_null())
                    .col(ColumnDef::new(MatchEvents::PlayerId).uuid())
                    .col(
                        ColumnDef::new(MatchEvents::MatchClockSeconds)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MatchEvents::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("match_events_fixture_id_fkey")
                            .from(MatchEvents::Table, MatchEvents::FixtureId)
                            .to(Fixtures::Table, Fixtures::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("match_events_player_id_fkey")
                            .from(MatchEvents::Table, MatchEvents::PlayerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("match_events_fixture_id_idx")
                    .table(MatchEvents::Table)
                    .col(MatchEvents::FixtureId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TrainingSessions::Table)
                    .col(
                        ColumnDef::new(TrainingSessions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TrainingSessions::TeamId).uuid().not_null())
                    .col(
                        ColumnDef::new(TrainingSessions::StartsAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TrainingSessions::DurationMinutes)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TrainingSessions::Location).string())
                    .col(ColumnDef::new(TrainingSessions::Focus).string())
                    .col(
                        ColumnDef::new(TrainingSessions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TrainingSessions::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("training_sessions_team_id_fkey")
                            .from(TrainingSessions::Table, TrainingSessions::TeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DevelopmentNotes::Table)
                    .col(
                        ColumnDef::new(DevelopmentNotes::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DevelopmentNotes::PlayerId).uuid().not_null())
                    .col(
                        ColumnDef::new(DevelopmentNotes::AuthorSub)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(DevelopmentNotes::Note).text().not_null())
                    .col(
                        ColumnDef::new(DevelopmentNotes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("development_notes_player_id_fkey")
                            .from(DevelopmentNotes::Table, DevelopmentNotes::PlayerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DevelopmentNotes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TrainingSessions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MatchEvents::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MatchStates::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SquadSlots::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MatchSquads::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Fixtures::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Players::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Memberships::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Seasons::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Teams::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Clubs::Table).to_owned())
            .await?;
        Ok(())
    }
}
