//! Player registry and development notes.

use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::adapters::development_notes_sea::{self, NoteCreate};
use crate::adapters::players_sea::{self, PlayerCreate, PlayerUpdate};
use crate::entities::memberships::MemberRole;
use crate::entities::{development_notes, players};
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos;

async fn require_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: Uuid,
) -> Result<players::Model, AppError> {
    players_sea::find_by_id(conn, player_id)
        .await?
        .ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Player,
                format!("Player {player_id} not found"),
            )
            .into()
        })
}

pub async fn create_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PlayerCreate,
    user_sub: &str,
) -> Result<players::Model, AppError> {
    repos::memberships::require_role(conn, dto.club_id, user_sub, MemberRole::Coach).await?;
    let player = players_sea::create_player(conn, dto).await?;
    tracing::info!(player_id = %player.id, club_id = %player.club_id, "player registered");
    Ok(player)
}

pub async fn get_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: Uuid,
    user_sub: &str,
) -> Result<players::Model, AppError> {
    let player = require_player(conn, player_id).await?;
    repos::memberships::require_role(conn, player.club_id, user_sub, MemberRole::Member).await?;
    Ok(player)
}

pub async fn list_players<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    club_id: Uuid,
    user_sub: &str,
) -> Result<Vec<players::Model>, AppError> {
    repos::memberships::require_role(conn, club_id, user_sub, MemberRole::Member).await?;
    Ok(players_sea::list_by_club(conn, club_id).await?)
}

pub async fn update_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: Uuid,
    dto: PlayerUpdate,
    user_sub: &str,
) -> Result<players::Model, AppError> {
    let player = require_player(conn, player_id).await?;
    repos::memberships::require_role(conn, player.club_id, user_sub, MemberRole::Coach).await?;
    Ok(players_sea::update_player(conn, player_id, dto).await?)
}

/// Development notes are coach material; both writing and reading require
/// at least the COACH role.
pub async fn add_note<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: Uuid,
    note: String,
    user_sub: &str,
) -> Result<development_notes::Model, AppError> {
    let player = require_player(conn, player_id).await?;
    repos::memberships::require_role(conn, player.club_id, user_sub, MemberRole::Coach).await?;
    Ok(development_notes_sea::insert_note(
        conn,
        NoteCreate {
            player_id,
            author_sub: user_sub.to_string(),
            note,
        },
    )
    .await?)
}

pub async fn list_notes<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: Uuid,
    user_sub: &str,
) -> Result<Vec<development_notes::Model>, AppError> {
    let player = require_player(conn, player_id).await?;
    repos::memberships::require_role(conn, player.club_id, user_sub, MemberRole::Coach).await?;
    Ok(development_notes_sea::list_by_player(conn, player_id).await?)
}
