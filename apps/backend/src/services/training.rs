//! Training session scheduling.

use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::adapters::teams_sea;
use crate::adapters::training_sea::{self, TrainingCreate, TrainingUpdate};
use crate::entities::memberships::MemberRole;
use crate::entities::training_sessions;
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::repos;

async fn team_club_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: Uuid,
) -> Result<Uuid, AppError> {
    let team = teams_sea::find_by_id(conn, team_id).await?.ok_or_else(|| {
        AppError::from(DomainError::not_found(
            NotFoundKind::Team,
            format!("Team {team_id} not found"),
        ))
    })?;
    Ok(team.club_id)
}

pub async fn create_session<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: TrainingCreate,
    user_sub: &str,
) -> Result<training_sessions::Model, AppError> {
    if dto.duration_minutes <= 0 {
        return Err(DomainError::validation(
            ValidationKind::Other("InvalidDuration".to_string()),
            "Session duration must be positive",
        )
        .into());
    }
    let club_id = team_club_id(conn, dto.team_id).await?;
    repos::memberships::require_role(conn, club_id, user_sub, MemberRole::Coach).await?;
    let session = training_sea::create_session(conn, dto).await?;
    tracing::info!(session_id = %session.id, team_id = %session.team_id, "training session scheduled");
    Ok(session)
}

pub async fn list_sessions<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: Uuid,
    user_sub: &str,
) -> Result<Vec<training_sessions::Model>, AppError> {
    let club_id = team_club_id(conn, team_id).await?;
    repos::memberships::require_role(conn, club_id, user_sub, MemberRole::Member).await?;
    Ok(training_sea::list_by_team(conn, team_id).await?)
}

pub async fn update_session<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session_id: Uuid,
    dto: TrainingUpdate,
    user_sub: &str,
) -> Result<training_sessions::Model, AppError> {
    if let Some(minutes) = dto.duration_minutes {
        if minutes <= 0 {
            return Err(DomainError::validation(
                ValidationKind::Other("InvalidDuration".to_string()),
                "Session duration must be positive",
            )
            .into());
        }
    }
    let session = training_sea::find_by_id(conn, session_id).await?.ok_or_else(|| {
        AppError::from(DomainError::not_found(
            NotFoundKind::TrainingSession,
            format!("Training session {session_id} not found"),
        ))
    })?;
    let club_id = team_club_id(conn, session.team_id).await?;
    repos::memberships::require_role(conn, club_id, user_sub, MemberRole::Coach).await?;
    Ok(training_sea::update_session(conn, session_id, dto).await?)
}

pub async fn delete_session<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session_id: Uuid,
    user_sub: &str,
) -> Result<(), AppError> {
    let session = training_sea::find_by_id(conn, session_id).await?.ok_or_else(|| {
        AppError::from(DomainError::not_found(
            NotFoundKind::TrainingSession,
            format!("Training session {session_id} not found"),
        ))
    })?;
    let club_id = team_club_id(conn, session.team_id).await?;
    repos::memberships::require_role(conn, club_id, user_sub, MemberRole::Coach).await?;
    training_sea::delete_session(conn, session_id).await?;
    Ok(())
}
