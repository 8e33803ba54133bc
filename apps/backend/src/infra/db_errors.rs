//! SeaORM -> DomainError translation helpers.
//!
//! Adapters return raw `sea_orm::DbErr`; the repos layer converts to
//! `crate::errors::domain::DomainError` through `From<DbErr>`, which lands
//! here. Higher layers then map `DomainError` to `AppError` via `From`.

use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::logging::pii::Redacted;
use crate::trace_ctx;

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// Extract the "table.column[, ...]" tail from SQLite
/// "UNIQUE constraint failed: ..." error messages.
fn extract_sqlite_constraint_target(error_msg: &str) -> Option<&str> {
    error_msg
        .split_once("UNIQUE constraint failed: ")
        .map(|(_, rest)| rest.trim())
}

/// Map a SQLite constraint target to a domain-specific conflict.
fn map_sqlite_target_to_conflict(target: &str) -> Option<(ConflictKind, &'static str)> {
    if target.starts_with("clubs.name") {
        return Some((ConflictKind::UniqueClubName, "Club name already taken"));
    }
    if target.starts_with("memberships.club_id") {
        return Some((
            ConflictKind::UniqueMembership,
            "User is already a member of this club",
        ));
    }
    if target.starts_with("match_states.fixture_id") {
        return Some((
            ConflictKind::MatchAlreadyStarted,
            "Match state already exists for this fixture",
        ));
    }
    if target.starts_with("match_squads.fixture_id") {
        return Some((
            ConflictKind::Other("UniqueSquadSide".into()),
            "Squad already exists for this fixture and side",
        ));
    }
    None
}

/// Map PostgreSQL constraint names to domain-specific conflicts.
fn map_postgres_constraint_to_conflict(error_msg: &str) -> Option<(ConflictKind, &'static str)> {
    if error_msg.contains("clubs_name_key") {
        return Some((ConflictKind::UniqueClubName, "Club name already taken"));
    }
    if error_msg.contains("memberships_club_id_user_sub_key") {
        return Some((
            ConflictKind::UniqueMembership,
            "User is already a member of this club",
        ));
    }
    if error_msg.contains("match_states_fixture_id_key") {
        return Some((
            ConflictKind::MatchAlreadyStarted,
            "Match state already exists for this fixture",
        ));
    }
    if error_msg.contains("match_squads_fixture_id_side_key") {
        return Some((
            ConflictKind::Other("UniqueSquadSide".into()),
            "Squad already exists for this fixture and side",
        ));
    }
    None
}

/// Translate a `DbErr` into a `DomainError` with sanitized, PII-safe detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found(NotFoundKind::Other("Record".into()), "Record not found");
        }
        sea_orm::DbErr::Custom(msg) if msg.starts_with("OPTIMISTIC_LOCK:") => {
            // Structured payload emitted by the optimistic-update adapters
            if let Some(json_str) = msg.strip_prefix("OPTIMISTIC_LOCK:") {
                #[derive(serde::Deserialize)]
                struct LockInfo {
                    expected: i32,
                    actual: i32,
                }

                if let Ok(info) = serde_json::from_str::<LockInfo>(json_str) {
                    warn!(
                        trace_id = %trace_id,
                        expected = info.expected,
                        actual = info.actual,
                        "Optimistic lock conflict detected"
                    );

                    return DomainError::conflict(
                        ConflictKind::OptimisticLock,
                        format!(
                            "Resource was modified concurrently (expected version {}, actual version {}). Please refresh and retry.",
                            info.expected, info.actual
                        ),
                    );
                }
            }

            warn!(trace_id = %trace_id, "Optimistic lock conflict detected (version info unavailable)");
            return DomainError::conflict(
                ConflictKind::OptimisticLock,
                "Resource was modified by another transaction; please retry",
            );
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if mentions_sqlstate(&error_msg, "23505")
        || error_msg.contains("duplicate key value violates unique constraint")
        || error_msg.contains("UNIQUE constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unique constraint violation");

        if let Some(target) = extract_sqlite_constraint_target(&error_msg) {
            if let Some((kind, detail)) = map_sqlite_target_to_conflict(target) {
                return DomainError::conflict(kind, detail);
            }
        }

        if let Some((kind, detail)) = map_postgres_constraint_to_conflict(&error_msg) {
            return DomainError::conflict(kind, detail);
        }

        return DomainError::conflict(
            ConflictKind::Other("Unique".into()),
            "Unique constraint violation",
        );
    }

    if mentions_sqlstate(&error_msg, "23503")
        || error_msg.contains("FOREIGN KEY constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Foreign key constraint violation");
        return DomainError::validation_other("Foreign key constraint violation");
    }

    if mentions_sqlstate(&error_msg, "23514") {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Check constraint violation");
        return DomainError::validation_other("Check constraint violation");
    }

    if error_msg.contains("timeout")
        || error_msg.contains("pool")
        || error_msg.contains("unavailable")
    {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database timeout or pool issue");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_optimistic_lock_payload() {
        let err = sea_orm::DbErr::Custom("OPTIMISTIC_LOCK:{\"expected\":3,\"actual\":4}".into());
        match map_db_err(err) {
            DomainError::Conflict(ConflictKind::OptimisticLock, detail) => {
                assert!(detail.contains("expected version 3"));
                assert!(detail.contains("actual version 4"));
            }
            other => panic!("expected optimistic lock conflict, got {other:?}"),
        }
    }

    #[test]
    fn maps_sqlite_unique_membership() {
        let err = sea_orm::DbErr::Custom(
            "UNIQUE constraint failed: memberships.club_id, memberships.user_sub".into(),
        );
        match map_db_err(err) {
            DomainError::Conflict(ConflictKind::UniqueMembership, _) => {}
            other => panic!("expected unique membership conflict, got {other:?}"),
        }
    }

    #[test]
    fn maps_postgres_club_name_key() {
        let err = sea_orm::DbErr::Custom(
            "duplicate key value violates unique constraint \"clubs_name_key\"".into(),
        );
        match map_db_err(err) {
            DomainError::Conflict(ConflictKind::UniqueClubName, _) => {}
            other => panic!("expected unique club name conflict, got {other:?}"),
        }
    }

    #[test]
    fn maps_record_not_found() {
        let err = sea_orm::DbErr::RecordNotFound("Fixture".into());
        assert!(matches!(map_db_err(err), DomainError::NotFound(_, _)));
    }
}
