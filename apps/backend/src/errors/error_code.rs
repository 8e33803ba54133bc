//! Error codes for the Touchline backend API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the Touchline backend API.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string that appears
/// in HTTP responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & Authorization
    /// Authentication required
    Unauthorized,
    /// Missing or malformed Bearer token
    UnauthorizedMissingBearer,
    /// Invalid JWT token
    UnauthorizedInvalidJwt,
    /// JWT token has expired
    UnauthorizedExpiredJwt,
    /// Access denied
    Forbidden,
    /// Caller is not a member of the club
    NotAMember,
    /// Caller's membership role is insufficient for this operation
    InsufficientRole,

    // Request Validation
    /// Fixture id path segment is not a UUID
    InvalidFixtureId,
    /// Side path segment is not HOME or AWAY
    InvalidSide,
    /// Clock value out of range
    InvalidClock,
    /// A player appears in more than one squad slot
    DuplicatePlayer,
    /// More than 15 bench slots submitted
    BenchOverflow,
    /// A squad slot references a player outside the fixture's club
    PlayerNotInClub,
    /// Starting lineup does not have exactly 15 slots
    InvalidStartingCount,
    /// One or both squads missing at match start
    SquadMissing,
    /// Events are only accepted while the match is in progress
    MatchNotInProgress,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Resource Not Found
    /// Club not found
    ClubNotFound,
    /// Team not found
    TeamNotFound,
    /// Season not found
    SeasonNotFound,
    /// Player not found
    PlayerNotFound,
    /// Fixture not found
    FixtureNotFound,
    /// Squad not found for fixture+side
    SquadNotFound,
    /// Match state not found
    MatchStateNotFound,
    /// Training session not found
    TrainingSessionNotFound,
    /// General not found error
    NotFound,

    // Business Logic Conflicts
    /// Match has already been started
    MatchAlreadyStarted,
    /// Requested match status transition is not allowed
    InvalidStatusTransition,
    /// Squad is locked against edits
    SquadLocked,
    /// Club name already taken
    UniqueClubName,
    /// User already a member of the club
    UniqueMembership,
    /// Optimistic lock conflict
    OptimisticLock,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Database timeout
    DbTimeout,

    // Database Constraint Violations
    /// Unique constraint violation (SQLSTATE 23505; generic 409)
    UniqueViolation,
    /// Foreign key constraint violation (SQLSTATE 23503; generic 409)
    FkViolation,
    /// Check constraint violation (SQLSTATE 23514; generic 400)
    CheckViolation,
    /// Record not found (generic 404 for DB-driven not-found)
    RecordNotFound,

    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
    /// Data corruption detected
    DataCorruption,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    ///
    /// This is the exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            // Authentication & Authorization
            Self::Unauthorized => "UNAUTHORIZED",
            Self::UnauthorizedMissingBearer => "UNAUTHORIZED_MISSING_BEARER",
            Self::UnauthorizedInvalidJwt => "UNAUTHORIZED_INVALID_JWT",
            Self::UnauthorizedExpiredJwt => "UNAUTHORIZED_EXPIRED_JWT",
            Self::Forbidden => "FORBIDDEN",
            Self::NotAMember => "NOT_A_MEMBER",
            Self::InsufficientRole => "INSUFFICIENT_ROLE",

            // Request Validation
            Self::InvalidFixtureId => "INVALID_FIXTURE_ID",
            Self::InvalidSide => "INVALID_SIDE",
            Self::InvalidClock => "INVALID_CLOCK",
            Self::DuplicatePlayer => "DUPLICATE_PLAYER",
            Self::BenchOverflow => "BENCH_OVERFLOW",
            Self::PlayerNotInClub => "PLAYER_NOT_IN_CLUB",
            Self::InvalidStartingCount => "INVALID_STARTING_COUNT",
            Self::SquadMissing => "SQUAD_MISSING",
            Self::MatchNotInProgress => "MATCH_NOT_IN_PROGRESS",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            // Resource Not Found
            Self::ClubNotFound => "CLUB_NOT_FOUND",
            Self::TeamNotFound => "TEAM_NOT_FOUND",
            Self::SeasonNotFound => "SEASON_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::FixtureNotFound => "FIXTURE_NOT_FOUND",
            Self::SquadNotFound => "SQUAD_NOT_FOUND",
            Self::MatchStateNotFound => "MATCH_STATE_NOT_FOUND",
            Self::TrainingSessionNotFound => "TRAINING_SESSION_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            // Business Logic Conflicts
            Self::MatchAlreadyStarted => "MATCH_ALREADY_STARTED",
            Self::InvalidStatusTransition => "INVALID_STATUS_TRANSITION",
            Self::SquadLocked => "SQUAD_LOCKED",
            Self::UniqueClubName => "UNIQUE_CLUB_NAME",
            Self::UniqueMembership => "UNIQUE_MEMBERSHIP",
            Self::OptimisticLock => "OPTIMISTIC_LOCK",
            Self::Conflict => "CONFLICT",

            // System Errors
            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",

            // Database Constraint Violations
            Self::UniqueViolation => "UNIQUE_VIOLATION",
            Self::FkViolation => "FK_VIOLATION",
            Self::CheckViolation => "CHECK_VIOLATION",
            Self::RecordNotFound => "RECORD_NOT_FOUND",

            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_strings() {
        assert_eq!(ErrorCode::Unauthorized.as_str(), "UNAUTHORIZED");
        assert_eq!(
            ErrorCode::UnauthorizedMissingBearer.as_str(),
            "UNAUTHORIZED_MISSING_BEARER"
        );
        assert_eq!(ErrorCode::NotAMember.as_str(), "NOT_A_MEMBER");
        assert_eq!(ErrorCode::InsufficientRole.as_str(), "INSUFFICIENT_ROLE");
        assert_eq!(ErrorCode::InvalidFixtureId.as_str(), "INVALID_FIXTURE_ID");
        assert_eq!(ErrorCode::DuplicatePlayer.as_str(), "DUPLICATE_PLAYER");
        assert_eq!(ErrorCode::BenchOverflow.as_str(), "BENCH_OVERFLOW");
        assert_eq!(ErrorCode::SquadMissing.as_str(), "SQUAD_MISSING");
        assert_eq!(ErrorCode::FixtureNotFound.as_str(), "FIXTURE_NOT_FOUND");
        assert_eq!(
            ErrorCode::MatchAlreadyStarted.as_str(),
            "MATCH_ALREADY_STARTED"
        );
        assert_eq!(
            ErrorCode::InvalidStatusTransition.as_str(),
            "INVALID_STATUS_TRANSITION"
        );
        assert_eq!(ErrorCode::SquadLocked.as_str(), "SQUAD_LOCKED");
        assert_eq!(ErrorCode::OptimisticLock.as_str(), "OPTIMISTIC_LOCK");
        assert_eq!(ErrorCode::DbUnavailable.as_str(), "DB_UNAVAILABLE");
        assert_eq!(ErrorCode::UniqueViolation.as_str(), "UNIQUE_VIOLATION");
        assert_eq!(ErrorCode::FkViolation.as_str(), "FK_VIOLATION");
        assert_eq!(ErrorCode::CheckViolation.as_str(), "CHECK_VIOLATION");
        assert_eq!(ErrorCode::RecordNotFound.as_str(), "RECORD_NOT_FOUND");
        assert_eq!(ErrorCode::Internal.as_str(), "INTERNAL");
        assert_eq!(ErrorCode::ConfigError.as_str(), "CONFIG_ERROR");
    }

    #[test]
    fn test_display_trait() {
        assert_eq!(format!("{}", ErrorCode::Unauthorized), "UNAUTHORIZED");
        assert_eq!(
            format!("{}", ErrorCode::InvalidFixtureId),
            "INVALID_FIXTURE_ID"
        );
        assert_eq!(format!("{}", ErrorCode::SquadLocked), "SQUAD_LOCKED");
    }
}
