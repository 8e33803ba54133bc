//! DTOs for match_states_sea adapter.

use time::OffsetDateTime;
use uuid::Uuid;

use crate::entities::match_states::{MatchHalf, MatchStatus};

/// DTO for creating the match state row when a match starts.
#[derive(Debug, Clone)]
pub struct StateCreate {
    pub fixture_id: Uuid,
    pub status: MatchStatus,
    pub half: MatchHalf,
    pub started_at: Option<OffsetDateTime>,
}

/// Unified DTO for updating match state fields with optimistic locking.
///
/// All updates are atomic with a single version increment. `expected_version`
/// validates that the current lock_version matches before updating.
#[derive(Debug, Clone)]
pub struct StateUpdate {
    pub id: Uuid,
    pub status: Option<MatchStatus>,
    pub half: Option<MatchHalf>,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub match_clock_seconds: Option<i32>,
    /// Three-state: None = no change, Some(Some(ts)) = set, Some(None) = clear.
    pub completed_at: Option<Option<OffsetDateTime>>,
    pub expected_version: i32,
}

impl StateUpdate {
    pub fn new(id: Uuid, expected_version: i32) -> Self {
        Self {
            id,
            status: None,
            half: None,
            home_score: None,
            away_score: None,
            match_clock_seconds: None,
            completed_at: None,
            expected_version,
        }
    }

    pub fn with_status(mut self, status: MatchStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_half(mut self, half: MatchHalf) -> Self {
        self.half = Some(half);
        self
    }

    pub fn with_scores(mut self, home: i32, away: i32) -> Self {
        self.home_score = Some(home);
        self.away_score = Some(away);
        self
    }

    pub fn with_clock(mut self, seconds: i32) -> Self {
        self.match_clock_seconds = Some(seconds);
        self
    }

    pub fn with_completed_at(mut self, ts: OffsetDateTime) -> Self {
        self.completed_at = Some(Some(ts));
        self
    }
}
