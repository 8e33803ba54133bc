//! Match lifecycle orchestration: start, half-time, completion, clock and
//! event recording.
//!
//! Starting a match runs inside the caller's transaction: both squads are
//! locked and the state row is inserted atomically. The unique index on
//! match_states.fixture_id means two concurrent starts cannot both succeed;
//! the loser surfaces MATCH_ALREADY_STARTED.

use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::adapters::match_events_sea::{self, EventCreate};
use crate::adapters::match_states_sea::{self, StateCreate, StateUpdate};
use crate::adapters::players_sea;
use crate::adapters::squads_sea::{self, SquadUpdate};
use crate::domain::lineup::STARTING_SLOTS;
use crate::domain::match_phase;
use crate::entities::match_events::{self, EventKind};
use crate::entities::match_squads::SquadSide;
use crate::entities::match_states::{self, MatchHalf, MatchStatus};
use crate::entities::memberships::MemberRole;
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};
use crate::repos;

fn side_label(side: SquadSide) -> &'static str {
    match side {
        SquadSide::Home => "HOME",
        SquadSide::Away => "AWAY",
    }
}

fn ensure_transition(from: MatchStatus, to: MatchStatus) -> Result<(), DomainError> {
    if match_phase::can_transition(from, to) {
        Ok(())
    } else {
        Err(DomainError::conflict(
            ConflictKind::InvalidStatusTransition,
            format!("Cannot move match from {from:?} to {to:?}"),
        ))
    }
}

/// Require the fixture, check the caller has at least `min_role` in the
/// owning club, and return the fixture's club id.
async fn authorize<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    fixture_id: Uuid,
    user_sub: &str,
    min_role: MemberRole,
) -> Result<Uuid, AppError> {
    let fixture = repos::fixtures::require_fixture(conn, fixture_id).await?;
    let club_id = repos::fixtures::fixture_club_id(conn, &fixture).await?;
    repos::memberships::require_role(conn, club_id, user_sub, min_role).await?;
    Ok(club_id)
}

/// Result of starting a match: the new state plus non-blocking warnings
/// about under-populated lineups.
#[derive(Debug)]
pub struct StartMatchOutcome {
    pub state: match_states::Model,
    pub warnings: Vec<String>,
}

/// Start the match for a fixture.
///
/// Requires both HOME and AWAY squads to exist. Locks both squads, then
/// inserts the state row as IN_PROGRESS / H1 / clock 0. Under-populated
/// starting lineups produce warnings but do not block the start.
pub async fn start_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    fixture_id: Uuid,
    user_sub: &str,
) -> Result<StartMatchOutcome, AppError> {
    authorize(conn, fixture_id, user_sub, MemberRole::Coach).await?;

    if let Some(state) = repos::match_states::find_state(conn, fixture_id).await? {
        return Err(DomainError::conflict(
            ConflictKind::MatchAlreadyStarted,
            format!("Match already started (status {:?})", state.status),
        )
        .into());
    }

    let (home, away) = repos::squads::find_pair(conn, fixture_id).await?;
    let (home, away) = match (home, away) {
        (Some(home), Some(away)) => (home, away),
        (home, away) => {
            let mut missing = Vec::new();
            if home.is_none() {
                missing.push("HOME");
            }
            if away.is_none() {
                missing.push("AWAY");
            }
            return Err(DomainError::validation(
                ValidationKind::SquadMissing,
                format!("Cannot start match: missing squad(s): {}", missing.join(", ")),
            )
            .into());
        }
    };

    let mut warnings = Vec::new();
    for squad in [&home, &away] {
        let filled = squad.filled_starting_count();
        if filled < STARTING_SLOTS as usize {
            warnings.push(format!(
                "{} squad has only {filled} of {STARTING_SLOTS} starting positions filled",
                side_label(squad.side)
            ));
        }
    }

    // Lock both squads so the lineup cannot change mid-match
    for squad in [&home, &away] {
        if !squad.locked {
            squads_sea::update_squad(
                conn,
                SquadUpdate::new(squad.id, squad.lock_version).with_locked(true),
            )
            .await?;
        }
    }

    let state = match_states_sea::insert_state(
        conn,
        StateCreate {
            fixture_id,
            status: MatchStatus::InProgress,
            half: MatchHalf::H1,
            started_at: Some(time::OffsetDateTime::now_utc()),
        },
    )
    .await?;

    tracing::info!(
        fixture_id = %fixture_id,
        warnings = warnings.len(),
        "match started"
    );

    Ok(StartMatchOutcome { state, warnings })
}

pub async fn half_time<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    fixture_id: Uuid,
    user_sub: &str,
) -> Result<match_states::Model, AppError> {
    authorize(conn, fixture_id, user_sub, MemberRole::Coach).await?;
    let state = repos::match_states::require_state(conn, fixture_id).await?;
    ensure_transition(state.status, MatchStatus::HalfTime)?;

    let updated = match_states_sea::update_state(
        conn,
        StateUpdate::new(state.id, state.lock_version).with_status(MatchStatus::HalfTime),
    )
    .await?;
    tracing::info!(fixture_id = %fixture_id, "half time");
    Ok(updated)
}

/// Resume from half time: status back to IN_PROGRESS, half becomes H2.
pub async fn second_half<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    fixture_id: Uuid,
    user_sub: &str,
) -> Result<match_states::Model, AppError> {
    authorize(conn, fixture_id, user_sub, MemberRole::Coach).await?;
    let state = repos::match_states::require_state(conn, fixture_id).await?;
    ensure_transition(state.status, MatchStatus::InProgress)?;

    let updated = match_states_sea::update_state(
        conn,
        StateUpdate::new(state.id, state.lock_version)
            .with_status(MatchStatus::InProgress)
            .with_half(MatchHalf::H2),
    )
    .await?;
    tracing::info!(fixture_id = %fixture_id, "second half under way");
    Ok(updated)
}

pub async fn complete_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    fixture_id: Uuid,
    user_sub: &str,
) -> Result<match_states::Model, AppError> {
    authorize(conn, fixture_id, user_sub, MemberRole::Coach).await?;
    let state = repos::match_states::require_state(conn, fixture_id).await?;
    ensure_transition(state.status, MatchStatus::Completed)?;

    let updated = match_states_sea::update_state(
        conn,
        StateUpdate::new(state.id, state.lock_version)
            .with_status(MatchStatus::Completed)
            .with_completed_at(time::OffsetDateTime::now_utc()),
    )
    .await?;
    tracing::info!(
        fixture_id = %fixture_id,
        home = updated.home_score,
        away = updated.away_score,
        "match completed"
    );
    Ok(updated)
}

/// Set the match clock. Only valid while the match is in progress.
pub async fn set_clock<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    fixture_id: Uuid,
    seconds: i32,
    user_sub: &str,
) -> Result<match_states::Model, AppError> {
    if seconds < 0 {
        return Err(DomainError::validation(
            ValidationKind::InvalidClock,
            format!("Clock cannot be negative, got {seconds}"),
        )
        .into());
    }
    authorize(conn, fixture_id, user_sub, MemberRole::Coach).await?;
    let state = repos::match_states::require_state(conn, fixture_id).await?;
    if state.status != MatchStatus::InProgress {
        return Err(DomainError::validation(
            ValidationKind::MatchNotInProgress,
            format!("Clock can only move while in progress (status {:?})", state.status),
        )
        .into());
    }

    Ok(match_states_sea::update_state(
        conn,
        StateUpdate::new(state.id, state.lock_version).with_clock(seconds),
    )
    .await?)
}

/// Input for recording a match event.
#[derive(Debug, Clone)]
pub struct RecordEvent {
    pub side: SquadSide,
    pub kind: EventKind,
    pub player_id: Option<Uuid>,
    pub match_clock_seconds: i32,
}

/// Record an event and recompute the scoreboard from the full event list.
pub async fn record_event<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    fixture_id: Uuid,
    input: RecordEvent,
    user_sub: &str,
) -> Result<(match_events::Model, match_states::Model), AppError> {
    if input.match_clock_seconds < 0 {
        return Err(DomainError::validation(
            ValidationKind::InvalidClock,
            format!("Clock cannot be negative, got {}", input.match_clock_seconds),
        )
        .into());
    }
    let club_id = authorize(conn, fixture_id, user_sub, MemberRole::Coach).await?;
    let state = repos::match_states::require_state(conn, fixture_id).await?;
    if state.status != MatchStatus::InProgress {
        return Err(DomainError::validation(
            ValidationKind::MatchNotInProgress,
            format!("Events can only be recorded while in progress (status {:?})", state.status),
        )
        .into());
    }

    if let Some(player_id) = input.player_id {
        let known = players_sea::ids_in_club(conn, club_id, &[player_id]).await?;
        if known.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::PlayerNotInClub,
                format!("Player {player_id} does not belong to this club"),
            )
            .into());
        }
    }

    let event = match_events_sea::insert_event(
        conn,
        EventCreate {
            fixture_id,
            side: input.side,
            kind: input.kind,
            player_id: input.player_id,
            match_clock_seconds: input.match_clock_seconds,
        },
    )
    .await?;

    let state = sync_scores(conn, fixture_id, state.id).await?;
    tracing::info!(
        fixture_id = %fixture_id,
        kind = ?event.kind,
        side = side_label(event.side),
        "event recorded"
    );
    Ok((event, state))
}

/// Remove a mis-recorded event and recompute the scoreboard.
pub async fn delete_event<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    fixture_id: Uuid,
    event_id: Uuid,
    user_sub: &str,
) -> Result<match_states::Model, AppError> {
    authorize(conn, fixture_id, user_sub, MemberRole::Coach).await?;
    let state = repos::match_states::require_state(conn, fixture_id).await?;

    let deleted = match_events_sea::delete_event(conn, event_id).await?;
    if deleted == 0 {
        return Err(DomainError::not_found(
            NotFoundKind::Other("Event".to_string()),
            format!("Event {event_id} not found"),
        )
        .into());
    }

    sync_scores(conn, fixture_id, state.id).await
}

/// Recompute (home, away) from the event list and write it to the state row.
async fn sync_scores<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    fixture_id: Uuid,
    state_id: Uuid,
) -> Result<match_states::Model, AppError> {
    let events = match_events_sea::list_by_fixture(conn, fixture_id).await?;
    let (home, away) =
        match_phase::score_from_events(events.iter().map(|e| (&e.side, &e.kind)));

    // Refetch for the current lock_version: the caller may have updated the
    // row since it was loaded.
    let state = repos::match_states::require_state(conn, fixture_id).await?;
    if state.home_score == home && state.away_score == away {
        return Ok(state);
    }
    debug_assert_eq!(state.id, state_id);

    Ok(match_states_sea::update_state(
        conn,
        StateUpdate::new(state.id, state.lock_version).with_scores(home, away),
    )
    .await?)
}

pub async fn get_state<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    fixture_id: Uuid,
    user_sub: &str,
) -> Result<match_states::Model, AppError> {
    authorize(conn, fixture_id, user_sub, MemberRole::Member).await?;
    Ok(repos::match_states::require_state(conn, fixture_id).await?)
}

pub async fn list_events<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    fixture_id: Uuid,
    user_sub: &str,
) -> Result<Vec<match_events::Model>, AppError> {
    authorize(conn, fixture_id, user_sub, MemberRole::Member).await?;
    Ok(match_events_sea::list_by_fixture(conn, fixture_id).await?)
}
