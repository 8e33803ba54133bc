//! Matchday squad orchestration: reading squads and full-overwrite lineup
//! submission with optimistic locking.

use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::adapters::players_sea;
use crate::adapters::squads_sea::{self, SlotInsert, SquadCreate, SquadUpdate};
use crate::domain::lineup::{self, LineupInput};
use crate::entities::match_squads::SquadSide;
use crate::entities::memberships::MemberRole;
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};
use crate::repos;
use crate::repos::squads::Squad;

pub async fn get_squad<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    fixture_id: Uuid,
    side: SquadSide,
    user_sub: &str,
) -> Result<Squad, AppError> {
    let fixture = repos::fixtures::require_fixture(conn, fixture_id).await?;
    let club_id = repos::fixtures::fixture_club_id(conn, &fixture).await?;
    repos::memberships::require_role(conn, club_id, user_sub, MemberRole::Member).await?;
    Ok(repos::squads::require_squad(conn, fixture_id, side).await?)
}

/// Submit a full lineup for one side of a fixture.
///
/// The submission replaces every slot of the squad. For an existing squad
/// the caller must supply the squad's current `lock_version`; a stale
/// version surfaces OPTIMISTIC_LOCK. Locked squads reject edits outright.
pub async fn put_lineup<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    fixture_id: Uuid,
    side: SquadSide,
    input: LineupInput,
    expected_version: Option<i32>,
    user_sub: &str,
) -> Result<Squad, AppError> {
    let fixture = repos::fixtures::require_fixture(conn, fixture_id).await?;
    let club_id = repos::fixtures::fixture_club_id(conn, &fixture).await?;
    repos::memberships::require_role(conn, club_id, user_sub, MemberRole::Coach).await?;

    let slots = lineup::resolve_lineup(&input)?;

    // Every referenced player must belong to the fixture's club
    let wanted = input.player_ids();
    let known = players_sea::ids_in_club(conn, club_id, &wanted).await?;
    if known.len() != wanted.len() {
        let missing: Vec<String> = wanted
            .iter()
            .filter(|id| !known.contains(id))
            .map(|id| id.to_string())
            .collect();
        return Err(DomainError::validation(
            ValidationKind::PlayerNotInClub,
            format!("Players not in this club: {}", missing.join(", ")),
        )
        .into());
    }

    let squad_id = match squads_sea::find_by_fixture_and_side(conn, fixture_id, side).await? {
        None => {
            let squad = squads_sea::create_squad(conn, SquadCreate { fixture_id, side }).await?;
            squad.id
        }
        Some(squad) => {
            if squad.locked {
                return Err(DomainError::conflict(
                    ConflictKind::SquadLocked,
                    "Squad is locked; the match has started".to_string(),
                )
                .into());
            }
            let expected = expected_version.ok_or_else(|| {
                DomainError::validation_other("lockVersion is required when updating a squad")
            })?;
            // CAS bump; stale versions surface OPTIMISTIC_LOCK
            squads_sea::update_squad(conn, SquadUpdate::new(squad.id, expected)).await?;
            squad.id
        }
    };

    let rows: Vec<SlotInsert> = slots
        .into_iter()
        .map(|s| SlotInsert {
            slot_kind: s.slot_kind,
            position: s.position,
            player_id: s.player_id,
            jersey_number: s.jersey_number,
        })
        .collect();
    squads_sea::replace_slots(conn, squad_id, rows).await?;

    let squad = repos::squads::require_squad(conn, fixture_id, side).await?;
    tracing::info!(
        fixture_id = %fixture_id,
        side = ?side,
        filled = squad.filled_starting_count(),
        bench = squad.bench.len(),
        "lineup saved"
    );
    Ok(squad)
}
