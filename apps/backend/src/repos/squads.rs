//! Squad repository: assembles squads and their slot rows into a domain view.

use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::adapters::squads_sea;
use crate::entities::match_squads::SquadSide;
use crate::entities::squad_slots::SlotKind;
use crate::errors::domain::{DomainError, NotFoundKind};

/// One slot in a squad view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotView {
    pub position: i16,
    pub player_id: Option<Uuid>,
    pub jersey_number: Option<i16>,
}

/// A matchday squad with its slots partitioned by kind.
#[derive(Debug, Clone)]
pub struct Squad {
    pub id: Uuid,
    pub fixture_id: Uuid,
    pub side: SquadSide,
    pub locked: bool,
    pub lock_version: i32,
    pub starting: Vec<SlotView>,
    pub bench: Vec<SlotView>,
}

impl Squad {
    /// Starting positions with a player assigned.
    pub fn filled_starting_count(&self) -> usize {
        self.starting.iter().filter(|s| s.player_id.is_some()).count()
    }
}

async fn load_slots<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    squad: crate::entities::match_squads::Model,
) -> Result<Squad, DomainError> {
    let rows = squads_sea::list_slots(conn, squad.id).await?;

    let mut starting = Vec::new();
    let mut bench = Vec::new();
    for row in rows {
        let view = SlotView {
            position: row.position,
            player_id: row.player_id,
            jersey_number: row.jersey_number,
        };
        match row.slot_kind {
            SlotKind::Starting => starting.push(view),
            SlotKind::Bench => bench.push(view),
        }
    }

    Ok(Squad {
        id: squad.id,
        fixture_id: squad.fixture_id,
        side: squad.side,
        locked: squad.locked,
        lock_version: squad.lock_version,
        starting,
        bench,
    })
}

pub async fn find_squad<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    fixture_id: Uuid,
    side: SquadSide,
) -> Result<Option<Squad>, DomainError> {
    match squads_sea::find_by_fixture_and_side(conn, fixture_id, side).await? {
        Some(squad) => Ok(Some(load_slots(conn, squad).await?)),
        None => Ok(None),
    }
}

pub async fn require_squad<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    fixture_id: Uuid,
    side: SquadSide,
) -> Result<Squad, DomainError> {
    find_squad(conn, fixture_id, side).await?.ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::Squad,
            format!("No {side:?} squad for fixture {fixture_id}"),
        )
    })
}

/// Load both squads of a fixture, if present.
pub async fn find_pair<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    fixture_id: Uuid,
) -> Result<(Option<Squad>, Option<Squad>), DomainError> {
    let home = find_squad(conn, fixture_id, SquadSide::Home).await?;
    let away = find_squad(conn, fixture_id, SquadSide::Away).await?;
    Ok((home, away))
}
