//! DTOs for squads_sea adapter.

use uuid::Uuid;

use crate::entities::match_squads::SquadSide;
use crate::entities::squad_slots::SlotKind;

/// DTO for creating a match squad.
#[derive(Debug, Clone)]
pub struct SquadCreate {
    pub fixture_id: Uuid,
    pub side: SquadSide,
}

/// DTO for a single slot row when replacing a squad's slots.
#[derive(Debug, Clone)]
pub struct SlotInsert {
    pub slot_kind: SlotKind,
    pub position: i16,
    pub player_id: Option<Uuid>,
    pub jersey_number: Option<i16>,
}

/// DTO for updating a squad with optimistic locking.
///
/// `expected_version` validates that the current lock_version matches before
/// updating; on mismatch the adapter returns a DbErr::Custom OPTIMISTIC_LOCK
/// payload carrying the expected and actual versions.
#[derive(Debug, Clone)]
pub struct SquadUpdate {
    pub id: Uuid,
    pub locked: Option<bool>,
    pub expected_version: i32,
}

impl SquadUpdate {
    pub fn new(id: Uuid, expected_version: i32) -> Self {
        Self {
            id,
            locked: None,
            expected_version,
        }
    }

    pub fn with_locked(mut self, locked: bool) -> Self {
        self.locked = Some(locked);
        self
    }
}
