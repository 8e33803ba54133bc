//! Pure lineup rules: slot layout, jersey assignment, and validation.
//!
//! A matchday squad holds exactly 15 starting slots (positions 1-15, jersey
//! number equals position) plus up to 15 bench slots (jerseys 16 upward).
//! Starting slots may be left unfilled while the lineup is being drafted.

use std::collections::HashSet;

use uuid::Uuid;

use crate::entities::squad_slots::SlotKind;
use crate::errors::domain::{DomainError, ValidationKind};

/// Number of starting positions in a rugby union XV.
pub const STARTING_SLOTS: u8 = 15;
/// Maximum number of bench (replacement) slots.
pub const MAX_BENCH: usize = 15;

/// One starting assignment in a submitted lineup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartingEntry {
    /// Position 1-15 (loosehead prop through fullback)
    pub position: u8,
    pub player_id: Uuid,
}

/// One bench assignment in a submitted lineup; order determines jersey number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchEntry {
    pub player_id: Uuid,
}

/// A full lineup submission (full overwrite of the squad's slots).
#[derive(Debug, Clone, Default)]
pub struct LineupInput {
    pub starting: Vec<StartingEntry>,
    pub bench: Vec<BenchEntry>,
}

/// A resolved slot row ready for persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotAssignment {
    pub slot_kind: SlotKind,
    pub position: i16,
    pub player_id: Option<Uuid>,
    pub jersey_number: Option<i16>,
}

impl LineupInput {
    /// All player ids referenced by the submission, in submission order.
    pub fn player_ids(&self) -> Vec<Uuid> {
        self.starting
            .iter()
            .map(|e| e.player_id)
            .chain(self.bench.iter().map(|e| e.player_id))
            .collect()
    }
}

/// Validate a lineup submission and resolve it into slot rows.
///
/// Always produces all 15 starting rows; positions without an assigned player
/// get `player_id: None` and no jersey. Starting jerseys equal the position
/// number; bench jerseys run 16 upward in submission order.
pub fn resolve_lineup(input: &LineupInput) -> Result<Vec<SlotAssignment>, DomainError> {
    if input.bench.len() > MAX_BENCH {
        return Err(DomainError::validation(
            ValidationKind::BenchOverflow,
            format!(
                "Bench holds at most {} players, got {}",
                MAX_BENCH,
                input.bench.len()
            ),
        ));
    }

    let mut seen_players = HashSet::new();
    for player_id in input.player_ids() {
        if !seen_players.insert(player_id) {
            return Err(DomainError::validation(
                ValidationKind::DuplicatePlayer,
                format!("Player {player_id} appears more than once in the lineup"),
            ));
        }
    }

    let mut by_position: [Option<Uuid>; STARTING_SLOTS as usize] = [None; STARTING_SLOTS as usize];
    for entry in &input.starting {
        if entry.position < 1 || entry.position > STARTING_SLOTS {
            return Err(DomainError::validation(
                ValidationKind::InvalidStartingCount,
                format!(
                    "Starting position must be 1-{STARTING_SLOTS}, got {}",
                    entry.position
                ),
            ));
        }
        let idx = (entry.position - 1) as usize;
        if by_position[idx].is_some() {
            return Err(DomainError::validation(
                ValidationKind::InvalidStartingCount,
                format!("Starting position {} assigned twice", entry.position),
            ));
        }
        by_position[idx] = Some(entry.player_id);
    }

    let mut slots = Vec::with_capacity(STARTING_SLOTS as usize + input.bench.len());
    for (idx, player_id) in by_position.iter().enumerate() {
        let position = (idx + 1) as i16;
        slots.push(SlotAssignment {
            slot_kind: SlotKind::Starting,
            position,
            player_id: *player_id,
            // Jersey number equals starting position
            jersey_number: player_id.map(|_| position),
        });
    }
    for (idx, entry) in input.bench.iter().enumerate() {
        let position = (idx + 1) as i16;
        slots.push(SlotAssignment {
            slot_kind: SlotKind::Bench,
            position,
            player_id: Some(entry.player_id),
            jersey_number: Some(STARTING_SLOTS as i16 + position),
        });
    }

    Ok(slots)
}

/// Number of starting positions with a player assigned.
pub fn filled_starting_count(slots: &[SlotAssignment]) -> usize {
    slots
        .iter()
        .filter(|s| s.slot_kind == SlotKind::Starting && s.player_id.is_some())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_starting() -> Vec<StartingEntry> {
        (1..=15)
            .map(|position| StartingEntry {
                position,
                player_id: Uuid::new_v4(),
            })
            .collect()
    }

    #[test]
    fn full_lineup_resolves_with_jerseys_matching_positions() {
        let input = LineupInput {
            starting: full_starting(),
            bench: (0..8)
                .map(|_| BenchEntry {
                    player_id: Uuid::new_v4(),
                })
                .collect(),
        };

        let slots = resolve_lineup(&input).unwrap();
        assert_eq!(slots.len(), 15 + 8);

        for slot in slots.iter().filter(|s| s.slot_kind == SlotKind::Starting) {
            assert_eq!(slot.jersey_number, Some(slot.position));
        }
        let bench: Vec<_> = slots
            .iter()
            .filter(|s| s.slot_kind == SlotKind::Bench)
            .collect();
        assert_eq!(bench[0].jersey_number, Some(16));
        assert_eq!(bench[7].jersey_number, Some(23));
    }

    #[test]
    fn partial_lineup_keeps_unfilled_positions_empty() {
        let input = LineupInput {
            starting: vec![
                StartingEntry {
                    position: 1,
                    player_id: Uuid::new_v4(),
                },
                StartingEntry {
                    position: 10,
                    player_id: Uuid::new_v4(),
                },
            ],
            bench: vec![],
        };

        let slots = resolve_lineup(&input).unwrap();
        assert_eq!(slots.len(), 15);
        assert_eq!(filled_starting_count(&slots), 2);

        let pos_5 = slots.iter().find(|s| s.position == 5).unwrap();
        assert_eq!(pos_5.player_id, None);
        assert_eq!(pos_5.jersey_number, None);
    }

    #[test]
    fn duplicate_player_across_starting_and_bench_is_rejected() {
        let shared = Uuid::new_v4();
        let input = LineupInput {
            starting: vec![StartingEntry {
                position: 2,
                player_id: shared,
            }],
            bench: vec![BenchEntry { player_id: shared }],
        };

        let err = resolve_lineup(&input).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationKind::DuplicatePlayer, _)
        ));
    }

    #[test]
    fn duplicate_starting_position_is_rejected() {
        let input = LineupInput {
            starting: vec![
                StartingEntry {
                    position: 9,
                    player_id: Uuid::new_v4(),
                },
                StartingEntry {
                    position: 9,
                    player_id: Uuid::new_v4(),
                },
            ],
            bench: vec![],
        };

        let err = resolve_lineup(&input).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationKind::InvalidStartingCount, _)
        ));
    }

    #[test]
    fn position_out_of_range_is_rejected() {
        let input = LineupInput {
            starting: vec![StartingEntry {
                position: 16,
                player_id: Uuid::new_v4(),
            }],
            bench: vec![],
        };

        let err = resolve_lineup(&input).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationKind::InvalidStartingCount, _)
        ));
    }

    #[test]
    fn oversized_bench_is_rejected() {
        let input = LineupInput {
            starting: vec![],
            bench: (0..16)
                .map(|_| BenchEntry {
                    player_id: Uuid::new_v4(),
                })
                .collect(),
        };

        let err = resolve_lineup(&input).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationKind::BenchOverflow, _)
        ));
    }
}
