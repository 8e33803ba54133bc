//! Pure match lifecycle rules: status transitions and event scoring.

use crate::entities::match_events::EventKind;
use crate::entities::match_squads::SquadSide;
use crate::entities::match_states::MatchStatus;

/// Whether `from` -> `to` is a legal status transition.
///
/// NOT_STARTED -> IN_PROGRESS -> HALF_TIME -> IN_PROGRESS -> COMPLETED
pub fn can_transition(from: MatchStatus, to: MatchStatus) -> bool {
    use MatchStatus::*;
    matches!(
        (from, to),
        (NotStarted, InProgress)
            | (InProgress, HalfTime)
            | (HalfTime, InProgress)
            | (InProgress, Completed)
    )
}

/// Points awarded for an event under rugby union scoring.
pub fn event_points(kind: EventKind) -> i32 {
    match kind {
        EventKind::Try => 5,
        EventKind::Conversion => 2,
        EventKind::PenaltyGoal => 3,
        EventKind::DropGoal => 3,
        EventKind::YellowCard | EventKind::RedCard | EventKind::Substitution => 0,
    }
}

/// Recompute (home, away) score from the full event list.
///
/// Scores are derived rather than incrementally adjusted so that deleting a
/// mis-recorded event keeps the scoreboard consistent.
pub fn score_from_events<'a, I>(events: I) -> (i32, i32)
where
    I: IntoIterator<Item = (&'a SquadSide, &'a EventKind)>,
{
    events
        .into_iter()
        .fold((0, 0), |(home, away), (side, kind)| {
            let points = event_points(*kind);
            match side {
                SquadSide::Home => (home + points, away),
                SquadSide::Away => (home, away + points),
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use MatchStatus::*;

    #[test]
    fn legal_transitions() {
        assert!(can_transition(NotStarted, InProgress));
        assert!(can_transition(InProgress, HalfTime));
        assert!(can_transition(HalfTime, InProgress));
        assert!(can_transition(InProgress, Completed));
    }

    #[test]
    fn illegal_transitions() {
        assert!(!can_transition(NotStarted, HalfTime));
        assert!(!can_transition(NotStarted, Completed));
        assert!(!can_transition(HalfTime, Completed));
        assert!(!can_transition(Completed, InProgress));
        assert!(!can_transition(InProgress, InProgress));
        assert!(!can_transition(InProgress, NotStarted));
    }

    #[test]
    fn scoring_values() {
        assert_eq!(event_points(EventKind::Try), 5);
        assert_eq!(event_points(EventKind::Conversion), 2);
        assert_eq!(event_points(EventKind::PenaltyGoal), 3);
        assert_eq!(event_points(EventKind::DropGoal), 3);
        assert_eq!(event_points(EventKind::YellowCard), 0);
        assert_eq!(event_points(EventKind::Substitution), 0);
    }

    #[test]
    fn score_is_derived_per_side() {
        let events = [
            (SquadSide::Home, EventKind::Try),
            (SquadSide::Home, EventKind::Conversion),
            (SquadSide::Away, EventKind::PenaltyGoal),
            (SquadSide::Home, EventKind::YellowCard),
            (SquadSide::Away, EventKind::DropGoal),
        ];
        let (home, away) = score_from_events(events.iter().map(|(s, k)| (s, k)));
        assert_eq!(home, 7);
        assert_eq!(away, 6);
    }
}
