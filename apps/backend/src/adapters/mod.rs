pub mod clubs_sea;
pub mod development_notes_sea;
pub mod fixtures_sea;
pub mod match_events_sea;
pub mod match_states_sea;
pub mod memberships_sea;
pub mod players_sea;
pub mod seasons_sea;
pub mod squads_sea;
pub mod teams_sea;
pub mod training_sea;
