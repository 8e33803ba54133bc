pub mod clubs;
pub mod development_notes;
pub mod fixtures;
pub mod match_events;
pub mod match_squads;
pub mod match_states;
pub mod memberships;
pub mod players;
pub mod seasons;
pub mod squad_slots;
pub mod teams;
pub mod training_sessions;
