pub mod fixtures;
pub mod match_states;
pub mod memberships;
pub mod squads;
