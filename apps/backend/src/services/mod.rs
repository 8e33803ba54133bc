pub mod clubs;
pub mod fixtures;
pub mod match_flow;
pub mod players;
pub mod squads;
pub mod teams;
pub mod training;
