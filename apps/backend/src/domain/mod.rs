pub mod lineup;
pub mod match_phase;
