//! Test support utilities shared by the backend's unit and integration tests:
//! one-time logging initialization and Problem Details assertions.

pub mod logging;
pub mod problem_details;
