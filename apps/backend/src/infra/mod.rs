//! Infrastructure layer - database bootstrap, state building, error mapping.

pub mod db;
pub mod db_errors;
pub mod state;
