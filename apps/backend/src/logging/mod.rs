//! Logging helpers shared across the web and infra layers.

pub mod pii;
