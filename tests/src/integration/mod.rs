//! Cross-crate flows: telemetry bootstrap, parsing and envelope navigation.

pub mod flows;
