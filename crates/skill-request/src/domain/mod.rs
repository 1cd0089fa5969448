//! # Domain Layer
//!
//! Pure request model: variant contract, request types, registry and the
//! assembled envelope. No I/O.

pub mod config;
pub mod envelope;
pub mod errors;
pub mod registry;
pub mod requests;
pub mod variant;
