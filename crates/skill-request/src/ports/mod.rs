//! # Ports Layer
//!
//! Trait definitions for callers that drive request intake.

pub mod inbound;
