//! # Shared Types Crate
//!
//! Envelope value objects reachable from an inbound platform request:
//! the `session` block, the `context` block, and the identity and device
//! records nested inside them.
//!
//! ## Design Principles
//!
//! - **Inert Data**: Every type is a read-only record with a `parse(&Value)`
//!   factory. Nothing here performs I/O or validation beyond shape checks.
//! - **Tolerant Parsing**: Factories never fail. A missing or mistyped key
//!   leaves the corresponding field absent (see [`raw`]).
//! - **Wire Names**: Serialization uses the platform's own key spelling so
//!   records can be forwarded verbatim.

pub mod context;
pub mod raw;
pub mod session;

pub use context::{AudioPlayerState, Context, Device, PlayerActivity, System};
pub use raw::RawObject;
pub use session::{Application, Permissions, Session, User};
