//! # Skill Request
//!
//! Turns an inbound voice-platform request (JSON body plus the
//! `SignatureCertChainUrl` and `Signature` headers) into a typed, navigable
//! [`RequestEnvelope`].
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): request types, the variant contract, the
//!   type registry and the envelope. Pure data transformation, no I/O.
//! - **Ports Layer** (`ports/`): the inbound `RequestParsingApi` trait.
//! - **Service Layer** (`service.rs`): the parse pipeline.
//!
//! ```text
//! body + headers ──> decode ──> session / context ──> registry[request.type]
//!                                                          │
//!                        envelope <── header check <── variant::from_raw
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use skill_request::{RequestParser, RequestParsingApi, RequestVariant};
//!
//! let parser = RequestParser::default();
//! let envelope = parser.parse(&body, &cert_chain_url, &signature)?;
//!
//! if let RequestVariant::Intent(intent) = envelope.request() {
//!     println!("{:?}", intent.intent_name());
//! }
//! ```
//!
//! ## Security Notes
//!
//! - Signed request types are rejected when either signature header is empty.
//! - No cryptographic verification and no timestamp freshness check happen
//!   here; the raw body and headers are kept on the envelope for the verifier.
//! - Unknown request types are rejected, never passed through.

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use domain::config::ParserConfig;
pub use domain::envelope::RequestEnvelope;
pub use domain::errors::{ConfigError, RequestError};
pub use domain::registry::{
    is_request_type_supported, resolve, supported_request_types, VariantConstructor,
};
pub use domain::requests::*;
pub use domain::variant::{ErrorInfo, RequestHeader, RequestKind, RequestVariant};
pub use ports::inbound::RequestParsingApi;
pub use service::{parse_request, RequestParser};
