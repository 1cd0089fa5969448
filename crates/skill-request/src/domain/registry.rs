//! # Request Type Registry
//!
//! Maps wire discriminators (`request.type`) to variant constructors.
//!
//! The table is built once on first use from the closed list below and is
//! never mutated afterwards, so concurrent lookups need no locking. Lookup is
//! an exact, case-sensitive string match.

use crate::domain::errors::RequestError;
use crate::domain::requests::{
    ElementSelectedRequest, ExceptionEncounteredRequest, IntentRequest, LaunchRequest,
    NextCommandIssued, PauseCommandIssued, PlayCommandIssued, PlaybackFailedRequest,
    PlaybackFinishedRequest, PlaybackNearlyFinishedRequest, PlaybackStartedRequest,
    PlaybackStoppedRequest, PreviousCommandIssued, SessionEndedRequest,
};
use crate::domain::variant::{RequestKind, RequestVariant};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::trace;

/// Builds a typed request from the raw `request` object.
pub type VariantConstructor = fn(&Value) -> RequestVariant;

fn construct<R: RequestKind>(raw: &Value) -> RequestVariant {
    R::from_raw(raw).into()
}

fn entry<R: RequestKind>() -> (&'static str, VariantConstructor) {
    (R::TYPE, construct::<R>)
}

/// Registry of every supported request type.
pub static REQUEST_TYPES: LazyLock<HashMap<&'static str, VariantConstructor>> =
    LazyLock::new(|| {
        let entries = [
            // --- Standard ---
            entry::<IntentRequest>(),
            entry::<LaunchRequest>(),
            entry::<SessionEndedRequest>(),
            // --- AudioPlayer ---
            entry::<PlaybackStartedRequest>(),
            entry::<PlaybackNearlyFinishedRequest>(),
            entry::<PlaybackFinishedRequest>(),
            entry::<PlaybackStoppedRequest>(),
            entry::<PlaybackFailedRequest>(),
            // --- PlaybackController ---
            entry::<NextCommandIssued>(),
            entry::<PauseCommandIssued>(),
            entry::<PlayCommandIssued>(),
            entry::<PreviousCommandIssued>(),
            // --- System ---
            entry::<ExceptionEncounteredRequest>(),
            // --- Display ---
            entry::<ElementSelectedRequest>(),
        ];

        entries.into_iter().collect()
    });

/// Look up the constructor for `discriminator`.
pub fn resolve(discriminator: &str) -> Result<VariantConstructor, RequestError> {
    let found = REQUEST_TYPES.get(discriminator).copied();
    trace!(request_type = discriminator, found = found.is_some(), "Registry lookup");
    found.ok_or_else(|| RequestError::UnknownRequestType(discriminator.to_string()))
}

/// Check if a request type is registered.
pub fn is_request_type_supported(discriminator: &str) -> bool {
    REQUEST_TYPES.contains_key(discriminator)
}

/// All registered discriminators, sorted.
pub fn supported_request_types() -> Vec<&'static str> {
    let mut types: Vec<_> = REQUEST_TYPES.keys().copied().collect();
    types.sort_unstable();
    types
}
