//! # Request Variant Contract
//!
//! Every request type the platform can send implements [`RequestKind`] and is
//! wrapped by one arm of the closed [`RequestVariant`] sum type.
//!
//! ## Adding a request type
//!
//! 1. Define the record and implement `RequestKind` for it.
//! 2. Add an arm to `RequestVariant` (and to `on_variant!` / `impl_variant_from!`).
//! 3. Add one entry to the registry table.
//!
//! The dispatcher itself never changes.

use crate::domain::requests::{
    ElementSelectedRequest, ExceptionEncounteredRequest, IntentRequest, LaunchRequest,
    NextCommandIssued, PauseCommandIssued, PlayCommandIssued, PlaybackFailedRequest,
    PlaybackFinishedRequest, PlaybackNearlyFinishedRequest, PlaybackStartedRequest,
    PlaybackStoppedRequest, PreviousCommandIssued, SessionEndedRequest,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use shared_types::raw;

/// Shared contract for a single request type.
pub trait RequestKind: Sized + Into<RequestVariant> {
    /// Wire-level discriminator (`request.type`). Unique across the registry.
    const TYPE: &'static str;

    /// Whether the platform signature headers must be present for this type.
    const VALIDATES_SIGNATURE: bool;

    /// Build the record from the raw `request` object.
    ///
    /// Reads only the keys this type owns. Never fails: absent keys leave
    /// their field unset.
    fn from_raw(raw: &Value) -> Self;

    /// Fields common to every request type.
    fn header(&self) -> &RequestHeader;

    fn validate_signature(&self) -> bool {
        Self::VALIDATES_SIGNATURE
    }
}

// =============================================================================
// COMMON FIELDS
// =============================================================================

/// Fields present on every request type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestHeader {
    pub request_id: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    pub locale: Option<String>,
}

impl RequestHeader {
    pub fn parse(raw: &Value) -> Self {
        Self {
            request_id: raw::string(raw, "requestId"),
            timestamp: parse_timestamp(raw),
            locale: raw::string(raw, "locale"),
        }
    }
}

/// `timestamp` is an RFC 3339 string; some callbacks send epoch milliseconds.
fn parse_timestamp(raw: &Value) -> Option<DateTime<Utc>> {
    if let Some(text) = raw::string(raw, "timestamp") {
        return DateTime::parse_from_rfc3339(&text)
            .ok()
            .map(|dt| dt.with_timezone(&Utc));
    }
    raw::integer(raw, "timestamp").and_then(DateTime::<Utc>::from_timestamp_millis)
}

/// Error description carried by failure callbacks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ErrorInfo {
    #[serde(rename = "type")]
    pub error_type: Option<String>,
    pub message: Option<String>,
}

impl ErrorInfo {
    pub fn parse(raw: &Value) -> Self {
        Self {
            error_type: raw::string(raw, "type"),
            message: raw::string(raw, "message"),
        }
    }
}

// =============================================================================
// THE CLOSED VARIANT SET
// =============================================================================

/// One typed request, tagged by its wire discriminator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum RequestVariant {
    // Standard
    #[serde(rename = "IntentRequest")]
    Intent(IntentRequest),
    #[serde(rename = "LaunchRequest")]
    Launch(LaunchRequest),
    #[serde(rename = "SessionEndedRequest")]
    SessionEnded(SessionEndedRequest),
    // AudioPlayer
    #[serde(rename = "AudioPlayer.PlaybackStarted")]
    PlaybackStarted(PlaybackStartedRequest),
    #[serde(rename = "AudioPlayer.PlaybackNearlyFinished")]
    PlaybackNearlyFinished(PlaybackNearlyFinishedRequest),
    #[serde(rename = "AudioPlayer.PlaybackFinished")]
    PlaybackFinished(PlaybackFinishedRequest),
    #[serde(rename = "AudioPlayer.PlaybackStopped")]
    PlaybackStopped(PlaybackStoppedRequest),
    #[serde(rename = "AudioPlayer.PlaybackFailed")]
    PlaybackFailed(PlaybackFailedRequest),
    // PlaybackController
    #[serde(rename = "PlaybackController.NextCommandIssued")]
    NextCommandIssued(NextCommandIssued),
    #[serde(rename = "PlaybackController.PauseCommandIssued")]
    PauseCommandIssued(PauseCommandIssued),
    #[serde(rename = "PlaybackController.PlayCommandIssued")]
    PlayCommandIssued(PlayCommandIssued),
    #[serde(rename = "PlaybackController.PreviousCommandIssued")]
    PreviousCommandIssued(PreviousCommandIssued),
    // System
    #[serde(rename = "System.ExceptionEncountered")]
    ExceptionEncountered(ExceptionEncounteredRequest),
    // Display
    #[serde(rename = "Display.ElementSelected")]
    ElementSelected(ElementSelectedRequest),
}

/// Evaluate `$body` with `$inner` bound to the wrapped record, for every arm.
macro_rules! on_variant {
    ($value:expr, $inner:ident => $body:expr) => {
        match $value {
            RequestVariant::Intent($inner) => $body,
            RequestVariant::Launch($inner) => $body,
            RequestVariant::SessionEnded($inner) => $body,
            RequestVariant::PlaybackStarted($inner) => $body,
            RequestVariant::PlaybackNearlyFinished($inner) => $body,
            RequestVariant::PlaybackFinished($inner) => $body,
            RequestVariant::PlaybackStopped($inner) => $body,
            RequestVariant::PlaybackFailed($inner) => $body,
            RequestVariant::NextCommandIssued($inner) => $body,
            RequestVariant::PauseCommandIssued($inner) => $body,
            RequestVariant::PlayCommandIssued($inner) => $body,
            RequestVariant::PreviousCommandIssued($inner) => $body,
            RequestVariant::ExceptionEncountered($inner) => $body,
            RequestVariant::ElementSelected($inner) => $body,
        }
    };
}

macro_rules! impl_variant_from {
    ($($arm:ident => $record:ty),+ $(,)?) => {
        $(
            impl From<$record> for RequestVariant {
                fn from(request: $record) -> Self {
                    RequestVariant::$arm(request)
                }
            }
        )+
    };
}

impl_variant_from!(
    Intent => IntentRequest,
    Launch => LaunchRequest,
    SessionEnded => SessionEndedRequest,
    PlaybackStarted => PlaybackStartedRequest,
    PlaybackNearlyFinished => PlaybackNearlyFinishedRequest,
    PlaybackFinished => PlaybackFinishedRequest,
    PlaybackStopped => PlaybackStoppedRequest,
    PlaybackFailed => PlaybackFailedRequest,
    NextCommandIssued => NextCommandIssued,
    PauseCommandIssued => PauseCommandIssued,
    PlayCommandIssued => PlayCommandIssued,
    PreviousCommandIssued => PreviousCommandIssued,
    ExceptionEncountered => ExceptionEncounteredRequest,
    ElementSelected => ElementSelectedRequest,
);

/// Discriminator of a record, usable through a trait-generic reference.
fn type_of<R: RequestKind>(_: &R) -> &'static str {
    R::TYPE
}

impl RequestVariant {
    /// The wire discriminator this request was dispatched on.
    pub fn type_discriminator(&self) -> &'static str {
        on_variant!(self, r => type_of(r))
    }

    /// Whether this request type requires the signature headers.
    pub fn requires_signature_validation(&self) -> bool {
        on_variant!(self, r => r.validate_signature())
    }

    pub fn header(&self) -> &RequestHeader {
        on_variant!(self, r => r.header())
    }

    pub fn request_id(&self) -> Option<&str> {
        self.header().request_id.as_deref()
    }

    pub fn as_intent(&self) -> Option<&IntentRequest> {
        match self {
            RequestVariant::Intent(intent) => Some(intent),
            _ => None,
        }
    }
}
