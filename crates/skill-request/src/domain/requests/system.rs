//! System notifications.

use crate::domain::variant::{ErrorInfo, RequestHeader, RequestKind};
use serde::Serialize;
use serde_json::Value;
use shared_types::raw;

/// The request whose response triggered the exception.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExceptionCause {
    pub request_id: Option<String>,
}

impl ExceptionCause {
    pub fn parse(raw: &Value) -> Self {
        Self {
            request_id: raw::string(raw, "requestId"),
        }
    }
}

/// `System.ExceptionEncountered`: a previous response from the skill could not be executed.
///
/// A platform-side error report rather than a user turn; accepted without
/// the signature headers. Skills must not answer it with speech.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExceptionEncounteredRequest {
    #[serde(flatten)]
    pub header: RequestHeader,
    pub error: Option<ErrorInfo>,
    pub cause: Option<ExceptionCause>,
}

impl RequestKind for ExceptionEncounteredRequest {
    const TYPE: &'static str = "System.ExceptionEncountered";
    const VALIDATES_SIGNATURE: bool = false;

    fn from_raw(raw: &Value) -> Self {
        Self {
            header: RequestHeader::parse(raw),
            error: raw::nested(raw, "error", ErrorInfo::parse),
            cause: raw::nested(raw, "cause", ExceptionCause::parse),
        }
    }

    fn header(&self) -> &RequestHeader {
        &self.header
    }
}
