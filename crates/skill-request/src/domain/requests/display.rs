//! Display interface events.

use crate::domain::variant::{RequestHeader, RequestKind};
use serde::Serialize;
use serde_json::Value;
use shared_types::raw;

/// `Display.ElementSelected`: the user touched or voice-selected an element on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ElementSelectedRequest {
    #[serde(flatten)]
    pub header: RequestHeader,
    /// Token the skill attached to the selected element.
    pub token: Option<String>,
}

impl RequestKind for ElementSelectedRequest {
    const TYPE: &'static str = "Display.ElementSelected";
    const VALIDATES_SIGNATURE: bool = true;

    fn from_raw(raw: &Value) -> Self {
        Self {
            header: RequestHeader::parse(raw),
            token: raw::string(raw, "token"),
        }
    }

    fn header(&self) -> &RequestHeader {
        &self.header
    }
}
