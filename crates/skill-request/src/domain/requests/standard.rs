//! Standard request types: intents, launches and session ends.

use crate::domain::variant::{ErrorInfo, RequestHeader, RequestKind};
use serde::Serialize;
use serde_json::Value;
use shared_types::raw;
use std::collections::HashMap;

/// A slot value captured from the utterance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub name: Option<String>,
    pub value: Option<String>,
    pub confirmation_status: Option<String>,
}

impl Slot {
    pub fn parse(raw: &Value) -> Self {
        Self {
            name: raw::string(raw, "name"),
            value: raw::string(raw, "value"),
            confirmation_status: raw::string(raw, "confirmationStatus"),
        }
    }
}

/// The intent resolved by the platform's language model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    pub name: Option<String>,
    pub confirmation_status: Option<String>,
    pub slots: HashMap<String, Slot>,
}

impl Intent {
    pub fn parse(raw: &Value) -> Self {
        let slots = raw::object(raw, "slots")
            .and_then(Value::as_object)
            .map(|slots| {
                slots
                    .iter()
                    .filter(|(_, slot)| slot.is_object())
                    .map(|(key, slot)| (key.clone(), Slot::parse(slot)))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            name: raw::string(raw, "name"),
            confirmation_status: raw::string(raw, "confirmationStatus"),
            slots,
        }
    }
}

/// `IntentRequest`: the user said something that maps to an intent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentRequest {
    #[serde(flatten)]
    pub header: RequestHeader,
    pub dialog_state: Option<String>,
    pub intent: Option<Intent>,
}

impl IntentRequest {
    pub fn intent_name(&self) -> Option<&str> {
        self.intent.as_ref()?.name.as_deref()
    }

    /// Value of slot `name`, if the slot was filled.
    pub fn slot_value(&self, name: &str) -> Option<&str> {
        self.intent.as_ref()?.slots.get(name)?.value.as_deref()
    }
}

impl RequestKind for IntentRequest {
    const TYPE: &'static str = "IntentRequest";
    const VALIDATES_SIGNATURE: bool = true;

    fn from_raw(raw: &Value) -> Self {
        Self {
            header: RequestHeader::parse(raw),
            dialog_state: raw::string(raw, "dialogState"),
            intent: raw::nested(raw, "intent", Intent::parse),
        }
    }

    fn header(&self) -> &RequestHeader {
        &self.header
    }
}

/// `LaunchRequest`: the skill was opened without a specific intent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LaunchRequest {
    #[serde(flatten)]
    pub header: RequestHeader,
}

impl RequestKind for LaunchRequest {
    const TYPE: &'static str = "LaunchRequest";
    const VALIDATES_SIGNATURE: bool = true;

    fn from_raw(raw: &Value) -> Self {
        Self {
            header: RequestHeader::parse(raw),
        }
    }

    fn header(&self) -> &RequestHeader {
        &self.header
    }
}

/// `SessionEndedRequest`: the session closed for a reason other than the skill ending it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionEndedRequest {
    #[serde(flatten)]
    pub header: RequestHeader,
    /// `USER_INITIATED`, `ERROR` or `EXCEEDED_MAX_REPROMPTS`.
    pub reason: Option<String>,
    pub error: Option<ErrorInfo>,
}

impl RequestKind for SessionEndedRequest {
    const TYPE: &'static str = "SessionEndedRequest";
    const VALIDATES_SIGNATURE: bool = true;

    fn from_raw(raw: &Value) -> Self {
        Self {
            header: RequestHeader::parse(raw),
            reason: raw::string(raw, "reason"),
            error: raw::nested(raw, "error", ErrorInfo::parse),
        }
    }

    fn header(&self) -> &RequestHeader {
        &self.header
    }
}
