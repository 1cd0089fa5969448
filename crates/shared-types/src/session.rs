//! # Session Value Objects
//!
//! The `session` block of an inbound request and the identity objects it
//! carries. `Application` and `User` are shared with the context's `System`.

use crate::raw;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

/// The skill the request is addressed to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: Option<String>,
}

impl Application {
    pub fn parse(raw: &Value) -> Self {
        Self {
            application_id: raw::string(raw, "applicationId"),
        }
    }
}

/// Permissions granted by the user to the skill.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Permissions {
    pub consent_token: Option<String>,
}

impl Permissions {
    pub fn parse(raw: &Value) -> Self {
        Self {
            consent_token: raw::string(raw, "consentToken"),
        }
    }
}

/// The account that made the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: Option<String>,
    /// Present when account linking is complete.
    pub access_token: Option<String>,
    pub permissions: Option<Permissions>,
}

impl User {
    pub fn parse(raw: &Value) -> Self {
        Self {
            user_id: raw::string(raw, "userId"),
            access_token: raw::string(raw, "accessToken"),
            permissions: raw::nested(raw, "permissions", Permissions::parse),
        }
    }
}

/// Conversation state for requests that belong to a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// True on the first request of a session.
    pub new: bool,
    pub session_id: Option<String>,
    pub application: Option<Application>,
    /// Skill-defined state echoed back by the platform. Keys are unique.
    pub attributes: HashMap<String, Value>,
    pub user: Option<User>,
}

impl Session {
    /// Build a session from the raw `session` object.
    ///
    /// Never fails; absent or mistyped keys leave the field at its default.
    pub fn parse(raw: &Value) -> Self {
        Self {
            new: raw::boolean(raw, "new").unwrap_or(false),
            session_id: raw::string(raw, "sessionId"),
            application: raw::nested(raw, "application", Application::parse),
            attributes: raw::map(raw, "attributes"),
            user: raw::nested(raw, "user", User::parse),
        }
    }

    /// Attribute stored under `key`.
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }
}
