//! # Request Envelope
//!
//! The fully assembled result of parsing one inbound request.
//!
//! An envelope is immutable once built. It owns its session, context and
//! request subtrees, and it keeps the three raw inputs verbatim so a later
//! stage can perform real signature verification over the exact bytes.

use crate::domain::variant::RequestVariant;
use serde::Serialize;
use serde_json::Value;
use shared_types::{Context, Device, Session, User};

/// A typed inbound request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestEnvelope {
    pub(crate) version: Option<String>,
    pub(crate) session: Option<Session>,
    pub(crate) context: Option<Context>,
    /// Never absent in an envelope returned by the parser.
    pub(crate) request: RequestVariant,

    #[serde(skip)]
    pub(crate) raw_body: String,
    #[serde(skip)]
    pub(crate) signature_cert_chain_url: String,
    #[serde(skip)]
    pub(crate) signature: String,
}

impl RequestEnvelope {
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn context(&self) -> Option<&Context> {
        self.context.as_ref()
    }

    pub fn request(&self) -> &RequestVariant {
        &self.request
    }

    /// Consume the envelope, keeping only the typed request.
    pub fn into_request(self) -> RequestVariant {
        self.request
    }

    pub fn request_type(&self) -> &'static str {
        self.request.type_discriminator()
    }

    /// The body exactly as received.
    pub fn raw_body(&self) -> &str {
        &self.raw_body
    }

    pub fn signature_cert_chain_url(&self) -> &str {
        &self.signature_cert_chain_url
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// `context.System.application.applicationId`
    pub fn application_id(&self) -> Option<&str> {
        self.context
            .as_ref()?
            .system
            .as_ref()?
            .application
            .as_ref()?
            .application_id
            .as_deref()
    }

    /// `context.System.user`
    pub fn user(&self) -> Option<&User> {
        self.context.as_ref()?.system.as_ref()?.user.as_ref()
    }

    /// `context.System.device`
    pub fn device(&self) -> Option<&Device> {
        self.context.as_ref()?.system.as_ref()?.device.as_ref()
    }

    /// `session.attributes[key]`, or `default` when the session or key is absent.
    pub fn session_attribute<'a>(&'a self, key: &str, default: &'a Value) -> &'a Value {
        self.session
            .as_ref()
            .and_then(|session| session.attribute(key))
            .unwrap_or(default)
    }
}
