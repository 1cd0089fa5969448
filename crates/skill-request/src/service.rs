//! # Request Parsing Service
//!
//! Application service that implements [`RequestParsingApi`].
//!
//! ## Pipeline
//!
//! Each step's failure short-circuits the rest; no partial envelope is
//! ever returned.
//!
//! 1. Size check against `ParserConfig::max_body_bytes`
//! 2. JSON decode (root must be an object)
//! 3. `version` pass-through
//! 4. `session` via `Session::parse`, if present
//! 5. `context` via `Context::parse`, if present
//! 6. `request.type` resolved through the registry
//! 7. Variant built from the `request` subtree
//! 8. Signature header presence, if the variant demands it
//! 9. Envelope assembly, keeping the raw inputs verbatim
//!
//! Step 8 is a presence check only. Certificate chain and signature
//! cryptography belong to the transport's verifier.

use crate::domain::config::ParserConfig;
use crate::domain::envelope::RequestEnvelope;
use crate::domain::errors::{ConfigError, RequestError};
use crate::domain::registry;
use crate::domain::variant::RequestVariant;
use crate::ports::inbound::RequestParsingApi;
use serde_json::Value;
use shared_types::{raw, Context, Session};
use tracing::{debug, warn};

/// Header carrying the signing certificate chain URL.
pub const SIGNATURE_CERT_CHAIN_URL_HEADER: &str = "SignatureCertChainUrl";

/// Header carrying the base64 request signature.
pub const SIGNATURE_HEADER: &str = "Signature";

/// Request Parsing Service.
///
/// Stateless apart from its configuration; one instance can be shared by
/// every request handler.
#[derive(Debug, Clone, Default)]
pub struct RequestParser {
    config: ParserConfig,
}

impl RequestParser {
    /// Create a parser with a validated configuration.
    pub fn new(config: ParserConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    fn decode(&self, body: &str) -> Result<Value, RequestError> {
        if body.len() > self.config.max_body_bytes {
            return Err(RequestError::BodyTooLarge {
                size: body.len(),
                limit: self.config.max_body_bytes,
            });
        }

        let value: Value = serde_json::from_str(body)?;
        if !value.is_object() {
            return Err(RequestError::MalformedBody(
                "request body must be a JSON object".into(),
            ));
        }
        Ok(value)
    }

    fn dispatch(raw_request: Option<&Value>) -> Result<RequestVariant, RequestError> {
        let raw_request = raw_request.ok_or(RequestError::MissingRequestData)?;
        let discriminator =
            raw::string(raw_request, "type").ok_or(RequestError::MissingRequestData)?;

        // Unknown types surface as missing data: the caller cannot act on them.
        let constructor = registry::resolve(&discriminator).map_err(|e| {
            debug!(error = %e, "Request type not registered");
            RequestError::MissingRequestData
        })?;

        Ok(constructor(raw_request))
    }

    fn check_signature_headers(
        &self,
        request: &RequestVariant,
        signature_cert_chain_url: &str,
        signature: &str,
    ) -> Result<(), RequestError> {
        if !self.config.enforce_signature_headers || !request.requires_signature_validation() {
            return Ok(());
        }

        if signature_cert_chain_url.is_empty() {
            return Err(RequestError::MissingRequiredHeader {
                missing: SIGNATURE_CERT_CHAIN_URL_HEADER,
            });
        }
        if signature.is_empty() {
            return Err(RequestError::MissingRequiredHeader {
                missing: SIGNATURE_HEADER,
            });
        }
        Ok(())
    }

    fn build(
        &self,
        body: &str,
        signature_cert_chain_url: &str,
        signature: &str,
    ) -> Result<RequestEnvelope, RequestError> {
        // 1-2. Size and decode
        let document = self.decode(body)?;

        // 3-5. Envelope fields
        let version = raw::string(&document, "version");
        let session = raw::nested(&document, "session", Session::parse);
        let context = raw::nested(&document, "context", Context::parse);

        // 6-7. Dispatch on request.type
        let request = Self::dispatch(raw::object(&document, "request"))?;

        // 8. Signature header presence
        self.check_signature_headers(&request, signature_cert_chain_url, signature)?;

        debug!(
            request_type = request.type_discriminator(),
            request_id = request.request_id().unwrap_or_default(),
            has_session = session.is_some(),
            has_context = context.is_some(),
            "Parsed inbound request"
        );

        // 9. Assemble
        Ok(RequestEnvelope {
            version,
            session,
            context,
            request,
            raw_body: body.to_owned(),
            signature_cert_chain_url: signature_cert_chain_url.to_owned(),
            signature: signature.to_owned(),
        })
    }
}

impl RequestParsingApi for RequestParser {
    fn parse(
        &self,
        body: &str,
        signature_cert_chain_url: &str,
        signature: &str,
    ) -> Result<RequestEnvelope, RequestError> {
        self.build(body, signature_cert_chain_url, signature)
            .inspect_err(|e| warn!(error = %e, body_len = body.len(), "Rejected inbound request"))
    }
}

/// Parse with the default configuration.
pub fn parse_request(
    body: &str,
    signature_cert_chain_url: &str,
    signature: &str,
) -> Result<RequestEnvelope, RequestError> {
    RequestParser::default().parse(body, signature_cert_chain_url, signature)
}
