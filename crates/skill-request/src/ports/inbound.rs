//! # Inbound Ports (Driving Ports / API)
//!
//! The interface a hosting transport uses to turn raw HTTP input into a
//! typed request.

use crate::domain::envelope::RequestEnvelope;
use crate::domain::errors::RequestError;

/// Primary request intake API.
///
/// Implementations must be thread-safe (`Send + Sync`); a single instance
/// serves every concurrent request.
pub trait RequestParsingApi: Send + Sync {
    /// Parse a request body and its two signature headers into an envelope.
    ///
    /// # Arguments
    /// * `body` - The request body as received (UTF-8 JSON)
    /// * `signature_cert_chain_url` - `SignatureCertChainUrl` header, may be empty
    /// * `signature` - `Signature` header, may be empty
    ///
    /// # Errors
    /// * `RequestError::MissingRequestData` - `request.type` absent or unsupported
    /// * `RequestError::MissingRequiredHeader` - signed type without both headers
    /// * `RequestError::MalformedBody` / `BodyTooLarge` - decode-layer rejections
    fn parse(
        &self,
        body: &str,
        signature_cert_chain_url: &str,
        signature: &str,
    ) -> Result<RequestEnvelope, RequestError>;
}
