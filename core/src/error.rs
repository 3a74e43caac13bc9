//! Error taxonomy for the API client.
//!
//! # Design
//! One variant per failure category so callers can branch on kind without
//! matching on message text: transport failures happen before any JSON
//! decoding, logical errors carry the service's own error list, and
//! malformed responses preserve the raw body for diagnostics. Nothing is
//! caught or downgraded inside the crate; every variant propagates to the
//! immediate caller.

use thiserror::Error;

/// Errors returned by the fetch pipeline and the field accessors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The outbound request envelope could not be serialized. A caller-data
    /// problem, never a network one.
    #[error("request encoding failed: {0}")]
    Encode(String),

    /// The HTTP exchange itself failed: DNS, connection, timeout, or an
    /// internal transport failure. Raised before any JSON decoding.
    #[error("transport failed: {message}")]
    Transport { message: String },

    /// The response body violates the expected envelope shape. The raw body
    /// is kept verbatim so the upstream defect can be reported.
    #[error("malformed response ({reason}): {body}")]
    MalformedResponse { reason: String, body: String },

    /// The service completed the exchange but rejected the request.
    /// `errors` and `error_codes` are parallel lists in service order;
    /// `error_codes` is empty when the service omitted them.
    #[error("service reported {} error(s): {}", errors.len(), errors.join("; "))]
    LogicalError {
        errors: Vec<String>,
        error_codes: Vec<String>,
    },

    /// A strict accessor was called on a field that is absent or JSON null.
    #[error("field `{0}` is missing or null")]
    MissingField(String),

    /// A field is present but its representation is outside the coercion
    /// allow-list for the requested type.
    #[error("field `{field}` expected {expected}, found {found}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: String,
    },

    /// `data_as_list` was called but the `data` field is not a JSON array.
    #[error("`data` field is not a list")]
    NotAList,
}
