//! Response classification and the result container.
//!
//! # Design
//! `classify` takes the raw body string and decides between exactly three
//! outcomes: malformed body (not JSON, not object-shaped, or a list-shape
//! violation on `errors`/`errorCodes`), logical error (non-empty `errors`
//! list, surfaced with its parallel `errorCodes`), and success (everything
//! else, wrapped in a `ResultContainer`). Transport failures never reach
//! this module. The container exposes the raw envelope fields without
//! second-guessing them; in particular `is_success` forwards the raw
//! `success` flag even when it disagrees with the absence of errors.

use serde_json::{Map, Value};

use crate::error::ApiError;
use crate::reader::FieldReader;

/// Decode and classify a raw response body.
pub fn classify(body: &str) -> Result<ResultContainer, ApiError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| malformed(format!("body is not valid JSON: {e}"), body))?;
    let Value::Object(response) = value else {
        return Err(malformed("body is not a JSON object".to_string(), body));
    };
    if let Some(errors) = response.get("errors") {
        let Some(errors) = errors.as_array() else {
            return Err(malformed("`errors` is not a list".to_string(), body));
        };
        let error_codes: &[Value] = match response.get("errorCodes") {
            Some(codes) => codes
                .as_array()
                .ok_or_else(|| malformed("`errorCodes` is not a list".to_string(), body))?,
            None => &[],
        };
        if !errors.is_empty() {
            return Err(ApiError::LogicalError {
                errors: errors.iter().map(lenient_string).collect(),
                error_codes: error_codes.iter().map(lenient_string).collect(),
            });
        }
    }
    Ok(ResultContainer { response })
}

fn malformed(reason: String, body: &str) -> ApiError {
    ApiError::MalformedResponse {
        reason,
        body: body.to_string(),
    }
}

/// Error messages and codes are documented as strings but the service has
/// been seen emitting bare numbers; render those instead of rejecting.
fn lenient_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// A successfully classified response envelope.
///
/// Immutable; owned by the caller of the fetch pipeline. Raw views come
/// straight from the decoded object; typed access to `data` items goes
/// through [`FieldReader`].
#[derive(Debug, Clone)]
pub struct ResultContainer {
    response: Map<String, Value>,
}

impl ResultContainer {
    /// The raw `success` flag, verbatim. The service occasionally sets
    /// `success=false` with no errors list; the container does not
    /// reconcile the two.
    pub fn is_success(&self) -> Result<bool, ApiError> {
        FieldReader::new(&self.response).bool("success")
    }

    /// The whole decoded envelope.
    pub fn response(&self) -> &Map<String, Value> {
        &self.response
    }

    /// The raw `data` field, object- or list-shaped.
    pub fn data(&self) -> Result<&Value, ApiError> {
        self.response
            .get("data")
            .ok_or_else(|| ApiError::MissingField("data".to_string()))
    }

    /// `data` as an ordered list. Callers opt in to the list assumption
    /// explicitly; some methods return a single object under `data`.
    pub fn data_as_list(&self) -> Result<&[Value], ApiError> {
        self.data()?
            .as_array()
            .map(Vec::as_slice)
            .ok_or(ApiError::NotAList)
    }

    /// The raw `info` field carrying pagination and metadata.
    pub fn info(&self) -> Result<&Value, ApiError> {
        self.response
            .get("info")
            .ok_or_else(|| ApiError::MissingField("info".to_string()))
    }
}
