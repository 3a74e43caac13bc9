//! Outbound request envelope construction.
//!
//! # Design
//! The wire contract is a JSON object with exactly the keys `apiKey`,
//! `modelName`, `calledMethod` and `methodProperties`. `methodProperties`
//! is kept as a `serde_json::Map` so an empty property bag serializes as
//! `{}` and never as `[]` — the service rejects array-shaped property
//! objects. serde_json leaves non-ASCII characters unescaped, which the
//! service and its consumers expect in addresses and names.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ApiError;

/// Method properties for one call: string keys mapping to scalar or nested
/// JSON values, at whatever depth the called method expects.
pub type Params = Map<String, Value>;

/// The JSON-RPC-style request body sent to the service.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    api_key: String,
    model_name: String,
    called_method: String,
    method_properties: Params,
}

impl RequestEnvelope {
    pub fn new(api_key: &str, model: &str, method: &str, params: Params) -> Self {
        Self {
            api_key: api_key.to_string(),
            model_name: model.to_string(),
            called_method: method.to_string(),
            method_properties: params,
        }
    }

    pub fn model(&self) -> &str {
        &self.model_name
    }

    pub fn method(&self) -> &str {
        &self.called_method
    }

    /// Serialize to the canonical payload string.
    pub fn to_json(&self) -> Result<String, ApiError> {
        serde_json::to_string(self).map_err(|e| ApiError::Encode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_params_serialize_as_empty_object() {
        let envelope = RequestEnvelope::new("key", "Address", "getAreas", Params::new());
        let payload = envelope.to_json().unwrap();
        assert!(payload.contains(r#""methodProperties":{}"#), "{payload}");
        assert!(!payload.contains("[]"), "{payload}");
    }

    #[test]
    fn envelope_uses_exact_wire_keys() {
        let envelope = RequestEnvelope::new("key", "Address", "getAreas", Params::new());
        let body: Value = serde_json::from_str(&envelope.to_json().unwrap()).unwrap();
        assert_eq!(body["apiKey"], "key");
        assert_eq!(body["modelName"], "Address");
        assert_eq!(body["calledMethod"], "getAreas");
        assert_eq!(body["methodProperties"], json!({}));
        assert_eq!(body.as_object().unwrap().len(), 4);
    }

    #[test]
    fn non_ascii_params_stay_unescaped() {
        let mut params = Params::new();
        params.insert("CityName".to_string(), json!("Київ"));
        let envelope = RequestEnvelope::new("key", "Address", "searchSettlements", params);
        let payload = envelope.to_json().unwrap();
        assert!(payload.contains("Київ"), "{payload}");
        assert!(!payload.contains("\\u"), "{payload}");
    }

    #[test]
    fn nested_params_survive_round_trip() {
        let mut params = Params::new();
        params.insert(
            "Options".to_string(),
            json!({"Limit": 20, "Warehouses": ["1", "2"]}),
        );
        let envelope = RequestEnvelope::new("key", "AddressGeneral", "getWarehouses", params);
        let body: Value = serde_json::from_str(&envelope.to_json().unwrap()).unwrap();
        assert_eq!(body["methodProperties"]["Options"]["Limit"], 20);
        assert_eq!(body["methodProperties"]["Options"]["Warehouses"][1], "2");
    }
}
