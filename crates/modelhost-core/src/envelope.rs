//! Request and response envelopes for the hosting contract
//!
//! The hosting runtime hands the handlers a JSON body of the form
//! `{"Input": <value>}` and expects back `{"Output": "<string>"}`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Incoming request envelope
///
/// `"Input"` is the only recognized key; anything else in the body is
/// ignored. Its value is the model's feature input, whose shape and type
/// are the model's business, not this crate's.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestEnvelope {
    /// Feature input handed to the predictor unmodified
    #[serde(rename = "Input")]
    pub input: Value,
}

/// Outgoing response envelope wrapping a prediction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    /// String representation of the prediction value
    #[serde(rename = "Output")]
    pub output: String,
}

impl ResponseEnvelope {
    /// Create a new response envelope
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_envelope_extracts_input() {
        let envelope: RequestEnvelope =
            serde_json::from_str(r#"{"Input": [1, 2, 3]}"#).unwrap();
        assert_eq!(envelope.input, json!([1, 2, 3]));
    }

    #[test]
    fn test_request_envelope_ignores_unknown_keys() {
        let envelope: RequestEnvelope =
            serde_json::from_str(r#"{"Input": 5, "Extra": "ignored"}"#).unwrap();
        assert_eq!(envelope.input, json!(5));
    }

    #[test]
    fn test_request_envelope_requires_input_key() {
        let result = serde_json::from_str::<RequestEnvelope>("{}");
        assert!(result.is_err());
    }

    #[test]
    fn test_response_envelope_wire_key() {
        let envelope = ResponseEnvelope::new("[0]");
        let serialized = serde_json::to_string(&envelope).unwrap();
        assert_eq!(serialized, r#"{"Output":"[0]"}"#);
    }
}
