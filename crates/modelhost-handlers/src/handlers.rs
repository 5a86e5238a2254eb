//! Inference handler entry points
//!
//! The hosting runtime drives one worker through [`crate::loader::load`]
//! once, then [`decode`] → [`predict`] → [`encode`] per request. The
//! handlers share no state; composition is owned by the host (or by
//! [`crate::endpoint::Endpoint`] when the host wants a single call).

use modelhost_core::{Error, RequestEnvelope, ResponseEnvelope, Result};
use serde_json::Value;

use crate::predictor::Predictor;

/// The only content type the decoder accepts
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Parse a request body into the model input
///
/// The body must be JSON of the form `{"Input": <value>}`; the value comes
/// back untouched, with no coercion or schema validation. Any other
/// declared content type is rejected before the body is looked at.
pub fn decode(body: &[u8], content_type: &str) -> Result<Value> {
    if content_type != JSON_CONTENT_TYPE {
        return Err(Error::unsupported_media_type(content_type));
    }

    let envelope: RequestEnvelope = serde_json::from_slice(body)?;
    Ok(envelope.input)
}

/// Run the loaded model's predict operation on the decoded input
///
/// The raw result is returned unmodified and predictor errors propagate
/// untouched; this handler validates nothing.
pub fn predict(input: &Value, model: &dyn Predictor) -> Result<Value> {
    model.predict(input)
}

/// Wrap a prediction in the response envelope
///
/// `content_type` is part of the hosting contract's signature but does not
/// influence the output; the envelope always carries the prediction's
/// default textual form.
pub fn encode(prediction: &Value, _content_type: &str) -> ResponseEnvelope {
    ResponseEnvelope::new(prediction.to_string())
}
