//! Per-worker endpoint composition
//!
//! [`Endpoint`] wires the handlers together for hosts that want a single
//! call per request instead of driving decode/predict/encode themselves.
//! It adds no semantics beyond running the stages in contract order.

use std::path::Path;

use modelhost_core::{ResponseEnvelope, Result};

use crate::handlers::{decode, encode, predict};
use crate::loader;
use crate::predictor::Predictor;

/// A loaded model plus the request path over it
pub struct Endpoint {
    model: Box<dyn Predictor>,
}

impl Endpoint {
    /// Wrap an already-loaded predictor
    ///
    /// Test doubles come in through here; production workers usually use
    /// [`Endpoint::from_dir`].
    pub fn new(model: Box<dyn Predictor>) -> Self {
        Self { model }
    }

    /// Load the artifact from `model_dir` and wrap it
    pub fn from_dir(model_dir: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(loader::load(model_dir)?))
    }

    /// The loaded predictor
    pub fn model(&self) -> &dyn Predictor {
        self.model.as_ref()
    }

    /// Handle one request: decode the body, run prediction, wrap the result
    pub fn handle(&self, body: &[u8], content_type: &str) -> Result<ResponseEnvelope> {
        let input = decode(body, content_type)?;
        let prediction = predict(&input, self.model.as_ref())?;
        tracing::debug!("Prediction complete for model '{}'", self.model.name());
        Ok(encode(&prediction, content_type))
    }
}
