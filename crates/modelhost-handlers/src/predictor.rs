//! Predictor capability trait

use modelhost_core::Result;
use serde_json::Value;

/// Trait for loaded models
///
/// The hosting runtime treats the loaded model as an opaque capability:
/// anything exposing a predict operation over the decoded request input.
/// The loader, the predict handler, and test doubles all substitute
/// through this seam.
pub trait Predictor: Send + Sync + std::fmt::Debug {
    /// Get the predictor name
    fn name(&self) -> &str;

    /// Run inference on the decoded request input
    ///
    /// Errors carry whatever the underlying model raises (shape mismatch,
    /// type mismatch); callers perform no validation or recovery.
    fn predict(&self, input: &Value) -> Result<Value>;
}
