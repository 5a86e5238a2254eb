//! Modelhost Handlers
//!
//! Inference handlers conforming to the hosting platform's per-worker
//! contract:
//! - [`load`] deserializes the model artifact once per process
//! - [`decode`] parses a request body into the model input
//! - [`predict`] runs the loaded model over the input
//! - [`encode`] wraps the prediction in the response envelope
//!
//! The hosting runtime owns routing, concurrency across requests, and
//! fault translation; everything here is a synchronous function of its
//! inputs, safe to call from however many workers the host runs.

pub mod artifact;
pub mod endpoint;
pub mod handlers;
pub mod loader;
pub mod predictor;

pub use artifact::ModelArtifact;
pub use endpoint::Endpoint;
pub use handlers::{decode, encode, predict, JSON_CONTENT_TYPE};
pub use loader::{load, MODEL_FILE};
pub use predictor::Predictor;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::artifact::ModelArtifact;
    pub use crate::endpoint::Endpoint;
    pub use crate::handlers::{decode, encode, predict};
    pub use crate::loader::load;
    pub use crate::predictor::Predictor;
}
