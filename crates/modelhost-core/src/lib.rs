//! Modelhost Core
//!
//! Core types shared across the modelhost inference handlers.
//!
//! This crate provides:
//! - Request and response envelope types for the hosting contract
//! - Error types and result handling

pub mod envelope;
pub mod error;

pub use envelope::{RequestEnvelope, ResponseEnvelope};
pub use error::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::envelope::{RequestEnvelope, ResponseEnvelope};
    pub use crate::error::{Error, Result};
}
