//! Introspection error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IntrospectError {
    #[error("Invalid component descriptor: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Component descriptor has no name")]
    MissingName,
}
