//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Dialog error: {0}")]
    Dialog(#[from] cqdialog_factory::DialogError),

    #[error("Introspection error: {0}")]
    Introspect(#[from] cqdialog_introspect::IntrospectError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
