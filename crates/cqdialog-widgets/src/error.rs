//! Widget builder error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WidgetBuildError {
    #[error("Invalid value for option {option}: {value}")]
    InvalidOption { option: String, value: String },

    #[error("Missing required value: {0}")]
    MissingValue(String),

    #[error("Conflicting settings: {0}")]
    Conflict(String),
}
