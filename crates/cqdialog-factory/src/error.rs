//! Dialog assembly error types

use cqdialog_widgets::WidgetBuildError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DialogError {
    #[error("Tab {index} can have only a path or a title")]
    AmbiguousTabDeclaration { index: usize },

    #[error("Unknown widget type '{xtype}' for field {field_name}")]
    UnresolvedWidgetType { field_name: String, xtype: String },

    #[error("Invalid field {field_name}: {source}")]
    InvalidField {
        field_name: String,
        #[source]
        source: WidgetBuildError,
    },

    #[error("Invalid tab index {index} for field {field_name}")]
    InvalidTabIndex { index: i32, field_name: String },

    #[error("A tab dialog element can not be placed inside another tab: {field_name}")]
    NestedTabConflict { field_name: String },
}

impl DialogError {
    /// Field the error is attributed to, if any
    pub fn field_name(&self) -> Option<&str> {
        match self {
            DialogError::AmbiguousTabDeclaration { .. } => None,
            DialogError::UnresolvedWidgetType { field_name, .. }
            | DialogError::InvalidField { field_name, .. }
            | DialogError::InvalidTabIndex { field_name, .. }
            | DialogError::NestedTabConflict { field_name } => Some(field_name),
        }
    }
}
