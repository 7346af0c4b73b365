//! CQ Dialog Widgets
//!
//! The widget registry maps a widget type key (`xtype`) to the builder that
//! turns an annotated member into a dialog element. Hosts populate it once at
//! setup; dialog assembly only reads it.

mod builder;
mod error;
mod registry;
mod standard;

pub use builder::{WidgetBuilder, WidgetParameters};
pub use error::WidgetBuildError;
pub use registry::WidgetRegistry;
pub use standard::{PanelBuilder, PanelWidget, StandardWidget, StandardWidgetBuilder};

pub type Result<T> = std::result::Result<T, WidgetBuildError>;
