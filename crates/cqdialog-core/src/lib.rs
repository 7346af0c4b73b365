//! CQ Dialog Core
//!
//! Entry point for hosts: configure a widget registry once, then turn
//! introspected components into dialog documents.

mod config;
mod error;
mod generator;

pub use config::Config;
pub use error::CoreError;
pub use generator::DialogGenerator;

// Re-export core components
pub use cqdialog_factory::{assemble, AssemblyContext, DialogError, DialogFactory, FactoryConfig};
pub use cqdialog_introspect::{
    ComponentDescriptor, ComponentIntrospector, ComponentMeta, DialogFieldMeta, IntrospectError,
    MemberDescriptor, MemberKind, TabDeclaration,
};
pub use cqdialog_model::{
    CqInclude, Dialog, DialogElement, DocumentNode, NodeKind, TabContainer, TabbableElement,
    WidgetCollection, DEFAULT_RANKING,
};
pub use cqdialog_widgets::{
    PanelBuilder, PanelWidget, StandardWidget, StandardWidgetBuilder, WidgetBuildError,
    WidgetBuilder, WidgetParameters, WidgetRegistry,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
