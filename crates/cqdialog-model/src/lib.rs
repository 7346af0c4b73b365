//! CQ Dialog Model
//!
//! The in-memory document tree an authoring dialog is assembled into.
//! A [`Dialog`] owns one root node per tab; each node is a registry-built
//! widget, a widget collection, a tab container, or an external include.

mod dialog;
mod element;
mod node;

pub use dialog::Dialog;
pub use element::{DialogElement, TabbableElement, DEFAULT_RANKING};
pub use node::{CqInclude, DocumentNode, NodeKind, TabContainer, WidgetCollection};
