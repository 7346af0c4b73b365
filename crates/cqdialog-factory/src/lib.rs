//! CQ Dialog Factory
//!
//! Assembles a component's annotated members into a [`cqdialog_model::Dialog`]:
//! ```text
//! members ──assemble──▶ widgets ──tab index──▶ tab holders ──reduce──▶ dialog
//! ```
//! Any invalid annotation aborts the whole dialog; no partial document is
//! ever returned.

mod assembly;
mod config;
mod error;
mod factory;
mod holder;

pub use assembly::{assemble, AssemblyContext};
pub use config::FactoryConfig;
pub use error::DialogError;
pub use factory::DialogFactory;

pub type Result<T> = std::result::Result<T, DialogError>;
