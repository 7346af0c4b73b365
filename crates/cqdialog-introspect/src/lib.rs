//! CQ Dialog Introspection Boundary
//!
//! Descriptors of a component and its annotated members, as produced by an
//! external reflection pass. The dialog factory only reads these through
//! [`ComponentIntrospector`]; it never inspects component types itself.

mod component;
mod error;
mod member;

pub use component::{ComponentDescriptor, ComponentIntrospector, ComponentMeta, TabDeclaration};
pub use error::IntrospectError;
pub use member::{DialogFieldMeta, MemberDescriptor, MemberKind};

pub type Result<T> = std::result::Result<T, IntrospectError>;
