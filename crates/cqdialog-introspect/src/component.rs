//! Component descriptors and the introspection interface

use serde::{Deserialize, Serialize};

use crate::error::IntrospectError;
use crate::member::{DialogFieldMeta, MemberDescriptor};
use crate::Result;

/// One entry of a component's tab list. Either a title or a path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabDeclaration {
    pub title: Option<String>,
    /// Path of an externally defined tab to include
    pub path: Option<String>,
}

impl TabDeclaration {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            path: None,
        }
    }

    pub fn included(path: impl Into<String>) -> Self {
        Self {
            title: None,
            path: Some(path.into()),
        }
    }

    /// Title, ignoring empty values
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }

    /// Path, ignoring empty values
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref().filter(|p| !p.is_empty())
    }
}

/// Values of a component annotation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComponentMeta {
    /// Dialog title
    pub title: String,
    pub tabs: Vec<TabDeclaration>,
    pub file_name: Option<String>,
    /// Non-positive means unset
    pub dialog_width: i32,
    /// Non-positive means unset
    pub dialog_height: i32,
}

/// Read access to an already-introspected component.
pub trait ComponentIntrospector {
    /// Name used to identify the component in diagnostics
    fn component_name(&self) -> &str;

    fn read_component_metadata(&self) -> ComponentMeta;

    /// Every declared member: fields first, then methods, each in declaration order
    fn list_annotated_members(&self) -> Vec<MemberDescriptor>;

    /// Annotation of `member`, read from the descriptor or from the
    /// introspector's own storage
    fn read_dialog_metadata<'m>(&'m self, member: &'m MemberDescriptor) -> Option<&'m DialogFieldMeta> {
        member.dialog_field.as_ref()
    }
}

/// Serialized introspection output for one component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDescriptor {
    /// Fully qualified component name
    pub name: String,
    #[serde(default)]
    pub component: ComponentMeta,
    #[serde(default)]
    pub fields: Vec<MemberDescriptor>,
    #[serde(default)]
    pub methods: Vec<MemberDescriptor>,
}

impl ComponentDescriptor {
    pub fn new(name: impl Into<String>, component: ComponentMeta) -> Self {
        Self {
            name: name.into(),
            component,
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let descriptor: Self = serde_json::from_str(json)?;
        if descriptor.name.is_empty() {
            return Err(IntrospectError::MissingName);
        }
        Ok(descriptor)
    }

    pub fn with_field(mut self, member: MemberDescriptor) -> Self {
        self.fields.push(member);
        self
    }

    pub fn with_method(mut self, member: MemberDescriptor) -> Self {
        self.methods.push(member);
        self
    }
}

impl ComponentIntrospector for ComponentDescriptor {
    fn component_name(&self) -> &str {
        &self.name
    }

    fn read_component_metadata(&self) -> ComponentMeta {
        self.component.clone()
    }

    fn list_annotated_members(&self) -> Vec<MemberDescriptor> {
        self.fields.iter().chain(self.methods.iter()).cloned().collect()
    }
}
