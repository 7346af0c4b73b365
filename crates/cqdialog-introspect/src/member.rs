//! Member descriptors
//!
//! One descriptor per declared field or method of a component, carrying the
//! parsed dialog field annotation when present.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberKind {
    #[default]
    Field,
    Method,
}

impl MemberKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberKind::Field => "field",
            MemberKind::Method => "method",
        }
    }
}

impl std::fmt::Display for MemberKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Values of a dialog field annotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DialogFieldMeta {
    /// Node name of the widget; defaults to the member's property name
    pub field_name: Option<String>,
    /// Stored property name; defaults to the member's property name
    pub name: Option<String>,
    pub field_label: Option<String>,
    pub field_description: Option<String>,
    /// Explicit widget type, overriding inference from the value type
    pub xtype: Option<String>,
    /// Sort weight among siblings
    pub ranking: f64,
    /// 1-based index into the component's tabs
    pub tab: i32,
    pub required: bool,
    pub hide_label: bool,
    pub default_value: Option<String>,
    /// Widget-specific options passed through to the builder
    pub additional_properties: BTreeMap<String, String>,
}

impl Default for DialogFieldMeta {
    fn default() -> Self {
        Self {
            field_name: None,
            name: None,
            field_label: None,
            field_description: None,
            xtype: None,
            ranking: -1.0,
            tab: 1,
            required: false,
            hide_label: false,
            default_value: None,
            additional_properties: BTreeMap::new(),
        }
    }
}

impl DialogFieldMeta {
    /// Explicit widget type, ignoring empty values
    pub fn explicit_xtype(&self) -> Option<&str> {
        non_empty(self.xtype.as_deref())
    }

    pub fn option(&self, key: &str) -> Option<&str> {
        self.additional_properties.get(key).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDescriptor {
    /// Declared member name
    pub name: String,
    #[serde(default)]
    pub kind: MemberKind,
    /// Declared value type (field type or method return type)
    #[serde(default)]
    pub value_type: Option<String>,
    /// Dialog field annotation, if the member carries one
    #[serde(default)]
    pub dialog_field: Option<DialogFieldMeta>,
}

impl MemberDescriptor {
    pub fn field(name: impl Into<String>, value_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: MemberKind::Field,
            value_type: Some(value_type.into()),
            dialog_field: None,
        }
    }

    pub fn method(name: impl Into<String>, value_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: MemberKind::Method,
            value_type: Some(value_type.into()),
            dialog_field: None,
        }
    }

    /// Attach a dialog field annotation
    pub fn with_dialog_field(mut self, meta: DialogFieldMeta) -> Self {
        self.dialog_field = Some(meta);
        self
    }

    /// Property name implied by the member.
    ///
    /// Getter methods (`getTitle`, `isHidden`) map to the bean property
    /// (`title`, `hidden`); fields and other methods keep their name. A
    /// property starting with two capitals (`getURL`) keeps its case.
    pub fn property_name(&self) -> String {
        if self.kind == MemberKind::Method {
            for prefix in ["get", "is"] {
                if let Some(rest) = self.name.strip_prefix(prefix) {
                    let mut chars = rest.chars();
                    if let Some(first) = chars.next().filter(|c| c.is_uppercase()) {
                        if rest.chars().nth(1).is_some_and(char::is_uppercase) {
                            return rest.to_string();
                        }
                        return first.to_lowercase().chain(chars).collect();
                    }
                }
            }
        }
        self.name.clone()
    }

    /// Node name of the widget this member produces
    pub fn field_name(&self) -> String {
        self.dialog_field
            .as_ref()
            .and_then(|meta| non_empty(meta.field_name.as_deref()))
            .map(str::to_string)
            .unwrap_or_else(|| self.property_name())
    }

    /// Stored property name for the widget
    pub fn widget_name(&self) -> String {
        self.dialog_field
            .as_ref()
            .and_then(|meta| non_empty(meta.name.as_deref()))
            .map(str::to_string)
            .unwrap_or_else(|| self.property_name())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
