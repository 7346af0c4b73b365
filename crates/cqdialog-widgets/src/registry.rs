//! Widget registry
//!
//! Exact-match lookup from widget type key to builder. No fallback and no
//! case normalization: `TextField` and `textfield` are different keys.

use std::collections::HashMap;

use crate::builder::WidgetBuilder;
use crate::standard::{PanelBuilder, StandardWidgetBuilder, PANEL_XTYPE};

const STANDARD_XTYPES: &[&str] = &[
    "textfield",
    "textarea",
    "numberfield",
    "checkbox",
    "datetime",
    "pathfield",
    "selection",
    "richtext",
];

const STANDARD_TYPE_DEFAULTS: &[(&str, &str)] = &[
    ("String", "textfield"),
    ("java.lang.String", "textfield"),
    ("boolean", "checkbox"),
    ("Boolean", "checkbox"),
    ("java.lang.Boolean", "checkbox"),
    ("int", "numberfield"),
    ("long", "numberfield"),
    ("double", "numberfield"),
    ("float", "numberfield"),
    ("Integer", "numberfield"),
    ("Long", "numberfield"),
    ("Double", "numberfield"),
    ("Float", "numberfield"),
    ("Date", "datetime"),
    ("java.util.Date", "datetime"),
    ("Calendar", "datetime"),
    ("java.util.Calendar", "datetime"),
];

#[derive(Default)]
pub struct WidgetRegistry {
    /// Builders by widget type key
    builders: HashMap<String, Box<dyn WidgetBuilder>>,
    /// Widget type key implied by a member's value type
    type_defaults: HashMap<String, String>,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with the standard widgets and value type defaults
    pub fn with_standard_widgets() -> Self {
        let mut registry = Self::new();
        for xtype in STANDARD_XTYPES {
            registry.register(*xtype, StandardWidgetBuilder);
        }
        registry.register(PANEL_XTYPE, PanelBuilder);
        for (value_type, xtype) in STANDARD_TYPE_DEFAULTS {
            registry.register_type_default(*value_type, *xtype);
        }
        registry
    }

    /// Register a builder, returning the one it replaces
    pub fn register<B>(
        &mut self,
        xtype: impl Into<String>,
        builder: B,
    ) -> Option<Box<dyn WidgetBuilder>>
    where
        B: WidgetBuilder + 'static,
    {
        let xtype = xtype.into();
        tracing::debug!(xtype = %xtype, "Registered widget builder");
        self.builders.insert(xtype, Box::new(builder))
    }

    /// Map a value type to the widget type used when a member names none
    pub fn register_type_default(&mut self, value_type: impl Into<String>, xtype: impl Into<String>) {
        self.type_defaults.insert(value_type.into(), xtype.into());
    }

    pub fn resolve(&self, xtype: &str) -> Option<&dyn WidgetBuilder> {
        self.builders.get(xtype).map(|builder| builder.as_ref())
    }

    pub fn infer_widget_type(&self, value_type: &str) -> Option<&str> {
        self.type_defaults.get(value_type).map(String::as_str)
    }

    pub fn contains(&self, xtype: &str) -> bool {
        self.builders.contains_key(xtype)
    }

    pub fn len(&self) -> usize {
        self.builders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }

    /// Registered widget type keys, sorted
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.builders.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

impl std::fmt::Debug for WidgetRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetRegistry")
            .field("xtypes", &self.keys())
            .field("type_defaults", &self.type_defaults)
            .finish()
    }
}
