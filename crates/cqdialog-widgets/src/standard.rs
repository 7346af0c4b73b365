//! Standard widgets
//!
//! A plain input widget usable for any leaf widget type, and a panel that
//! can stand in for a whole tab.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use cqdialog_model::{DialogElement, TabbableElement, DEFAULT_RANKING};

use crate::builder::{WidgetBuilder, WidgetParameters};
use crate::error::WidgetBuildError;
use crate::Result;

pub(crate) const PANEL_XTYPE: &str = "panel";

/// Option a panel reads to decide whether it declares itself as a tab
const PANEL_TAB_OPTION: &str = "tab";

/// Property keys the standard widget writes itself
const RESERVED_PROPERTIES: &[&str] = &[
    "xtype",
    "name",
    "fieldLabel",
    "fieldDescription",
    "allowBlank",
    "hideLabel",
    "defaultValue",
    "fieldName",
    "ranking",
    "kind",
];

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardWidget {
    pub field_name: String,
    pub xtype: String,
    /// Stored property name
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_description: Option<String>,
    pub allow_blank: bool,
    pub hide_label: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    pub ranking: f64,
    #[serde(flatten)]
    pub additional_properties: BTreeMap<String, String>,
}

impl StandardWidget {
    pub fn new(field_name: impl Into<String>, xtype: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            xtype: xtype.into(),
            name: name.into(),
            field_label: None,
            field_description: None,
            allow_blank: true,
            hide_label: false,
            default_value: None,
            ranking: DEFAULT_RANKING,
            additional_properties: BTreeMap::new(),
        }
    }
}

impl DialogElement for StandardWidget {
    fn field_name(&self) -> &str {
        &self.field_name
    }

    fn xtype(&self) -> &str {
        &self.xtype
    }

    fn ranking(&self) -> f64 {
        self.ranking
    }

    fn set_ranking(&mut self, ranking: f64) {
        self.ranking = ranking;
    }

    fn to_value(&self) -> Value {
        to_object(self, &self.field_name)
    }
}

/// Builds a [`StandardWidget`] for whatever widget type it was resolved under
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardWidgetBuilder;

impl WidgetBuilder for StandardWidgetBuilder {
    fn build(&self, params: &WidgetParameters<'_>) -> Result<Box<dyn DialogElement>> {
        let meta = params.meta;
        let field_label = meta.field_label.clone().filter(|label| !label.is_empty());

        if meta.hide_label && field_label.is_some() {
            return Err(WidgetBuildError::Conflict(
                "hideLabel is set but a fieldLabel is declared".to_string(),
            ));
        }

        if let Some(key) = meta
            .additional_properties
            .keys()
            .find(|key| RESERVED_PROPERTIES.contains(&key.as_str()))
        {
            return Err(WidgetBuildError::Conflict(format!(
                "additional property {} overrides a widget property",
                key
            )));
        }

        let mut widget = StandardWidget::new(params.field_name(), params.xtype, params.property_name());
        widget.field_label = field_label;
        widget.field_description = meta.field_description.clone().filter(|d| !d.is_empty());
        widget.allow_blank = !meta.required;
        widget.hide_label = meta.hide_label;
        widget.default_value = meta.default_value.clone();
        widget.additional_properties = meta.additional_properties.clone();

        Ok(Box::new(widget))
    }
}

/// Serialize a widget struct. Every field is a string, bool, f64 or string
/// map, so failure means a widget type broke that shape.
fn to_object<T: Serialize>(widget: &T, field_name: &str) -> Value {
    match serde_json::to_value(widget) {
        Ok(value) => value,
        Err(err) => {
            debug_assert!(false, "widget {} failed to serialize: {}", field_name, err);
            tracing::error!(field = %field_name, error = %err, "Widget serialization failed");
            Value::Null
        }
    }
}

/// Container widget that may declare itself as a tab
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelWidget {
    pub field_name: String,
    pub xtype: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip)]
    pub tab: bool,
    pub ranking: f64,
}

impl PanelWidget {
    pub fn new(field_name: impl Into<String>, tab: bool) -> Self {
        Self {
            field_name: field_name.into(),
            xtype: PANEL_XTYPE.to_string(),
            title: None,
            tab,
            ranking: DEFAULT_RANKING,
        }
    }
}

impl DialogElement for PanelWidget {
    fn field_name(&self) -> &str {
        &self.field_name
    }

    fn xtype(&self) -> &str {
        &self.xtype
    }

    fn ranking(&self) -> f64 {
        self.ranking
    }

    fn set_ranking(&mut self, ranking: f64) {
        self.ranking = ranking;
    }

    fn as_tabbable(&self) -> Option<&dyn TabbableElement> {
        Some(self)
    }

    fn as_tabbable_mut(&mut self) -> Option<&mut dyn TabbableElement> {
        Some(self)
    }

    fn to_value(&self) -> Value {
        to_object(self, &self.field_name)
    }
}

impl TabbableElement for PanelWidget {
    fn is_tab(&self) -> bool {
        self.tab
    }

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn set_title(&mut self, title: String) {
        self.title = Some(title);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PanelBuilder;

impl WidgetBuilder for PanelBuilder {
    fn build(&self, params: &WidgetParameters<'_>) -> Result<Box<dyn DialogElement>> {
        let tab = match params.meta.option(PANEL_TAB_OPTION) {
            None => false,
            Some("true") => true,
            Some("false") => false,
            Some(other) => {
                return Err(WidgetBuildError::InvalidOption {
                    option: PANEL_TAB_OPTION.to_string(),
                    value: other.to_string(),
                })
            }
        };

        let mut panel = PanelWidget::new(params.field_name(), tab);
        panel.title = params.meta.field_label.clone().filter(|label| !label.is_empty());
        Ok(Box::new(panel))
    }
}
