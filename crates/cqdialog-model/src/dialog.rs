//! Dialog root
//!
//! The aggregate handed to serializers: title, optional file name and size,
//! and exactly one tab-equivalent node per tab.

use serde::Serialize;

use crate::node::DocumentNode;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dialog {
    /// Window title
    pub title: String,
    /// Output file name override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Tab-equivalent nodes in tab order
    pub tabs: Vec<DocumentNode>,
}

impl Dialog {
    pub fn new(title: impl Into<String>, tabs: Vec<DocumentNode>) -> Self {
        Self {
            title: title.into(),
            file_name: None,
            width: None,
            height: None,
            tabs,
        }
    }

    /// Set the file name override; empty names are treated as absent
    pub fn with_file_name(mut self, file_name: Option<String>) -> Self {
        self.file_name = file_name.filter(|name| !name.is_empty());
        self
    }

    /// Set the dialog size; non-positive dimensions are treated as absent
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = positive(width);
        self.height = positive(height);
        self
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn tab(&self, index: usize) -> Option<&DocumentNode> {
        self.tabs.get(index)
    }

    /// Titles of all tabs, in order
    pub fn tab_titles(&self) -> Vec<Option<&str>> {
        self.tabs.iter().map(|tab| tab.tab_title()).collect()
    }
}

fn positive(value: i32) -> Option<u32> {
    u32::try_from(value).ok().filter(|v| *v > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{TabContainer, WidgetCollection};

    fn tab(title: &str) -> DocumentNode {
        DocumentNode::Tab(TabContainer::wrapping(
            "tab1",
            title,
            WidgetCollection::new("widgets", Vec::new()),
        ))
    }

    #[test]
    fn test_size_positive_only() {
        let dialog = Dialog::new("Hero", vec![tab("Hero")]).with_size(400, 0);
        assert_eq!(dialog.width, Some(400));
        assert_eq!(dialog.height, None);

        let dialog = Dialog::new("Hero", vec![tab("Hero")]).with_size(-5, 300);
        assert_eq!(dialog.width, None);
        assert_eq!(dialog.height, Some(300));
    }

    #[test]
    fn test_empty_file_name_is_absent() {
        let dialog = Dialog::new("Hero", Vec::new()).with_file_name(Some(String::new()));
        assert!(dialog.file_name.is_none());

        let dialog = Dialog::new("Hero", Vec::new()).with_file_name(Some("dialog".to_string()));
        assert_eq!(dialog.file_name.as_deref(), Some("dialog"));
    }

    #[test]
    fn test_tab_titles() {
        let dialog = Dialog::new("Hero", vec![tab("General"), tab("Advanced")]);
        assert_eq!(dialog.tab_count(), 2);
        assert_eq!(dialog.tab_titles(), vec![Some("General"), Some("Advanced")]);
        assert!(dialog.tab(2).is_none());
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let dialog = Dialog::new("Hero", vec![tab("Hero")]);
        let value = serde_json::to_value(&dialog).unwrap();
        assert_eq!(value["title"], "Hero");
        assert!(value.get("fileName").is_none());
        assert!(value.get("width").is_none());
        assert_eq!(value["tabs"].as_array().unwrap().len(), 1);
    }
}
