//! Tab holders
//!
//! Per-run accumulators, one per declared tab. After every member has been
//! placed, each holder is reduced to exactly one tab-equivalent node:
//! ```text
//! [tab widget]        → the widget itself, retitled
//! [a, b, c, ...]      → Tab { Collection { a, b, c, ... } }
//! [tab widget, x, ..] → NestedTabConflict
//! ```

use cqdialog_model::{DocumentNode, TabContainer, WidgetCollection};

use crate::error::DialogError;
use crate::Result;

const COLLECTION_FIELD_NAME: &str = "widgets";

#[derive(Debug, Default)]
pub(crate) struct TabHolder {
    pub title: String,
    pub elements: Vec<DocumentNode>,
}

impl TabHolder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            elements: Vec::new(),
        }
    }

    pub fn add_element(&mut self, element: DocumentNode) {
        self.elements.push(element);
    }

    /// Collapse the holder into its tab node. `index` is the 0-based tab position.
    pub fn reduce(mut self, index: usize) -> Result<DocumentNode> {
        let count = self.elements.len();

        if let Some(position) = self.elements.iter().position(DocumentNode::declares_tab) {
            let field_name = self.elements[position].field_name().to_string();
            tracing::debug!(field = %field_name, tab = index + 1, "Tab widget found");

            if position != 0 || count != 1 {
                return Err(DialogError::NestedTabConflict { field_name });
            }

            let mut node = self.elements.remove(0);
            node.set_tab_title(self.title);
            return Ok(node);
        }

        tracing::debug!(tab = index + 1, elements = count, "Wrapping tab elements");

        let collection = WidgetCollection::new(COLLECTION_FIELD_NAME, self.elements);
        Ok(DocumentNode::Tab(TabContainer::wrapping(
            format!("tab{}", index + 1),
            self.title,
            collection,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cqdialog_model::{CqInclude, NodeKind};
    use cqdialog_widgets::{PanelWidget, StandardWidget};

    fn field(name: &str) -> DocumentNode {
        DocumentNode::widget(StandardWidget::new(name, "textfield", format!("./{}", name)))
    }

    fn tab_panel(name: &str) -> DocumentNode {
        DocumentNode::widget(PanelWidget::new(name, true))
    }

    #[test]
    fn test_wraps_plain_elements_in_order() {
        let mut holder = TabHolder::new("General");
        holder.add_element(field("title"));
        holder.add_element(DocumentNode::widget(PanelWidget::new("box", false)));
        holder.add_element(field("image"));

        let node = holder.reduce(0).unwrap();
        let tab = node.as_tab().unwrap();
        assert_eq!(tab.title, "General");
        assert_eq!(tab.field_name, "tab1");
        assert_eq!(tab.elements.len(), 1);

        let names: Vec<&str> = tab
            .collection()
            .unwrap()
            .elements
            .iter()
            .map(DocumentNode::field_name)
            .collect();
        assert_eq!(names, vec!["title", "box", "image"]);
    }

    #[test]
    fn test_empty_holder_yields_empty_collection() {
        let node = TabHolder::new("Empty").reduce(2).unwrap();
        let tab = node.as_tab().unwrap();
        assert_eq!(tab.field_name, "tab3");
        assert!(tab.collection().unwrap().is_empty());
    }

    #[test]
    fn test_promotes_sole_tab_widget() {
        let mut holder = TabHolder::new("Advanced");
        holder.add_element(tab_panel("advanced"));

        let node = holder.reduce(1).unwrap();
        assert_eq!(node.kind(), NodeKind::Widget);
        assert_eq!(node.field_name(), "advanced");
        assert_eq!(node.tab_title(), Some("Advanced"));
    }

    #[test]
    fn test_tab_widget_with_siblings_conflicts() {
        let mut holder = TabHolder::new("General");
        holder.add_element(tab_panel("advanced"));
        holder.add_element(field("title"));
        assert_eq!(
            holder.reduce(0).unwrap_err(),
            DialogError::NestedTabConflict {
                field_name: "advanced".to_string()
            }
        );

        let mut holder = TabHolder::new("General");
        holder.add_element(field("title"));
        holder.add_element(tab_panel("advanced"));
        assert!(matches!(
            holder.reduce(0),
            Err(DialogError::NestedTabConflict { .. })
        ));
    }

    #[test]
    fn test_include_before_tab_widget_conflicts() {
        let mut holder = TabHolder::new(String::new());
        holder.add_element(DocumentNode::Include(CqInclude::new("tab0", "/apps/shared/tab")));
        holder.add_element(tab_panel("advanced"));
        assert!(matches!(
            holder.reduce(0),
            Err(DialogError::NestedTabConflict { field_name }) if field_name == "advanced"
        ));
    }
}
