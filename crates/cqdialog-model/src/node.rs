//! Document nodes
//!
//! Nodes form the dialog tree:
//! ```text
//! Dialog
//!   └─ Tab (one per declared tab)
//!        └─ Collection
//!             └─ Widget | Include ...
//! ```
//! A tab-capable widget may take the place of a whole `Tab` subtree.

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::element::{DialogElement, DEFAULT_RANKING};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Registry-built widget
    Widget,
    /// Ordered grouping of widgets
    Collection,
    /// Tab container holding a collection
    Tab,
    /// Reference to a dialog fragment defined elsewhere
    Include,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Widget => "widget",
            NodeKind::Collection => "collection",
            NodeKind::Tab => "tab",
            NodeKind::Include => "include",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordered grouping of sibling nodes
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetCollection {
    pub field_name: String,
    pub ranking: f64,
    pub elements: Vec<DocumentNode>,
}

impl WidgetCollection {
    pub fn new(field_name: impl Into<String>, elements: Vec<DocumentNode>) -> Self {
        Self {
            field_name: field_name.into(),
            ranking: DEFAULT_RANKING,
            elements,
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// A titled tab of the dialog
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TabContainer {
    pub field_name: String,
    pub title: String,
    pub ranking: f64,
    pub elements: Vec<DocumentNode>,
}

impl TabContainer {
    pub fn new(field_name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            title: title.into(),
            ranking: DEFAULT_RANKING,
            elements: Vec::new(),
        }
    }

    /// Tab whose only child is `collection`
    pub fn wrapping(
        field_name: impl Into<String>,
        title: impl Into<String>,
        collection: WidgetCollection,
    ) -> Self {
        let mut tab = Self::new(field_name, title);
        tab.elements.push(DocumentNode::Collection(collection));
        tab
    }

    /// The collection a synthesized tab wraps
    pub fn collection(&self) -> Option<&WidgetCollection> {
        match self.elements.as_slice() {
            [DocumentNode::Collection(collection)] => Some(collection),
            _ => None,
        }
    }
}

/// Leaf pointing at an externally defined dialog fragment
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CqInclude {
    pub field_name: String,
    pub path: String,
    pub ranking: f64,
}

impl CqInclude {
    pub fn new(field_name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            path: path.into(),
            ranking: DEFAULT_RANKING,
        }
    }
}

#[derive(Debug)]
pub enum DocumentNode {
    Widget(Box<dyn DialogElement>),
    Collection(WidgetCollection),
    Tab(TabContainer),
    Include(CqInclude),
}

impl DocumentNode {
    pub fn widget<E: DialogElement + 'static>(element: E) -> Self {
        DocumentNode::Widget(Box::new(element))
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            DocumentNode::Widget(_) => NodeKind::Widget,
            DocumentNode::Collection(_) => NodeKind::Collection,
            DocumentNode::Tab(_) => NodeKind::Tab,
            DocumentNode::Include(_) => NodeKind::Include,
        }
    }

    pub fn field_name(&self) -> &str {
        match self {
            DocumentNode::Widget(element) => element.field_name(),
            DocumentNode::Collection(collection) => &collection.field_name,
            DocumentNode::Tab(tab) => &tab.field_name,
            DocumentNode::Include(include) => &include.field_name,
        }
    }

    pub fn ranking(&self) -> f64 {
        match self {
            DocumentNode::Widget(element) => element.ranking(),
            DocumentNode::Collection(collection) => collection.ranking,
            DocumentNode::Tab(tab) => tab.ranking,
            DocumentNode::Include(include) => include.ranking,
        }
    }

    pub fn set_ranking(&mut self, ranking: f64) {
        match self {
            DocumentNode::Widget(element) => element.set_ranking(ranking),
            DocumentNode::Collection(collection) => collection.ranking = ranking,
            DocumentNode::Tab(tab) => tab.ranking = ranking,
            DocumentNode::Include(include) => include.ranking = ranking,
        }
    }

    /// Whether this node could be promoted to a tab
    pub fn is_tabbable(&self) -> bool {
        match self {
            DocumentNode::Widget(element) => element.as_tabbable().is_some(),
            _ => false,
        }
    }

    /// Whether this node is tab-capable and declares itself as a tab
    pub fn declares_tab(&self) -> bool {
        match self {
            DocumentNode::Widget(element) => element
                .as_tabbable()
                .map(|tabbable| tabbable.is_tab())
                .unwrap_or(false),
            _ => false,
        }
    }

    /// Title of a tab-equivalent node
    pub fn tab_title(&self) -> Option<&str> {
        match self {
            DocumentNode::Tab(tab) => Some(&tab.title),
            DocumentNode::Widget(element) => element.as_tabbable().and_then(|t| t.title()),
            _ => None,
        }
    }

    /// Retitle a tab-equivalent node. Returns false for nodes without a title.
    pub fn set_tab_title(&mut self, title: String) -> bool {
        match self {
            DocumentNode::Tab(tab) => {
                tab.title = title;
                true
            }
            DocumentNode::Widget(element) => match element.as_tabbable_mut() {
                Some(tabbable) => {
                    tabbable.set_title(title);
                    true
                }
                None => false,
            },
            _ => false,
        }
    }

    pub fn as_widget(&self) -> Option<&dyn DialogElement> {
        match self {
            DocumentNode::Widget(element) => Some(element.as_ref()),
            _ => None,
        }
    }

    pub fn as_collection(&self) -> Option<&WidgetCollection> {
        match self {
            DocumentNode::Collection(collection) => Some(collection),
            _ => None,
        }
    }

    pub fn as_tab(&self) -> Option<&TabContainer> {
        match self {
            DocumentNode::Tab(tab) => Some(tab),
            _ => None,
        }
    }

    pub fn as_include(&self) -> Option<&CqInclude> {
        match self {
            DocumentNode::Include(include) => Some(include),
            _ => None,
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum TaggedNode<'a> {
    Collection(&'a WidgetCollection),
    Tab(&'a TabContainer),
    Include(&'a CqInclude),
}

impl Serialize for DocumentNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DocumentNode::Widget(element) => {
                let mut value = element.to_value();
                if let Value::Object(map) = &mut value {
                    map.insert("kind".to_string(), Value::from(NodeKind::Widget.as_str()));
                }
                value.serialize(serializer)
            }
            DocumentNode::Collection(collection) => {
                TaggedNode::Collection(collection).serialize(serializer)
            }
            DocumentNode::Tab(tab) => TaggedNode::Tab(tab).serialize(serializer),
            DocumentNode::Include(include) => TaggedNode::Include(include).serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::TabbableElement;
    use serde_json::json;

    #[derive(Debug)]
    struct Panel {
        name: String,
        title: Option<String>,
        tab: bool,
        ranking: f64,
    }

    impl DialogElement for Panel {
        fn field_name(&self) -> &str {
            &self.name
        }

        fn xtype(&self) -> &str {
            "panel"
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
            json!({ "fieldName": self.name, "xtype": "panel", "title": self.title })
        }
    }

    impl TabbableElement for Panel {
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

    fn panel(tab: bool) -> DocumentNode {
        DocumentNode::widget(Panel {
            name: "details".to_string(),
            title: None,
            tab,
            ranking: DEFAULT_RANKING,
        })
    }

    #[test]
    fn test_node_kind_display() {
        assert_eq!(NodeKind::Tab.to_string(), "tab");
        assert_eq!(NodeKind::Include.to_string(), "include");
    }

    #[test]
    fn test_tab_declaration() {
        let declared = panel(true);
        assert!(declared.is_tabbable());
        assert!(declared.declares_tab());

        let plain = panel(false);
        assert!(plain.is_tabbable());
        assert!(!plain.declares_tab());

        let include = DocumentNode::Include(CqInclude::new("tab0", "/apps/shared/tab"));
        assert!(!include.is_tabbable());
        assert!(!include.declares_tab());
    }

    #[test]
    fn test_retitle() {
        let mut node = panel(true);
        assert!(node.tab_title().is_none());
        assert!(node.set_tab_title("Advanced".to_string()));
        assert_eq!(node.tab_title(), Some("Advanced"));

        let mut include = DocumentNode::Include(CqInclude::new("tab0", "/apps/shared/tab"));
        assert!(!include.set_tab_title("Ignored".to_string()));
    }

    #[test]
    fn test_ranking() {
        let mut node = panel(false);
        assert_eq!(node.ranking(), DEFAULT_RANKING);
        node.set_ranking(5.0);
        assert_eq!(node.ranking(), 5.0);
    }

    #[test]
    fn test_tab_wrapping_collection() {
        let collection = WidgetCollection::new("widgets", vec![panel(false)]);
        let tab = TabContainer::wrapping("tab1", "General", collection);
        assert_eq!(tab.collection().unwrap().len(), 1);
        assert_eq!(DocumentNode::Tab(tab).tab_title(), Some("General"));
    }

    #[test]
    fn test_serialize_tree() {
        let collection = WidgetCollection::new(
            "widgets",
            vec![
                DocumentNode::Include(CqInclude::new("tab0", "/apps/shared/tab")),
                panel(false),
            ],
        );
        let tab = DocumentNode::Tab(TabContainer::wrapping("tab1", "General", collection));

        let value = serde_json::to_value(&tab).unwrap();
        assert_eq!(value["kind"], "tab");
        assert_eq!(value["title"], "General");
        let elements = &value["elements"][0]["elements"];
        assert_eq!(elements[0]["kind"], "include");
        assert_eq!(elements[0]["path"], "/apps/shared/tab");
        assert_eq!(elements[1]["kind"], "widget");
        assert_eq!(elements[1]["xtype"], "panel");
    }
}
