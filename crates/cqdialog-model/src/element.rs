//! Capabilities every registry-built element exposes

use std::fmt::Debug;

use serde_json::Value;

/// Ranking assigned to elements that never declared one.
pub const DEFAULT_RANKING: f64 = -1.0;

/// A widget produced by a registered builder.
///
/// The set of concrete widgets is open: new widget kinds implement this
/// trait and register a builder instead of adding a [`crate::DocumentNode`]
/// variant.
pub trait DialogElement: Debug + Send + Sync {
    /// Node name of the element inside its parent
    fn field_name(&self) -> &str;

    /// Widget type key the element was built for
    fn xtype(&self) -> &str;

    fn ranking(&self) -> f64;

    fn set_ranking(&mut self, ranking: f64);

    /// Tab capability, for elements that may stand in for a whole tab
    fn as_tabbable(&self) -> Option<&dyn TabbableElement> {
        None
    }

    fn as_tabbable_mut(&mut self) -> Option<&mut dyn TabbableElement> {
        None
    }

    /// Structural representation handed to serializers.
    ///
    /// Must be a JSON object.
    fn to_value(&self) -> Value;
}

/// An element that can be promoted to a tab of the dialog.
pub trait TabbableElement {
    /// Whether the element declares itself as a tab
    fn is_tab(&self) -> bool;

    fn title(&self) -> Option<&str>;

    fn set_title(&mut self, title: String);
}
