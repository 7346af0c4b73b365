//! Builder capability and the parameters every builder receives

use cqdialog_introspect::{ComponentIntrospector, DialogFieldMeta, MemberDescriptor};
use cqdialog_model::DialogElement;

use crate::registry::WidgetRegistry;
use crate::Result;

/// Shared context for building one member's widget
#[derive(Clone, Copy)]
pub struct WidgetParameters<'a> {
    pub member: &'a MemberDescriptor,
    /// Dialog field annotation of `member`
    pub meta: &'a DialogFieldMeta,
    /// Resolved widget type key
    pub xtype: &'a str,
    /// Component the member belongs to
    pub introspector: &'a dyn ComponentIntrospector,
    /// Registry, for builders that assemble nested widgets
    pub registry: &'a WidgetRegistry,
    /// Prefix generated property names with `./`
    pub use_dot_slash_in_name: bool,
}

impl<'a> WidgetParameters<'a> {
    pub fn field_name(&self) -> String {
        self.member.field_name()
    }

    /// Property name the widget stores its value under
    pub fn property_name(&self) -> String {
        let name = self.member.widget_name();
        if self.use_dot_slash_in_name {
            format!("./{}", name)
        } else {
            name
        }
    }
}

/// Turns an annotated member into a dialog element.
pub trait WidgetBuilder: Send + Sync {
    fn build(&self, params: &WidgetParameters<'_>) -> Result<Box<dyn DialogElement>>;
}

impl<F> WidgetBuilder for F
where
    F: Fn(&WidgetParameters<'_>) -> Result<Box<dyn DialogElement>> + Send + Sync,
{
    fn build(&self, params: &WidgetParameters<'_>) -> Result<Box<dyn DialogElement>> {
        self(params)
    }
}
