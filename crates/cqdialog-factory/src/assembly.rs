//! Widget assembly: one annotated member into one document node

use cqdialog_introspect::{ComponentIntrospector, DialogFieldMeta, MemberDescriptor};
use cqdialog_model::DocumentNode;
use cqdialog_widgets::{WidgetParameters, WidgetRegistry};

use crate::error::DialogError;
use crate::Result;

/// Inputs shared by every member of one component
#[derive(Clone, Copy)]
pub struct AssemblyContext<'a> {
    pub introspector: &'a dyn ComponentIntrospector,
    pub registry: &'a WidgetRegistry,
    pub use_dot_slash_in_name: bool,
}

/// Build the widget for `member` and stamp it with the declared ranking
pub fn assemble(
    member: &MemberDescriptor,
    meta: &DialogFieldMeta,
    context: &AssemblyContext<'_>,
) -> Result<DocumentNode> {
    let field_name = member.field_name();
    let registry = context.registry;

    let xtype = match meta.explicit_xtype() {
        Some(xtype) => xtype,
        None => member
            .value_type
            .as_deref()
            .and_then(|value_type| registry.infer_widget_type(value_type))
            .ok_or_else(|| DialogError::UnresolvedWidgetType {
                field_name: field_name.clone(),
                xtype: member.value_type.clone().unwrap_or_default(),
            })?,
    };

    let builder = registry
        .resolve(xtype)
        .ok_or_else(|| DialogError::UnresolvedWidgetType {
            field_name: field_name.clone(),
            xtype: xtype.to_string(),
        })?;

    let params = WidgetParameters {
        member,
        meta,
        xtype,
        introspector: context.introspector,
        registry,
        use_dot_slash_in_name: context.use_dot_slash_in_name,
    };

    let mut element = builder
        .build(&params)
        .map_err(|source| DialogError::InvalidField {
            field_name: field_name.clone(),
            source,
        })?;
    element.set_ranking(meta.ranking);

    tracing::debug!(
        field = %field_name,
        xtype = %xtype,
        ranking = meta.ranking,
        "Assembled widget"
    );

    Ok(DocumentNode::Widget(element))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cqdialog_introspect::{ComponentDescriptor, ComponentMeta};
    use cqdialog_model::NodeKind;
    use cqdialog_widgets::WidgetBuildError;

    fn run(member: MemberDescriptor, registry: &WidgetRegistry) -> Result<DocumentNode> {
        let component = ComponentDescriptor::new("com.example.Hero", ComponentMeta::default());
        let context = AssemblyContext {
            introspector: &component,
            registry,
            use_dot_slash_in_name: true,
        };
        let meta = member.dialog_field.clone().unwrap_or_default();
        assemble(&member, &meta, &context)
    }

    #[test]
    fn test_explicit_xtype_wins() {
        let registry = WidgetRegistry::with_standard_widgets();
        let member = MemberDescriptor::field("summary", "String").with_dialog_field(DialogFieldMeta {
            xtype: Some("textarea".to_string()),
            ranking: 3.0,
            ..Default::default()
        });

        let node = run(member, &registry).unwrap();
        assert_eq!(node.kind(), NodeKind::Widget);
        assert_eq!(node.as_widget().unwrap().xtype(), "textarea");
        assert_eq!(node.ranking(), 3.0);
    }

    #[test]
    fn test_inferred_xtype() {
        let registry = WidgetRegistry::with_standard_widgets();
        let member = MemberDescriptor::field("enabled", "boolean")
            .with_dialog_field(DialogFieldMeta::default());

        let node = run(member, &registry).unwrap();
        assert_eq!(node.as_widget().unwrap().xtype(), "checkbox");
        assert_eq!(node.ranking(), -1.0);
    }

    #[test]
    fn test_unregistered_xtype() {
        let registry = WidgetRegistry::with_standard_widgets();
        let member = MemberDescriptor::field("color", "String").with_dialog_field(DialogFieldMeta {
            xtype: Some("colorfield".to_string()),
            ..Default::default()
        });

        assert_eq!(
            run(member, &registry).unwrap_err(),
            DialogError::UnresolvedWidgetType {
                field_name: "color".to_string(),
                xtype: "colorfield".to_string()
            }
        );
    }

    #[test]
    fn test_uninferable_value_type() {
        let registry = WidgetRegistry::with_standard_widgets();
        let member = MemberDescriptor::field("link", "java.net.URI")
            .with_dialog_field(DialogFieldMeta::default());

        assert_eq!(
            run(member, &registry).unwrap_err(),
            DialogError::UnresolvedWidgetType {
                field_name: "link".to_string(),
                xtype: "java.net.URI".to_string()
            }
        );
    }

    #[test]
    fn test_builder_failure_is_invalid_field() {
        let registry = WidgetRegistry::with_standard_widgets();
        let member = MemberDescriptor::field("heading", "String").with_dialog_field(DialogFieldMeta {
            field_name: Some("headingField".to_string()),
            field_label: Some("Heading".to_string()),
            hide_label: true,
            ..Default::default()
        });

        let err = run(member, &registry).unwrap_err();
        assert!(matches!(
            &err,
            DialogError::InvalidField { field_name, source: WidgetBuildError::Conflict(_) }
                if field_name == "headingField"
        ));
        assert_eq!(err.field_name(), Some("headingField"));
    }
}
