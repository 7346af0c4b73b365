//! Dialog factory
//!
//! Drives one assembly run:
//! 1. title and tab holders from the component metadata
//! 2. every annotated member assembled into its holder
//! 3. every holder reduced to one tab node
//! 4. tab nodes folded into the dialog root

use cqdialog_introspect::{ComponentIntrospector, ComponentMeta};
use cqdialog_model::{CqInclude, Dialog, DocumentNode};
use cqdialog_widgets::WidgetRegistry;

use crate::assembly::{assemble, AssemblyContext};
use crate::config::FactoryConfig;
use crate::error::DialogError;
use crate::holder::TabHolder;
use crate::Result;

pub struct DialogFactory<'a> {
    registry: &'a WidgetRegistry,
    config: FactoryConfig,
}

impl<'a> DialogFactory<'a> {
    pub fn new(registry: &'a WidgetRegistry) -> Self {
        Self::with_config(registry, FactoryConfig::default())
    }

    pub fn with_config(registry: &'a WidgetRegistry, config: FactoryConfig) -> Self {
        Self { registry, config }
    }

    pub fn config(&self) -> &FactoryConfig {
        &self.config
    }

    /// Assemble the dialog of one component
    pub fn make(&self, introspector: &dyn ComponentIntrospector) -> Result<Dialog> {
        let component = introspector.read_component_metadata();
        let title = component.title.clone();

        let mut holders = self.build_tab_holders(&component)?;

        let context = AssemblyContext {
            introspector,
            registry: self.registry,
            use_dot_slash_in_name: self.config.use_dot_slash_in_name,
        };

        for member in introspector.list_annotated_members() {
            let Some(meta) = introspector.read_dialog_metadata(&member) else {
                continue;
            };

            let node = assemble(&member, meta, &context)?;

            let index = meta.tab;
            let holder = usize::try_from(index)
                .ok()
                .and_then(|i| i.checked_sub(1))
                .and_then(|i| holders.get_mut(i))
                .ok_or_else(|| DialogError::InvalidTabIndex {
                    index,
                    field_name: member.field_name(),
                })?;
            holder.add_element(node);
        }

        let tabs = holders
            .into_iter()
            .enumerate()
            .map(|(index, holder)| holder.reduce(index))
            .collect::<Result<Vec<DocumentNode>>>()?;

        let dialog = Dialog::new(title, tabs)
            .with_file_name(component.file_name)
            .with_size(component.dialog_width, component.dialog_height);

        tracing::info!(
            component = %introspector.component_name(),
            tabs = dialog.tab_count(),
            "Assembled dialog"
        );

        Ok(dialog)
    }

    fn build_tab_holders(&self, component: &ComponentMeta) -> Result<Vec<TabHolder>> {
        if component.tabs.is_empty() {
            return Ok(vec![TabHolder::new(component.title.clone())]);
        }

        let mut holders: Vec<TabHolder> = Vec::with_capacity(component.tabs.len());
        for (index, tab) in component.tabs.iter().enumerate() {
            if tab.title().is_some() && tab.path().is_some() {
                return Err(DialogError::AmbiguousTabDeclaration { index: index + 1 });
            }

            let mut holder = TabHolder::new(tab.title().unwrap_or_default());
            if let Some(path) = tab.path() {
                let field_name = format!("{}{}", self.config.include_field_prefix, holders.len());
                holder.add_element(DocumentNode::Include(CqInclude::new(field_name, path)));
            }
            holders.push(holder);
        }

        Ok(holders)
    }
}
