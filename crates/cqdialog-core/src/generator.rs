//! Dialog generator
//!
//! Owns the widget registry and configuration shared by every component
//! processed in one build.

use std::sync::Arc;

use cqdialog_factory::DialogFactory;
use cqdialog_introspect::{ComponentDescriptor, ComponentIntrospector};
use cqdialog_model::Dialog;
use cqdialog_widgets::WidgetRegistry;

use crate::config::Config;
use crate::error::CoreError;
use crate::Result;

pub struct DialogGenerator {
    /// Read-only once the generator is built
    registry: Arc<WidgetRegistry>,
    config: Config,
}

impl DialogGenerator {
    pub fn new(config: Config) -> Self {
        let registry = if config.standard_widgets {
            WidgetRegistry::with_standard_widgets()
        } else {
            WidgetRegistry::new()
        };
        Self::with_registry(registry, config)
    }

    /// Generator over a host-populated registry
    pub fn with_registry(registry: WidgetRegistry, config: Config) -> Self {
        tracing::info!(widgets = registry.len(), "Widget registry ready");

        Self {
            registry: Arc::new(registry),
            config,
        }
    }

    pub fn registry(&self) -> &Arc<WidgetRegistry> {
        &self.registry
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Assemble the dialog of one component
    pub fn generate(&self, introspector: &dyn ComponentIntrospector) -> Result<Dialog> {
        let factory = DialogFactory::with_config(&self.registry, self.config.factory_config());
        factory.make(introspector).map_err(|err| {
            tracing::warn!(
                component = %introspector.component_name(),
                error = %err,
                "Dialog assembly failed"
            );
            CoreError::from(err)
        })
    }

    /// Assemble the dialog of a JSON component descriptor
    pub fn generate_json(&self, json: &str) -> Result<Dialog> {
        let descriptor = ComponentDescriptor::from_json(json)?;
        self.generate(&descriptor)
    }

    /// Assemble every component, keeping each outcome next to its component name
    pub fn generate_all(&self, components: &[ComponentDescriptor]) -> Vec<(String, Result<Dialog>)> {
        components
            .iter()
            .map(|component| (component.name.clone(), self.generate(component)))
            .collect()
    }
}

impl Clone for DialogGenerator {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            config: self.config.clone(),
        }
    }
}
