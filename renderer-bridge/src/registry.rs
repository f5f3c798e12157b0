//! Registry of bindings keyed by USN
//!
//! The registry is the owner of every binding. Discovery notifications are
//! routed through it: a device that says bye keeps its binding so it can be
//! revived, and only `remove()` drops a binding for good.

use dashmap::DashMap;
use std::sync::Arc;

use crate::accessory::SpeakerAccessory;
use crate::binding::{BindingContext, MediaRendererBinding};
use crate::device::{Bindable, Lifecycle};
use crate::error::Result;
use crate::model::DeviceDescription;

/// Owns the bindings of all known renderers
pub struct RendererRegistry {
    context: BindingContext,
    bindings: DashMap<String, Arc<MediaRendererBinding>>,
}

impl RendererRegistry {
    pub fn new(context: BindingContext) -> Self {
        Self {
            context,
            bindings: DashMap::new(),
        }
    }

    /// Register an accessory the host restored from its cache
    ///
    /// Returns the existing binding unchanged if `usn` is already known.
    pub fn restore(
        &self,
        usn: impl Into<String>,
        accessory: Arc<dyn SpeakerAccessory>,
    ) -> Arc<MediaRendererBinding> {
        let usn = usn.into();
        let entry = self.bindings.entry(usn.clone()).or_insert_with(|| {
            tracing::debug!(usn = %usn, "Restoring cached accessory");
            Arc::new(MediaRendererBinding::restore(
                usn.clone(),
                accessory,
                self.context.clone(),
            ))
        });
        Arc::clone(entry.value())
    }

    /// A device was found or its description changed
    ///
    /// Creates the binding on first sight and binds it to `description`.
    pub fn discovered(
        &self,
        usn: &str,
        description: &DeviceDescription,
    ) -> Result<Arc<MediaRendererBinding>> {
        let binding = Arc::clone(
            self.bindings
                .entry(usn.to_string())
                .or_insert_with(|| {
                    tracing::info!(usn, "New renderer");
                    Arc::new(MediaRendererBinding::new(usn, self.context.clone()))
                })
                .value(),
        );

        binding.bind(description)?;
        Ok(binding)
    }

    /// Same as `discovered`, keyed by the USN the description carries
    pub fn register(&self, description: &DeviceDescription) -> Result<Arc<MediaRendererBinding>> {
        self.discovered(description.usn(), description)
    }

    /// A known device announced itself alive; unknown USNs are ignored
    pub async fn alive(&self, usn: &str) {
        if let Some(binding) = self.get(usn) {
            binding.on_alive().await;
        }
    }

    /// A known device said bye; unknown USNs are ignored
    pub fn bye(&self, usn: &str) {
        if let Some(binding) = self.get(usn) {
            binding.on_bye();
        }
    }

    /// Remove a binding permanently, stopping its subscription first
    pub async fn remove(&self, usn: &str) -> Option<Arc<MediaRendererBinding>> {
        let (_, binding) = self.bindings.remove(usn)?;
        binding.stop().await;
        tracing::info!(usn, "Removed renderer");
        Some(binding)
    }

    /// Stop every binding's subscription; bindings stay registered
    pub async fn stop_all(&self) {
        for binding in self.all() {
            binding.stop().await;
        }
    }

    pub fn get(&self, usn: &str) -> Option<Arc<MediaRendererBinding>> {
        self.bindings.get(usn).map(|entry| Arc::clone(entry.value()))
    }

    pub fn all(&self) -> Vec<Arc<MediaRendererBinding>> {
        self.bindings
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
