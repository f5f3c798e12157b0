//! MediaRenderer binding
//!
//! One [`MediaRendererBinding`] exists per logical device, keyed by the
//! device's USN. It owns the accessory projection, the transport session
//! reference, and the RenderingControl subscription state.
//!
//! # State machine
//!
//! ```text
//! Unbound --bind--> Bound(Unsubscribed) --start--> Bound(Subscribed)
//!                          ^                            |
//!                          +-----------stop-------------+
//! ```
//!
//! `on_alive`/`on_bye` only touch accessory values. Attaching or detaching a
//! client resets the subscription to `Unsubscribed`; replacing a subscribed
//! client first releases the subscription on the old one.

use async_trait::async_trait;
use parking_lot::RwLock;
use renderer_api::{ActionClient, EventHandler, RenderingControlEvent};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::accessory::{AccessoryFactory, AccessorySlot, AccessorySpec, SpeakerAccessory};
use crate::config::BindingConfig;
use crate::control::RenderingController;
use crate::device::{Bindable, EventHandling, Lifecycle};
use crate::error::{BindingError, Result};
use crate::model::DeviceDescription;
use crate::projector::ProjectingHandler;
use crate::reporter::{ErrorSink, TracingErrorSink};
use crate::sync::{StateSync, SyncOutcome};

/// Event subscription state of a bound device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionState {
    Unsubscribed,
    Subscribed,
}

/// Observable state of a binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingState {
    Unbound,
    Bound(SubscriptionState),
}

/// Collaborators injected into every binding
#[derive(Clone)]
pub struct BindingContext {
    pub config: BindingConfig,
    pub factory: Arc<dyn AccessoryFactory>,
    pub sink: Arc<dyn ErrorSink>,
}

impl BindingContext {
    /// Context with default configuration that logs absorbed errors
    pub fn new(factory: Arc<dyn AccessoryFactory>) -> Self {
        Self {
            config: BindingConfig::default(),
            factory,
            sink: Arc::new(TracingErrorSink),
        }
    }

    pub fn with_config(mut self, config: BindingConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_sink(mut self, sink: Arc<dyn ErrorSink>) -> Self {
        self.sink = sink;
        self
    }
}

/// Binding between one discovered MediaRenderer and its accessory
pub struct MediaRendererBinding {
    usn: String,
    device_type: String,
    factory: Arc<dyn AccessoryFactory>,
    sink: Arc<dyn ErrorSink>,
    accessory: Arc<AccessorySlot>,
    description: RwLock<Option<DeviceDescription>>,
    control: RenderingController,
    subscription: Mutex<SubscriptionState>,
    handler: Arc<ProjectingHandler>,
}

impl MediaRendererBinding {
    /// Create an unbound binding for `usn`
    pub fn new(usn: impl Into<String>, context: BindingContext) -> Self {
        Self::with_slot(usn.into(), context, AccessorySlot::default())
    }

    /// Create a binding around an accessory the host restored from its cache
    ///
    /// The next `bind()` refreshes this accessory instead of creating one.
    pub fn restore(
        usn: impl Into<String>,
        accessory: Arc<dyn SpeakerAccessory>,
        context: BindingContext,
    ) -> Self {
        Self::with_slot(usn.into(), context, AccessorySlot::with(accessory))
    }

    fn with_slot(usn: String, context: BindingContext, slot: AccessorySlot) -> Self {
        let accessory = Arc::new(slot);
        let handler = Arc::new(ProjectingHandler::new(usn.clone(), Arc::clone(&accessory)));

        Self {
            device_type: context.config.device_type.clone(),
            control: RenderingController::new(context.config),
            factory: context.factory,
            sink: context.sink,
            usn,
            accessory,
            description: RwLock::new(None),
            subscription: Mutex::new(SubscriptionState::Unsubscribed),
            handler,
        }
    }

    pub fn usn(&self) -> &str {
        &self.usn
    }

    /// The projected accessory, if the device has been bound
    pub fn accessory(&self) -> Option<Arc<dyn SpeakerAccessory>> {
        self.accessory.get()
    }

    /// The most recent description passed to `bind()`
    pub fn description(&self) -> Option<DeviceDescription> {
        self.description.read().clone()
    }

    pub async fn state(&self) -> BindingState {
        if self.accessory.get().is_none() {
            return BindingState::Unbound;
        }
        BindingState::Bound(*self.subscription.lock().await)
    }

    /// Attach the transport session for this device
    ///
    /// A subscription held through a previous client is released on that
    /// client (best effort); call `start()` again to subscribe through the
    /// new one.
    pub async fn attach_client(&self, client: Arc<dyn ActionClient>) {
        let mut subscription = self.subscription.lock().await;
        let Some(previous) = self.control.attach(client) else {
            *subscription = SubscriptionState::Unsubscribed;
            return;
        };
        tracing::debug!(usn = %self.usn, "Replaced transport session");

        if *subscription == SubscriptionState::Subscribed {
            let service = self.control.config().service;
            let handler: Arc<dyn EventHandler> = self.handler.clone();
            if let Err(e) = previous.unsubscribe(service, handler).await {
                tracing::warn!(
                    usn = %self.usn,
                    %service,
                    "Unsubscribe from replaced session failed: {}",
                    e
                );
            }
        }
        *subscription = SubscriptionState::Unsubscribed;
    }

    /// Detach the transport session, returning it
    ///
    /// Does not unsubscribe: the session is assumed to be gone already.
    /// Use `stop()` first for an orderly teardown.
    pub async fn detach_client(&self) -> Option<Arc<dyn ActionClient>> {
        let mut subscription = self.subscription.lock().await;
        *subscription = SubscriptionState::Unsubscribed;
        self.control.detach()
    }

    pub fn has_client(&self) -> bool {
        self.control.is_attached()
    }

    /// Run reconciliation and return its outcome
    ///
    /// Same as `on_alive()` but hands the results back to the caller.
    /// Returns `None` for an unbound device.
    pub async fn sync(&self) -> Option<SyncOutcome> {
        let accessory = self.accessory.get()?;
        let outcome = StateSync::new(&self.usn, &self.control, accessory.as_ref(), self.sink.as_ref())
            .run()
            .await;
        Some(outcome)
    }

    // ------------------------------------------------------------------
    // Commands from the accessory
    // ------------------------------------------------------------------

    pub async fn get_mute(&self) -> Result<bool> {
        self.control.get_mute().await
    }

    pub async fn set_mute(&self, muted: bool) -> Result<()> {
        self.control.set_mute(muted).await
    }

    pub async fn get_volume(&self) -> Result<u8> {
        self.control.get_volume().await
    }

    pub async fn set_volume(&self, volume: u8) -> Result<()> {
        self.control.set_volume(volume).await
    }

    /// Read handler for the "on" characteristic (on = not muted)
    pub async fn get_on(&self) -> Result<bool> {
        self.get_mute().await.map(|muted| !muted)
    }

    /// Write handler for the "on" characteristic
    pub async fn set_on(&self, on: bool) -> Result<()> {
        self.set_mute(!on).await
    }
}

impl Bindable for MediaRendererBinding {
    fn bind(&self, description: &DeviceDescription) -> Result<()> {
        let (accessory, created) = self.accessory.get_or_insert_with(|| {
            let spec = AccessorySpec {
                id: description.accessory_id(),
                display_name: description.display_name().to_string(),
                usn: self.usn.clone(),
                device_type: description
                    .device_type()
                    .unwrap_or(&self.device_type)
                    .to_string(),
            };
            self.factory.create(spec)
        });

        if created {
            tracing::info!(usn = %self.usn, id = %accessory.id(), "Created accessory");
        }

        for (field, value) in description.information() {
            accessory.update_information(field, value);
        }

        *self.description.write() = Some(description.clone());
        Ok(())
    }
}

#[async_trait]
impl Lifecycle for MediaRendererBinding {
    async fn start(&self) -> Result<()> {
        let mut subscription = self.subscription.lock().await;
        if *subscription == SubscriptionState::Subscribed {
            tracing::debug!(usn = %self.usn, "Already subscribed, ignoring start");
            return Ok(());
        }
        if self.accessory.get().is_none() {
            return Err(BindingError::NotBound(self.usn.clone()));
        }

        let client = self.control.client().ok_or(BindingError::ClientNotInitialized)?;
        let service = self.control.config().service;
        let handler: Arc<dyn EventHandler> = self.handler.clone();

        client
            .subscribe(service, handler)
            .await
            .map_err(|source| BindingError::Subscription { service, source })?;

        *subscription = SubscriptionState::Subscribed;
        tracing::debug!(usn = %self.usn, %service, "Subscribed");
        Ok(())
    }

    async fn stop(&self) {
        let mut subscription = self.subscription.lock().await;
        if *subscription == SubscriptionState::Unsubscribed {
            return;
        }
        let Some(client) = self.control.client() else {
            *subscription = SubscriptionState::Unsubscribed;
            return;
        };

        let service = self.control.config().service;
        let handler: Arc<dyn EventHandler> = self.handler.clone();
        if let Err(e) = client.unsubscribe(service, handler).await {
            tracing::warn!(usn = %self.usn, %service, "Unsubscribe failed: {}", e);
        }

        *subscription = SubscriptionState::Unsubscribed;
        tracing::debug!(usn = %self.usn, %service, "Unsubscribed");
    }

    async fn on_alive(&self) {
        if self.sync().await.is_none() {
            tracing::debug!(usn = %self.usn, "Alive before bind, nothing to sync");
        }
    }

    fn on_bye(&self) {
        match self.accessory.get() {
            Some(accessory) => accessory.update_on(false),
            None => tracing::debug!(usn = %self.usn, "Bye before bind, nothing to update"),
        }
    }
}

impl EventHandling for MediaRendererBinding {
    fn handle_event(&self, event: &RenderingControlEvent) {
        self.handler.dispatch(event);
    }
}
