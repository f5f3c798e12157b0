//! Contracts for the transport session with a device
//!
//! The bridge does not speak SOAP or GENA itself. Whatever owns the network
//! session implements [`ActionClient`] and hands it to the bridge; inbound
//! event notifications are delivered to an [`EventHandler`] as a
//! [`PropertySet`] of the state variables that changed.

use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::{Result, Service};

/// State variables carried by one event notification
///
/// UPnP events are partial: only the variables that changed are present.
pub type PropertySet = HashMap<String, String>;

/// Receiver for event notifications of a subscribed service
///
/// Handlers are registered with [`ActionClient::subscribe`] and must be passed
/// back unchanged to [`ActionClient::unsubscribe`]; clients identify them by
/// pointer (`Arc::ptr_eq`).
pub trait EventHandler: Send + Sync {
    /// Handle one notification. Must not panic or block.
    fn handle_event(&self, properties: &PropertySet);
}

/// Performs actions against a device's services and manages subscriptions
///
/// Timeouts, retries, and subscription renewal all belong to the implementor.
#[async_trait]
pub trait ActionClient: Send + Sync {
    /// Register `handler` for event notifications of `service`
    async fn subscribe(&self, service: Service, handler: Arc<dyn EventHandler>) -> Result<()>;

    /// Remove a handler previously registered with [`ActionClient::subscribe`]
    async fn unsubscribe(&self, service: Service, handler: Arc<dyn EventHandler>) -> Result<()>;

    /// Invoke `action` on `service` and return its output arguments
    async fn call_action(
        &self,
        service: Service,
        action: &str,
        args: ActionArgs,
    ) -> Result<ActionResponse>;
}

/// Ordered input arguments of an action
///
/// UPnP requires arguments in the order the service description declares
/// them, so this keeps insertion order instead of using a map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionArgs(Vec<(String, String)>);

impl ActionArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an argument, returning the updated set
    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.0.push((name.into(), value.to_string()));
        self
    }

    /// Look up an argument value by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ActionArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, value) in &self.0 {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", name, value)?;
            first = false;
        }
        Ok(())
    }
}

/// Output arguments of an action, as the strings the device returned
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionResponse(HashMap<String, String>);

impl ActionResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an output argument, returning the updated response
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<HashMap<String, String>> for ActionResponse {
    fn from(values: HashMap<String, String>) -> Self {
        Self(values)
    }
}
