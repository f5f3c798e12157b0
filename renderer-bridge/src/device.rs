//! Capabilities of a bound device
//!
//! Each device class the bridge supports implements these on its own binding
//! type; there is no shared base state between classes.

use async_trait::async_trait;
use renderer_api::RenderingControlEvent;

use crate::error::Result;
use crate::model::DeviceDescription;

/// Creates or refreshes the accessory projection from a description
pub trait Bindable {
    fn bind(&self, description: &DeviceDescription) -> Result<()>;
}

/// Transport and presence lifecycle of a binding
#[async_trait]
pub trait Lifecycle {
    /// Subscribe to the device's event channel
    async fn start(&self) -> Result<()>;

    /// Drop the event subscription; never fails
    async fn stop(&self);

    /// The device was (re)detected as reachable
    async fn on_alive(&self);

    /// The device announced it is leaving the network
    fn on_bye(&self);
}

/// Translates inbound events into accessory updates
pub trait EventHandling {
    fn handle_event(&self, event: &RenderingControlEvent);
}
