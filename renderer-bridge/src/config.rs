//! Configuration for renderer bindings
//!
//! Every binding issues its actions against one RenderingControl instance and
//! channel. The defaults match what `MediaRenderer:1` devices expose; hosts
//! only need to override them for renderers with non-standard channels.

use renderer_api::Service;
use serde::{Deserialize, Serialize};

/// Device type URN recorded in the context of every projected accessory
pub const MEDIA_RENDERER_DEVICE_TYPE: &str = "urn:schemas-upnp-org:device:MediaRenderer:1";

/// Configuration shared by every binding a registry creates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BindingConfig {
    /// Service used for subscriptions and mute/volume actions
    /// Default: RenderingControl
    pub service: Service,

    /// Value of the `InstanceID` argument
    /// Default: 0
    pub instance_id: u32,

    /// Value of the `Channel` argument
    /// Default: "Master"
    pub channel: String,

    /// Device type stored in the accessory context when the description
    /// does not announce one
    /// Default: MediaRenderer:1
    pub device_type: String,
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self {
            service: Service::RenderingControl,
            instance_id: 0,
            channel: "Master".to_string(),
            device_type: MEDIA_RENDERER_DEVICE_TYPE.to_string(),
        }
    }
}

impl BindingConfig {
    /// Create a new BindingConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the channel actions are issued against
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = channel.into();
        self
    }

    /// Set the rendering instance actions are issued against
    pub fn with_instance_id(mut self, instance_id: u32) -> Self {
        self.instance_id = instance_id;
        self
    }
}
