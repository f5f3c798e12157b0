//! RenderingControl event types
//!
//! RenderingControl notifications carry only the state variables that
//! changed. The typed record keeps every field optional so "present" and
//! "absent" stay distinct all the way to the consumer.

use serde::{Deserialize, Serialize};

use crate::PropertySet;

/// Changed RenderingControl state for the Master channel
///
/// Values are kept as the raw strings the device sent; interpreting them is
/// left to the consumer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderingControlEvent {
    /// Volume level, e.g. `"37"`
    #[serde(rename = "Volume", default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,

    /// Mute state as an integer string, e.g. `"1"`
    #[serde(rename = "Mute", default, skip_serializing_if = "Option::is_none")]
    pub mute: Option<String>,
}

impl RenderingControlEvent {
    /// Extract the Master channel fields from a notification
    ///
    /// Some renderers flatten LastChange per channel and report
    /// `MasterVolume`/`MasterMute` instead of the plain variable names.
    pub fn from_properties(properties: &PropertySet) -> Self {
        Self {
            volume: lookup(properties, "Volume").or_else(|| lookup(properties, "MasterVolume")),
            mute: lookup(properties, "Mute").or_else(|| lookup(properties, "MasterMute")),
        }
    }

    pub fn with_volume(mut self, volume: impl Into<String>) -> Self {
        self.volume = Some(volume.into());
        self
    }

    pub fn with_mute(mut self, mute: impl Into<String>) -> Self {
        self.mute = Some(mute.into());
        self
    }

    /// True when the notification carried none of the tracked fields
    pub fn is_empty(&self) -> bool {
        self.volume.is_none() && self.mute.is_none()
    }
}

fn lookup(properties: &PropertySet, name: &str) -> Option<String> {
    properties.get(name).cloned()
}
