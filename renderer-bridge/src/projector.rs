//! RenderingControl event projection
//!
//! Turns partial event payloads into accessory updates. Only the fields a
//! notification carries are pushed; a field that fails to parse is dropped
//! with a warning and never takes the rest of the event down with it.

use renderer_api::{EventHandler, PropertySet, RenderingControlEvent};
use std::sync::Arc;

use crate::accessory::{AccessorySlot, SpeakerAccessory};
use crate::value::{parse_mute, parse_volume};

/// Values an event carried after parsing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderUpdate {
    pub volume: Option<u8>,
    pub muted: Option<bool>,
}

impl RenderUpdate {
    /// Parse the fields of `event`, dropping any that are malformed
    pub fn from_event(event: &RenderingControlEvent) -> Self {
        let volume = event.volume.as_deref().and_then(|raw| {
            parse_volume("Volume", raw)
                .inspect_err(|e| tracing::warn!("Dropping event field: {}", e))
                .ok()
        });
        let muted = event.mute.as_deref().and_then(|raw| {
            parse_mute("Mute", raw)
                .inspect_err(|e| tracing::warn!("Dropping event field: {}", e))
                .ok()
        });

        Self { volume, muted }
    }

    pub fn is_empty(&self) -> bool {
        self.volume.is_none() && self.muted.is_none()
    }
}

/// Push the fields of `event` to `accessory`, one update per present field
pub fn project(event: &RenderingControlEvent, accessory: &dyn SpeakerAccessory) -> RenderUpdate {
    let update = RenderUpdate::from_event(event);

    if let Some(volume) = update.volume {
        accessory.update_volume(volume);
    }
    if let Some(muted) = update.muted {
        accessory.update_on(!muted);
    }

    update
}

/// Handler registered with the action client on `start()`
///
/// Holds the binding's accessory slot rather than the binding itself, so the
/// client never keeps a binding alive.
pub(crate) struct ProjectingHandler {
    usn: String,
    accessory: Arc<AccessorySlot>,
}

impl ProjectingHandler {
    pub(crate) fn new(usn: String, accessory: Arc<AccessorySlot>) -> Self {
        Self { usn, accessory }
    }

    pub(crate) fn dispatch(&self, event: &RenderingControlEvent) {
        let Some(accessory) = self.accessory.get() else {
            tracing::debug!(usn = %self.usn, "Ignoring event for unbound device");
            return;
        };

        let update = project(event, accessory.as_ref());
        tracing::debug!(usn = %self.usn, ?update, "Projected RenderingControl event");
    }
}

impl EventHandler for ProjectingHandler {
    fn handle_event(&self, properties: &PropertySet) {
        self.dispatch(&RenderingControlEvent::from_properties(properties));
    }
}
