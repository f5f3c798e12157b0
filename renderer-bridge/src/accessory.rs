//! Presentation contracts
//!
//! The host owns the user-facing accessory. The bridge only pushes values
//! into it and asks an injected [`AccessoryFactory`] to create one the first
//! time a device is bound.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::model::{AccessoryId, InformationField};

/// Host-side accessory exposing a speaker's "on" and volume characteristics
///
/// "On" is modelled as *not muted*. Updates are pushes of the latest observed
/// value; the accessory itself is the cache.
pub trait SpeakerAccessory: Send + Sync {
    /// Identifier the accessory was created with
    fn id(&self) -> AccessoryId;

    /// Push the "on" characteristic
    fn update_on(&self, on: bool);

    /// Push the volume characteristic (0-100)
    fn update_volume(&self, volume: u8);

    /// Push one information field (name, manufacturer, model, serial)
    fn update_information(&self, field: InformationField, value: &str);
}

/// What a factory needs to create an accessory for a device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorySpec {
    pub id: AccessoryId,
    pub display_name: String,
    /// Context: USN of the device the accessory projects
    pub usn: String,
    /// Context: device type URN
    pub device_type: String,
}

/// Creates accessories on behalf of the host
pub trait AccessoryFactory: Send + Sync {
    fn create(&self, spec: AccessorySpec) -> Arc<dyn SpeakerAccessory>;
}

/// Accessory reference shared between a binding and its event handler
#[derive(Default)]
pub(crate) struct AccessorySlot {
    inner: RwLock<Option<Arc<dyn SpeakerAccessory>>>,
}

impl AccessorySlot {
    pub(crate) fn with(accessory: Arc<dyn SpeakerAccessory>) -> Self {
        Self {
            inner: RwLock::new(Some(accessory)),
        }
    }

    pub(crate) fn get(&self) -> Option<Arc<dyn SpeakerAccessory>> {
        self.inner.read().clone()
    }

    /// Return the current accessory, creating it with `create` if empty
    ///
    /// `create` runs without the slot locked, so it may read the slot. If a
    /// concurrent caller filled the slot first, its accessory wins and the
    /// freshly created one is dropped.
    pub(crate) fn get_or_insert_with(
        &self,
        create: impl FnOnce() -> Arc<dyn SpeakerAccessory>,
    ) -> (Arc<dyn SpeakerAccessory>, bool) {
        if let Some(existing) = self.get() {
            return (existing, false);
        }

        let accessory = create();
        let mut inner = self.inner.write();
        match inner.as_ref() {
            Some(existing) => (Arc::clone(existing), false),
            None => {
                *inner = Some(Arc::clone(&accessory));
                (accessory, true)
            }
        }
    }
}
