//! Test helpers: recording accessory, factory, and error sink.

#![allow(dead_code)]

use renderer_bridge::{
    AccessoryFactory, AccessoryId, AccessorySpec, BindingContext, BindingError, DeviceDescription,
    ErrorSink, InformationField, SpeakerAccessory,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const TEST_USN: &str = "uuid:RINCON_000E58A0123456::urn:schemas-upnp-org:device:MediaRenderer:1";
pub const TEST_UDN: &str = "uuid:RINCON_000E58A0123456";

/// Accessory that records the last value of every characteristic
pub struct RecordingAccessory {
    id: AccessoryId,
    on: Mutex<Option<bool>>,
    volume: Mutex<Option<u8>>,
    information: Mutex<HashMap<InformationField, String>>,
    updates: Mutex<usize>,
}

impl RecordingAccessory {
    pub fn new(id: AccessoryId) -> Arc<Self> {
        Arc::new(Self {
            id,
            on: Mutex::new(None),
            volume: Mutex::new(None),
            information: Mutex::new(HashMap::new()),
            updates: Mutex::new(0),
        })
    }

    pub fn on(&self) -> Option<bool> {
        *self.on.lock().unwrap()
    }

    pub fn volume(&self) -> Option<u8> {
        *self.volume.lock().unwrap()
    }

    pub fn information(&self, field: InformationField) -> Option<String> {
        self.information.lock().unwrap().get(&field).cloned()
    }

    pub fn information_snapshot(&self) -> HashMap<InformationField, String> {
        self.information.lock().unwrap().clone()
    }

    /// Number of on/volume pushes received
    pub fn value_updates(&self) -> usize {
        *self.updates.lock().unwrap()
    }
}

impl SpeakerAccessory for RecordingAccessory {
    fn id(&self) -> AccessoryId {
        self.id
    }

    fn update_on(&self, on: bool) {
        *self.on.lock().unwrap() = Some(on);
        *self.updates.lock().unwrap() += 1;
    }

    fn update_volume(&self, volume: u8) {
        *self.volume.lock().unwrap() = Some(volume);
        *self.updates.lock().unwrap() += 1;
    }

    fn update_information(&self, field: InformationField, value: &str) {
        self.information
            .lock()
            .unwrap()
            .insert(field, value.to_string());
    }
}

/// Factory that hands out recording accessories and remembers them
#[derive(Default)]
pub struct RecordingFactory {
    specs: Mutex<Vec<AccessorySpec>>,
    created: Mutex<Vec<Arc<RecordingAccessory>>>,
}

impl RecordingFactory {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn created_count(&self) -> usize {
        self.created.lock().unwrap().len()
    }

    pub fn specs(&self) -> Vec<AccessorySpec> {
        self.specs.lock().unwrap().clone()
    }

    pub fn last(&self) -> Arc<RecordingAccessory> {
        self.created
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no accessory created")
    }
}

impl AccessoryFactory for RecordingFactory {
    fn create(&self, spec: AccessorySpec) -> Arc<dyn SpeakerAccessory> {
        let accessory = RecordingAccessory::new(spec.id);
        self.specs.lock().unwrap().push(spec);
        self.created.lock().unwrap().push(Arc::clone(&accessory));
        accessory
    }
}

/// Sink that keeps every reported failure
#[derive(Default)]
pub struct RecordingSink {
    reports: Mutex<Vec<(String, &'static str, BindingError)>>,
}

impl RecordingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reports(&self) -> Vec<(String, &'static str, BindingError)> {
        self.reports.lock().unwrap().clone()
    }
}

impl ErrorSink for RecordingSink {
    fn report(&self, usn: &str, operation: &'static str, error: &BindingError) {
        self.reports
            .lock()
            .unwrap()
            .push((usn.to_string(), operation, error.clone()));
    }
}

pub fn create_test_context(
    factory: &Arc<RecordingFactory>,
    sink: &Arc<RecordingSink>,
) -> BindingContext {
    BindingContext::new(factory.clone()).with_sink(sink.clone())
}

pub fn create_test_description() -> DeviceDescription {
    DeviceDescription::new(TEST_UDN)
        .with_friendly_name("Living Room TV")
        .with_manufacturer("Acme")
        .with_model_name("Renderer 3000")
        .with_serial_number("SN-0001")
}
