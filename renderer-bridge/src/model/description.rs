//! Device description snapshot supplied by discovery

use serde::{Deserialize, Serialize};

use super::AccessoryId;

/// Description of a renderer as reported by its device description document
///
/// Produced by the discovery layer on every (re)discovery. Display fields are
/// optional; an empty string is treated the same as a missing field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDescription {
    /// Unique device name, e.g. "uuid:5f9ec1b3-ed59-49d8-a3d5-b2a3f3e1c7a0"
    #[serde(rename = "UDN")]
    pub udn: String,
    /// Unique service name the device was announced under
    #[serde(rename = "USN", default)]
    pub usn: Option<String>,
    /// Device type URN (the announcement's ST), e.g.
    /// "urn:schemas-upnp-org:device:MediaRenderer:1"
    #[serde(default)]
    pub device_type: Option<String>,
    #[serde(default)]
    pub friendly_name: Option<String>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub model_name: Option<String>,
    #[serde(default)]
    pub serial_number: Option<String>,
}

/// Information fields shown for an accessory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InformationField {
    Name,
    Manufacturer,
    Model,
    SerialNumber,
}

impl DeviceDescription {
    pub fn new(udn: impl Into<String>) -> Self {
        Self {
            udn: udn.into(),
            ..Default::default()
        }
    }

    pub fn with_usn(mut self, usn: impl Into<String>) -> Self {
        self.usn = Some(usn.into());
        self
    }

    pub fn with_device_type(mut self, device_type: impl Into<String>) -> Self {
        self.device_type = Some(device_type.into());
        self
    }

    pub fn with_friendly_name(mut self, name: impl Into<String>) -> Self {
        self.friendly_name = Some(name.into());
        self
    }

    pub fn with_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into());
        self
    }

    pub fn with_model_name(mut self, model: impl Into<String>) -> Self {
        self.model_name = Some(model.into());
        self
    }

    pub fn with_serial_number(mut self, serial: impl Into<String>) -> Self {
        self.serial_number = Some(serial.into());
        self
    }

    /// Accessory id derived from the UDN
    pub fn accessory_id(&self) -> AccessoryId {
        AccessoryId::from_udn(&self.udn)
    }

    /// Information fields this description actually carries
    pub fn information(&self) -> Vec<(InformationField, &str)> {
        [
            (InformationField::Name, &self.friendly_name),
            (InformationField::Manufacturer, &self.manufacturer),
            (InformationField::Model, &self.model_name),
            (InformationField::SerialNumber, &self.serial_number),
        ]
        .into_iter()
        .filter_map(|(field, value)| non_empty(value).map(|v| (field, v)))
        .collect()
    }

    /// Key the device is registered under: the USN, or the UDN without one
    pub fn usn(&self) -> &str {
        non_empty(&self.usn).unwrap_or(&self.udn)
    }

    /// Announced device type, if any
    pub fn device_type(&self) -> Option<&str> {
        non_empty(&self.device_type)
    }

    /// Name to show for the accessory, falling back to the UDN
    pub fn display_name(&self) -> &str {
        non_empty(&self.friendly_name).unwrap_or(&self.udn)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
