//! Model types for renderer-bridge

mod accessory_id;
mod description;

pub use accessory_id::AccessoryId;
pub use description::{DeviceDescription, InformationField};
