//! Collaborator contracts for UPnP MediaRenderer control
//!
//! This crate defines the types shared between the renderer bridge and the
//! transport layer that owns the network session with a device:
//!
//! - [`Service`]: the device services the bridge addresses
//! - [`ActionClient`]: action invocation and event subscription
//! - [`EventHandler`] / [`PropertySet`]: inbound event delivery
//! - [`RenderingControlEvent`]: typed view over a RenderingControl notification
//!
//! # Example
//!
//! ```rust,ignore
//! use renderer_api::{ActionArgs, ActionClient, Service};
//!
//! let args = ActionArgs::new().with("InstanceID", 0).with("Channel", "Master");
//! let response = client
//!     .call_action(Service::RenderingControl, "GetVolume", args)
//!     .await?;
//! println!("volume: {:?}", response.get("CurrentVolume"));
//! ```

pub mod client;
pub mod error;
pub mod events;
pub mod service;

pub use client::{ActionArgs, ActionClient, ActionResponse, EventHandler, PropertySet};
pub use error::{ApiError, Result};
pub use events::RenderingControlEvent;
pub use service::Service;
