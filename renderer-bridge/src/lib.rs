//! Renderer Bridge
//!
//! Binds discovered UPnP MediaRenderers to host accessories and keeps their
//! mute and volume state in sync.
//!
//! # Architecture
//!
//! ```text
//! Discovery ──> RendererRegistry ──> MediaRendererBinding ──> SpeakerAccessory
//!                                        │        ▲
//!                     get/set actions    │        │  events (EventProjector)
//!                                        ▼        │
//!                                       ActionClient
//! ```
//!
//! - **Bind**: the first description creates the accessory through an injected
//!   [`AccessoryFactory`]; later descriptions refresh its information fields.
//! - **Start/Stop**: subscribe to RenderingControl events through the attached
//!   [`ActionClient`](renderer_api::ActionClient).
//! - **Alive**: [`StateSync`] queries mute and volume and pushes them.
//! - **Bye**: the accessory is switched off without querying the device.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use renderer_bridge::prelude::*;
//!
//! let registry = RendererRegistry::new(BindingContext::new(factory));
//!
//! let binding = registry.discovered(&usn, &description)?;
//! binding.attach_client(client).await;
//! binding.start().await?;
//!
//! registry.alive(&usn).await;   // reconcile mute/volume
//! registry.bye(&usn);           // accessory shows "off"
//! ```

pub mod accessory;
pub mod binding;
pub mod config;
pub mod control;
pub mod device;
pub mod error;
pub mod logging;
pub mod model;
pub mod projector;
pub mod registry;
pub mod reporter;
pub mod sync;
pub mod value;

// ============================================================================
// Re-exports
// ============================================================================

pub use accessory::{AccessoryFactory, AccessorySpec, SpeakerAccessory};
pub use binding::{BindingContext, BindingState, MediaRendererBinding, SubscriptionState};
pub use config::{BindingConfig, MEDIA_RENDERER_DEVICE_TYPE};
pub use control::RenderingController;
pub use device::{Bindable, EventHandling, Lifecycle};
pub use model::{AccessoryId, DeviceDescription, InformationField};
pub use projector::{project, RenderUpdate};
pub use registry::RendererRegistry;
pub use reporter::{ErrorSink, TracingErrorSink};
pub use sync::{StateSync, SyncOutcome};

pub use error::{BindingError, Result};

pub use logging::{init_logging, init_logging_from_env, LoggingError, LoggingMode};

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::accessory::{AccessoryFactory, AccessorySpec, SpeakerAccessory};
    pub use crate::binding::{BindingContext, MediaRendererBinding};
    pub use crate::device::{Bindable, EventHandling, Lifecycle};
    pub use crate::model::{DeviceDescription, InformationField};
    pub use crate::registry::RendererRegistry;
    pub use renderer_api::{ActionClient, RenderingControlEvent};
}
