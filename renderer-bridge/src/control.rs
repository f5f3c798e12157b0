//! Mute and volume actions against a renderer's RenderingControl service
//!
//! Every call checks for a live [`ActionClient`] first. Without one the call
//! fails with [`BindingError::ClientNotInitialized`] and nothing is sent.

use parking_lot::RwLock;
use renderer_api::{ActionArgs, ActionClient, ActionResponse};
use std::sync::Arc;

use crate::config::BindingConfig;
use crate::error::{BindingError, Result};
use crate::value::{encode_mute, parse_mute, parse_volume};

/// Issues RenderingControl actions through the currently attached client
pub struct RenderingController {
    config: BindingConfig,
    client: RwLock<Option<Arc<dyn ActionClient>>>,
}

impl RenderingController {
    pub fn new(config: BindingConfig) -> Self {
        Self {
            config,
            client: RwLock::new(None),
        }
    }

    pub fn config(&self) -> &BindingConfig {
        &self.config
    }

    /// Replace the client, returning the previous one
    pub fn attach(&self, client: Arc<dyn ActionClient>) -> Option<Arc<dyn ActionClient>> {
        self.client.write().replace(client)
    }

    /// Clear the client, returning it if one was attached
    pub fn detach(&self) -> Option<Arc<dyn ActionClient>> {
        self.client.write().take()
    }

    /// Snapshot of the attached client
    ///
    /// Callers keep using the snapshot for the whole call, so a concurrent
    /// detach never affects a call already in flight.
    pub fn client(&self) -> Option<Arc<dyn ActionClient>> {
        self.client.read().clone()
    }

    pub fn is_attached(&self) -> bool {
        self.client.read().is_some()
    }

    fn require_client(&self) -> Result<Arc<dyn ActionClient>> {
        self.client().ok_or(BindingError::ClientNotInitialized)
    }

    fn base_args(&self) -> ActionArgs {
        ActionArgs::new()
            .with("InstanceID", self.config.instance_id)
            .with("Channel", &self.config.channel)
    }

    async fn call(&self, action: &'static str, args: ActionArgs) -> Result<ActionResponse> {
        let client = self.require_client()?;
        tracing::trace!(service = %self.config.service, action, args = %args, "invoking action");
        Ok(client.call_action(self.config.service, action, args).await?)
    }

    /// Query the mute state (`true` = muted)
    pub async fn get_mute(&self) -> Result<bool> {
        let response = self.call("GetMute", self.base_args()).await?;
        let raw = response
            .get("CurrentMute")
            .ok_or(BindingError::MissingField("CurrentMute"))?;
        parse_mute("CurrentMute", raw)
    }

    /// Query the volume level (0-100)
    pub async fn get_volume(&self) -> Result<u8> {
        let response = self.call("GetVolume", self.base_args()).await?;
        let raw = response
            .get("CurrentVolume")
            .ok_or(BindingError::MissingField("CurrentVolume"))?;
        parse_volume("CurrentVolume", raw)
    }

    pub async fn set_mute(&self, muted: bool) -> Result<()> {
        let args = self.base_args().with("DesiredMute", encode_mute(muted));
        self.call("SetMute", args).await.map(|_| ())
    }

    pub async fn set_volume(&self, volume: u8) -> Result<()> {
        let args = self.base_args().with("DesiredVolume", volume);
        self.call("SetVolume", args).await.map(|_| ())
    }
}
