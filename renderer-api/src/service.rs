use serde::{Deserialize, Serialize};
use std::fmt;

/// The UPnP services the bridge talks to on a `MediaRenderer:1` device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Service {
    /// RenderingControl service - Controls audio rendering (volume, mute, etc.)
    RenderingControl,
}

impl Service {
    /// Get the name of this service as a string
    ///
    /// This is the short name collaborators use to address the service, e.g.
    /// `"RenderingControl"`.
    pub fn name(&self) -> &'static str {
        match self {
            Service::RenderingControl => "RenderingControl",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
