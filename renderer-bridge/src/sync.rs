//! Reconciliation run when a renderer is (re)detected
//!
//! Mute and volume are queried independently and concurrently. Each result
//! that comes back is pushed to the accessory; each failure goes to the error
//! sink and leaves the accessory's previous value in place. Nothing is
//! retried here: the next alive notification or event does that naturally.

use crate::accessory::SpeakerAccessory;
use crate::control::RenderingController;
use crate::error::Result;
use crate::reporter::ErrorSink;

/// Results of one reconciliation pass
#[derive(Debug)]
pub struct SyncOutcome {
    pub mute: Result<bool>,
    pub volume: Result<u8>,
}

impl SyncOutcome {
    pub fn is_complete(&self) -> bool {
        self.mute.is_ok() && self.volume.is_ok()
    }
}

/// Pull authoritative state from the device and push it to the accessory
pub struct StateSync<'a> {
    usn: &'a str,
    control: &'a RenderingController,
    accessory: &'a dyn SpeakerAccessory,
    sink: &'a dyn ErrorSink,
}

impl<'a> StateSync<'a> {
    pub fn new(
        usn: &'a str,
        control: &'a RenderingController,
        accessory: &'a dyn SpeakerAccessory,
        sink: &'a dyn ErrorSink,
    ) -> Self {
        Self {
            usn,
            control,
            accessory,
            sink,
        }
    }

    pub async fn run(&self) -> SyncOutcome {
        let (mute, volume) = tokio::join!(self.sync_mute(), self.sync_volume());
        SyncOutcome { mute, volume }
    }

    async fn sync_mute(&self) -> Result<bool> {
        let result = self.control.get_mute().await;
        match &result {
            Ok(muted) => self.accessory.update_on(!muted),
            Err(e) => self.sink.report(self.usn, "GetMute", e),
        }
        result
    }

    async fn sync_volume(&self) -> Result<u8> {
        let result = self.control.get_volume().await;
        match &result {
            Ok(volume) => self.accessory.update_volume(*volume),
            Err(e) => self.sink.report(self.usn, "GetVolume", e),
        }
        result
    }
}
