use std::time::Duration;

use serde::Deserialize;

fn default_settle_ms() -> u64 {
    500
}
fn default_release_ms() -> u64 {
    800
}
fn default_tolerance() -> u8 {
    1
}
fn default_volume_step() -> u8 {
    5
}
fn default_seek_step() -> u8 {
    2
}
fn default_notice_ticks() -> u32 {
    12
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct BehaviourConfig {
    /// After a slider is released, feed values for it are ignored for this long unless they
    /// confirm the value that was sent
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,
    /// A slider that has not been nudged for this long is released on its own
    #[serde(default = "default_release_ms")]
    pub release_ms: u64,
    /// How far (in percent) a feed value may be from the sent value and still count as
    /// confirmation
    #[serde(default = "default_tolerance")]
    pub volume_tolerance: u8,
    #[serde(default = "default_tolerance")]
    pub seek_tolerance: u8,
    /// Percent moved by one volume nudge. Also used for the system volume.
    #[serde(default = "default_volume_step")]
    pub volume_step: u8,
    /// Percent moved by one seek nudge
    #[serde(default = "default_seek_step")]
    pub seek_step: u8,
    /// How many ticks a notification stays on screen
    #[serde(default = "default_notice_ticks")]
    pub notice_ticks: u32,
}

impl BehaviourConfig {
    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    pub fn release_after(&self) -> Duration {
        Duration::from_millis(self.release_ms)
    }
}

impl Default for BehaviourConfig {
    fn default() -> Self {
        Self {
            settle_ms: default_settle_ms(),
            release_ms: default_release_ms(),
            volume_tolerance: default_tolerance(),
            seek_tolerance: default_tolerance(),
            volume_step: default_volume_step(),
            seek_step: default_seek_step(),
            notice_ticks: default_notice_ticks(),
        }
    }
}
