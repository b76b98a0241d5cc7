use serde::Deserialize;

use crate::vlcclient::error::CommandError;

/// Acknowledgement of a command. It only says that the backend forwarded the request; the
/// resulting player state arrives through the status feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ack;

/// Reply shape shared by every command endpoint:
/// `{"status": "success"}`, `{"status": "error", "message": ...}` or `{"error": ...}`.
#[derive(Debug, Deserialize)]
pub struct CommandReply {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl CommandReply {
    pub fn into_ack(self) -> Result<Ack, CommandError> {
        match self.status.as_deref() {
            Some("success") => Ok(Ack),
            other => {
                let msg = self
                    .error
                    .or(self.message)
                    .or(other.map(|s| format!("status `{}`", s)))
                    .unwrap_or_else(|| "no status in reply".to_string());
                Err(CommandError::rejected(msg))
            }
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MediaList {
    #[serde(default)]
    pub files: Vec<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CurrentSystemVolume {
    pub system_volume: Option<u8>,
}
