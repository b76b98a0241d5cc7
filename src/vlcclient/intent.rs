use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Where a seek should land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeekTarget {
    /// Seconds from the start of the media
    Absolute(u32),
    /// Percentage of the media length
    Percent(u8),
    /// Seconds relative to the current position
    Relative(i32),
}

impl SeekTarget {
    /// VLC's `seek` value syntax: `96`, `50%`, `-10S`, `+60S`.
    pub fn to_val(&self) -> String {
        match self {
            SeekTarget::Absolute(secs) => secs.to_string(),
            SeekTarget::Percent(p) => format!("{}%", (*p).min(100)),
            SeekTarget::Relative(secs) => format!("{:+}S", secs),
        }
    }
}

/// A single user-triggered command. Each one is sent exactly once and never retried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlIntent {
    Seek(SeekTarget),
    /// Player volume, already scaled to `0..=max_volume`
    SetVolume(u32),
    TogglePlay,
    ToggleFullscreen,
    /// OS output volume in percent
    SetSystemVolume(u8),
    /// Open a file from the backend's media directory
    PlayMedia(String),
}

impl ControlIntent {
    /// The `cmd` and `val` query parameters of the player command endpoint, or `None` if the
    /// intent goes to a different endpoint.
    pub fn player_command(&self) -> Option<(&'static str, String)> {
        match self {
            ControlIntent::Seek(target) => Some(("seek", target.to_val())),
            ControlIntent::SetVolume(raw) => Some(("volume", raw.to_string())),
            ControlIntent::TogglePlay => Some(("pl_pause", String::new())),
            ControlIntent::ToggleFullscreen => Some(("fullscreen", String::new())),
            ControlIntent::SetSystemVolume(_) | ControlIntent::PlayMedia(_) => None,
        }
    }
}

impl Display for ControlIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ControlIntent::Seek(SeekTarget::Absolute(s)) => write!(f, "seek to {}s", s),
            ControlIntent::Seek(SeekTarget::Percent(p)) => write!(f, "seek to {}%", p),
            ControlIntent::Seek(SeekTarget::Relative(s)) => write!(f, "seek {:+}s", s),
            ControlIntent::SetVolume(v) => write!(f, "set volume to {}", v),
            ControlIntent::TogglePlay => write!(f, "play/pause"),
            ControlIntent::ToggleFullscreen => write!(f, "toggle fullscreen"),
            ControlIntent::SetSystemVolume(p) => write!(f, "set system volume to {}%", p),
            ControlIntent::PlayMedia(file) => write!(f, "play {}", file),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn wire(intent: ControlIntent) -> Option<(&'static str, String)> {
        intent.player_command()
    }

    #[test]
    fn test_seek_values() {
        assert_eq!(
            wire(ControlIntent::Seek(SeekTarget::Absolute(96))),
            Some(("seek", "96".to_string()))
        );
        assert_eq!(
            wire(ControlIntent::Seek(SeekTarget::Percent(50))),
            Some(("seek", "50%".to_string()))
        );
        assert_eq!(
            wire(ControlIntent::Seek(SeekTarget::Relative(-10))),
            Some(("seek", "-10S".to_string()))
        );
        assert_eq!(
            wire(ControlIntent::Seek(SeekTarget::Relative(60))),
            Some(("seek", "+60S".to_string()))
        );
    }

    #[test]
    fn test_other_commands() {
        assert_eq!(
            wire(ControlIntent::SetVolume(256)),
            Some(("volume", "256".to_string()))
        );
        assert_eq!(
            wire(ControlIntent::TogglePlay),
            Some(("pl_pause", String::new()))
        );
        assert_eq!(
            wire(ControlIntent::ToggleFullscreen),
            Some(("fullscreen", String::new()))
        );
        assert_eq!(wire(ControlIntent::SetSystemVolume(30)), None);
        assert_eq!(wire(ControlIntent::PlayMedia("a.mkv".to_string())), None);
    }
}
