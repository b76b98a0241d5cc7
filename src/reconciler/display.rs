use std::fmt::Display as FmtDisplay;

use serde::{Deserialize, Serialize};

/// Which of the two screens should be visible. Follows every status snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiMode {
    /// Nothing is playing; pick a file
    #[default]
    Browser,
    Remote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeedKind {
    Status,
    SystemVolume,
}

impl FmtDisplay for FeedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedKind::Status => write!(f, "Player status"),
            FeedKind::SystemVolume => write!(f, "System volume"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FeedHealth {
    #[default]
    Connecting,
    Live,
    Unavailable(String),
}

/// A slider as shown on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Level {
    pub percent: u8,
    /// The user owns this value right now; feed updates are being held back
    pub pinned: bool,
}

/// Everything the remote screen shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Display {
    pub mode: UiMode,
    pub status_feed: FeedHealth,
    pub system_feed: FeedHealth,
    pub title: String,
    pub seek: Level,
    pub length: Option<u32>,
    pub volume: Level,
    /// `None` until the backend tells us anything about the OS mixer
    pub system_volume: Option<Level>,
    pub playing: bool,
    pub fullscreen: bool,
}

impl Display {
    pub fn play_label(&self) -> &'static str {
        if self.playing {
            "pause"
        } else {
            "play"
        }
    }

    pub fn fullscreen_label(&self) -> &'static str {
        if self.fullscreen {
            "exit fullscreen"
        } else {
            "enter fullscreen"
        }
    }

    /// `mm:ss / mm:ss` for the seek bar, `--:--` for whatever is unknown.
    pub fn time_label(&self) -> String {
        match self.length {
            Some(len) => {
                let pos = (u64::from(len) * u64::from(self.seek.percent) + 50) / 100;
                format!("{} / {}", clock(pos), clock(u64::from(len)))
            }
            None => format!("--:-- / --:-- ({}%)", self.seek.percent),
        }
    }
}

fn clock(secs: u64) -> String {
    if secs >= 3600 {
        format!("{}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
    } else {
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }
}

/// Something the user should be told about once, separately from the steady display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    CommandFailed { command: String, reason: String },
    /// An input was refused locally, nothing was sent
    InputUnavailable(String),
    FeedUnavailable { feed: FeedKind, reason: String },
    NowPlaying(String),
}

impl FmtDisplay for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::CommandFailed { command, reason } => {
                write!(f, "Failed to {}: {}", command, reason)
            }
            Notice::InputUnavailable(why) => write!(f, "{}", why),
            Notice::FeedUnavailable { feed, reason } => {
                write!(f, "{} feed unavailable: {}", feed, reason)
            }
            Notice::NowPlaying(title) => write!(f, "Now playing {}", title),
        }
    }
}

/// Receives the reconciler's output. Implemented by the terminal screen, and by recorders in
/// tests.
pub trait RemoteView {
    /// Called with the complete display after every change.
    fn render(&mut self, display: &Display);
    fn notify(&mut self, notice: Notice);
}
