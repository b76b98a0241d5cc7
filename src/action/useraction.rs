use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Everything a key binding can trigger.
///
/// Bound in the config file by name, e.g. `"<space>": "toggle_play"` or `"<l>": { "jump": 10 }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserAction {
    Quit,
    Suspend,
    /// Action for deleting all key sequences currently stored
    /// It's like escape in Vim, and Ctrl+G in Emacs
    EndKeySeq,
    /// Reopen both status feeds
    Reconnect,

    TogglePlay,
    ToggleFullscreen,
    /// Seek by this many seconds
    Jump(i32),
    /// Seek to this percentage of the media
    JumpTo(u8),

    // Slider gestures. Each nudge starts or continues a hold; Commit or a pause ends it.
    SeekForward,
    SeekBackward,
    VolumeUp,
    VolumeDown,
    SystemVolumeUp,
    SystemVolumeDown,
    /// End every held slider now and send the result
    Commit,
    /// Let go of every held slider without sending anything
    Cancel,

    // File browser
    Up,
    Down,
    Top,
    Bottom,
    Confirm,
    Refresh,
    /// Show or hide the file browser while something is playing
    ToggleBrowser,
}

impl Display for UserAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserAction::Quit => write!(f, "Quit"),
            UserAction::Suspend => write!(f, "Suspend"),
            UserAction::EndKeySeq => write!(f, "Cancel key sequence"),
            UserAction::Reconnect => write!(f, "Reconnect"),
            UserAction::TogglePlay => write!(f, "Play/pause"),
            UserAction::ToggleFullscreen => write!(f, "Fullscreen"),
            UserAction::Jump(s) if *s < 0 => write!(f, "Back {}s", -s),
            UserAction::Jump(s) => write!(f, "Forward {}s", s),
            UserAction::JumpTo(p) => write!(f, "Seek to {}%", p),
            UserAction::SeekForward => write!(f, "Seek forward"),
            UserAction::SeekBackward => write!(f, "Seek backward"),
            UserAction::VolumeUp => write!(f, "Volume up"),
            UserAction::VolumeDown => write!(f, "Volume down"),
            UserAction::SystemVolumeUp => write!(f, "System volume up"),
            UserAction::SystemVolumeDown => write!(f, "System volume down"),
            UserAction::Commit => write!(f, "Apply"),
            UserAction::Cancel => write!(f, "Discard"),
            UserAction::Up => write!(f, "Move up"),
            UserAction::Down => write!(f, "Move down"),
            UserAction::Top => write!(f, "Go to top"),
            UserAction::Bottom => write!(f, "Go to bottom"),
            UserAction::Confirm => write!(f, "Play selected file"),
            UserAction::Refresh => write!(f, "Refresh files"),
            UserAction::ToggleBrowser => write!(f, "Files"),
        }
    }
}
