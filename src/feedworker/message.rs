use serde::{Deserialize, Serialize};
use strum::Display;

use crate::{feed::snapshot::PlayerStatus, reconciler::display::FeedKind};

#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum ToFeedWorker {
    /// Drops both subscriptions, if any, and opens new ones
    Reconnect,
    Kill,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FromFeedWorker {
    Connecting(FeedKind),
    Opened(FeedKind),
    Status(PlayerStatus),
    SystemVolume(u8),
    /// The subscription is gone and will stay gone until the next [`ToFeedWorker::Reconnect`]
    Closed { feed: FeedKind, reason: String },
}
