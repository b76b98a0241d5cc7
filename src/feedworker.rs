pub mod message;

use color_eyre::Result;
use futures::StreamExt;
use message::{FromFeedWorker, ToFeedWorker};
use tokio::{
    pin, select,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use crate::{
    action::Action,
    feed::{
        snapshot::SystemVolume, Feed, FeedEvent, FeedPayload, StatusFeed, SystemVolumeFeed,
    },
    reconciler::display::FeedKind,
    trace_dbg,
    vlcclient::VlcClient,
};

/// Keeps the two status subscriptions open and forwards everything they produce as actions.
///
/// Nothing is retried here. A closed subscription is reported once and stays closed until
/// [`ToFeedWorker::Reconnect`] arrives.
pub struct FeedWorker {
    status: StatusFeed,
    system_volume: SystemVolumeFeed,
    req_tx: UnboundedSender<ToFeedWorker>,
    req_rx: UnboundedReceiver<ToFeedWorker>,
    action_tx: UnboundedSender<Action>,
    running: Option<CancellationToken>,
    should_quit: bool,
}

impl FeedWorker {
    pub fn new(client: &VlcClient, action_tx: UnboundedSender<Action>) -> Self {
        let (req_tx, req_rx) = mpsc::unbounded_channel();
        Self {
            status: client.status_feed(),
            system_volume: client.system_volume_feed(),
            req_tx,
            req_rx,
            action_tx,
            running: None,
            should_quit: false,
        }
    }

    pub fn get_tx(&self) -> UnboundedSender<ToFeedWorker> {
        self.req_tx.clone()
    }

    fn stop(&mut self) {
        if let Some(token) = self.running.take() {
            token.cancel();
        }
    }

    /// Spawns one pumping task per feed. Both share a token so that a reconnect drops them
    /// together.
    fn start(&mut self) {
        self.stop();
        let token = CancellationToken::new();
        tokio::spawn(Self::pump(
            self.status.clone(),
            FeedKind::Status,
            FromFeedWorker::Status,
            self.action_tx.clone(),
            token.clone(),
        ));
        tokio::spawn(Self::pump(
            self.system_volume.clone(),
            FeedKind::SystemVolume,
            |v: SystemVolume| FromFeedWorker::SystemVolume(v.0),
            self.action_tx.clone(),
            token.clone(),
        ));
        self.running = Some(token);
    }

    async fn pump<T: FeedPayload + Send + 'static>(
        feed: Feed<T>,
        kind: FeedKind,
        wrap: fn(T) -> FromFeedWorker,
        tx: UnboundedSender<Action>,
        token: CancellationToken,
    ) {
        let send = |msg: FromFeedWorker| {
            let _ = tx.send(Action::FromFeedWorker(msg));
        };
        send(FromFeedWorker::Connecting(kind));
        let sub = select! {
            _ = token.cancelled() => return,
            res = feed.subscribe() => match res {
                Ok(sub) => sub,
                Err(e) => {
                    error!("{} feed at {} failed: {}", kind, feed.url(), e);
                    send(FromFeedWorker::Closed { feed: kind, reason: e.to_string() });
                    return;
                }
            }
        };
        info!("{} feed connected", kind);
        send(FromFeedWorker::Opened(kind));

        let events = sub.into_stream();
        pin!(events);
        loop {
            select! {
                _ = token.cancelled() => break,
                event = events.next() => match event {
                    Some(FeedEvent::Item(item)) => send(wrap(item)),
                    Some(FeedEvent::Closed(e)) => {
                        error!("{} feed closed: {}", kind, e);
                        send(FromFeedWorker::Closed { feed: kind, reason: e.to_string() });
                        break;
                    }
                    None => break,
                }
            }
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        trace_dbg!("Starting FeedWorker...");
        self.start();
        loop {
            let Some(req) = self.req_rx.recv().await else {
                break;
            };
            match req {
                ToFeedWorker::Reconnect => {
                    info!("Reconnecting feeds");
                    self.start();
                }
                ToFeedWorker::Kill => {
                    self.stop();
                    self.should_quit = true;
                }
            }
            if self.should_quit {
                break;
            }
        }
        Ok(())
    }
}
