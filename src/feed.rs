pub mod snapshot;
pub mod sse;

use std::{error::Error, fmt::Display, marker::PhantomData};

use bytes::{Bytes, BytesMut};
use futures::{stream::BoxStream, Stream, StreamExt};
use reqwest::{Client, Url};
use tokio_util::codec::Decoder;
use tracing::{debug, warn};

use crate::feed::{
    snapshot::{PlayerStatus, SystemVolume},
    sse::SseCodec,
};

const BUFFER_CAPACITY: usize = 16 * 1024;

/// A value that arrives as the `data:` part of a server-sent event.
pub trait FeedPayload: Sized {
    type Error: Display;
    fn parse(data: &str) -> Result<Self, Self::Error>;
}

#[derive(Debug)]
pub enum FeedError {
    /// Could not open the subscription
    Connect(reqwest::Error),
    /// Server answered the subscription with an error status
    Status(reqwest::StatusCode),
    /// Connection dropped while streaming
    Transport(reqwest::Error),
    Decode(std::io::Error),
    /// Server closed the stream
    Ended,
}

impl Error for FeedError {}
impl Display for FeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedError::Connect(e) => write!(f, "Failed to connect: {}", e),
            FeedError::Status(code) => write!(f, "Server refused the subscription: {}", code),
            FeedError::Transport(e) => write!(f, "Connection lost: {}", e),
            FeedError::Decode(e) => write!(f, "Failed to decode the event stream: {}", e),
            FeedError::Ended => write!(f, "Server closed the stream"),
        }
    }
}

/// One element of a subscription. [`FeedEvent::Closed`] is always the last one.
#[derive(Debug)]
pub enum FeedEvent<T> {
    Item(T),
    Closed(FeedError),
}

/// A live subscription to one SSE endpoint.
///
/// Payloads that fail to parse are logged and skipped; they never end the subscription. Any
/// transport problem yields a single [`FeedEvent::Closed`], after which [`Subscription::next`]
/// returns `None` for good. Subscribe again to restart.
pub struct Subscription<T: FeedPayload> {
    stream: BoxStream<'static, reqwest::Result<Bytes>>,
    codec: SseCodec,
    buffer: BytesMut,
    closed: bool,
    _payload: PhantomData<T>,
}

impl<T: FeedPayload> Subscription<T> {
    pub fn from_stream(stream: BoxStream<'static, reqwest::Result<Bytes>>) -> Self {
        Self {
            stream,
            codec: SseCodec::new(),
            buffer: BytesMut::with_capacity(BUFFER_CAPACITY),
            closed: false,
            _payload: PhantomData,
        }
    }

    fn close(&mut self, reason: FeedError) -> Option<FeedEvent<T>> {
        self.closed = true;
        self.buffer.clear();
        Some(FeedEvent::Closed(reason))
    }

    pub async fn next(&mut self) -> Option<FeedEvent<T>> {
        if self.closed {
            return None;
        }
        loop {
            match self.codec.decode(&mut self.buffer) {
                Ok(Some(event)) => match T::parse(&event.data) {
                    Ok(item) => return Some(FeedEvent::Item(item)),
                    Err(e) => {
                        warn!("Discarding malformed event: {} ({:?})", e, event.data);
                        continue;
                    }
                },
                Ok(None) => {}
                Err(e) => return self.close(FeedError::Decode(e)),
            }
            match self.stream.next().await {
                Some(Ok(chunk)) => self.buffer.extend_from_slice(&chunk),
                Some(Err(e)) => return self.close(FeedError::Transport(e)),
                None => return self.close(FeedError::Ended),
            }
        }
    }

    /// Turns the subscription into a lazy stream that ends right after its `Closed` event.
    pub fn into_stream(self) -> impl Stream<Item = FeedEvent<T>> {
        futures::stream::unfold(self, |mut sub| async move {
            let event = sub.next().await?;
            Some((event, sub))
        })
    }
}

/// An SSE endpoint producing values of type `T`. Each [`Feed::subscribe`] call opens a fresh,
/// independent connection.
pub struct Feed<T: FeedPayload> {
    client: Client,
    url: Url,
    _payload: PhantomData<fn() -> T>,
}

impl<T: FeedPayload> Clone for Feed<T> {
    fn clone(&self) -> Self {
        Self::new(self.client.clone(), self.url.clone())
    }
}

pub type StatusFeed = Feed<PlayerStatus>;
pub type SystemVolumeFeed = Feed<SystemVolume>;

impl<T: FeedPayload> Feed<T> {
    pub fn new(client: Client, url: Url) -> Self {
        Self {
            client,
            url,
            _payload: PhantomData,
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub async fn subscribe(&self) -> Result<Subscription<T>, FeedError> {
        debug!("Subscribing to {}", self.url);
        let res = self
            .client
            .get(self.url.clone())
            .header(reqwest::header::ACCEPT, "text/event-stream")
            .send()
            .await
            .map_err(FeedError::Connect)?;
        let status = res.status();
        if !status.is_success() {
            return Err(FeedError::Status(status));
        }
        Ok(Subscription::from_stream(res.bytes_stream().boxed()))
    }
}
