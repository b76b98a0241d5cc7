use std::io;

use bytes::{Buf, BytesMut};
use tokio_util::codec::Decoder;

/// Longest line, and longest event, the codec buffers before giving up on the stream.
pub const MAX_LINE_LENGTH: usize = 1024 * 1024;

/// One dispatched `text/event-stream` event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SseEvent {
    pub event: Option<String>,
    pub data: String,
    pub id: Option<String>,
    pub retry: Option<u64>,
}

/// Splits a `text/event-stream` body into events.
///
/// Fields are accumulated across lines until a blank line dispatches them. Events without any
/// `data:` line are dropped, as are comment lines starting with `:`.
#[derive(Debug)]
pub struct SseCodec {
    pending: SseEvent,
    has_data: bool,
    max_length: usize,
}

impl Default for SseCodec {
    fn default() -> Self {
        Self::with_max_length(MAX_LINE_LENGTH)
    }
}

impl SseCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_length(max_length: usize) -> Self {
        Self {
            pending: SseEvent::default(),
            has_data: false,
            max_length,
        }
    }

    /// Takes one line off the front of `src`, if a complete one is buffered.
    /// A trailing `\r` is held back until we know whether a `\n` follows it.
    fn next_line(src: &mut BytesMut) -> Option<String> {
        let pos = src.iter().position(|b| *b == b'\n' || *b == b'\r')?;
        let skip = if src[pos] == b'\r' {
            match src.get(pos + 1) {
                Some(b'\n') => 2,
                Some(_) => 1,
                None => return None,
            }
        } else {
            1
        };
        let line = String::from_utf8_lossy(&src[..pos]).into_owned();
        src.advance(pos + skip);
        Some(line)
    }

    fn dispatch(&mut self) -> Option<SseEvent> {
        let has_data = std::mem::take(&mut self.has_data);
        let mut event = std::mem::take(&mut self.pending);
        if !has_data {
            return None;
        }
        // Keep the last event id around, it survives across events
        self.pending.id = event.id.clone();
        if event.data.ends_with('\n') {
            event.data.pop();
        }
        Some(event)
    }

    fn field(&mut self, line: &str) {
        let (name, value) = match line.split_once(':') {
            Some((name, value)) => (name, value.strip_prefix(' ').unwrap_or(value)),
            None => (line, ""),
        };
        match name {
            "data" => {
                self.pending.data.push_str(value);
                self.pending.data.push('\n');
                self.has_data = true;
            }
            "event" => self.pending.event = Some(value.to_string()),
            "id" => self.pending.id = Some(value.to_string()),
            "retry" => {
                if let Ok(ms) = value.parse() {
                    self.pending.retry = Some(ms);
                }
            }
            _ => {}
        }
    }
}

impl Decoder for SseCodec {
    type Item = SseEvent;
    type Error = io::Error;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        while let Some(line) = Self::next_line(src) {
            if line.is_empty() {
                if let Some(event) = self.dispatch() {
                    return Ok(Some(event));
                }
            } else if !line.starts_with(':') {
                self.field(&line);
            }
        }
        if src.len() > self.max_length {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line longer than {} bytes", self.max_length),
            ));
        }
        if self.pending.data.len() > self.max_length {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("event longer than {} bytes", self.max_length),
            ));
        }
        Ok(None)
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if let Some(event) = self.decode(src)? {
            return Ok(Some(event));
        }
        // A half-received event is never dispatched
        src.clear();
        self.pending = SseEvent::default();
        self.has_data = false;
        Ok(None)
    }
}
