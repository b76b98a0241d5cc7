pub mod request;

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use color_eyre::Result;
use request::{CommandRequest, CommandResponse, FromCommandWorker, ToCommandWorker};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::warn;

use crate::{
    action::Action,
    trace_dbg,
    vlcclient::{CommandChannel, VlcClient},
};

/// Sends commands to the backend. Every request runs in its own task, so replies come back in
/// whatever order the backend answers them.
pub struct CommandWorker {
    client: Arc<VlcClient>,
    req_tx: UnboundedSender<ToCommandWorker>,
    req_rx: UnboundedReceiver<ToCommandWorker>,
    action_tx: UnboundedSender<Action>,
    should_quit: bool,
}

static COUNTER: AtomicUsize = AtomicUsize::new(1);

impl CommandWorker {
    /// Returns a unique ticket number
    /// Replies carry the ticket of the request they answer
    pub fn get_ticket() -> usize {
        COUNTER.fetch_add(1, Ordering::Relaxed)
    }

    pub fn new(client: Arc<VlcClient>, action_tx: UnboundedSender<Action>) -> Self {
        let (req_tx, req_rx) = mpsc::unbounded_channel();
        Self {
            client,
            req_tx,
            req_rx,
            action_tx,
            should_quit: false,
        }
    }

    pub fn get_tx(&self) -> UnboundedSender<ToCommandWorker> {
        self.req_tx.clone()
    }

    async fn answer(client: &VlcClient, request: CommandRequest) -> Option<CommandResponse> {
        match request {
            CommandRequest::Intent(intent) => {
                let result = match client.send(&intent).await {
                    Ok(_) => Ok(()),
                    Err(e) => {
                        warn!("`{}` failed: {}", intent, e);
                        Err(e.to_string())
                    }
                };
                Some(CommandResponse::Intent { intent, result })
            }
            CommandRequest::ListMedia => Some(CommandResponse::Media(
                client.list_media().await.map_err(|e| e.to_string()),
            )),
            CommandRequest::Kill => None,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        trace_dbg!("Starting CommandWorker...");
        loop {
            let Some(req) = self.req_rx.recv().await else {
                break;
            };
            if req.request == CommandRequest::Kill {
                self.should_quit = true;
            } else {
                let client = self.client.clone();
                let tx = self.action_tx.clone();
                tokio::spawn(async move {
                    if let Some(response) = Self::answer(&client, req.request).await {
                        let _ = tx.send(Action::FromCommandWorker(FromCommandWorker {
                            ticket: req.ticket,
                            response,
                        }));
                    }
                });
            }
            if self.should_quit {
                break;
            }
        }
        Ok(())
    }
}
