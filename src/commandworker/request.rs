use serde::{Deserialize, Serialize};
use strum::Display;

use crate::{commandworker::CommandWorker, vlcclient::intent::ControlIntent};

#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum CommandRequest {
    Intent(ControlIntent),
    ListMedia,
    Kill,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToCommandWorker {
    pub ticket: usize,
    pub request: CommandRequest,
}

impl ToCommandWorker {
    pub fn new(request: CommandRequest) -> Self {
        Self {
            ticket: CommandWorker::get_ticket(),
            request,
        }
    }
}

impl From<ControlIntent> for ToCommandWorker {
    fn from(intent: ControlIntent) -> Self {
        Self::new(CommandRequest::Intent(intent))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandResponse {
    Intent {
        intent: ControlIntent,
        result: Result<(), String>,
    },
    Media(Result<Vec<String>, String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FromCommandWorker {
    pub ticket: usize,
    pub response: CommandResponse,
}
