pub mod useraction;

use serde::{Deserialize, Serialize};
use strum::Display;
use useraction::UserAction;

use crate::{
    commandworker::request::{FromCommandWorker, ToCommandWorker},
    feedworker::message::{FromFeedWorker, ToFeedWorker},
};

/// Key bindings are looked up in the current mode first. `Common` bindings apply everywhere.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Common,
    #[default]
    Browser,
    Remote,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    Quit,
    ClearScreen,
    Error(String),
    Multiple(Vec<Action>),
    ChangeMode(Mode),
    User(UserAction),

    ToFeedWorker(ToFeedWorker),
    ToCommandWorker(ToCommandWorker),
    FromFeedWorker(FromFeedWorker),
    FromCommandWorker(FromCommandWorker),
}

impl From<UserAction> for Action {
    fn from(value: UserAction) -> Self {
        Action::User(value)
    }
}
