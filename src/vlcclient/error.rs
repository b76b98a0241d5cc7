use std::{error::Error, fmt::Display};

use reqwest::StatusCode;

#[derive(Debug)]
enum ErrType {
    Url(String),
    Request(reqwest::Error),
    Status(StatusCode, String),
    Rejected(String),
    Decode(String),
}

impl Display for ErrType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrType::Url(url) => write!(f, "Invalid service URL: {}", url),
            ErrType::Request(e) => write!(f, "Request failed: {}", e),
            ErrType::Status(code, body) if body.is_empty() => write!(f, "Server error: {}", code),
            ErrType::Status(code, body) => write!(f, "Server error {}: {}", code, body),
            ErrType::Rejected(msg) => write!(f, "Command rejected: {}", msg),
            ErrType::Decode(msg) => write!(f, "Unexpected response: {}", msg),
        }
    }
}

/// Error from a request to the backend. Commands are never assumed to have taken effect when
/// this is returned.
#[derive(Debug)]
pub struct CommandError {
    reason: ErrType,
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.reason {
            ErrType::Request(e) => Some(e),
            _ => None,
        }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.reason.fmt(f)
    }
}

impl CommandError {
    pub fn url(url: String) -> Self {
        Self {
            reason: ErrType::Url(url),
        }
    }

    pub fn request(e: reqwest::Error) -> Self {
        Self {
            reason: ErrType::Request(e),
        }
    }

    pub fn status(code: StatusCode, body: String) -> Self {
        Self {
            reason: ErrType::Status(code, body),
        }
    }

    pub fn rejected(msg: String) -> Self {
        Self {
            reason: ErrType::Rejected(msg),
        }
    }

    pub fn decode(msg: String) -> Self {
        Self {
            reason: ErrType::Decode(msg),
        }
    }
}
