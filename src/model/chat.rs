use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    /// CSS class suffix used by the log view (`user-message` / `ai-message`).
    pub fn css_prefix(self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Assistant => "ai",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatEntry {
    pub text: String,
    pub sender: Sender,
}

/// Append-only conversation history.
#[derive(Clone, Debug, Default)]
pub struct ChatLog {
    entries: Vec<ChatEntry>,
}

impl ChatLog {
    pub fn append(&mut self, text: impl Into<String>, sender: Sender) -> &ChatEntry {
        self.entries.push(ChatEntry {
            text: text.into(),
            sender,
        });
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Body of `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server error: {0}")]
    Status(u16),

    #[error("could not encode request: {0}")]
    Encode(String),

    #[error("bad response body: {0}")]
    Decode(String),
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn to_json(&self) -> Result<String, TransportError> {
        serde_json::to_string(self).map_err(|e| TransportError::Encode(e.to_string()))
    }
}

impl ChatResponse {
    /// Parse a reply body; a non-2xx status is rejected before the body is read.
    pub fn from_reply(status: u16, body: &str) -> Result<Self, TransportError> {
        if !(200..300).contains(&status) {
            return Err(TransportError::Status(status));
        }
        serde_json::from_str(body).map_err(|e| TransportError::Decode(e.to_string()))
    }
}
