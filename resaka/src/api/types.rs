//! JSON bodies exchanged with `/api/chat`.

use serde::{Deserialize, Serialize};

use super::ClientError;

/// Request body for `POST /api/chat`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<&'a str>,
}

/// Outcome flag carried by every chat response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatStatus {
    Success,
    Error,
}

/// Response body of `POST /api/chat`, covering both outcomes.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub status: ChatStatus,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub conversation_id: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    /// Server-side send time; informational only.
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl ChatResponse {
    /// Turn a decoded body into a reply, or the error it describes.
    pub fn into_reply(self) -> Result<ChatReply, ClientError> {
        match self.status {
            ChatStatus::Error => Err(ClientError::Backend(
                self.error.unwrap_or_else(|| "unspecified".to_string()),
            )),
            ChatStatus::Success => {
                let response = self.response.ok_or(ClientError::MissingField("response"))?;
                Ok(ChatReply {
                    response,
                    conversation_id: self.conversation_id,
                })
            }
        }
    }
}

/// A bot turn as handed to the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    /// Text to show as the bot message.
    pub response: String,
    /// Session id to use on the next send, when the backend supplied one.
    pub conversation_id: Option<String>,
}
