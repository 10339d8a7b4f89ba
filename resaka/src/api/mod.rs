//! Client side of the chat backend's REST API.

mod client;
mod error;
mod fallback;
mod types;

use std::future::Future;

pub use client::ConversationClient;
pub use error::ClientError;
pub use fallback::{pick_fallback, FALLBACK_RESPONSES};
pub use types::{ChatReply, ChatRequest, ChatResponse, ChatStatus};

/// Path of the message endpoint.
pub const CHAT_PATH: &str = "/api/chat";
/// Path of the health endpoint.
pub const HEALTH_PATH: &str = "/api/health";

/// Something that can answer chat turns and report reachability.
///
/// [`ConversationClient`] never returns `Err` from [`ChatBackend::send`];
/// the error arm exists so the view can recover from backends that do.
pub trait ChatBackend {
    /// Send one user utterance, replaying the conversation id if known.
    fn send(
        &self,
        text: &str,
        conversation_id: Option<&str>,
    ) -> impl Future<Output = Result<ChatReply, ClientError>> + Send;

    /// Whether the backend currently answers its health probe.
    fn is_healthy(&self) -> impl Future<Output = bool> + Send;
}
