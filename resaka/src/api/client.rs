//! HTTP client for the chat backend with a local fallback responder.

use std::future::Future;
use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, warn};

use super::fallback::simulate;
use super::{ChatBackend, ChatReply, ChatRequest, ChatResponse, ClientError, CHAT_PATH, HEALTH_PATH};
use crate::config::ClientConfig;

/// Talks to `/api/chat` and `/api/health` on one configured backend.
///
/// Sending never fails: whatever goes wrong on the wire is logged and
/// answered by [`super::FALLBACK_RESPONSES`] instead, so callers cannot tell
/// a simulated reply from a real one.
pub struct ConversationClient {
    config: ClientConfig,
    http: reqwest::Client,
    rng: Mutex<StdRng>,
}

impl ConversationClient {
    /// Create a client with an OS-seeded fallback generator.
    pub fn new(config: ClientConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Create a client whose fallback choices come from `rng`.
    pub fn with_rng(config: ClientConfig, rng: StdRng) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
            rng: Mutex::new(rng),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send a message, replaying `conversation_id` when known.
    pub async fn send_message(&self, text: &str, conversation_id: Option<&str>) -> ChatReply {
        match self.request_reply(text, conversation_id).await {
            Ok(reply) => reply,
            Err(err) => {
                warn!(
                    kind = err.kind(),
                    error = %err,
                    base_url = %self.config.base_url,
                    "chat backend unavailable, answering locally"
                );
                self.simulate(conversation_id)
            }
        }
    }

    /// Whether `/api/health` answers with a 2xx status.
    pub async fn health_check(&self) -> bool {
        self.health_probe().await
    }

    /// Detached form of [`Self::health_check`] that borrows nothing from the
    /// client, so it can run on its own task while sends continue.
    pub fn health_probe(&self) -> impl Future<Output = bool> + Send + 'static {
        let http = self.http.clone();
        let url = self.config.endpoint(HEALTH_PATH);
        async move {
            match http.get(&url).send().await {
                Ok(resp) => {
                    debug!(status = %resp.status(), "health probe answered");
                    resp.status().is_success()
                }
                Err(err) => {
                    debug!(error = %err, "health probe failed");
                    false
                }
            }
        }
    }

    async fn request_reply(
        &self,
        text: &str,
        conversation_id: Option<&str>,
    ) -> Result<ChatReply, ClientError> {
        let url = self.config.endpoint(CHAT_PATH);
        let body = ChatRequest {
            message: text,
            conversation_id,
        };

        let resp = self.http.post(&url).json(&body).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }

        let payload: ChatResponse = resp.json().await.map_err(ClientError::Malformed)?;
        payload.into_reply()
    }

    fn simulate(&self, conversation_id: Option<&str>) -> ChatReply {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        simulate(&mut *rng, conversation_id)
    }
}

impl ChatBackend for ConversationClient {
    async fn send(
        &self,
        text: &str,
        conversation_id: Option<&str>,
    ) -> Result<ChatReply, ClientError> {
        Ok(self.send_message(text, conversation_id).await)
    }

    async fn is_healthy(&self) -> bool {
        self.health_check().await
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use regex::Regex;

    use super::*;
    use crate::api::FALLBACK_RESPONSES;
    use crate::test_support::{fixed_backend, recording_backend, unreachable_backend};

    fn client_for(base_url: &str) -> ConversationClient {
        ConversationClient::with_rng(ClientConfig::new(base_url), StdRng::seed_from_u64(11))
    }

    fn assert_simulated(reply: &ChatReply) {
        assert!(
            FALLBACK_RESPONSES.contains(&reply.response.as_str()),
            "not a canned phrase: {}",
            reply.response
        );
        let id = reply.conversation_id.as_deref().unwrap();
        assert!(Regex::new(r"^sim_\d+$").unwrap().is_match(id), "bad id {id}");
    }

    #[tokio::test]
    async fn test_send_returns_backend_reply() {
        let (base_url, received) = recording_backend("Miarahaba", |_| "c1".to_string()).await;
        let client = client_for(&base_url);

        let reply = client.send_message("Salama", None).await;

        assert_eq!(reply.response, "Miarahaba");
        assert_eq!(reply.conversation_id.as_deref(), Some("c1"));
        let bodies = received.lock().unwrap();
        assert_eq!(bodies.len(), 1);
        assert_eq!(bodies[0], serde_json::json!({ "message": "Salama" }));
    }

    #[tokio::test]
    async fn test_send_replays_conversation_id() {
        let (base_url, received) = recording_backend("Eny", |body| {
            body["conversation_id"].as_str().unwrap_or("fresh").to_string()
        })
        .await;
        let client = client_for(&base_url);

        let reply = client.send_message("Manao ahoana", Some("c9")).await;

        assert_eq!(reply.conversation_id.as_deref(), Some("c9"));
        assert_eq!(received.lock().unwrap()[0]["conversation_id"], "c9");
    }

    #[tokio::test]
    async fn test_send_falls_back_on_connection_refused() {
        let client = client_for(&unreachable_backend().await);
        let reply = client.send_message("Manao ahoana", None).await;
        assert_simulated(&reply);
    }

    #[tokio::test]
    async fn test_send_falls_back_on_http_500() {
        let base_url = fixed_backend(StatusCode::INTERNAL_SERVER_ERROR, "boom").await;
        let reply = client_for(&base_url).send_message("Salama", None).await;
        assert_simulated(&reply);
    }

    #[tokio::test]
    async fn test_send_falls_back_on_malformed_json() {
        let base_url = fixed_backend(StatusCode::OK, "<html>not json</html>").await;
        let reply = client_for(&base_url).send_message("Salama", None).await;
        assert_simulated(&reply);
    }

    #[tokio::test]
    async fn test_send_falls_back_on_backend_error_status() {
        let base_url = fixed_backend(
            StatusCode::OK,
            r#"{"status":"error","error":"Message requis"}"#,
        )
        .await;
        let reply = client_for(&base_url).send_message("", None).await;
        assert_simulated(&reply);
    }

    #[tokio::test]
    async fn test_fallback_keeps_existing_conversation_id() {
        let client = client_for(&unreachable_backend().await);
        let reply = client.send_message("Salama", Some("c1")).await;
        assert_eq!(reply.conversation_id.as_deref(), Some("c1"));
    }

    #[tokio::test]
    async fn test_backend_trait_never_errors() {
        let client = client_for(&unreachable_backend().await);
        assert!(client.send("Salama", None).await.is_ok());
    }

    #[tokio::test]
    async fn test_health_check() {
        let (up, _) = recording_backend("ok", |_| String::new()).await;
        assert!(client_for(&up).health_check().await);

        let failing = fixed_backend(StatusCode::SERVICE_UNAVAILABLE, "").await;
        assert!(!client_for(&failing).health_check().await);

        let down = unreachable_backend().await;
        assert!(!client_for(&down).is_healthy().await);
    }

    #[tokio::test]
    async fn test_health_probe_outlives_client() {
        let (up, _) = recording_backend("ok", |_| String::new()).await;
        let probe = client_for(&up).health_probe();
        assert!(tokio::spawn(probe).await.unwrap());
    }
}
