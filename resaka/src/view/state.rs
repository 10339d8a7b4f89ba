//! State and transitions of the conversation view.

use tracing::{debug, error, info};

use crate::api::{ChatBackend, ChatReply, ClientError};
use crate::models::{Message, Sender, Session};

/// First bot message of every view.
pub const GREETING: &str =
    "Salama! Izaho dia chatbot AI miteny malagasy. Inona no azoko atao ho anao?";

/// Bot message appended when the backend call itself fails.
pub const APOLOGY: &str = "Miala tsiny, misy olana kely. Andramo indray azafady.";

/// Where the view is in the send cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for input.
    Idle,
    /// A send is in flight; input is disabled.
    Sending,
}

/// Input coming from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The input box now holds this text.
    Changed(String),
    /// Enter was pressed or the send control clicked.
    Submit,
}

/// A send that has been recorded in the log but not yet answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSend {
    pub text: String,
    pub conversation_id: Option<String>,
}

/// Message log, session and indicators for one conversation.
pub struct ConversationView<B> {
    backend: B,
    messages: Vec<Message>,
    session: Session,
    online: Option<bool>,
    input: String,
    phase: Phase,
    next_id: i64,
}

impl<B: ChatBackend> ConversationView<B> {
    /// Create a view holding only the greeting.
    pub fn new(backend: B) -> Self {
        let mut view = Self {
            backend,
            messages: Vec::new(),
            session: Session::new(),
            online: None,
            input: String::new(),
            phase: Phase::Idle,
            next_id: 1,
        };
        view.push(Sender::Bot, GREETING);
        view
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn conversation_id(&self) -> Option<&str> {
        self.session.conversation_id()
    }

    /// `None` until the startup probe has answered.
    pub const fn is_online(&self) -> Option<bool> {
        self.online
    }

    pub const fn is_typing(&self) -> bool {
        matches!(self.phase, Phase::Sending)
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Record a probe result for the badge. Independent of the send cycle,
    /// so a probe that resolves mid-conversation can be applied at any time.
    pub fn set_connectivity(&mut self, online: bool) {
        info!(online, "connectivity probe finished");
        self.online = Some(online);
    }

    /// Probe the backend inline and record the result. Blocks the view for
    /// the length of the probe; hosts that must stay responsive run the
    /// probe elsewhere and call [`Self::set_connectivity`].
    pub async fn refresh_connectivity(&mut self) -> bool {
        let online = self.backend.is_healthy().await;
        self.set_connectivity(online);
        online
    }

    /// Replace the input text. Ignored while a send is in flight.
    pub fn set_input(&mut self, text: impl Into<String>) {
        if self.phase == Phase::Idle {
            self.input = text.into();
        }
    }

    /// Whether a submit would start a send right now.
    pub fn can_send(&self) -> bool {
        self.phase == Phase::Idle && !self.input.trim().is_empty()
    }

    /// Record the user's message and enter `Sending`.
    ///
    /// Returns `None` without touching any state when input is blank or a
    /// send is already in flight.
    pub fn begin_send(&mut self) -> Option<PendingSend> {
        if !self.can_send() {
            debug!(phase = ?self.phase, "send ignored");
            return None;
        }

        let text = std::mem::take(&mut self.input);
        self.push(Sender::User, text.clone());
        self.phase = Phase::Sending;

        Some(PendingSend {
            text,
            conversation_id: self.session.conversation_id().map(String::from),
        })
    }

    /// Record the outcome of the in-flight send and return to `Idle`.
    pub fn finish_send(&mut self, outcome: Result<ChatReply, ClientError>) {
        if self.phase != Phase::Sending {
            debug!("no send in flight, outcome dropped");
            return;
        }

        match outcome {
            Ok(reply) => {
                if self.session.adopt(reply.conversation_id.as_deref()) {
                    debug!(conversation_id = ?self.session.conversation_id(), "session id updated");
                }
                self.push(Sender::Bot, reply.response);
            }
            Err(err) => {
                error!(error = %err, "send failed, showing apology");
                self.push(Sender::Bot, APOLOGY);
            }
        }

        self.phase = Phase::Idle;
    }

    /// Run one full send cycle. Returns whether a send took place.
    pub async fn send(&mut self) -> bool {
        let Some(pending) = self.begin_send() else {
            return false;
        };

        let outcome = self
            .backend
            .send(&pending.text, pending.conversation_id.as_deref())
            .await;
        self.finish_send(outcome);
        true
    }

    /// Apply one presentation event.
    pub async fn dispatch(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Changed(text) => {
                self.set_input(text);
                false
            }
            InputEvent::Submit => self.send().await,
        }
    }

    fn push(&mut self, sender: Sender, text: impl Into<String>) {
        self.messages.push(Message::new(self.next_id, sender, text));
        self.next_id += 1;
    }
}
