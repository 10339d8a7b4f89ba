//! Conversation view: the message log plus the send cycle that feeds it.
//!
//! The view is driven by discrete events on one task. A send moves it from
//! `Idle` to `Sending` and back; while `Sending`, further sends and input
//! edits are ignored.

mod state;

pub use state::{ConversationView, InputEvent, PendingSend, Phase, APOLOGY, GREETING};
