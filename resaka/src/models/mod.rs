//! Data models for the chat log and session.

mod message;
mod session;

pub use message::{Message, Sender};
pub use session::Session;
