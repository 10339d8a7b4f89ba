//! Plain-text rendering of the conversation for the terminal.

use chrono::Local;

use crate::models::Message;

/// Badge shown while the startup probe has not answered.
pub const BADGE_UNKNOWN: &str = "...";
pub const BADGE_ONLINE: &str = "En ligne";
pub const BADGE_OFFLINE: &str = "Hors ligne";

/// Shown while a reply is pending.
pub const TYPING_INDICATOR: &str = "bot: ...";

/// Badge text for a connectivity state.
pub const fn status_badge(online: Option<bool>) -> &'static str {
    match online {
        None => BADGE_UNKNOWN,
        Some(true) => BADGE_ONLINE,
        Some(false) => BADGE_OFFLINE,
    }
}

/// One log line: local `HH:MM`, sender, text.
pub fn format_message(message: &Message) -> String {
    let time = message.timestamp.with_timezone(&Local).format("%H:%M");
    format!("[{time}] {}: {}", message.sender, message.text)
}

/// Title line with the connectivity badge.
pub fn header(online: Option<bool>) -> String {
    format!("Chatbot Malagasy AI [{}]", status_badge(online))
}
