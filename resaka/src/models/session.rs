//! Session model holding the backend-issued conversation identifier.

/// Conversation session as seen by the client.
///
/// The identifier is owned by the backend; the client only stores it and
/// replays it on each send. Once set it is replaced by newer ids but never
/// cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    conversation_id: Option<String>,
}

impl Session {
    /// Create an empty session (no turn answered yet).
    pub const fn new() -> Self {
        Self {
            conversation_id: None,
        }
    }

    /// Current conversation id, if the backend has issued one.
    pub fn conversation_id(&self) -> Option<&str> {
        self.conversation_id.as_deref()
    }

    /// Take the latest id from a reply. Missing or empty ids leave the
    /// session untouched. Returns whether the stored id changed.
    pub fn adopt(&mut self, conversation_id: Option<&str>) -> bool {
        let Some(id) = conversation_id.filter(|id| !id.is_empty()) else {
            return false;
        };
        if self.conversation_id.as_deref() == Some(id) {
            return false;
        }
        self.conversation_id = Some(id.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adopt_sets_then_overwrites() {
        let mut session = Session::new();
        assert_eq!(session.conversation_id(), None);

        assert!(session.adopt(Some("c1")));
        assert_eq!(session.conversation_id(), Some("c1"));

        assert!(!session.adopt(Some("c1")));
        assert!(session.adopt(Some("c2")));
        assert_eq!(session.conversation_id(), Some("c2"));
    }

    #[test]
    fn test_adopt_never_clears() {
        let mut session = Session::new();
        session.adopt(Some("c1"));

        assert!(!session.adopt(None));
        assert!(!session.adopt(Some("")));
        assert_eq!(session.conversation_id(), Some("c1"));
    }
}
