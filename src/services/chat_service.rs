use std::sync::Arc;

use dashmap::DashMap;
use uuid::Uuid;

use crate::models::{ChatMessage, ChatSender};

/// How many transcript entries the dashboard shows.
pub const DISPLAY_TAIL: usize = 10;

/// Per-session chat transcripts. Transcripts are append-only and
/// unbounded for the life of a session; only a bounded tail is read
/// back for display.
#[derive(Clone, Default)]
pub struct ChatStore {
    sessions: Arc<DashMap<Uuid, Vec<ChatMessage>>>,
}

impl ChatStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, session: Uuid, sender: ChatSender, text: impl Into<String>) {
        self.sessions.entry(session).or_default().push(ChatMessage {
            sender,
            text: text.into(),
        });
    }

    pub fn transcript_len(&self, session: Uuid) -> usize {
        self.sessions.get(&session).map(|entry| entry.len()).unwrap_or(0)
    }

    /// The most recent `n` entries, oldest first.
    pub fn tail(&self, session: Uuid, n: usize) -> Vec<ChatMessage> {
        self.sessions
            .get(&session)
            .map(|entry| {
                let messages = entry.value();
                messages[messages.len().saturating_sub(n)..].to_vec()
            })
            .unwrap_or_default()
    }
}

/// Placeholder reply until a real model or automation hook is wired in.
pub fn simulated_response(input: &str) -> String {
    format!("(Simulated response to: '{input}')")
}

/// Records one exchange: the user's message followed by the canned
/// reply. Blank input is ignored.
pub fn submit(store: &ChatStore, session: Uuid, input: &str) {
    if input.trim().is_empty() {
        return;
    }
    store.append(session, ChatSender::You, input);
    store.append(session, ChatSender::Bot, simulated_response(input));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_grows_unbounded_but_tail_is_capped() {
        let store = ChatStore::new();
        let session = Uuid::new_v4();
        for i in 0..11 {
            store.append(session, ChatSender::You, format!("message {i}"));
        }
        assert_eq!(store.transcript_len(session), 11);

        let tail = store.tail(session, DISPLAY_TAIL);
        assert_eq!(tail.len(), 10);
        assert_eq!(tail[0].text, "message 1");
        assert_eq!(tail[9].text, "message 10");
    }

    #[test]
    fn test_submit_appends_user_then_bot() {
        let store = ChatStore::new();
        let session = Uuid::new_v4();
        submit(&store, session, "show me the report");

        let tail = store.tail(session, DISPLAY_TAIL);
        assert_eq!(tail.len(), 2);
        assert_eq!(tail[0].sender, ChatSender::You);
        assert_eq!(tail[1].sender, ChatSender::Bot);
        assert_eq!(
            tail[1].text,
            "(Simulated response to: 'show me the report')"
        );
    }

    #[test]
    fn test_submit_ignores_blank_input() {
        let store = ChatStore::new();
        let session = Uuid::new_v4();
        submit(&store, session, "   ");
        assert_eq!(store.transcript_len(session), 0);
    }

    #[test]
    fn test_sessions_are_isolated() {
        let store = ChatStore::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        submit(&store, a, "hello");
        assert_eq!(store.transcript_len(a), 2);
        assert_eq!(store.transcript_len(b), 0);
    }
}
