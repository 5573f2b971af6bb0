use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatSender {
    You,
    Bot,
}

impl std::fmt::Display for ChatSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatSender::You => write!(f, "You"),
            ChatSender::Bot => write!(f, "Bot"),
        }
    }
}

/// One transcript entry. Transcripts are append-only for the life of
/// a session; only a bounded tail is displayed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: ChatSender,
    pub text: String,
}
