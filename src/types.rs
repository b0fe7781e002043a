use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One block of message content. Streams may interleave part kinds; only
/// text parts are rendered, other kinds stay in the transcript untouched.
#[derive(Clone, Debug, PartialEq)]
pub enum MessagePart {
    Text(String),
    Reasoning(String),
}

impl MessagePart {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MessagePart::Text(text) => Some(text),
            MessagePart::Reasoning(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    pub role: Role,
    pub parts: Vec<MessagePart>,
    pub created_at: Option<OffsetDateTime>,
}

impl ChatMessage {
    pub fn user(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            role: Role::User,
            parts: vec![MessagePart::Text(text.into())],
            created_at: Some(OffsetDateTime::now_utc()),
        }
    }

    /// Empty assistant message, extended part by part as the stream arrives.
    pub fn assistant(id: u64) -> Self {
        Self {
            id,
            role: Role::Assistant,
            parts: Vec::new(),
            created_at: Some(OffsetDateTime::now_utc()),
        }
    }

    pub fn push_part(&mut self, part: MessagePart) {
        self.parts.push(part);
    }

    /// Concatenation of the text parts in arrival order. Non-text parts are
    /// skipped here but never removed from `parts`.
    pub fn display_text(&self) -> String {
        self.parts.iter().filter_map(MessagePart::as_text).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_text_concatenates_text_parts_in_order() {
        let mut msg = ChatMessage::assistant(1);
        msg.push_part(MessagePart::Text("Hello".into()));
        msg.push_part(MessagePart::Text(" world".into()));
        assert_eq!(msg.display_text(), "Hello world");
    }

    #[test]
    fn display_text_skips_non_text_parts_without_dropping_them() {
        let mut msg = ChatMessage::assistant(1);
        msg.push_part(MessagePart::Text("Answer".into()));
        msg.push_part(MessagePart::Reasoning("chain of thought".into()));
        msg.push_part(MessagePart::Text(".".into()));
        assert_eq!(msg.display_text(), "Answer.");
        assert_eq!(msg.parts.len(), 3);
    }
}
