//! Chat exchange state machine. Every transcript mutation funnels through
//! [`ChatSession::submit`] and [`ChatSession::apply`], so transports only
//! have to deliver events in order and the UI only has to render state.

use crate::types::{ChatMessage, MessagePart};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChatStatus {
    #[default]
    Idle,
    /// A prompt is in flight but no stream part has arrived yet.
    Submitted,
    Streaming,
    Error,
}

impl ChatStatus {
    /// Busy sessions refuse a second in-flight exchange.
    pub fn is_busy(self) -> bool {
        matches!(self, ChatStatus::Submitted | ChatStatus::Streaming)
    }
}

/// What the transport reports back, in arrival order.
#[derive(Clone, Debug, PartialEq)]
pub enum StreamEvent {
    Part(MessagePart),
    Completed,
    Failed(String),
}

/// Prompt plus the history that preceded it, handed to the backend on a
/// successful submit.
#[derive(Clone, Debug, PartialEq)]
pub struct Exchange {
    pub prompt: String,
    pub history: Vec<ChatMessage>,
}

#[derive(Clone, Debug, Default)]
pub struct ChatSession {
    transcript: Vec<ChatMessage>,
    status: ChatStatus,
    error: Option<String>,
    next_id: u64,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn status(&self) -> ChatStatus {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append the user message and mark the exchange in flight. Returns what
    /// the backend needs, or `None` when the prompt is blank or an exchange
    /// is already running. A previous error is cleared by the new attempt.
    pub fn submit(&mut self, text: &str) -> Option<Exchange> {
        let prompt = text.trim();
        if prompt.is_empty() || self.status.is_busy() {
            return None;
        }
        let history = self.transcript.clone();
        let id = self.take_id();
        self.transcript.push(ChatMessage::user(id, prompt));
        self.status = ChatStatus::Submitted;
        self.error = None;
        Some(Exchange {
            prompt: prompt.to_string(),
            history,
        })
    }

    /// Fold one stream event into the session. Events that arrive after the
    /// exchange already settled (completed or failed) are dropped.
    pub fn apply(&mut self, event: StreamEvent) {
        match event {
            StreamEvent::Part(part) => self.apply_part(part),
            StreamEvent::Completed => {
                if self.status.is_busy() {
                    self.status = ChatStatus::Idle;
                }
            }
            StreamEvent::Failed(message) => {
                // Whatever partial assistant message exists stays in the
                // transcript.
                if self.status.is_busy() {
                    self.status = ChatStatus::Error;
                    self.error = Some(message);
                }
            }
        }
    }

    fn apply_part(&mut self, part: MessagePart) {
        match self.status {
            ChatStatus::Submitted => {
                // First part materialises the assistant message.
                let id = self.take_id();
                let mut message = ChatMessage::assistant(id);
                message.push_part(part);
                self.transcript.push(message);
                self.status = ChatStatus::Streaming;
            }
            ChatStatus::Streaming => {
                if let Some(last) = self.transcript.last_mut() {
                    last.push_part(part);
                }
            }
            ChatStatus::Idle | ChatStatus::Error => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_prompts_are_rejected() {
        let mut session = ChatSession::new();
        assert!(session.submit("").is_none());
        assert!(session.submit("   \n\t").is_none());
        assert!(session.transcript().is_empty());
        assert_eq!(session.status(), ChatStatus::Idle);
    }

    #[test]
    fn submit_appends_user_message_and_reports_prior_history() {
        let mut session = ChatSession::new();
        let exchange = session.submit("  hello  ").unwrap();
        assert_eq!(exchange.prompt, "hello");
        assert!(exchange.history.is_empty());
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.transcript()[0].display_text(), "hello");
        assert_eq!(session.status(), ChatStatus::Submitted);
    }

    #[test]
    fn busy_sessions_refuse_a_second_exchange() {
        let mut session = ChatSession::new();
        session.submit("first").unwrap();
        assert!(session.submit("second").is_none());
        session.apply(StreamEvent::Part(MessagePart::Text("hi".into())));
        assert!(session.submit("third").is_none());
        assert_eq!(session.transcript().len(), 2);
    }

    #[test]
    fn first_part_materialises_the_assistant_message() {
        let mut session = ChatSession::new();
        session.submit("question").unwrap();
        session.apply(StreamEvent::Part(MessagePart::Text("ans".into())));
        assert_eq!(session.status(), ChatStatus::Streaming);
        assert_eq!(session.transcript().len(), 2);
        session.apply(StreamEvent::Part(MessagePart::Text("wer".into())));
        assert_eq!(session.transcript()[1].display_text(), "answer");
    }

    #[test]
    fn completion_returns_to_idle_and_allows_the_next_exchange() {
        let mut session = ChatSession::new();
        session.submit("one").unwrap();
        session.apply(StreamEvent::Part(MessagePart::Text("done".into())));
        session.apply(StreamEvent::Completed);
        assert_eq!(session.status(), ChatStatus::Idle);

        let exchange = session.submit("two").unwrap();
        // History carries the full first exchange.
        assert_eq!(exchange.history.len(), 2);
        assert_eq!(session.transcript().len(), 3);
    }

    #[test]
    fn zero_part_completion_leaves_no_assistant_message() {
        let mut session = ChatSession::new();
        session.submit("anyone there").unwrap();
        session.apply(StreamEvent::Completed);
        assert_eq!(session.status(), ChatStatus::Idle);
        assert_eq!(session.transcript().len(), 1);
    }

    #[test]
    fn failure_keeps_the_partial_message() {
        let mut session = ChatSession::new();
        session.submit("question").unwrap();
        session.apply(StreamEvent::Part(MessagePart::Text("partial".into())));
        session.apply(StreamEvent::Failed("connection reset".into()));
        assert_eq!(session.status(), ChatStatus::Error);
        assert_eq!(session.error(), Some("connection reset"));
        assert_eq!(session.transcript()[1].display_text(), "partial");
    }

    #[test]
    fn failure_before_any_part_leaves_only_the_user_message() {
        let mut session = ChatSession::new();
        session.submit("question").unwrap();
        session.apply(StreamEvent::Failed("no provider".into()));
        assert_eq!(session.status(), ChatStatus::Error);
        assert_eq!(session.transcript().len(), 1);
    }

    #[test]
    fn resubmitting_after_an_error_clears_it() {
        let mut session = ChatSession::new();
        session.submit("question").unwrap();
        session.apply(StreamEvent::Failed("boom".into()));
        assert!(session.error().is_some());

        let exchange = session.submit("retry").unwrap();
        assert_eq!(session.error(), None);
        assert_eq!(session.status(), ChatStatus::Submitted);
        assert_eq!(exchange.history.len(), 1);
    }

    #[test]
    fn events_after_settlement_are_dropped() {
        let mut session = ChatSession::new();
        session.submit("question").unwrap();
        session.apply(StreamEvent::Part(MessagePart::Text("full".into())));
        session.apply(StreamEvent::Completed);

        session.apply(StreamEvent::Part(MessagePart::Text(" stale".into())));
        session.apply(StreamEvent::Failed("stale".into()));
        assert_eq!(session.status(), ChatStatus::Idle);
        assert_eq!(session.error(), None);
        assert_eq!(session.transcript()[1].display_text(), "full");
    }

    #[test]
    fn reasoning_parts_ride_along_without_surfacing_in_display_text() {
        let mut session = ChatSession::new();
        session.submit("why").unwrap();
        session.apply(StreamEvent::Part(MessagePart::Reasoning("mull".into())));
        session.apply(StreamEvent::Part(MessagePart::Text("because".into())));
        session.apply(StreamEvent::Completed);
        let reply = &session.transcript()[1];
        assert_eq!(reply.parts.len(), 2);
        assert_eq!(reply.display_text(), "because");
    }
}
