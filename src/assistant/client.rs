use crate::data::DATA;
use crate::session::StreamEvent;
use crate::types::{ChatMessage, MessagePart, Role};
use anyhow::Result;
use once_cell::sync::Lazy;
use rig::client::CompletionClient;
use rig::completion::Chat;
use std::collections::{HashMap, VecDeque};
use std::env;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use super::providers::{ProviderClient, WireMessage};

// ============================================
// Error Types
// ============================================

#[derive(Debug, Clone)]
pub struct ChatError(String);

impl ChatError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl std::fmt::Display for ChatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ChatError {}

impl From<anyhow::Error> for ChatError {
    fn from(err: anyhow::Error) -> Self {
        ChatError::new(err.to_string())
    }
}

pub type ChatResult<T> = Result<T, ChatError>;

// ============================================
// Streaming State Management
// ============================================

static STREAM_STORE: Lazy<StreamStore> = Lazy::new(StreamStore::default);

struct StreamStore {
    counter: AtomicU64,
    entries: Mutex<HashMap<u64, StreamEntry>>,
}

impl Default for StreamStore {
    fn default() -> Self {
        Self {
            counter: AtomicU64::new(1),
            entries: Mutex::new(HashMap::new()),
        }
    }
}

#[derive(Default)]
struct StreamEntry {
    events: VecDeque<StreamEvent>,
    settled: bool,
}

impl StreamStore {
    fn create_handle(&self) -> StreamHandle {
        let id = self.counter.fetch_add(1, Ordering::Relaxed);
        let mut entries = self.entries.lock().expect("stream store poisoned");
        entries.insert(id, StreamEntry::default());
        StreamHandle { id }
    }

    fn push(&self, id: u64, event: StreamEvent) {
        let mut entries = self.entries.lock().expect("stream store poisoned");
        if let Some(entry) = entries.get_mut(&id) {
            // Nothing lands after a terminal event.
            if entry.settled {
                return;
            }
            entry.settled = matches!(event, StreamEvent::Completed | StreamEvent::Failed(_));
            entry.events.push_back(event);
        }
    }

    fn drain(&self, id: u64) -> ChatResult<Vec<StreamEvent>> {
        let mut entries = self.entries.lock().expect("stream store poisoned");
        let Some(entry) = entries.get_mut(&id) else {
            return Err(ChatError::new("invalid stream id"));
        };
        let events: Vec<StreamEvent> = entry.events.drain(..).collect();
        // Once the terminal event has been handed out the entry is dead.
        if entry.settled {
            entries.remove(&id);
        }
        Ok(events)
    }
}

/// Writer side of one stream entry, cloned into the provider task.
#[derive(Clone)]
pub struct StreamHandle {
    id: u64,
}

impl StreamHandle {
    pub fn part(&self, part: MessagePart) {
        STREAM_STORE.push(self.id, StreamEvent::Part(part));
    }

    pub fn finish(&self) {
        STREAM_STORE.push(self.id, StreamEvent::Completed);
    }

    pub fn fail(&self, err: &str) {
        STREAM_STORE.push(self.id, StreamEvent::Failed(err.to_string()));
    }
}

// ============================================
// Provider Dispatch
// ============================================

fn system_prompt() -> String {
    let profile = serde_json::to_string_pretty(&DATA).unwrap_or_default();
    format!(
        r#"You are Aditya's AI Representative. Use the following data about Aditya Das to answer questions.
Be professional, high-energy, and helpful.
If you don't know something, or if the user asks for personal contact info not provided, ask them to contact Aditya directly via LinkedIn or email.

ADITYA DAS DATA:
{profile}

Instructions:
- Keep responses concise and engaging.
- Highlight Aditya's expertise in Senior Software Engineering and AI.
- If asked about availability, suggest they reach out for a formal discussion."#
    )
}

async fn run_exchange(
    handle: StreamHandle,
    client: ProviderClient,
    prompt: String,
    history: Vec<ChatMessage>,
) {
    match client {
        ProviderClient::Groq(groq) => {
            let mut messages = vec![WireMessage::system(system_prompt())];
            messages.extend(history.iter().map(WireMessage::from_history));
            messages.push(WireMessage::user(prompt));

            if let Err(err) = groq.stream_chat(&handle, &messages).await {
                tracing::warn!("assistant stream failed: {err}");
                handle.fail(&err.to_string());
            }
        }
        ProviderClient::OpenAI(client) => match openai_chat(&client, &prompt, history).await {
            Ok(reply) => {
                // The whole reply lands as one part.
                handle.part(MessagePart::Text(reply));
                handle.finish();
            }
            Err(err) => {
                tracing::warn!("assistant request failed: {err}");
                handle.fail(&err.to_string());
            }
        },
    }
}

/// Non-streaming fallback with conversation history.
async fn openai_chat(
    client: &rig::providers::openai::Client,
    prompt: &str,
    history: Vec<ChatMessage>,
) -> Result<String> {
    let model = env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o".to_string());

    let agent = client
        .agent(&model)
        .preamble(&system_prompt())
        .max_tokens(4096)
        .temperature(0.7)
        .build();

    let rig_messages = convert_to_rig_messages(history);
    Ok(agent.chat(prompt, rig_messages).await?)
}

/// Convert transcript messages to Rig Message format
fn convert_to_rig_messages(messages: Vec<ChatMessage>) -> Vec<rig::message::Message> {
    messages
        .into_iter()
        .map(|msg| {
            let text = msg.display_text();
            match msg.role {
                Role::User => rig::message::Message::user(text),
                Role::Assistant => rig::message::Message::assistant(text),
            }
        })
        .collect()
}

// ============================================
// Public API Functions
// ============================================

/// True when some provider can be built from the environment.
pub fn is_configured() -> bool {
    ProviderClient::from_env().is_ok()
}

/// Name of the provider that would serve the next exchange.
pub fn active_provider() -> Option<&'static str> {
    ProviderClient::from_env().ok().map(|client| client.name())
}

/// Start one exchange. Provider selection happens here so a missing
/// configuration surfaces as a failed stream rather than a hung one.
pub async fn stream_start(prompt: String, history: Vec<ChatMessage>) -> ChatResult<u64> {
    let handle = STREAM_STORE.create_handle();
    let id = handle.id;

    match ProviderClient::from_env() {
        Ok(client) => {
            tokio::spawn(run_exchange(handle, client, prompt, history));
        }
        Err(err) => handle.fail(&err.to_string()),
    }

    Ok(id)
}

/// Drain the events queued since the last poll.
pub async fn stream_poll(id: u64) -> ChatResult<Vec<StreamEvent>> {
    STREAM_STORE.drain(id)
}
