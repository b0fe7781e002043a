pub mod groq;

use anyhow::Result;
use rig::providers;
use serde::Serialize;
use std::env;

pub use groq::GroqClient;

use crate::types::{ChatMessage, Role};

pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "llama3-8b-8192";

/// OpenAI-compatible wire message. The transcript keeps structured parts;
/// providers only ever see flat text.
#[derive(Serialize, Clone, Debug)]
pub struct WireMessage {
    pub role: &'static str,
    pub content: String,
}

impl WireMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system",
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user",
            content: content.into(),
        }
    }

    pub fn from_history(message: &ChatMessage) -> Self {
        Self {
            role: match message.role {
                Role::User => "user",
                Role::Assistant => "assistant",
            },
            content: message.display_text(),
        }
    }
}

/// Enum to hold different provider clients
pub enum ProviderClient {
    Groq(GroqClient),
    OpenAI(providers::openai::Client),
}

impl ProviderClient {
    /// Auto-detect and configure provider from environment variables
    pub fn from_env() -> Result<Self> {
        // Priority order:
        // 1. GROQ_API_KEY → Groq chat completions (streaming)
        // 2. OPENAI_API_KEY → OpenAI via Rig (single response)

        if let Ok(key) = env::var("GROQ_API_KEY")
            && !key.is_empty()
        {
            let endpoint =
                env::var("ASSISTANT_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
            let model =
                env::var("ASSISTANT_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
            return Ok(Self::Groq(GroqClient::new(endpoint, model, key)));
        }

        if let Ok(key) = env::var("OPENAI_API_KEY")
            && !key.is_empty()
        {
            return Ok(Self::OpenAI(providers::openai::Client::new(&key)));
        }

        Err(anyhow::anyhow!(
            "No assistant provider configured. Set GROQ_API_KEY for streaming replies or OPENAI_API_KEY for a non-streaming fallback."
        ))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Groq(_) => "groq",
            Self::OpenAI(_) => "openai",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MessagePart;

    #[test]
    fn wire_messages_flatten_history_parts() {
        let mut reply = ChatMessage::assistant(2);
        reply.push_part(MessagePart::Reasoning("weighing".into()));
        reply.push_part(MessagePart::Text("Answer".into()));

        let wire = WireMessage::from_history(&reply);
        assert_eq!(wire.role, "assistant");
        assert_eq!(wire.content, "Answer");

        let wire = WireMessage::from_history(&ChatMessage::user(1, "Question"));
        assert_eq!(wire.role, "user");
        assert_eq!(wire.content, "Question");
    }

    #[test]
    fn wire_messages_serialise_to_the_openai_shape() {
        let wire = WireMessage::system("context");
        let value = serde_json::to_value(&wire).unwrap();
        assert_eq!(value["role"], "system");
        assert_eq!(value["content"], "context");
    }
}
