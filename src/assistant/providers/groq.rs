use super::WireMessage;
use super::super::client::StreamHandle;
use crate::types::MessagePart;
use anyhow::Result;
use futures::StreamExt;
use serde::{Deserialize, Serialize};

/// Streaming client for Groq's OpenAI-compatible chat completions endpoint.
pub struct GroqClient {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

#[derive(Serialize)]
struct StreamRequest<'a> {
    model: &'a str,
    messages: &'a [WireMessage],
    stream: bool,
}

impl GroqClient {
    pub fn new(endpoint: String, model: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            model,
            api_key,
        }
    }

    /// Issue the streaming request and feed parsed parts into the handle.
    /// On a clean stream end the handle is finished here; errors are left
    /// for the caller to report.
    pub async fn stream_chat(
        &self,
        handle: &StreamHandle,
        messages: &[WireMessage],
    ) -> Result<()> {
        let res = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .header("accept", "text/event-stream")
            .json(&StreamRequest {
                model: &self.model,
                messages,
                stream: true,
            })
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("assistant endpoint error {status}: {body}"));
        }

        // Parse SSE by lines. Collect consecutive data: lines (if any) until
        // a blank line, then process the accumulated payload.
        let mut buffer = String::new();
        let mut data_acc: Option<String> = None;
        let mut stream = res.bytes_stream();
        while let Some(item) = stream.next().await {
            let bytes = item?;
            let chunk = String::from_utf8_lossy(&bytes);
            buffer.push_str(&chunk);
            while let Some(pos) = buffer.find('\n') {
                let mut line = buffer[..pos].to_string();
                if line.ends_with('\r') {
                    line.pop();
                }
                buffer = buffer[pos + 1..].to_string();

                if line.is_empty() {
                    // End of event
                    if let Some(data) = data_acc.take()
                        && let Some((parts, done)) = parse_sse_data(&data)
                    {
                        for part in parts {
                            handle.part(part);
                        }
                        if done {
                            handle.finish();
                            return Ok(());
                        }
                    }
                    continue;
                }

                if let Some(rest) = line.strip_prefix("data:") {
                    let payload = rest.trim_start();
                    match &mut data_acc {
                        Some(acc) => acc.push_str(payload),
                        None => data_acc = Some(payload.to_string()),
                    }
                }
            }
        }

        handle.finish();
        Ok(())
    }
}

// -----------------
// SSE payload parsing helpers (exported for tests)
// -----------------

#[derive(Deserialize)]
pub struct SseDelta {
    pub content: Option<String>,
    pub reasoning_content: Option<String>,
}

#[derive(Deserialize)]
pub struct SseMessage {
    pub content: String,
}

#[derive(Deserialize)]
pub struct SseChoice {
    #[serde(default)]
    pub delta: Option<SseDelta>,
    pub message: Option<SseMessage>,
}

#[derive(Deserialize)]
pub struct SseChunk {
    pub choices: Vec<SseChoice>,
}

/// One accumulated `data:` payload. Returns the message parts it carries and
/// whether the stream finished; `None` for payloads we cannot read.
pub fn parse_sse_data(data: &str) -> Option<(Vec<MessagePart>, bool)> {
    let trimmed = data.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed == "[DONE]" {
        return Some((Vec::new(), true));
    }

    let parsed: SseChunk = serde_json::from_str(trimmed).ok()?;
    let mut parts = Vec::new();
    if let Some(first) = parsed.choices.into_iter().next() {
        if let Some(delta) = first.delta {
            // Reasoning precedes the visible answer within a chunk.
            if let Some(reasoning) = delta.reasoning_content
                && !reasoning.is_empty()
            {
                parts.push(MessagePart::Reasoning(reasoning));
            }
            if let Some(content) = delta.content
                && !content.is_empty()
            {
                parts.push(MessagePart::Text(content));
            }
        } else if let Some(message) = first.message
            && !message.content.is_empty()
        {
            parts.push(MessagePart::Text(message.content));
        }
    }
    Some((parts, false))
}
