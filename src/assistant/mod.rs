/// Assistant backend for the portfolio chat
///
/// The transcript-facing contract is a pair of functions: `stream_start`
/// launches one exchange and `stream_poll` drains the events it has produced
/// so far. Provider selection is automatic based on environment variables,
/// with Groq's OpenAI-compatible streaming API preferred and Rig's OpenAI
/// client as a non-streaming fallback.
///
/// # Architecture
///
/// - `client` - stream store, provider dispatch and the system prompt
/// - `providers` - provider-specific clients and the wire message format
mod client;
mod providers;

// Re-export main types
pub use client::{
    ChatError, ChatResult, StreamHandle, active_provider, is_configured, stream_poll,
    stream_start,
};
pub use providers::{DEFAULT_ENDPOINT, DEFAULT_MODEL, WireMessage};
