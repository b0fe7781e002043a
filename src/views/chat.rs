use crate::assistant::{stream_poll, stream_start};
use crate::data::DATA;
use crate::session::{ChatSession, ChatStatus, Exchange, StreamEvent};
use crate::types::{ChatMessage, Role};
use crate::views::shared::markdown_to_html;
use dioxus::events::Key;
use dioxus::prelude::*;
use std::time::Duration;
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

const STREAM_POLL_INTERVAL: Duration = Duration::from_millis(80);

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:zero]:[minute padding:zero] [period case:upper]");

fn format_message_timestamp(timestamp: Option<OffsetDateTime>) -> Option<String> {
    let mut datetime = timestamp?;
    if let Ok(offset) = UtcOffset::current_local_offset() {
        datetime = datetime.to_offset(offset);
    }
    datetime.format(MESSAGE_TIME_FORMAT).ok()
}

/// Floating dock in the corner. The panel swaps between the locked notice
/// and the live conversation as the verified flag moves.
#[component]
pub fn ChatWidget(verified: Signal<bool>) -> Element {
    let mut open = use_signal(|| false);

    rsx! {
        div { class: "chat-dock",
            if open() {
                div { class: "chat-panel",
                    div { class: "chat-header",
                        div { class: "chat-ident",
                            div { class: "avatar assistant", "A" }
                            div {
                                div { class: "chat-name", "Aditya's AI Agent" }
                                div { class: "chat-status",
                                    span { class: "live-dot" }
                                    "Online"
                                }
                            }
                        }
                        button {
                            class: "chat-close",
                            r#type: "button",
                            onclick: move |_| open.set(false),
                            "✕"
                        }
                    }
                    if verified() {
                        ChatConversation {}
                    } else {
                        LockedPanel {}
                    }
                }
            }
            button {
                class: format_args!("chat-toggle {}", if open() { "open" } else { "" }),
                r#type: "button",
                onclick: move |_| {
                    let next = !open();
                    open.set(next);
                },
                if open() { "✕" } else { "💬" }
            }
        }
    }
}

#[component]
fn LockedPanel() -> Element {
    rsx! {
        div { class: "chat-locked",
            div { class: "lock-icon", aria_hidden: "true", "🔒" }
            h3 { "AI Assistant Locked" }
            p {
                "The AI Assistant is reserved for recruiters. Connect on LinkedIn or use a referral link to access."
            }
            a {
                class: "btn btn-primary",
                href: "{DATA.contact.linkedin}",
                target: "_blank",
                "Connect on LinkedIn"
            }
        }
    }
}

#[component]
fn ChatConversation() -> Element {
    let session = use_signal(ChatSession::new);
    let mut input = use_signal(String::new);

    let mut send_message = {
        let mut session = session;
        let mut input_signal = input;
        move |text: String| {
            let Some(exchange) = session.write().submit(&text) else {
                return;
            };
            input_signal.set(String::new());
            spawn(async move {
                run_stream(session, exchange).await;
            });
        }
    };

    let snapshot = session();
    let status = snapshot.status();
    let busy = status.is_busy();
    let transcript = snapshot.transcript();
    let last_index = transcript.len().saturating_sub(1);

    rsx! {
        div { class: "chat-body",
            div { class: "chat-scroll",
                if transcript.is_empty() {
                    div { class: "chat-empty",
                        "Ask me anything about Aditya's experience, skills, or projects!"
                    }
                }
                for (i, message) in transcript.iter().enumerate() {
                    MessageRow {
                        message: message.clone(),
                        streaming: status == ChatStatus::Streaming
                            && i == last_index
                            && matches!(message.role, Role::Assistant),
                    }
                }
                if status == ChatStatus::Submitted {
                    div { class: "message-row assistant",
                        div { class: "avatar assistant", "A" }
                        div { class: "bubble assistant thinking",
                            span { class: "dot" }
                            span { class: "dot" }
                            span { class: "dot" }
                        }
                    }
                }
                if let Some(err) = snapshot.error() {
                    div { class: "chat-error", "{err}" }
                }
            }
            div { class: "composer",
                input {
                    class: "composer-input",
                    r#type: "text",
                    placeholder: "Type a message...",
                    value: "{input}",
                    oninput: move |ev| input.set(ev.value()),
                    onkeydown: move |ev| {
                        if ev.key() == Key::Enter {
                            let text = input();
                            send_message(text);
                        }
                    },
                    disabled: busy,
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: busy || input().trim().is_empty(),
                    onclick: move |_| {
                        let text = input();
                        send_message(text);
                    },
                    "Send"
                }
            }
        }
    }
}

/// Drives one exchange: start the stream, then poll until a terminal event
/// lands. Every batch of events goes through the session reducer.
async fn run_stream(mut session: Signal<ChatSession>, exchange: Exchange) {
    match stream_start(exchange.prompt, exchange.history).await {
        Ok(stream_id) => loop {
            match stream_poll(stream_id).await {
                Ok(events) => {
                    let mut settled = false;
                    if !events.is_empty() {
                        let mut live = session.write();
                        for event in events {
                            settled |= matches!(
                                event,
                                StreamEvent::Completed | StreamEvent::Failed(_)
                            );
                            live.apply(event);
                        }
                    }
                    if settled {
                        break;
                    }
                }
                Err(err) => {
                    tracing::warn!("stream poll error: {}", err);
                    session.write().apply(StreamEvent::Failed(err.to_string()));
                    break;
                }
            }
            tokio::time::sleep(STREAM_POLL_INTERVAL).await;
        },
        Err(err) => {
            tracing::warn!("assistant start error: {}", err);
            session.write().apply(StreamEvent::Failed(err.to_string()));
        }
    }
}

#[component]
fn MessageRow(message: ChatMessage, streaming: bool) -> Element {
    let is_assistant = matches!(message.role, Role::Assistant);
    let text = message.display_text();

    rsx! {
        div {
            class: format_args!("message-row {}", if is_assistant { "assistant" } else { "user" }),
            if is_assistant {
                div { class: "avatar assistant", "A" }
            }
            div { class: "message-stack",
                if is_assistant && streaming && text.is_empty() {
                    div { class: "bubble assistant",
                        span { class: "shimmer-text", "Processing…" }
                    }
                } else {
                    div {
                        class: format_args!("bubble {}", if is_assistant { "assistant" } else { "user" }),
                        if is_assistant {
                            AssistantBubble { content: text.clone(), show_copy: !streaming }
                        } else {
                            "{text}"
                        }
                    }
                }
                if let Some(ts) = format_message_timestamp(message.created_at) {
                    div {
                        class: format_args!(
                            "message-meta {}",
                            if is_assistant { "align-start" } else { "align-end" }
                        ),
                        span { class: "message-timestamp", "{ts}" }
                    }
                }
            }
        }
    }
}

#[component]
fn AssistantBubble(content: String, show_copy: bool) -> Element {
    let content_html = markdown_to_html(&content);
    let copy_payload = content.clone();
    let on_copy = move |_| {
        let raw = copy_payload.clone();
        spawn(async move {
            #[cfg(any(feature = "desktop", feature = "mobile"))]
            {
                if let Ok(mut cb) = arboard::Clipboard::new() {
                    let _ = cb.set_text(raw);
                }
            }
            #[cfg(not(any(feature = "desktop", feature = "mobile")))]
            let _ = raw;
        });
    };

    rsx! {
        if show_copy && !content.is_empty() {
            div { class: "bubble-controls",
                button { class: "action-btn", title: "Copy reply", onclick: on_copy, "Copy" }
            }
        }
        div { class: "md", dangerous_inner_html: "{content_html}" }
    }
}
