use crate::access::{AccessGate, Challenge};
use dioxus::{
    events::{FormEvent, Key, KeyboardEvent},
    prelude::*,
};

/// The challenge pair lives and dies with the modal mount, so closing and
/// reopening deals fresh numbers. A wrong answer clears the input and shows
/// the error without touching the pair.
#[component]
pub fn VerificationModal(
    gate: AccessGate,
    on_close: EventHandler<()>,
    on_verified: EventHandler<()>,
) -> Element {
    let challenge = use_hook(Challenge::generate);
    let answer = use_signal(String::new);
    let error = use_signal(|| false);

    let submit_gate = gate.clone();
    let key_gate = gate.clone();

    rsx! {
        div { class: "modal-overlay",
            div { class: "modal-backdrop", onclick: move |_| on_close.call(()) }
            div { class: "modal-card",
                button {
                    class: "modal-close",
                    r#type: "button",
                    onclick: move |_| on_close.call(()),
                    "✕"
                }
                div { class: "modal-icon", aria_hidden: "true", "🛡" }
                h2 { class: "modal-title", "Recruiter Verification" }
                p { class: "modal-copy",
                    "Welcome! Please confirm you're a human recruiter to access the AI portfolio assistant."
                }
                div { class: "challenge-prompt", "{challenge.prompt()}" }
                input {
                    class: format_args!(
                        "challenge-input {}",
                        if error() { "challenge-input-error" } else { "" }
                    ),
                    r#type: "number",
                    value: "{answer}",
                    placeholder: "Your answer",
                    autofocus: true,
                    oninput: {
                        let mut answer = answer;
                        move |ev: FormEvent| answer.set(ev.value())
                    },
                    onkeydown: move |ev: KeyboardEvent| {
                        if ev.key() == Key::Enter {
                            attempt(&key_gate, challenge, answer, error, on_verified);
                        }
                    },
                }
                if error() {
                    p { class: "challenge-error", "Incorrect answer. Please try again." }
                }
                button {
                    class: "btn btn-primary btn-wide",
                    r#type: "button",
                    onclick: move |_| {
                        attempt(&submit_gate, challenge, answer, error, on_verified);
                    },
                    "Verify Access"
                }
            }
        }
    }
}

fn attempt(
    gate: &AccessGate,
    challenge: Challenge,
    mut answer: Signal<String>,
    mut error: Signal<bool>,
    on_verified: EventHandler<()>,
) {
    let text = answer.peek().clone();
    if gate.verify(&challenge, &text) {
        on_verified.call(());
    } else {
        error.set(true);
        answer.set(String::new());
    }
}
