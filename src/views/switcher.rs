use crate::theme::{self, ThemeMode, ThemeSnapshot, ThemeStore, theme_definition};
use dioxus::prelude::*;
use std::time::Duration;

const LONG_PRESS: Duration = Duration::from_millis(600);
const TOOLTIP_VISIBLE: Duration = Duration::from_secs(2);

/// Tap flips light/dark, holding for 600ms toggles auto mode. The press
/// sequence counter cancels a pending long press when the pointer lifts or
/// leaves early.
#[component]
pub fn ThemeSwitcher(store: Signal<ThemeStore>, snapshot: Signal<ThemeSnapshot>) -> Element {
    let mut press_seq = use_signal(|| 0u32);
    let mut long_pressed = use_signal(|| false);
    let mut show_tooltip = use_signal(|| false);

    let current = snapshot();
    let definition = theme_definition(current.theme);
    let is_dark = current.theme.is_dark();
    let is_auto = matches!(current.mode, ThemeMode::Auto);

    let on_pointer_down = move |_| {
        long_pressed.set(false);
        let seq = press_seq() + 1;
        press_seq.set(seq);
        spawn(async move {
            tokio::time::sleep(LONG_PRESS).await;
            if *press_seq.peek() != seq {
                return;
            }
            long_pressed.set(true);
            let snap = *snapshot.peek();
            let mode = theme::long_press_mode(snap.mode, snap.theme);
            select_mode(store, snapshot, mode);
            if matches!(mode, ThemeMode::Auto) {
                show_tooltip.set(true);
                spawn(async move {
                    tokio::time::sleep(TOOLTIP_VISIBLE).await;
                    show_tooltip.set(false);
                });
            }
        });
    };

    let on_pointer_up = move |_| {
        press_seq.set(press_seq() + 1);
        if long_pressed() {
            return;
        }
        let snap = *snapshot.peek();
        select_mode(store, snapshot, theme::tap_mode(snap.mode, snap.theme));
    };

    let on_pointer_leave = move |_| {
        press_seq.set(press_seq() + 1);
    };

    rsx! {
        div { class: "switcher-wrap",
            if show_tooltip() {
                div { class: "switcher-tooltip", "Auto mode enabled" }
            }
            button {
                class: "{definition.switcher_class}",
                title: "Tap to switch theme, hold for auto",
                onpointerdown: on_pointer_down,
                onpointerup: on_pointer_up,
                onpointerleave: on_pointer_leave,
                span {
                    class: format_args!("switcher-icon {}", if is_dark { "" } else { "active" }),
                    "☀"
                }
                span { class: "switcher-thumb" }
                span {
                    class: format_args!("switcher-icon {}", if is_dark { "active" } else { "" }),
                    "☾"
                }
                if is_auto {
                    span { class: "switcher-auto-dot", aria_hidden: "true" }
                }
            }
        }
    }
}

fn select_mode(mut store: Signal<ThemeStore>, mut snapshot: Signal<ThemeSnapshot>, mode: ThemeMode) {
    store.write().set_mode(mode);
    let refreshed = store.peek().snapshot();
    snapshot.set(refreshed);
}
