use crate::access::{AccessGate, VERIFY_POLL_INTERVAL, referral_from_env};
use crate::storage::Storage;
use crate::theme::{
    Clock, RESOLVE_TICK, ThemeSnapshot, ThemeStore, sunset_background, system_prefers_dark_hint,
    theme_definition,
};
use crate::views::{
    ActivityPulse, ChatWidget, HeroSection, ProjectsSection, SiteFooter, SkillsSection,
    ThemeSwitcher, VerificationModal,
};
use dioxus::prelude::*;

const PORTFOLIO_CSS: Asset = asset!("/assets/portfolio.css");

#[component]
pub fn App() -> Element {
    let storage = use_hook(Storage::open);
    let gate = use_hook({
        let storage = storage.clone();
        move || AccessGate::new(storage)
    });

    // Loaded synchronously so the first paint already has the persisted mode.
    let theme_store = use_signal({
        let storage = storage.clone();
        move || {
            let mut store = ThemeStore::new(storage, Clock::from_env());
            store.set_system_preference(system_prefers_dark_hint());
            store.load();
            store
        }
    });
    let theme = use_signal(move || theme_store.peek().snapshot());

    let verified = use_signal({
        let gate = gate.clone();
        move || gate.is_verified()
    });
    // Referral intent is read once; navigating afterwards does not reopen it.
    let mut show_modal = use_signal({
        let gate = gate.clone();
        move || gate.initial_prompt_visible(referral_from_env().as_deref())
    });

    use_resolve_tick(theme_store, theme);
    use_verification_poll(gate.clone(), verified);

    let on_verified = {
        let mut verified = verified;
        let mut show_modal = show_modal;
        move |_: ()| {
            verified.set(true);
            show_modal.set(false);
        }
    };

    rsx! {
        ThemeStyles { theme }
        StagingBadge {}
        main { class: "page",
            div { class: "glow-top", aria_hidden: "true" }
            div { class: "glow-corner", aria_hidden: "true" }
            ThemeSwitcher { store: theme_store, snapshot: theme }
            HeroSection {}
            div { class: "page-inner",
                ActivityPulse {}
                ProjectsSection {}
                SkillsSection {}
                SiteFooter {}
            }
            ChatWidget { verified }
            if show_modal() {
                VerificationModal {
                    gate: gate.clone(),
                    on_close: move |_| show_modal.set(false),
                    on_verified,
                }
            }
        }
    }
}

/// Re-resolves the theme once a minute so the sunset window creeps without
/// any interaction. The loop peeks rather than reads; nothing here should
/// re-subscribe the effect.
fn use_resolve_tick(store: Signal<ThemeStore>, snapshot: Signal<ThemeSnapshot>) {
    use_effect(move || {
        let mut refresh = snapshot;
        spawn(async move {
            loop {
                tokio::time::sleep(RESOLVE_TICK).await;
                let next = store.peek().snapshot();
                if *refresh.peek() != next {
                    refresh.set(next);
                }
            }
        });
    });
}

/// Watches the persisted verified flag for out-of-band changes.
fn use_verification_poll(gate: AccessGate, verified: Signal<bool>) {
    use_effect(move || {
        let gate = gate.clone();
        let mut flag = verified;
        spawn(async move {
            loop {
                tokio::time::sleep(VERIFY_POLL_INTERVAL).await;
                let now = gate.is_verified();
                if *flag.peek() != now {
                    flag.set(now);
                }
            }
        });
    });
}

#[component]
fn ThemeStyles(theme: Signal<ThemeSnapshot>) -> Element {
    let snapshot = theme();
    let definition = theme_definition(snapshot.theme);
    let sunset_css = if snapshot.in_transition() {
        format!(
            ":root {{ --background: {}; }}",
            sunset_background(snapshot.sunset_factor)
        )
    } else {
        String::new()
    };

    rsx! {
        document::Link { rel: "stylesheet", href: PORTFOLIO_CSS }
        style { dangerous_inner_html: "{definition.css}" }
        if !sunset_css.is_empty() {
            style { dangerous_inner_html: "{sunset_css}" }
        }
    }
}

#[component]
fn StagingBadge() -> Element {
    let preview = std::env::var("DEPLOY_ENV")
        .map(|env| env == "preview")
        .unwrap_or(false);

    rsx! {
        if preview {
            div { class: "staging-badge", "Staging" }
        }
    }
}
