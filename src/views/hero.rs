use crate::data::DATA;
use dioxus::prelude::*;

#[component]
pub fn HeroSection() -> Element {
    rsx! {
        section { class: "hero",
            div { class: "hero-glow", aria_hidden: "true" }
            span { class: "hero-role", "{DATA.role}" }
            h1 { class: "hero-title",
                "Hello, I'm "
                span { class: "hero-name", "{DATA.name}" }
            }
            p { class: "hero-bio", "{DATA.bio}" }
            div { class: "hero-actions",
                a {
                    class: "btn btn-primary",
                    href: "{DATA.contact.linkedin}",
                    target: "_blank",
                    "Connect on LinkedIn"
                }
                a {
                    class: "btn btn-ghost",
                    href: "mailto:{DATA.contact.email}",
                    "Email Me"
                }
            }
        }
    }
}
