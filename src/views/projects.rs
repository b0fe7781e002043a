use crate::data::DATA;
use dioxus::prelude::*;
use time::OffsetDateTime;

#[component]
pub fn ProjectsSection() -> Element {
    rsx! {
        section { class: "section", id: "projects",
            div { class: "section-heading",
                h2 { "Featured Projects" }
                div { class: "heading-rule" }
            }
            div { class: "project-grid",
                for project in DATA.projects.iter() {
                    article { class: "project-card", key: "{project.title}",
                        div { class: "project-media",
                            img {
                                src: "{project.image}",
                                alt: "{project.title}",
                                loading: "lazy",
                            }
                        }
                        div { class: "project-body",
                            h3 { class: "project-title", "{project.title}" }
                            p { class: "project-summary", "{project.description}" }
                            div { class: "project-tech",
                                for tech in project.tech.iter() {
                                    span { class: "tech-pill", "{tech}" }
                                }
                            }
                            a {
                                class: "project-link",
                                href: "{project.link}",
                                target: "_blank",
                                "View Project"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SkillsSection() -> Element {
    rsx! {
        section { class: "section", id: "skills",
            div { class: "section-heading",
                h2 { "Technical Stack" }
                div { class: "heading-rule" }
            }
            div { class: "skill-strip",
                for skill in DATA.skills.iter() {
                    span { class: "skill-pill", "{skill}" }
                }
            }
        }
    }
}

#[component]
pub fn SiteFooter() -> Element {
    let year = OffsetDateTime::now_utc().year();

    rsx! {
        footer { class: "site-footer",
            div { class: "footer-links",
                a { href: "{DATA.contact.linkedin}", target: "_blank", "LinkedIn" }
                a { href: "{DATA.contact.github}", target: "_blank", "GitHub" }
                a { href: "mailto:{DATA.contact.email}", "Email" }
            }
            p { class: "footer-note", "© {year} {DATA.name}. Built with Rust & AI." }
        }
    }
}
