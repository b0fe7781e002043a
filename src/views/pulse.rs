use crate::activity::{ContributionFeed, fetch_contributions, github_username};
use dioxus::prelude::*;

#[component]
pub fn ActivityPulse() -> Element {
    let mut feed = use_signal(|| Option::<ContributionFeed>::None);
    let mut loading = use_signal(|| true);

    use_effect(move || {
        spawn(async move {
            match fetch_contributions(github_username()).await {
                Ok(data) => feed.set(Some(data)),
                Err(err) => tracing::warn!("contribution feed unavailable: {err}"),
            }
            loading.set(false);
        });
    });

    let snapshot = feed();

    rsx! {
        div { class: "pulse-card",
            div { class: "pulse-header",
                span { class: "pulse-title", "GitHub Activity Momentum" }
                span { class: "pulse-live",
                    span { class: "live-dot" }
                    "Live"
                }
            }
            if loading() {
                div { class: "pulse-note", "Loading activity…" }
            } else if let Some(feed) = snapshot {
                div { class: "pulse-grid",
                    for week in feed.recent_weeks() {
                        div { class: "pulse-week",
                            for day in week.iter() {
                                div {
                                    class: "pulse-day",
                                    style: "background: {day_color(day.contribution_count)}",
                                    title: "{day.contribution_count} contributions on {day.date}",
                                }
                            }
                        }
                    }
                }
                div { class: "pulse-footer",
                    span { "Last 15 weeks" }
                    span { class: "pulse-count", "{feed.commits_today()} commits today" }
                }
            } else {
                div { class: "pulse-note", "Activity feed unavailable." }
            }
        }
    }
}

fn day_color(count: u32) -> String {
    if count == 0 {
        return "rgba(148, 163, 184, 0.12)".to_string();
    }
    let alpha = (0.4 + count as f32 * 0.15).min(1.0);
    format!("rgba(59, 130, 246, {alpha:.2})")
}

#[cfg(test)]
mod tests {
    use super::day_color;

    #[test]
    fn quiet_days_render_faint() {
        assert_eq!(day_color(0), "rgba(148, 163, 184, 0.12)");
    }

    #[test]
    fn busy_days_saturate_at_full_alpha() {
        assert_eq!(day_color(1), "rgba(59, 130, 246, 0.55)");
        assert_eq!(day_color(10), "rgba(59, 130, 246, 1.00)");
    }
}
