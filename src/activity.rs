//! GitHub contribution feed behind the activity pulse panel.

use anyhow::Result;
use serde::Deserialize;

pub const FEED_URL: &str = "https://github-contributions-api.deno.dev";
/// Weeks shown in the compact pulse view.
pub const PULSE_WEEKS: usize = 15;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContributionDay {
    pub date: String,
    #[serde(rename = "contributionCount")]
    pub contribution_count: u32,
    #[serde(rename = "contributionLevel")]
    pub contribution_level: String,
    pub color: String,
}

/// Weeks of days, oldest first, exactly as the feed delivers them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContributionFeed {
    #[serde(default)]
    pub contributions: Vec<Vec<ContributionDay>>,
}

impl ContributionFeed {
    pub fn recent_weeks(&self) -> &[Vec<ContributionDay>] {
        let start = self.contributions.len().saturating_sub(PULSE_WEEKS);
        &self.contributions[start..]
    }

    /// Trailing day of the trailing week.
    pub fn commits_today(&self) -> u32 {
        self.contributions
            .last()
            .and_then(|week| week.last())
            .map(|day| day.contribution_count)
            .unwrap_or(0)
    }
}

/// Username is the tail of the contact github URL.
pub fn github_username() -> &'static str {
    crate::data::DATA
        .contact
        .github
        .rsplit('/')
        .next()
        .filter(|tail| !tail.is_empty())
        .unwrap_or("adityadas8888")
}

pub async fn fetch_contributions(username: &str) -> Result<ContributionFeed> {
    let url = format!("{}/{}.json", FEED_URL, username);
    let res = reqwest::get(&url).await?;
    let status = res.status();
    if !status.is_success() {
        return Err(anyhow::anyhow!("contribution feed error {status}"));
    }
    Ok(res.json::<ContributionFeed>().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(date: &str, count: u32) -> ContributionDay {
        ContributionDay {
            date: date.to_string(),
            contribution_count: count,
            contribution_level: "NONE".to_string(),
            color: "#ebedf0".to_string(),
        }
    }

    #[test]
    fn feed_parses_the_wire_field_names() {
        let body = r##"{
            "contributions": [
                [
                    {"date": "2026-08-17", "contributionCount": 3, "contributionLevel": "FIRST_QUARTILE", "color": "#9be9a8"},
                    {"date": "2026-08-18", "contributionCount": 0, "contributionLevel": "NONE", "color": "#ebedf0"}
                ]
            ]
        }"##;
        let feed: ContributionFeed = serde_json::from_str(body).unwrap();
        assert_eq!(feed.contributions.len(), 1);
        assert_eq!(feed.contributions[0][0].contribution_count, 3);
        assert_eq!(feed.contributions[0][1].date, "2026-08-18");
    }

    #[test]
    fn missing_contributions_key_parses_empty() {
        let feed: ContributionFeed = serde_json::from_str("{}").unwrap();
        assert!(feed.contributions.is_empty());
        assert_eq!(feed.commits_today(), 0);
        assert!(feed.recent_weeks().is_empty());
    }

    #[test]
    fn recent_weeks_keeps_only_the_tail() {
        let feed = ContributionFeed {
            contributions: (0..20)
                .map(|week| vec![day(&format!("2026-w{week}"), week)])
                .collect(),
        };
        let recent = feed.recent_weeks();
        assert_eq!(recent.len(), PULSE_WEEKS);
        assert_eq!(recent[0][0].contribution_count, 5);
        assert_eq!(recent[PULSE_WEEKS - 1][0].contribution_count, 19);
    }

    #[test]
    fn short_histories_are_returned_whole() {
        let feed = ContributionFeed {
            contributions: vec![vec![day("2026-08-18", 1)], vec![day("2026-08-25", 2)]],
        };
        assert_eq!(feed.recent_weeks().len(), 2);
    }

    #[test]
    fn commits_today_reads_the_trailing_day() {
        let feed = ContributionFeed {
            contributions: vec![
                vec![day("2026-08-17", 9)],
                vec![day("2026-08-24", 4), day("2026-08-25", 7)],
            ],
        };
        assert_eq!(feed.commits_today(), 7);
    }

    #[test]
    fn username_derives_from_the_contact_url() {
        assert_eq!(github_username(), "adityadas8888");
    }
}
