//! Access gate for the assistant: a persisted verification flag plus the
//! arithmetic challenge that sets it. The flag lives in shared storage and
//! may change out-of-band (another tab/process), so consumers poll it rather
//! than caching the answer.

use crate::storage::Storage;
use rand::Rng;
use std::time::Duration;

pub const VERIFIED_KEY: &str = "is_verified";
pub const VERIFIED_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);
/// Re-read cadence for out-of-band flag changes.
pub const VERIFY_POLL_INTERVAL: Duration = Duration::from_millis(500);

const REFERRAL_TAGS: &[&str] = &["linkedin", "recruiter"];

/// Referral tags that auto-open the verification prompt on first load.
pub fn is_referral_tag(tag: &str) -> bool {
    REFERRAL_TAGS.contains(&tag)
}

/// Launch-context referral slot for this shell. A web shell would feed the
/// `ref` query parameter instead; the gate only sees the tag.
pub fn referral_from_env() -> Option<String> {
    std::env::var("PORTFOLIO_REF").ok().filter(|s| !s.is_empty())
}

/// Gates are equal when they watch the same store, which is all a render
/// cycle needs to know.
#[derive(Clone, PartialEq)]
pub struct AccessGate {
    storage: Storage,
}

impl AccessGate {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// True iff the persisted flag is present, `"true"`, and unexpired.
    pub fn is_verified(&self) -> bool {
        self.storage
            .get(VERIFIED_KEY)
            .map(|value| value == "true")
            .unwrap_or(false)
    }

    /// Persist the flag with the fixed expiry.
    pub fn grant(&self) -> Result<(), String> {
        self.storage.set_with_ttl(VERIFIED_KEY, "true", VERIFIED_TTL)
    }

    /// Whether the prompt auto-opens. Computed once at mount; later referral
    /// changes are not re-evaluated.
    pub fn initial_prompt_visible(&self, referral: Option<&str>) -> bool {
        !self.is_verified() && referral.map(is_referral_tag).unwrap_or(false)
    }

    /// Check an answer against the challenge; a correct one persists the
    /// verified flag. The challenge pair itself is untouched either way;
    /// regeneration is the prompt's concern.
    pub fn verify(&self, challenge: &Challenge, answer: &str) -> bool {
        if !challenge.check_text(answer) {
            return false;
        }
        if let Err(err) = self.grant() {
            tracing::warn!("failed to persist verification flag: {}", err);
        }
        true
    }
}

/// Two fresh numbers per prompt, each in [1, 10].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Challenge {
    pub v1: u8,
    pub v2: u8,
}

impl Challenge {
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        Self {
            v1: rng.gen_range(1..=10),
            v2: rng.gen_range(1..=10),
        }
    }

    pub fn prompt(&self) -> String {
        format!("What is {} + {}?", self.v1, self.v2)
    }

    pub fn check(&self, answer: i64) -> bool {
        answer == i64::from(self.v1) + i64::from(self.v2)
    }

    /// Raw form input; anything that doesn't parse as an integer fails.
    pub fn check_text(&self, raw: &str) -> bool {
        raw.trim()
            .parse::<i64>()
            .map(|answer| self.check(answer))
            .unwrap_or(false)
    }
}
