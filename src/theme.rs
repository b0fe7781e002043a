//! Theme resolution: manual light/dark plus a time-driven auto mode that
//! fades the page background through a fixed sunset window.

use crate::storage::Storage;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use time::{OffsetDateTime, UtcOffset};

pub const THEME_KEY: &str = "portfolio-theme";

/// Sunset transition window, minutes from local midnight: [16:00, 17:00).
pub const SUNSET_START_MIN: u16 = 16 * 60;
pub const SUNSET_END_MIN: u16 = 17 * 60;
/// Before 06:00 auto mode stays dark.
pub const NIGHT_END_MIN: u16 = 6 * 60;

/// Sentinel factor outside the transition window.
pub const NO_TRANSITION: f32 = -1.0;

/// Cadence at which auto mode re-resolves without user action.
pub const RESOLVE_TICK: Duration = Duration::from_secs(60);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    Auto,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::Auto => "auto",
        }
    }

    pub fn from_str(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            "auto" => Some(ThemeMode::Auto),
            _ => None,
        }
    }
}

/// The concrete side actually applied; never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolvedTheme {
    Light,
    Dark,
}

impl ResolvedTheme {
    pub fn is_dark(&self) -> bool {
        matches!(self, ResolvedTheme::Dark)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResolvedTheme::Light => "light",
            ResolvedTheme::Dark => "dark",
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            ResolvedTheme::Light => ResolvedTheme::Dark,
            ResolvedTheme::Dark => ResolvedTheme::Light,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolution {
    pub theme: ResolvedTheme,
    pub sunset_factor: f32,
}

impl Resolution {
    fn fixed(theme: ResolvedTheme) -> Self {
        Self {
            theme,
            sunset_factor: NO_TRANSITION,
        }
    }

    pub fn in_transition(&self) -> bool {
        self.sunset_factor >= 0.0
    }
}

/// Map (mode, local minute of day, system preference) to a concrete theme.
/// Pure; the clock is supplied by the caller.
pub fn resolve(mode: ThemeMode, minute_of_day: u16, system_prefers_dark: bool) -> Resolution {
    match mode {
        ThemeMode::Light => Resolution::fixed(ResolvedTheme::Light),
        ThemeMode::Dark => Resolution::fixed(ResolvedTheme::Dark),
        ThemeMode::Auto => resolve_auto(minute_of_day, system_prefers_dark),
    }
}

fn resolve_auto(minute_of_day: u16, system_prefers_dark: bool) -> Resolution {
    if minute_of_day >= SUNSET_END_MIN || minute_of_day < NIGHT_END_MIN {
        return Resolution::fixed(ResolvedTheme::Dark);
    }
    if minute_of_day < SUNSET_START_MIN {
        let theme = if system_prefers_dark {
            ResolvedTheme::Dark
        } else {
            ResolvedTheme::Light
        };
        return Resolution::fixed(theme);
    }
    let factor = f32::from(minute_of_day - SUNSET_START_MIN)
        / f32::from(SUNSET_END_MIN - SUNSET_START_MIN);
    let theme = if factor > 0.5 {
        ResolvedTheme::Dark
    } else {
        ResolvedTheme::Light
    };
    Resolution {
        theme,
        sunset_factor: factor,
    }
}

pub fn lerp(start: f32, end: f32, factor: f32) -> f32 {
    start + (end - start) * factor
}

/// Interpolated page background for a factor in [0, 1], as the HSL triple
/// the stylesheet feeds into `hsl(var(--background))`. The endpoints are the
/// light and dark themes' own background values.
pub fn sunset_background(factor: f32) -> String {
    let h = lerp(210.0, 222.0, factor);
    let s = lerp(40.0, 47.0, factor);
    let l = lerp(98.0, 4.0, factor);
    format!("{} {}% {}%", h, s, l)
}

// ---------------
// Clock
// ---------------

/// Time source for the resolver. `Fixed` exists so the sunset window can be
/// exercised without waiting for an actual afternoon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Clock {
    Local,
    Fixed(u16),
}

impl Clock {
    /// Honors `PORTFOLIO_SIM_TIME=HH:MM`; anything unparseable falls back to
    /// the local wall clock.
    pub fn from_env() -> Self {
        match std::env::var("PORTFOLIO_SIM_TIME") {
            Ok(raw) => Self::parse_hhmm(&raw).unwrap_or(Clock::Local),
            Err(_) => Clock::Local,
        }
    }

    pub fn parse_hhmm(raw: &str) -> Option<Self> {
        let (hours, minutes) = raw.trim().split_once(':')?;
        let hours: u16 = hours.parse().ok()?;
        let minutes: u16 = minutes.parse().ok()?;
        if hours >= 24 || minutes >= 60 {
            return None;
        }
        Some(Clock::Fixed(hours * 60 + minutes))
    }

    pub fn minute_of_day(&self) -> u16 {
        match self {
            Clock::Fixed(minute) => *minute,
            Clock::Local => {
                let mut now = OffsetDateTime::now_utc();
                if let Ok(offset) = UtcOffset::current_local_offset() {
                    now = now.to_offset(offset);
                }
                u16::from(now.hour()) * 60 + u16::from(now.minute())
            }
        }
    }
}

/// The shell has no media query to ask, so the OS preference arrives as an
/// env hint instead.
pub fn system_prefers_dark_hint() -> bool {
    match std::env::var("PORTFOLIO_PREFERS_DARK") {
        Ok(raw) => matches!(
            raw.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
        Err(_) => false,
    }
}

// ---------------
// Store
// ---------------

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThemeSnapshot {
    pub mode: ThemeMode,
    pub theme: ResolvedTheme,
    pub sunset_factor: f32,
}

impl ThemeSnapshot {
    pub fn in_transition(&self) -> bool {
        self.sunset_factor >= 0.0
    }
}

/// Holds the selected mode and re-resolves on demand. Constructed once at
/// app start and passed by handle; consumers never reach for globals.
pub struct ThemeStore {
    storage: Storage,
    clock: Clock,
    mode: ThemeMode,
    loaded: bool,
    system_prefers_dark: bool,
}

impl ThemeStore {
    pub fn new(storage: Storage, clock: Clock) -> Self {
        Self {
            storage,
            clock,
            mode: ThemeMode::default(),
            loaded: false,
            system_prefers_dark: false,
        }
    }

    /// Read the persisted mode. Until this runs every snapshot reports dark
    /// with no transition, so nothing flashes before state is available.
    pub fn load(&mut self) {
        if let Some(raw) = self.storage.get(THEME_KEY) {
            if let Some(mode) = ThemeMode::from_str(&raw) {
                self.mode = mode;
            }
        }
        self.loaded = true;
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.mode = mode;
        if let Err(err) = self.storage.set(THEME_KEY, mode.as_str()) {
            tracing::warn!("failed to persist theme mode: {}", err);
        }
    }

    pub fn set_system_preference(&mut self, prefers_dark: bool) {
        self.system_prefers_dark = prefers_dark;
    }

    pub fn snapshot(&self) -> ThemeSnapshot {
        if !self.loaded {
            return ThemeSnapshot {
                mode: self.mode,
                theme: ResolvedTheme::Dark,
                sunset_factor: NO_TRANSITION,
            };
        }
        let resolution = resolve(
            self.mode,
            self.clock.minute_of_day(),
            self.system_prefers_dark,
        );
        ThemeSnapshot {
            mode: self.mode,
            theme: resolution.theme,
            sunset_factor: resolution.sunset_factor,
        }
    }
}

// ---------------
// Switcher gestures
// ---------------

/// Mode after a short tap: flip to the opposite of whichever side is
/// currently showing (auto counts as its resolved side).
pub fn tap_mode(mode: ThemeMode, resolved: ResolvedTheme) -> ThemeMode {
    let current = match mode {
        ThemeMode::Light => ResolvedTheme::Light,
        ThemeMode::Dark => ResolvedTheme::Dark,
        ThemeMode::Auto => resolved,
    };
    match current.opposite() {
        ResolvedTheme::Light => ThemeMode::Light,
        ResolvedTheme::Dark => ThemeMode::Dark,
    }
}

/// Mode after a long press: into auto, or out of auto onto the side it was
/// showing.
pub fn long_press_mode(mode: ThemeMode, resolved: ResolvedTheme) -> ThemeMode {
    match mode {
        ThemeMode::Auto => match resolved {
            ResolvedTheme::Light => ThemeMode::Light,
            ResolvedTheme::Dark => ThemeMode::Dark,
        },
        _ => ThemeMode::Auto,
    }
}

// ---------------
// Stylesheets
// ---------------

pub struct ThemeDefinition {
    pub css: &'static str,
    pub switcher_class: &'static str,
}

pub fn theme_definition(theme: ResolvedTheme) -> ThemeDefinition {
    match theme {
        ResolvedTheme::Dark => ThemeDefinition {
            css: DARK_THEME,
            switcher_class: "switcher switcher-dark",
        },
        ResolvedTheme::Light => ThemeDefinition {
            css: LIGHT_THEME,
            switcher_class: "switcher switcher-light",
        },
    }
}

const DARK_THEME: &str = r#"
:root {
    --background: 222 47% 4%;
    --color-bg-card: rgba(15, 23, 42, 0.6);
    --color-bg-overlay: rgba(2, 6, 23, 0.85);
    --color-text-primary: #e2e8f0;
    --color-text-muted: #94a3b8;
    --color-border: rgba(255, 255, 255, 0.1);
    --color-primary: #3b82f6;
    --color-primary-soft: rgba(59, 130, 246, 0.15);
    --color-surface-muted: #1e293b;
    --color-input-bg: #0f172a;
    --color-chat-user-bg: #334155;
    --color-chat-user-text: #f8fafc;
    --color-chat-assistant-bg: #1e293b;
    --color-chat-assistant-text: #e2e8f0;
    --color-error: #f87171;
    --color-badge: #f59e0b;
}
body { background: hsl(var(--background)); color: var(--color-text-primary); }
.glow-top { background: radial-gradient(ellipse at top, rgba(30, 58, 138, 0.25), transparent 65%); }
.glow-corner { background: rgba(88, 28, 135, 0.12); }
.composer input { background: var(--color-input-bg); color: var(--color-text-primary); border-color: var(--color-border); }
.composer input:focus { border-color: var(--color-primary); }
"#;

const LIGHT_THEME: &str = r#"
:root {
    --background: 210 40% 98%;
    --color-bg-card: rgba(255, 255, 255, 0.75);
    --color-bg-overlay: rgba(248, 250, 252, 0.92);
    --color-text-primary: #0f172a;
    --color-text-muted: #475569;
    --color-border: rgba(15, 23, 42, 0.12);
    --color-primary: #2563eb;
    --color-primary-soft: rgba(37, 99, 235, 0.1);
    --color-surface-muted: #e2e8f0;
    --color-input-bg: #ffffff;
    --color-chat-user-bg: #e2e8f0;
    --color-chat-user-text: #0f172a;
    --color-chat-assistant-bg: #f1f5f9;
    --color-chat-assistant-text: #1e293b;
    --color-error: #dc2626;
    --color-badge: #b45309;
}
body { background: hsl(var(--background)); color: var(--color-text-primary); }
.glow-top { background: radial-gradient(ellipse at top, rgba(191, 219, 254, 0.5), transparent 65%); }
.glow-corner { background: rgba(191, 219, 254, 0.25); }
.composer input { background: var(--color-input-bg); color: var(--color-text-primary); border-color: var(--color-border); }
.composer input:focus { border-color: var(--color-primary); }
"#;
