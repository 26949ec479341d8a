use crate::contact::is_plausible_email;
use crate::logging::LogLevel;
use std::time::Duration;

pub const DEFAULT_NAV_PROBE_OFFSET: f64 = 100.0;
pub const DEFAULT_LOADING_DURATION_MS: u64 = 2_000;
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;
pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

pub const NAV_PROBE_OFFSET_BOUNDS: (f64, f64) = (0.0, 1_000.0);
pub const LOADING_DURATION_MS_BOUNDS: (u64, u64) = (200, 20_000);
pub const REVEAL_THRESHOLD_BOUNDS: (f64, f64) = (0.0, 1.0);

pub const NAV_PROBE_OFFSET_KEY: &str = "nav-probe-offset";
pub const LOADING_DURATION_MS_KEY: &str = "loading-duration-ms";
pub const REVEAL_THRESHOLD_KEY: &str = "reveal-threshold";
pub const LOG_LEVEL_KEY: &str = "log-level";
pub const CONTACT_EMAIL_KEY: &str = "contact-email";

/// Tunables for the browser side of the site.
#[derive(Clone, PartialEq, Debug)]
pub struct SiteConfig {
    /// Distance below the top edge of the viewport used to decide which
    /// section the reader is looking at.
    pub nav_probe_offset: f64,
    pub loading_duration: Duration,
    pub reveal_threshold: f64,
    pub log_level: LogLevel,
    /// Where contact-form mail goes. Unset means the page offers no email
    /// channel at all.
    pub contact_email: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            nav_probe_offset: DEFAULT_NAV_PROBE_OFFSET,
            loading_duration: Duration::from_millis(DEFAULT_LOADING_DURATION_MS),
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            log_level: DEFAULT_LOG_LEVEL,
            contact_email: None,
        }
    }
}

impl SiteConfig {
    /// Builds a config from a key lookup. Keys are kebab-case; missing,
    /// malformed or out-of-range values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let nav_probe_offset = parse_f64_with_bounds(
            lookup(NAV_PROBE_OFFSET_KEY),
            DEFAULT_NAV_PROBE_OFFSET,
            NAV_PROBE_OFFSET_BOUNDS,
        );
        let loading_duration_ms = parse_u64_with_bounds(
            lookup(LOADING_DURATION_MS_KEY),
            DEFAULT_LOADING_DURATION_MS,
            LOADING_DURATION_MS_BOUNDS,
        );
        let reveal_threshold = parse_f64_with_bounds(
            lookup(REVEAL_THRESHOLD_KEY),
            DEFAULT_REVEAL_THRESHOLD,
            REVEAL_THRESHOLD_BOUNDS,
        );
        let log_level = parse_log_level(lookup(LOG_LEVEL_KEY), DEFAULT_LOG_LEVEL);
        let contact_email = parse_non_empty_string(lookup(CONTACT_EMAIL_KEY))
            .filter(|value| is_plausible_email(value));

        Self {
            nav_probe_offset,
            loading_duration: Duration::from_millis(loading_duration_ms),
            reveal_threshold,
            log_level,
            contact_email,
        }
    }
}

pub fn parse_u64_with_bounds(raw: Option<String>, default: u64, bounds: (u64, u64)) -> u64 {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

pub fn parse_f64_with_bounds(raw: Option<String>, default: f64, bounds: (f64, f64)) -> f64 {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

pub fn parse_non_empty_string(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub fn parse_log_level(raw: Option<String>, default: LogLevel) -> LogLevel {
    parse_non_empty_string(raw)
        .and_then(|value| LogLevel::parse(&value))
        .unwrap_or(default)
}
