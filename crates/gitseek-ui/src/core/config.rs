//! Widget configuration and page-level overrides.
//!
//! # Design
//! - Defaults reproduce the stock widget (GitHub API, 300ms debounce, 5 recents).
//! - Overrides arrive as raw strings from `<meta name="gitseek:*">` tags; bad
//!   values fall back to the default and are reported as warnings.

use crate::core::query_cache::DEFAULT_STALE_TIME_MS;
use crate::core::recents::DEFAULT_RECENTS_CAPACITY;

/// Public GitHub REST endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
/// Quiescence window before a suggestion lookup.
pub const DEFAULT_DEBOUNCE_MS: u32 = 300;
/// Minimum trimmed length that enables suggestion lookups.
pub const DEFAULT_MIN_SUGGESTION_CHARS: usize = 2;
/// Storage key for the recents list.
pub const DEFAULT_RECENTS_KEY: &str = "recentUsers";
/// Suggestions rendered below the input.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Runtime configuration for the search widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Base URL of the user directory API.
    pub api_base_url: String,
    /// Debounce window for suggestion lookups, in milliseconds.
    pub debounce_ms: u32,
    /// Trimmed query length required before suggestions are fetched.
    pub min_suggestion_chars: usize,
    /// Maximum remembered searches.
    pub recents_capacity: usize,
    /// Storage key for remembered searches.
    pub recents_key: String,
    /// Maximum suggestions requested and rendered.
    pub suggestion_limit: usize,
    /// Freshness window for cached lookups, in milliseconds.
    pub stale_time_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            min_suggestion_chars: DEFAULT_MIN_SUGGESTION_CHARS,
            recents_capacity: DEFAULT_RECENTS_CAPACITY,
            recents_key: DEFAULT_RECENTS_KEY.to_string(),
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            stale_time_ms: DEFAULT_STALE_TIME_MS,
        }
    }
}

/// Raw override values collected from the host page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// `gitseek:api-base`
    pub api_base_url: Option<String>,
    /// `gitseek:debounce-ms`
    pub debounce_ms: Option<String>,
    /// `gitseek:recents-key`
    pub recents_key: Option<String>,
    /// `gitseek:recents-limit`
    pub recents_capacity: Option<String>,
}

/// Override that was ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Override name.
    pub field: &'static str,
    /// Rejected raw value.
    pub value: String,
    /// Why it was rejected.
    pub reason: &'static str,
}

impl SearchConfig {
    /// Apply page overrides on top of `self`.
    #[must_use]
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> (Self, Vec<ConfigWarning>) {
        let mut warnings = Vec::new();

        if let Some(raw) = overrides.api_base_url {
            let trimmed = raw.trim();
            if trimmed.starts_with("https://") || trimmed.starts_with("http://") {
                self.api_base_url = trimmed.trim_end_matches('/').to_string();
            } else {
                warnings.push(ConfigWarning {
                    field: "api-base",
                    value: raw,
                    reason: "must be an absolute http(s) URL",
                });
            }
        }

        if let Some(raw) = overrides.debounce_ms {
            match raw.trim().parse::<u32>() {
                Ok(value) if value <= 5_000 => self.debounce_ms = value,
                _ => warnings.push(ConfigWarning {
                    field: "debounce-ms",
                    value: raw,
                    reason: "must be an integer between 0 and 5000",
                }),
            }
        }

        if let Some(raw) = overrides.recents_key {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                warnings.push(ConfigWarning {
                    field: "recents-key",
                    value: raw,
                    reason: "must not be empty",
                });
            } else {
                self.recents_key = trimmed.to_string();
            }
        }

        if let Some(raw) = overrides.recents_capacity {
            match raw.trim().parse::<usize>() {
                Ok(value) if (1..=50).contains(&value) => self.recents_capacity = value,
                _ => warnings.push(ConfigWarning {
                    field: "recents-limit",
                    value: raw,
                    reason: "must be an integer between 1 and 50",
                }),
            }
        }

        (self, warnings)
    }
}
