//! Pure helpers for the search widget.
//!
//! # Design
//! - Gating, keyboard mapping and card formatting live here so they are
//!   testable without a DOM.

use chrono::{DateTime, Utc};
use gitseek_api_models::UserProfile;

/// Trimmed suggestion key when it is long enough to query.
#[must_use]
pub fn suggestion_key(text: &str, min_chars: usize) -> Option<&str> {
    let trimmed = text.trim();
    (trimmed.chars().count() >= min_chars).then_some(trimmed)
}

/// Whether typing `text` should reveal the suggestion list.
#[must_use]
pub fn should_show_suggestions(text: &str, min_chars: usize) -> bool {
    suggestion_key(text, min_chars).is_some()
}

/// Keyboard intents handled by the suggestion list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SuggestionKey {
    /// Highlight the next entry.
    Next,
    /// Highlight the previous entry.
    Prev,
    /// Hide the list.
    Dismiss,
    /// Pick the highlighted entry, if any.
    Accept,
}

/// Map a `KeyboardEvent.key` value to a suggestion intent.
#[must_use]
pub fn interpret_key(key: &str) -> Option<SuggestionKey> {
    match key {
        "ArrowDown" => Some(SuggestionKey::Next),
        "ArrowUp" => Some(SuggestionKey::Prev),
        "Escape" => Some(SuggestionKey::Dismiss),
        "Enter" => Some(SuggestionKey::Accept),
        _ => None,
    }
}

/// Move a highlight index through `len` entries, wrapping at both ends.
#[must_use]
pub const fn step_highlight(current: Option<usize>, len: usize, forward: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match (current, forward) {
        (None, true) => Some(0),
        (None, false) => Some(len - 1),
        (Some(index), true) => Some((index + 1) % len),
        (Some(0), false) => Some(len - 1),
        (Some(index), false) => Some(index - 1),
    }
}

/// Name shown on the card: display name when set, login otherwise.
#[must_use]
pub fn display_name(profile: &UserProfile) -> &str {
    profile
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(profile.login.as_str())
}

/// Absolute link for the profile's blog field; GitHub stores it free-form.
#[must_use]
pub fn blog_href(blog: Option<&str>) -> Option<String> {
    let blog = blog?.trim();
    if blog.is_empty() {
        return None;
    }
    if blog.starts_with("http://") || blog.starts_with("https://") {
        Some(blog.to_string())
    } else {
        Some(format!("https://{blog}"))
    }
}

/// `Joined Jan 2011` style label.
#[must_use]
pub fn joined_label(created_at: Option<DateTime<Utc>>) -> Option<String> {
    created_at.map(|at| format!("Joined {}", at.format("%b %Y")))
}

/// Compact count (`950`, `1.2k`, `3.4m`).
#[must_use]
pub fn compact_count(value: u32) -> String {
    match value {
        0..=999 => value.to_string(),
        1_000..=999_999 => trim_decimal(f64::from(value) / 1_000.0, "k"),
        _ => trim_decimal(f64::from(value) / 1_000_000.0, "m"),
    }
}

fn trim_decimal(value: f64, suffix: &str) -> String {
    let rendered = format!("{value:.1}");
    let rendered = rendered.strip_suffix(".0").unwrap_or(rendered.as_str());
    format!("{rendered}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use gitseek_test_support::fixtures::profile;

    #[test]
    fn suggestions_require_more_than_one_trimmed_char() {
        assert_eq!(suggestion_key("o", 2), None);
        assert_eq!(suggestion_key("  o  ", 2), None);
        assert_eq!(suggestion_key(" oc ", 2), Some("oc"));
        assert!(!should_show_suggestions("", 2));
        assert!(should_show_suggestions("octo", 2));
    }

    #[test]
    fn keys_map_to_intents() {
        assert_eq!(interpret_key("ArrowDown"), Some(SuggestionKey::Next));
        assert_eq!(interpret_key("ArrowUp"), Some(SuggestionKey::Prev));
        assert_eq!(interpret_key("Escape"), Some(SuggestionKey::Dismiss));
        assert_eq!(interpret_key("Enter"), Some(SuggestionKey::Accept));
        assert_eq!(interpret_key("a"), None);
    }

    #[test]
    fn highlight_wraps_both_ways() {
        assert_eq!(step_highlight(None, 0, true), None);
        assert_eq!(step_highlight(None, 3, true), Some(0));
        assert_eq!(step_highlight(None, 3, false), Some(2));
        assert_eq!(step_highlight(Some(2), 3, true), Some(0));
        assert_eq!(step_highlight(Some(0), 3, false), Some(2));
        assert_eq!(step_highlight(Some(1), 3, false), Some(0));
    }

    #[test]
    fn display_name_falls_back_to_login() {
        let mut user = profile("octocat");
        assert_eq!(display_name(&user), "octocat");
        user.name = Some("  ".into());
        assert_eq!(display_name(&user), "octocat");
        user.name = Some("The Octocat".into());
        assert_eq!(display_name(&user), "The Octocat");
    }

    #[test]
    fn blog_links_get_a_scheme() {
        assert_eq!(blog_href(None), None);
        assert_eq!(blog_href(Some("")), None);
        assert_eq!(blog_href(Some("github.blog")).as_deref(), Some("https://github.blog"));
        assert_eq!(blog_href(Some("http://x.dev")).as_deref(), Some("http://x.dev"));
    }

    #[test]
    fn joined_label_uses_month_and_year() {
        let at = Utc.with_ymd_and_hms(2011, 1, 25, 18, 44, 36).single();
        assert_eq!(joined_label(at).as_deref(), Some("Joined Jan 2011"));
        assert_eq!(joined_label(None), None);
    }

    #[test]
    fn counts_are_compacted() {
        assert_eq!(compact_count(950), "950");
        assert_eq!(compact_count(9_000), "9k");
        assert_eq!(compact_count(1_240), "1.2k");
        assert_eq!(compact_count(3_400_000), "3.4m");
    }
}
