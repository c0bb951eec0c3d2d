//! DTO builders with deterministic, login-derived field values.

use gitseek_api_models::{UserProfile, UserSummary};

/// Build a profile for `login` with predictable counts and URLs.
#[must_use]
pub fn profile(login: &str) -> UserProfile {
    UserProfile {
        login: login.to_string(),
        id: fake_id(login),
        avatar_url: format!("https://avatars.example.test/{login}"),
        html_url: format!("https://github.com/{login}"),
        name: None,
        bio: None,
        company: None,
        location: None,
        blog: None,
        public_repos: 3,
        followers: 10,
        following: 2,
        created_at: None,
    }
}

/// Build a search summary for `login`.
#[must_use]
pub fn summary(login: &str) -> UserSummary {
    UserSummary::from(profile(login))
}

/// Build summaries for each login, preserving order.
#[must_use]
pub fn summaries(logins: &[&str]) -> Vec<UserSummary> {
    logins.iter().map(|login| summary(login)).collect()
}

fn fake_id(login: &str) -> u64 {
    login
        .bytes()
        .fold(7_u64, |acc, byte| acc.wrapping_mul(31).wrapping_add(u64::from(byte)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_stable_per_login() {
        assert_eq!(profile("octocat").id, profile("octocat").id);
        assert_ne!(profile("octocat").id, profile("torvalds").id);
    }

    #[test]
    fn summaries_keep_order() {
        let logins: Vec<String> = summaries(&["b", "a", "c"])
            .into_iter()
            .map(|item| item.login)
            .collect();
        assert_eq!(logins, ["b", "a", "c"]);
    }
}
