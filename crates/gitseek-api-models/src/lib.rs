#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared DTOs for the GitHub user directory.
//!
//! Only the fields the search widget renders are modelled; unknown fields in
//! GitHub payloads are ignored so additions upstream never break decoding.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Full profile returned by `GET /users/{login}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    /// Unique account handle.
    pub login: String,
    /// Numeric account identifier.
    pub id: u64,
    /// Avatar image URL.
    pub avatar_url: String,
    /// Public profile page URL.
    pub html_url: String,
    #[serde(default)]
    /// Display name, when the user set one.
    pub name: Option<String>,
    #[serde(default)]
    /// Free-form biography.
    pub bio: Option<String>,
    #[serde(default)]
    /// Company affiliation.
    pub company: Option<String>,
    #[serde(default)]
    /// Self-reported location.
    pub location: Option<String>,
    #[serde(default)]
    /// Personal website; GitHub returns an empty string when unset.
    pub blog: Option<String>,
    #[serde(default)]
    /// Count of public repositories.
    pub public_repos: u32,
    #[serde(default)]
    /// Follower count.
    pub followers: u32,
    #[serde(default)]
    /// Following count.
    pub following: u32,
    #[serde(default)]
    /// Account creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
}

/// Compact entry returned by the user search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSummary {
    /// Unique account handle.
    pub login: String,
    /// Numeric account identifier.
    pub id: u64,
    /// Avatar image URL.
    pub avatar_url: String,
    #[serde(default)]
    /// Public profile page URL.
    pub html_url: String,
}

/// Envelope returned by `GET /search/users`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSearchPage {
    /// Total matches reported by GitHub (may exceed `items.len()`).
    pub total_count: u64,
    #[serde(default)]
    /// Whether GitHub timed out before finishing the query.
    pub incomplete_results: bool,
    /// Ordered matches.
    pub items: Vec<UserSummary>,
}

/// Error document GitHub attaches to non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GitHubErrorBody {
    /// Human-readable message (e.g. `Not Found`).
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Link to the relevant API documentation.
    pub documentation_url: Option<String>,
}

impl From<UserProfile> for UserSummary {
    fn from(profile: UserProfile) -> Self {
        Self {
            login: profile.login,
            id: profile.id,
            avatar_url: profile.avatar_url,
            html_url: profile.html_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OCTOCAT_PROFILE_JSON: &str = r#"{
        "login": "octocat",
        "id": 583231,
        "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
        "html_url": "https://github.com/octocat",
        "type": "User",
        "name": "The Octocat",
        "company": "@github",
        "blog": "https://github.blog",
        "location": "San Francisco",
        "bio": null,
        "public_repos": 8,
        "followers": 9000,
        "following": 9,
        "created_at": "2011-01-25T18:44:36Z"
    }"#;

    const SEARCH_OCTO_JSON: &str = r#"{
        "total_count": 412,
        "incomplete_results": false,
        "items": [
            {"login": "octocat", "id": 583231, "avatar_url": "https://a/1", "html_url": "https://github.com/octocat", "score": 1.0},
            {"login": "octo-org", "id": 6811672, "avatar_url": "https://a/2", "html_url": "https://github.com/octo-org", "score": 1.0},
            {"login": "octokit", "id": 3430433, "avatar_url": "https://a/3", "html_url": "https://github.com/octokit", "score": 1.0}
        ]
    }"#;

    const NOT_FOUND_BODY: &str = r#"{"message":"Not Found","documentation_url":"https://docs.github.com/rest/users/users#get-a-user"}"#;

    #[test]
    fn profile_decodes_github_payload() -> anyhow::Result<()> {
        let profile: UserProfile = serde_json::from_str(OCTOCAT_PROFILE_JSON)?;
        assert_eq!(profile.login, "octocat");
        assert_eq!(profile.name.as_deref(), Some("The Octocat"));
        assert_eq!(profile.followers, 9_000);
        assert_eq!(
            profile.created_at.map(|at| at.to_rfc3339()),
            Some("2011-01-25T18:44:36+00:00".to_string())
        );
        Ok(())
    }

    #[test]
    fn profile_tolerates_null_optional_fields() -> anyhow::Result<()> {
        let profile: UserProfile = serde_json::from_str(
            r#"{"login":"ghost","id":10137,"avatar_url":"https://a/ghost","html_url":"https://github.com/ghost","name":null,"bio":null}"#,
        )?;
        assert_eq!(profile.name, None);
        assert_eq!(profile.public_repos, 0);
        assert_eq!(profile.created_at, None);
        Ok(())
    }

    #[test]
    fn search_page_keeps_server_order() -> anyhow::Result<()> {
        let page: UserSearchPage = serde_json::from_str(SEARCH_OCTO_JSON)?;
        let logins: Vec<&str> = page.items.iter().map(|item| item.login.as_str()).collect();
        assert_eq!(logins, ["octocat", "octo-org", "octokit"]);
        assert!(!page.incomplete_results);
        Ok(())
    }

    #[test]
    fn error_body_decodes_message() -> anyhow::Result<()> {
        let body: GitHubErrorBody = serde_json::from_str(NOT_FOUND_BODY)?;
        assert_eq!(body.message, "Not Found");
        assert!(body.documentation_url.is_some());
        Ok(())
    }

    #[test]
    fn summary_from_profile_keeps_identity() -> anyhow::Result<()> {
        let profile: UserProfile = serde_json::from_str(OCTOCAT_PROFILE_JSON)?;
        let summary = UserSummary::from(profile.clone());
        assert_eq!(summary.login, profile.login);
        assert_eq!(summary.avatar_url, profile.avatar_url);
        Ok(())
    }
}
