//! Remote user directory contract and GitHub response mapping.
//!
//! # Design
//! - The widget only sees [`UserDirectory`]; transports live behind it.
//! - Status classification and body decoding are pure so they are tested
//!   natively; the browser client only moves bytes.

use async_trait::async_trait;
use gitseek_api_models::{GitHubErrorBody, UserProfile, UserSearchPage, UserSummary};
use thiserror::Error;

/// Failure surfaced by a directory lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    /// No account exists with the requested login.
    #[error("User \"{login}\" not found")]
    NotFound {
        /// Login that was looked up.
        login: String,
    },
    /// GitHub refused the request because the rate limit is exhausted.
    #[error("GitHub API rate limit exceeded, try again later")]
    RateLimited,
    /// Any other non-success status.
    #[error("GitHub API responded with status {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Message from the error body, or the status text.
        message: String,
    },
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),
    /// The response body did not match the expected shape.
    #[error("Unexpected response from GitHub: {0}")]
    Decode(String),
}

impl DirectoryError {
    /// Classify a non-success response for `login`.
    #[must_use]
    pub fn from_status(status: u16, login: &str, body: &str) -> Self {
        let message = serde_json::from_str::<GitHubErrorBody>(body)
            .map(|body| body.message)
            .unwrap_or_default();
        match status {
            404 => Self::NotFound {
                login: login.to_string(),
            },
            429 => Self::RateLimited,
            403 if message.to_ascii_lowercase().contains("rate limit") => Self::RateLimited,
            _ => Self::Http {
                status,
                message: if message.is_empty() {
                    "request failed".to_string()
                } else {
                    message
                },
            },
        }
    }
}

/// Remote lookup of GitHub-style user accounts.
#[async_trait(?Send)]
pub trait UserDirectory {
    /// Fetch the full profile for an exact login.
    ///
    /// # Errors
    /// Returns [`DirectoryError::NotFound`] for unknown logins and other
    /// variants for transport or decoding failures.
    async fn fetch_user(&self, login: &str) -> Result<UserProfile, DirectoryError>;

    /// Search accounts matching `prefix`; an empty vector means no match.
    ///
    /// # Errors
    /// Returns [`DirectoryError`] for transport or decoding failures.
    async fn search_users(&self, prefix: &str) -> Result<Vec<UserSummary>, DirectoryError>;
}

/// Path for the exact-profile endpoint.
#[must_use]
pub fn user_path(login: &str) -> String {
    format!("/users/{}", urlencoding::encode(login))
}

/// Path for the user search endpoint.
#[must_use]
pub fn search_path(prefix: &str, per_page: usize) -> String {
    format!(
        "/search/users?q={}&per_page={per_page}",
        urlencoding::encode(prefix)
    )
}

/// Join a base URL and an absolute path without doubling slashes.
#[must_use]
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// Map a `/users/{login}` response into a profile.
///
/// # Errors
/// Returns the classified [`DirectoryError`] for non-2xx statuses, or
/// [`DirectoryError::Decode`] when the body is not a profile.
pub fn decode_user_response(
    status: u16,
    login: &str,
    body: &str,
) -> Result<UserProfile, DirectoryError> {
    if !(200..300).contains(&status) {
        return Err(DirectoryError::from_status(status, login, body));
    }
    serde_json::from_str(body).map_err(|err| DirectoryError::Decode(err.to_string()))
}

/// Map a `/search/users` response into ordered summaries.
///
/// # Errors
/// Returns the classified [`DirectoryError`] for non-2xx statuses, or
/// [`DirectoryError::Decode`] when the body is not a search page.
pub fn decode_search_response(
    status: u16,
    prefix: &str,
    body: &str,
) -> Result<Vec<UserSummary>, DirectoryError> {
    if !(200..300).contains(&status) {
        return Err(DirectoryError::from_status(status, prefix, body));
    }
    serde_json::from_str::<UserSearchPage>(body)
        .map(|page| page.items)
        .map_err(|err| DirectoryError::Decode(err.to_string()))
}
