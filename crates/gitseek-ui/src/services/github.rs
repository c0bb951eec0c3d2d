//! GitHub REST client for the user directory.

use crate::core::directory::{
    DirectoryError, UserDirectory, decode_search_response, decode_user_response, join_url,
    search_path, user_path,
};
use async_trait::async_trait;
use gitseek_api_models::{UserProfile, UserSummary};
use gloo_net::http::Request;

const ACCEPT: &str = "application/vnd.github+json";
const API_VERSION: &str = "2022-11-28";

#[derive(Clone, Debug)]
pub(crate) struct GitHubDirectory {
    pub base_url: String,
    pub per_page: usize,
}

impl GitHubDirectory {
    pub(crate) fn new(base_url: impl Into<String>, per_page: usize) -> Self {
        Self {
            base_url: base_url.into(),
            per_page,
        }
    }

    async fn get_text(&self, path: &str) -> Result<(u16, String), DirectoryError> {
        let response = Request::get(&join_url(&self.base_url, path))
            .header("Accept", ACCEPT)
            .header("X-GitHub-Api-Version", API_VERSION)
            .send()
            .await
            .map_err(|err| DirectoryError::Network(err.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| DirectoryError::Network(err.to_string()))?;
        Ok((status, body))
    }
}

#[async_trait(?Send)]
impl UserDirectory for GitHubDirectory {
    async fn fetch_user(&self, login: &str) -> Result<UserProfile, DirectoryError> {
        let (status, body) = self.get_text(&user_path(login)).await?;
        decode_user_response(status, login, &body)
    }

    async fn search_users(&self, prefix: &str) -> Result<Vec<UserSummary>, DirectoryError> {
        let (status, body) = self.get_text(&search_path(prefix, self.per_page)).await?;
        decode_search_response(status, prefix, &body)
    }
}
