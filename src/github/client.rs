use crate::model::Result;
use serde::de::DeserializeOwned;
use std::env;

pub const GITHUB_API_URL: &str = "https://api.github.com";

const USER_AGENT: &str = concat!("docathon-metrics/", env!("CARGO_PKG_VERSION"));

/// Read the API token from the named environment variable.
pub fn token_from_env(var_name: &str) -> Result<String> {
    match env::var(var_name) {
        Ok(token) if !token.trim().is_empty() => Ok(token),
        _ => Err(format!("No API token in environment variable '{var_name}'").into()),
    }
}

/// Token-authenticated client for the hosting API's listing endpoints.
/// Pagination is bounded by `per_page` items per call and `max_pages`
/// calls per listing.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
    per_page: u32,
    max_pages: u32,
}

impl GithubClient {
    pub fn new(
        base_url: impl ToString,
        token: impl ToString,
        per_page: u32,
        max_pages: u32,
    ) -> Result<Self> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            base_url: base_url.to_string(),
            token: token.to_string(),
            per_page: per_page.max(1),
            max_pages: max_pages.max(1),
        })
    }

    pub fn from_env(auth_var: &str, per_page: u32, max_pages: u32) -> Result<Self> {
        let token = token_from_env(auth_var)?;
        Self::new(GITHUB_API_URL, token, per_page, max_pages)
    }

    /// Walk a listing endpoint page by page until a short page, an empty
    /// page, or the page cap.
    pub(super) async fn list<T>(&self, path: &str, query: &[(&str, String)]) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path);
        let mut collected = Vec::new();
        for page in 1..=self.max_pages {
            let batch: Vec<T> = self
                .http
                .get(&url)
                .header("Authorization", format!("token {}", self.token))
                .header("Accept", "application/vnd.github+json")
                .query(query)
                .query(&[
                    ("per_page", self.per_page.to_string()),
                    ("page", page.to_string()),
                ])
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;
            let last_page = batch.len() < self.per_page as usize;
            collected.extend(batch);
            if last_page {
                break;
            }
        }
        Ok(collected)
    }
}
