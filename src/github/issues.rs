use crate::github::GithubClient;
use crate::model::Result;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use serde_json::Value;

/// One entry of the issue-listing payload. The endpoint returns pull
/// requests too; those carry a `pull_request` key.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueInfo {
    pub number: u64,
    pub title: String,
    pub state: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pull_request: Option<Value>,
}

impl IssueInfo {
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }

    pub fn opened_day(&self) -> NaiveDate {
        self.created_at.date_naive()
    }

    pub fn updated_day(&self) -> NaiveDate {
        self.updated_at.date_naive()
    }
}

impl GithubClient {
    /// Issues of every state touched since the cutoff date, with the pull
    /// requests the endpoint mixes in dropped.
    pub async fn list_issues(
        &self,
        org: &str,
        repo: &str,
        since: NaiveDate,
    ) -> Result<Vec<IssueInfo>> {
        let query = vec![
            ("state", "all".to_string()),
            ("since", format!("{since}T00:00:00Z")),
        ];
        let issues: Vec<IssueInfo> = self.list(&format!("repos/{org}/{repo}/issues"), &query).await?;
        Ok(issues.into_iter().filter(|i| !i.is_pull_request()).collect())
    }
}
