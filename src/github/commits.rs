use crate::github::GithubClient;
use crate::model::Result;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

/// One entry of the commit-listing payload.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitInfo {
    pub sha: String,
    pub commit: CommitDetails,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitDetails {
    pub author: CommitAuthor,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitAuthor {
    pub name: String,
    pub email: String,
    pub date: DateTime<Utc>,
}

impl CommitInfo {
    pub fn day(&self) -> NaiveDate {
        self.commit.author.date.date_naive()
    }
}

impl GithubClient {
    /// Commits on a repository since the cutoff date, newest pages first
    /// per the API's default ordering. `branch` of `None` means the
    /// repository's default branch.
    pub async fn list_commits(
        &self,
        org: &str,
        repo: &str,
        branch: Option<&str>,
        since: NaiveDate,
    ) -> Result<Vec<CommitInfo>> {
        let mut query = vec![("since", format!("{since}T00:00:00Z"))];
        if let Some(branch) = branch {
            query.push(("sha", branch.to_string()));
        }
        self.list(&format!("repos/{org}/{repo}/commits"), &query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"[
        {
            "sha": "a1b2c3",
            "node_id": "MDY6Q29tbWl0",
            "commit": {
                "author": {
                    "name": "Ada",
                    "email": "ada@example.com",
                    "date": "2017-03-06T14:22:01Z"
                },
                "committer": {
                    "name": "Ada",
                    "email": "ada@example.com",
                    "date": "2017-03-06T14:22:01Z"
                },
                "message": "DOC: rewrite the quickstart"
            },
            "html_url": "https://github.com/a/b/commit/a1b2c3"
        }
    ]"#;

    #[test]
    fn parses_the_listing_payload() {
        let commits: Vec<CommitInfo> = serde_json::from_str(LISTING).unwrap();
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].sha, "a1b2c3");
        assert_eq!(commits[0].commit.author.email, "ada@example.com");
        assert_eq!(commits[0].commit.message, "DOC: rewrite the quickstart");
    }

    #[test]
    fn day_truncates_the_commit_timestamp() {
        let commits: Vec<CommitInfo> = serde_json::from_str(LISTING).unwrap();
        assert_eq!(
            commits[0].day(),
            NaiveDate::from_ymd_opt(2017, 3, 6).unwrap()
        );
    }
}
