mod client;
mod commits;
mod issues;

pub use client::{token_from_env, GithubClient, GITHUB_API_URL};
pub use commits::{CommitAuthor, CommitDetails, CommitInfo};
pub use issues::IssueInfo;
