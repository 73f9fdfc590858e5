mod classify;

pub use classify::{day_counts, is_doc_commit};

use crate::github::{CommitInfo, GithubClient, IssueInfo};
use crate::model::{Failure, Project, Result};
use crate::store::{
    InfoStore, IssueRow, IssueStore, TotalsStore, INFO_FILE, ISSUES_FILE, TOTALS_FILE,
};
use crate::utils::ProgressExt;
use chrono::NaiveDate;
use indicatif::MultiProgress;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct UpdateOptions {
    pub signup: PathBuf,
    pub auth_var: String,
    pub outdir: PathBuf,
    pub per_page: u32,
    pub max_pages: u32,
    pub since: NaiveDate,
}

/// Fetch new commits and issues for every signed-up project and fold them
/// into the CSV stores. A failing project is recorded and skipped; the
/// stores are written once at the end.
pub async fn run_update(options: &UpdateOptions) -> Result<Vec<Failure>> {
    let client = GithubClient::from_env(&options.auth_var, options.per_page, options.max_pages)?;
    let projects = Project::from_signup(&options.signup)?;
    println!("Updating commits for {} projects", projects.len());

    fs::create_dir_all(&options.outdir)?;
    let mut totals = TotalsStore::load(&options.outdir.join(TOTALS_FILE))?;
    let mut issues = IssueStore::load(&options.outdir.join(ISSUES_FILE))?;
    let mut info = InfoStore::load(&options.outdir.join(INFO_FILE))?;

    let multi = MultiProgress::new();
    let overall = multi.add_count_bar(projects.len() as u64);
    let detail = multi.add_message_bar();

    let mut failures = Vec::new();
    for project in &projects {
        detail.set_message(format!("Fetching {}", project.github_org()));
        match fetch_project(&client, project, options.since).await {
            Ok((commits, project_issues)) => {
                detail.set_message(format!(
                    "{}: {} commits, {} issues",
                    project.name,
                    commits.len(),
                    project_issues.len(),
                ));
                totals.merge_project(
                    &project.name,
                    options.since,
                    day_counts(&project.name, &commits),
                );
                for issue in project_issues {
                    issues.upsert(IssueRow::new(
                        &project.name,
                        issue.number,
                        &issue.state,
                        &issue.title,
                        issue.opened_day(),
                        issue.updated_day(),
                    ));
                }
                info.upsert_project(project);
            }
            Err(err) => failures.push(Failure::fetch(&project.name, err)),
        }
        overall.inc(1);
    }
    detail.finish_and_clear();
    overall.finish_with_message("Fetched");

    totals.save()?;
    issues.save()?;
    info.save()?;
    Ok(failures)
}

async fn fetch_project(
    client: &GithubClient,
    project: &Project,
    since: NaiveDate,
) -> Result<(Vec<CommitInfo>, Vec<IssueInfo>)> {
    let (commits, issues) = futures::join!(
        client.list_commits(&project.org, &project.repo, project.branch.as_deref(), since),
        client.list_issues(&project.org, &project.repo, since),
    );
    Ok((commits?, issues?))
}
