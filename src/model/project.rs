use crate::model::Result;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct Project {
    pub name: String,
    pub org: String,
    pub repo: String,
    pub branch: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SignupRow {
    #[serde(rename = "Github organization and project (if applicable)")]
    github_org: Option<String>,
    branch: Option<String>,
}

// Create
impl Project {
    pub fn from_signup(path: &Path) -> Result<Vec<Self>> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut projects = Vec::new();
        for record in reader.deserialize::<SignupRow>() {
            let row = record?;
            if let Some(project) = Self::from_row(row) {
                projects.push(project);
            }
        }
        Ok(projects)
    }

    pub fn new(
        org: impl ToString,
        repo: impl ToString,
        branch: Option<impl ToString>,
    ) -> Self {
        let repo = repo.to_string();
        Self {
            // The repo segment doubles as the store key; case-folded here,
            // exactly once, so every later join and sort agrees on it.
            name: repo.to_lowercase(),
            org: org.to_string(),
            repo,
            branch: branch.map(|b| b.to_string()),
        }
    }

    pub fn github_org(&self) -> String {
        format!("{}/{}", self.org, self.repo)
    }
}

// Parser
impl Project {
    fn from_row(row: SignupRow) -> Option<Self> {
        let org_field = row.github_org?;
        let org_field = org_field.trim();
        if org_field.is_empty() {
            return None;
        }
        // Only plain `org/repo` identifiers are GitHub projects; URLs and
        // bare names fall out here.
        let segments = org_field.split('/').collect::<Vec<_>>();
        let [org, repo] = segments.as_slice() else {
            return None;
        };
        if org.is_empty() || repo.is_empty() {
            return None;
        }
        let branch = row
            .branch
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty());
        Some(Self::new(org, repo, branch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const ORG_COLUMN: &str = "Github organization and project (if applicable)";

    fn signup_file(rows: &[(&str, &str)]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Timestamp,{ORG_COLUMN},branch").unwrap();
        for (org, branch) in rows {
            writeln!(file, "2017-02-01,{org},{branch}").unwrap();
        }
        file
    }

    #[test]
    fn parses_two_segment_org_fields() {
        let file = signup_file(&[("scikit-learn/Scikit-Learn", "main")]);
        let projects = Project::from_signup(file.path()).unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name, "scikit-learn");
        assert_eq!(projects[0].org, "scikit-learn");
        assert_eq!(projects[0].repo, "Scikit-Learn");
        assert_eq!(projects[0].branch.as_deref(), Some("main"));
    }

    #[test]
    fn skips_rows_with_missing_org_field() {
        let file = signup_file(&[("", "main"), ("numpy/numpy", "")]);
        let projects = Project::from_signup(file.path()).unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name, "numpy");
    }

    #[test]
    fn skips_rows_with_wrong_segment_count() {
        let file = signup_file(&[
            ("orga/repob/branchname", "x"),
            ("justaname", "x"),
            ("https://github.com/a/b", "x"),
        ]);
        let projects = Project::from_signup(file.path()).unwrap();
        assert!(projects.is_empty());
    }

    #[test]
    fn blank_branch_becomes_none() {
        let file = signup_file(&[("a/b", ""), ("c/d", "  ")]);
        let projects = Project::from_signup(file.path()).unwrap();
        assert_eq!(projects.len(), 2);
        assert!(projects.iter().all(|p| p.branch.is_none()));
    }
}
