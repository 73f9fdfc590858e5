use crate::model::{Project, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const INFO_FILE: &str = ".project_info.csv";

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct InfoRow {
    pub name: String,
    pub github_org: String,
    pub branch: Option<String>,
}

impl InfoRow {
    pub fn new(name: impl ToString, github_org: impl ToString, branch: Option<String>) -> Self {
        Self {
            name: name.to_string().to_lowercase(),
            github_org: github_org.to_string(),
            branch,
        }
    }

    /// Last two `/`-segments of the org field, so both `org/repo` and full
    /// URLs resolve to the same pair.
    pub fn org_repo(&self) -> Option<(&str, &str)> {
        let mut segments = self.github_org.rsplit('/');
        let repo = segments.next()?;
        let org = segments.next()?;
        if org.is_empty() || repo.is_empty() {
            return None;
        }
        Some((org, repo))
    }
}

#[derive(Debug, Clone)]
pub struct InfoStore {
    path: PathBuf,
    rows: Vec<InfoRow>,
}

impl InfoStore {
    pub fn load(path: &Path) -> Result<Self> {
        let mut rows = Vec::new();
        if path.exists() {
            let mut reader = csv::Reader::from_path(path)?;
            for record in reader.deserialize::<InfoRow>() {
                rows.push(record?);
            }
        }
        Ok(Self {
            path: path.to_path_buf(),
            rows,
        })
    }

    /// Rows in lower-cased name order, the order the summary page lists
    /// projects in.
    pub fn sorted_rows(&self) -> Vec<&InfoRow> {
        let mut rows: Vec<&InfoRow> = self.rows.iter().collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        rows
    }

    pub fn upsert_project(&mut self, project: &Project) {
        let row = InfoRow::new(&project.name, project.github_org(), project.branch.clone());
        match self.rows.iter_mut().find(|r| r.name == row.name) {
            Some(existing) => *existing = row,
            None => self.rows.push(row),
        }
    }

    pub fn save(&mut self) -> Result<()> {
        self.rows.sort_by(|a, b| a.name.cmp(&b.name));
        let mut writer = csv::Writer::from_path(&self.path)?;
        for row in &self.rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}
