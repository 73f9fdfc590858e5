use crate::model::Result;
use crate::store::dates;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const ISSUES_FILE: &str = ".project_issues.csv";

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct IssueRow {
    pub project: String,
    pub number: u64,
    pub state: String,
    pub title: String,
    #[serde(deserialize_with = "dates::day_from_string")]
    pub opened: NaiveDate,
    #[serde(deserialize_with = "dates::day_from_string")]
    pub updated: NaiveDate,
}

impl IssueRow {
    pub fn new(
        project: impl ToString,
        number: u64,
        state: impl ToString,
        title: impl ToString,
        opened: NaiveDate,
        updated: NaiveDate,
    ) -> Self {
        Self {
            project: project.to_string(),
            number,
            state: state.to_string(),
            title: title.to_string(),
            opened,
            updated,
        }
    }
}

#[derive(Debug, Clone)]
pub struct IssueStore {
    path: PathBuf,
    rows: Vec<IssueRow>,
}

impl IssueStore {
    pub fn load(path: &Path) -> Result<Self> {
        let mut rows = Vec::new();
        if path.exists() {
            let mut reader = csv::Reader::from_path(path)?;
            for record in reader.deserialize::<IssueRow>() {
                rows.push(record?);
            }
        }
        Ok(Self {
            path: path.to_path_buf(),
            rows,
        })
    }

    pub fn rows(&self) -> &[IssueRow] {
        &self.rows
    }

    /// Issues are keyed by (project, number); a re-fetched issue replaces
    /// the stored one.
    pub fn upsert(&mut self, row: IssueRow) {
        match self
            .rows
            .iter_mut()
            .find(|r| r.project == row.project && r.number == row.number)
        {
            Some(existing) => *existing = row,
            None => self.rows.push(row),
        }
    }

    pub fn save(&mut self) -> Result<()> {
        self.rows
            .sort_by(|a, b| a.project.cmp(&b.project).then_with(|| a.number.cmp(&b.number)));
        let mut writer = csv::Writer::from_path(&self.path)?;
        for row in &self.rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2017, 3, d).unwrap()
    }

    #[test]
    fn upsert_replaces_by_project_and_number() {
        let mut store = IssueStore {
            path: PathBuf::from(ISSUES_FILE),
            rows: vec![IssueRow::new("numpy", 12, "open", "docs build", day(6), day(6))],
        };
        store.upsert(IssueRow::new("numpy", 12, "closed", "docs build", day(6), day(8)));
        store.upsert(IssueRow::new("scipy", 12, "open", "tutorial", day(7), day(7)));

        assert_eq!(store.rows().len(), 2);
        let numpy = store.rows().iter().find(|r| r.project == "numpy").unwrap();
        assert_eq!(numpy.state, "closed");
        assert_eq!(numpy.updated, day(8));
    }

    #[test]
    fn titles_with_commas_survive_a_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(ISSUES_FILE);
        let mut store = IssueStore::load(&path).unwrap();
        store.upsert(IssueRow::new(
            "numpy",
            1,
            "open",
            "docs: fix intro, part one",
            day(6),
            day(6),
        ));
        store.save().unwrap();

        let reloaded = IssueStore::load(&path).unwrap();
        assert_eq!(reloaded.rows()[0].title, "docs: fix intro, part one");
    }
}
