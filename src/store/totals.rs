use crate::model::Result;
use crate::store::dates;
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const TOTALS_FILE: &str = ".project_totals.csv";

/// One (project, calendar day) slice of the totals store.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TotalRow {
    #[serde(deserialize_with = "dates::day_from_string")]
    pub date: NaiveDate,
    pub project: String,
    pub doc: u32,
    pub other: u32,
}

impl TotalRow {
    pub fn new(date: NaiveDate, project: impl ToString, doc: u32, other: u32) -> Self {
        Self {
            date,
            project: project.to_string(),
            doc,
            other,
        }
    }
}

/// The accumulating per-project per-day activity counts, the system's only
/// durable state.
#[derive(Debug, Clone)]
pub struct TotalsStore {
    path: PathBuf,
    rows: Vec<TotalRow>,
}

impl TotalsStore {
    pub fn load(path: &Path) -> Result<Self> {
        let mut rows = Vec::new();
        if path.exists() {
            let mut reader = csv::Reader::from_path(path)?;
            for record in reader.deserialize::<TotalRow>() {
                rows.push(record?);
            }
        }
        Ok(Self {
            path: path.to_path_buf(),
            rows,
        })
    }

    pub fn rows(&self) -> &[TotalRow] {
        &self.rows
    }

    pub fn rows_after(&self, day: NaiveDate) -> Vec<&TotalRow> {
        self.rows.iter().filter(|r| r.date > day).collect()
    }

    /// Fold one project's freshly fetched window into the store: rows for
    /// the same project dated on or after `since` are replaced, everything
    /// else is kept. Re-running an update over the same window is a no-op.
    pub fn merge_project(&mut self, project: &str, since: NaiveDate, fresh: Vec<TotalRow>) {
        self.rows
            .retain(|r| r.project != project || r.date < since);
        self.rows.extend(fresh);
    }

    pub fn save(&mut self) -> Result<()> {
        self.rows
            .sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.project.cmp(&b.project)));
        let mut writer = csv::Writer::from_path(&self.path)?;
        for row in &self.rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Group rows by project, projects in sorted order, rows in date order.
pub fn group_by_project<'a>(rows: &[&'a TotalRow]) -> IndexMap<String, Vec<&'a TotalRow>> {
    let mut grouped: IndexMap<String, Vec<&TotalRow>> = IndexMap::new();
    for row in rows {
        grouped.entry(row.project.clone()).or_default().push(row);
    }
    grouped.sort_keys();
    for project_rows in grouped.values_mut() {
        project_rows.sort_by_key(|r| r.date);
    }
    grouped
}
