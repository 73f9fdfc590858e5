use crate::store::TotalRow;
use chrono::NaiveDate;
use indexmap::IndexMap;

/// Derived ranking row; recomputed on every report run, never persisted.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LeaderboardEntry {
    pub project: String,
    pub doc: u32,
    pub other: u32,
}

/// Sum counts per project, ranked by doc count descending. Project keys
/// are case-folded before grouping; doc ties order alphabetically so the
/// ranking is stable run-to-run.
pub fn sum_by_project<'a>(rows: impl IntoIterator<Item = &'a TotalRow>) -> Vec<LeaderboardEntry> {
    let mut sums: IndexMap<String, (u32, u32)> = IndexMap::new();
    for row in rows {
        let entry = sums.entry(row.project.to_lowercase()).or_insert((0, 0));
        entry.0 += row.doc;
        entry.1 += row.other;
    }
    let mut entries: Vec<LeaderboardEntry> = sums
        .into_iter()
        .map(|(project, (doc, other))| LeaderboardEntry { project, doc, other })
        .collect();
    entries.sort_by(|a, b| b.doc.cmp(&a.doc).then_with(|| a.project.cmp(&b.project)));
    entries
}

/// The event leaderboard: totals restricted to the count window, summed
/// per project.
pub fn build_leaderboard(rows: &[TotalRow], count_since: NaiveDate) -> Vec<LeaderboardEntry> {
    sum_by_project(rows.iter().filter(|r| r.date >= count_since))
}
