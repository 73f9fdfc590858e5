use crate::github::CommitInfo;
use crate::store::TotalRow;
use chrono::NaiveDate;
use indexmap::IndexMap;

/// A commit counts toward documentation when its message mentions one of
/// these. Matched case-insensitively; `doc` also covers docs, docstring
/// and documentation.
const DOC_KEYWORDS: [&str; 6] = ["doc", "readme", "tutorial", "guide", "typo", "sphinx"];

pub fn is_doc_commit(message: &str) -> bool {
    let message = message.to_lowercase();
    DOC_KEYWORDS.iter().any(|keyword| message.contains(keyword))
}

/// Bucket a project's commits into per-day doc/other counts. Timestamps
/// are collapsed to the calendar day, so one row comes out per day with
/// activity.
pub fn day_counts(project: &str, commits: &[CommitInfo]) -> Vec<TotalRow> {
    let mut buckets: IndexMap<NaiveDate, (u32, u32)> = IndexMap::new();
    for commit in commits {
        let bucket = buckets.entry(commit.day()).or_insert((0, 0));
        if is_doc_commit(&commit.commit.message) {
            bucket.0 += 1;
        } else {
            bucket.1 += 1;
        }
    }
    buckets.sort_keys();
    buckets
        .into_iter()
        .map(|(date, (doc, other))| TotalRow::new(date, project, doc, other))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::{CommitAuthor, CommitDetails};
    use chrono::{DateTime, Utc};

    fn commit(message: &str, timestamp: &str) -> CommitInfo {
        CommitInfo {
            sha: "a1b2c3".to_string(),
            commit: CommitDetails {
                author: CommitAuthor {
                    name: "Ada".to_string(),
                    email: "ada@example.com".to_string(),
                    date: timestamp.parse::<DateTime<Utc>>().unwrap(),
                },
                message: message.to_string(),
            },
        }
    }

    #[test]
    fn keyword_match_is_case_insensitive() {
        assert!(is_doc_commit("DOC: rewrite quickstart"));
        assert!(is_doc_commit("Update README.md"));
        assert!(is_doc_commit("fix typo in error text"));
        assert!(is_doc_commit("add sphinx config"));
        assert!(!is_doc_commit("BUG: off-by-one in solver"));
        assert!(!is_doc_commit("MAINT: bump version"));
    }

    #[test]
    fn same_day_timestamps_collapse_into_one_row() {
        let commits = vec![
            commit("DOC: part one", "2017-03-06T09:00:00Z"),
            commit("DOC: part two", "2017-03-06T17:30:00Z"),
            commit("BUG: fix solver", "2017-03-06T18:00:00Z"),
            commit("DOC: next day", "2017-03-07T08:00:00Z"),
        ];
        let rows = day_counts("numpy", &commits);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2017, 3, 6).unwrap());
        assert_eq!(rows[0].doc, 2);
        assert_eq!(rows[0].other, 1);
        assert_eq!(rows[1].doc, 1);
        assert_eq!(rows[1].other, 0);
    }

    #[test]
    fn rows_come_out_in_date_order() {
        let commits = vec![
            commit("DOC: late", "2017-03-08T09:00:00Z"),
            commit("DOC: early", "2017-03-06T09:00:00Z"),
        ];
        let rows = day_counts("numpy", &commits);
        assert!(rows[0].date < rows[1].date);
    }
}
