pub mod dates;
mod info;
mod issues;
mod totals;

pub use info::{InfoRow, InfoStore, INFO_FILE};
pub use issues::{IssueRow, IssueStore, ISSUES_FILE};
pub use totals::{group_by_project, TotalRow, TotalsStore, TOTALS_FILE};
