mod leaderboard;
mod markdown;

pub use leaderboard::{build_leaderboard, sum_by_project, LeaderboardEntry};
pub use markdown::{build_summary_page, SUMMARY_PAGE_FILE};

use crate::model::{EventWindow, Result};
use crate::plot::{
    render_leaderboard_chart, render_week_chart, IMAGES_DIR, SUMMARY_CHART_FILE, WEEK_CHART_FILE,
};
use crate::store::{InfoStore, TotalsStore};
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct SummaryOptions {
    pub totals: PathBuf,
    pub info: PathBuf,
    pub outdir: PathBuf,
    pub window: EventWindow,
    pub today: NaiveDate,
}

/// Build the leaderboard from the totals store, render the two aggregate
/// charts, and write the projects page.
pub fn run_summary(options: &SummaryOptions) -> Result<PathBuf> {
    let totals = TotalsStore::load(&options.totals)?;
    let info = InfoStore::load(&options.info)?;
    let board = build_leaderboard(totals.rows(), options.window.start);

    let images_dir = options.outdir.join(IMAGES_DIR);
    fs::create_dir_all(&images_dir)?;
    render_week_chart(
        &images_dir.join(WEEK_CHART_FILE),
        totals.rows(),
        &options.window,
    )?;
    render_leaderboard_chart(
        &images_dir.join(SUMMARY_CHART_FILE),
        &board,
        &options.window,
        options.today,
    )?;

    let page = build_summary_page(
        &options.outdir,
        &info.sorted_rows(),
        &board,
        options.window.top_overall,
        options.today,
    )?;
    Ok(page)
}
