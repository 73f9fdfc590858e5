mod commits;
mod summary;

pub use commits::{
    render_placeholder, render_project_chart, render_with_fallback, ChartOutcome,
    PROJECT_CHART_SIZE,
};
pub use summary::{
    render_leaderboard_chart, render_week_chart, SUMMARY_CHART_FILE, WEEK_CHART_FILE,
};

use crate::model::{EventWindow, Failure, Result};
use crate::store::{group_by_project, TotalsStore};
use crate::utils::count_bar;
use std::fs;
use std::path::PathBuf;

pub const IMAGES_DIR: &str = "images";

#[derive(Debug, Clone)]
pub struct PlotOptions {
    pub totals: PathBuf,
    pub outdir: PathBuf,
    pub window: EventWindow,
}

/// Render one chart per project with activity after the plot cutoff.
/// A project that cannot be charted gets the placeholder image instead
/// and is reported in the failure list.
pub fn run_plot(options: &PlotOptions) -> Result<Vec<Failure>> {
    let store = TotalsStore::load(&options.totals)?;
    let rows = store.rows_after(options.window.plot_start);
    let grouped = group_by_project(&rows);
    let images_dir = options.outdir.join(IMAGES_DIR);
    fs::create_dir_all(&images_dir)?;

    let pb = count_bar(grouped.len() as u64);
    let mut failures = Vec::new();
    for (project, project_rows) in &grouped {
        pb.set_message(project.clone());
        let path = images_dir.join(format!("{project}.png"));
        match render_with_fallback(&path, project, project_rows, &options.window) {
            Ok(ChartOutcome::Rendered) => {}
            Ok(ChartOutcome::Placeholder { reason }) => {
                failures.push(Failure::render(project, reason));
            }
            Err(err) => failures.push(Failure::render(project, err)),
        }
        pb.inc(1);
    }
    pb.finish_with_message("Images built");
    Ok(failures)
}
