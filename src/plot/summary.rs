use crate::model::{EventWindow, Result};
use crate::report::{sum_by_project, LeaderboardEntry};
use crate::store::TotalRow;
use chrono::NaiveDate;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

pub const WEEK_CHART_FILE: &str = "project_week.png";
pub const SUMMARY_CHART_FILE: &str = "project_summary.png";

const PANEL_SIZE: u32 = 500;
const SUMMARY_CHART_SIZE: (u32, u32) = (1000, 500);

/// One panel per event day, each ranking that day's busiest projects.
/// Panels share the y scale.
pub fn render_week_chart(path: &Path, rows: &[TotalRow], window: &EventWindow) -> Result<()> {
    let days = window.days();
    let root = BitMapBackend::new(path, (PANEL_SIZE * days.len() as u32, PANEL_SIZE))
        .into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((1, days.len()));

    let per_day: Vec<Vec<LeaderboardEntry>> = days
        .iter()
        .map(|day| {
            let ranked = sum_by_project(rows.iter().filter(|r| r.date == *day));
            ranked.into_iter().take(window.top_daily).collect()
        })
        .collect();
    let y_max = scale_max(per_day.iter().flatten());

    for ((day, panel), entries) in days.iter().zip(panels.iter()).zip(&per_day) {
        let title = format!("Commits for {}", day.format("%a"));
        draw_ranked_bars(panel, &title, entries, y_max, false)?;
    }
    root.present()?;
    Ok(())
}

/// Ranked bar chart of the top projects over the whole count window.
pub fn render_leaderboard_chart(
    path: &Path,
    entries: &[LeaderboardEntry],
    window: &EventWindow,
    today: NaiveDate,
) -> Result<()> {
    let top: Vec<LeaderboardEntry> = entries.iter().take(window.top_overall).cloned().collect();
    let y_max = scale_max(top.iter());
    let root = BitMapBackend::new(path, SUMMARY_CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let title = format!(
        "Commits from {} to {}",
        window.start.format("%D"),
        today.format("%D")
    );
    draw_ranked_bars(&root, &title, &top, y_max, true)?;
    root.present()?;
    Ok(())
}

fn scale_max<'a>(entries: impl Iterator<Item = &'a LeaderboardEntry>) -> f64 {
    let max_count = entries.map(|e| e.doc.max(e.other)).max().unwrap_or(0).max(1);
    max_count as f64 * 1.1
}

fn draw_ranked_bars(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    title: &str,
    entries: &[LeaderboardEntry],
    y_max: f64,
    with_legend: bool,
) -> Result<()> {
    let n = entries.len().max(1) as f64;
    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(60)
        .y_label_area_size(40)
        .build_cartesian_2d(-0.2f64..n + 0.2, 0f64..y_max)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(entries.len().max(1))
        .x_label_formatter(&|x| {
            if *x < 0.0 {
                return String::new();
            }
            entries
                .get(x.floor() as usize)
                .map(|e| e.project.clone())
                .unwrap_or_default()
        })
        .x_label_style(("sans-serif", 14))
        .draw()?;

    let series = chart.draw_series(entries.iter().enumerate().map(|(i, e)| {
        let x = i as f64;
        Rectangle::new([(x + 0.1, 0.0), (x + 0.5, e.doc as f64)], BLUE.filled())
    }))?;
    if with_legend {
        series
            .label("doc")
            .legend(|(x, y)| Rectangle::new([(x, y - 4), (x + 12, y + 4)], BLUE.filled()));
    }
    let series = chart.draw_series(entries.iter().enumerate().map(|(i, e)| {
        let x = i as f64;
        Rectangle::new([(x + 0.5, 0.0), (x + 0.9, e.other as f64)], RED.filled())
    }))?;
    if with_legend {
        series
            .label("other")
            .legend(|(x, y)| Rectangle::new([(x, y - 4), (x + 12, y + 4)], RED.filled()));
        chart
            .configure_series_labels()
            .border_style(BLACK)
            .background_style(WHITE.mix(0.8))
            .draw()?;
    }
    Ok(())
}
