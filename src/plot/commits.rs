use crate::model::{EventWindow, Result};
use crate::store::TotalRow;
use chrono::{Duration, NaiveDate};
use plotters::prelude::*;
use std::path::Path;

pub const PROJECT_CHART_SIZE: (u32, u32) = (800, 400);
const Y_MAX: f64 = 40.0;

/// Outcome of one project's chart: either the real time series or the
/// annotated placeholder written in its place. A project always ends up
/// with an image file.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ChartOutcome {
    Rendered,
    Placeholder { reason: String },
}

pub fn render_with_fallback(
    path: &Path,
    project: &str,
    rows: &[&TotalRow],
    window: &EventWindow,
) -> Result<ChartOutcome> {
    match render_project_chart(path, project, rows, window) {
        Ok(()) => Ok(ChartOutcome::Rendered),
        Err(reason) => {
            render_placeholder(path, project)?;
            Ok(ChartOutcome::Placeholder {
                reason: reason.to_string(),
            })
        }
    }
}

/// Bar chart of one project's daily doc/other commit counts, with the
/// event window shaded behind the bars.
pub fn render_project_chart(
    path: &Path,
    project: &str,
    rows: &[&TotalRow],
    window: &EventWindow,
) -> Result<()> {
    let (Some(first), Some(last)) = (
        rows.iter().map(|r| r.date).min(),
        rows.iter().map(|r| r.date).max(),
    ) else {
        return Err(format!("No rows for project {project}").into());
    };
    let origin = first;
    let days = (last - origin).num_days() as f64 + 1.0;
    let offset = |d: NaiveDate| (d - origin).num_days() as f64;

    let root = BitMapBackend::new(path, PROJECT_CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(project, ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(40)
        .build_cartesian_2d(-0.2f64..days + 0.2, 0f64..Y_MAX)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc("# commits")
        .y_labels(11)
        .x_labels(days.min(10.0) as usize)
        .x_label_formatter(&|x| {
            let day = origin + Duration::days(x.round() as i64);
            day.format("%b %d").to_string()
        })
        .draw()?;

    // Event-window band behind the bars.
    chart.draw_series(std::iter::once(Rectangle::new(
        [
            (offset(window.start), 0.0),
            (offset(window.end) + 1.0, Y_MAX),
        ],
        BLACK.mix(0.1).filled(),
    )))?;

    chart
        .draw_series(rows.iter().map(|r| {
            let x = offset(r.date);
            Rectangle::new(
                [(x + 0.1, 0.0), (x + 0.5, (r.doc as f64).min(Y_MAX))],
                BLUE.filled(),
            )
        }))?
        .label("doc")
        .legend(|(x, y)| Rectangle::new([(x, y - 4), (x + 12, y + 4)], BLUE.filled()));
    chart
        .draw_series(rows.iter().map(|r| {
            let x = offset(r.date);
            Rectangle::new(
                [(x + 0.5, 0.0), (x + 0.9, (r.other as f64).min(Y_MAX))],
                RED.filled(),
            )
        }))?
        .label("other")
        .legend(|(x, y)| Rectangle::new([(x, y - 4), (x + 12, y + 4)], RED.filled()));

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;
    root.present()?;
    Ok(())
}

/// Same-size stand-in written when the real chart cannot be drawn.
pub fn render_placeholder(path: &Path, project: &str) -> Result<()> {
    let (width, height) = PROJECT_CHART_SIZE;
    let root = BitMapBackend::new(path, PROJECT_CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    root.draw(&Text::new(
        project.to_string(),
        (20, 20),
        ("sans-serif", 30).into_font(),
    ))?;
    root.draw(&Text::new(
        format!("No info for project {project}"),
        (width as i32 / 2 - 140, height as i32 / 2),
        ("sans-serif", 20).into_font(),
    ))?;
    root.present()?;
    Ok(())
}
