//! Drives the render and summary batches over a small fixture store, the
//! way the real pipeline runs them after an update.

use chrono::NaiveDate;
use docathon_metrics::model::EventWindow;
use docathon_metrics::plot::{run_plot, PlotOptions};
use docathon_metrics::report::{run_summary, SummaryOptions};
use std::fs;
use std::path::Path;

const TOTALS_FIXTURE: &str = "\
date,project,doc,other
2017-03-06,numpy,4,1
2017-03-07,numpy,2,0
2017-03-08,numpy,1,1
2017-03-09,numpy,3,0
2017-03-10,numpy,5,2
2017-03-06,scipy,1,0
2017-03-07,scipy,2,1
2017-03-08,scipy,2,0
2017-03-09,scipy,1,0
2017-03-10,scipy,1,1
";

const INFO_FIXTURE: &str = "\
name,github_org,branch
numpy,numpy/numpy,
scipy,scipy/scipy,main
";

#[test]
fn plot_then_summary_produces_images_and_page() {
    let dir = tempfile::tempdir().unwrap();
    let totals = dir.path().join(".project_totals.csv");
    let info = dir.path().join(".project_info.csv");
    let outdir = dir.path().join("build");
    fs::write(&totals, TOTALS_FIXTURE).unwrap();
    fs::write(&info, INFO_FIXTURE).unwrap();
    let window = EventWindow::default();

    let failures = run_plot(&PlotOptions {
        totals: totals.clone(),
        outdir: outdir.clone(),
        window: window.clone(),
    })
    .unwrap();
    assert!(failures.is_empty(), "render failures: {failures:?}");
    assert_png(&outdir.join("images/numpy.png"));
    assert_png(&outdir.join("images/scipy.png"));

    let page = run_summary(&SummaryOptions {
        totals,
        info,
        outdir: outdir.clone(),
        window,
        today: NaiveDate::from_ymd_opt(2017, 3, 10).unwrap(),
    })
    .unwrap();
    assert_png(&outdir.join("images/project_week.png"));
    assert_png(&outdir.join("images/project_summary.png"));

    let page = fs::read_to_string(page).unwrap();
    assert!(page.contains("[numpy](numpy.html)"));
    assert!(page.contains("[scipy](scipy.html)"));
    assert!(page.contains("src='images/numpy.png'"));
    assert!(page.contains("src='images/scipy.png'"));
}

#[test]
fn summary_survives_missing_project_images() {
    let dir = tempfile::tempdir().unwrap();
    let totals = dir.path().join(".project_totals.csv");
    let info = dir.path().join(".project_info.csv");
    let outdir = dir.path().join("build");
    fs::write(&totals, TOTALS_FIXTURE).unwrap();
    fs::write(&info, INFO_FIXTURE).unwrap();

    // no plot run: no per-project images exist
    let page = run_summary(&SummaryOptions {
        totals,
        info,
        outdir,
        window: EventWindow::default(),
        today: NaiveDate::from_ymd_opt(2017, 3, 10).unwrap(),
    })
    .unwrap();

    let page = fs::read_to_string(page).unwrap();
    assert!(page.contains("[numpy](numpy.html)"));
    assert!(!page.contains("src='images/numpy.png'"));
}

fn assert_png(path: &Path) {
    assert!(path.exists(), "missing image {}", path.display());
    assert!(fs::metadata(path).unwrap().len() > 0);
}
