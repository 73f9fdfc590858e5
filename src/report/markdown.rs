use crate::model::Result;
use crate::plot::{IMAGES_DIR, SUMMARY_CHART_FILE, WEEK_CHART_FILE};
use crate::report::LeaderboardEntry;
use crate::store::InfoRow;
use chrono::NaiveDate;
use itertools::Itertools;
use markdown_builder::Markdown;
use markdown_table::{Heading, HeadingAlignment, MarkdownTable};
use std::fs;
use std::path::{Path, PathBuf};

pub const SUMMARY_PAGE_FILE: &str = "projects.md";

const LINKS_PER_ROW: usize = 5;

const PREAMBLE: &str = "Here is a list of projects involved in the Docathon along with \
information about contributions to their documentation. If you'd like to help out with a \
project, click an image below to see more information about it. If you'd like to see your \
project here, please fill in the registration form.";

/// Assemble the generated projects page: front matter, project link grid,
/// the two aggregate charts, the leaderboard table, and one embedded chart
/// per project whose image exists on disk.
pub fn build_summary_page(
    outdir: &Path,
    info_rows: &[&InfoRow],
    leaderboard: &[LeaderboardEntry],
    top_overall: usize,
    today: NaiveDate,
) -> Result<PathBuf> {
    let mut doc = Markdown::new();
    doc.header1("Projects");
    doc.paragraph(PREAMBLE.to_string());
    doc.paragraph(project_links(info_rows));
    doc.header1("Project leaders");
    doc.paragraph(format!(
        "<img src='{IMAGES_DIR}/{SUMMARY_CHART_FILE}' alt='project_summary' class='docathon_image' />"
    ));
    doc.paragraph(format!(
        "<img src='{IMAGES_DIR}/{WEEK_CHART_FILE}' alt='project_weekly' class='docathon_image' />"
    ));
    doc.paragraph(leaderboard_table(leaderboard, top_overall)?);
    doc.header1("Project contributions");
    doc.paragraph(contribution_images(outdir, leaderboard));

    let path = outdir.join(SUMMARY_PAGE_FILE);
    fs::write(&path, format!("{}\n{}", front_matter(today), doc.render()))?;
    Ok(path)
}

fn front_matter(today: NaiveDate) -> String {
    format!(
        "Title: Projects\n\
         Date: {today}\n\
         Modified: {today}\n\
         Tags: projects, docathon\n\
         Category: info\n\
         Slug: projects/projects\n\
         Authors: docathon-metrics\n\
         Summary: List of projects\n"
    )
}

/// `[name](repo.html)` links, five to a row.
fn project_links(info_rows: &[&InfoRow]) -> String {
    let links: Vec<String> = info_rows
        .iter()
        .filter_map(|row| {
            let (_, repo) = row.org_repo()?;
            Some(format!("[{}]({}.html)", row.name, repo))
        })
        .collect();
    links
        .chunks(LINKS_PER_ROW)
        .map(|chunk| chunk.join("&nbsp;&nbsp;-&nbsp;&nbsp;"))
        .join("<br />\n")
}

fn leaderboard_table(leaderboard: &[LeaderboardEntry], top_overall: usize) -> Result<String> {
    let rows: Vec<Vec<String>> = leaderboard
        .iter()
        .take(top_overall)
        .map(|e| vec![e.project.clone(), e.doc.to_string(), e.other.to_string()])
        .collect();
    if rows.is_empty() {
        return Ok("No commits counted yet.".to_string());
    }
    let headings = vec![
        Heading::new("project".to_string(), None),
        Heading::new("doc".to_string(), Some(HeadingAlignment::Center)),
        Heading::new("other".to_string(), Some(HeadingAlignment::Center)),
    ];
    let mut table = MarkdownTable::new(rows);
    table.with_headings(headings);
    table.as_markdown().map_err(|e| format!("{e:?}").into())
}

/// Embedded chart per leaderboard project, skipping (with a notice) any
/// project whose image never made it to disk.
fn contribution_images(outdir: &Path, leaderboard: &[LeaderboardEntry]) -> String {
    let mut images = Vec::new();
    for entry in leaderboard {
        let image = format!("{IMAGES_DIR}/{}.png", entry.project);
        if !outdir.join(&image).exists() {
            println!("Skipping {}", entry.project);
            continue;
        }
        images.push(format!(
            "<a href='{project}.html'><img src='{image}' alt='{project}' class='docathon_image' \
             style='width: 48%; float:left;' /></a>",
            project = entry.project,
        ));
    }
    images.join("\n")
}
