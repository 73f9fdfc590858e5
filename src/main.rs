use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use docathon_metrics::model::{failed_items, EventWindow, Result};
use docathon_metrics::plot::{run_plot, PlotOptions};
use docathon_metrics::report::{run_summary, SummaryOptions};
use docathon_metrics::store::dates::parse_day;
use docathon_metrics::store::{INFO_FILE, TOTALS_FILE};
use docathon_metrics::update::{run_update, UpdateOptions};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "docathon-metrics")]
#[command(about = "Track and report documentation activity for docathon projects")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch new commits and issues for every signed-up project
    Update {
        /// Path to projects signup questionnaire
        filename: PathBuf,
        /// Environment variable holding the API token
        #[arg(long, default_value = "GITHUB_API")]
        auth: String,
        /// Directory holding the CSV stores
        #[arg(long, short, default_value = ".")]
        outdir: PathBuf,
        #[arg(long = "per_page", short = 'n', default_value_t = 100)]
        per_page: u32,
        #[arg(long = "max_pages", short = 'm', default_value_t = 100)]
        max_pages: u32,
        /// Date from which to search, YYYY-MM-DD
        #[arg(long, short, default_value = "2017-01-01")]
        since: String,
    },
    /// Render one commit chart image per project
    Plot {
        #[arg(long, default_value = TOTALS_FILE)]
        totals: PathBuf,
        #[arg(long, short, default_value = "build")]
        outdir: PathBuf,
        /// Event window config; omit for the built-in window
        #[arg(long, short)]
        event: Option<PathBuf>,
    },
    /// Build the leaderboard charts and the projects page
    Summary {
        #[arg(long, default_value = TOTALS_FILE)]
        totals: PathBuf,
        #[arg(long, default_value = INFO_FILE)]
        info: PathBuf,
        #[arg(long, short, default_value = "build")]
        outdir: PathBuf,
        /// Event window config; omit for the built-in window
        #[arg(long, short)]
        event: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Update {
            filename,
            auth,
            outdir,
            per_page,
            max_pages,
            since,
        } => {
            let options = UpdateOptions {
                signup: filename,
                auth_var: auth,
                outdir,
                per_page,
                max_pages,
                since: parse_day(&since)?,
            };
            let failures = run_update(&options).await?;
            println!(
                "Finished updating commits.\nFailed for: {:?}",
                failed_items(&failures)
            );
        }
        Commands::Plot {
            totals,
            outdir,
            event,
        } => {
            let options = PlotOptions {
                totals,
                outdir,
                window: event_window(event)?,
            };
            let failures = run_plot(&options)?;
            println!(
                "Finished building images.\nExceptions: {:?}",
                failed_items(&failures)
            );
        }
        Commands::Summary {
            totals,
            info,
            outdir,
            event,
        } => {
            let options = SummaryOptions {
                totals,
                info,
                outdir,
                window: event_window(event)?,
                today: today(),
            };
            let page = run_summary(&options)?;
            println!("Finished creating projects summary: {}", page.display());
        }
    }
    Ok(())
}

fn event_window(path: Option<PathBuf>) -> Result<EventWindow> {
    match path {
        Some(path) => EventWindow::from_config(&path),
        None => Ok(EventWindow::default()),
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
