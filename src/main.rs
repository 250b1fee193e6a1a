//! CLI entry point for the bikeshare statistics tool.
//!
//! Runs the interactive explorer by default, or a one-shot report for a
//! filter given on the command line.

use std::ffi::OsStr;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use bikeshare_stats::config::CitySources;
use bikeshare_stats::loader::{Dataset, Loader};
use bikeshare_stats::output::{
    render_duration, render_json, render_page, render_station, render_time, render_user, rule,
};
use bikeshare_stats::paginate::{PAGE_SIZE, next_page, pages};
use bikeshare_stats::prompt::Prompter;
use bikeshare_stats::source::{CsvSource, RecordSource};
use bikeshare_stats::stats::{
    StatisticsReport, compute_duration_stats, compute_station_stats, compute_time_stats,
    compute_user_stats,
};
use clap::{Parser, Subcommand};
use tracing::{error, info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bikeshare_stats")]
#[command(about = "Explore US bikeshare trip data", long_about = None)]
struct Cli {
    /// Directory containing the city CSV files
    #[arg(short, long, global = true)]
    data_dir: Option<String>,

    /// JSON file overriding the CSV file name per city
    #[arg(short, long, global = true)]
    sources: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactively pick filters, page through raw rows and view statistics (default)
    Explore,
    /// Print statistics for one filter selection without prompting
    Report {
        /// chicago, new york city or washington
        #[arg(short, long)]
        city: String,

        /// january through june, or all
        #[arg(short, long, default_value = "all")]
        month: String,

        /// monday through sunday, or all
        #[arg(short = 'w', long, default_value = "all")]
        day: String,

        /// Print the report as JSON
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Number of raw data pages to print before the statistics
        #[arg(short, long, default_value_t = 0)]
        raw_pages: usize,
    },
    /// List configured cities and their source files
    Cities,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/bikeshare_stats.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bikeshare_stats.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    // Prompts share the terminal, so stderr stays quiet unless asked.
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("warn".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let data_dir = cli
        .data_dir
        .or_else(|| std::env::var("BIKESHARE_DATA_DIR").ok())
        .unwrap_or_else(|| ".".to_string());
    let sources = match &cli.sources {
        Some(path) => CitySources::load(&data_dir, path)?,
        None => CitySources::new(&data_dir),
    };
    info!(data_dir = %data_dir, "Using trip data directory");

    let loader = Loader::new(CsvSource::new(sources));

    match cli.command.unwrap_or(Commands::Explore) {
        Commands::Explore => {
            let stdin = io::stdin();
            let mut prompter = Prompter::new(stdin.lock(), io::stdout());
            explore(&loader, &mut prompter)?;
        }
        Commands::Report {
            city,
            month,
            day,
            json,
            raw_pages,
        } => {
            let ds = loader
                .load(&city, &month, &day)
                .with_context(|| format!("failed to load data for '{city}'"))?;
            let mut out = io::stdout().lock();

            for (idx, page) in pages(&ds).take(raw_pages).enumerate() {
                write!(out, "{}", render_page(page, idx * PAGE_SIZE))?;
            }

            if json {
                let report = StatisticsReport::compute(&ds)?;
                writeln!(out, "{}", render_json(&report)?)?;
            } else {
                writeln!(out, "Data for {}: {} trips", ds.selection, ds.len())?;
                show_statistics(&mut out, &ds)?;
            }
        }
        Commands::Cities => {
            let sources = loader.source().sources();
            for (city, source_id) in sources.iter() {
                let path = sources.path_for(city);
                let status = if path.exists() { "found" } else { "missing" };
                println!("{city}: {source_id} ({status})");
            }
        }
    }

    Ok(())
}

/// The select, load, view loop. Repeats until the user declines to restart.
fn explore<S, R, W>(loader: &Loader<S>, prompter: &mut Prompter<R, W>) -> Result<()>
where
    S: RecordSource,
    R: BufRead,
    W: Write,
{
    loop {
        let selection = prompter.prompt_filter_selection()?;
        writeln!(prompter.output(), "\nLoading the requested data....")?;

        match loader.load_selection(&selection) {
            Ok(ds) => {
                show_raw_data(prompter, &ds)?;
                show_statistics(prompter.output(), &ds)?;
            }
            Err(e) => {
                error!(error = %e, "Failed to load dataset");
                writeln!(prompter.output(), "\nCould not load the requested data: {e}")?;
            }
        }

        if !prompter.answered_yes("\nWould you like to restart? Enter yes or no.")? {
            break;
        }
    }
    Ok(())
}

/// Offers raw rows five at a time while the user keeps asking for more.
fn show_raw_data<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>, ds: &Dataset) -> Result<()> {
    if prompter.confirm("\nDo you wish to view the raw data?")? {
        let mut cursor = 0;
        loop {
            let (page, next) = next_page(ds, cursor);
            if page.is_empty() {
                writeln!(prompter.output(), "No more raw data to display.")?;
                break;
            }
            write!(prompter.output(), "{}", render_page(page, cursor))?;
            cursor = next;

            if !prompter.answered_yes("Do you wish to view more raw data?")? {
                break;
            }
        }
    }
    writeln!(prompter.output(), "{}", rule())?;
    Ok(())
}

/// Prints each statistics section independently; one failing does not stop
/// the others.
fn show_statistics<W: Write>(out: &mut W, ds: &Dataset) -> Result<()> {
    section(out, "Calculating The Most Frequent Times of Travel....", || {
        compute_time_stats(ds).map(|s| render_time(&s))
    })?;
    section(out, "Calculating the most popular stations and trips....", || {
        compute_station_stats(ds).map(|s| render_station(&s))
    })?;
    section(out, "Calculating Trip Duration....", || {
        compute_duration_stats(ds).map(|s| render_duration(&s))
    })?;
    section(out, "Calculating User Stats....", || {
        compute_user_stats(ds).map(|s| render_user(&s))
    })
}

fn section<W, F>(out: &mut W, title: &str, compute: F) -> Result<()>
where
    W: Write,
    F: FnOnce() -> bikeshare_stats::Result<String>,
{
    writeln!(out, "\n{title}\n")?;
    let started = Instant::now();
    match compute() {
        Ok(text) => writeln!(out, "{text}")?,
        Err(e) => {
            warn!(error = %e, section = title, "Statistics section skipped");
            writeln!(out, "Not available: {e}")?;
        }
    }
    writeln!(out, "\nThis took {:.6} seconds.", started.elapsed().as_secs_f64())?;
    writeln!(out, "{}", rule())?;
    Ok(())
}
