//! content-pulse dashboard
//!
//! Renders the content-analytics dashboard in the terminal from in-memory mock
//! data: metric cards, traffic charts, the sortable content table, goal
//! tracking and the simulated real-time visitor feed.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

mod page;
mod render;

use clap::{Parser, Subcommand};
use page::{Dashboard, Widget};
use pulse_core::{Config, Error, LiveCounter, RecordFilter, Result, Status};
use std::path::{Path, PathBuf};
use tokio::signal;
use tracing::{info, warn};

/// Command line interface for the dashboard
#[derive(Parser)]
#[command(
    name = "pulse-dashboard",
    version = env!("CARGO_PKG_VERSION"),
    about = "Content analytics dashboard in your terminal",
    long_about = "Renders metric cards, traffic charts, a sortable content table, goal tracking and a simulated real-time visitor feed from in-memory mock data."
)]
struct Cli {
    /// Configuration file path (TOML)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error), overrides the config file
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Enable structured JSON logging
    #[arg(long, global = true)]
    json: bool,

    /// Subcommand
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
enum Commands {
    /// Show every dashboard section
    Overview,

    /// Show the content performance table
    Content {
        /// Click a column header; repeat to toggle or chain
        #[arg(short, long = "sort", value_name = "FIELD")]
        sort: Vec<String>,

        /// Only show one category
        #[arg(long)]
        category: Option<String>,

        /// Only show one status (published, draft, scheduled, archived)
        #[arg(long)]
        status: Option<String>,

        /// Case-insensitive title search
        #[arg(long)]
        search: Option<String>,

        /// Minimum number of views
        #[arg(long, value_name = "VIEWS")]
        min_views: Option<u64>,
    },

    /// Show goal progress
    Goals {
        /// Click a column header; repeat to toggle or chain
        #[arg(short, long = "sort", value_name = "FIELD")]
        sort: Vec<String>,
    },

    /// Show visitors by location
    Visitors {
        /// Click a column header; repeat to toggle or chain
        #[arg(short, long = "sort", value_name = "FIELD")]
        sort: Vec<String>,
    },

    /// Follow the live visitor counter
    Watch {
        /// Stop after this many updates (runs until Ctrl+C otherwise)
        #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
        ticks: Option<u64>,
    },

    /// Show the resolved configuration
    Config {
        /// Print the configuration as JSON
        #[arg(short, long)]
        show: bool,

        /// Print TOML instead, ready to save as a config file
        #[arg(long = "toml", requires = "show")]
        as_toml: bool,
    },
}

/// Main entry point for the dashboard
///
/// # Errors
///
/// Returns error if configuration loading or rendering fails
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    init_logging(&cli, &config)?;

    let today = chrono::Local::now().date_naive();
    let mut page = Dashboard::new(&config, today);
    let bar_width = config.dashboard.bar_width;

    match cli.command {
        None | Some(Commands::Overview) => {
            println!(
                "{}",
                render::render_overview(&page, bar_width, config.live.initial_visitors)?
            );
        }
        Some(Commands::Content {
            sort,
            category,
            status,
            search,
            min_views,
        }) => {
            let filter = content_filter(category, status.as_deref(), search, min_views)?;
            page.apply_filter(Widget::Content, filter)?;
            show_widget(&mut page, Widget::Content, &sort, bar_width)?;
        }
        Some(Commands::Goals { sort }) => show_widget(&mut page, Widget::Goals, &sort, bar_width)?,
        Some(Commands::Visitors { sort }) => {
            show_widget(&mut page, Widget::Visitors, &sort, bar_width)?;
        }
        Some(Commands::Watch { ticks }) => watch_visitors(&config, ticks).await,
        Some(Commands::Config { show, as_toml }) => {
            if as_toml {
                let rendered = toml::to_string_pretty(&config)
                    .map_err(|e| Error::Other(format!("Failed to render config: {e}")))?;
                print!("{rendered}");
            } else if show {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("Configuration is valid");
            }
        }
    }

    Ok(())
}

/// Initialize logging system
///
/// # Errors
///
/// Returns error if a subscriber is already installed
fn init_logging(cli: &Cli, config: &Config) -> Result<()> {
    let level = cli.log_level.as_deref().unwrap_or(&config.logging.level);

    // Logs go to stderr so rendered widgets stay clean on stdout.
    pulse_core::init_logging(level, cli.json || config.logging.format == "json")?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        log_level = level,
        "Dashboard starting"
    );
    Ok(())
}

/// Load configuration from file or environment
///
/// `PULSE_*` variables override the file either way.
///
/// # Errors
///
/// Returns error if the configuration file cannot be read, parsed or validated
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => {
            if !path.is_file() {
                return Err(Error::configuration(format!(
                    "Failed to read config file {}",
                    path.display()
                )));
            }
            Config::load_from(path)
        }
        None => Config::load(),
    }
}

/// Build the content filter panel's selection
///
/// # Errors
///
/// Returns error for an unknown status
fn content_filter(
    category: Option<String>,
    status: Option<&str>,
    search: Option<String>,
    min_views: Option<u64>,
) -> Result<RecordFilter> {
    let mut filter = RecordFilter::new();

    if let Some(category) = category {
        filter = filter.matching("category", category);
    }
    if let Some(status) = status {
        filter = filter.matching("status", status.parse::<Status>()?);
    }
    if let Some(search) = search {
        filter = filter.search("title", search);
    }
    if let Some(min_views) = min_views {
        #[allow(clippy::cast_precision_loss)]
        let min = min_views as f64;
        filter = filter.at_least("views", min);
    }

    Ok(filter)
}

/// Sort and print one table widget
///
/// # Errors
///
/// Returns error for an unknown sort field
fn show_widget(page: &mut Dashboard, widget: Widget, sort: &[String], bar_width: usize) -> Result<()> {
    page.apply_sorts(widget, sort)?;
    println!("{}", render::render_widget(page, widget, bar_width)?);
    Ok(())
}

/// Print live visitor updates until Ctrl+C or the tick budget runs out
async fn watch_visitors(config: &Config, ticks: Option<u64>) {
    let counter = LiveCounter::new(config.live.initial_visitors);
    let ticker = counter.start_from_config(&config.live);
    let mut updates = counter.subscribe();
    let mut seen = 0_u64;

    println!("{}", render::render_live(counter.value()));

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    warn!("Live counter closed unexpectedly");
                    break;
                }
                let value = *updates.borrow_and_update();
                println!("{}", render::render_live(value));

                seen += 1;
                if ticks.is_some_and(|limit| seen >= limit) {
                    break;
                }
            }
            _ = signal::ctrl_c() => {
                info!("Received Ctrl+C, stopping live feed");
                break;
            }
        }
    }

    ticker.stop().await;
}
