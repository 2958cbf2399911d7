//! Core types and utilities for the content-pulse analytics dashboard
//!
//! The crate centres on one reusable piece: a sortable, filterable table view
//! whose sort engine and formatter share a closed field vocabulary. Around it
//! sit the selection state, the mock data behind every widget and the live
//! visitor counter.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod config;
pub mod error;
pub mod filter;
pub mod fixtures;
pub mod format;
pub mod live;
pub mod selection;
pub mod sort;
pub mod table;
pub mod types;
pub mod vocabulary;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use filter::RecordFilter;
pub use format::{format_count, percentage_bar_width};
pub use live::{LiveCounter, TickerHandle};
pub use selection::{Selection, SortState};
pub use sort::sort_records;
pub use table::TableView;
pub use types::{FieldValue, Record, RecordId, SortDirection, Status};
pub use vocabulary::{FieldKind, FieldSpec, Vocabulary};

/// Initialize the logging system
///
/// `RUST_LOG` wins over `level` when set. Output goes to stderr, as JSON
/// when `json` is true.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(level: &str, json: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json.then(|| fmt::layer().json().with_writer(std::io::stderr)))
        .with((!json).then(|| fmt::layer().with_writer(std::io::stderr)))
        .try_init()
        .map_err(|e| Error::Other(format!("failed to initialize logging: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_installs_once() {
        let _ = init_logging("debug", true);
        let err = init_logging("info", false);
        assert!(matches!(err, Err(Error::Other(ref msg)) if msg.contains("logging")));
    }
}
