//! NHL stats library
//!
//! This library fetches team rosters, player season stats, standings, daily
//! scores and points leaders from the public NHL web API, and lays them out
//! as sortable tables.
//!
//! # Examples
//!
//! ```rust,no_run
//! use nhl_stats::data_fetcher::api::{NhlApi, gather_all_player_stats};
//! use nhl_stats::ui::StatsTable;
//! use nhl_stats::{AppError, Config};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let api = NhlApi::from_config(&config)?;
//!
//!     // Every forward on two teams, in team then roster order
//!     let report = gather_all_player_stats(&api, &["BOS", "TOR"]).await;
//!
//!     let mut table = StatsTable::from_records(&report.entries);
//!     table.sort_by_column_desc("Points")?;
//!     table.print(&mut std::io::stdout(), false)?;
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::api::{NhlApi, PlayerStatsReport, gather_all_player_stats};
pub use data_fetcher::cache::{CacheStats, HttpResponseCache};
pub use data_fetcher::models::{PlayerStatEntry, PlayerStatRecord, TableRecord};
pub use error::{AppError, FailureKind, FetchFailure};
pub use ui::{StatsTable, compare_cells};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
