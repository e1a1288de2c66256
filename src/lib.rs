//! Episode rating heatmaps and binge-watching projections for TV series.
//!
//! series-heatmap turns per-episode ratings and runtimes into a dense
//! season×episode grid, classifies each rating into a fixed color bucket,
//! aggregates totals and averages, and projects when a viewer would finish
//! the series at a given cadence.
//!
//! # Features
//!
//! - Dense, column-aligned episode matrix from sparse provider data
//! - Fixed rating buckets with fill and text colors for the legend
//! - Total runtime, average rating, and average runtime, per series or season
//! - Binge finish date from hours per day and days per week
//! - Optional best/worst episode highlighting and external discussion links
//!
//! # Usage
//!
//! ```bash
//! # Browse a series heatmap in the terminal
//! cargo run -- breaking_bad.json
//!
//! # Print stats and the finish date for season 2 only
//! cargo run -- breaking_bad.json --summary --season 2 --hours-per-day 1.5
//! ```

pub mod binge;
pub mod config;
pub mod error;
pub mod highlights;
pub mod links;
pub mod matrix;
pub mod rating;
pub mod stats;
pub mod tui;
pub mod types;

pub use binge::{compute_binge_finish, BingeError, BingeParameters, BingePlan};
pub use error::{AppError, Result};
pub use matrix::{build_episode_matrix, EpisodeMatrix, EpisodeMatrixRow};
pub use rating::{classify_rating, RatingBucket, RatingStyle};
pub use stats::{compute_aggregate_stats, AggregateStats};
pub use types::{load_series_file, parse_series, Episode, Season, SeasonFilter, SeriesData};
