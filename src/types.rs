//! Type definitions for series-heatmap.
//!
//! This module contains the series data model as delivered by the metadata
//! provider, plus the season filter shared by the statistics and binge
//! calculators.

use crate::error::{AppError, Result};
use log::debug;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// A single episode with its rating and runtime.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    /// Episode number within its season (1-based).
    pub episode_number: i64,

    /// Episode title.
    #[serde(default)]
    pub title: String,

    /// Rating on a 0-10 scale. Missing or null ratings read as 0.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub rating: f64,

    /// Runtime in minutes, if known.
    #[serde(default)]
    pub runtime: Option<u32>,

    /// Optional synopsis.
    #[serde(default)]
    pub overview: Option<String>,
}

impl Episode {
    /// Format the episode for display in the detail panel.
    ///
    /// # Examples
    ///
    /// ```
    /// use series_heatmap::types::Episode;
    ///
    /// let ep = Episode {
    ///     episode_number: 3,
    ///     title: "Bit by a Dead Bee".to_string(),
    ///     rating: 8.1,
    ///     runtime: Some(47),
    ///     overview: None,
    /// };
    /// assert_eq!(ep.to_display(), "E3 - Bit by a Dead Bee");
    /// ```
    pub fn to_display(&self) -> String {
        if self.title.is_empty() {
            format!("E{}", self.episode_number)
        } else {
            format!("E{} - {}", self.episode_number, self.title)
        }
    }

    /// Runtime as shown in the detail panel, `"N/A"` when unknown.
    pub fn runtime_display(&self) -> String {
        match self.runtime {
            Some(minutes) if minutes > 0 => format!("{} min", minutes),
            _ => "N/A".to_string(),
        }
    }
}

/// A season and its episodes, in whatever order the provider sent them.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    /// Season number.
    pub season_number: i64,

    /// Episodes of this season. Episode numbers are unique within a season.
    #[serde(default)]
    pub episodes: Vec<Episode>,
}

/// Series metadata as delivered by the data provider.
///
/// Fields beyond the ones listed here are ignored during deserialization.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SeriesData {
    /// Display title.
    pub title: String,

    /// Provider media type: "series" or "movie".
    #[serde(default, rename = "type")]
    pub media_type: Option<String>,

    /// Release year or year range.
    #[serde(default)]
    pub year: Option<String>,

    /// Short synopsis.
    #[serde(default)]
    pub description: Option<String>,

    /// Seasons of the series.
    #[serde(default)]
    pub seasons: Vec<Season>,

    /// IMDb identifier, e.g. "tt0903747".
    #[serde(default)]
    pub imdb_id: Option<String>,
}

impl SeriesData {
    /// Format the series heading.
    ///
    /// # Examples
    ///
    /// ```
    /// use series_heatmap::types::SeriesData;
    ///
    /// let series = series_heatmap::parse_series(r#"{"title": "Dark", "year": "2017"}"#).unwrap();
    /// assert_eq!(series.to_display(), "Dark (2017)");
    /// ```
    pub fn to_display(&self) -> String {
        match self.year.as_deref() {
            Some(year) if !year.is_empty() => format!("{} ({})", self.title, year),
            _ => self.title.clone(),
        }
    }

    /// Whether the provider marked this document as a movie.
    pub fn is_movie(&self) -> bool {
        self.media_type.as_deref() == Some("movie")
    }

    /// Season numbers in ascending order.
    pub fn season_numbers(&self) -> Vec<i64> {
        let mut numbers: Vec<i64> = self.seasons.iter().map(|s| s.season_number).collect();
        numbers.sort_unstable();
        numbers
    }

    /// Total number of episodes across all seasons.
    pub fn episode_count(&self) -> usize {
        self.seasons.iter().map(|s| s.episodes.len()).sum()
    }
}

/// Restricts aggregate computation to one season.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeasonFilter {
    /// Every season.
    #[default]
    All,
    /// Only the season with this number.
    Season(i64),
}

impl SeasonFilter {
    /// Whether a season with the given number passes the filter.
    pub fn matches(&self, season_number: i64) -> bool {
        match self {
            SeasonFilter::All => true,
            SeasonFilter::Season(n) => *n == season_number,
        }
    }

    /// Iterate the seasons of a series that pass the filter.
    pub fn apply(self, series: &SeriesData) -> impl Iterator<Item = &Season> {
        series
            .seasons
            .iter()
            .filter(move |s| self.matches(s.season_number))
    }
}

impl fmt::Display for SeasonFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeasonFilter::All => write!(f, "All Seasons"),
            SeasonFilter::Season(n) => write!(f, "Season {}", n),
        }
    }
}

impl FromStr for SeasonFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(SeasonFilter::All);
        }
        trimmed
            .parse::<i64>()
            .map(SeasonFilter::Season)
            .map_err(|_| {
                AppError::InvalidInput(format!(
                    "season filter must be 'all' or a season number, got '{}'",
                    s
                ))
            })
    }
}

fn null_as_zero<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

/// Parse a provider JSON document into series data.
pub fn parse_series(json: &str) -> Result<SeriesData> {
    let series: SeriesData = serde_json::from_str(json)?;
    debug!(
        "Parsed '{}': {} seasons, {} episodes",
        series.title,
        series.seasons.len(),
        series.episode_count()
    );
    Ok(series)
}

/// Load a provider JSON document from disk.
///
/// Fails with [`AppError::NotASeries`] when the document describes a movie.
pub fn load_series_file<P: AsRef<Path>>(path: P) -> Result<SeriesData> {
    let path = path.as_ref();
    debug!("Loading series data from {}", path.display());
    let content = fs::read_to_string(path)?;
    let series = parse_series(&content)?;
    if series.is_movie() {
        return Err(AppError::NotASeries(series.title));
    }
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_camel_case_fields() {
        let json = r#"{
            "title": "Test Show",
            "type": "series",
            "year": "2008",
            "imdbId": "tt0903747",
            "posterUrl": "ignored",
            "seasons": [
                {"seasonNumber": 1, "episodes": [
                    {"episodeNumber": 1, "title": "Pilot", "rating": 9.0, "runtime": 58}
                ]}
            ]
        }"#;
        let series = parse_series(json).unwrap();
        assert_eq!(series.title, "Test Show");
        assert_eq!(series.imdb_id.as_deref(), Some("tt0903747"));
        assert_eq!(series.seasons[0].season_number, 1);
        assert_eq!(series.seasons[0].episodes[0].episode_number, 1);
        assert_eq!(series.seasons[0].episodes[0].runtime, Some(58));
        assert!(!series.is_movie());
    }

    #[test]
    fn test_null_rating_reads_as_zero() {
        let json = r#"{"title": "X", "seasons": [
            {"seasonNumber": 1, "episodes": [
                {"episodeNumber": 1, "title": "A", "rating": null},
                {"episodeNumber": 2, "title": "B"}
            ]}
        ]}"#;
        let series = parse_series(json).unwrap();
        assert_eq!(series.seasons[0].episodes[0].rating, 0.0);
        assert_eq!(series.seasons[0].episodes[1].rating, 0.0);
        assert_eq!(series.seasons[0].episodes[1].runtime, None);
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse_series("{not json").unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }

    #[test]
    fn test_episode_display_without_title() {
        let ep = Episode {
            episode_number: 7,
            title: String::new(),
            rating: 7.0,
            runtime: None,
            overview: None,
        };
        assert_eq!(ep.to_display(), "E7");
        assert_eq!(ep.runtime_display(), "N/A");
    }

    #[test]
    fn test_series_display_without_year() {
        let series = parse_series(r#"{"title": "Nameless"}"#).unwrap();
        assert_eq!(series.to_display(), "Nameless");
        assert!(series.seasons.is_empty());
    }

    #[test]
    fn test_season_numbers_sorted() {
        let series = parse_series(
            r#"{"title": "X", "seasons": [
                {"seasonNumber": 3, "episodes": []},
                {"seasonNumber": 1, "episodes": []},
                {"seasonNumber": 2, "episodes": []}
            ]}"#,
        )
        .unwrap();
        assert_eq!(series.season_numbers(), vec![1, 2, 3]);
    }

    #[test]
    fn test_season_filter_parse() {
        assert_eq!("all".parse::<SeasonFilter>().unwrap(), SeasonFilter::All);
        assert_eq!("ALL".parse::<SeasonFilter>().unwrap(), SeasonFilter::All);
        assert_eq!(" 2 ".parse::<SeasonFilter>().unwrap(), SeasonFilter::Season(2));
        assert!("two".parse::<SeasonFilter>().is_err());
    }

    #[test]
    fn test_season_filter_matches() {
        assert!(SeasonFilter::All.matches(5));
        assert!(SeasonFilter::Season(2).matches(2));
        assert!(!SeasonFilter::Season(2).matches(3));
        assert_eq!(SeasonFilter::Season(4).to_string(), "Season 4");
        assert_eq!(SeasonFilter::All.to_string(), "All Seasons");
    }
}
