//! Aggregate statistics over a series' episodes.

use crate::types::{SeasonFilter, SeriesData};

/// Totals and averages across a set of episodes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AggregateStats {
    /// Number of episodes considered.
    pub episode_count: usize,
    /// Sum of known runtimes, in minutes.
    pub total_runtime_minutes: u64,
    /// Mean rating, 0 when there are no episodes.
    pub average_rating: f64,
    /// Mean runtime rounded to the nearest minute, 0 when there are no episodes.
    pub average_runtime_minutes: u64,
}

impl AggregateStats {
    /// Whole hours of total runtime.
    pub fn total_runtime_hours(&self) -> u64 {
        self.total_runtime_minutes / 60
    }

    /// Minutes left over after whole hours.
    pub fn total_runtime_remainder_minutes(&self) -> u64 {
        self.total_runtime_minutes % 60
    }

    /// Total runtime as hours and minutes.
    ///
    /// # Examples
    ///
    /// ```
    /// use series_heatmap::stats::AggregateStats;
    ///
    /// let stats = AggregateStats { total_runtime_minutes: 150, ..Default::default() };
    /// assert_eq!(stats.runtime_display(), "2h 30m");
    /// ```
    pub fn runtime_display(&self) -> String {
        format_runtime(self.total_runtime_minutes)
    }

    /// Average rating with one decimal, or "N/A" when there is none.
    pub fn rating_display(&self) -> String {
        if self.average_rating > 0.0 {
            format!("{:.1}", self.average_rating)
        } else {
            "N/A".to_string()
        }
    }
}

/// Format a number of minutes as hours and minutes, e.g. "2h 30m".
pub fn format_runtime(minutes: u64) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// Sum of episode runtimes for the seasons passing the filter.
///
/// Episodes without a runtime count as 0 minutes.
pub fn total_runtime_minutes(series: &SeriesData, filter: SeasonFilter) -> u64 {
    filter
        .apply(series)
        .flat_map(|s| s.episodes.iter())
        .map(|e| u64::from(e.runtime.unwrap_or(0)))
        .sum()
}

/// Compute totals and averages for the seasons passing the filter.
///
/// Never fails; an empty selection produces all-zero stats.
pub fn compute_aggregate_stats(series: &SeriesData, filter: SeasonFilter) -> AggregateStats {
    let mut episode_count = 0usize;
    let mut rating_sum = 0.0;
    let mut total_runtime_minutes = 0u64;

    for episode in filter.apply(series).flat_map(|s| s.episodes.iter()) {
        episode_count += 1;
        rating_sum += episode.rating;
        total_runtime_minutes += u64::from(episode.runtime.unwrap_or(0));
    }

    if episode_count == 0 {
        return AggregateStats {
            total_runtime_minutes,
            ..Default::default()
        };
    }

    let count = episode_count as f64;
    AggregateStats {
        episode_count,
        total_runtime_minutes,
        average_rating: rating_sum / count,
        average_runtime_minutes: (total_runtime_minutes as f64 / count).round() as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Episode, Season};

    fn ep(n: i64, rating: f64, runtime: Option<u32>) -> Episode {
        Episode {
            episode_number: n,
            title: String::new(),
            rating,
            runtime,
            overview: None,
        }
    }

    fn series(seasons: Vec<Season>) -> SeriesData {
        SeriesData {
            title: "Test".to_string(),
            media_type: None,
            year: None,
            description: None,
            seasons,
            imdb_id: None,
        }
    }

    #[test]
    fn test_zero_episodes() {
        let stats = compute_aggregate_stats(&series(vec![]), SeasonFilter::All);
        assert_eq!(stats, AggregateStats::default());
        assert_eq!(stats.runtime_display(), "0h 0m");
        assert_eq!(stats.rating_display(), "N/A");
    }

    #[test]
    fn test_average_rating_and_total_runtime() {
        let data = series(vec![Season {
            season_number: 1,
            episodes: vec![
                ep(1, 8.0, Some(50)),
                ep(2, 9.0, Some(55)),
                ep(3, 7.0, Some(45)),
            ],
        }]);
        let stats = compute_aggregate_stats(&data, SeasonFilter::All);
        assert_eq!(stats.average_rating, 8.0);
        assert_eq!(stats.total_runtime_minutes, 150);
        assert_eq!(stats.total_runtime_hours(), 2);
        assert_eq!(stats.total_runtime_remainder_minutes(), 30);
        assert_eq!(stats.average_runtime_minutes, 50);
        assert_eq!(stats.rating_display(), "8.0");
    }

    #[test]
    fn test_missing_runtime_counts_as_zero() {
        let data = series(vec![Season {
            season_number: 1,
            episodes: vec![ep(1, 8.0, None), ep(2, 8.0, Some(45)), ep(3, 8.0, Some(0))],
        }]);
        let stats = compute_aggregate_stats(&data, SeasonFilter::All);
        assert_eq!(stats.total_runtime_minutes, 45);
        assert_eq!(stats.episode_count, 3);
        assert_eq!(stats.average_runtime_minutes, 15);
    }

    #[test]
    fn test_average_runtime_rounds_half_up() {
        let data = series(vec![Season {
            season_number: 1,
            episodes: vec![ep(1, 8.0, Some(45)), ep(2, 8.0, Some(46))],
        }]);
        let stats = compute_aggregate_stats(&data, SeasonFilter::All);
        assert_eq!(stats.average_runtime_minutes, 46);
    }

    #[test]
    fn test_season_filter() {
        let data = series(vec![
            Season {
                season_number: 1,
                episodes: vec![ep(1, 9.0, Some(60))],
            },
            Season {
                season_number: 2,
                episodes: vec![ep(1, 5.0, Some(30)), ep(2, 6.0, Some(30))],
            },
            Season {
                season_number: 3,
                episodes: vec![],
            },
        ]);
        let s2 = compute_aggregate_stats(&data, SeasonFilter::Season(2));
        assert_eq!(s2.episode_count, 2);
        assert_eq!(s2.total_runtime_minutes, 60);
        assert_eq!(s2.average_rating, 5.5);

        let s3 = compute_aggregate_stats(&data, SeasonFilter::Season(3));
        assert_eq!(s3, AggregateStats::default());
        assert_eq!(total_runtime_minutes(&data, SeasonFilter::Season(3)), 0);

        assert_eq!(total_runtime_minutes(&data, SeasonFilter::All), 120);
        assert_eq!(total_runtime_minutes(&data, SeasonFilter::Season(9)), 0);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let data = series(vec![Season {
            season_number: 1,
            episodes: vec![ep(1, 7.3, Some(41)), ep(2, 8.8, Some(44))],
        }]);
        let first = compute_aggregate_stats(&data, SeasonFilter::All);
        let second = compute_aggregate_stats(&data, SeasonFilter::All);
        assert_eq!(first, second);
    }
}
