//! Dense season×episode grid construction.
//!
//! Providers deliver seasons in arbitrary order with gaps in episode
//! numbering. The heatmap needs a rectangular grid where every row has the
//! same width so columns line up across seasons.

use crate::types::{Episode, SeriesData};
use log::trace;
use std::collections::HashMap;

/// Largest episode number that gets a column. Higher numbers are left out of
/// the grid the same way numbers below 1 are.
pub const MAX_EPISODE_COLUMNS: i64 = 10_000;

/// One season's row in the heatmap.
#[derive(Clone, Debug, PartialEq)]
pub struct EpisodeMatrixRow<'a> {
    /// Season number of this row.
    pub season_number: i64,
    /// Cell `i` holds the episode numbered `i + 1`, or `None` for a gap.
    pub cells: Vec<Option<&'a Episode>>,
}

impl<'a> EpisodeMatrixRow<'a> {
    /// Episodes actually present in this row, in episode order.
    pub fn episodes(&self) -> impl Iterator<Item = &'a Episode> + '_ {
        self.cells.iter().filter_map(|c| *c)
    }
}

/// Dense grid of all seasons, ordered by ascending season number.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EpisodeMatrix<'a> {
    /// Rows, one per season.
    pub rows: Vec<EpisodeMatrixRow<'a>>,
    /// Largest episode number seen in any season, 0 when there are none.
    pub max_episode_number: i64,
}

impl<'a> EpisodeMatrix<'a> {
    /// Number of columns shared by every row.
    pub fn width(&self) -> usize {
        usize::try_from(self.max_episode_number).unwrap_or(0)
    }

    /// Whether the matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look up a cell by row index and 0-based column.
    pub fn cell(&self, row: usize, col: usize) -> Option<&'a Episode> {
        self.rows.get(row).and_then(|r| r.cells.get(col).copied().flatten())
    }
}

/// Build the dense episode matrix for a series.
///
/// Every row has length equal to the largest episode number across all
/// seasons. Missing episode numbers become `None` cells. Episode numbers
/// below 1 or above [`MAX_EPISODE_COLUMNS`] have no column and are skipped.
/// If a season repeats an episode number, the first occurrence is kept.
pub fn build_episode_matrix(series: &SeriesData) -> EpisodeMatrix<'_> {
    let mut seasons: Vec<_> = series.seasons.iter().collect();
    seasons.sort_by_key(|s| s.season_number);

    let max_episode_number = seasons
        .iter()
        .flat_map(|s| s.episodes.iter())
        .map(|e| e.episode_number)
        .filter(|&n| n <= MAX_EPISODE_COLUMNS)
        .max()
        .unwrap_or(0)
        .max(0);

    let rows = seasons
        .into_iter()
        .map(|season| {
            let mut index: HashMap<i64, &Episode> = HashMap::with_capacity(season.episodes.len());
            for episode in &season.episodes {
                index.entry(episode.episode_number).or_insert(episode);
            }

            let cells = (1..=max_episode_number)
                .map(|n| index.get(&n).copied())
                .collect();

            EpisodeMatrixRow {
                season_number: season.season_number,
                cells,
            }
        })
        .collect::<Vec<_>>();

    trace!(
        "Built matrix for '{}': {} rows x {} columns",
        series.title,
        rows.len(),
        max_episode_number
    );

    EpisodeMatrix {
        rows,
        max_episode_number,
    }
}
