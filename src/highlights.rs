//! Best and worst episode highlighting.
//!
//! This is an optional overlay on top of the fixed rating buckets: it marks
//! the best and worst episode of each season and of the whole series.

use crate::matrix::EpisodeMatrix;

/// Best and worst cell of a single season row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeasonHighlights {
    /// Column of the highest rated episode.
    pub best: Option<usize>,
    /// Column of the lowest rated episode.
    pub worst: Option<usize>,
}

/// A notable episode located by season and episode number.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EpisodeMark {
    pub season_number: i64,
    pub episode_number: i64,
    pub rating: f64,
}

impl EpisodeMark {
    /// Short label such as "S2E4 (9.1)".
    ///
    /// # Examples
    ///
    /// ```
    /// use series_heatmap::highlights::EpisodeMark;
    ///
    /// let mark = EpisodeMark { season_number: 2, episode_number: 4, rating: 9.1 };
    /// assert_eq!(mark.to_display(), "S2E4 (9.1)");
    /// ```
    pub fn to_display(&self) -> String {
        format!(
            "S{}E{} ({:.1})",
            self.season_number, self.episode_number, self.rating
        )
    }
}

/// Series-wide extremes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SeriesHighlights {
    pub best: Option<EpisodeMark>,
    pub worst: Option<EpisodeMark>,
}

/// Best and worst columns for every row of the matrix.
///
/// Ties keep the earliest episode.
pub fn season_highlights(matrix: &EpisodeMatrix<'_>) -> Vec<SeasonHighlights> {
    matrix
        .rows
        .iter()
        .map(|row| {
            let mut best: Option<(usize, f64)> = None;
            let mut worst: Option<(usize, f64)> = None;

            for (col, cell) in row.cells.iter().enumerate() {
                let Some(episode) = cell else { continue };
                if best.is_none_or(|(_, r)| episode.rating > r) {
                    best = Some((col, episode.rating));
                }
                if worst.is_none_or(|(_, r)| episode.rating < r) {
                    worst = Some((col, episode.rating));
                }
            }

            SeasonHighlights {
                best: best.map(|(col, _)| col),
                worst: worst.map(|(col, _)| col),
            }
        })
        .collect()
}

/// Best and worst episodes across the whole series.
pub fn series_highlights(matrix: &EpisodeMatrix<'_>) -> SeriesHighlights {
    let mut best: Option<EpisodeMark> = None;
    let mut worst: Option<EpisodeMark> = None;

    for row in &matrix.rows {
        for episode in row.episodes() {
            let mark = EpisodeMark {
                season_number: row.season_number,
                episode_number: episode.episode_number,
                rating: episode.rating,
            };
            if best.is_none_or(|b| mark.rating > b.rating) {
                best = Some(mark);
            }
            if worst.is_none_or(|w| mark.rating < w.rating) {
                worst = Some(mark);
            }
        }
    }

    SeriesHighlights { best, worst }
}
