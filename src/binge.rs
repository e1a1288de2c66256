//! Binge-watching schedule projection.
//!
//! Given a viewing cadence and the runtime still to watch, work out the date
//! the last episode would be finished.

use crate::stats::total_runtime_minutes;
use crate::types::{SeasonFilter, SeriesData};
use chrono::{Days, NaiveDate};
use log::debug;
use std::error::Error;
use std::fmt;

/// Maximum hours that can be watched in a day.
pub const MAX_HOURS_PER_DAY: f64 = 24.0;
/// Maximum days that can be watched in a week.
pub const MAX_DAYS_PER_WEEK: f64 = 7.0;

const DAY_PRECISION: f64 = 1e9;

/// Reasons the calculator refuses to produce a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BingeError {
    /// The cadence is outside the allowed bounds.
    InvalidCadence(&'static str),
    /// The finish date falls outside the supported calendar.
    DateOutOfRange,
}

impl fmt::Display for BingeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BingeError::InvalidCadence(msg) => write!(f, "{}", msg),
            BingeError::DateOutOfRange => write!(f, "finish date is out of range"),
        }
    }
}

impl Error for BingeError {}

/// Check cadence bounds. The first failing rule wins.
pub fn validate_cadence(hours_per_day: f64, days_per_week: f64) -> Result<(), BingeError> {
    if hours_per_day > MAX_HOURS_PER_DAY {
        return Err(BingeError::InvalidCadence("hours per day cannot exceed 24"));
    }
    // Negated comparison so NaN is rejected here too.
    if !(hours_per_day > 0.0) {
        return Err(BingeError::InvalidCadence("hours per day must be positive"));
    }
    if days_per_week > MAX_DAYS_PER_WEEK {
        return Err(BingeError::InvalidCadence("days per week cannot exceed 7"));
    }
    if !(days_per_week > 0.0) {
        return Err(BingeError::InvalidCadence("days per week must be positive"));
    }
    Ok(())
}

/// Number of calendar days needed to watch `total_minutes` at the cadence.
///
/// The cadence must already be valid.
fn days_required(total_minutes: u64, hours_per_day: f64, days_per_week: f64) -> f64 {
    let hours_per_week = hours_per_day * days_per_week;
    // Multiply before dividing so whole-day results stay exact.
    let days = total_minutes as f64 * 7.0 / (60.0 * hours_per_week);
    // Snap to 1e-9 of a day so products like 0.3 * 3 do not add a day.
    ((days * DAY_PRECISION).round() / DAY_PRECISION).ceil()
}

/// Project the finish date for a runtime total and cadence.
///
/// Returns `Ok(None)` when there is nothing to watch. Validation runs first,
/// so an invalid cadence is reported even for an empty runtime.
pub fn compute_binge_finish(
    total_runtime_minutes: u64,
    hours_per_day: f64,
    days_per_week: f64,
    start_date: NaiveDate,
) -> Result<Option<NaiveDate>, BingeError> {
    validate_cadence(hours_per_day, days_per_week).inspect_err(|e| {
        debug!("Rejected cadence {}h/{}d: {}", hours_per_day, days_per_week, e);
    })?;

    if total_runtime_minutes == 0 {
        return Ok(None);
    }

    let days = days_required(total_runtime_minutes, hours_per_day, days_per_week);
    add_days(start_date, days).map(Some)
}

fn add_days(start: NaiveDate, days: f64) -> Result<NaiveDate, BingeError> {
    if !days.is_finite() || days > u32::MAX as f64 {
        return Err(BingeError::DateOutOfRange);
    }
    start
        .checked_add_days(Days::new(days as u64))
        .ok_or(BingeError::DateOutOfRange)
}

/// Render a finish date in long form, e.g. "Saturday, January 6, 2024".
pub fn format_finish_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Cadence and season selection supplied by the viewer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BingeParameters {
    pub hours_per_day: f64,
    pub days_per_week: f64,
    pub start_date: NaiveDate,
    pub season_filter: SeasonFilter,
}

/// A computed binge projection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BingePlan {
    /// Runtime of the selected seasons, in minutes.
    pub total_runtime_minutes: u64,
    /// Calendar days from the start date to the finish date.
    pub days_required: u64,
    /// Projected finish date.
    pub finish_date: NaiveDate,
}

impl BingeParameters {
    /// Recompute the runtime for the selected seasons and project the finish.
    ///
    /// Returns `Ok(None)` when the selection has no runtime.
    pub fn plan(&self, series: &SeriesData) -> Result<Option<BingePlan>, BingeError> {
        let total = total_runtime_minutes(series, self.season_filter);
        let finish = compute_binge_finish(
            total,
            self.hours_per_day,
            self.days_per_week,
            self.start_date,
        )?;

        Ok(finish.map(|finish_date| BingePlan {
            total_runtime_minutes: total,
            days_required: (finish_date - self.start_date).num_days().max(0) as u64,
            finish_date,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Episode, Season};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn series() -> SeriesData {
        let ep = |n: i64, runtime: u32| Episode {
            episode_number: n,
            title: String::new(),
            rating: 8.0,
            runtime: Some(runtime),
            overview: None,
        };
        SeriesData {
            title: "Test".to_string(),
            media_type: None,
            year: None,
            description: None,
            seasons: vec![
                Season {
                    season_number: 1,
                    episodes: vec![ep(1, 300), ep(2, 300)],
                },
                Season {
                    season_number: 2,
                    episodes: vec![ep(1, 120)],
                },
                Season {
                    season_number: 3,
                    episodes: vec![],
                },
            ],
            imdb_id: None,
        }
    }

    #[test]
    fn test_basic_projection() {
        let finish = compute_binge_finish(600, 2.0, 7.0, date(2024, 1, 1)).unwrap();
        assert_eq!(finish, Some(date(2024, 1, 6)));
    }

    #[test]
    fn test_partial_day_rounds_up() {
        // 61 minutes at 1h/day, every day: 2 days
        let finish = compute_binge_finish(61, 1.0, 7.0, date(2024, 1, 1)).unwrap();
        assert_eq!(finish, Some(date(2024, 1, 3)));
    }

    #[test]
    fn test_fewer_days_per_week_stretches_schedule() {
        // 10 hours at 2h/day, 5 days/week: 1 week = 7 days
        let finish = compute_binge_finish(600, 2.0, 5.0, date(2024, 1, 1)).unwrap();
        assert_eq!(finish, Some(date(2024, 1, 8)));
    }

    #[test]
    fn test_fractional_cadence_exact_week() {
        // 0.3 * 3 is not exact in f64; 54 minutes at 0.9h/week is still 7 days
        let finish = compute_binge_finish(54, 0.3, 3.0, date(2024, 1, 1)).unwrap();
        assert_eq!(finish, Some(date(2024, 1, 8)));
        assert_eq!(days_required(54, 0.3, 3.0), 7.0);
    }

    #[test]
    fn test_crosses_month_and_leap_day() {
        let finish = compute_binge_finish(60 * 24 * 2, 24.0, 7.0, date(2024, 2, 28)).unwrap();
        assert_eq!(finish, Some(date(2024, 3, 1)));
    }

    #[test]
    fn test_hours_over_24() {
        let err = compute_binge_finish(600, 25.0, 7.0, date(2024, 1, 1)).unwrap_err();
        assert_eq!(err, BingeError::InvalidCadence("hours per day cannot exceed 24"));
        assert_eq!(err.to_string(), "hours per day cannot exceed 24");
    }

    #[test]
    fn test_validation_order() {
        assert_eq!(
            validate_cadence(0.0, 9.0),
            Err(BingeError::InvalidCadence("hours per day must be positive"))
        );
        assert_eq!(
            validate_cadence(-1.0, 0.0),
            Err(BingeError::InvalidCadence("hours per day must be positive"))
        );
        assert_eq!(
            validate_cadence(2.0, 8.0),
            Err(BingeError::InvalidCadence("days per week cannot exceed 7"))
        );
        assert_eq!(
            validate_cadence(2.0, 0.0),
            Err(BingeError::InvalidCadence("days per week must be positive"))
        );
        assert_eq!(validate_cadence(24.0, 7.0), Ok(()));
    }

    #[test]
    fn test_nan_is_rejected() {
        assert_eq!(
            validate_cadence(f64::NAN, 7.0),
            Err(BingeError::InvalidCadence("hours per day must be positive"))
        );
        assert_eq!(
            validate_cadence(2.0, f64::NAN),
            Err(BingeError::InvalidCadence("days per week must be positive"))
        );
    }

    #[test]
    fn test_zero_runtime_has_no_result() {
        assert_eq!(compute_binge_finish(0, 2.0, 7.0, date(2024, 1, 1)), Ok(None));
    }

    #[test]
    fn test_zero_runtime_still_validates() {
        assert!(compute_binge_finish(0, 30.0, 7.0, date(2024, 1, 1)).is_err());
    }

    #[test]
    fn test_tiny_cadence_is_out_of_range() {
        let err = compute_binge_finish(u64::MAX, 1e-12, 1.0, date(2024, 1, 1)).unwrap_err();
        assert_eq!(err, BingeError::DateOutOfRange);
    }

    #[test]
    fn test_format_finish_date() {
        assert_eq!(format_finish_date(date(2024, 1, 6)), "Saturday, January 6, 2024");
    }

    #[test]
    fn test_plan_all_seasons() {
        let params = BingeParameters {
            hours_per_day: 2.0,
            days_per_week: 7.0,
            start_date: date(2024, 1, 1),
            season_filter: SeasonFilter::All,
        };
        let plan = params.plan(&series()).unwrap().unwrap();
        assert_eq!(plan.total_runtime_minutes, 720);
        assert_eq!(plan.days_required, 6);
        assert_eq!(plan.finish_date, date(2024, 1, 7));
    }

    #[test]
    fn test_plan_filtered_season() {
        let params = BingeParameters {
            hours_per_day: 1.0,
            days_per_week: 7.0,
            start_date: date(2024, 1, 1),
            season_filter: SeasonFilter::Season(2),
        };
        let plan = params.plan(&series()).unwrap().unwrap();
        assert_eq!(plan.total_runtime_minutes, 120);
        assert_eq!(plan.finish_date, date(2024, 1, 3));
    }

    #[test]
    fn test_plan_empty_season_has_no_result() {
        let params = BingeParameters {
            hours_per_day: 2.0,
            days_per_week: 7.0,
            start_date: date(2024, 1, 1),
            season_filter: SeasonFilter::Season(3),
        };
        assert_eq!(params.plan(&series()), Ok(None));
    }
}
