//! Application state management and input handling.

use crate::binge::{BingeError, BingeParameters, BingePlan};
use crate::config::Config;
use crate::highlights::{series_highlights, SeriesHighlights};
use crate::links::{episode_discussion_url, episode_reference_url};
use crate::matrix::build_episode_matrix;
use crate::stats::{compute_aggregate_stats, AggregateStats};
use crate::types::{Episode, SeasonFilter, SeriesData};
use chrono::{Days, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::types::{Action, CalculatorField, Focus};

/// Step applied to hours per day by one key press.
const HOURS_STEP: f64 = 0.5;
/// Step applied to days per week by one key press.
const DAYS_STEP: f64 = 1.0;

/// Application state for the TUI.
///
/// Everything shown on screen is derived from this state on every draw.
pub struct App {
    /// Loaded series: the base series first, then an optional comparison
    pub series: Vec<SeriesData>,
    /// Index of the series currently displayed
    pub active: usize,
    /// Panel that receives navigation keys
    pub focus: Focus,
    /// Selected heatmap row (season index in ascending order)
    pub selected_row: usize,
    /// Selected heatmap column (episode number - 1)
    pub selected_col: usize,
    /// Selected calculator field
    pub field: CalculatorField,
    /// Binge cadence: hours per day
    pub hours_per_day: f64,
    /// Binge cadence: days per week
    pub days_per_week: f64,
    /// Binge start date
    pub start_date: NaiveDate,
    /// Seasons counted by the binge calculator
    pub season_filter: SeasonFilter,
    /// Whether best/worst markers are drawn
    pub show_highlights: bool,
    /// Whether help modal is shown
    pub show_help: bool,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message shown in the footer
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App for the given series.
    pub fn new(series: Vec<SeriesData>, config: &Config, start_date: NaiveDate) -> Self {
        Self {
            series,
            active: 0,
            focus: Focus::Heatmap,
            selected_row: 0,
            selected_col: 0,
            field: CalculatorField::Season,
            hours_per_day: config.hours_per_day,
            days_per_week: config.days_per_week,
            start_date,
            season_filter: SeasonFilter::All,
            show_highlights: config.show_highlights,
            show_help: false,
            should_quit: false,
            status_message: None,
        }
    }

    /// The series currently displayed.
    pub fn current(&self) -> Option<&SeriesData> {
        self.series.get(self.active)
    }

    /// Aggregate stats over every season of the displayed series.
    pub fn stats(&self) -> AggregateStats {
        self.current()
            .map(|s| compute_aggregate_stats(s, SeasonFilter::All))
            .unwrap_or_default()
    }

    /// Best and worst episodes of the displayed series.
    pub fn series_highlights(&self) -> SeriesHighlights {
        self.current()
            .map(|s| series_highlights(&build_episode_matrix(s)))
            .unwrap_or_default()
    }

    /// Current binge calculator inputs.
    pub fn binge_parameters(&self) -> BingeParameters {
        BingeParameters {
            hours_per_day: self.hours_per_day,
            days_per_week: self.days_per_week,
            start_date: self.start_date,
            season_filter: self.season_filter,
        }
    }

    /// Projection for the current inputs, recomputed on every call.
    pub fn binge_result(&self) -> Result<Option<BingePlan>, BingeError> {
        match self.current() {
            Some(series) => self.binge_parameters().plan(series),
            None => Ok(None),
        }
    }

    /// The selected cell's season number and episode, if the cell is not a gap.
    pub fn selected_episode(&self) -> Option<(i64, &Episode)> {
        let series = self.current()?;
        let matrix = build_episode_matrix(series);
        let row = matrix.rows.get(self.selected_row)?;
        let episode = matrix.cell(self.selected_row, self.selected_col)?;
        Some((row.season_number, episode))
    }

    fn grid_size(&self) -> (usize, usize) {
        match self.current() {
            Some(series) => {
                let matrix = build_episode_matrix(series);
                (matrix.rows.len(), matrix.width())
            }
            None => (0, 0),
        }
    }

    fn move_selection(&mut self, d_row: isize, d_col: isize) {
        let (rows, cols) = self.grid_size();
        if rows == 0 || cols == 0 {
            return;
        }
        self.selected_row = self.selected_row.saturating_add_signed(d_row).min(rows - 1);
        self.selected_col = self.selected_col.saturating_add_signed(d_col).min(cols - 1);
    }

    /// Switch to the next loaded series and reset per-series state.
    pub fn next_series(&mut self) {
        if self.series.len() < 2 {
            return;
        }
        self.active = (self.active + 1) % self.series.len();
        self.selected_row = 0;
        self.selected_col = 0;
        self.season_filter = SeasonFilter::All;
        self.status_message = None;
    }

    fn cycle_season(&mut self, forward: bool) {
        let Some(series) = self.current() else {
            return;
        };
        let mut options = vec![SeasonFilter::All];
        options.extend(series.season_numbers().into_iter().map(SeasonFilter::Season));

        let pos = options
            .iter()
            .position(|f| *f == self.season_filter)
            .unwrap_or(0);
        let len = options.len();
        let next = if forward { (pos + 1) % len } else { (pos + len - 1) % len };
        self.season_filter = options[next];
    }

    fn shift_start_date(&mut self, forward: bool) {
        let shifted = if forward {
            self.start_date.checked_add_days(Days::new(1))
        } else {
            self.start_date.checked_sub_days(Days::new(1))
        };
        if let Some(date) = shifted {
            self.start_date = date;
        }
    }

    fn adjust_field(&mut self, forward: bool) {
        let sign = if forward { 1.0 } else { -1.0 };
        match self.field {
            CalculatorField::Season => self.cycle_season(forward),
            CalculatorField::HoursPerDay => self.hours_per_day += sign * HOURS_STEP,
            CalculatorField::DaysPerWeek => self.days_per_week += sign * DAYS_STEP,
            CalculatorField::StartDate => self.shift_start_date(forward),
        }
    }

    fn selected_link(&self, reference: bool) -> Action {
        let Some(series) = self.current() else {
            return Action::None;
        };
        match self.selected_episode() {
            Some((season, episode)) => {
                let url = if reference {
                    episode_reference_url(series, season, episode.episode_number)
                } else {
                    episode_discussion_url(series, season, episode.episode_number)
                };
                Action::Link(url)
            }
            None => Action::None,
        }
    }

    /// Set status message.
    pub fn set_status(&mut self, message: &str) {
        self.status_message = Some(message.to_string());
    }

    /// Handle keyboard input and return an action.
    pub fn handle_input(&mut self, key: KeyEvent) -> Action {
        // Global quit with Ctrl+C or Ctrl+Q
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => {
                    self.should_quit = true;
                    return Action::Quit;
                }
                _ => {}
            }
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                self.show_help = false;
            }
            return Action::None;
        }

        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return Action::Quit;
            }
            KeyCode::Char('?') => {
                self.show_help = true;
                return Action::None;
            }
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Heatmap => Focus::Calculator,
                    Focus::Calculator => Focus::Heatmap,
                };
                return Action::None;
            }
            KeyCode::Char('c') => {
                self.next_series();
                return Action::None;
            }
            KeyCode::Char('b') => {
                self.show_highlights = !self.show_highlights;
                return Action::None;
            }
            _ => {}
        }

        match self.focus {
            Focus::Heatmap => self.handle_heatmap_input(key),
            Focus::Calculator => self.handle_calculator_input(key),
        }
    }

    fn handle_heatmap_input(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1, 0),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1, 0),
            KeyCode::Left | KeyCode::Char('h') => self.move_selection(0, -1),
            KeyCode::Right | KeyCode::Char('l') => self.move_selection(0, 1),
            KeyCode::Home => self.selected_col = 0,
            KeyCode::Enter => return self.selected_link(false),
            KeyCode::Char('i') => return self.selected_link(true),
            _ => {}
        }
        Action::None
    }

    fn handle_calculator_input(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.field = self.field.prev(),
            KeyCode::Down | KeyCode::Char('j') => self.field = self.field.next(),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') => self.adjust_field(true),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => self.adjust_field(false),
            _ => {}
        }
        Action::None
    }
}
