//! TUI type definitions for focus, calculator fields, and actions.

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Heatmap,
    Calculator,
}

/// Editable inputs of the binge calculator, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorField {
    Season,
    HoursPerDay,
    DaysPerWeek,
    StartDate,
}

impl CalculatorField {
    pub const ALL: [CalculatorField; 4] = [
        CalculatorField::Season,
        CalculatorField::HoursPerDay,
        CalculatorField::DaysPerWeek,
        CalculatorField::StartDate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CalculatorField::Season => "Season",
            CalculatorField::HoursPerDay => "Hours / Day",
            CalculatorField::DaysPerWeek => "Days / Week",
            CalculatorField::StartDate => "Start Date",
        }
    }

    pub fn next(self) -> Self {
        match self {
            CalculatorField::Season => CalculatorField::HoursPerDay,
            CalculatorField::HoursPerDay => CalculatorField::DaysPerWeek,
            CalculatorField::DaysPerWeek => CalculatorField::StartDate,
            CalculatorField::StartDate => CalculatorField::Season,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            CalculatorField::Season => CalculatorField::StartDate,
            CalculatorField::HoursPerDay => CalculatorField::Season,
            CalculatorField::DaysPerWeek => CalculatorField::HoursPerDay,
            CalculatorField::StartDate => CalculatorField::DaysPerWeek,
        }
    }
}

/// Actions that can be returned from the TUI.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No action, continue running
    None,
    /// Quit the application
    Quit,
    /// A link was requested for the selected episode
    Link(String),
}
