//! Range-select calendar
//!
//! A two-click date range picker over a month grid. The first click picks
//! the start day, the second picks the end day; a second click on or before
//! the start swaps the two so the emitted range is always ordered.

pub mod grid;

use std::fmt;

use chrono::{Datelike, Months, NaiveDate};
use tracing::debug;

use crate::models::DateRange;

pub use grid::{
    DayCell, GRID_CELLS, MonthGrid, WEEKDAY_LABELS, first_of_month, month_label, plain_cell,
};

/// Selection progress of one calendar instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Nothing picked
    #[default]
    Idle,
    /// Start picked, waiting for the end
    SelectingEnd { start: NaiveDate },
    /// Both picked, `start <= end`
    Complete { start: NaiveDate, end: NaiveDate },
}

impl Selection {
    #[must_use]
    pub fn start(&self) -> Option<NaiveDate> {
        match self {
            Selection::Idle => None,
            Selection::SelectingEnd { start } | Selection::Complete { start, .. } => Some(*start),
        }
    }

    #[must_use]
    pub fn end(&self) -> Option<NaiveDate> {
        match self {
            Selection::Complete { end, .. } => Some(*end),
            _ => None,
        }
    }

    #[must_use]
    pub fn range(&self) -> Option<DateRange> {
        match self {
            Selection::Complete { start, end } => Some(DateRange {
                start: *start,
                end: *end,
            }),
            _ => None,
        }
    }
}

type RangeCallback = Box<dyn FnMut(NaiveDate, NaiveDate)>;

/// Calendar widget state: the displayed month and the current selection.
pub struct RangeCalendar {
    /// First day of the displayed month
    month: NaiveDate,
    today: NaiveDate,
    selection: Selection,
    on_range_selected: Option<RangeCallback>,
}

impl RangeCalendar {
    /// Calendar showing the month of `today`
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self::starting_at(today, today)
    }

    /// Calendar showing the month containing `month`
    #[must_use]
    pub fn starting_at(month: NaiveDate, today: NaiveDate) -> Self {
        Self {
            month: first_of_month(month),
            today,
            selection: Selection::Idle,
            on_range_selected: None,
        }
    }

    /// Register the callback invoked once per completed selection
    pub fn on_range_selected(&mut self, callback: impl FnMut(NaiveDate, NaiveDate) + 'static) {
        self.on_range_selected = Some(Box::new(callback));
    }

    #[must_use]
    pub fn with_callback(mut self, callback: impl FnMut(NaiveDate, NaiveDate) + 'static) -> Self {
        self.on_range_selected(callback);
        self
    }

    #[must_use]
    pub fn displayed_month(&self) -> NaiveDate {
        self.month
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    #[must_use]
    pub fn grid(&self) -> MonthGrid {
        MonthGrid::build(self.month, self.today)
    }

    /// Show the previous month. Selection is kept.
    pub fn previous_month(&mut self) {
        if let Some(month) = self.month.checked_sub_months(Months::new(1)) {
            self.month = month;
        }
    }

    /// Show the next month. Selection is kept.
    pub fn next_month(&mut self) {
        if let Some(month) = self.month.checked_add_months(Months::new(1)) {
            self.month = month;
        }
    }

    fn is_in_displayed_month(&self, date: NaiveDate) -> bool {
        date.year() == self.month.year() && date.month() == self.month.month()
    }

    /// Handle a click on `date`.
    ///
    /// Returns the completed range when this click finishes a selection.
    /// Days outside the displayed month are disabled and leave the state
    /// untouched.
    pub fn click(&mut self, date: NaiveDate) -> Option<DateRange> {
        if !self.is_in_displayed_month(date) {
            debug!("Ignoring click on {date} outside displayed month");
            return None;
        }

        match self.selection {
            Selection::Idle | Selection::Complete { .. } => {
                debug!("Selection started at {date}");
                self.selection = Selection::SelectingEnd { start: date };
                None
            }
            Selection::SelectingEnd { start } => {
                let range = DateRange::ordered(start, date);
                self.selection = Selection::Complete {
                    start: range.start,
                    end: range.end,
                };
                debug!("Selection completed: {} -> {}", range.start, range.end);
                if let Some(callback) = self.on_range_selected.as_mut() {
                    callback(range.start, range.end);
                }
                Some(range)
            }
        }
    }

    /// Click the day shown in `cell`
    pub fn click_cell(&mut self, cell: &DayCell) -> Option<DateRange> {
        if !cell.is_current_month {
            return None;
        }
        self.click(cell.date)
    }

    /// Drop any selection
    pub fn clear(&mut self) {
        self.selection = Selection::Idle;
    }

    #[must_use]
    pub fn is_selected_start(&self, date: NaiveDate) -> bool {
        self.selection.start() == Some(date)
    }

    #[must_use]
    pub fn is_selected_end(&self, date: NaiveDate) -> bool {
        self.selection.end() == Some(date)
    }

    /// Whether `date` lies within the completed range, bounds included
    #[must_use]
    pub fn is_in_range(&self, date: NaiveDate) -> bool {
        self.selection.range().is_some_and(|range| range.contains(date))
    }

    /// Text rendering of the displayed month with the selection marked:
    /// `[d]` for a bound, `·d` inside the range, `*` for today.
    #[must_use]
    pub fn render(&self) -> String {
        self.grid().render_with(|cell| self.render_cell(cell))
    }

    fn render_cell(&self, cell: &DayCell) -> String {
        if !cell.is_current_month {
            return plain_cell(cell);
        }
        let day = cell.date.day();
        if self.is_selected_start(cell.date) || self.is_selected_end(cell.date) {
            format!("[{day:>2}]")
        } else if self.is_in_range(cell.date) {
            format!(" ·{day:>2}")
        } else {
            plain_cell(cell)
        }
    }
}

impl fmt::Debug for RangeCalendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeCalendar")
            .field("month", &self.month)
            .field("today", &self.today)
            .field("selection", &self.selection)
            .field("has_callback", &self.on_range_selected.is_some())
            .finish()
    }
}
