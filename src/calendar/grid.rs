//! Month grid construction
//!
//! A grid always holds six full Sunday-first weeks: trailing days of the
//! previous month, every day of the reference month, then leading days of
//! the next month.

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

/// Six weeks of seven days
pub const GRID_CELLS: usize = 42;

pub const MONTH_NAMES: [&str; 12] = [
    "Janvier",
    "Février",
    "Mars",
    "Avril",
    "Mai",
    "Juin",
    "Juillet",
    "Août",
    "Septembre",
    "Octobre",
    "Novembre",
    "Décembre",
];

/// Column headers, Sunday first
pub const WEEKDAY_LABELS: [&str; 7] = ["Dim", "Lun", "Mar", "Mer", "Jeu", "Ven", "Sam"];

/// One day of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCell {
    pub date: NaiveDate,
    /// Only cells of the reference month are clickable
    pub is_current_month: bool,
    pub is_today: bool,
}

/// The 42 cells displayed for one month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub title: String,
    pub cells: Vec<DayCell>,
}

/// First day of the month containing `date`
#[must_use]
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// French display name of a month number (1-12)
#[must_use]
pub fn month_label(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|index| MONTH_NAMES.get(index as usize))
        .copied()
        .unwrap_or("")
}

impl MonthGrid {
    /// Grid for the month containing `reference`; `today` marks the current day
    #[must_use]
    pub fn build(reference: NaiveDate, today: NaiveDate) -> Self {
        let first = first_of_month(reference);
        let leading = first.weekday().num_days_from_sunday();
        let grid_start = first - Days::new(u64::from(leading));

        let cells = grid_start
            .iter_days()
            .take(GRID_CELLS)
            .map(|date| {
                let is_current_month = date.year() == first.year() && date.month() == first.month();
                DayCell {
                    date,
                    is_current_month,
                    is_today: is_current_month && date == today,
                }
            })
            .collect();

        Self {
            year: first.year(),
            month: first.month(),
            title: format!("{} {}", month_label(first.month()), first.year()),
            cells,
        }
    }

    /// Grid for `year`/`month`, or `None` when the month does not exist
    #[must_use]
    pub fn for_month(year: i32, month: u32, today: NaiveDate) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| Self::build(first, today))
    }

    #[must_use]
    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    /// Rows of seven cells, Sunday first
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(7)
    }

    /// Number of cells borrowed from the previous month
    #[must_use]
    pub fn leading_days(&self) -> usize {
        self.cells.iter().take_while(|c| !c.is_current_month).count()
    }
}

/// Plain text for one cell: blank outside the month, `*` after today
#[must_use]
pub fn plain_cell(cell: &DayCell) -> String {
    match (cell.is_current_month, cell.is_today) {
        (false, _) => "    ".to_string(),
        (true, true) => format!("{:>3}*", cell.date.day()),
        (true, false) => format!("{:>4}", cell.date.day()),
    }
}

impl MonthGrid {
    /// Text layout: centered title, weekday header, then one line per week
    /// with each cell drawn by `cell_text` (four columns wide).
    pub fn render_with(&self, cell_text: impl Fn(&DayCell) -> String) -> String {
        let mut out = format!("{:^34}\n", self.title);
        out.push_str(&WEEKDAY_LABELS.map(|d| format!("{d:>4}")).join(" "));
        out.push('\n');
        for week in self.weeks() {
            let row: Vec<String> = week.iter().map(&cell_text).collect();
            out.push_str(&row.join(" "));
            out.push('\n');
        }
        out
    }
}
