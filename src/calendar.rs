use std::collections::{BTreeMap, HashSet};

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

/// Fixed six-week grid.
pub const GRID_CELLS: usize = 42;

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// Month cursor. Only built through [`Calendar::new`], which guarantees the
/// month and both of its neighbours exist in chrono's calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Calendar {
    year: i32,
    month: u32,
    #[serde(skip)]
    first_day: NaiveDate,
    #[serde(skip)]
    days_in_month: u32,
    #[serde(skip)]
    days_in_previous: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub day: u32,
    pub other_month: bool,
    pub period: bool,
    pub symptom_dots: usize,
    pub today: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarMonth {
    pub title: String,
    pub current: Calendar,
    pub previous: Option<Calendar>,
    pub next: Option<Calendar>,
    pub days: Vec<CalendarDay>,
}

fn previous_month(year: i32, month: u32) -> Option<(i32, u32)> {
    if month == 1 {
        Some((year.checked_sub(1)?, 12))
    } else {
        Some((year, month - 1))
    }
}

fn next_month(year: i32, month: u32) -> Option<(i32, u32)> {
    if month == 12 {
        Some((year.checked_add(1)?, 1))
    } else {
        Some((year, month + 1))
    }
}

fn first_of(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

impl Calendar {
    /// `None` for a month outside 1..=12, or one at the edge of the
    /// representable range whose neighbouring month does not exist.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        let first_day = first_of(year, month)?;
        let (py, pm) = previous_month(year, month)?;
        let (ny, nm) = next_month(year, month)?;
        let previous_first = first_of(py, pm)?;
        let next_first = first_of(ny, nm)?;

        Some(Self {
            year,
            month,
            first_day,
            days_in_month: (next_first - first_day).num_days() as u32,
            days_in_previous: (first_day - previous_first).num_days() as u32,
        })
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    pub fn previous(self) -> Option<Self> {
        let (year, month) = previous_month(self.year, self.month)?;
        Self::new(year, month)
    }

    pub fn next(self) -> Option<Self> {
        let (year, month) = next_month(self.year, self.month)?;
        Self::new(year, month)
    }

    pub fn title(self) -> String {
        format!("{} {}", MONTH_NAMES[(self.month - 1) as usize], self.year)
    }

    pub fn first_day(self) -> NaiveDate {
        self.first_day
    }

    /// First day of the following month, exclusive end of this one.
    pub fn end(self) -> NaiveDate {
        self.first_day + Duration::days(self.days_in_month as i64)
    }

    pub fn days_in_month(self) -> u32 {
        self.days_in_month
    }

    /// Lays the month out Sunday-first, padding with the neighbouring months.
    /// Only days of this month carry period, symptom and today markers.
    pub fn grid(
        self,
        period_starts: &HashSet<NaiveDate>,
        symptom_counts: &BTreeMap<NaiveDate, usize>,
        today: NaiveDate,
    ) -> CalendarMonth {
        let lead = self.first_day.weekday().num_days_from_sunday();
        let in_month = self.days_in_month as usize;

        let leading = (0..lead).map(|i| CalendarDay::outside(self.days_in_previous - lead + i + 1));
        let current = self
            .first_day
            .iter_days()
            .take(in_month)
            .map(|date| CalendarDay {
                day: date.day(),
                other_month: false,
                period: period_starts.contains(&date),
                symptom_dots: symptom_counts.get(&date).copied().unwrap_or(0).min(3),
                today: date == today,
            });
        let trailing_count = GRID_CELLS - lead as usize - in_month;
        let trailing = (1..=trailing_count as u32).map(CalendarDay::outside);

        CalendarMonth {
            title: self.title(),
            current: self,
            previous: self.previous(),
            next: self.next(),
            days: leading.chain(current).chain(trailing).collect(),
        }
    }
}

impl CalendarDay {
    fn outside(day: u32) -> Self {
        Self {
            day,
            other_month: true,
            period: false,
            symptom_dots: 0,
            today: false,
        }
    }
}
