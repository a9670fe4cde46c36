use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::booking::Booking;
use crate::calendar::DateBuckets;
use crate::error::{EventDeskError, EventDeskResult};

/// A calendar month. `month` is 1-based (January = 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(YearMonth { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        YearMonth {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Shift by `delta` months, carrying across year boundaries.
    ///
    /// Saturates at the first and last representable months.
    pub fn navigate(self, delta: i32) -> Self {
        const FIRST: i64 = i32::MIN as i64 * 12;
        const LAST: i64 = i32::MAX as i64 * 12 + 11;

        let index = (i64::from(self.year) * 12 + i64::from(self.month - 1) + i64::from(delta)).clamp(FIRST, LAST);
        YearMonth {
            year: index.div_euclid(12) as i32,
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    pub fn first_day(&self) -> EventDeskResult<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .ok_or_else(|| EventDeskError::InvalidMonth(self.to_string()))
    }

    /// Days in the month: the day before the 1st of the following month.
    pub fn days_in_month(&self) -> EventDeskResult<u32> {
        self.navigate(1)
            .first_day()?
            .pred_opt()
            .map(|last| last.day())
            .ok_or_else(|| EventDeskError::InvalidMonth(self.to_string()))
    }

    /// e.g. "June 2024"
    pub fn title(&self) -> EventDeskResult<String> {
        Ok(self.first_day()?.format("%B %Y").to_string())
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = EventDeskError;

    /// Parse YYYY-MM
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EventDeskError::InvalidMonth(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        YearMonth::new(year, month).ok_or_else(invalid)
    }
}

/// First column of the month grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// Column index (0 = start of week) for a weekday.
    pub fn column(&self, weekday: Weekday) -> usize {
        match self {
            WeekStart::Sunday => weekday.num_days_from_sunday() as usize,
            WeekStart::Monday => weekday.num_days_from_monday() as usize,
        }
    }

    pub fn labels(&self) -> [&'static str; 7] {
        match self {
            WeekStart::Sunday => ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
            WeekStart::Monday => ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    /// Padding before day 1
    Blank,
    Day(NaiveDate),
}

impl GridCell {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            GridCell::Blank => None,
            GridCell::Day(date) => Some(*date),
        }
    }
}

/// Padded cell sequence for rendering one month.
///
/// The grid holds `leading_blanks + days_in_month` cells. It is not padded at
/// the end, so the last row may be short.
#[derive(Debug, Clone)]
pub struct MonthGrid {
    month: YearMonth,
    week_start: WeekStart,
    leading_blanks: usize,
    days_in_month: u32,
    cells: Vec<GridCell>,
}

impl MonthGrid {
    pub fn build(month: YearMonth, week_start: WeekStart) -> EventDeskResult<Self> {
        let first = month.first_day()?;
        let leading_blanks = week_start.column(first.weekday());
        let days_in_month = month.days_in_month()?;

        let mut cells = vec![GridCell::Blank; leading_blanks];
        cells.extend(first.iter_days().take(days_in_month as usize).map(GridCell::Day));

        Ok(MonthGrid {
            month,
            week_start,
            leading_blanks,
            days_in_month,
            cells,
        })
    }

    pub fn month(&self) -> YearMonth {
        self.month
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// Weekday column of day 1.
    pub fn first_weekday(&self) -> usize {
        self.leading_blanks
    }

    pub fn days_in_month(&self) -> u32 {
        self.days_in_month
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells paired with the bookings on that day. Blank cells get none.
    pub fn with_bookings<'g, 'b>(
        &'g self,
        buckets: &'g DateBuckets<'b>,
    ) -> impl Iterator<Item = (GridCell, &'g [&'b Booking])> {
        self.cells.iter().map(move |cell| match cell {
            GridCell::Blank => (*cell, &[][..]),
            GridCell::Day(date) => (*cell, buckets.on(*date)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::BookingStatus;

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    #[test]
    fn test_days_in_month_handles_leap_years() {
        assert_eq!(ym(2024, 2).days_in_month().unwrap(), 29);
        assert_eq!(ym(2023, 2).days_in_month().unwrap(), 28);
        assert_eq!(ym(1900, 2).days_in_month().unwrap(), 28);
        assert_eq!(ym(2000, 2).days_in_month().unwrap(), 29);
        assert_eq!(ym(2024, 12).days_in_month().unwrap(), 31);
        assert_eq!(ym(2024, 4).days_in_month().unwrap(), 30);
    }

    #[test]
    fn test_june_2024_starts_on_saturday() {
        let sunday = MonthGrid::build(ym(2024, 6), WeekStart::Sunday).unwrap();
        assert_eq!(sunday.first_weekday(), 6);
        assert_eq!(sunday.len(), 36);
        assert_eq!(sunday.cells()[5], GridCell::Blank);
        assert_eq!(
            sunday.cells()[6],
            GridCell::Day(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
        );

        let monday = MonthGrid::build(ym(2024, 6), WeekStart::Monday).unwrap();
        assert_eq!(monday.first_weekday(), 5);
    }

    #[test]
    fn test_month_starting_on_week_start_has_no_blanks() {
        // 2024-09-01 is a Sunday
        let grid = MonthGrid::build(ym(2024, 9), WeekStart::Sunday).unwrap();
        assert_eq!(grid.first_weekday(), 0);
        assert_eq!(grid.len(), 30);
    }

    #[test]
    fn test_grid_length_and_day_count_for_every_month() {
        for year in [1999, 2000, 2023, 2024, 2100] {
            for month in 1..=12 {
                for week_start in [WeekStart::Sunday, WeekStart::Monday] {
                    let grid = MonthGrid::build(ym(year, month), week_start).unwrap();
                    let days = grid.cells().iter().filter_map(GridCell::date).count();

                    assert_eq!(grid.len(), grid.first_weekday() + grid.days_in_month() as usize);
                    assert_eq!(days, grid.days_in_month() as usize);
                    assert!(grid.first_weekday() < 7);
                }
            }
        }
    }

    #[test]
    fn test_day_cells_are_consecutive() {
        let grid = MonthGrid::build(ym(2024, 2), WeekStart::Sunday).unwrap();
        let days: Vec<u32> = grid
            .cells()
            .iter()
            .filter_map(GridCell::date)
            .map(|d| d.day())
            .collect();
        assert_eq!(days, (1..=29).collect::<Vec<_>>());
    }

    #[test]
    fn test_navigate_wraps_year_boundaries() {
        assert_eq!(ym(2024, 1).navigate(-1), ym(2023, 12));
        assert_eq!(ym(2024, 12).navigate(1), ym(2025, 1));
        assert_eq!(ym(2024, 6).navigate(-18), ym(2022, 12));
        assert_eq!(ym(2024, 6).navigate(30), ym(2026, 12));
    }

    #[test]
    fn test_navigate_back_and_forth_is_identity() {
        for year in [1, 1999, 2024] {
            for month in 1..=12 {
                let start = ym(year, month);
                assert_eq!(start.navigate(-1).navigate(1), start);
                assert_eq!(start.navigate(1).navigate(-1), start);
                assert_eq!(start.navigate(-25).navigate(25), start);
            }
        }
    }

    #[test]
    fn test_navigate_saturates_at_year_limits() {
        assert_eq!(ym(i32::MAX, 12).navigate(1), ym(i32::MAX, 12));
        assert_eq!(ym(i32::MAX, 11).navigate(i32::MAX), ym(i32::MAX, 12));
        assert_eq!(ym(i32::MIN, 1).navigate(-1), ym(i32::MIN, 1));
        assert_eq!(ym(i32::MIN, 3).navigate(i32::MIN), ym(i32::MIN, 1));
    }

    #[test]
    fn test_parse_year_month() {
        assert_eq!("2024-06".parse::<YearMonth>().unwrap(), ym(2024, 6));
        assert!("2024-13".parse::<YearMonth>().is_err());
        assert!("June".parse::<YearMonth>().is_err());
        assert_eq!(ym(2024, 6).to_string(), "2024-06");
        assert_eq!(ym(2024, 6).title().unwrap(), "June 2024");
    }

    #[test]
    fn test_with_bookings_attaches_buckets_to_days() {
        let bookings = vec![Booking {
            id: "b1".to_string(),
            client_name: "Ada".to_string(),
            event_type: "Wedding".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            guests: 100,
            payment: 500,
            status: BookingStatus::Confirmed,
        }];
        let buckets = DateBuckets::from_bookings(&bookings);
        let grid = MonthGrid::build(ym(2024, 6), WeekStart::Sunday).unwrap();

        let cells: Vec<_> = grid.with_bookings(&buckets).collect();

        assert_eq!(cells.len(), grid.len());
        assert!(cells[..6].iter().all(|(cell, b)| *cell == GridCell::Blank && b.is_empty()));
        assert_eq!(cells[6].1.len(), 1);
        assert!(cells[7..].iter().all(|(_, b)| b.is_empty()));
    }
}
