//! Calendar binning: month grids and per-day booking buckets.

mod buckets;
mod month;

pub use buckets::DateBuckets;
pub use month::{GridCell, MonthGrid, WeekStart, YearMonth};
