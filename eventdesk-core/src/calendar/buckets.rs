use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::booking::Booking;

/// Bookings grouped by ISO day string ("YYYY-MM-DD").
///
/// Within a bucket, bookings keep their source order. Derived from a booking
/// slice and never persisted.
#[derive(Debug, Default)]
pub struct DateBuckets<'a> {
    buckets: BTreeMap<String, Vec<&'a Booking>>,
}

impl<'a> DateBuckets<'a> {
    pub fn from_bookings(bookings: &'a [Booking]) -> Self {
        let mut buckets: BTreeMap<String, Vec<&'a Booking>> = BTreeMap::new();
        for booking in bookings {
            buckets.entry(booking.day_key()).or_default().push(booking);
        }
        DateBuckets { buckets }
    }

    /// Bookings for a day key. Unknown keys yield an empty slice.
    pub fn get(&self, day_key: &str) -> &[&'a Booking] {
        self.buckets.get(day_key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn on(&self, date: NaiveDate) -> &[&'a Booking] {
        self.get(&date.format("%Y-%m-%d").to_string())
    }

    /// Number of distinct days that have at least one booking.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn days(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(String::as_str)
    }
}
