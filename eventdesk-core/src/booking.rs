//! Booking records and their status lifecycle.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EventDeskError;

/// A reserved event engagement with a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub client_name: String,
    pub event_type: String,
    /// Day of the event, serialized as YYYY-MM-DD
    pub date: NaiveDate,
    pub guests: u32,
    /// Whole currency units
    pub payment: u64,
    pub status: BookingStatus,
}

impl Booking {
    /// ISO day string used as the calendar bucket key.
    pub fn day_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Fields supplied when inserting a booking. The store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub client_name: String,
    pub event_type: String,
    pub date: NaiveDate,
    pub guests: u32,
    pub payment: u64,
}

impl NewBooking {
    /// New bookings always enter the working set as Pending requests.
    pub fn into_booking(self, id: String) -> Booking {
        Booking {
            id,
            client_name: self.client_name,
            event_type: self.event_type,
            date: self.date,
            guests: self.guests,
            payment: self.payment,
            status: BookingStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

/// Display tone for a status. Front ends map tones to colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Warning,
    Info,
    Success,
    Danger,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 4] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::Completed,
        BookingStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Completed => "Completed",
            BookingStatus::Cancelled => "Cancelled",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|s| s.as_str()).collect()
    }

    /// Whether a booking in this status contributes to revenue.
    ///
    /// The dashboard total and the financial transaction history both filter
    /// with this predicate, so the displayed total always equals the sum of
    /// the displayed rows.
    pub fn counts_as_revenue(&self) -> bool {
        matches!(self, BookingStatus::Confirmed | BookingStatus::Completed)
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            BookingStatus::Pending => StatusTone::Warning,
            BookingStatus::Confirmed => StatusTone::Info,
            BookingStatus::Completed => StatusTone::Success,
            BookingStatus::Cancelled => StatusTone::Danger,
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = EventDeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| EventDeskError::InvalidStatus(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status_is_case_insensitive() {
        assert_eq!("confirmed".parse::<BookingStatus>().unwrap(), BookingStatus::Confirmed);
        assert_eq!(" CANCELLED ".parse::<BookingStatus>().unwrap(), BookingStatus::Cancelled);
    }

    #[test]
    fn test_parse_status_rejects_unknown_values() {
        let err = "Archived".parse::<BookingStatus>().unwrap_err();
        assert!(matches!(err, EventDeskError::InvalidStatus(ref s) if s == "Archived"));
        assert!(err.to_string().contains("Pending, Confirmed, Completed, Cancelled"));
    }

    #[test]
    fn test_booking_serializes_camel_case_with_iso_date() {
        let booking = Booking {
            id: "b1".to_string(),
            client_name: "Ada".to_string(),
            event_type: "Wedding".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            guests: 120,
            payment: 500,
            status: BookingStatus::Confirmed,
        };

        let json = serde_json::to_value(&booking).unwrap();
        assert_eq!(json["clientName"], "Ada");
        assert_eq!(json["eventType"], "Wedding");
        assert_eq!(json["date"], "2024-06-01");
        assert_eq!(json["status"], "Confirmed");
        assert_eq!(booking.day_key(), "2024-06-01");
    }

    #[test]
    fn test_new_booking_starts_pending() {
        let booking = NewBooking {
            client_name: "Grace".to_string(),
            event_type: "Birthday".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 7, 4).unwrap(),
            guests: 30,
            payment: 250,
        }
        .into_booking("b9".to_string());

        assert_eq!(booking.id, "b9");
        assert_eq!(booking.status, BookingStatus::Pending);
    }
}
