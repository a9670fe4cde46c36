use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::booking::{Booking, BookingStatus};
use crate::registration::{CampRegistration, PaymentStatus, StallRegistration};

/// Full store contents. This is also the on-disk shape of the data file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub bookings: Vec<Booking>,
    #[serde(default)]
    pub stalls: Vec<StallRegistration>,
    #[serde(default)]
    pub camps: Vec<CampRegistration>,
}

impl SeedData {
    /// Demo records with dates spread around `today`.
    pub fn demo(today: NaiveDate) -> Self {
        let on = |days: i64| today + Duration::days(days);

        let bookings = vec![
            demo_booking("BK-1001", "Olivia Martin", "Wedding Reception", on(12), 150, 4500, BookingStatus::Confirmed),
            demo_booking("BK-1002", "Jackson Lee", "Corporate Gala", on(3), 220, 6800, BookingStatus::Pending),
            demo_booking("BK-1003", "Isabella Nguyen", "Birthday Party", on(-20), 40, 900, BookingStatus::Completed),
            demo_booking("BK-1004", "William Kim", "Anniversary Dinner", on(-5), 25, 1200, BookingStatus::Cancelled),
            demo_booking("BK-1005", "Sofia Davis", "Baby Shower", on(12), 35, 750, BookingStatus::Confirmed),
            demo_booking("BK-1006", "Liam Johnson", "Graduation Party", on(30), 80, 1800, BookingStatus::Pending),
            demo_booking("BK-1007", "Emma Wilson", "Charity Auction", on(-40), 300, 9200, BookingStatus::Completed),
        ];

        let stalls = vec![
            StallRegistration {
                id: "ST-201".to_string(),
                vendor_name: "Green Leaf Crafts".to_string(),
                stall_size: "10x10".to_string(),
                payment_status: PaymentStatus::Paid,
            },
            StallRegistration {
                id: "ST-202".to_string(),
                vendor_name: "Sweet Tooth Bakery".to_string(),
                stall_size: "10x20".to_string(),
                payment_status: PaymentStatus::Unpaid,
            },
            StallRegistration {
                id: "ST-203".to_string(),
                vendor_name: "Vintage Finds".to_string(),
                stall_size: "10x10".to_string(),
                payment_status: PaymentStatus::Paid,
            },
        ];

        let camps = vec![
            CampRegistration {
                id: "CP-301".to_string(),
                child_name: "Noah Brown".to_string(),
                age: 9,
                payment_status: PaymentStatus::Paid,
            },
            CampRegistration {
                id: "CP-302".to_string(),
                child_name: "Ava Garcia".to_string(),
                age: 11,
                payment_status: PaymentStatus::Unpaid,
            },
        ];

        SeedData {
            bookings,
            stalls,
            camps,
        }
    }
}

fn demo_booking(
    id: &str,
    client_name: &str,
    event_type: &str,
    date: NaiveDate,
    guests: u32,
    payment: u64,
    status: BookingStatus,
) -> Booking {
    Booking {
        id: id.to_string(),
        client_name: client_name.to_string(),
        event_type: event_type.to_string(),
        date,
        guests,
        payment,
        status,
    }
}
