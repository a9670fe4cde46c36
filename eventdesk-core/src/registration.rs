//! Stall and camp registrations. Read-only records listed as-is.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Paid,
    Unpaid,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentStatus::Paid => write!(f, "Paid"),
            PaymentStatus::Unpaid => write!(f, "Unpaid"),
        }
    }
}

/// A vendor stall booked for a market event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StallRegistration {
    pub id: String,
    pub vendor_name: String,
    /// Free-form size label (e.g. "10x10")
    pub stall_size: String,
    pub payment_status: PaymentStatus,
}

/// A child enrolled in a summer camp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampRegistration {
    pub id: String,
    pub child_name: String,
    pub age: u8,
    pub payment_status: PaymentStatus,
}

/// Both registration lists, fetched together.
#[derive(Debug, Clone, Default)]
pub struct Registrations {
    pub stalls: Vec<StallRegistration>,
    pub camps: Vec<CampRegistration>,
}

impl Registrations {
    pub fn unpaid_count(&self) -> usize {
        let stalls = self
            .stalls
            .iter()
            .filter(|s| s.payment_status == PaymentStatus::Unpaid)
            .count();
        let camps = self
            .camps
            .iter()
            .filter(|c| c.payment_status == PaymentStatus::Unpaid)
            .count();
        stalls + camps
    }
}
