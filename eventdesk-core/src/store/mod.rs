//! Booking store seam.
//!
//! The store is the only source of bookings and registrations. Every method
//! is a one-shot async call with no retry, timeout or de-duplication. Two
//! overlapping calls are independent and may complete in either order.

mod file;
mod memory;
mod seed;

use std::future::Future;

use crate::booking::{Booking, BookingStatus, NewBooking};
use crate::error::EventDeskResult;
use crate::registration::{CampRegistration, Registrations, StallRegistration};

pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use seed::SeedData;

pub trait BookingStore {
    fn fetch_bookings(&self) -> impl Future<Output = EventDeskResult<Vec<Booking>>> + Send;

    fn fetch_stalls(&self) -> impl Future<Output = EventDeskResult<Vec<StallRegistration>>> + Send;

    fn fetch_camps(&self) -> impl Future<Output = EventDeskResult<Vec<CampRegistration>>> + Send;

    /// Persist a status change. Acknowledges with `Ok(())`.
    fn update_booking_status(
        &self,
        id: &str,
        status: BookingStatus,
    ) -> impl Future<Output = EventDeskResult<()>> + Send;

    /// Insert a booking, assigning it a fresh id.
    fn insert_booking(
        &self,
        booking: NewBooking,
    ) -> impl Future<Output = EventDeskResult<Booking>> + Send;
}

/// Fetch stalls and camps together.
pub async fn fetch_registrations<S: BookingStore>(store: &S) -> EventDeskResult<Registrations> {
    let (stalls, camps) = tokio::try_join!(store.fetch_stalls(), store.fetch_camps())?;
    Ok(Registrations { stalls, camps })
}

pub(crate) fn new_booking_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
