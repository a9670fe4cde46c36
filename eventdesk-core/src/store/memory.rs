use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use tracing::debug;

use crate::booking::{Booking, BookingStatus, NewBooking};
use crate::error::{EventDeskError, EventDeskResult};
use crate::registration::{CampRegistration, StallRegistration};
use crate::store::{BookingStore, SeedData, new_booking_id};

/// In-memory store with optional simulated latency.
pub struct MemoryStore {
    data: Mutex<SeedData>,
    latency: Duration,
}

impl MemoryStore {
    pub fn new(seed: SeedData) -> Self {
        MemoryStore {
            data: Mutex::new(seed),
            latency: Duration::ZERO,
        }
    }

    /// Delay every call by `latency`, like a remote API would.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Copy of the current contents.
    pub fn snapshot(&self) -> EventDeskResult<SeedData> {
        Ok(self.data()?.clone())
    }

    fn data(&self) -> EventDeskResult<MutexGuard<'_, SeedData>> {
        self.data
            .lock()
            .map_err(|_| EventDeskError::Store("memory store lock poisoned".into()))
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl BookingStore for MemoryStore {
    async fn fetch_bookings(&self) -> EventDeskResult<Vec<Booking>> {
        self.simulate_latency().await;
        let bookings = self.data()?.bookings.clone();
        debug!(count = bookings.len(), "fetched bookings");
        Ok(bookings)
    }

    async fn fetch_stalls(&self) -> EventDeskResult<Vec<StallRegistration>> {
        self.simulate_latency().await;
        Ok(self.data()?.stalls.clone())
    }

    async fn fetch_camps(&self) -> EventDeskResult<Vec<CampRegistration>> {
        self.simulate_latency().await;
        Ok(self.data()?.camps.clone())
    }

    async fn update_booking_status(&self, id: &str, status: BookingStatus) -> EventDeskResult<()> {
        self.simulate_latency().await;
        let mut data = self.data()?;
        let booking = data
            .bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| EventDeskError::BookingNotFound(id.to_string()))?;
        booking.status = status;
        debug!(id, %status, "updated booking status");
        Ok(())
    }

    async fn insert_booking(&self, booking: NewBooking) -> EventDeskResult<Booking> {
        self.simulate_latency().await;
        let booking = booking.into_booking(new_booking_id());
        self.data()?.bookings.push(booking.clone());
        Ok(booking)
    }
}
