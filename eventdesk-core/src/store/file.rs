use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::booking::{Booking, BookingStatus, NewBooking};
use crate::error::{EventDeskError, EventDeskResult};
use crate::registration::{CampRegistration, StallRegistration};
use crate::store::{BookingStore, SeedData, new_booking_id};

/// Store backed by a single JSON document holding bookings, stalls and camps.
///
/// Every call reads the file; every write replaces it through a temp file and
/// a rename.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Open the store at `path`, writing `seed()` first if the file is missing.
    pub fn open_or_seed(path: impl Into<PathBuf>, seed: impl FnOnce() -> SeedData) -> EventDeskResult<Self> {
        let store = JsonFileStore { path: path.into() };

        if !store.path.exists() {
            info!(path = %store.path.display(), "creating data file with demo records");
            store.write(&seed())?;
        }

        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> EventDeskResult<SeedData> {
        let content = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|e| {
            EventDeskError::Serialization(format!("{}: {}", self.path.display(), e))
        })
    }

    fn write(&self, data: &SeedData) -> EventDeskResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(data)
            .map_err(|e| EventDeskError::Serialization(e.to_string()))?;

        let temp = self.path.with_extension("json.tmp");
        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, &self.path)?;
        Ok(())
    }
}

impl BookingStore for JsonFileStore {
    async fn fetch_bookings(&self) -> EventDeskResult<Vec<Booking>> {
        let bookings = self.read()?.bookings;
        debug!(count = bookings.len(), path = %self.path.display(), "fetched bookings");
        Ok(bookings)
    }

    async fn fetch_stalls(&self) -> EventDeskResult<Vec<StallRegistration>> {
        Ok(self.read()?.stalls)
    }

    async fn fetch_camps(&self) -> EventDeskResult<Vec<CampRegistration>> {
        Ok(self.read()?.camps)
    }

    async fn update_booking_status(&self, id: &str, status: BookingStatus) -> EventDeskResult<()> {
        let mut data = self.read()?;
        let booking = data
            .bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| EventDeskError::BookingNotFound(id.to_string()))?;
        booking.status = status;
        self.write(&data)?;
        debug!(id, %status, "persisted booking status");
        Ok(())
    }

    async fn insert_booking(&self, booking: NewBooking) -> EventDeskResult<Booking> {
        let mut data = self.read()?;
        let booking = booking.into_booking(new_booking_id());
        data.bookings.push(booking.clone());
        self.write(&data)?;
        Ok(booking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[tokio::test]
    async fn test_missing_file_is_seeded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/data.json");

        let store = JsonFileStore::open_or_seed(&path, || SeedData::demo(today())).unwrap();

        assert!(path.exists());
        assert_eq!(store.path(), path.as_path());
        assert_eq!(store.fetch_bookings().await.unwrap().len(), 7);
        assert_eq!(store.fetch_stalls().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_existing_file_is_not_reseeded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, r#"{"bookings": []}"#).unwrap();

        let store = JsonFileStore::open_or_seed(&path, || SeedData::demo(today())).unwrap();

        assert!(store.fetch_bookings().await.unwrap().is_empty());
        assert!(store.fetch_camps().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_status_update_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        let store = JsonFileStore::open_or_seed(&path, || SeedData::demo(today())).unwrap();

        store
            .update_booking_status("BK-1006", BookingStatus::Cancelled)
            .await
            .unwrap();

        let reopened = JsonFileStore::open_or_seed(&path, SeedData::default).unwrap();
        let bookings = reopened.fetch_bookings().await.unwrap();
        let booking = bookings.iter().find(|b| b.id == "BK-1006").unwrap();
        assert_eq!(booking.status, BookingStatus::Cancelled);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn test_corrupt_file_reports_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, "not json").unwrap();
        let store = JsonFileStore::open_or_seed(&path, SeedData::default).unwrap();

        let err = store.fetch_bookings().await.unwrap_err();

        assert!(matches!(err, EventDeskError::Serialization(_)));
    }
}
