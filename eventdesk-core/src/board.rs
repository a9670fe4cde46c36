//! The booking working set and its status transitions.
//!
//! A `Board` is an immutable snapshot. Each transition returns a new board
//! with a fresh version, which is what `StatsCache` keys on.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, warn};

use crate::booking::{Booking, BookingStatus};
use crate::error::{EventDeskError, EventDeskResult};
use crate::store::BookingStore;

static NEXT_VERSION: AtomicU64 = AtomicU64::new(1);

fn next_version() -> u64 {
    NEXT_VERSION.fetch_add(1, Ordering::Relaxed)
}

#[derive(Debug, Clone)]
pub struct Board {
    bookings: Vec<Booking>,
    version: u64,
}

/// A single applied status transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    pub id: String,
    pub from: BookingStatus,
    pub to: BookingStatus,
}

impl Board {
    pub fn new(bookings: Vec<Booking>) -> Self {
        Board {
            bookings,
            version: next_version(),
        }
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Unique per snapshot. Never reused within a process.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn find(&self, id: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    /// The first `n` bookings in source order.
    pub fn recent(&self, n: usize) -> &[Booking] {
        &self.bookings[..n.min(self.bookings.len())]
    }

    /// Set the status of booking `id`. Id, date and position are unchanged.
    pub fn with_status(&self, id: &str, status: BookingStatus) -> EventDeskResult<(Board, StatusChange)> {
        let from = self
            .find(id)
            .map(|b| b.status)
            .ok_or_else(|| EventDeskError::BookingNotFound(id.to_string()))?;

        let bookings = self
            .bookings
            .iter()
            .map(|b| {
                if b.id == id {
                    Booking { status, ..b.clone() }
                } else {
                    b.clone()
                }
            })
            .collect();

        let change = StatusChange {
            id: id.to_string(),
            from,
            to: status,
        };
        Ok((Board::new(bookings), change))
    }

    /// Undo `change`, restoring the previous status.
    pub fn revert(&self, change: &StatusChange) -> EventDeskResult<Board> {
        let (board, _) = self.with_status(&change.id, change.from)?;
        Ok(board)
    }

    /// Append a booking that the store just created.
    pub fn with_booking(&self, booking: Booking) -> Board {
        let mut bookings = self.bookings.clone();
        bookings.push(booking);
        Board::new(bookings)
    }
}

/// Result of an optimistic status change.
///
/// `board` already reflects the change whether or not the store accepted it.
/// When `persisted` is an error, callers may `board.revert(&change)`.
#[derive(Debug)]
pub struct StatusUpdate {
    pub board: Board,
    pub change: StatusChange,
    pub persisted: EventDeskResult<()>,
}

/// Apply a status change from user input and forward it to the store.
///
/// `status` must name a `BookingStatus` and `id` must exist on the board;
/// otherwise nothing is changed and nothing is sent.
pub async fn change_status<S: BookingStore>(
    board: &Board,
    store: &S,
    id: &str,
    status: &str,
) -> EventDeskResult<StatusUpdate> {
    let status: BookingStatus = status.parse()?;
    let (board, change) = board.with_status(id, status)?;
    debug!(id, from = %change.from, to = %change.to, "applied status change");

    let persisted = store.update_booking_status(id, status).await;
    if let Err(e) = &persisted {
        warn!(id, error = %e, "store rejected status change; local board keeps it");
    }

    Ok(StatusUpdate {
        board,
        change,
        persisted,
    })
}

/// Fetch bookings into a new board unless `cancelled` resolves first.
///
/// Returns `Ok(None)` on cancellation so a stale result is never applied.
pub async fn load_board<S, F>(store: &S, cancelled: F) -> EventDeskResult<Option<Board>>
where
    S: BookingStore,
    F: Future<Output = ()>,
{
    tokio::select! {
        bookings = store.fetch_bookings() => Ok(Some(Board::new(bookings?))),
        _ = cancelled => {
            debug!("booking fetch cancelled");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::NewBooking;
    use crate::registration::{CampRegistration, StallRegistration};
    use crate::store::{MemoryStore, SeedData};
    use chrono::NaiveDate;
    use std::time::Duration;

    fn booking(id: &str, status: BookingStatus) -> Booking {
        Booking {
            id: id.to_string(),
            client_name: "Client".to_string(),
            event_type: "Dinner".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            guests: 8,
            payment: 400,
            status,
        }
    }

    fn seeded(bookings: Vec<Booking>) -> MemoryStore {
        MemoryStore::new(SeedData {
            bookings,
            ..SeedData::default()
        })
    }

    /// Store whose writes always fail.
    struct ReadOnlyStore;

    impl BookingStore for ReadOnlyStore {
        async fn fetch_bookings(&self) -> EventDeskResult<Vec<Booking>> {
            Ok(vec![])
        }

        async fn fetch_stalls(&self) -> EventDeskResult<Vec<StallRegistration>> {
            Ok(vec![])
        }

        async fn fetch_camps(&self) -> EventDeskResult<Vec<CampRegistration>> {
            Ok(vec![])
        }

        async fn update_booking_status(&self, _id: &str, _status: BookingStatus) -> EventDeskResult<()> {
            Err(EventDeskError::Store("read-only".into()))
        }

        async fn insert_booking(&self, _booking: NewBooking) -> EventDeskResult<Booking> {
            Err(EventDeskError::Store("read-only".into()))
        }
    }

    #[test]
    fn test_with_status_keeps_id_date_and_order() {
        let board = Board::new(vec![
            booking("a", BookingStatus::Pending),
            booking("b", BookingStatus::Pending),
        ]);

        let (next, change) = board.with_status("b", BookingStatus::Confirmed).unwrap();

        assert_eq!(change.from, BookingStatus::Pending);
        assert_eq!(change.to, BookingStatus::Confirmed);
        assert_eq!(next.bookings()[1].id, "b");
        assert_eq!(next.bookings()[1].date, board.bookings()[1].date);
        assert_eq!(next.bookings()[1].status, BookingStatus::Confirmed);
        assert_eq!(next.bookings()[0], board.bookings()[0]);
        assert_ne!(next.version(), board.version());
        // original snapshot is untouched
        assert_eq!(board.bookings()[1].status, BookingStatus::Pending);
    }

    #[test]
    fn test_with_status_unknown_id() {
        let board = Board::new(vec![booking("a", BookingStatus::Pending)]);
        let err = board.with_status("zzz", BookingStatus::Completed).unwrap_err();
        assert!(matches!(err, EventDeskError::BookingNotFound(_)));
    }

    #[test]
    fn test_revert_restores_previous_status() {
        let board = Board::new(vec![booking("a", BookingStatus::Confirmed)]);
        let (next, change) = board.with_status("a", BookingStatus::Cancelled).unwrap();

        let reverted = next.revert(&change).unwrap();

        assert_eq!(reverted.bookings()[0].status, BookingStatus::Confirmed);
    }

    #[test]
    fn test_recent_is_capped_at_length() {
        let board = Board::new(vec![booking("a", BookingStatus::Pending)]);
        assert_eq!(board.recent(5).len(), 1);
        assert!(Board::new(vec![]).recent(5).is_empty());
    }

    #[tokio::test]
    async fn test_with_booking_appends_inserted_booking() {
        let store = seeded(vec![booking("a", BookingStatus::Confirmed)]);
        let board = Board::new(store.fetch_bookings().await.unwrap());

        let created = store
            .insert_booking(NewBooking {
                client_name: "Priya".to_string(),
                event_type: "Garden Party".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 7, 4).unwrap(),
                guests: 30,
                payment: 1200,
            })
            .await
            .unwrap();
        let next = board.with_booking(created.clone());

        assert_eq!(next.bookings().len(), 2);
        assert_eq!(next.bookings()[0].id, "a");
        assert_eq!(next.bookings()[1], created);
        assert_eq!(next.bookings()[1].status, BookingStatus::Pending);
        assert_ne!(next.version(), board.version());
        assert_eq!(board.bookings().len(), 1);
    }

    #[tokio::test]
    async fn test_change_status_updates_board_and_store() {
        let store = seeded(vec![booking("a", BookingStatus::Pending)]);
        let board = load_board(&store, std::future::pending()).await.unwrap().unwrap();

        let update = change_status(&board, &store, "a", "completed").await.unwrap();

        assert!(update.persisted.is_ok());
        assert_eq!(update.board.bookings()[0].status, BookingStatus::Completed);
        let stored = store.fetch_bookings().await.unwrap();
        assert_eq!(stored[0].status, BookingStatus::Completed);
    }

    #[tokio::test]
    async fn test_change_status_rejects_invalid_value_without_store_call() {
        let store = seeded(vec![booking("a", BookingStatus::Pending)]);
        let board = Board::new(store.fetch_bookings().await.unwrap());

        let err = change_status(&board, &store, "a", "Archived").await.unwrap_err();

        assert!(matches!(err, EventDeskError::InvalidStatus(_)));
        assert_eq!(store.snapshot().unwrap().bookings[0].status, BookingStatus::Pending);
    }

    #[tokio::test]
    async fn test_failed_persist_keeps_optimistic_board() {
        let board = Board::new(vec![booking("a", BookingStatus::Pending)]);

        let update = change_status(&board, &ReadOnlyStore, "a", "Confirmed").await.unwrap();

        assert!(matches!(update.persisted, Err(EventDeskError::Store(_))));
        assert_eq!(update.board.bookings()[0].status, BookingStatus::Confirmed);
        let undone = update.board.revert(&update.change).unwrap();
        assert_eq!(undone.bookings()[0].status, BookingStatus::Pending);
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_board_returns_none_when_cancelled_first() {
        let store = seeded(vec![booking("a", BookingStatus::Pending)])
            .with_latency(Duration::from_secs(5));

        let loaded = load_board(&store, tokio::time::sleep(Duration::from_millis(10)))
            .await
            .unwrap();

        assert!(loaded.is_none());
    }
}
