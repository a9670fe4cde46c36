//! Dashboard and financial aggregation over a booking sequence.

use chrono::NaiveDate;

use crate::board::Board;
use crate::booking::{Booking, BookingStatus};

/// The four dashboard stat cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_revenue: u64,
    pub pending_requests: usize,
    pub upcoming_events: usize,
    pub total_bookings: usize,
}

impl DashboardStats {
    /// Derive stats from `bookings`. `today` is inclusive for upcoming events.
    pub fn compute(bookings: &[Booking], today: NaiveDate) -> Self {
        let total_revenue = revenue_of(bookings.iter());
        let pending_requests = bookings
            .iter()
            .filter(|b| b.status == BookingStatus::Pending)
            .count();
        let upcoming_events = bookings
            .iter()
            .filter(|b| b.status == BookingStatus::Confirmed && b.date >= today)
            .count();

        DashboardStats {
            total_revenue,
            pending_requests,
            upcoming_events,
            total_bookings: bookings.len(),
        }
    }
}

/// Revenue-bearing bookings in source order, plus their total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinancialSummary<'a> {
    pub transactions: Vec<&'a Booking>,
    pub total_revenue: u64,
}

impl<'a> FinancialSummary<'a> {
    pub fn compute(bookings: &'a [Booking]) -> Self {
        let transactions: Vec<&Booking> = bookings
            .iter()
            .filter(|b| b.status.counts_as_revenue())
            .collect();
        let total_revenue = transactions.iter().map(|b| b.payment).sum();

        FinancialSummary {
            transactions,
            total_revenue,
        }
    }
}

fn revenue_of<'a>(bookings: impl Iterator<Item = &'a Booking>) -> u64 {
    bookings
        .filter(|b| b.status.counts_as_revenue())
        .map(|b| b.payment)
        .sum()
}

/// Memoized dashboard stats, keyed by board version and reference day.
#[derive(Debug, Default)]
pub struct StatsCache {
    entry: Option<CacheEntry>,
    computations: usize,
}

#[derive(Debug)]
struct CacheEntry {
    version: u64,
    today: NaiveDate,
    stats: DashboardStats,
}

impl StatsCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, board: &Board, today: NaiveDate) -> DashboardStats {
        if let Some(entry) = &self.entry
            && entry.version == board.version()
            && entry.today == today
        {
            return entry.stats;
        }

        let stats = DashboardStats::compute(board.bookings(), today);
        self.computations += 1;
        self.entry = Some(CacheEntry {
            version: board.version(),
            today,
            stats,
        });
        stats
    }

    /// How many times stats were actually derived.
    pub fn computations(&self) -> usize {
        self.computations
    }
}
