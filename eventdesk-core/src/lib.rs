//! Core types and engines for the eventdesk admin console.
//!
//! This crate provides everything the front end derives its pages from:
//! - `booking` and `registration` record types
//! - `stats` for dashboard and financial aggregation
//! - `calendar` for month grids and date buckets
//! - `board` for the booking working set and status transitions
//! - `store` for the booking store seam and its implementations
//! - `ideas` for the generative-text idea adapter

pub mod board;
pub mod booking;
pub mod calendar;
pub mod config;
pub mod error;
pub mod ideas;
pub mod registration;
pub mod stats;
pub mod store;

pub use booking::{Booking, BookingStatus, NewBooking, StatusTone};
pub use error::{EventDeskError, EventDeskResult};
