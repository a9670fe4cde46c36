use anyhow::Result;
use chrono::NaiveDate;
use eventdesk_core::booking::NewBooking;
use eventdesk_core::config::EventDeskConfig;
use eventdesk_core::stats::DashboardStats;
use eventdesk_core::store::BookingStore;
use owo_colors::OwoColorize;

use super::{fetch_board, open_store, today};
use crate::render::{Render, format_money};

pub struct BookArgs {
    pub client: String,
    pub event: String,
    pub date: String,
    pub guests: u32,
    pub payment: u64,
}

pub async fn run(config: &EventDeskConfig, args: BookArgs) -> Result<()> {
    let date = NaiveDate::parse_from_str(&args.date, "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid date '{}'. Expected YYYY-MM-DD", args.date))?;

    if args.client.trim().is_empty() {
        anyhow::bail!("Client name cannot be empty");
    }

    let store = open_store(config)?;
    let board = fetch_board(&store).await?;
    let booking = store
        .insert_booking(NewBooking {
            client_name: args.client.trim().to_string(),
            event_type: args.event.trim().to_string(),
            date,
            guests: args.guests,
            payment: args.payment,
        })
        .await?;

    println!(
        "{} {} for {} on {} ({} guests, {}) {}",
        "Booked".green(),
        booking.event_type,
        booking.client_name,
        booking.date.format("%Y-%m-%d"),
        booking.guests,
        format_money(booking.payment),
        booking.status.render()
    );
    println!("{}", format!("id: {}", booking.id).dimmed());

    let board = board.with_booking(booking);
    let stats = DashboardStats::compute(board.bookings(), today());
    println!(
        "{}",
        format!("{} pending requests, {} bookings total", stats.pending_requests, stats.total_bookings).dimmed()
    );

    Ok(())
}
