use anyhow::Result;
use eventdesk_core::booking::BookingStatus;
use eventdesk_core::config::EventDeskConfig;
use owo_colors::OwoColorize;

use super::{fetch_board, open_store};
use crate::render::render_booking_rows;

pub async fn run(config: &EventDeskConfig) -> Result<()> {
    let store = open_store(config)?;
    let board = fetch_board(&store).await?;

    println!("{}", "Manage Bookings".bold());
    if board.bookings().is_empty() {
        println!("   {}", "No bookings found".dimmed());
        return Ok(());
    }

    for line in render_booking_rows(board.bookings()) {
        println!("{line}");
    }

    println!(
        "\n{}",
        format!(
            "Change a status with `eventdesk set-status <id> <{}>`",
            BookingStatus::names().join("|")
        )
        .dimmed()
    );

    Ok(())
}
