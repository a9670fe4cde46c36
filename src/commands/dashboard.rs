use anyhow::Result;
use eventdesk_core::config::EventDeskConfig;
use eventdesk_core::stats::StatsCache;
use owo_colors::OwoColorize;

use super::{fetch_board, open_store, today};
use crate::render::{Render, fit};

const RECENT_BOOKINGS: usize = 5;

pub async fn run(config: &EventDeskConfig) -> Result<()> {
    let store = open_store(config)?;
    let board = fetch_board(&store).await?;

    let mut cache = StatsCache::new();
    let stats = cache.get(&board, today());

    println!("{}", "Dashboard".bold());
    println!("{}", stats.render());

    println!("\n{}", "Recent Bookings".bold());
    let recent = board.recent(RECENT_BOOKINGS);
    if recent.is_empty() {
        println!("   {}", "No bookings yet".dimmed());
    }
    for booking in recent {
        println!(
            "   {} {} {}",
            fit(&booking.client_name, 20),
            booking.date.format("%Y-%m-%d").dimmed(),
            booking.status.render()
        );
    }

    Ok(())
}
