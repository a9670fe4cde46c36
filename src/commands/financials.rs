use anyhow::Result;
use eventdesk_core::config::EventDeskConfig;
use eventdesk_core::stats::FinancialSummary;
use owo_colors::OwoColorize;

use super::{fetch_board, open_store};
use crate::render::{fit, format_money};

pub async fn run(config: &EventDeskConfig) -> Result<()> {
    let store = open_store(config)?;
    let board = fetch_board(&store).await?;
    let summary = FinancialSummary::compute(board.bookings());

    println!("{}", "Financials".bold());
    println!(
        "   {:<36}{}",
        "Total Confirmed/Completed Revenue",
        format_money(summary.total_revenue).green()
    );

    println!("\n{}", "Transaction History".bold());
    if summary.transactions.is_empty() {
        println!("   {}", "No transactions".dimmed());
        return Ok(());
    }

    println!(
        "   {}",
        format!(
            "{} {} {} {} {:>10}",
            fit("Booking ID", 38),
            fit("Client", 18),
            fit("Event Type", 20),
            fit("Date", 10),
            "Amount"
        )
        .dimmed()
    );
    for booking in &summary.transactions {
        println!(
            "   {} {} {} {} {:>10}",
            fit(&booking.id, 38).dimmed(),
            fit(&booking.client_name, 18),
            fit(&booking.event_type, 20),
            booking.date.format("%Y-%m-%d"),
            format_money(booking.payment)
        );
    }

    Ok(())
}
