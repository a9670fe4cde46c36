use anyhow::Result;
use eventdesk_core::calendar::{DateBuckets, MonthGrid, YearMonth};
use eventdesk_core::config::EventDeskConfig;
use owo_colors::OwoColorize;

use super::{fetch_board, open_store, today};
use crate::render::render_month;

pub async fn run(config: &EventDeskConfig, month: Option<String>, offset: i32) -> Result<()> {
    let start = match month {
        Some(s) => s.parse::<YearMonth>()?,
        None => YearMonth::of(today()),
    };
    let month = start.navigate(offset);
    let grid = MonthGrid::build(month, config.week_start)?;

    let store = open_store(config)?;
    let board = fetch_board(&store).await?;
    let buckets = DateBuckets::from_bookings(board.bookings());

    println!("{}", month.title()?.bold());
    println!("{}", render_month(&grid, &buckets));
    println!(
        "\n{}",
        format!(
            "Previous: --month {} | Next: --month {}",
            month.navigate(-1),
            month.navigate(1)
        )
        .dimmed()
    );

    Ok(())
}
