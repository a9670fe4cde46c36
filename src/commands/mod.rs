pub mod book;
pub mod bookings;
pub mod calendar;
pub mod config;
pub mod dashboard;
pub mod financials;
pub mod ideas;
pub mod registrations;
pub mod set_status;

use anyhow::Result;
use chrono::NaiveDate;
use eventdesk_core::board::{Board, load_board};
use eventdesk_core::config::EventDeskConfig;
use eventdesk_core::store::{JsonFileStore, SeedData};
use tracing::debug;

use crate::utils::tui::{create_spinner, interrupted};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Open the configured data file, seeding demo records on first use.
pub fn open_store(config: &EventDeskConfig) -> Result<JsonFileStore> {
    let store = JsonFileStore::open_or_seed(config.data_path(), || SeedData::demo(today()))?;
    debug!(path = %store.path().display(), "opened data file");
    Ok(store)
}

/// Fetch the booking board, abandoning the fetch on Ctrl-C.
pub async fn fetch_board(store: &JsonFileStore) -> Result<Board> {
    let spinner = create_spinner("Loading bookings");
    let loaded = load_board(store, interrupted()).await;
    spinner.finish_and_clear();

    match loaded? {
        Some(board) => Ok(board),
        None => anyhow::bail!("Cancelled"),
    }
}
