use anyhow::Result;
use eventdesk_core::board::change_status;
use eventdesk_core::config::EventDeskConfig;
use owo_colors::OwoColorize;

use super::{fetch_board, open_store};
use crate::render::Render;

pub async fn run(config: &EventDeskConfig, id: &str, status: &str) -> Result<()> {
    let store = open_store(config)?;
    let board = fetch_board(&store).await?;

    let update = change_status(&board, &store, id, status).await?;
    let change = &update.change;

    let client = update
        .board
        .find(&change.id)
        .map(|b| b.client_name.as_str())
        .unwrap_or_default();

    match &update.persisted {
        Ok(()) => {
            println!(
                "{} {} {} → {}",
                change.id.dimmed(),
                client,
                change.from.render(),
                change.to.render()
            );
            Ok(())
        }
        Err(e) => {
            // Nothing outlives this process, so undo the optimistic change.
            let reverted = update.board.revert(change)?;
            let current = reverted.find(&change.id).map(|b| b.status).unwrap_or(change.from);
            anyhow::bail!(
                "Could not save status for {}: {}\nStatus remains {}. Run the command again to retry.",
                change.id,
                e,
                current
            )
        }
    }
}
