use anyhow::Result;
use eventdesk_core::config::EventDeskConfig;
use eventdesk_core::ideas::{IdeaGenerator, IdeaOutcome, IdeaPrompt};
use owo_colors::OwoColorize;

use crate::utils::tui::create_spinner;

pub async fn run(config: &EventDeskConfig, theme: &str) -> Result<()> {
    let generator = IdeaGenerator::from_config(&config.ideas);

    let spinner = create_spinner("Thinking...");
    let outcome = IdeaPrompt::new(&generator).submit(theme).await;
    spinner.finish_and_clear();

    match outcome {
        IdeaOutcome::Ideas(text) => {
            println!("{}", "Here are a few ideas:".bold());
            println!("{text}");
            Ok(())
        }
        IdeaOutcome::Failed(text) => anyhow::bail!(text),
        IdeaOutcome::Invalid(message) => anyhow::bail!(message),
    }
}
