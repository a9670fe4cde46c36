use anyhow::Result;
use eventdesk_core::config::EventDeskConfig;
use owo_colors::OwoColorize;

pub fn run(config: &EventDeskConfig) -> Result<()> {
    let path = EventDeskConfig::config_path()?;

    println!("{}", format!("# {}", path.display()).dimmed());
    print!("{}", config.to_toml()?);
    println!("{}", format!("# data file: {}", config.data_path().display()).dimmed());

    let key = if config.ideas.api_key().is_some() { "set".green().to_string() } else { "not set".red().to_string() };
    println!("{}", format!("# {}: {}", config.ideas.api_key_env, key).dimmed());

    Ok(())
}
