use anyhow::Result;
use eventdesk_core::config::EventDeskConfig;
use eventdesk_core::store::fetch_registrations;
use owo_colors::OwoColorize;

use super::open_store;
use crate::render::{Render, fit};
use crate::utils::tui::create_spinner;

pub async fn run(config: &EventDeskConfig) -> Result<()> {
    let store = open_store(config)?;

    let spinner = create_spinner("Loading registrations");
    let result = fetch_registrations(&store).await;
    spinner.finish_and_clear();
    let registrations = result?;

    println!("{}", "Stall Registrations".bold());
    println!(
        "   {}",
        format!("{} {} {}", fit("ID", 8), fit("Vendor", 24), fit("Size", 8)).dimmed()
    );
    for stall in &registrations.stalls {
        println!(
            "   {} {} {} {}",
            fit(&stall.id, 8).dimmed(),
            fit(&stall.vendor_name, 24),
            fit(&stall.stall_size, 8),
            stall.payment_status.render()
        );
    }

    println!("\n{}", "Summer Camp Registrations".bold());
    println!(
        "   {}",
        format!("{} {} {}", fit("ID", 8), fit("Child Name", 24), fit("Age", 8)).dimmed()
    );
    for camp in &registrations.camps {
        println!(
            "   {} {} {} {}",
            fit(&camp.id, 8).dimmed(),
            fit(&camp.child_name, 24),
            fit(&camp.age.to_string(), 8),
            camp.payment_status.render()
        );
    }

    let unpaid = registrations.unpaid_count();
    if unpaid > 0 {
        println!("\n{}", format!("{unpaid} unpaid registration(s)").yellow());
    }

    Ok(())
}
