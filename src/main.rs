mod commands;
mod render;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use eventdesk_core::config::EventDeskConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "eventdesk")]
#[command(about = "Manage event bookings, registrations and financials from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Revenue, booking counts and the most recent bookings
    Dashboard,
    /// Month view of bookings
    Calendar {
        /// Month to show (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,

        /// Months to move from --month (e.g. -1 for the previous month)
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i32,
    },
    /// List all bookings
    Bookings,
    /// Change the status of a booking
    SetStatus {
        /// Booking id
        id: String,
        /// Pending, Confirmed, Completed or Cancelled
        status: String,
    },
    /// Record a new booking request
    Book {
        /// Client name
        #[arg(short, long)]
        client: String,

        /// Event type (e.g. "Wedding Reception")
        #[arg(short, long)]
        event: String,

        /// Event date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        #[arg(short, long, default_value_t = 0)]
        guests: u32,

        /// Payment in whole currency units
        #[arg(short, long, default_value_t = 0)]
        payment: u64,
    },
    /// Stall and summer camp registrations
    Registrations,
    /// Confirmed and completed revenue with transaction history
    Financials,
    /// Generate event ideas for a theme
    Ideas {
        /// Event theme (e.g. "Vintage Circus")
        theme: Vec<String>,
    },
    /// Show the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = EventDeskConfig::load()?;

    match cli.command {
        Commands::Dashboard => commands::dashboard::run(&config).await,
        Commands::Calendar { month, offset } => commands::calendar::run(&config, month, offset).await,
        Commands::Bookings => commands::bookings::run(&config).await,
        Commands::SetStatus { id, status } => commands::set_status::run(&config, &id, &status).await,
        Commands::Book {
            client,
            event,
            date,
            guests,
            payment,
        } => {
            let args = commands::book::BookArgs {
                client,
                event,
                date,
                guests,
                payment,
            };
            commands::book::run(&config, args).await
        }
        Commands::Registrations => commands::registrations::run(&config).await,
        Commands::Financials => commands::financials::run(&config).await,
        Commands::Ideas { theme } => commands::ideas::run(&config, &theme.join(" ")).await,
        Commands::Config => commands::config::run(&config),
    }
}
