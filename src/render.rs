//! TUI rendering for eventdesk types.
//!
//! Extension traits and helpers that add colored terminal output to
//! eventdesk-core types using owo_colors.

use eventdesk_core::booking::{Booking, BookingStatus, StatusTone};
use eventdesk_core::calendar::{DateBuckets, GridCell, MonthGrid};
use eventdesk_core::registration::PaymentStatus;
use eventdesk_core::stats::DashboardStats;
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// Colorize text according to a status tone.
pub fn colorize_tone(tone: StatusTone, text: &str) -> String {
    match tone {
        StatusTone::Warning => text.yellow().to_string(),
        StatusTone::Info => text.blue().to_string(),
        StatusTone::Success => text.green().to_string(),
        StatusTone::Danger => text.red().to_string(),
    }
}

impl Render for BookingStatus {
    fn render(&self) -> String {
        colorize_tone(self.tone(), self.as_str())
    }
}

impl Render for PaymentStatus {
    fn render(&self) -> String {
        match self {
            PaymentStatus::Paid => "Paid".green().to_string(),
            PaymentStatus::Unpaid => "Unpaid".red().to_string(),
        }
    }
}

impl Render for DashboardStats {
    fn render(&self) -> String {
        [
            format!("   {:<18}{}", "Total Revenue", format_money(self.total_revenue).green()),
            format!("   {:<18}{}", "Total Bookings", self.total_bookings.blue()),
            format!("   {:<18}{}", "Upcoming Events", self.upcoming_events.magenta()),
            format!("   {:<18}{}", "Pending Requests", self.pending_requests.yellow()),
        ]
        .join("\n")
    }
}

/// Whole currency units with thousands separators, e.g. "$12,500".
pub fn format_money(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("${grouped}")
}

/// Truncate to `width` chars with an ellipsis, then pad to `width`.
pub fn fit(text: &str, width: usize) -> String {
    let truncated: String = if text.chars().count() > width {
        let mut s: String = text.chars().take(width.saturating_sub(1)).collect();
        s.push('…');
        s
    } else {
        text.to_string()
    };
    format!("{truncated:<width$}")
}

/// Table rows for bookings, header first.
pub fn render_booking_rows<'a>(bookings: impl IntoIterator<Item = &'a Booking>) -> Vec<String> {
    let mut lines = vec![
        format!(
            "   {} {} {} {} {} {}",
            fit("ID", 38),
            fit("Client", 18),
            fit("Event", 20),
            fit("Date", 10),
            fit("Guests", 6),
            "Status"
        )
        .dimmed()
        .to_string(),
    ];

    for booking in bookings {
        lines.push(format!(
            "   {} {} {} {} {:>6} {}",
            fit(&booking.id, 38).dimmed(),
            fit(&booking.client_name, 18),
            fit(&booking.event_type, 20),
            booking.date.format("%Y-%m-%d"),
            booking.guests,
            booking.status.render()
        ));
    }

    lines
}

const CELL_WIDTH: usize = 12;

/// Render a month grid, listing each day's event types colored by status.
pub fn render_month(grid: &MonthGrid, buckets: &DateBuckets<'_>) -> String {
    let mut lines = Vec::new();

    let header: Vec<String> = grid
        .week_start()
        .labels()
        .iter()
        .map(|label| fit(label, CELL_WIDTH))
        .collect();
    lines.push(header.join(" ").bold().to_string());

    let cells: Vec<_> = grid.with_bookings(buckets).collect();

    for week in cells.chunks(7) {
        let day_row: Vec<String> = week
            .iter()
            .map(|(cell, _)| match cell {
                GridCell::Blank => fit("", CELL_WIDTH),
                GridCell::Day(date) => fit(&date.format("%-d").to_string(), CELL_WIDTH),
            })
            .collect();
        lines.push(day_row.join(" ").dimmed().to_string());

        let depth = week.iter().map(|(_, bookings)| bookings.len()).max().unwrap_or(0);
        for row in 0..depth {
            let event_row: Vec<String> = week
                .iter()
                .map(|(_, bookings)| match bookings.get(row) {
                    Some(booking) => {
                        colorize_tone(booking.status.tone(), &fit(&booking.event_type, CELL_WIDTH))
                    }
                    None => fit("", CELL_WIDTH),
                })
                .collect();
            lines.push(event_row.join(" "));
        }
    }

    lines.join("\n")
}
