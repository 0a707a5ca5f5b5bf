use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use bookstay::adapters::logging_navigator::LoggingNavigator;
use bookstay::adapters::memory_catalog::MemoryCatalog;
use bookstay::adapters::simulated_processor::SimulatedProcessor;
use bookstay::config::load_config;
use bookstay::domain::dates::StayDates;
use bookstay::domain::payment::PaymentMethod;
use bookstay::ports::catalog::HomestayCatalog;
use bookstay::session::BookingSession;

fn find_config_path() -> PathBuf {
    // Check common locations for config file
    let candidates = [
        PathBuf::from("config.yaml"),
        dirs_next().join("config.yaml"),
    ];

    for path in &candidates {
        if path.exists() {
            return path.clone();
        }
    }

    candidates[0].clone()
}

fn dirs_next() -> PathBuf {
    // Look in the directory where the binary is
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Scripted end-to-end walkthrough of the checkout flow against the seeded
/// catalog and the simulated processor.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("Starting bookstay walkthrough");

    let config_path = find_config_path();
    let config = load_config(&config_path)?;

    let catalog = MemoryCatalog::seeded();
    let navigator = Arc::new(LoggingNavigator);
    let processor = Arc::new(SimulatedProcessor::from_config(&config.payment));

    println!("Available homestays:");
    for homestay in catalog.list() {
        println!("  {homestay}");
    }

    let mut session = BookingSession::start(&catalog, navigator, processor, config, "1")?;
    println!("\nBooking: {}", session.homestay());

    session.reservation.dates = StayDates::parse("2025-01-15", "2025-01-18")?;
    session.reservation.set_guests(2);
    session.reservation.guest_name = "Priya Sharma".into();
    session.reservation.guest_email = "priya@example.com".into();
    session.reservation.guest_phone = "+91 98765 43210".into();

    if let Some(quote) = session.quote() {
        println!("\nBooking summary:\n{quote}");
    }

    let booking = session.continue_to_checkout(None)?.clone();
    println!(
        "\nReservation for {} ({} nights, {} guests)",
        booking.guest_name, booking.nights, booking.guests
    );

    session.payment.select_method(PaymentMethod::Upi)?;
    session.payment.upi_id = "priya@upi".into();
    session.payment.set_terms_accepted(true)?;

    let receipt = session.complete_payment(None).await?;
    println!("\nPayment record:\n{}", serde_json::to_string_pretty(receipt)?);

    Ok(())
}
