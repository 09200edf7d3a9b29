//! Pulse dashboard - demo entry point.
//!
//! Runs the engine headless: starts the facade, optionally enables live
//! updates, and logs a periodic summary until interrupted.

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use pulse_dashboard::{AppConfig, Dashboard};

/// Pulse analytics dashboard engine
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (can also be set via PULSE_CONFIG env var)
    #[arg(short, long)]
    config: Option<String>,

    /// Enable live updates at startup
    #[arg(long)]
    live: bool,

    /// Summary log interval in seconds
    #[arg(long, default_value_t = 30)]
    summary_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    pulse_telemetry::init_logging()?;
    info!("Starting Pulse dashboard v{}", env!("CARGO_PKG_VERSION"));

    // CLI arg > PULSE_CONFIG env var > default path
    let config_path = args
        .config
        .or_else(|| std::env::var("PULSE_CONFIG").ok())
        .unwrap_or_else(|| "config/default.toml".to_string());

    info!(config_path = %config_path, "Loading configuration");
    let config = AppConfig::load(&config_path)?;

    let dashboard = Dashboard::new(&config);
    if args.live {
        dashboard.toggle_live();
        info!("Live updates enabled");
    }

    let mut summary = tokio::time::interval(Duration::from_secs(args.summary_secs.max(1)));

    loop {
        tokio::select! {
            _ = summary.tick() => {
                let state = dashboard.state();
                info!(
                    live = state.is_live,
                    notifications = state.notifications.len(),
                    unread = state.unread_count(),
                    points = dashboard.metric_window().len(),
                    error = ?state.error,
                    "Dashboard summary"
                );
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown signal received");
                break;
            }
        }
    }

    dashboard.shutdown().await;
    Ok(())
}
