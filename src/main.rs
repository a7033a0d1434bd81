mod config;
mod error;
mod fetcher;
mod ranker;
mod report;
mod types;

use std::io::Write;

use chrono::{Local, NaiveDate};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::fetcher::{filter_events, DayWindow, OddsClient, OddsSource};
use crate::ranker::rank_event;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cfg = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {e}");
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cfg.log_level))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cfg).await {
        error!("Fatal error: {e}");
        std::process::exit(1);
    }
}

async fn run(cfg: Config) -> Result<()> {
    let client = OddsClient::new(cfg.clone())?;
    let today = Local::now().date_naive();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_report(&client, &cfg, today, &mut out).await?;
    out.flush()?;
    Ok(())
}

/// Print the report for `date`: title, one block per ranked event, footer.
///
/// Fetch failures and bad odds skip the affected work and are logged; only
/// writing to `out` can fail the run.
async fn run_report<S, W>(source: &S, cfg: &Config, date: NaiveDate, out: &mut W) -> Result<()>
where
    S: OddsSource,
    W: Write,
{
    report::write_title(out, &cfg.report_title, date)?;

    let window = DayWindow::for_date(date);
    let raw = match source.fetch_events(&window).await {
        Ok(raw) => raw,
        Err(e) => {
            error!("Failed to retrieve events for {}-{}: {e}", window.start, window.end);
            Vec::new()
        }
    };
    let events = filter_events(raw, &cfg.tournament_filter);
    info!("{} events match {:?}", events.len(), cfg.tournament_filter);

    for event in &events {
        let payload = match source.fetch_markets(&event.id).await {
            Ok(p) => p,
            Err(e) => {
                warn!(event_id = %event.id, "Failed to retrieve markets for event {}: {e}", event.id);
                continue;
            }
        };

        match rank_event(&payload, cfg) {
            Ok(Some(ranking)) => report::write_event(out, event, &ranking)?,
            Ok(None) => info!(event_id = %event.id, "No correct-score odds, skipping"),
            Err(e @ AppError::InvalidOdds { .. }) => {
                error!(event_id = %event.id, "Skipping {} vs {}: {e}", event.home, event.away);
            }
            Err(e) => return Err(e),
        }
    }

    report::write_footer(out, &cfg.report_footer)?;
    Ok(())
}
