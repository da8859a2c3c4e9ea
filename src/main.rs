//! TVJ EPG Converter — Binary Entrypoint
//! Fetches the 1SpotMedia programme timeline for Television Jamaica and
//! writes the XMLTV guide file. One shot per invocation; scheduling is the
//! operator's business (cron, systemd timer, container loop).

use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tvj_epg::runlog::RunClock;
use tvj_epg::AppConfig;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_target(false))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();

    init_tracing();

    let cfg = AppConfig::from_env();
    let clock = RunClock::from_env();

    let run_start = chrono::Utc::now();
    info!(tz = clock.tz_name(), started = %clock.format(run_start), "EPG run started");

    let summary = tvj_epg::run(&cfg).await?;

    let finished = chrono::Utc::now();
    info!(
        output = %summary.output_file.display(),
        programmes = summary.programmes,
        skipped = summary.skipped,
        finished = %clock.format(finished),
        "XMLTV written"
    );
    info!(
        last_run = %clock.format(run_start),
        updated_until = %clock.format(summary.updated_until),
        "EPG summary"
    );

    Ok(())
}
