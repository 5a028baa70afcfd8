use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log_viewer::report;
use signal_log::{AlertKind, parse_alerts};

#[derive(Parser)]
#[command(version, about = "Signal log dashboard (read-only)")]
struct Cli {
    /// Main signal text log.
    #[arg(long, default_value = "signals_log.txt")]
    log: PathBuf,

    /// Watchlist signal text log.
    #[arg(long, default_value = "watchlist_signals_log.txt")]
    watchlist_log: PathBuf,

    /// Re-read and re-render every N seconds instead of exiting.
    #[arg(long, value_name = "SECS")]
    watch: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    loop {
        render(&cli)?;
        match cli.watch {
            Some(secs) => std::thread::sleep(std::time::Duration::from_secs(secs)),
            None => return Ok(()),
        }
    }
}

fn render(cli: &Cli) -> anyhow::Result<()> {
    // A missing log just means the engine has not fired anything yet.
    let text = match std::fs::read_to_string(&cli.log) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            println!("No signal log at {} yet. Run the engine first.", cli.log.display());
            return Ok(());
        }
        Err(e) => return Err(e).context(format!("read {}", cli.log.display())),
    };

    let records = parse_alerts(&text, AlertKind::Standard);
    if records.is_empty() {
        println!("No complete signals in {} yet.", cli.log.display());
        return Ok(());
    }

    println!("=== Latest signals ===");
    println!("{}", report::ticker_strip(&records, 10));
    println!();
    println!("=== Signals ({}) ===", records.len());
    println!("{}", report::signals_table(&records));

    let watchlist = std::fs::read_to_string(&cli.watchlist_log)
        .map(|text| parse_alerts(&text, AlertKind::Watchlist))
        .unwrap_or_default();
    if !watchlist.is_empty() {
        println!();
        println!("=== Watchlist signals ({}) ===", watchlist.len());
        println!("{}", report::signals_table(&watchlist));
    }

    println!();
    println!("=== Expected profit over time ===");
    for (time, profit) in report::profit_history(&records) {
        println!("{}  {profit:.2}%", time.format(signal_log::render::TIME_FORMAT));
    }

    println!();
    println!("=== Signal frequency ===");
    println!("{}", report::frequency_chart(&records));
    println!();

    Ok(())
}
