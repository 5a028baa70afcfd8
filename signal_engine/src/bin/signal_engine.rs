use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use market_feed::providers::binance::BinanceProvider;
use signal_engine::{
    config::EngineConfig, cooldown::CooldownRegistry, engine::SignalEngine, scanner,
    sinks::SignalSinks,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "ATR volatility signal scanner")]
struct Cli {
    /// Path to the engine config TOML; defaults apply when omitted.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Run a single scan cycle and exit.
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => EngineConfig::load_path(path)?,
        None => EngineConfig::default(),
    };

    let provider = BinanceProvider::new().context("build Binance provider")?;
    let registry = CooldownRegistry::load(&config.paths.registry)
        .context("load cooldown registry snapshot")?;
    let sinks = SignalSinks::new(config.paths.clone());

    let engine = SignalEngine::new(Box::new(provider), registry, sinks, config.clone());

    let symbols = match &config.symbols {
        Some(explicit) => explicit.clone(),
        None => engine
            .discover_symbols()
            .await
            .context("discover USDT symbol universe")?,
    };
    tracing::info!(
        symbols = symbols.len(),
        timeframes = config.timeframes.len(),
        "starting scan loop"
    );

    scanner::run(engine, symbols, cli.once).await
}
