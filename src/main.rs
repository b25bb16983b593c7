//! Veritask - validation service entry point

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use veritask::config::ValidatorConfig;
use veritask::server::{router, AppState};

#[derive(Parser, Debug)]
#[command(name = "veritask", about = "AI-assisted submission validation service")]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8787")]
    bind: String,

    /// Log level (env-filter syntax)
    #[arg(long, default_value = "info")]
    log: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(args.log))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ValidatorConfig::from_env();
    if !config.has_api_key() {
        tracing::warn!(
            "no inference credential configured; requests will answer 503 until {} is set",
            veritask::config::API_KEY_ENV
        );
    }
    tracing::info!(model = %config.model, bind = %args.bind, "starting validation service");

    let state = AppState::from_config(config);
    let listener = tokio::net::TcpListener::bind(&args.bind).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}
