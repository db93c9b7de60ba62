//! Binary crate for the greeting HTTP service.
//!
//! This crate focuses on:
//! - Process bootstrap (logging, CLI arguments, environment config)
//! - The HTTP surface around `greet-core`

use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use greet_core::{Config, GreetingService};
use greet_server::http;

/// Greeting HTTP service.
#[derive(Debug, Parser)]
#[command(name = "greet-server", version, about = "Greeting HTTP service")]
struct Args {
    /// Address to listen on.
    #[arg(long, default_value = "0.0.0.0:8000")]
    listen: SocketAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = env_logger::Env::default().default_filter_or("info");
    env_logger::init_from_env(env);

    let args = Args::parse();

    let config = Config::from_env()?;
    log::info!(
        "Resolved config: geo lookup '{}', weather lookup '{}', default visitor name '{}'",
        config.geo_lookup,
        config.weather_lookup,
        config.default_visitor_name
    );

    let service = GreetingService::from_config(&config)?;
    let app = http::router(service);

    let listener = tokio::net::TcpListener::bind(args.listen)
        .await
        .with_context(|| format!("Failed to bind {}", args.listen))?;
    log::info!("Server listening on {}", args.listen);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
