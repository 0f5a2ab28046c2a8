use anyhow::{Context, Result};
use clap::Parser;
use speechpad::{create_router, AppState, Config};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "speechpad", about = "Self-hosted speech-to-text and text-to-speech demo page")]
struct Args {
    /// Config file path, without extension
    #[arg(long, default_value = "config/speechpad")]
    config: String,

    /// Override the configured bind address
    #[arg(long)]
    bind: Option<String>,

    /// Override the configured port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let mut cfg = Config::load(&args.config)?;
    if let Some(bind) = args.bind {
        cfg.service.http.bind = bind;
    }
    if let Some(port) = args.port {
        cfg.service.http.port = port;
    }

    info!("{} v0.1.0", cfg.service.name);
    info!(
        "Speech locale: {} (continuous={}, interim_results={})",
        cfg.speech.locale, cfg.speech.continuous, cfg.speech.interim_results
    );

    let state = AppState::new(cfg.service.name.clone(), cfg.speech.clone());
    let app = create_router(state);

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Host page available at http://{}", addr);

    axum::serve(listener, app)
        .await
        .context("HTTP server failed")?;

    Ok(())
}
