//! `storefront` - exercises the client core against a live backend.
//!
//! Reads configuration from `STOREFRONT__*` variables. If
//! `STOREFRONT_EMAIL` and `STOREFRONT_PASSWORD` are set, logs in and prints
//! the first catalog page, optionally filtered by the first argument.

use std::process::ExitCode;

use storefront_client::application::Storefront;
use storefront_client::config::{AppConfig, LogFormat, LoggingConfig};
use storefront_client::domain::account::LoginCredentials;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

fn init_tracing(config: &LoggingConfig) -> Result<(), BoxError> {
    let filter = config.env_filter()?;
    let registry = tracing_subscriber::registry().with(filter);
    match config.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?,
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()?,
    }
    Ok(())
}

async fn run() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    init_tracing(&config.logging)?;
    config.validate()?;

    let app = Storefront::new(&config)?;
    tracing::info!("Using backend {}", config.backend.base_url);

    let (Ok(email), Ok(password)) = (
        std::env::var("STOREFRONT_EMAIL"),
        std::env::var("STOREFRONT_PASSWORD"),
    ) else {
        tracing::info!("No credentials provided; set STOREFRONT_EMAIL and STOREFRONT_PASSWORD");
        return Ok(());
    };

    app.login(&LoginCredentials::new(email, password)).await?;

    let catalog = app.catalog();
    match std::env::args().nth(1) {
        Some(term) => catalog.set_search_term(&term).await?,
        None => catalog.start().await?,
    };

    let snapshot = catalog.snapshot();
    for product in &snapshot.products {
        println!("{:>10.2}  {}  ({})", product.price, product.title, product.primary_image().url);
    }
    if snapshot.has_next_page {
        println!("... more on page {}", snapshot.page + 1);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("storefront: {}", e);
            ExitCode::FAILURE
        }
    }
}
