#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use clap::Parser;
use datefact_core::{FactFetcher, NumbersApiClient, ProviderConfig};
use dioxus::desktop::{Config, WindowBuilder};

/// Global fact fetcher, built from command line + environment before launch
static FETCHER: OnceLock<Arc<FactFetcher>> = OnceLock::new();

/// Get the shared fact fetcher (set in `main` or a default-config fallback)
pub fn fact_fetcher() -> Arc<FactFetcher> {
    FETCHER.get().cloned().unwrap_or_else(|| {
        Arc::new(FactFetcher::new(Arc::new(NumbersApiClient::new(
            ProviderConfig::default(),
        ))))
    })
}

/// Date Fact - trivia about any calendar date
#[derive(Parser, Debug)]
#[command(name = "datefact-desktop")]
#[command(about = "Date Fact - pick a month and day, get a trivia fact")]
struct Args {
    /// RapidAPI key for the fact provider (falls back to DATEFACT_API_KEY)
    #[arg(short = 'k', long)]
    api_key: Option<String>,

    /// Override the fact provider endpoint (useful with a local stub)
    #[arg(long)]
    endpoint: Option<String>,

    /// Per-request timeout in seconds (no timeout when omitted)
    #[arg(long)]
    timeout_secs: Option<u64>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    // API key is injected configuration: flag first, then environment.
    // With neither, requests go out with an empty key and the provider's
    // rejection surfaces through the normal fetch-error path.
    let mut provider_config = match args.api_key {
        Some(key) => ProviderConfig::new(key),
        None => ProviderConfig::from_env().unwrap_or_else(|e| {
            tracing::warn!("no API key configured: {e}");
            ProviderConfig::default()
        }),
    };
    if let Some(endpoint) = args.endpoint {
        provider_config = provider_config.with_endpoint(endpoint);
    }
    if let Some(secs) = args.timeout_secs {
        provider_config = provider_config.with_timeout(Duration::from_secs(secs));
    }

    tracing::info!(endpoint = %provider_config.endpoint, "starting Date Fact");

    let client = NumbersApiClient::new(provider_config);
    let _ = FETCHER.set(Arc::new(FactFetcher::new(Arc::new(client))));

    // Phone-shaped window for the single screen
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Date Fact")
            .with_inner_size(dioxus::desktop::LogicalSize::new(420.0, 640.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
