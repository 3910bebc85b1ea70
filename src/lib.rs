pub mod config;
pub mod core;
pub mod portfolio;
pub mod prices;
pub mod providers;
pub mod server;
pub mod store;

use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::{AppConfig, PriceSourceKind};
use crate::core::currency::RateSource;
use crate::core::price::PriceSource;
use crate::portfolio::PortfolioService;
use crate::prices::PriceService;
use crate::providers::doviz_provider::DovizProvider;
use crate::providers::exchange_rate::ExchangeRateApi;
use crate::providers::harem_provider::HaremProvider;
use crate::server::{AppState, app_router};
use crate::store::{KeyValueCollection, disk::FjallCollection, memory::MemoryCollection};

/// Builds the shared application state from a resolved configuration:
/// the selected price-source strategy, the supplementary rate source, and
/// the portfolio store.
pub fn build_state(config: &AppConfig) -> Result<Arc<AppState>> {
    let exchange_base = config
        .providers
        .exchange_rate
        .as_ref()
        .map_or("https://api.exchangerate-api.com", |p| p.base_url.as_str());
    let rates: Arc<dyn RateSource> = Arc::new(ExchangeRateApi::new(exchange_base));

    let source: Arc<dyn PriceSource> = match config.source {
        PriceSourceKind::Harem => {
            let base_url = config
                .providers
                .harem
                .as_ref()
                .map_or("https://harem-altin-live-gold-price-data.p.rapidapi.com", |p| {
                    p.base_url.as_str()
                });
            Arc::new(HaremProvider::new(base_url, config.api_key(), rates))
        }
        PriceSourceKind::Doviz => {
            let base_url = config.providers.doviz.as_ref().map_or(
                "https://gold-and-foreign-exchange-information-from-turkish-companies.p.rapidapi.com",
                |p| p.base_url.as_str(),
            );
            Arc::new(DovizProvider::new(base_url, config.api_key()))
        }
    };

    let collection: Arc<dyn KeyValueCollection> = match portfolio_store_path(config) {
        Some(path) => match FjallCollection::open(&path, "portfolio") {
            Ok(store) => Arc::new(store),
            Err(e) => {
                warn!(error = %e, "Failed to open portfolio store, using in-memory store");
                Arc::new(MemoryCollection::new())
            }
        },
        None => Arc::new(MemoryCollection::new()),
    };

    Ok(Arc::new(AppState {
        prices: PriceService::new(source),
        portfolio: PortfolioService::new(collection),
    }))
}

fn portfolio_store_path(config: &AppConfig) -> Option<PathBuf> {
    config
        .data_path
        .as_ref()
        .map(PathBuf::from)
        .or_else(|| AppConfig::default_data_path().ok())
}

pub async fn run(config_path: Option<&str>) -> Result<()> {
    info!("Sarraf price service starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let state = build_state(&config)?;
    let router = app_router(state, &config);

    let listener = tokio::net::TcpListener::bind(&config.server.bind_address).await?;
    info!("Listening on {}", config.server.bind_address);
    axum::serve(listener, router).await?;
    Ok(())
}
