//! Pencari bot binary.
//!
//! Loads environment configuration, wires the cache, search client, and
//! Telegram transport together, and polls for updates until the process
//! is stopped.

use pencari_bot::{BotConfig, Dispatcher, TelegramClient};
use pencari_cache::SearchCache;
use pencari_search::SearchClient;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A local .env is honored when present.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .init();

    // Missing required configuration is a startup diagnostic, not a crash.
    let config = match BotConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            error!(error = %error, "Configuration incomplete, not starting");
            return;
        }
    };

    let telegram = match TelegramClient::new(config.bot_token()) {
        Ok(telegram) => telegram,
        Err(error) => {
            error!(error = %error, "Failed to initialize Telegram client");
            return;
        }
    };

    let cache = Arc::new(SearchCache::new());
    let search = match SearchClient::new(
        config.api_url(),
        config.credentials().clone(),
        cache.clone(),
    ) {
        Ok(search) => search,
        Err(error) => {
            error!(error = %error, "Failed to initialize search client");
            return;
        }
    };

    info!(api_url = %config.api_url(), "Starting pencari bot");
    Dispatcher::new(telegram, search, cache, *config.results_per_page())
        .run()
        .await;
}
