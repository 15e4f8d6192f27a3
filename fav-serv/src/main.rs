use anyhow::Context;
use fav_serv::config::{init_env, Config};
use fav_serv::lookup::PlayerLookup;
use fav_serv::server::ApiServer;
use fav_serv::source::RiotSource;
use fav_serv::telemetry::init_tracing;
use fav_serv::AppState;
use riot_sdk::ddragon::{DataDragon, VERSIONS_URL};
use std::sync::Arc;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    init_env();
    init_tracing("info,sqlx=warn")?;

    let config = Config::from_env()?;

    let favorites = fav_db::Client::connect(&config.database_url, config.db_max_connections)
        .await
        .with_context(|| format!("Failed to open favorites db at {}", config.database_url))?;

    // resolved once, every icon URL for the lifetime of the process uses it
    let asset_version = DataDragon::with_versions_url(VERSIONS_URL, config.upstream_timeout)
        .context("Failed to build Data Dragon client")?
        .latest_version()
        .await;
    tracing::info!("using data dragon version {}", asset_version);

    let lookup = match &config.riot_api_key {
        Some(key) => {
            let client = riot_sdk::Client::new(key, config.upstream_timeout)
                .context("RIOT_API_KEY is not usable")?;
            let source = RiotSource::new(client, config.account_region, config.platform);
            Some(PlayerLookup::new(Arc::new(source), asset_version.clone()))
        }
        None => {
            tracing::warn!("RIOT_API_KEY not set, player lookups will answer 503");
            None
        }
    };

    let state = AppState {
        lookup,
        favorites,
        asset_version,
    };
    ApiServer::new(&config).run(state).await
}
