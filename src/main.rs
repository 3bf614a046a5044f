use std::process::ExitCode;
use std::sync::Arc;

use pokedex_bot::config::Config;
use pokedex_bot::database::{self, PgCatalog};
use pokedex_bot::handler::Handler;
use pokedex_bot::AppState;
use serenity::model::gateway::GatewayIntents;
use serenity::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Nothing is started until every setting has parsed.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(target = "startup", error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };
    info!(target = "startup", ?config, "configuration loaded");

    let pool = match database::init::connect(&config.database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            error!(target = "startup", error = %e, "could not connect to the catalog database");
            return ExitCode::FAILURE;
        }
    };
    let app_state = Arc::new(AppState::new(
        &config,
        Arc::new(PgCatalog::new(pool.clone())),
    ));

    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT;

    let mut client = match Client::builder(&config.discord_token, intents)
        .event_handler(Handler {
            allowed_guild_id: config.allowed_guild_id,
        })
        .await
    {
        Ok(client) => client,
        Err(e) => {
            error!(target = "startup", error = ?e, "error creating the Discord client");
            pool.close().await;
            return ExitCode::FAILURE;
        }
    };

    client.data.write().await.insert::<AppState>(app_state);

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!(target = "shutdown", "ctrl-c received, shutting down shards");
            shard_manager.shutdown_all().await;
        }
    });

    let outcome = client.start().await;
    pool.close().await;
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(target = "shutdown", error = ?e, "client error");
            ExitCode::FAILURE
        }
    }
}
