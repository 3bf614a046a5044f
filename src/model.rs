//! This module defines the shared data structures used throughout the application.
//! `AppState` is stored in Serenity's global context under its `TypeMapKey`.

use crate::commands::pokedex::manager::SessionManager;
use crate::config::Config;
use crate::database::CatalogStore;
use crate::error::PokedexError;
use crate::services::pokedex::{self, PageResult};
use serenity::prelude::TypeMapKey;
use std::path::PathBuf;
use std::sync::Arc;

/// The central, shared state of the application.
/// An `Arc<AppState>` is stored in the global context for access from any handler.
pub struct AppState {
    /// Reference catalog; the production value wraps the PostgreSQL pool.
    pub catalog: Arc<dyn CatalogStore>,
    /// Directory holding the `.pk` player saves.
    pub save_dir: PathBuf,
    pub page_size: usize,
    /// Text command prefix, e.g. `!`.
    pub prefix: String,
    /// Live paging sessions keyed by message.
    pub sessions: Arc<SessionManager>,
}

impl AppState {
    pub fn new(config: &Config, catalog: Arc<dyn CatalogStore>) -> Self {
        Self {
            catalog,
            save_dir: config.save_dir.clone(),
            page_size: config.page_size,
            prefix: config.prefix.clone(),
            sessions: Arc::new(SessionManager::new()),
        }
    }

    pub async fn from_ctx(ctx: &serenity::prelude::Context) -> Option<Arc<Self>> {
        ctx.data.read().await.get::<AppState>().cloned()
    }

    /// Run the full scan → query → page pipeline for one player.
    pub async fn lookup(&self, player_name: &str, page: i64) -> Result<PageResult, PokedexError> {
        pokedex::fetch_page(
            &self.save_dir,
            self.catalog.as_ref(),
            player_name,
            page,
            self.page_size,
        )
        .await
    }
}

impl TypeMapKey for AppState {
    type Value = Arc<AppState>;
}
