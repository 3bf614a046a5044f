//! Pokedex lookup service: scan saves, query the uncaught remainder, cut one page.
//!
//! Nothing is cached between calls. Every lookup (and every page turn) rescans the
//! save directory so a freshly caught Pokemon shows up on the next click.

use crate::constants::TOTAL_UNIVERSE_SIZE;
use crate::database::CatalogStore;
use crate::database::models::CatalogEntry;
use crate::error::PokedexError;
use crate::pagination::paginate;
use crate::saves;
use std::path::Path;
use tracing::{info, instrument};

/// One rendered page of a player's uncaught list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult {
    pub player_name: String,
    pub caught: i64,
    /// Always `TOTAL_UNIVERSE_SIZE - caught`, regardless of catalog row count.
    pub uncaught: i64,
    pub total_pages: i64,
    pub current_page: i64,
    pub entries: Vec<CatalogEntry>,
}

/// A page past the end is shown as the last page.
fn settle_page(requested: i64, total_pages: i64) -> i64 {
    if total_pages > 0 && requested > total_pages {
        total_pages
    } else {
        requested
    }
}

#[instrument(level = "debug", skip(save_dir, catalog))]
pub async fn fetch_page(
    save_dir: &Path,
    catalog: &dyn CatalogStore,
    player_name: &str,
    page: i64,
    page_size: usize,
) -> Result<PageResult, PokedexError> {
    let caught = saves::scan(save_dir, player_name).await?;
    let uncaught_entries = catalog.complement(&caught).await?;

    let total = crate::pagination::total_pages(uncaught_entries.len(), page_size);
    let slice = paginate(&uncaught_entries, settle_page(page, total), page_size);

    let caught = caught.len() as i64;
    info!(
        target = "pokedex.lookup",
        player = %player_name,
        caught,
        page = slice.current_page,
        total_pages = slice.total_pages,
        "lookup complete"
    );
    Ok(PageResult {
        player_name: player_name.to_string(),
        caught,
        uncaught: TOTAL_UNIVERSE_SIZE - caught,
        total_pages: slice.total_pages,
        current_page: slice.current_page,
        entries: slice.items,
    })
}
