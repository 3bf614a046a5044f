//! Directory scan: every save file is read on every lookup. There is no index; the save
//! directory is small and a stale answer is worse than a slow one.

use super::archive;
use super::extract::{AcquisitionSet, TextExtractor};
use crate::constants::SAVE_FILE_EXTENSION;
use crate::error::PokedexError;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

pub fn is_save_file(name: &str) -> bool {
    name.ends_with(SAVE_FILE_EXTENSION)
}

/// Save files in `dir`, sorted by name so scans log in a stable order.
async fn list_save_files(dir: &Path) -> Result<Vec<PathBuf>, PokedexError> {
    let dir_err = |source| PokedexError::SaveDirectory {
        path: dir.to_path_buf(),
        source,
    };
    let mut entries = tokio::fs::read_dir(dir).await.map_err(dir_err)?;
    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(dir_err)? {
        if is_save_file(&entry.file_name().to_string_lossy()) {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

/// Union of owned ids over every save in `dir` that belongs to `player_name`.
///
/// A file that cannot be read or inflated is logged and skipped. Only a directory
/// that cannot be listed fails the scan.
#[instrument(level = "debug", skip(dir), fields(save_dir = %dir.display()))]
pub async fn scan(dir: &Path, player_name: &str) -> Result<AcquisitionSet, PokedexError> {
    let extractor = match TextExtractor::for_player(player_name) {
        Ok(e) => e,
        Err(e) => {
            // Only reachable if the escaped name blows the regex size limit.
            warn!(target = "pokedex.scan", player = %player_name, error = %e, "player pattern rejected");
            return Ok(AcquisitionSet::new());
        }
    };

    let mut caught = AcquisitionSet::new();
    for path in list_save_files(dir).await? {
        let payload = match archive::decode(&path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(target = "pokedex.scan", error = %e, "skipping unreadable save");
                continue;
            }
        };
        let text = String::from_utf8_lossy(&payload);
        if let Some(ids) = extractor.extract(&text) {
            debug!(target = "pokedex.scan", file = %path.display(), owned = ids.len(), "save matched player");
            caught.extend(ids);
        }
    }

    info!(target = "pokedex.scan", player = %player_name, caught = caught.len(), "scan complete");
    Ok(caught)
}
