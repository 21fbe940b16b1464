//! Seed data loading for the in-memory collections
//!
//! The service has no database; its collections are seeded once at process
//! start from static JSON array files. This module resolves and parses those
//! files.

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{SeedError, SeedResult};

/// Resolve a seed file path
///
/// Tries the path as given first, then relative to the workspace root, so
/// that binaries and tests behave the same regardless of working directory.
fn resolve(path: &Path) -> PathBuf {
    if path.exists() {
        return path.to_path_buf();
    }

    let mut fallback = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    fallback.pop();
    fallback.pop();
    fallback.push(path);
    fallback
}

/// Load a seed collection from a JSON array file
///
/// # Arguments
///
/// * `path` - Path of the seed file, absolute or workspace-relative
///
/// # Returns
///
/// * `SeedResult<Vec<T>>` - The parsed items, in file order, or an error
pub fn load_collection<T: DeserializeOwned>(path: &Path) -> SeedResult<Vec<T>> {
    let resolved = resolve(path);

    let raw = std::fs::read_to_string(&resolved).map_err(|e| SeedError::Read {
        path: resolved.clone(),
        source: e,
    })?;

    let items: Vec<T> = serde_json::from_str(&raw).map_err(|e| SeedError::Parse {
        path: resolved.clone(),
        source: e,
    })?;

    info!(
        "Loaded {} seed items from {}",
        items.len(),
        resolved.display()
    );

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_collection_missing_file() {
        let result = load_collection::<serde_json::Value>(Path::new("data/no_such_file.json"));
        assert!(matches!(result, Err(SeedError::Read { .. })));
    }
}
