use super::{Seed, Store, StoreError, StoreResult, TableId};
use log::info;
use std::path::{Path, PathBuf};

/// Where a store's initial table contents come from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SeedSource {
    /// Catalog bundled with the crate.
    #[default]
    Embedded,
    /// All tables start empty.
    Empty,
    /// JSON seed document on disk.
    File(PathBuf),
}

/// Opens a store seeded with the bundled catalog.
pub fn open_store() -> StoreResult<Store> {
    open_store_with(&SeedSource::Embedded)
}

/// Opens a store with every table empty.
pub fn open_store_empty() -> Store {
    Store::new()
}

/// Opens a store seeded from a JSON file.
pub fn open_store_from_path(path: impl AsRef<Path>) -> StoreResult<Store> {
    open_store_with(&SeedSource::File(path.as_ref().to_path_buf()))
}

pub fn open_store_with(source: &SeedSource) -> StoreResult<Store> {
    let seed = match source {
        SeedSource::Embedded => Seed::embedded()?,
        SeedSource::Empty => Seed::default(),
        SeedSource::File(path) => {
            let text = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;
            Seed::from_json(&text)?
        }
    };

    let store = Store::from_seed(seed)?;
    info!(
        "event=store_open module=store status=ok source={} products={} orders={} auctions={} customers={}",
        source_label(source),
        store.len(TableId::Products),
        store.len(TableId::Orders),
        store.len(TableId::Auctions),
        store.len(TableId::Customers),
    );
    Ok(store)
}

fn source_label(source: &SeedSource) -> &'static str {
    match source {
        SeedSource::Embedded => "embedded",
        SeedSource::Empty => "empty",
        SeedSource::File(_) => "file",
    }
}
