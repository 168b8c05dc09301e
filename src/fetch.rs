// src/fetch.rs
//! Where raw game pages come from. The pipeline only ever sees page text.

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::error::FetchError;
use crate::store::PageStore;

/// Raw markup of one game page by `game_id`.
pub trait Fetch: Send + Sync {
    fn fetch(&self, game_id: u32) -> Result<String, FetchError>;
}

/// Saved pages, `<dir>/<game_id>.html`.
pub struct DirFetcher {
    dir: PathBuf,
}

impl DirFetcher {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Fetch for DirFetcher {
    fn fetch(&self, game_id: u32) -> Result<String, FetchError> {
        let path = self.dir.join(format!("{game_id}.html"));
        match fs::read_to_string(&path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(FetchError::NotFound(path)),
            Err(e) => Err(e.into()),
        }
    }
}

/// Read-through page cache in front of another fetcher.
pub struct CachedFetcher<F> {
    inner: F,
    store: PageStore,
}

impl<F: Fetch> CachedFetcher<F> {
    pub fn new(inner: F, store: PageStore) -> Self {
        Self { inner, store }
    }
}

impl<F: Fetch> Fetch for CachedFetcher<F> {
    fn fetch(&self, game_id: u32) -> Result<String, FetchError> {
        if let Some(hit) = self.store.load(game_id) {
            logd!("Cache: hit for game {}", game_id);
            return Ok(hit);
        }
        let page = self.inner.fetch(game_id)?;
        // A failed cache write costs a refetch later, not this game.
        if let Err(e) = self.store.save(game_id, &page) {
            logw!("Cache: could not save game {}: {}", game_id, e);
        }
        Ok(page)
    }
}
