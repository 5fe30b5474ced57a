//! In-process album store for tests and offline runs

use crate::{Album, AlbumId, AlbumStore, NewAlbum, StoreError, StoreResult};

/// Vec-backed store with the same lookup semantics as the database
#[derive(Debug, Clone)]
pub struct MemoryStore {
    rows: Vec<Album>,
    /// `None` once the id space is used up
    next_id: Option<AlbumId>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            next_id: Some(1),
        }
    }

    /// Seed with pre-existing rows. New ids continue after the largest seeded id.
    pub fn with_albums(rows: impl IntoIterator<Item = Album>) -> Self {
        let rows: Vec<Album> = rows.into_iter().collect();
        let next_id = rows.iter().map(|a| a.id).max().unwrap_or(0).checked_add(1);
        Self { rows, next_id }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl AlbumStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn albums_by_artist(&mut self, artist: &str) -> StoreResult<Vec<Album>> {
        let albums: Vec<Album> = self
            .rows
            .iter()
            .filter(|a| a.artist == artist)
            .cloned()
            .collect();

        tracing::debug!(artist, count = albums.len(), "albums_by_artist");
        Ok(albums)
    }

    async fn album_by_id(&mut self, id: AlbumId) -> StoreResult<Album> {
        self.rows
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    async fn add_album(&mut self, album: &NewAlbum) -> StoreResult<AlbumId> {
        let id = self
            .next_id
            .ok_or_else(|| StoreError::write("add_album", "album ids exhausted"))?;
        self.next_id = id.checked_add(1);
        self.rows.push(album.clone().with_id(id));
        Ok(id)
    }
}
