//! Storage interface for album lookups

use crate::{Album, AlbumId, NewAlbum, StoreResult};

/// A single-user handle onto album storage.
///
/// Every operation takes `&mut self`: the handle serves one caller at a time,
/// and a caller that wants concurrency has to open more handles.
#[async_trait::async_trait]
pub trait AlbumStore: Send {
    /// Backend name for logs
    fn name(&self) -> &str;

    /// All albums whose artist equals `artist` exactly.
    /// An empty result is not an error. Order is unspecified.
    async fn albums_by_artist(&mut self, artist: &str) -> StoreResult<Vec<Album>>;

    /// The album with primary key `id`, or `StoreError::NotFound`
    async fn album_by_id(&mut self, id: AlbumId) -> StoreResult<Album>;

    /// Insert `album` and return the identifier storage assigned to it
    async fn add_album(&mut self, album: &NewAlbum) -> StoreResult<AlbumId>;
}
