//! Album queries against PostgreSQL

use crate::schema::{sql, AlbumRow};
use crate::PgAlbumStore;
use album_core::{Album, AlbumId, AlbumStore, NewAlbum, StoreError, StoreResult};
use tracing::{debug, instrument, warn};

#[async_trait::async_trait]
impl AlbumStore for PgAlbumStore {
    fn name(&self) -> &str {
        "postgres"
    }

    /// Query for multiple rows. The row stream is drained and dropped
    /// before returning, on success and on error alike.
    #[instrument(skip(self))]
    async fn albums_by_artist(&mut self, artist: &str) -> StoreResult<Vec<Album>> {
        let rows = sqlx::query_as::<_, AlbumRow>(sql::ALBUMS_BY_ARTIST)
            .bind(artist)
            .fetch_all(&mut self.conn)
            .await
            .map_err(|e| StoreError::query("albums_by_artist", artist, e))?;

        let albums: Vec<Album> = rows.into_iter().map(Album::from).collect();
        debug!("Retrieved {} albums for artist {:?}", albums.len(), artist);
        Ok(albums)
    }

    #[instrument(skip(self))]
    async fn album_by_id(&mut self, id: AlbumId) -> StoreResult<Album> {
        let row = sqlx::query_as::<_, AlbumRow>(sql::ALBUM_BY_ID)
            .bind(id)
            .fetch_optional(&mut self.conn)
            .await
            .map_err(|e| StoreError::query("album_by_id", id, e))?;

        match row {
            Some(row) => Ok(row.into()),
            None => {
                debug!("No album with id {}", id);
                Err(StoreError::NotFound { id })
            }
        }
    }

    #[instrument(skip(self, album), fields(title = %album.title, artist = %album.artist))]
    async fn add_album(&mut self, album: &NewAlbum) -> StoreResult<AlbumId> {
        let id: i64 = sqlx::query_scalar(sql::INSERT_ALBUM)
            .bind(&album.title)
            .bind(&album.artist)
            .bind(album.price)
            .fetch_one(&mut self.conn)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db) = &e {
                    warn!(code = ?db.code(), "Insert rejected by database");
                }
                StoreError::write("add_album", e)
            })?;

        debug!("Inserted album {}", id);
        Ok(id)
    }
}
