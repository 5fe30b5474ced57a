//! Album lookup driver
//!
//! Runs the two catalog lookups against any [`AlbumStore`] and renders the
//! result. `main` wires this to PostgreSQL; tests wire it to [`MemoryStore`].
//!
//! [`MemoryStore`]: album_core::MemoryStore

use album_config::{AppConfig, OutputFormat, QueryConfig};
use album_core::{Album, AlbumStore};
use album_db::PgAlbumStore;
use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

/// Outcome of one driver run
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Report {
    pub artist: String,
    pub albums: Vec<Album>,
    pub album: Album,
}

impl Report {
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => {
                serde_json::to_string_pretty(self).context("Failed to serialize report")
            }
        }
    }

    fn render_text(&self) -> String {
        let albums: Vec<String> = self.albums.iter().map(ToString::to_string).collect();
        format!(
            "Albums found: [{}]\nAlbum found: {}",
            albums.join(" "),
            self.album
        )
    }
}

/// Open and verify the database connection named by `config`.
/// A missing URL is a config error; anything wrong with the URL itself or
/// the server behind it is a `StoreError::Connection`.
pub async fn connect(config: &AppConfig) -> Result<PgAlbumStore> {
    let database_url = config.database_url()?;
    info!(
        database = config.redacted_database_url().as_deref().unwrap_or(""),
        "Connecting"
    );

    let mut store = PgAlbumStore::connect(database_url).await?;
    store.ping().await.context("Database ping failed")?;
    info!(peer = store.target(), "Connection verified");
    Ok(store)
}

/// Look up every album by `query.artist`, then the album `query.album_id`.
/// Stops at the first failure.
pub async fn run<S>(store: &mut S, query: &QueryConfig) -> Result<Report>
where
    S: AlbumStore + ?Sized,
{
    let albums = store
        .albums_by_artist(&query.artist)
        .await
        .context("Artist lookup failed")?;
    info!(
        backend = store.name(),
        artist = %query.artist,
        count = albums.len(),
        "Albums found"
    );

    let album = store
        .album_by_id(query.album_id)
        .await
        .context("Album lookup failed")?;
    info!(backend = store.name(), id = album.id, "Album found");

    Ok(Report {
        artist: query.artist.clone(),
        albums,
        album,
    })
}
