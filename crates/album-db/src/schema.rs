//! Row types for the `album` table
//!
//! The table is created and populated outside this crate. Columns are read
//! positionally in the order (id, title, artist, price); every SELECT in
//! [`sql`] is built from the one `album_columns!` list that fixes this order.

use album_core::Album;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

/// Table names
pub mod tables {
    pub const ALBUM: &str = "album";
}

/// SELECT list matching [`AlbumRow`] positions, as a literal for `concat!`.
///
/// `id` may be INTEGER or SERIAL and `price` NUMERIC, neither of which
/// decodes into i64 / f64 directly, hence the casts.
macro_rules! album_columns {
    () => {
        "id::BIGINT AS id, title, artist, price::FLOAT8 AS price"
    };
}

pub const ALBUM_COLUMNS: &str = album_columns!();

/// Statements issued by the store. Every value is a bind parameter.
pub mod sql {
    pub const ALBUMS_BY_ARTIST: &str =
        concat!("SELECT ", album_columns!(), " FROM album WHERE artist = $1");

    pub const ALBUM_BY_ID: &str = concat!("SELECT ", album_columns!(), " FROM album WHERE id = $1");

    pub const INSERT_ALBUM: &str =
        "INSERT INTO album (title, artist, price) VALUES ($1, $2, $3) RETURNING id::BIGINT";
}

/// One decoded row of the album table
#[derive(Debug, Clone, PartialEq)]
pub struct AlbumRow {
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl<'r> FromRow<'r, PgRow> for AlbumRow {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get(0)?,
            title: row.try_get(1)?,
            artist: row.try_get(2)?,
            price: row.try_get(3)?,
        })
    }
}

impl From<AlbumRow> for Album {
    fn from(row: AlbumRow) -> Self {
        Album {
            id: row.id,
            title: row.title,
            artist: row.artist,
            price: row.price,
        }
    }
}
