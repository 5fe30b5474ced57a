//! Album record types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Primary key of an album row (assigned by storage)
pub type AlbumId = i64;

/// One row of the album catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl Album {
    /// Drop the identifier, e.g. to compare against what was inserted
    pub fn to_new(&self) -> NewAlbum {
        NewAlbum {
            title: self.title.clone(),
            artist: self.artist.clone(),
            price: self.price,
        }
    }
}

impl fmt::Display for Album {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{} {:?} {:?} {:.2}}}",
            self.id, self.title, self.artist, self.price
        )
    }
}

/// An album that has not been stored yet
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewAlbum {
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl NewAlbum {
    pub fn new(title: impl Into<String>, artist: impl Into<String>, price: f64) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            price,
        }
    }

    /// Attach the storage-assigned identifier
    pub fn with_id(self, id: AlbumId) -> Album {
        Album {
            id,
            title: self.title,
            artist: self.artist,
            price: self.price,
        }
    }
}
