//! PostgreSQL access layer for the album catalog
//!
//! Reads an existing `album` table - NO migrations.
//! Owns exactly one connection; there is no pool.

pub mod client;
pub mod queries;
pub mod schema;

pub use client::*;
pub use schema::*;

pub use album_core::{StoreError, StoreResult};
