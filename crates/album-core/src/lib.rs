//! Core record types and the storage interface for the album catalog
//!
//! This crate knows nothing about PostgreSQL. It defines what an album is,
//! what a store can do with albums, and how store failures are reported.

pub mod error;
pub mod memory;
pub mod store;
pub mod types;

pub use error::*;
pub use memory::*;
pub use store::*;
pub use types::*;
