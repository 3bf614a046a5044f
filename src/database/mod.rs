//! This module acts as the hub for all database-related logic: pool setup, row types
//! and the catalog queries used by the lookup pipeline.

pub mod catalog;
pub mod init;
pub mod models;

pub use catalog::{CatalogStore, PgCatalog};
pub use init::DbPool;
