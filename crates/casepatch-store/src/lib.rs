//! casepatch store - SQLite persistence for the payments and refunds stores
//!
//! Provides:
//! - Connection helpers and the `Stores` pair
//! - Embedded migrations per store, checksummed
//! - `SqliteCaseLoader`, the `CaseLoader` over both stores
//! - YAML seed fixtures and their importer

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;
pub mod seed;

pub use db::Stores;
pub use errors::Result;
pub use repo::SqliteCaseLoader;
