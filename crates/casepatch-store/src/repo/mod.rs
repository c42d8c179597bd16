//! Row mapping and the SQLite-backed case loader

pub mod loader;
pub mod rows;

pub use loader::SqliteCaseLoader;
pub use rows::FromSqlRow;
