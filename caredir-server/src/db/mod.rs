//! Database layer - connection pool and directory store
//!
//! A small MySqlPool replaces the single shared connection a naive gateway
//! would hold. All queries are fixed parameterized SELECTs; values are bound,
//! never concatenated into the query text.

pub mod directory;
pub mod pool;

pub use directory::{DbError, DirectoryStore, MySqlDirectory, Patient, Provider};
pub use pool::create_pool;

#[cfg(test)]
pub(crate) use directory::testing;
