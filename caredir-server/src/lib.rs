//! caredir-server: HTTP query gateway over the clinic directory
//!
//! Serves read-only patient and provider listings from a MySQL database
//! as rendered HTML tables.

pub mod db;
pub mod http;
pub mod view;

pub use db::{create_pool, DbError, DirectoryStore, MySqlDirectory, Patient, Provider};
pub use http::{build_router, run_server, AppState, ServerConfig};
