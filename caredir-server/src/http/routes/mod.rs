//! Route handlers, one module per resource:
//! - root: greeting
//! - patients: list and first-name filter
//! - providers: list and specialty filter

pub mod patients;
pub mod providers;
pub mod root;
