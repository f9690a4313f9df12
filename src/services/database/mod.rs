//! SQLite-backed preferences and event storage.

mod connection;
mod migrations;
mod schema;

pub use connection::Database;
