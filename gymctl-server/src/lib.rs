//! gymctl-server: members and workout sessions over HTTP+JSON
//!
//! Each endpoint validates its input, acquires one Postgres connection,
//! runs a single statement (two for the cascading member delete) and maps
//! the outcome to a status code and JSON body.

pub mod db;
pub mod http;
pub mod models;

pub use db::{ConnectionProvider, DbConfig, DbError};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
