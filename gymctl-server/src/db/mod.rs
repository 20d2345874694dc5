//! Database layer - connection provider, table bootstrap and repositories
//!
//! # Design Principles
//!
//! - One connection acquired per request, released on drop
//! - Repositories borrow that connection; they never open their own
//! - Transactions only for the two-statement member delete

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_pool, create_pool_with_options, ConnectionProvider, DbConfig};
pub use repos::*;
