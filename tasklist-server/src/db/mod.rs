//! Database layer - connection pool, schema and repositories
//!
//! # Design Principles
//!
//! - Connection pool shared by all requests - no Arc<Mutex<Connection>>
//! - One statement per repository call, no transactions
//! - Zero matched rows on get/update/delete is `DbError::NotFound`

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options, Database};
pub use repos::*;
