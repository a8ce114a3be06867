//! tasklist-server: task CRUD over HTTP, backed by PostgreSQL
//!
//! Layers, outermost first:
//! - `http`: decode and validate requests, map errors to status codes
//! - `service`: `TaskService` seam between transport and storage
//! - `db`: `TaskRepository` implementations and the pool handle

pub mod db;
pub mod http;
pub mod models;
pub mod service;

pub use db::{Database, DbError, InMemoryTaskRepo, PgTaskRepo, TaskRepository};
pub use http::{build_router, run_server, AppState, ServerConfig};
pub use models::{NewTask, Task};
pub use service::{TaskManager, TaskService};
