//! Repository implementations for task storage
//!
//! `TaskRepository` is the capability the service depends on:
//! - `PgTaskRepo` issues one parameterized statement per call
//! - `InMemoryTaskRepo` keeps the same contract without a database

pub mod memory;
pub mod tasks;

pub use memory::InMemoryTaskRepo;
pub use tasks::{PgTaskRepo, TaskRepository};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    pub(crate) fn task_not_found(id: i64) -> Self {
        Self::NotFound {
            resource: "task",
            id: id.to_string(),
        }
    }
}
